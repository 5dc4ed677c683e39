//! Destinations for encoded documents.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use studydesk_core::{Error, Result};

/// Receives the bytes of a finished document.
///
/// `deliver` resolving `Ok` is the completion signal: the bytes have been
/// written and flushed. Any failure resolves to [`Error::Sink`]. Nothing is
/// rolled back on failure, so a partial file may remain.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Store `bytes` under `relative` and return where they ended up.
    async fn deliver(&self, relative: &Path, bytes: &[u8]) -> Result<PathBuf>;
}

/// Writes documents below a root directory, creating parent directories
/// as needed.
#[derive(Debug, Clone)]
pub struct FilesystemSink {
    root: PathBuf,
}

impl FilesystemSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `relative` under the root. Paths that would leave the root
    /// are rejected.
    fn full_path(&self, relative: &Path) -> Result<PathBuf> {
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || relative.as_os_str().is_empty() {
            return Err(Error::InvalidInput(format!(
                "output path must stay inside the uploads directory: {}",
                relative.display()
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl DocumentSink for FilesystemSink {
    async fn deliver(&self, relative: &Path, bytes: &[u8]) -> Result<PathBuf> {
        let full_path = self.full_path(relative)?;
        debug!(full_path = %full_path.display(), size = bytes.len(), "sink: deliver");

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                warn!(parent = %parent.display(), error = %e, "sink: create_dir_all failed");
                Error::Sink(e)
            })?;
        }

        let mut file = fs::File::create(&full_path).await.map_err(|e| {
            warn!(full_path = %full_path.display(), error = %e, "sink: File::create failed");
            Error::Sink(e)
        })?;
        file.write_all(bytes).await.map_err(|e| {
            warn!(error = %e, "sink: write_all failed");
            Error::Sink(e)
        })?;
        file.flush().await.map_err(Error::Sink)?;

        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deliver_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FilesystemSink::new(dir.path());

        let path = sink
            .deliver(Path::new("notes/Physics/Momentum.pdf"), b"%PDF-1.7")
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("notes/Physics/Momentum.pdf"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"%PDF-1.7");
    }

    #[tokio::test]
    async fn test_deliver_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FilesystemSink::new(dir.path());
        let rel = Path::new("a/b.pdf");

        sink.deliver(rel, b"first version").await.unwrap();
        let path = sink.deliver(rel, b"second").await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_blocked_directory_is_sink_error() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where a directory is needed
        tokio::fs::write(dir.path().join("notes"), b"").await.unwrap();
        let sink = FilesystemSink::new(dir.path());

        let err = sink
            .deliver(Path::new("notes/x/y.pdf"), b"data")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Sink(_)));
    }

    #[tokio::test]
    async fn test_escaping_paths_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FilesystemSink::new(dir.path());

        for bad in ["../outside.pdf", "/etc/passwd", "notes/../../x.pdf", ""] {
            let err = sink.deliver(Path::new(bad), b"x").await.unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "accepted {:?}", bad);
        }
    }
}
