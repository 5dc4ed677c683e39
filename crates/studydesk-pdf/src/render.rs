//! End-to-end rendering: markup in, stored PDF out.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use studydesk_core::{defaults, Note, Result};

use crate::markup::normalize;
use crate::sink::DocumentSink;
use crate::strategy::ExportStrategy;
use crate::writer::encode;

/// The three note fields a render reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSource {
    pub subject_name: String,
    pub title: String,
    /// Editor markup; normalized before layout.
    pub content: String,
}

impl NoteSource {
    pub fn new(
        subject_name: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            subject_name: subject_name.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

impl From<&Note> for NoteSource {
    fn from(note: &Note) -> Self {
        Self::new(&note.subject_name, &note.title, &note.content)
    }
}

/// Outcome of a completed render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPdf {
    /// Location relative to the uploads root.
    pub relative_path: PathBuf,
    /// Location on disk as reported by the sink.
    pub file_path: PathBuf,
    pub page_count: usize,
    pub byte_len: usize,
}

impl RenderedPdf {
    /// URL path under which the static uploads route serves the file.
    pub fn public_path(&self) -> String {
        public_path(&self.relative_path)
    }
}

/// Join `relative` onto the uploads URL prefix with forward slashes.
pub fn public_path(relative: &Path) -> String {
    let mut out = String::from(defaults::UPLOADS_URL_PREFIX);
    for part in relative.iter() {
        out.push('/');
        out.push_str(&part.to_string_lossy());
    }
    out
}

/// Renders notes with a chosen [`ExportStrategy`] and hands the bytes to a
/// [`DocumentSink`].
///
/// Each call builds its own document; a renderer can be shared across
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct PdfRenderer<S> {
    sink: S,
}

impl<S: DocumentSink> PdfRenderer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Normalize, lay out, encode and store one note.
    ///
    /// Returns only after the sink has finished writing; a sink failure is
    /// returned as-is.
    #[instrument(
        skip(self, strategy, source),
        fields(subsystem = "render", component = "renderer", op = "render", strategy = strategy.name())
    )]
    pub async fn render(
        &self,
        strategy: &dyn ExportStrategy,
        source: &NoteSource,
    ) -> Result<RenderedPdf> {
        let start = Instant::now();
        let relative_path = strategy.destination(&source.subject_name, &source.title);

        let body = normalize(&source.content);
        let document = strategy.compose(&source.subject_name, &source.title, &body)?;
        let page_count = document.page_count();
        let bytes = encode(&document);
        debug!(page_count, byte_len = bytes.len(), "Document encoded");

        let file_path = match self.sink.deliver(&relative_path, &bytes).await {
            Ok(path) => path,
            Err(e) => {
                warn!(output_path = %relative_path.display(), error = %e, "Sink failed");
                return Err(e);
            }
        };

        info!(
            output_path = %file_path.display(),
            page_count,
            duration_ms = start.elapsed().as_millis() as u64,
            "PDF written"
        );

        Ok(RenderedPdf {
            relative_path,
            file_path,
            page_count,
            byte_len: bytes.len(),
        })
    }
}
