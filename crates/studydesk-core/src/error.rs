//! Error types for studydesk.

use thiserror::Error;

/// Result type alias using studydesk's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for studydesk operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(uuid::Uuid),

    /// Folder not found
    #[error("Folder not found: {0}")]
    FolderNotFound(uuid::Uuid),

    /// Document layout or encoding failed
    #[error("Render error: {0}")]
    Render(String),

    /// The output sink reported an error instead of finishing
    #[error("Sink error: {0}")]
    Sink(std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True for the variants that mean "the addressed record does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_) | Error::NoteNotFound(_) | Error::FolderNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("test resource".to_string());
        assert_eq!(err.to_string(), "Not found: test resource");
    }

    #[test]
    fn test_error_display_note_not_found() {
        let id = Uuid::nil();
        let err = Error::NoteNotFound(id);
        assert_eq!(err.to_string(), format!("Note not found: {}", id));
    }

    #[test]
    fn test_error_display_folder_not_found() {
        let id = Uuid::nil();
        let err = Error::FolderNotFound(id);
        assert_eq!(err.to_string(), format!("Folder not found: {}", id));
    }

    #[test]
    fn test_error_display_render() {
        let err = Error::Render("no pages".to_string());
        assert_eq!(err.to_string(), "Render error: no pages");
    }

    #[test]
    fn test_error_display_sink() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = Error::Sink(io_err);
        assert_eq!(err.to_string(), "Sink error: read-only");
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("empty name".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty name");
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, Error::Database(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::NotFound("x".into()).is_not_found());
        assert!(Error::NoteNotFound(Uuid::nil()).is_not_found());
        assert!(Error::FolderNotFound(Uuid::nil()).is_not_found());
        assert!(!Error::InvalidInput("x".into()).is_not_found());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
