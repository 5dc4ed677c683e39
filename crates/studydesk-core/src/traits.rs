//! Repository traits implemented by the persistence layer.
//!
//! Handlers depend on these interfaces rather than on a concrete database,
//! which keeps the HTTP layer testable.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// NOTE REPOSITORY TRAITS
// =============================================================================

/// Repository for note operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a note owned by the default user and return its generated ID.
    async fn insert(&self, req: CreateNoteRequest) -> Result<Uuid>;

    /// List all notes, newest first.
    async fn list(&self) -> Result<Vec<Note>>;

    /// List all notes ordered by subject name, newest first within a subject.
    async fn list_by_subject(&self) -> Result<Vec<Note>>;

    /// Fetch a single note.
    async fn get(&self, id: Uuid) -> Result<Option<Note>>;

    /// Replace a note's subject, title, and content.
    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<()>;

    /// Delete a note.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Case-insensitive substring match against subject name or title.
    async fn search(&self, term: &str) -> Result<Vec<Note>>;
}

// =============================================================================
// FOLDER REPOSITORY TRAITS
// =============================================================================

/// Repository for folders and their document membership.
#[async_trait]
pub trait FolderRepository: Send + Sync {
    /// Create a folder.
    async fn create(&self, name: &str) -> Result<Uuid>;

    /// List folders, newest first.
    async fn list(&self) -> Result<Vec<Folder>>;

    /// Rename a folder.
    async fn rename(&self, id: Uuid, name: &str) -> Result<()>;

    /// Delete a folder and its membership rows.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Attach a document to a folder.
    async fn add_document(&self, folder_id: Uuid, req: AddDocumentRequest) -> Result<()>;

    /// Documents attached to a folder, joined with their notes.
    async fn contents(&self, folder_id: Uuid) -> Result<Vec<FolderDocument>>;

    /// Detach a document from a folder.
    async fn remove_document(&self, folder_id: Uuid, document_id: Uuid) -> Result<()>;
}
