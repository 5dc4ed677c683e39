//! Data models for notes, folders, and folder membership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A stored study note. `content` is rich-text markup from the editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub user_id: i64,
    pub subject_name: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub subject_name: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Request body for replacing a note's fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    pub subject_name: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

// =============================================================================
// FOLDER TYPES
// =============================================================================

/// A named folder grouping documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or renaming a folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNameRequest {
    pub name: String,
}

/// Request body for attaching a document to a folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDocumentRequest {
    pub document_id: Uuid,
    /// Free-form kind of document, e.g. "note" or "pdf".
    #[serde(default = "default_document_type")]
    pub document_type: String,
}

fn default_document_type() -> String {
    "note".to_string()
}

/// A folder membership row joined with the note it points at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FolderDocument {
    pub folder_id: Uuid,
    pub document_id: Uuid,
    pub document_type: String,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub subject_name: String,
    pub content: String,
}
