//! Folder HTTP handlers.
//!
//! Folders group documents; membership rows are keyed by folder and document
//! and joined with notes when listing contents.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::extract::{JsonBody, PathParams};
use crate::{ApiError, AppState};
use studydesk_core::{AddDocumentRequest, Folder, FolderDocument, FolderNameRequest, FolderRepository};

fn require_name(body: &FolderNameRequest) -> Result<&str, ApiError> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Folder name is required".to_string()));
    }
    Ok(name)
}

/// Create a folder.
///
/// # Returns
/// - 201 Created with `{id, message}`
/// - 400 Bad Request if the name is blank
pub async fn create_folder(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<FolderNameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require_name(&body)?;
    let id = state.db.folders.create(name).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": id,
            "message": "Folder created successfully",
        })),
    ))
}

pub async fn list_folders(State(state): State<AppState>) -> Result<Json<Vec<Folder>>, ApiError> {
    Ok(Json(state.db.folders.list().await?))
}

pub async fn rename_folder(
    State(state): State<AppState>,
    PathParams(id): PathParams<Uuid>,
    JsonBody(body): JsonBody<FolderNameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require_name(&body)?;
    state.db.folders.rename(id, name).await?;
    Ok(Json(serde_json::json!({
        "message": "Folder renamed successfully",
    })))
}

/// Delete a folder. Its membership rows go with it; the notes stay.
pub async fn delete_folder(
    State(state): State<AppState>,
    PathParams(id): PathParams<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.folders.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Folder deleted successfully",
    })))
}

pub async fn add_document(
    State(state): State<AppState>,
    PathParams(folder_id): PathParams<Uuid>,
    JsonBody(body): JsonBody<AddDocumentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.folders.add_document(folder_id, body).await?;
    Ok(Json(serde_json::json!({
        "message": "Document added to folder successfully",
    })))
}

/// Documents in a folder joined with their notes, oldest membership first.
pub async fn folder_contents(
    State(state): State<AppState>,
    PathParams(folder_id): PathParams<Uuid>,
) -> Result<Json<Vec<FolderDocument>>, ApiError> {
    Ok(Json(state.db.folders.contents(folder_id).await?))
}

pub async fn remove_document(
    State(state): State<AppState>,
    PathParams((folder_id, document_id)): PathParams<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .db
        .folders
        .remove_document(folder_id, document_id)
        .await?;
    Ok(Json(serde_json::json!({
        "message": "Document removed from folder successfully",
    })))
}
