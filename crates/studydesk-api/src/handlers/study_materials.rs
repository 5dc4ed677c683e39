//! Study library: browsing, search, and saving stored notes as PDFs.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::extract::{PathParams, QueryParams};
use crate::{ApiError, AppState};
use studydesk_core::{Note, NoteRepository};
use studydesk_pdf::{LibraryExport, NoteSource};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub search_term: String,
}

/// All notes grouped by subject, newest first within each subject.
pub async fn list_study_materials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(state.db.notes.list_by_subject().await?))
}

/// Notes whose subject or title contains `searchTerm`.
pub async fn search_study_materials(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(state.db.notes.search(&query.search_term).await?))
}

/// Render a stored note with the library layout into
/// `uploads/study/<subject>/<title>.pdf`.
///
/// # Returns
/// - 200 OK with `{filePath, originalTitle, originalSubject}`
/// - 404 Not Found with `{message: "Note not found"}`
/// - 500 with `{message: "Error generating PDF"}` if rendering fails
pub async fn save_to_library(
    State(state): State<AppState>,
    PathParams(note_id): PathParams<Uuid>,
) -> Result<Response, ApiError> {
    let note = state
        .db
        .notes
        .get(note_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Note not found".to_string()))?;

    let source = NoteSource::from(&note);
    let rendered = match state.renderer.render(&LibraryExport, &source).await {
        Ok(rendered) => rendered,
        Err(e) => {
            error!(
                subsystem = "api",
                op = "save_to_library",
                note_id = %note_id,
                error = %e,
                "PDF export failed"
            );
            return Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": "Error generating PDF" })),
            )
                .into_response());
        }
    };

    Ok(Json(serde_json::json!({
        "filePath": rendered.public_path(),
        "originalTitle": note.title,
        "originalSubject": note.subject_name,
    }))
    .into_response())
}
