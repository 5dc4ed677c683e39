//! Note CRUD and ad-hoc PDF export.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::extract::{JsonBody, PathParams};
use crate::{ApiError, AppState};
use studydesk_core::{CreateNoteRequest, Note, NoteRepository, UpdateNoteRequest};
use studydesk_pdf::{NoteExport, NoteSource};

fn require_subject_and_title(subject_name: &str, title: &str) -> Result<(), ApiError> {
    if subject_name.trim().is_empty() || title.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Subject name and title are required".to_string(),
        ));
    }
    Ok(())
}

/// Create a note.
///
/// # Returns
/// - 201 Created with `{id, message}`
/// - 400 Bad Request if subject name or title is blank
pub async fn create_note(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_subject_and_title(&body.subject_name, &body.title)?;

    let id = state.db.notes.insert(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": id,
            "message": "Note created successfully",
        })),
    ))
}

/// List every note, newest first.
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(state.db.notes.list().await?))
}

/// Replace a note's subject, title and content.
///
/// # Returns
/// - 200 OK with `{message}`
/// - 404 Not Found if the note doesn't exist
pub async fn update_note(
    State(state): State<AppState>,
    PathParams(id): PathParams<Uuid>,
    JsonBody(body): JsonBody<UpdateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_subject_and_title(&body.subject_name, &body.title)?;

    state.db.notes.update(id, body).await?;
    Ok(Json(serde_json::json!({
        "message": "Note updated successfully",
    })))
}

pub async fn delete_note(
    State(state): State<AppState>,
    PathParams(id): PathParams<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.notes.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Note deleted successfully",
    })))
}

/// Body of an ad-hoc export: the note as currently shown in the editor,
/// which need not be saved.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveNotePdfRequest {
    pub subject_name: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Render the posted note with the A4 export layout into
/// `uploads/notes/<subject>/<Title>.pdf`.
///
/// Failures are reported in the body as well as the status:
/// `{success: false, message, error}`, with 500 for a failed render and the
/// rejection's status for an unreadable body.
pub async fn save_note_pdf(
    State(state): State<AppState>,
    body: Result<Json<SaveNotePdfRequest>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let err = ApiError::from(rejection);
            return export_failure(err.status(), err.to_string());
        }
    };
    let source = NoteSource::new(body.subject_name, body.title, body.content);

    match state.renderer.render(&NoteExport, &source).await {
        Ok(rendered) => {
            info!(
                subsystem = "api",
                op = "save_note_pdf",
                page_count = rendered.page_count,
                "Note exported"
            );
            Json(serde_json::json!({
                "success": true,
                "message": "PDF generated successfully",
                "filePath": rendered.public_path(),
            }))
            .into_response()
        }
        Err(e) => {
            error!(subsystem = "api", op = "save_note_pdf", error = %e, "PDF export failed");
            export_failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn export_failure(status: StatusCode, error: String) -> Response {
    (
        status,
        Json(serde_json::json!({
            "success": false,
            "message": "Error generating PDF",
            "error": error,
        })),
    )
        .into_response()
}
