//! # studydesk-api
//!
//! HTTP API for studydesk notes, folders and generated PDFs.
//!
//! The binary in `main.rs` reads [`ServerConfig`], connects the database and
//! serves [`router`]. Tests build the same router around a lazily connected
//! pool and a temporary uploads directory.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use uuid::Uuid;

use studydesk_core::defaults::UPLOADS_URL_PREFIX;
use studydesk_db::Database;
use studydesk_pdf::{FilesystemSink, PdfRenderer};

pub use config::{CorsOrigins, ServerConfig};
pub use error::ApiError;

/// Shared handler state. Cloned per request; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub renderer: Arc<PdfRenderer<FilesystemSink>>,
}

impl AppState {
    /// State whose renderer writes below `uploads_dir`.
    pub fn new(db: Database, uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            db,
            renderer: Arc::new(PdfRenderer::new(FilesystemSink::new(uploads_dir))),
        }
    }

    pub fn uploads_dir(&self) -> &Path {
        self.renderer.sink().root()
    }
}

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    match origins {
        // Credentials cannot be combined with a wildcard origin
        CorsOrigins::Any => layer.allow_origin(Any),
        CorsOrigins::List(list) => layer
            .allow_origin(AllowOrigin::list(list.clone()))
            .allow_credentials(true),
    }
}

/// Build the application router with middleware.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let uploads = ServeDir::new(state.uploads_dir());

    Router::new()
        .route("/health", get(handlers::health_check))
        // Notes
        .route(
            "/api/notes",
            post(handlers::notes::create_note).get(handlers::notes::list_notes),
        )
        .route(
            "/api/notes/:id",
            put(handlers::notes::update_note).delete(handlers::notes::delete_note),
        )
        .route("/api/notes/save-pdf", post(handlers::notes::save_note_pdf))
        // Study materials
        .route(
            "/api/study-materials",
            get(handlers::study_materials::list_study_materials),
        )
        .route(
            "/api/study-materials/search",
            get(handlers::study_materials::search_study_materials),
        )
        .route(
            "/api/study-materials/save-pdf/:note_id",
            post(handlers::study_materials::save_to_library),
        )
        // Folders
        .route(
            "/api/folders",
            post(handlers::folders::create_folder).get(handlers::folders::list_folders),
        )
        .route(
            "/api/folders/:id",
            put(handlers::folders::rename_folder).delete(handlers::folders::delete_folder),
        )
        .route(
            "/api/folders/:folder_id/documents",
            post(handlers::folders::add_document),
        )
        .route(
            "/api/folders/:folder_id/contents",
            get(handlers::folders::folder_contents),
        )
        .route(
            "/api/folders/:folder_id/documents/:document_id",
            delete(handlers::folders::remove_document),
        )
        // Generated files
        .nest_service(UPLOADS_URL_PREFIX, uploads)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(cors_layer(&config.allowed_origins))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state)
}
