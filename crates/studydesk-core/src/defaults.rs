//! Shared default values.
//!
//! Crates reference these constants instead of repeating magic numbers.

// =============================================================================
// IDENTITY
// =============================================================================

/// The single user every note belongs to. There is no account model.
pub const DEFAULT_USER_ID: i64 = 1;

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 5000;

/// Default bind address.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default root directory for generated files, served under `/uploads`.
pub const UPLOADS_DIR: &str = "./uploads";

/// URL prefix under which the uploads root is served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Default request body limit (10 MB); note bodies are rich-text strings.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// DATABASE
// =============================================================================

/// Default database URL when `DATABASE_URL` is unset.
pub const DATABASE_URL: &str = "postgres://localhost/studydesk";

/// Maximum number of pooled connections.
pub const DB_MAX_CONNECTIONS: u32 = 10;

/// Seconds a request may wait for a pooled connection.
pub const DB_CONNECT_TIMEOUT_SECS: u64 = 30;
