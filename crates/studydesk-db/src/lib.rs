//! # studydesk-db
//!
//! PostgreSQL database layer for studydesk.
//!
//! This crate provides:
//! - Connection pool management
//! - Note and folder repositories
//! - Schema migrations
//!
//! ## Example
//!
//! ```rust,ignore
//! use studydesk_db::{Database, NoteRepository, CreateNoteRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/studydesk").await?;
//!
//!     let note_id = db.notes.insert(CreateNoteRequest {
//!         subject_name: "Biology".to_string(),
//!         title: "Cells".to_string(),
//!         content: "<p>The cell is the unit of life.</p>".to_string(),
//!     }).await?;
//!
//!     println!("Created note: {}", note_id);
//!     Ok(())
//! }
//! ```
pub mod folders;
pub mod notes;
pub mod pool;

// Test fixtures for integration tests
pub mod test_fixtures;

// Re-export core types
pub use studydesk_core::*;

/// Escape LIKE/ILIKE wildcard characters (`%`, `_`, `\`) in user input.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub use folders::PgFolderRepository;
pub use notes::PgNoteRepository;
pub use pool::{create_lazy_pool, create_pool_with_config, PoolConfig};

/// Database handle owning the pool and every repository.
///
/// Cloning is cheap: the pool is reference-counted and shared by the clones.
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Note repository for CRUD and search.
    pub notes: PgNoteRepository,
    /// Folder repository for folders and their documents.
    pub folders: PgFolderRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            notes: PgNoteRepository::new(pool.clone()),
            folders: PgFolderRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_config(url, PoolConfig::default()).await
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}
