//! Note repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use studydesk_core::defaults::DEFAULT_USER_ID;
use studydesk_core::{
    new_v7, CreateNoteRequest, Error, Note, NoteRepository, Result, UpdateNoteRequest,
};

use crate::escape_like;

const NOTE_COLUMNS: &str = "id, user_id, subject_name, title, content, created_at";

/// PostgreSQL implementation of NoteRepository.
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn map_row(row: PgRow) -> Note {
        Note {
            id: row.get("id"),
            user_id: row.get("user_id"),
            subject_name: row.get("subject_name"),
            title: row.get("title"),
            content: row.get("content"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, req: CreateNoteRequest) -> Result<Uuid> {
        let id = new_v7();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO note (id, user_id, subject_name, title, content, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(id)
        .bind(DEFAULT_USER_ID)
        .bind(&req.subject_name)
        .bind(&req.title)
        .bind(&req.content)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(subsystem = "db", component = "notes", op = "insert", note_id = %id, "Note inserted");
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Note>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM note ORDER BY created_at DESC",
            NOTE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(Self::map_row).collect())
    }

    async fn list_by_subject(&self) -> Result<Vec<Note>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM note ORDER BY subject_name, created_at DESC",
            NOTE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(Self::map_row).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Note>> {
        let row = sqlx::query(&format!("SELECT {} FROM note WHERE id = $1", NOTE_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.map(Self::map_row))
    }

    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<()> {
        let result = sqlx::query(
            "UPDATE note SET subject_name = $1, title = $2, content = $3 WHERE id = $4",
        )
        .bind(&req.subject_name)
        .bind(&req.title)
        .bind(&req.content)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;

        // Folder links point at notes without a foreign key
        sqlx::query("DELETE FROM folder_document WHERE document_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;

        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }

        tx.commit().await.map_err(Error::Database)?;
        Ok(())
    }

    async fn search(&self, term: &str) -> Result<Vec<Note>> {
        let pattern = format!("%{}%", escape_like(term));
        let rows = sqlx::query(&format!(
            "SELECT {} FROM note
             WHERE subject_name ILIKE $1 ESCAPE '\\' OR title ILIKE $1 ESCAPE '\\'
             ORDER BY created_at DESC",
            NOTE_COLUMNS
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "search",
            result_count = rows.len(),
            "Note search finished"
        );
        Ok(rows.into_iter().map(Self::map_row).collect())
    }
}
