//! Folder repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use studydesk_core::{
    new_v7, AddDocumentRequest, Error, Folder, FolderDocument, FolderRepository, Result,
};

/// PostgreSQL implementation of FolderRepository.
pub struct PgFolderRepository {
    pool: Pool<Postgres>,
}

impl PgFolderRepository {
    /// Create a new PgFolderRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderRepository for PgFolderRepository {
    async fn create(&self, name: &str) -> Result<Uuid> {
        let id = new_v7();
        let now = Utc::now();

        sqlx::query("INSERT INTO folder (id, name, created_at) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(name)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(subsystem = "db", component = "folders", op = "create", folder_id = %id, "Folder created");
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Folder>> {
        let rows = sqlx::query("SELECT id, name, created_at FROM folder ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(rows
            .into_iter()
            .map(|r| Folder {
                id: r.get("id"),
                name: r.get("name"),
                created_at: r.get("created_at"),
            })
            .collect())
    }

    async fn rename(&self, id: Uuid, name: &str) -> Result<()> {
        let result = sqlx::query("UPDATE folder SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::FolderNotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        // Membership rows go with the folder (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM folder WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::FolderNotFound(id));
        }
        Ok(())
    }

    async fn add_document(&self, folder_id: Uuid, req: AddDocumentRequest) -> Result<()> {
        sqlx::query(
            "INSERT INTO folder_document (folder_id, document_id, document_type, created_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(folder_id)
        .bind(req.document_id)
        .bind(&req.document_type)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(())
    }

    async fn contents(&self, folder_id: Uuid) -> Result<Vec<FolderDocument>> {
        let rows = sqlx::query(
            r#"
            SELECT fd.folder_id, fd.document_id, fd.document_type, fd.created_at,
                   n.title, n.subject_name, n.content
            FROM folder_document fd
            JOIN note n ON fd.document_id = n.id
            WHERE fd.folder_id = $1
            ORDER BY fd.created_at
            "#,
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows
            .into_iter()
            .map(|r| FolderDocument {
                folder_id: r.get("folder_id"),
                document_id: r.get("document_id"),
                document_type: r.get("document_type"),
                created_at: r.get("created_at"),
                title: r.get("title"),
                subject_name: r.get("subject_name"),
                content: r.get("content"),
            })
            .collect())
    }

    async fn remove_document(&self, folder_id: Uuid, document_id: Uuid) -> Result<()> {
        let result =
            sqlx::query("DELETE FROM folder_document WHERE folder_id = $1 AND document_id = $2")
                .bind(folder_id)
                .bind(document_id)
                .execute(&self.pool)
                .await
                .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!(
                "Document {} is not in folder {}",
                document_id, folder_id
            )));
        }
        Ok(())
    }
}
