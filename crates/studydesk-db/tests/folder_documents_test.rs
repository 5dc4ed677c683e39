//! Integration tests for folders and folder membership.
//!
//! Require `DATABASE_URL`; skipped otherwise.

use studydesk_db::test_fixtures::{test_database, unique_marker};
use studydesk_db::{AddDocumentRequest, CreateNoteRequest, FolderRepository, NoteRepository};
use uuid::Uuid;

#[tokio::test]
async fn test_folder_lifecycle() {
    let Some(db) = test_database().await else {
        return;
    };
    let name = unique_marker("exam-prep");

    let id = db.folders.create(&name).await.expect("Failed to create folder");
    let listed = db.folders.list().await.unwrap();
    assert!(listed.iter().any(|f| f.id == id && f.name == name));

    db.folders.rename(id, "Renamed").await.expect("Failed to rename");
    let listed = db.folders.list().await.unwrap();
    assert!(listed.iter().any(|f| f.id == id && f.name == "Renamed"));

    db.folders.delete(id).await.expect("Failed to delete folder");
    assert!(db.folders.delete(id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_rename_missing_folder_is_not_found() {
    let Some(db) = test_database().await else {
        return;
    };
    let err = db.folders.rename(Uuid::now_v7(), "nope").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_contents_join_notes() {
    let Some(db) = test_database().await else {
        return;
    };
    let folder_id = db.folders.create(&unique_marker("folder")).await.unwrap();
    let note_id = db
        .notes
        .insert(CreateNoteRequest {
            subject_name: "Physics".to_string(),
            title: "Momentum".to_string(),
            content: "<p>p = mv</p>".to_string(),
        })
        .await
        .unwrap();

    db.folders
        .add_document(
            folder_id,
            AddDocumentRequest {
                document_id: note_id,
                document_type: "note".to_string(),
            },
        )
        .await
        .expect("Failed to add document");

    let contents = db.folders.contents(folder_id).await.unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0].document_id, note_id);
    assert_eq!(contents[0].title, "Momentum");
    assert_eq!(contents[0].subject_name, "Physics");
    assert_eq!(contents[0].document_type, "note");

    db.folders
        .remove_document(folder_id, note_id)
        .await
        .expect("Failed to remove document");
    assert!(db.folders.contents(folder_id).await.unwrap().is_empty());
    assert!(db
        .folders
        .remove_document(folder_id, note_id)
        .await
        .unwrap_err()
        .is_not_found());

    db.notes.delete(note_id).await.unwrap();
    db.folders.delete(folder_id).await.unwrap();
}

#[tokio::test]
async fn test_deleting_note_detaches_it_from_folders() {
    let Some(db) = test_database().await else {
        return;
    };
    let folder_id = db.folders.create(&unique_marker("folder")).await.unwrap();
    let note_id = db
        .notes
        .insert(CreateNoteRequest {
            subject_name: "Art".to_string(),
            title: "Baroque".to_string(),
            content: String::new(),
        })
        .await
        .unwrap();
    db.folders
        .add_document(
            folder_id,
            AddDocumentRequest {
                document_id: note_id,
                document_type: "note".to_string(),
            },
        )
        .await
        .unwrap();

    db.notes.delete(note_id).await.unwrap();

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM folder_document WHERE document_id = $1")
            .bind(note_id)
            .fetch_one(db.pool())
            .await
            .unwrap();
    assert_eq!(remaining, 0);

    db.folders.delete(folder_id).await.unwrap();
}
