//! Integration tests for the note repository.
//!
//! Require a PostgreSQL database reachable through `DATABASE_URL`; each test
//! returns early when the variable is unset.

use studydesk_db::test_fixtures::{test_database, unique_marker};
use studydesk_db::{CreateNoteRequest, Error, NoteRepository, UpdateNoteRequest};
use uuid::Uuid;

fn note(subject: &str, title: &str, content: &str) -> CreateNoteRequest {
    CreateNoteRequest {
        subject_name: subject.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[tokio::test]
async fn test_insert_and_get_note() {
    let Some(db) = test_database().await else {
        return;
    };
    let subject = unique_marker("biology");

    let id = db
        .notes
        .insert(note(&subject, "Cells", "<p>Unit of life</p>"))
        .await
        .expect("Failed to insert note");

    let stored = db
        .notes
        .get(id)
        .await
        .expect("Failed to fetch note")
        .expect("Note should exist");

    assert_eq!(stored.subject_name, subject);
    assert_eq!(stored.title, "Cells");
    assert_eq!(stored.content, "<p>Unit of life</p>");
    assert_eq!(stored.user_id, 1, "notes belong to the single default user");

    db.notes.delete(id).await.expect("Failed to delete note");
    assert!(db.notes.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let Some(db) = test_database().await else {
        return;
    };
    let subject = unique_marker("order");

    let first = db.notes.insert(note(&subject, "first", "")).await.unwrap();
    let second = db.notes.insert(note(&subject, "second", "")).await.unwrap();

    let ids: Vec<Uuid> = db
        .notes
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|n| n.subject_name == subject)
        .map(|n| n.id)
        .collect();
    assert_eq!(ids, vec![second, first]);

    db.notes.delete(first).await.unwrap();
    db.notes.delete(second).await.unwrap();
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let Some(db) = test_database().await else {
        return;
    };
    let subject = unique_marker("history");
    let id = db.notes.insert(note(&subject, "Rome", "old")).await.unwrap();

    db.notes
        .update(
            id,
            UpdateNoteRequest {
                subject_name: subject.clone(),
                title: "Carthage".to_string(),
                content: "new".to_string(),
            },
        )
        .await
        .expect("Failed to update note");

    let stored = db.notes.get(id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Carthage");
    assert_eq!(stored.content, "new");

    db.notes.delete(id).await.unwrap();
}

#[tokio::test]
async fn test_update_missing_note_is_not_found() {
    let Some(db) = test_database().await else {
        return;
    };
    let missing = Uuid::now_v7();

    let err = db
        .notes
        .update(
            missing,
            UpdateNoteRequest {
                subject_name: "x".into(),
                title: "x".into(),
                content: String::new(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoteNotFound(id) if id == missing));

    let err = db.notes.delete(missing).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_search_matches_subject_or_title_case_insensitively() {
    let Some(db) = test_database().await else {
        return;
    };
    let marker = unique_marker("chem");
    let by_subject = db
        .notes
        .insert(note(&marker, "Acids", ""))
        .await
        .unwrap();
    let by_title = db
        .notes
        .insert(note("Other", &format!("About {}", marker.to_uppercase()), ""))
        .await
        .unwrap();

    let hits: Vec<Uuid> = db
        .notes
        .search(&marker)
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.id)
        .collect();
    assert!(hits.contains(&by_subject));
    assert!(hits.contains(&by_title));

    // Wildcards in the term are literal
    let none = db.notes.search(&format!("{}%zz", marker)).await.unwrap();
    assert!(none.is_empty());

    db.notes.delete(by_subject).await.unwrap();
    db.notes.delete(by_title).await.unwrap();
}
