//! API tests against a real database.
//!
//! Require `DATABASE_URL`; each test returns early when it is unset.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use studydesk_api::{router, AppState, ServerConfig};
use studydesk_db::test_fixtures::{test_database, unique_marker};

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn test_note_lifecycle_and_library_save() {
    let Some(db) = test_database().await else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let app = router(AppState::new(db, dir.path()), &ServerConfig::default());
    let subject = unique_marker("Math");

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/notes",
        Some(serde_json::json!({
            "subjectName": subject,
            "title": "Chapter 1: Intro!!",
            "content": "<p>Sets and <em>functions</em></p>",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Note created successfully");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, found) = send(
        &app,
        Method::GET,
        &format!("/api/study-materials/search?searchTerm={}", subject),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(found.as_array().unwrap().iter().any(|n| n["id"] == id.as_str()));

    let (status, saved) = send(
        &app,
        Method::POST,
        &format!("/api/study-materials/save-pdf/{}", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        saved["filePath"],
        format!("/uploads/study/{}/Chapter 1 Intro.pdf", subject)
    );
    assert_eq!(saved["originalTitle"], "Chapter 1: Intro!!");
    assert_eq!(saved["originalSubject"], subject.as_str());
    assert!(dir
        .path()
        .join(format!("study/{}/Chapter 1 Intro.pdf", subject))
        .is_file());

    let (status, _) = send(&app, Method::DELETE, &format!("/api/notes/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &format!("/api/notes/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_library_save_of_missing_note_is_404() {
    let Some(db) = test_database().await else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let app = router(AppState::new(db, dir.path()), &ServerConfig::default());

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/study-materials/save-pdf/{}", Uuid::now_v7()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Note not found");
}

#[tokio::test]
async fn test_folder_routes() {
    let Some(db) = test_database().await else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let app = router(AppState::new(db, dir.path()), &ServerConfig::default());

    let (status, folder) = send(
        &app,
        Method::POST,
        "/api/folders",
        Some(serde_json::json!({ "name": unique_marker("exam") })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let folder_id = folder["id"].as_str().unwrap().to_string();

    let (_, note) = send(
        &app,
        Method::POST,
        "/api/notes",
        Some(serde_json::json!({ "subjectName": "Chem", "title": "Bonds" })),
    )
    .await;
    let note_id = note["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/folders/{}/documents", folder_id),
        Some(serde_json::json!({ "documentId": note_id, "documentType": "note" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, contents) = send(
        &app,
        Method::GET,
        &format!("/api/folders/{}/contents", folder_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contents[0]["title"], "Bonds");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/folders/{}", folder_id),
        Some(serde_json::json!({ "name": "Renamed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Folder renamed successfully");

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/folders/{}/documents/{}", folder_id, note_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    send(&app, Method::DELETE, &format!("/api/notes/{}", note_id), None).await;
    let (status, _) = send(&app, Method::DELETE, &format!("/api/folders/{}", folder_id), None).await;
    assert_eq!(status, StatusCode::OK);
}
