use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use tresor_portal::{
    AppConfig, AppState, InMemoryRepository, MockAuthProvider, MockMailer, MockStorageService,
    auth::{AuthProviderState, issue_token},
    create_router,
    mailer::MailerState,
    repository::{AdminRepositoryState, PublicRepositoryState},
    storage::{self, StorageState},
};
use uuid::Uuid;

const BOUNDARY: &str = "X-TRESOR-BOUNDARY";

// --- Helpers ---

fn app(mock_storage: MockStorageService) -> (axum::Router, String) {
    let config = AppConfig::default();
    let repo = Arc::new(InMemoryRepository::seeded());
    let auth = Arc::new(MockAuthProvider::new("admin@tresor.test", "secret", &config))
        as AuthProviderState;
    let token = issue_token(
        &config.jwt_secret,
        &config.jwt_audience,
        Uuid::new_v4(),
        None,
        3600,
    )
    .unwrap();

    let state = AppState::new(
        repo.clone() as PublicRepositoryState,
        repo as AdminRepositoryState,
        Arc::new(mock_storage) as StorageState,
        Arc::new(MockMailer::new()) as MailerState,
        auth,
        config,
    );
    (create_router(state), token)
}

/// One file part, optionally preceded by an unrelated text field.
fn multipart_body(field: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"alt\"\r\n\r\nlégende\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(uri: &str, token: Option<&str>, body: Vec<u8>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri).header(
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", BOUNDARY),
    );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body)).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-data";
const PDF_BYTES: &[u8] = b"%PDF-1.7 fake report";

// --- Tests ---

#[tokio::test]
async fn test_article_image_upload() {
    let storage = MockStorageService::new();
    let (app, token) = app(storage.clone());

    let body = multipart_body("image", "Conférence de presse.png", "image/png", PNG_BYTES);
    let response = app
        .oneshot(upload_request("/api/articles/upload-image", Some(&token), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let url = json["imageUrl"].as_str().unwrap();
    assert!(url.contains(storage::ARTICLE_IMAGES));

    let uploads = storage.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].bucket, storage::ARTICLE_IMAGES);
    assert_eq!(uploads[0].content_type, "image/png");
    assert_eq!(uploads[0].size, PNG_BYTES.len());
    assert!(uploads[0].key.ends_with("Conf-rence-de-presse.png"));
    assert!(url.ends_with(&uploads[0].key));
}

#[tokio::test]
async fn test_every_file_field_name_is_accepted() {
    for field in ["image", "file", "pdf"] {
        let storage = MockStorageService::new();
        let (app, token) = app(storage.clone());

        let body = multipart_body(field, "slide.jpg", "image/jpeg", PNG_BYTES);
        let response = app
            .oneshot(upload_request("/api/hero-slides/upload-image", Some(&token), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "field '{}'", field);
        assert_eq!(storage.uploads()[0].bucket, storage::HERO_IMAGES);
    }
}

#[tokio::test]
async fn test_report_pdf_returns_file_url() {
    let storage = MockStorageService::new();
    let (app, token) = app(storage.clone());

    let body = multipart_body("pdf", "rapport-annuel-2024.pdf", "application/pdf", PDF_BYTES);
    let response = app
        .oneshot(upload_request("/api/reports/upload-pdf", Some(&token), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["fileUrl"].as_str().unwrap().contains(storage::REPORT_PDFS));
    assert!(json.get("imageUrl").is_none());
}

#[tokio::test]
async fn test_organigramme_returns_public_url() {
    let storage = MockStorageService::new();
    let (app, token) = app(storage.clone());

    let body = multipart_body("file", "organigramme.png", "image/png", PNG_BYTES);
    let response = app
        .oneshot(upload_request(
            "/api/institution/organigramme/upload-image",
            Some(&token),
            body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["publicUrl"].as_str().unwrap().contains(storage::ORGANIGRAMME));
}

#[tokio::test]
async fn test_wrong_content_type_is_400() {
    let storage = MockStorageService::new();
    let (app, token) = app(storage.clone());

    // A PDF sent to an image route.
    let body = multipart_body("image", "rapport.pdf", "application/pdf", PDF_BYTES);
    let response = app
        .clone()
        .oneshot(upload_request("/api/directorates/upload-image", Some(&token), body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // An image sent to the PDF route.
    let body = multipart_body("pdf", "photo.png", "image/png", PNG_BYTES);
    let response = app
        .oneshot(upload_request("/api/reports/upload-pdf", Some(&token), body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(storage.uploads().is_empty());
}

#[tokio::test]
async fn test_missing_file_field_is_400() {
    let (app, token) = app(MockStorageService::new());

    let body = multipart_body("document", "photo.png", "image/png", PNG_BYTES);
    let response = app
        .oneshot(upload_request("/api/articles/upload-image", Some(&token), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Aucun fichier reçu (champ 'image', 'file' ou 'pdf')"
    );
}

#[tokio::test]
async fn test_empty_file_is_400() {
    let (app, token) = app(MockStorageService::new());

    let body = multipart_body("image", "vide.png", "image/png", b"");
    let response = app
        .oneshot(upload_request("/api/articles/upload-image", Some(&token), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_storage_failure_is_502() {
    let (app, token) = app(MockStorageService::new_failing());

    let body = multipart_body("image", "portrait.jpg", "image/jpeg", PNG_BYTES);
    let response = app
        .oneshot(upload_request(
            "/api/institution/personnel/upload-image",
            Some(&token),
            body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_upload_requires_session() {
    let storage = MockStorageService::new();
    let (app, _) = app(storage.clone());

    let body = multipart_body("image", "photo.png", "image/png", PNG_BYTES);
    let response = app
        .oneshot(upload_request("/api/articles/upload-image", None, body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(storage.uploads().is_empty());
}
