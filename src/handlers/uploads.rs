//! Multipart file uploads to object storage.
//!
//! The file is read fully into memory, stored under a time-prefixed key in
//! the bucket of its content type, and the public URL is returned. Admin forms
//! then submit that URL with the entity.

use axum::{
    Json,
    extract::{Multipart, State},
};
use chrono::Utc;
use serde::Serialize;
use ts_rs::TS;
use utoipa::ToSchema;

use crate::{
    AppState,
    auth::AdminSession,
    error::{ApiError, ApiMessage},
    storage::{self, object_key},
};

/// Field names accepted for the uploaded file, on every upload route.
pub const FILE_FIELDS: [&str; 3] = ["image", "file", "pdf"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UploadKind {
    Image,
    Pdf,
}

impl UploadKind {
    fn accepts(&self, content_type: &str) -> bool {
        match self {
            UploadKind::Image => content_type.starts_with("image/"),
            UploadKind::Pdf => content_type == "application/pdf",
        }
    }

    fn rejection(&self) -> ApiError {
        match self {
            UploadKind::Image => ApiError::validation("Le fichier doit être une image"),
            UploadKind::Pdf => ApiError::validation("Le fichier doit être un PDF"),
        }
    }
}

#[derive(Debug, Serialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImageUploadResponse {
    pub image_url: String,
}

#[derive(Debug, Serialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FileUploadResponse {
    pub file_url: String,
}

#[derive(Debug, Serialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PublicUrlResponse {
    pub public_url: String,
}

/// An uploaded file, buffered in memory.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Content type guessed from the extension, for clients that send none.
fn guess_content_type(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// read_upload
///
/// Takes the first field named `image`, `file` or `pdf` and checks it is a
/// non-empty file of the expected kind. Other fields are skipped.
pub async fn read_upload(
    mut multipart: Multipart,
    kind: UploadKind,
) -> Result<UploadedFile, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.body_text()))?
    {
        let Some(name) = field.name() else { continue };
        if !FILE_FIELDS.contains(&name) {
            continue;
        }

        let filename = field.file_name().unwrap_or("fichier").to_string();
        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| guess_content_type(&filename).to_string());

        if !kind.accepts(&content_type) {
            return Err(kind.rejection());
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;

        if bytes.is_empty() {
            return Err(ApiError::validation("Le fichier est vide"));
        }

        return Ok(UploadedFile {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(ApiError::validation(
        "Aucun fichier reçu (champ 'image', 'file' ou 'pdf')",
    ))
}

async fn store(
    state: &AppState,
    session: &AdminSession,
    bucket: &'static str,
    file: UploadedFile,
) -> Result<String, ApiError> {
    let key = object_key(&file.filename, Utc::now().timestamp_millis());
    let size = file.bytes.len();

    let url = state
        .storage
        .upload(bucket, &key, file.bytes, &file.content_type)
        .await
        .map_err(|e| ApiError::upstream("stockage", e))?;

    tracing::info!(admin = %session.user_id, bucket, key = %key, size, "file uploaded");
    Ok(url)
}

async fn upload_image(
    state: &AppState,
    session: &AdminSession,
    bucket: &'static str,
    multipart: Multipart,
) -> Result<Json<ImageUploadResponse>, ApiError> {
    let file = read_upload(multipart, UploadKind::Image).await?;
    let image_url = store(state, session, bucket, file).await?;
    Ok(Json(ImageUploadResponse { image_url }))
}

/// upload_article_image
///
/// [Admin Route] Article cover image.
#[utoipa::path(
    post,
    path = "/api/articles/upload-image",
    responses(
        (status = 200, description = "Stored", body = ImageUploadResponse),
        (status = 400, description = "Missing or invalid file", body = ApiMessage),
        (status = 401, description = "No session", body = ApiMessage),
        (status = 502, description = "Storage unavailable", body = ApiMessage)
    )
)]
pub async fn upload_article_image(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImageUploadResponse>, ApiError> {
    upload_image(&state, &session, storage::ARTICLE_IMAGES, multipart).await
}

#[utoipa::path(
    post,
    path = "/api/directorates/upload-image",
    responses((status = 200, description = "Stored", body = ImageUploadResponse))
)]
pub async fn upload_directorate_image(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImageUploadResponse>, ApiError> {
    upload_image(&state, &session, storage::DIRECTORATE_IMAGES, multipart).await
}

#[utoipa::path(
    post,
    path = "/api/hero-slides/upload-image",
    responses((status = 200, description = "Stored", body = ImageUploadResponse))
)]
pub async fn upload_hero_image(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImageUploadResponse>, ApiError> {
    upload_image(&state, &session, storage::HERO_IMAGES, multipart).await
}

/// upload_report_cover
///
/// [Admin Route] Cover thumbnail shown next to a publication.
#[utoipa::path(
    post,
    path = "/api/reports/upload-image",
    responses((status = 200, description = "Stored", body = ImageUploadResponse))
)]
pub async fn upload_report_cover(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImageUploadResponse>, ApiError> {
    upload_image(&state, &session, storage::REPORT_COVERS, multipart).await
}

/// upload_report_pdf
///
/// [Admin Route] The downloadable document of a publication. Answers `fileUrl`.
#[utoipa::path(
    post,
    path = "/api/reports/upload-pdf",
    responses(
        (status = 200, description = "Stored", body = FileUploadResponse),
        (status = 400, description = "Not a PDF", body = ApiMessage)
    )
)]
pub async fn upload_report_pdf(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<FileUploadResponse>, ApiError> {
    let file = read_upload(multipart, UploadKind::Pdf).await?;
    let file_url = store(&state, &session, storage::REPORT_PDFS, file).await?;
    Ok(Json(FileUploadResponse { file_url }))
}

#[utoipa::path(
    post,
    path = "/api/institution/personnel/upload-image",
    responses((status = 200, description = "Stored", body = ImageUploadResponse))
)]
pub async fn upload_personnel_photo(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImageUploadResponse>, ApiError> {
    upload_image(&state, &session, storage::PERSONNEL_PHOTOS, multipart).await
}

/// upload_organigramme_image
///
/// [Admin Route] Org chart image. Answers `publicUrl`; the chart itself is
/// published with `POST /api/institution/organigramme/create`.
#[utoipa::path(
    post,
    path = "/api/institution/organigramme/upload-image",
    responses((status = 200, description = "Stored", body = PublicUrlResponse))
)]
pub async fn upload_organigramme_image(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PublicUrlResponse>, ApiError> {
    let file = read_upload(multipart, UploadKind::Image).await?;
    let public_url = store(&state, &session, storage::ORGANIGRAMME, file).await?;
    Ok(Json(PublicUrlResponse { public_url }))
}
