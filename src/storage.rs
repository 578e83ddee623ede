use async_trait::async_trait;
use aws_sdk_s3 as s3;
use s3::primitives::ByteStream;
use std::sync::{Arc, Mutex};

// Object storage buckets, partitioned by content type.
pub const ARTICLE_IMAGES: &str = "article-images";
pub const DIRECTORATE_IMAGES: &str = "directorate-images";
pub const HERO_IMAGES: &str = "hero-images";
pub const REPORT_PDFS: &str = "report-pdfs";
pub const REPORT_COVERS: &str = "report-covers";
pub const PERSONNEL_PHOTOS: &str = "personnel-photos";
pub const ORGANIGRAMME: &str = "organigramme";

pub const ALL_BUCKETS: [&str; 7] = [
    ARTICLE_IMAGES,
    DIRECTORATE_IMAGES,
    HERO_IMAGES,
    REPORT_PDFS,
    REPORT_COVERS,
    PERSONNEL_PHOTOS,
    ORGANIGRAMME,
];

/// StorageService
///
/// Contract for the object storage layer. Upload handlers only talk to this
/// trait, so the S3 client can be swapped for `MockStorageService` in tests.
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Creates every bucket in `ALL_BUCKETS` if missing. Only called in
    /// `Env::Local` against MinIO; the hosted storage is provisioned separately.
    async fn ensure_buckets(&self);

    /// Stores `body` under `bucket/key` and returns the object's public URL.
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<String, String>;
}

/// S3StorageClient
///
/// `StorageService` over the AWS SDK. The hosted storage exposes an
/// S3-compatible endpoint, so the same client serves MinIO locally and the
/// hosted buckets in production. Path-style addressing is required by both.
#[derive(Clone)]
pub struct S3StorageClient {
    client: s3::Client,
    public_base: String,
}

impl S3StorageClient {
    pub fn new(
        endpoint: &str,
        region: &str,
        access_key: &str,
        secret_key: &str,
        public_base: &str,
    ) -> Self {
        let credentials =
            s3::config::Credentials::new(access_key, secret_key, None, None, "static");

        let config = s3::Config::builder()
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .region(s3::config::Region::new(region.to_string()))
            .behavior_version_latest()
            .force_path_style(true)
            .build();

        Self {
            client: s3::Client::from_conf(config),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn public_url(&self, bucket: &str, key: &str) -> String {
        public_url(&self.public_base, bucket, key)
    }
}

#[async_trait]
impl StorageService for S3StorageClient {
    async fn ensure_buckets(&self) {
        for bucket in ALL_BUCKETS {
            if let Err(e) = self.client.create_bucket().bucket(bucket).send().await {
                // Already-owned buckets also land here.
                tracing::debug!(bucket, error = %e, "create_bucket skipped");
            }
        }
    }

    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<String, String> {
        let size = body.len();
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        tracing::debug!(bucket, key, size, "object stored");
        Ok(self.public_url(bucket, key))
    }
}

pub fn public_url(base: &str, bucket: &str, key: &str) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), bucket, key)
}

/// sanitize_filename
///
/// Reduces a client-supplied filename to a safe object-key segment: directory
/// components are dropped, and anything outside `[A-Za-z0-9._-]` becomes `-`.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect();

    let cleaned = cleaned.trim_matches(|c| c == '.' || c == '-');
    if cleaned.is_empty() {
        "fichier".to_string()
    } else {
        cleaned.to_string()
    }
}

/// object_key
///
/// Upload keys are the sanitized filename prefixed with the upload time in
/// milliseconds, so repeated uploads of the same file never overwrite.
pub fn object_key(filename: &str, now_millis: i64) -> String {
    format!("{}-{}", now_millis, sanitize_filename(filename))
}

/// MockStorageService
///
/// Test double for `StorageService`. Records every upload and returns a
/// deterministic URL; `new_failing` makes every upload fail.
#[derive(Clone, Default)]
pub struct MockStorageService {
    pub should_fail: bool,
    uploads: Arc<Mutex<Vec<StoredObject>>>,
}

/// An upload captured by `MockStorageService`.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub content_type: String,
    pub size: usize,
}

impl MockStorageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> Vec<StoredObject> {
        self.uploads
            .lock()
            .map(|uploads| uploads.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl StorageService for MockStorageService {
    async fn ensure_buckets(&self) {}

    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<String, String> {
        if self.should_fail {
            return Err("Mock Storage Error: Simulation requested".to_string());
        }

        if let Ok(mut uploads) = self.uploads.lock() {
            uploads.push(StoredObject {
                bucket: bucket.to_string(),
                key: key.to_string(),
                content_type: content_type.to_string(),
                size: body.len(),
            });
        }

        Ok(public_url("http://localhost:9000/mock", bucket, key))
    }
}

/// StorageState
///
/// Shared handle to the storage service.
pub type StorageState = Arc<dyn StorageService>;
