use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use utoipa::ToSchema;

/// ApiMessage
///
/// The `{ success, message }` envelope returned by every non-entity response
/// (deletions, form submissions, and all errors).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, PartialEq)]
#[ts(export)]
pub struct ApiMessage {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// ApiError
///
/// The error taxonomy of the HTTP boundary. Validation, auth, not-found and
/// conflict errors carry a message that is safe to show; upstream and internal
/// errors carry server-side detail that is logged and replaced by a generic
/// message before it reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("{service} error: {detail}")]
    Upstream {
        service: &'static str,
        detail: String,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn not_found(resource: &str) -> Self {
        ApiError::NotFound(format!("{} introuvable", resource))
    }

    pub fn upstream(service: &'static str, detail: impl Into<String>) -> Self {
        ApiError::Upstream {
            service,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client. Never contains upstream detail.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => {
                msg.clone()
            }
            ApiError::Unauthorized => "Non autorisé".to_string(),
            ApiError::Upstream { service, .. } => {
                format!("Le service {} est momentanément indisponible", service)
            }
            ApiError::Internal(_) => "Une erreur interne est survenue".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Upstream { service, detail } => {
                tracing::error!(service = %service, detail = %detail, "upstream failure");
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "internal failure");
            }
            _ => {}
        }

        let body = ApiMessage::failure(self.public_message());
        (self.status(), Json(body)).into_response()
    }
}

/// RepositoryError
///
/// Failures of the privileged data access layer. Not-found on reads is never an
/// error (reads return `Option`/`Vec`); these come from writes only.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("unique constraint violated: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::Conflict(db.constraint().unwrap_or("unique").to_string())
            }
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ApiError::not_found("Enregistrement"),
            RepositoryError::Conflict(_) => ApiError::Conflict(
                "Un enregistrement avec cet identifiant existe déjà".to_string(),
            ),
            RepositoryError::Database(detail) => ApiError::upstream("base de données", detail),
        }
    }
}
