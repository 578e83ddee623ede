use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
    response::Redirect,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    config::{AppConfig, Env},
    error::ApiError,
};

/// Where admin pages send visitors without a session.
pub const LOGIN_PATH: &str = "/admin/login";

/// Claims
///
/// Payload of the session JWT issued by the hosted auth service.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The auth user's id.
    pub sub: Uuid,
    pub exp: usize,
    pub iat: usize,
    /// Always "authenticated" for signed-in users.
    pub aud: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// AdminSession
///
/// The resolved identity of a signed-in administrator. Every account of the
/// auth service is an administrator; there is no finer role model.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user_id: Uuid,
    pub email: Option<String>,
}

/// session_token
///
/// Finds the session token of a request: the session cookie first, then an
/// `Authorization: Bearer` header (used by scripted clients).
pub fn session_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    let from_cookie = parts
        .headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty());

    from_cookie.or_else(|| {
        parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string)
    })
}

/// verify_token
///
/// Checks signature, expiry and audience of a session token.
pub fn verify_token(token: &str, config: &AppConfig) -> Result<Claims, ApiError> {
    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.set_audience(&[config.jwt_audience.as_str()]);

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "session token rejected");
            ApiError::Unauthorized
        })
}

/// issue_token
///
/// Mints a session token the way the auth service does. Used by the mock auth
/// provider and by tests.
pub fn issue_token(
    secret: &str,
    audience: &str,
    user_id: Uuid,
    email: Option<&str>,
    ttl_secs: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    let claims = Claims {
        sub: user_id,
        iat: now as usize,
        exp: (now + ttl_secs) as usize,
        aud: audience.to_string(),
        email: email.map(str::to_string),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

fn resolve_session(parts: &Parts, config: &AppConfig) -> Result<AdminSession, ApiError> {
    let token = session_token(parts, &config.session_cookie).ok_or(ApiError::Unauthorized)?;
    let claims = verify_token(&token, config)?;
    Ok(AdminSession {
        user_id: claims.sub,
        email: claims.email,
    })
}

/// AdminSession Extractor
///
/// First extractor of every privileged API handler, which also logs the acting
/// administrator from it. Rejects with a JSON 401.
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    AppConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);
        resolve_session(parts, &config)
    }
}

/// AdminPage
///
/// Session check for admin page renderers: same verification as
/// `AdminSession`, but a missing or invalid session redirects to the login page
/// instead of answering 401. Runs before any data is fetched.
#[derive(Debug, Clone)]
pub struct AdminPage(pub AdminSession);

impl<S> FromRequestParts<S> for AdminPage
where
    S: Send + Sync,
    AppConfig: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);
        resolve_session(parts, &config)
            .map(AdminPage)
            .map_err(|_| Redirect::to(LOGIN_PATH))
    }
}

// --- Session Cookie ---

pub fn session_cookie(config: &AppConfig, token: &str, max_age_secs: u64) -> String {
    let secure = if config.env == Env::Production {
        "; Secure"
    } else {
        ""
    };
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}{}",
        config.session_cookie, token, max_age_secs, secure
    )
}

pub fn cleared_session_cookie(config: &AppConfig) -> String {
    session_cookie(config, "", 0)
}

// --- Auth Service ---

/// A session opened by the auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    /// Lifetime of `access_token` in seconds.
    pub expires_in: u64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("auth service error: {0}")]
    Upstream(String),
}

/// AuthProvider
///
/// Password sign-in against the hosted auth service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;
}

/// SupabaseAuthClient
///
/// `AuthProvider` over the auth service's password grant endpoint.
#[derive(Clone)]
pub struct SupabaseAuthClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseAuthClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);

        let response = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::Upstream(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 400 || status.as_u16() == 401 {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::Upstream(format!("status {}", status)));
        }

        response
            .json::<AuthSession>()
            .await
            .map_err(|e| AuthError::Upstream(e.to_string()))
    }
}

/// MockAuthProvider
///
/// Accepts exactly one email/password pair and answers with a real, verifiable
/// session token signed with the configured secret.
#[derive(Clone)]
pub struct MockAuthProvider {
    pub email: String,
    pub password: String,
    pub user_id: Uuid,
    secret: String,
    audience: String,
}

impl MockAuthProvider {
    pub fn new(email: &str, password: &str, config: &AppConfig) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            user_id: Uuid::new_v4(),
            secret: config.jwt_secret.clone(),
            audience: config.jwt_audience.clone(),
        }
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        if email != self.email || password != self.password {
            return Err(AuthError::InvalidCredentials);
        }
        let expires_in = 3600;
        let access_token = issue_token(
            &self.secret,
            &self.audience,
            self.user_id,
            Some(email),
            expires_in,
        )
        .map_err(|e| AuthError::Upstream(e.to_string()))?;

        Ok(AuthSession {
            access_token,
            expires_in,
        })
    }
}

pub type AuthProviderState = Arc<dyn AuthProvider>;
