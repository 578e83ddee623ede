use axum::{
    Json,
    extract::State,
    http::header,
    response::{AppendHeaders, IntoResponse},
};

use crate::{
    AppState,
    auth::{AuthError, cleared_session_cookie, session_cookie},
    error::{ApiError, ApiMessage},
    models::LoginRequest,
    validation::ValidatedJson,
};

/// login
///
/// [Public Route] Password sign-in through the auth service. On success the
/// session token is set as an HttpOnly cookie; the token itself is not
/// returned in the body.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in, session cookie set", body = ApiMessage),
        (status = 401, description = "Invalid credentials", body = ApiMessage),
        (status = 502, description = "Auth service unavailable", body = ApiMessage)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(credentials): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .auth
        .sign_in(credentials.email.trim(), &credentials.password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => {
                tracing::warn!("admin sign-in refused");
                ApiError::Unauthorized
            }
            AuthError::Upstream(detail) => ApiError::upstream("authentification", detail),
        })?;

    let cookie = session_cookie(&state.config, &session.access_token, session.expires_in);
    tracing::info!("admin signed in");

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(ApiMessage::ok("Connexion réussie")),
    ))
}

/// logout
///
/// [Public Route] Clears the session cookie. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "Session cookie cleared", body = ApiMessage))
)]
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        AppendHeaders([(header::SET_COOKIE, cleared_session_cookie(&state.config))]),
        Json(ApiMessage::ok("Déconnexion réussie")),
    )
}
