use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::EntityId;
use crate::{
    AppState,
    auth::AdminSession,
    error::{ApiError, ApiMessage},
    models::{Directorate, DirectorateUpdate, NewDirectorate},
    validation::ValidatedJson,
};

/// list_directorates
///
/// [Public Route] Every directorate, by name.
#[utoipa::path(
    get,
    path = "/api/directorates",
    responses((status = 200, description = "Directorates", body = [Directorate]))
)]
pub async fn list_directorates(State(state): State<AppState>) -> Json<Vec<Directorate>> {
    Json(state.public.list_directorates().await)
}

#[utoipa::path(
    get,
    path = "/api/directorates/{slug}",
    params(("slug" = String, Path, description = "Directorate slug")),
    responses(
        (status = 200, description = "Found", body = Directorate),
        (status = 404, description = "Unknown slug", body = ApiMessage)
    )
)]
pub async fn get_directorate(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Directorate>, ApiError> {
    state
        .public
        .get_directorate_by_slug(&slug)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Direction"))
}

#[utoipa::path(
    post,
    path = "/api/directorates/create",
    request_body = NewDirectorate,
    responses(
        (status = 201, description = "Created", body = Directorate),
        (status = 400, description = "Invalid input", body = ApiMessage),
        (status = 401, description = "No session", body = ApiMessage),
        (status = 409, description = "Slug already used", body = ApiMessage)
    )
)]
pub async fn create_directorate(
    session: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewDirectorate>,
) -> Result<(StatusCode, Json<Directorate>), ApiError> {
    let directorate = state.admin.create_directorate(input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, directorate = %directorate.id, "directorate created");
    Ok((StatusCode::CREATED, Json(directorate)))
}

#[utoipa::path(
    put,
    path = "/api/directorates/update",
    params(("id" = Uuid, Query, description = "Directorate ID")),
    request_body = DirectorateUpdate,
    responses(
        (status = 200, description = "Updated", body = Directorate),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn update_directorate(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(input): ValidatedJson<DirectorateUpdate>,
) -> Result<Json<Directorate>, ApiError> {
    let directorate = state.admin.update_directorate(id, input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, directorate = %id, "directorate updated");
    Ok(Json(directorate))
}

#[utoipa::path(
    delete,
    path = "/api/directorates/delete",
    params(("id" = Uuid, Query, description = "Directorate ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiMessage),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn delete_directorate(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<ApiMessage>, ApiError> {
    state.admin.delete_directorate(id).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, directorate = %id, "directorate deleted");
    Ok(Json(ApiMessage::ok("Direction supprimée")))
}
