//! Leadership records (one per role) and the organization chart.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::{EntityId, RoleQuery, parse_role};
use crate::{
    AppState,
    auth::AdminSession,
    error::{ApiError, ApiMessage},
    models::{NewOrganigramme, Organigramme, Personnel, PersonnelInput},
    validation::ValidatedJson,
};

/// get_personnel
///
/// [Public Route] The record of the `dg` or `dga`.
#[utoipa::path(
    get,
    path = "/api/institution/personnel/{role}",
    params(("role" = String, Path, description = "dg or dga")),
    responses(
        (status = 200, description = "Found", body = Personnel),
        (status = 400, description = "Unknown role", body = ApiMessage),
        (status = 404, description = "Role not filled", body = ApiMessage)
    )
)]
pub async fn get_personnel(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<Personnel>, ApiError> {
    let role = parse_role(&role)?;
    state
        .public
        .get_personnel(role)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Responsable"))
}

/// get_organigramme
///
/// [Public Route] The active organization chart.
#[utoipa::path(
    get,
    path = "/api/institution/organigramme",
    responses(
        (status = 200, description = "Active chart", body = Organigramme),
        (status = 404, description = "No chart published", body = ApiMessage)
    )
)]
pub async fn get_organigramme(
    State(state): State<AppState>,
) -> Result<Json<Organigramme>, ApiError> {
    state
        .public
        .get_active_organigramme()
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Organigramme"))
}

/// update_personnel
///
/// [Admin Route] Creates or replaces the record of a role. The whole record is
/// submitted; there is no partial form for personnel.
#[utoipa::path(
    put,
    path = "/api/institution/personnel/update",
    params(("role" = String, Query, description = "dg or dga")),
    request_body = PersonnelInput,
    responses(
        (status = 200, description = "Saved", body = Personnel),
        (status = 400, description = "Invalid input", body = ApiMessage),
        (status = 401, description = "No session", body = ApiMessage)
    )
)]
pub async fn update_personnel(
    session: AdminSession,
    State(state): State<AppState>,
    RoleQuery(role): RoleQuery,
    ValidatedJson(input): ValidatedJson<PersonnelInput>,
) -> Result<Json<Personnel>, ApiError> {
    let personnel = state.admin.upsert_personnel(role, input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, role = %role, "personnel saved");
    Ok(Json(personnel))
}

#[utoipa::path(
    delete,
    path = "/api/institution/personnel/delete",
    params(("role" = String, Query, description = "dg or dga")),
    responses(
        (status = 200, description = "Deleted", body = ApiMessage),
        (status = 404, description = "Role not filled", body = ApiMessage)
    )
)]
pub async fn delete_personnel(
    session: AdminSession,
    State(state): State<AppState>,
    RoleQuery(role): RoleQuery,
) -> Result<Json<ApiMessage>, ApiError> {
    state.admin.delete_personnel(role).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, role = %role, "personnel deleted");
    Ok(Json(ApiMessage::ok("Responsable supprimé")))
}

/// create_organigramme
///
/// [Admin Route] Publishes a new chart. It becomes the active one and every
/// previous chart is deactivated.
#[utoipa::path(
    post,
    path = "/api/institution/organigramme/create",
    request_body = NewOrganigramme,
    responses(
        (status = 201, description = "Created", body = Organigramme),
        (status = 400, description = "Invalid input", body = ApiMessage),
        (status = 401, description = "No session", body = ApiMessage)
    )
)]
pub async fn create_organigramme(
    session: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewOrganigramme>,
) -> Result<(StatusCode, Json<Organigramme>), ApiError> {
    let chart = state.admin.create_organigramme(input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, organigramme = %chart.id, "organigramme published");
    Ok((StatusCode::CREATED, Json(chart)))
}

#[utoipa::path(
    delete,
    path = "/api/institution/organigramme/delete",
    params(("id" = Uuid, Query, description = "Chart ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiMessage),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn delete_organigramme(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<ApiMessage>, ApiError> {
    state.admin.delete_organigramme(id).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, organigramme = %id, "organigramme deleted");
    Ok(Json(ApiMessage::ok("Organigramme supprimé")))
}
