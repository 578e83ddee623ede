use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use super::{CategoryFilter, EntityId};
use crate::{
    AppState,
    auth::AdminSession,
    error::{ApiError, ApiMessage},
    models::{NewReport, Report, ReportUpdate},
    validation::{QueryParams, ValidatedJson},
};

/// list_reports
///
/// [Public Route] Downloadable publications, most recent first, optionally for
/// one category.
#[utoipa::path(
    get,
    path = "/api/reports",
    params(CategoryFilter),
    responses((status = 200, description = "Reports", body = [Report]))
)]
pub async fn list_reports(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<CategoryFilter>,
) -> Json<Vec<Report>> {
    let reports = match filter.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => {
            state.public.list_reports_by_category(category).await
        }
        _ => state.public.list_reports().await,
    };
    Json(reports)
}

#[utoipa::path(
    post,
    path = "/api/reports/create",
    request_body = NewReport,
    responses(
        (status = 201, description = "Created", body = Report),
        (status = 400, description = "Invalid input", body = ApiMessage),
        (status = 401, description = "No session", body = ApiMessage)
    )
)]
pub async fn create_report(
    session: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewReport>,
) -> Result<(StatusCode, Json<Report>), ApiError> {
    let report = state.admin.create_report(input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, report = %report.id, "report created");
    Ok((StatusCode::CREATED, Json(report)))
}

#[utoipa::path(
    put,
    path = "/api/reports/update",
    params(("id" = Uuid, Query, description = "Report ID")),
    request_body = ReportUpdate,
    responses(
        (status = 200, description = "Updated", body = Report),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn update_report(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(input): ValidatedJson<ReportUpdate>,
) -> Result<Json<Report>, ApiError> {
    let report = state.admin.update_report(id, input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, report = %id, "report updated");
    Ok(Json(report))
}

#[utoipa::path(
    delete,
    path = "/api/reports/delete",
    params(("id" = Uuid, Query, description = "Report ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiMessage),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn delete_report(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<ApiMessage>, ApiError> {
    state.admin.delete_report(id).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, report = %id, "report deleted");
    Ok(Json(ApiMessage::ok("Rapport supprimé")))
}
