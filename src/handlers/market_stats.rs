use axum::{Json, extract::State, http::StatusCode};

use super::EntityId;
use crate::{
    AppState,
    auth::AdminSession,
    error::{ApiError, ApiMessage},
    models::{MarketStat, MarketStatUpdate, NewMarketStat},
    validation::ValidatedJson,
};

/// list_market_stats
///
/// [Public Route] Key figures displayed on the securities page.
#[utoipa::path(
    get,
    path = "/api/market-stats",
    responses((status = 200, description = "Market statistics", body = [MarketStat]))
)]
pub async fn list_market_stats(State(state): State<AppState>) -> Json<Vec<MarketStat>> {
    Json(state.public.list_market_stats().await)
}

#[utoipa::path(
    post,
    path = "/api/market-stats/create",
    request_body = NewMarketStat,
    responses(
        (status = 201, description = "Created", body = MarketStat),
        (status = 400, description = "Invalid input", body = ApiMessage),
        (status = 401, description = "No session", body = ApiMessage),
        (status = 409, description = "Key already used", body = ApiMessage)
    )
)]
pub async fn create_market_stat(
    session: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewMarketStat>,
) -> Result<(StatusCode, Json<MarketStat>), ApiError> {
    let stat = state.admin.create_market_stat(input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, stat = %stat.name, "market stat created");
    Ok((StatusCode::CREATED, Json(stat)))
}

#[utoipa::path(
    put,
    path = "/api/market-stats/update",
    params(("id" = Uuid, Query, description = "Statistic ID")),
    request_body = MarketStatUpdate,
    responses(
        (status = 200, description = "Updated", body = MarketStat),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn update_market_stat(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(input): ValidatedJson<MarketStatUpdate>,
) -> Result<Json<MarketStat>, ApiError> {
    let stat = state.admin.update_market_stat(id, input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, stat = %id, "market stat updated");
    Ok(Json(stat))
}

#[utoipa::path(
    delete,
    path = "/api/market-stats/delete",
    params(("id" = Uuid, Query, description = "Statistic ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiMessage),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn delete_market_stat(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<ApiMessage>, ApiError> {
    state.admin.delete_market_stat(id).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, stat = %id, "market stat deleted");
    Ok(Json(ApiMessage::ok("Statistique supprimée")))
}
