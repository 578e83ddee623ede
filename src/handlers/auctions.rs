//! Government securities: planned auctions and realized results.

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
    models::{
        AuctionResult, AuctionResultUpdate, NewAuctionResult, NewUpcomingAuction,
        UpcomingAuction, UpcomingAuctionUpdate,
    },
    validation::ValidatedJson,
};

// --- Upcoming Auctions ---

/// list_upcoming_auctions
///
/// [Public Route] Planned issuances, soonest first.
#[utoipa::path(
    get,
    path = "/api/upcoming-auctions",
    responses((status = 200, description = "Upcoming auctions", body = [UpcomingAuction]))
)]
pub async fn list_upcoming_auctions(State(state): State<AppState>) -> Json<Vec<UpcomingAuction>> {
    Json(state.public.list_upcoming_auctions().await)
}

#[utoipa::path(
    post,
    path = "/api/upcoming-auctions/create",
    request_body = NewUpcomingAuction,
    responses(
        (status = 201, description = "Created", body = UpcomingAuction),
        (status = 400, description = "Invalid input", body = ApiMessage),
        (status = 401, description = "No session", body = ApiMessage)
    )
)]
pub async fn create_upcoming_auction(
    session: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewUpcomingAuction>,
) -> Result<(StatusCode, Json<UpcomingAuction>), ApiError> {
    let auction = state.admin.create_upcoming_auction(input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, auction = %auction.id, "upcoming auction created");
    Ok((StatusCode::CREATED, Json(auction)))
}

#[utoipa::path(
    put,
    path = "/api/upcoming-auctions/update",
    params(("id" = Uuid, Query, description = "Auction ID")),
    request_body = UpcomingAuctionUpdate,
    responses(
        (status = 200, description = "Updated", body = UpcomingAuction),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn update_upcoming_auction(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(input): ValidatedJson<UpcomingAuctionUpdate>,
) -> Result<Json<UpcomingAuction>, ApiError> {
    let auction = state.admin.update_upcoming_auction(id, input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, auction = %id, "upcoming auction updated");
    Ok(Json(auction))
}

#[utoipa::path(
    delete,
    path = "/api/upcoming-auctions/delete",
    params(("id" = Uuid, Query, description = "Auction ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiMessage),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn delete_upcoming_auction(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<ApiMessage>, ApiError> {
    state.admin.delete_upcoming_auction(id).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, auction = %id, "upcoming auction deleted");
    Ok(Json(ApiMessage::ok("Adjudication supprimée")))
}

// --- Auction Results ---

/// list_auction_results
///
/// [Public Route] Realized issuances, most recent first.
#[utoipa::path(
    get,
    path = "/api/auction-results",
    responses((status = 200, description = "Auction results", body = [AuctionResult]))
)]
pub async fn list_auction_results(State(state): State<AppState>) -> Json<Vec<AuctionResult>> {
    Json(state.public.list_auction_results().await)
}

#[utoipa::path(
    get,
    path = "/api/auction-results/{slug}",
    params(("slug" = String, Path, description = "Result slug")),
    responses(
        (status = 200, description = "Found", body = AuctionResult),
        (status = 404, description = "Unknown slug", body = ApiMessage)
    )
)]
pub async fn get_auction_result(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<AuctionResult>, ApiError> {
    state
        .public
        .get_auction_result_by_slug(&slug)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Résultat d'adjudication"))
}

/// create_auction_result
///
/// [Admin Route] Records the outcome of an auction. The slug must be unique.
#[utoipa::path(
    post,
    path = "/api/auction-results/create",
    request_body = NewAuctionResult,
    responses(
        (status = 201, description = "Created", body = AuctionResult),
        (status = 400, description = "Invalid input", body = ApiMessage),
        (status = 401, description = "No session", body = ApiMessage),
        (status = 409, description = "Slug already used", body = ApiMessage)
    )
)]
pub async fn create_auction_result(
    session: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewAuctionResult>,
) -> Result<(StatusCode, Json<AuctionResult>), ApiError> {
    let result = state.admin.create_auction_result(input).await?;
    state.pages.invalidate().await;

    tracing::info!(
        admin = %session.user_id,
        result = %result.id,
        slug = %result.slug,
        "auction result created"
    );
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    put,
    path = "/api/auction-results/update",
    params(("id" = Uuid, Query, description = "Result ID")),
    request_body = AuctionResultUpdate,
    responses(
        (status = 200, description = "Updated", body = AuctionResult),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn update_auction_result(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(input): ValidatedJson<AuctionResultUpdate>,
) -> Result<Json<AuctionResult>, ApiError> {
    let result = state.admin.update_auction_result(id, input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, result = %id, "auction result updated");
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/api/auction-results/delete",
    params(("id" = Uuid, Query, description = "Result ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiMessage),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn delete_auction_result(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<ApiMessage>, ApiError> {
    state.admin.delete_auction_result(id).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, result = %id, "auction result deleted");
    Ok(Json(ApiMessage::ok("Résultat supprimé")))
}
