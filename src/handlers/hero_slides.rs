use axum::{Json, extract::State, http::StatusCode};

use super::EntityId;
use crate::{
    AppState,
    auth::AdminSession,
    error::{ApiError, ApiMessage},
    models::{HeroSlide, HeroSlideUpdate, NewHeroSlide},
    validation::ValidatedJson,
};

/// list_hero_slides
///
/// [Public Route] Home carousel entries, most recent first.
#[utoipa::path(
    get,
    path = "/api/hero-slides",
    responses((status = 200, description = "Slides", body = [HeroSlide]))
)]
pub async fn list_hero_slides(State(state): State<AppState>) -> Json<Vec<HeroSlide>> {
    Json(state.public.list_hero_slides().await)
}

#[utoipa::path(
    post,
    path = "/api/hero-slides/create",
    request_body = NewHeroSlide,
    responses(
        (status = 201, description = "Created", body = HeroSlide),
        (status = 400, description = "Invalid input", body = ApiMessage),
        (status = 401, description = "No session", body = ApiMessage)
    )
)]
pub async fn create_hero_slide(
    session: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewHeroSlide>,
) -> Result<(StatusCode, Json<HeroSlide>), ApiError> {
    let slide = state.admin.create_hero_slide(input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, slide = %slide.id, "hero slide created");
    Ok((StatusCode::CREATED, Json(slide)))
}

#[utoipa::path(
    put,
    path = "/api/hero-slides/update",
    params(("id" = Uuid, Query, description = "Slide ID")),
    request_body = HeroSlideUpdate,
    responses(
        (status = 200, description = "Updated", body = HeroSlide),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn update_hero_slide(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(input): ValidatedJson<HeroSlideUpdate>,
) -> Result<Json<HeroSlide>, ApiError> {
    let slide = state.admin.update_hero_slide(id, input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, slide = %id, "hero slide updated");
    Ok(Json(slide))
}

#[utoipa::path(
    delete,
    path = "/api/hero-slides/delete",
    params(("id" = Uuid, Query, description = "Slide ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiMessage),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn delete_hero_slide(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<ApiMessage>, ApiError> {
    state.admin.delete_hero_slide(id).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, slide = %id, "hero slide deleted");
    Ok(Json(ApiMessage::ok("Diapositive supprimée")))
}
