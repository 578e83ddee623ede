use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::{CategoryFilter, EntityId};
use crate::{
    AppState,
    auth::AdminSession,
    error::{ApiError, ApiMessage},
    models::{Article, ArticleUpdate, Category, NewArticle},
    validation::{QueryParams, ValidatedJson},
};

/// list_categories
///
/// [Public Route] News categories, by name.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, description = "Categories", body = [Category]))
)]
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.public.list_categories().await)
}

/// list_articles
///
/// [Public Route] Articles, newest first, optionally restricted to one category.
#[utoipa::path(
    get,
    path = "/api/articles",
    params(CategoryFilter),
    responses((status = 200, description = "Articles", body = [Article]))
)]
pub async fn list_articles(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<CategoryFilter>,
) -> Json<Vec<Article>> {
    let articles = match filter.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => {
            state.public.list_articles_by_category(category).await
        }
        _ => state.public.list_articles().await,
    };
    Json(articles)
}

/// get_article
///
/// [Public Route] One article by slug.
#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Found", body = Article),
        (status = 404, description = "Unknown slug", body = ApiMessage)
    )
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Article>, ApiError> {
    state
        .public
        .get_article_by_slug(&slug)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Article"))
}

/// create_article
///
/// [Admin Route] Publishes a new article. `publishedAt` defaults to now.
#[utoipa::path(
    post,
    path = "/api/articles/create",
    request_body = NewArticle,
    responses(
        (status = 201, description = "Created", body = Article),
        (status = 400, description = "Invalid input", body = ApiMessage),
        (status = 401, description = "No session", body = ApiMessage),
        (status = 409, description = "Slug already used", body = ApiMessage)
    )
)]
pub async fn create_article(
    session: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewArticle>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    let article = state.admin.create_article(input).await?;
    state.pages.invalidate().await;

    tracing::info!(
        admin = %session.user_id,
        article = %article.id,
        slug = %article.slug,
        "article created"
    );
    Ok((StatusCode::CREATED, Json(article)))
}

/// update_article
///
/// [Admin Route] Partial update: only the submitted fields change.
#[utoipa::path(
    put,
    path = "/api/articles/update",
    params(("id" = Uuid, Query, description = "Article ID")),
    request_body = ArticleUpdate,
    responses(
        (status = 200, description = "Updated", body = Article),
        (status = 401, description = "No session", body = ApiMessage),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn update_article(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(input): ValidatedJson<ArticleUpdate>,
) -> Result<Json<Article>, ApiError> {
    let article = state.admin.update_article(id, input).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, article = %id, "article updated");
    Ok(Json(article))
}

/// delete_article
#[utoipa::path(
    delete,
    path = "/api/articles/delete",
    params(("id" = Uuid, Query, description = "Article ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiMessage),
        (status = 401, description = "No session", body = ApiMessage),
        (status = 404, description = "Unknown id", body = ApiMessage)
    )
)]
pub async fn delete_article(
    session: AdminSession,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<ApiMessage>, ApiError> {
    state.admin.delete_article(id).await?;
    state.pages.invalidate().await;

    tracing::info!(admin = %session.user_id, article = %id, "article deleted");
    Ok(Json(ApiMessage::ok("Article supprimé")))
}
