use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use serde_json::Value;

use super::{HOME_ARTICLES, HOME_AUCTIONS, RECENT_RESULTS, RELATED_ARTICLES, to_payload};
use crate::{
    AppState,
    error::ApiError,
    models::{
        Article, AuctionResult, Directorate, HeroSlide, MarketStat, Organigramme, Personnel,
        PersonnelRole, Report, UpcomingAuction,
    },
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub hero_slides: Vec<HeroSlide>,
    pub latest_articles: Vec<Article>,
    pub upcoming_auctions: Vec<UpcomingAuction>,
    pub latest_results: Vec<AuctionResult>,
    pub market_stats: Vec<MarketStat>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    pub article: Article,
    /// Display name of the article's category, when it exists.
    pub category_name: Option<String>,
    pub related: Vec<Article>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoratesPage {
    pub directorates: Vec<Directorate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoratePage {
    pub directorate: Directorate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationsPage {
    pub reports: Vec<Report>,
    /// Distinct report categories, in listing order.
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionPage {
    pub dg: Option<Personnel>,
    pub dga: Option<Personnel>,
    pub organigramme: Option<Organigramme>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionResultPage {
    pub result: AuctionResult,
    pub other_results: Vec<AuctionResult>,
}

async fn cached<F, Fut>(state: &AppState, key: &str, render: F) -> Result<Json<Value>, ApiError>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<Value, ApiError>>,
{
    state.pages.get_or_render(key, render).await.map(Json)
}

// --- Home ---

/// home_page
///
/// Carousel, latest news, the next auctions, latest results and key figures.
pub async fn home_page(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    cached(&state, "home", || render_home(&state)).await
}

async fn render_home(state: &AppState) -> Result<Value, ApiError> {
    let repo = &state.public;
    let (hero_slides, articles, auctions, results, market_stats) = tokio::join!(
        repo.list_hero_slides(),
        repo.list_articles(),
        repo.list_upcoming_auctions(),
        repo.list_auction_results(),
        repo.list_market_stats(),
    );

    to_payload(&HomePage {
        hero_slides,
        latest_articles: articles.into_iter().take(HOME_ARTICLES).collect(),
        upcoming_auctions: auctions.into_iter().take(HOME_AUCTIONS).collect(),
        latest_results: results.into_iter().take(RECENT_RESULTS).collect(),
        market_stats,
    })
}

// --- News ---

/// article_page
///
/// One article with its category name and a few articles of the same category.
pub async fn article_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let key = format!("actualites/{}", slug);
    cached(&state, &key, || render_article(&state, &slug)).await
}

async fn render_article(state: &AppState, slug: &str) -> Result<Value, ApiError> {
    let article = state
        .public
        .get_article_by_slug(slug)
        .await
        .ok_or_else(|| ApiError::not_found("Article"))?;

    let category_name = state
        .public
        .list_categories()
        .await
        .into_iter()
        .find(|c| c.slug == article.category)
        .map(|c| c.name);

    let related = state
        .public
        .list_articles_by_category(&article.category)
        .await
        .into_iter()
        .filter(|a| a.id != article.id)
        .take(RELATED_ARTICLES)
        .collect();

    to_payload(&ArticlePage {
        article,
        category_name,
        related,
    })
}

// --- Directorates ---

pub async fn directorates_page(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    cached(&state, "directions", || async {
        to_payload(&DirectoratesPage {
            directorates: state.public.list_directorates().await,
        })
    })
    .await
}

pub async fn directorate_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let key = format!("directions/{}", slug);
    cached(&state, &key, || async {
        let directorate = state
            .public
            .get_directorate_by_slug(&slug)
            .await
            .ok_or_else(|| ApiError::not_found("Direction"))?;
        to_payload(&DirectoratePage { directorate })
    })
    .await
}

// --- Publications ---

pub async fn publications_page(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    cached(&state, "publications", || async {
        let reports = state.public.list_reports().await;

        let mut categories: Vec<String> = Vec::new();
        for report in &reports {
            if !categories.contains(&report.category) {
                categories.push(report.category.clone());
            }
        }

        to_payload(&PublicationsPage {
            reports,
            categories,
        })
    })
    .await
}

// --- Institution ---

/// institution_page
///
/// Both leadership records and the active org chart, fetched concurrently.
pub async fn institution_page(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    cached(&state, "institution", || async {
        let repo = &state.public;
        let (dg, dga, organigramme) = tokio::join!(
            repo.get_personnel(PersonnelRole::Dg),
            repo.get_personnel(PersonnelRole::Dga),
            repo.get_active_organigramme(),
        );

        to_payload(&InstitutionPage {
            dg,
            dga,
            organigramme,
        })
    })
    .await
}

// --- Securities ---

pub async fn auction_result_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let key = format!("titres-publics/resultats/{}", slug);
    cached(&state, &key, || async {
        let result = state
            .public
            .get_auction_result_by_slug(&slug)
            .await
            .ok_or_else(|| ApiError::not_found("Résultat d'adjudication"))?;

        let other_results = state
            .public
            .list_auction_results()
            .await
            .into_iter()
            .filter(|r| r.id != result.id)
            .take(RECENT_RESULTS)
            .collect();

        to_payload(&AuctionResultPage {
            result,
            other_results,
        })
    })
    .await
}
