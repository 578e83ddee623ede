//! Admin screens. Every renderer takes `AdminPage` first, so a visitor without
//! a session is redirected to the login page before anything is fetched.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    AppState,
    auth::AdminPage,
    error::ApiError,
    models::{
        Article, AuctionResult, Category, Directorate, HeroSlide, MarketStat, Organigramme,
        Personnel, PersonnelRole, Report, UpcomingAuction,
    },
};

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentCounts {
    pub articles: usize,
    pub directorates: usize,
    pub hero_slides: usize,
    pub reports: usize,
    pub upcoming_auctions: usize,
    pub auction_results: usize,
    pub market_stats: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPage {
    pub email: Option<String>,
    pub counts: ContentCounts,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesAdminPage {
    pub articles: Vec<Article>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleEditPage {
    pub article: Article,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionsAdminPage {
    pub upcoming_auctions: Vec<UpcomingAuction>,
    pub auction_results: Vec<AuctionResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionAdminPage {
    pub dg: Option<Personnel>,
    pub dga: Option<Personnel>,
    pub organigramme: Option<Organigramme>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPage {
    pub action: &'static str,
}

/// login_page
///
/// The sign-in form posts to this endpoint.
pub async fn login_page() -> Json<LoginPage> {
    Json(LoginPage {
        action: "/api/auth/login",
    })
}

/// dashboard_page
///
/// Content totals for the admin home.
pub async fn dashboard_page(
    AdminPage(session): AdminPage,
    State(state): State<AppState>,
) -> Json<DashboardPage> {
    let repo = &state.public;
    let (articles, directorates, slides, reports, upcoming, results, stats) = tokio::join!(
        repo.list_articles(),
        repo.list_directorates(),
        repo.list_hero_slides(),
        repo.list_reports(),
        repo.list_upcoming_auctions(),
        repo.list_auction_results(),
        repo.list_market_stats(),
    );

    Json(DashboardPage {
        email: session.email,
        counts: ContentCounts {
            articles: articles.len(),
            directorates: directorates.len(),
            hero_slides: slides.len(),
            reports: reports.len(),
            upcoming_auctions: upcoming.len(),
            auction_results: results.len(),
            market_stats: stats.len(),
        },
    })
}

pub async fn articles_page(
    _page: AdminPage,
    State(state): State<AppState>,
) -> Json<ArticlesAdminPage> {
    let (articles, categories) =
        tokio::join!(state.public.list_articles(), state.public.list_categories());
    Json(ArticlesAdminPage {
        articles,
        categories,
    })
}

/// article_edit_page
///
/// The edit form of one article. A malformed or unknown id is a 404.
pub async fn article_edit_page(
    _page: AdminPage,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArticleEditPage>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Article"))?;

    let article = state
        .public
        .get_article(id)
        .await
        .ok_or_else(|| ApiError::not_found("Article"))?;

    Ok(Json(ArticleEditPage {
        article,
        categories: state.public.list_categories().await,
    }))
}

pub async fn directorates_page(
    _page: AdminPage,
    State(state): State<AppState>,
) -> Json<Vec<Directorate>> {
    Json(state.public.list_directorates().await)
}

pub async fn hero_slides_page(
    _page: AdminPage,
    State(state): State<AppState>,
) -> Json<Vec<HeroSlide>> {
    Json(state.public.list_hero_slides().await)
}

pub async fn reports_page(_page: AdminPage, State(state): State<AppState>) -> Json<Vec<Report>> {
    Json(state.public.list_reports().await)
}

pub async fn auctions_page(
    _page: AdminPage,
    State(state): State<AppState>,
) -> Json<AuctionsAdminPage> {
    let (upcoming_auctions, auction_results) = tokio::join!(
        state.public.list_upcoming_auctions(),
        state.public.list_auction_results()
    );
    Json(AuctionsAdminPage {
        upcoming_auctions,
        auction_results,
    })
}

pub async fn market_stats_page(
    _page: AdminPage,
    State(state): State<AppState>,
) -> Json<Vec<MarketStat>> {
    Json(state.public.list_market_stats().await)
}

pub async fn institution_page(
    _page: AdminPage,
    State(state): State<AppState>,
) -> Json<InstitutionAdminPage> {
    let repo = &state.public;
    let (dg, dga, organigramme) = tokio::join!(
        repo.get_personnel(PersonnelRole::Dg),
        repo.get_personnel(PersonnelRole::Dga),
        repo.get_active_organigramme(),
    );
    Json(InstitutionAdminPage {
        dg,
        dga,
        organigramme,
    })
}
