use crate::{
    AppState,
    pages::{public, search},
};
use axum::{Router, routing::get};

/// Page Router Module
///
/// Public pages of the site, nested under `/pages`.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        // --- Static pages, served from the page cache ---
        .route("/home", get(public::home_page))
        .route("/actualites/{slug}", get(public::article_page))
        .route("/directions", get(public::directorates_page))
        .route("/directions/{slug}", get(public::directorate_page))
        .route("/publications", get(public::publications_page))
        .route("/institution", get(public::institution_page))
        .route(
            "/titres-publics/resultats/{slug}",
            get(public::auction_result_page),
        )
        // --- Per-request pages ---
        // GET /pages/actualites?category=...&page=...
        .route("/actualites", get(search::news_page))
        // GET /pages/titres-publics?q=...
        .route("/titres-publics", get(search::securities_page))
        // GET /pages/faq?q=...
        .route("/faq", get(search::faq_page))
        // GET /pages/calendrier?year=...&month=...
        .route("/calendrier", get(search::calendar_page))
}
