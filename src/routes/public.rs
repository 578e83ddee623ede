use crate::{
    AppState,
    handlers::{
        articles, auctions, auth, directorates, forms, hero_slides, institution, market_stats,
        reports,
    },
};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Endpoints open to anonymous visitors: read-only content, the two public
/// forms, and the sign-in/sign-out pair. Reads go through the public-read
/// repository only.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe for the load balancer.
        .route("/health", get(|| async { "ok" }))
        // --- News ---
        .route("/api/categories", get(articles::list_categories))
        // GET /api/articles?category=...
        .route("/api/articles", get(articles::list_articles))
        .route("/api/articles/{slug}", get(articles::get_article))
        // --- Directorates & Carousel ---
        .route("/api/directorates", get(directorates::list_directorates))
        .route("/api/directorates/{slug}", get(directorates::get_directorate))
        .route("/api/hero-slides", get(hero_slides::list_hero_slides))
        // --- Publications ---
        // GET /api/reports?category=...
        .route("/api/reports", get(reports::list_reports))
        // --- Government Securities ---
        .route("/api/upcoming-auctions", get(auctions::list_upcoming_auctions))
        .route("/api/auction-results", get(auctions::list_auction_results))
        .route("/api/auction-results/{slug}", get(auctions::get_auction_result))
        .route("/api/market-stats", get(market_stats::list_market_stats))
        // --- Institution ---
        // GET /api/institution/personnel/{dg|dga}
        .route(
            "/api/institution/personnel/{role}",
            get(institution::get_personnel),
        )
        .route(
            "/api/institution/organigramme",
            get(institution::get_organigramme),
        )
        // --- Public Forms ---
        // POST /api/contact
        // Forwards the message to the directorate's mailbox.
        .route("/api/contact", post(forms::submit_contact))
        // POST /api/investisseurs/inscription
        // Acknowledged and logged only.
        .route(
            "/api/investisseurs/inscription",
            post(forms::register_investor),
        )
        // --- Session ---
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
}
