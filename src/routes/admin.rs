use crate::{
    AppState,
    handlers::{
        articles, auctions, directorates, hero_slides, institution, market_stats, reports,
        uploads,
    },
};
use axum::{
    Router,
    routing::{delete, post, put},
};

/// Admin API Router Module
///
/// Every content type follows the same shape:
/// - `POST   /api/<entity>/create`        → 201 + the created record
/// - `PUT    /api/<entity>/update?id=`    → 200 + the updated record
/// - `DELETE /api/<entity>/delete?id=`    → 200 + `{ success, message }`
/// - `POST   /api/<entity>/upload-image`  → 200 + `{ imageUrl }`
///
/// Each route accepts exactly one method; any other verb gets a 405 from the
/// method router, whatever the session.
///
/// Access Control:
/// Every handler takes `AdminSession` as its first extractor. It only runs once
/// the method matched, and rejects with a 401 before the body is read.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // --- Articles ---
        .route("/api/articles/create", post(articles::create_article))
        .route("/api/articles/update", put(articles::update_article))
        .route("/api/articles/delete", delete(articles::delete_article))
        .route(
            "/api/articles/upload-image",
            post(uploads::upload_article_image),
        )
        // --- Directorates ---
        .route(
            "/api/directorates/create",
            post(directorates::create_directorate),
        )
        .route(
            "/api/directorates/update",
            put(directorates::update_directorate),
        )
        .route(
            "/api/directorates/delete",
            delete(directorates::delete_directorate),
        )
        .route(
            "/api/directorates/upload-image",
            post(uploads::upload_directorate_image),
        )
        // --- Hero Slides ---
        .route("/api/hero-slides/create", post(hero_slides::create_hero_slide))
        .route("/api/hero-slides/update", put(hero_slides::update_hero_slide))
        .route(
            "/api/hero-slides/delete",
            delete(hero_slides::delete_hero_slide),
        )
        .route(
            "/api/hero-slides/upload-image",
            post(uploads::upload_hero_image),
        )
        // --- Reports ---
        // Reports carry two files: the PDF (`fileUrl`) and a cover image.
        .route("/api/reports/create", post(reports::create_report))
        .route("/api/reports/update", put(reports::update_report))
        .route("/api/reports/delete", delete(reports::delete_report))
        .route("/api/reports/upload-pdf", post(uploads::upload_report_pdf))
        .route(
            "/api/reports/upload-image",
            post(uploads::upload_report_cover),
        )
        // --- Upcoming Auctions ---
        .route(
            "/api/upcoming-auctions/create",
            post(auctions::create_upcoming_auction),
        )
        .route(
            "/api/upcoming-auctions/update",
            put(auctions::update_upcoming_auction),
        )
        .route(
            "/api/upcoming-auctions/delete",
            delete(auctions::delete_upcoming_auction),
        )
        // --- Auction Results ---
        .route(
            "/api/auction-results/create",
            post(auctions::create_auction_result),
        )
        .route(
            "/api/auction-results/update",
            put(auctions::update_auction_result),
        )
        .route(
            "/api/auction-results/delete",
            delete(auctions::delete_auction_result),
        )
        // --- Market Statistics ---
        .route(
            "/api/market-stats/create",
            post(market_stats::create_market_stat),
        )
        .route(
            "/api/market-stats/update",
            put(market_stats::update_market_stat),
        )
        .route(
            "/api/market-stats/delete",
            delete(market_stats::delete_market_stat),
        )
        // --- Institution ---
        // Personnel is keyed by role (`?role=dg|dga`) instead of id.
        .route(
            "/api/institution/personnel/update",
            put(institution::update_personnel),
        )
        .route(
            "/api/institution/personnel/delete",
            delete(institution::delete_personnel),
        )
        .route(
            "/api/institution/personnel/upload-image",
            post(uploads::upload_personnel_photo),
        )
        // POST /api/institution/organigramme/create
        // The new chart becomes the only active one.
        .route(
            "/api/institution/organigramme/create",
            post(institution::create_organigramme),
        )
        .route(
            "/api/institution/organigramme/delete",
            delete(institution::delete_organigramme),
        )
        .route(
            "/api/institution/organigramme/upload-image",
            post(uploads::upload_organigramme_image),
        )
}
