use crate::{AppState, pages::admin};
use axum::{Router, routing::get};

/// Admin Page Router Module
///
/// The admin screens, nested under `/admin`. There is no router-level guard
/// here: each renderer extracts `AdminPage`, which redirects to `/admin/login`
/// instead of answering 401.
pub fn admin_page_routes() -> Router<AppState> {
    Router::new()
        // GET /admin/login
        // The only admin screen reachable without a session.
        .route("/login", get(admin::login_page))
        .route("/", get(admin::dashboard_page))
        .route("/articles", get(admin::articles_page))
        .route("/articles/{id}", get(admin::article_edit_page))
        .route("/directorates", get(admin::directorates_page))
        .route("/hero-slides", get(admin::hero_slides_page))
        .route("/reports", get(admin::reports_page))
        .route("/auctions", get(admin::auctions_page))
        .route("/market-stats", get(admin::market_stats_page))
        .route("/institution", get(admin::institution_page))
}
