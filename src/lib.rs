use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    http::HeaderName,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod error;
pub mod filters;
pub mod handlers;
pub mod mailer;
pub mod models;
pub mod pages;
pub mod repository;
pub mod storage;
pub mod validation;

// Routing, segregated by access level (public, admin API, pages, admin pages).
pub mod routes;
use routes::{admin, admin_pages, pages as page_routes, public};

// --- Public Re-exports ---

pub use auth::{AuthProviderState, MockAuthProvider, SupabaseAuthClient};
pub use config::AppConfig;
pub use mailer::{HttpMailer, MailerState, MockMailer};
pub use pages::PageCache;
pub use repository::{
    AdminRepositoryState, InMemoryRepository, PostgresRepository, PublicRepositoryState,
};
pub use storage::{MockStorageService, S3StorageClient, StorageState};

/// ApiDoc
///
/// OpenAPI document of the JSON API, served at `/api-docs/openapi.json` and
/// browsable at `/swagger-ui`. Page renderers are not part of it.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::articles::list_categories, handlers::articles::list_articles,
        handlers::articles::get_article, handlers::articles::create_article,
        handlers::articles::update_article, handlers::articles::delete_article,
        handlers::directorates::list_directorates, handlers::directorates::get_directorate,
        handlers::directorates::create_directorate, handlers::directorates::update_directorate,
        handlers::directorates::delete_directorate,
        handlers::hero_slides::list_hero_slides, handlers::hero_slides::create_hero_slide,
        handlers::hero_slides::update_hero_slide, handlers::hero_slides::delete_hero_slide,
        handlers::reports::list_reports, handlers::reports::create_report,
        handlers::reports::update_report, handlers::reports::delete_report,
        handlers::auctions::list_upcoming_auctions, handlers::auctions::create_upcoming_auction,
        handlers::auctions::update_upcoming_auction, handlers::auctions::delete_upcoming_auction,
        handlers::auctions::list_auction_results, handlers::auctions::get_auction_result,
        handlers::auctions::create_auction_result, handlers::auctions::update_auction_result,
        handlers::auctions::delete_auction_result,
        handlers::market_stats::list_market_stats, handlers::market_stats::create_market_stat,
        handlers::market_stats::update_market_stat, handlers::market_stats::delete_market_stat,
        handlers::institution::get_personnel, handlers::institution::get_organigramme,
        handlers::institution::update_personnel, handlers::institution::delete_personnel,
        handlers::institution::create_organigramme, handlers::institution::delete_organigramme,
        handlers::uploads::upload_article_image, handlers::uploads::upload_directorate_image,
        handlers::uploads::upload_hero_image, handlers::uploads::upload_report_cover,
        handlers::uploads::upload_report_pdf, handlers::uploads::upload_personnel_photo,
        handlers::uploads::upload_organigramme_image,
        handlers::forms::submit_contact, handlers::forms::register_investor,
        handlers::auth::login, handlers::auth::logout
    ),
    components(
        schemas(
            models::Article, models::NewArticle, models::ArticleUpdate, models::Category,
            models::Directorate, models::NewDirectorate, models::DirectorateUpdate,
            models::HeroSlide, models::NewHeroSlide, models::HeroSlideUpdate,
            models::Report, models::NewReport, models::ReportUpdate,
            models::UpcomingAuction, models::NewUpcomingAuction, models::UpcomingAuctionUpdate,
            models::AuctionResult, models::NewAuctionResult, models::AuctionResultUpdate,
            models::MarketStat, models::NewMarketStat, models::MarketStatUpdate,
            models::Personnel, models::PersonnelRole, models::PersonnelInput,
            models::Organigramme, models::NewOrganigramme,
            models::ContactRequest, models::InvestorRegistration, models::LoginRequest,
            error::ApiMessage,
            handlers::uploads::ImageUploadResponse, handlers::uploads::FileUploadResponse,
            handlers::uploads::PublicUrlResponse,
        )
    ),
    tags(
        (name = "tresor-portal", description = "Treasury directorate portal API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, cloneable container of every service the handlers use. Built
/// once at startup (or per test) and shared across requests.
#[derive(Clone)]
pub struct AppState {
    /// Read-only data access (public-read credential).
    pub public: PublicRepositoryState,
    /// Privileged data access (service credential). Only admin handlers use it.
    pub admin: AdminRepositoryState,
    /// Object storage for uploads.
    pub storage: StorageState,
    /// Transactional email for the contact form.
    pub mailer: MailerState,
    /// Password sign-in against the auth service.
    pub auth: AuthProviderState,
    /// Payloads of the statically generated pages.
    pub pages: Arc<PageCache>,
    /// The loaded, immutable configuration.
    pub config: AppConfig,
}

impl AppState {
    pub fn new(
        public: PublicRepositoryState,
        admin: AdminRepositoryState,
        storage: StorageState,
        mailer: MailerState,
        auth: AuthProviderState,
        config: AppConfig,
    ) -> Self {
        let pages = Arc::new(PageCache::new(config.page_revalidate));
        Self {
            public,
            admin,
            storage,
            mailer,
            auth,
            pages,
            config,
        }
    }
}

// --- Axum FromRef Extractor Implementations ---

// Lets handlers and extractors pull a single service out of the shared state.

impl FromRef<AppState> for PublicRepositoryState {
    fn from_ref(app_state: &AppState) -> PublicRepositoryState {
        app_state.public.clone()
    }
}

impl FromRef<AppState> for AdminRepositoryState {
    fn from_ref(app_state: &AppState) -> AdminRepositoryState {
        app_state.admin.clone()
    }
}

impl FromRef<AppState> for StorageState {
    fn from_ref(app_state: &AppState) -> StorageState {
        app_state.storage.clone()
    }
}

impl FromRef<AppState> for MailerState {
    fn from_ref(app_state: &AppState) -> MailerState {
        app_state.mailer.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the routing structure, applies global and scoped middleware, and
/// registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    let max_upload_bytes = state.config.max_upload_bytes;

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: Serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public API: no middleware.
        .merge(public::public_routes())
        // Admin API: each handler extracts `AdminSession` first, so the method
        // check (405) comes before the session check (401).
        .merge(admin::admin_routes())
        // Public pages.
        .nest("/pages", page_routes::page_routes())
        // Admin screens: the session check is the `AdminPage` extractor of each
        // renderer (redirect instead of 401).
        .nest("/admin", admin_pages::admin_page_routes())
        // Multipart uploads are buffered in memory; cap the body size.
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        // Apply the Unified State to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID Generation: a UUID for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request Tracing: one span per request, carrying the request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID Propagation: echo x-request-id back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer
        .layer(cors)
}

/// trace_span_logger
///
/// Span factory for `TraceLayer`: method, URI and the `x-request-id` header,
/// so every log line of a request can be correlated.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
