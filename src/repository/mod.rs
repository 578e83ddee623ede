use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::RepositoryError,
    models::{
        Article, ArticleUpdate, AuctionResult, AuctionResultUpdate, Category, Directorate,
        DirectorateUpdate, HeroSlide, HeroSlideUpdate, MarketStat, MarketStatUpdate, NewArticle,
        NewAuctionResult, NewDirectorate, NewHeroSlide, NewMarketStat, NewOrganigramme,
        NewReport, NewUpcomingAuction, Organigramme, Personnel, PersonnelInput, PersonnelRole,
        Report, ReportUpdate, UpcomingAuction, UpcomingAuctionUpdate,
    },
};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryRepository;
pub use postgres::PostgresRepository;

/// PublicRepository
///
/// Read-only data access, backed by the public-read credential. One method per
/// query shape used by the page renderers and public JSON routes.
///
/// Reads never fail on "not found": single-record lookups return `None` and
/// listings return an empty `Vec`. Store failures are logged by the
/// implementation and degrade to the same empty results, so public pages render
/// a placeholder rather than an error.
#[async_trait]
pub trait PublicRepository: Send + Sync {
    // --- News ---
    async fn list_categories(&self) -> Vec<Category>;
    // Newest first.
    async fn list_articles(&self) -> Vec<Article>;
    async fn list_articles_by_category(&self, category: &str) -> Vec<Article>;
    async fn get_article_by_slug(&self, slug: &str) -> Option<Article>;
    async fn get_article(&self, id: Uuid) -> Option<Article>;

    // --- Directorates ---
    async fn list_directorates(&self) -> Vec<Directorate>;
    async fn get_directorate_by_slug(&self, slug: &str) -> Option<Directorate>;
    async fn get_directorate(&self, id: Uuid) -> Option<Directorate>;

    // --- Home Carousel ---
    async fn list_hero_slides(&self) -> Vec<HeroSlide>;
    async fn get_hero_slide(&self, id: Uuid) -> Option<HeroSlide>;

    // --- Publications ---
    async fn list_reports(&self) -> Vec<Report>;
    async fn list_reports_by_category(&self, category: &str) -> Vec<Report>;
    async fn get_report(&self, id: Uuid) -> Option<Report>;

    // --- Government Securities ---
    // Upcoming auctions are soonest first, results most recent first.
    async fn list_upcoming_auctions(&self) -> Vec<UpcomingAuction>;
    async fn get_upcoming_auction(&self, id: Uuid) -> Option<UpcomingAuction>;
    async fn list_auction_results(&self) -> Vec<AuctionResult>;
    async fn get_auction_result(&self, id: Uuid) -> Option<AuctionResult>;
    async fn get_auction_result_by_slug(&self, slug: &str) -> Option<AuctionResult>;

    // --- Market Statistics ---
    async fn list_market_stats(&self) -> Vec<MarketStat>;
    async fn get_market_stat(&self, id: Uuid) -> Option<MarketStat>;

    // --- Institution ---
    async fn get_personnel(&self, role: PersonnelRole) -> Option<Personnel>;
    async fn list_personnel(&self) -> Vec<Personnel>;
    async fn get_active_organigramme(&self) -> Option<Organigramme>;
}

/// AdminRepository
///
/// Privileged writes, backed by the server-only service credential. Only the
/// admin API handlers reach this trait.
///
/// Updates are partial: fields absent from the `*Update` payload keep their
/// stored value. Updates and deletes of a missing id return
/// `RepositoryError::NotFound`; unique slug/key collisions return
/// `RepositoryError::Conflict`.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create_article(&self, input: NewArticle) -> Result<Article, RepositoryError>;
    async fn update_article(
        &self,
        id: Uuid,
        input: ArticleUpdate,
    ) -> Result<Article, RepositoryError>;
    async fn delete_article(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_directorate(
        &self,
        input: NewDirectorate,
    ) -> Result<Directorate, RepositoryError>;
    async fn update_directorate(
        &self,
        id: Uuid,
        input: DirectorateUpdate,
    ) -> Result<Directorate, RepositoryError>;
    async fn delete_directorate(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_hero_slide(&self, input: NewHeroSlide) -> Result<HeroSlide, RepositoryError>;
    async fn update_hero_slide(
        &self,
        id: Uuid,
        input: HeroSlideUpdate,
    ) -> Result<HeroSlide, RepositoryError>;
    async fn delete_hero_slide(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_report(&self, input: NewReport) -> Result<Report, RepositoryError>;
    async fn update_report(&self, id: Uuid, input: ReportUpdate)
    -> Result<Report, RepositoryError>;
    async fn delete_report(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_upcoming_auction(
        &self,
        input: NewUpcomingAuction,
    ) -> Result<UpcomingAuction, RepositoryError>;
    async fn update_upcoming_auction(
        &self,
        id: Uuid,
        input: UpcomingAuctionUpdate,
    ) -> Result<UpcomingAuction, RepositoryError>;
    async fn delete_upcoming_auction(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_auction_result(
        &self,
        input: NewAuctionResult,
    ) -> Result<AuctionResult, RepositoryError>;
    async fn update_auction_result(
        &self,
        id: Uuid,
        input: AuctionResultUpdate,
    ) -> Result<AuctionResult, RepositoryError>;
    async fn delete_auction_result(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_market_stat(&self, input: NewMarketStat)
    -> Result<MarketStat, RepositoryError>;
    async fn update_market_stat(
        &self,
        id: Uuid,
        input: MarketStatUpdate,
    ) -> Result<MarketStat, RepositoryError>;
    async fn delete_market_stat(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// Creates or replaces the record for `role`.
    async fn upsert_personnel(
        &self,
        role: PersonnelRole,
        input: PersonnelInput,
    ) -> Result<Personnel, RepositoryError>;
    async fn delete_personnel(&self, role: PersonnelRole) -> Result<(), RepositoryError>;

    /// Inserts a new org chart as the active one; every other row is deactivated.
    async fn create_organigramme(
        &self,
        input: NewOrganigramme,
    ) -> Result<Organigramme, RepositoryError>;
    async fn delete_organigramme(&self, id: Uuid) -> Result<(), RepositoryError>;
}

/// PublicRepositoryState
///
/// Shared handle to the read-only data access layer.
pub type PublicRepositoryState = Arc<dyn PublicRepository>;

/// AdminRepositoryState
///
/// Shared handle to the privileged data access layer.
pub type AdminRepositoryState = Arc<dyn AdminRepository>;
