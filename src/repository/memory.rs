use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AdminRepository, PublicRepository};
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

/// InMemoryRepository
///
/// A process-local implementation of both data access traits. It mirrors the
/// observable behavior of `PostgresRepository` (ordering, partial updates,
/// unique slugs/keys, not-found on missing ids) so handler and page tests can run
/// against the real router without a database. Also usable for local
/// development with `STORE=memory`.
#[derive(Default)]
pub struct InMemoryRepository {
    store: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    categories: Vec<Category>,
    articles: Vec<Article>,
    directorates: Vec<Directorate>,
    hero_slides: Vec<HeroSlide>,
    reports: Vec<Report>,
    upcoming_auctions: Vec<UpcomingAuction>,
    auction_results: Vec<AuctionResult>,
    market_stats: Vec<MarketStat>,
    personnel: Vec<Personnel>,
    organigrammes: Vec<Organigramme>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categories are managed outside the admin panel, so they are seeded here.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            store: RwLock::new(Store {
                categories,
                ..Store::default()
            }),
        }
    }

    /// The categories the site ships with.
    pub fn seeded() -> Self {
        let category = |slug: &str, name: &str| Category {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            name: name.to_string(),
        };
        Self::with_categories(vec![
            category("actualites", "Actualités"),
            category("communiques", "Communiqués"),
            category("evenements", "Événements"),
        ])
    }
}

// --- Table Helpers ---

/// A row addressable by id, optionally carrying a unique secondary key.
trait Row: Clone {
    fn id(&self) -> Uuid;

    fn unique_key(&self) -> Option<&str> {
        None
    }
}

impl Row for Article {
    fn id(&self) -> Uuid {
        self.id
    }
    fn unique_key(&self) -> Option<&str> {
        Some(&self.slug)
    }
}

impl Row for Directorate {
    fn id(&self) -> Uuid {
        self.id
    }
    fn unique_key(&self) -> Option<&str> {
        Some(&self.slug)
    }
}

impl Row for HeroSlide {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Row for Report {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Row for UpcomingAuction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Row for AuctionResult {
    fn id(&self) -> Uuid {
        self.id
    }
    fn unique_key(&self) -> Option<&str> {
        Some(&self.slug)
    }
}

impl Row for MarketStat {
    fn id(&self) -> Uuid {
        self.id
    }
    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Row for Organigramme {
    fn id(&self) -> Uuid {
        self.id
    }
}

fn check_unique<T: Row>(rows: &[T], candidate: &T) -> Result<(), RepositoryError> {
    if let Some(key) = candidate.unique_key() {
        let taken = rows
            .iter()
            .any(|row| row.id() != candidate.id() && row.unique_key() == Some(key));
        if taken {
            return Err(RepositoryError::Conflict(key.to_string()));
        }
    }
    Ok(())
}

fn insert<T: Row>(rows: &mut Vec<T>, record: T) -> Result<T, RepositoryError> {
    check_unique(rows, &record)?;
    rows.push(record.clone());
    Ok(record)
}

fn update<T: Row>(
    rows: &mut [T],
    id: Uuid,
    apply: impl FnOnce(&mut T),
) -> Result<T, RepositoryError> {
    let index = rows
        .iter()
        .position(|row| row.id() == id)
        .ok_or(RepositoryError::NotFound)?;

    let mut candidate = rows[index].clone();
    apply(&mut candidate);
    check_unique(rows, &candidate)?;

    rows[index] = candidate.clone();
    Ok(candidate)
}

fn remove<T: Row>(rows: &mut Vec<T>, id: Uuid) -> Result<(), RepositoryError> {
    let before = rows.len();
    rows.retain(|row| row.id() != id);
    if rows.len() == before {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}

fn find<T: Row>(rows: &[T], id: Uuid) -> Option<T> {
    rows.iter().find(|row| row.id() == id).cloned()
}

fn sorted<T: Clone, K: Ord>(rows: &[T], key: impl FnMut(&T) -> K) -> Vec<T> {
    let mut out = rows.to_vec();
    out.sort_by_key(key);
    out
}

#[async_trait]
impl PublicRepository for InMemoryRepository {
    async fn list_categories(&self) -> Vec<Category> {
        let store = self.store.read().await;
        sorted(&store.categories, |c| c.name.clone())
    }

    async fn list_articles(&self) -> Vec<Article> {
        let store = self.store.read().await;
        sorted(&store.articles, |a| std::cmp::Reverse(a.published_at))
    }

    async fn list_articles_by_category(&self, category: &str) -> Vec<Article> {
        self.list_articles()
            .await
            .into_iter()
            .filter(|a| a.category == category)
            .collect()
    }

    async fn get_article_by_slug(&self, slug: &str) -> Option<Article> {
        let store = self.store.read().await;
        store.articles.iter().find(|a| a.slug == slug).cloned()
    }

    async fn get_article(&self, id: Uuid) -> Option<Article> {
        find(&self.store.read().await.articles, id)
    }

    async fn list_directorates(&self) -> Vec<Directorate> {
        let store = self.store.read().await;
        sorted(&store.directorates, |d| d.name.clone())
    }

    async fn get_directorate_by_slug(&self, slug: &str) -> Option<Directorate> {
        let store = self.store.read().await;
        store.directorates.iter().find(|d| d.slug == slug).cloned()
    }

    async fn get_directorate(&self, id: Uuid) -> Option<Directorate> {
        find(&self.store.read().await.directorates, id)
    }

    async fn list_hero_slides(&self) -> Vec<HeroSlide> {
        let store = self.store.read().await;
        sorted(&store.hero_slides, |s| std::cmp::Reverse(s.date))
    }

    async fn get_hero_slide(&self, id: Uuid) -> Option<HeroSlide> {
        find(&self.store.read().await.hero_slides, id)
    }

    async fn list_reports(&self) -> Vec<Report> {
        let store = self.store.read().await;
        sorted(&store.reports, |r| std::cmp::Reverse(r.published_date))
    }

    async fn list_reports_by_category(&self, category: &str) -> Vec<Report> {
        self.list_reports()
            .await
            .into_iter()
            .filter(|r| r.category == category)
            .collect()
    }

    async fn get_report(&self, id: Uuid) -> Option<Report> {
        find(&self.store.read().await.reports, id)
    }

    async fn list_upcoming_auctions(&self) -> Vec<UpcomingAuction> {
        let store = self.store.read().await;
        sorted(&store.upcoming_auctions, |a| a.date)
    }

    async fn get_upcoming_auction(&self, id: Uuid) -> Option<UpcomingAuction> {
        find(&self.store.read().await.upcoming_auctions, id)
    }

    async fn list_auction_results(&self) -> Vec<AuctionResult> {
        let store = self.store.read().await;
        sorted(&store.auction_results, |r| std::cmp::Reverse(r.date))
    }

    async fn get_auction_result(&self, id: Uuid) -> Option<AuctionResult> {
        find(&self.store.read().await.auction_results, id)
    }

    async fn get_auction_result_by_slug(&self, slug: &str) -> Option<AuctionResult> {
        let store = self.store.read().await;
        store.auction_results.iter().find(|r| r.slug == slug).cloned()
    }

    async fn list_market_stats(&self) -> Vec<MarketStat> {
        let store = self.store.read().await;
        sorted(&store.market_stats, |s| s.name.clone())
    }

    async fn get_market_stat(&self, id: Uuid) -> Option<MarketStat> {
        find(&self.store.read().await.market_stats, id)
    }

    async fn get_personnel(&self, role: PersonnelRole) -> Option<Personnel> {
        let store = self.store.read().await;
        store.personnel.iter().find(|p| p.role == role).cloned()
    }

    async fn list_personnel(&self) -> Vec<Personnel> {
        let store = self.store.read().await;
        sorted(&store.personnel, |p| p.role.as_str())
    }

    async fn get_active_organigramme(&self) -> Option<Organigramme> {
        let store = self.store.read().await;
        store
            .organigrammes
            .iter()
            .filter(|o| o.active)
            .max_by_key(|o| o.created_at)
            .cloned()
    }
}

#[async_trait]
impl AdminRepository for InMemoryRepository {
    async fn create_article(&self, input: NewArticle) -> Result<Article, RepositoryError> {
        let mut store = self.store.write().await;
        insert(&mut store.articles, input.into_article(Uuid::new_v4()))
    }

    async fn update_article(
        &self,
        id: Uuid,
        input: ArticleUpdate,
    ) -> Result<Article, RepositoryError> {
        let mut store = self.store.write().await;
        update(&mut store.articles, id, |a| input.apply_to(a))
    }

    async fn delete_article(&self, id: Uuid) -> Result<(), RepositoryError> {
        remove(&mut self.store.write().await.articles, id)
    }

    async fn create_directorate(
        &self,
        input: NewDirectorate,
    ) -> Result<Directorate, RepositoryError> {
        let mut store = self.store.write().await;
        insert(&mut store.directorates, input.into_directorate(Uuid::new_v4()))
    }

    async fn update_directorate(
        &self,
        id: Uuid,
        input: DirectorateUpdate,
    ) -> Result<Directorate, RepositoryError> {
        let mut store = self.store.write().await;
        update(&mut store.directorates, id, |d| input.apply_to(d))
    }

    async fn delete_directorate(&self, id: Uuid) -> Result<(), RepositoryError> {
        remove(&mut self.store.write().await.directorates, id)
    }

    async fn create_hero_slide(&self, input: NewHeroSlide) -> Result<HeroSlide, RepositoryError> {
        let mut store = self.store.write().await;
        insert(&mut store.hero_slides, input.into_slide(Uuid::new_v4()))
    }

    async fn update_hero_slide(
        &self,
        id: Uuid,
        input: HeroSlideUpdate,
    ) -> Result<HeroSlide, RepositoryError> {
        let mut store = self.store.write().await;
        update(&mut store.hero_slides, id, |s| input.apply_to(s))
    }

    async fn delete_hero_slide(&self, id: Uuid) -> Result<(), RepositoryError> {
        remove(&mut self.store.write().await.hero_slides, id)
    }

    async fn create_report(&self, input: NewReport) -> Result<Report, RepositoryError> {
        let mut store = self.store.write().await;
        insert(&mut store.reports, input.into_report(Uuid::new_v4()))
    }

    async fn update_report(
        &self,
        id: Uuid,
        input: ReportUpdate,
    ) -> Result<Report, RepositoryError> {
        let mut store = self.store.write().await;
        update(&mut store.reports, id, |r| input.apply_to(r))
    }

    async fn delete_report(&self, id: Uuid) -> Result<(), RepositoryError> {
        remove(&mut self.store.write().await.reports, id)
    }

    async fn create_upcoming_auction(
        &self,
        input: NewUpcomingAuction,
    ) -> Result<UpcomingAuction, RepositoryError> {
        let mut store = self.store.write().await;
        insert(&mut store.upcoming_auctions, input.into_auction(Uuid::new_v4()))
    }

    async fn update_upcoming_auction(
        &self,
        id: Uuid,
        input: UpcomingAuctionUpdate,
    ) -> Result<UpcomingAuction, RepositoryError> {
        let mut store = self.store.write().await;
        update(&mut store.upcoming_auctions, id, |a| input.apply_to(a))
    }

    async fn delete_upcoming_auction(&self, id: Uuid) -> Result<(), RepositoryError> {
        remove(&mut self.store.write().await.upcoming_auctions, id)
    }

    async fn create_auction_result(
        &self,
        input: NewAuctionResult,
    ) -> Result<AuctionResult, RepositoryError> {
        let mut store = self.store.write().await;
        insert(&mut store.auction_results, input.into_result(Uuid::new_v4()))
    }

    async fn update_auction_result(
        &self,
        id: Uuid,
        input: AuctionResultUpdate,
    ) -> Result<AuctionResult, RepositoryError> {
        let mut store = self.store.write().await;
        update(&mut store.auction_results, id, |r| input.apply_to(r))
    }

    async fn delete_auction_result(&self, id: Uuid) -> Result<(), RepositoryError> {
        remove(&mut self.store.write().await.auction_results, id)
    }

    async fn create_market_stat(
        &self,
        input: NewMarketStat,
    ) -> Result<MarketStat, RepositoryError> {
        let mut store = self.store.write().await;
        insert(&mut store.market_stats, input.into_stat(Uuid::new_v4()))
    }

    async fn update_market_stat(
        &self,
        id: Uuid,
        input: MarketStatUpdate,
    ) -> Result<MarketStat, RepositoryError> {
        let mut store = self.store.write().await;
        update(&mut store.market_stats, id, |s| input.apply_to(s))
    }

    async fn delete_market_stat(&self, id: Uuid) -> Result<(), RepositoryError> {
        remove(&mut self.store.write().await.market_stats, id)
    }

    async fn upsert_personnel(
        &self,
        role: PersonnelRole,
        input: PersonnelInput,
    ) -> Result<Personnel, RepositoryError> {
        let mut store = self.store.write().await;
        let record = input.into_personnel(role);
        match store.personnel.iter_mut().find(|p| p.role == role) {
            Some(existing) => *existing = record.clone(),
            None => store.personnel.push(record.clone()),
        }
        Ok(record)
    }

    async fn delete_personnel(&self, role: PersonnelRole) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        let before = store.personnel.len();
        store.personnel.retain(|p| p.role != role);
        if store.personnel.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn create_organigramme(
        &self,
        input: NewOrganigramme,
    ) -> Result<Organigramme, RepositoryError> {
        let mut store = self.store.write().await;
        for chart in store.organigrammes.iter_mut() {
            chart.active = false;
        }
        let record = Organigramme {
            id: Uuid::new_v4(),
            image_url: input.image_url,
            active: true,
            created_at: Utc::now(),
        };
        insert(&mut store.organigrammes, record)
    }

    async fn delete_organigramme(&self, id: Uuid) -> Result<(), RepositoryError> {
        remove(&mut self.store.write().await.organigrammes, id)
    }
}
