use async_trait::async_trait;
use sqlx::PgPool;
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

/// PostgresRepository
///
/// Implements both data access traits on top of a single connection pool. The
/// application builds two instances: one over the public-read pool (handed out
/// as `PublicRepositoryState`) and one over the service-role pool (handed out as
/// `AdminRepositoryState`). Which credential a query runs with is decided by
/// which handle the caller holds.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Read failures degrade to empty results; the error stays in the server log.
fn list_or_empty<T>(context: &str, result: Result<Vec<T>, sqlx::Error>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::error!(error = ?e, "{} failed", context);
        vec![]
    })
}

fn one_or_none<T>(context: &str, result: Result<Option<T>, sqlx::Error>) -> Option<T> {
    result.unwrap_or_else(|e| {
        tracing::error!(error = ?e, "{} failed", context);
        None
    })
}

fn updated<T>(result: Result<Option<T>, sqlx::Error>) -> Result<T, RepositoryError> {
    result?.ok_or(RepositoryError::NotFound)
}

fn deleted(
    result: Result<sqlx::postgres::PgQueryResult, sqlx::Error>,
) -> Result<(), RepositoryError> {
    if result?.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}

#[async_trait]
impl PublicRepository for PostgresRepository {
    async fn list_categories(&self) -> Vec<Category> {
        list_or_empty(
            "list_categories",
            sqlx::query_as::<_, Category>("SELECT id, slug, name FROM categories ORDER BY name")
                .fetch_all(&self.pool)
                .await,
        )
    }

    async fn list_articles(&self) -> Vec<Article> {
        list_or_empty(
            "list_articles",
            sqlx::query_as::<_, Article>(
                r#"SELECT id, slug, title, excerpt, content, image_url, published_at, category
                   FROM articles
                   ORDER BY published_at DESC"#,
            )
            .fetch_all(&self.pool)
            .await,
        )
    }

    async fn list_articles_by_category(&self, category: &str) -> Vec<Article> {
        list_or_empty(
            "list_articles_by_category",
            sqlx::query_as::<_, Article>(
                r#"SELECT id, slug, title, excerpt, content, image_url, published_at, category
                   FROM articles
                   WHERE category = $1
                   ORDER BY published_at DESC"#,
            )
            .bind(category)
            .fetch_all(&self.pool)
            .await,
        )
    }

    async fn get_article_by_slug(&self, slug: &str) -> Option<Article> {
        one_or_none(
            "get_article_by_slug",
            sqlx::query_as::<_, Article>(
                r#"SELECT id, slug, title, excerpt, content, image_url, published_at, category
                   FROM articles
                   WHERE slug = $1"#,
            )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn get_article(&self, id: Uuid) -> Option<Article> {
        one_or_none(
            "get_article",
            sqlx::query_as::<_, Article>(
                r#"SELECT id, slug, title, excerpt, content, image_url, published_at, category
                   FROM articles
                   WHERE id = $1"#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn list_directorates(&self) -> Vec<Directorate> {
        list_or_empty(
            "list_directorates",
            sqlx::query_as::<_, Directorate>(
                r#"SELECT id, slug, name, director_name, image_url, mission_excerpt, services
                   FROM directorates
                   ORDER BY name"#,
            )
            .fetch_all(&self.pool)
            .await,
        )
    }

    async fn get_directorate_by_slug(&self, slug: &str) -> Option<Directorate> {
        one_or_none(
            "get_directorate_by_slug",
            sqlx::query_as::<_, Directorate>(
                r#"SELECT id, slug, name, director_name, image_url, mission_excerpt, services
                   FROM directorates
                   WHERE slug = $1"#,
            )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn get_directorate(&self, id: Uuid) -> Option<Directorate> {
        one_or_none(
            "get_directorate",
            sqlx::query_as::<_, Directorate>(
                r#"SELECT id, slug, name, director_name, image_url, mission_excerpt, services
                   FROM directorates
                   WHERE id = $1"#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn list_hero_slides(&self) -> Vec<HeroSlide> {
        list_or_empty(
            "list_hero_slides",
            sqlx::query_as::<_, HeroSlide>(
                r#"SELECT id, title, image_url, date, button_text, button_link
                   FROM hero_slides
                   ORDER BY date DESC"#,
            )
            .fetch_all(&self.pool)
            .await,
        )
    }

    async fn get_hero_slide(&self, id: Uuid) -> Option<HeroSlide> {
        one_or_none(
            "get_hero_slide",
            sqlx::query_as::<_, HeroSlide>(
                r#"SELECT id, title, image_url, date, button_text, button_link
                   FROM hero_slides
                   WHERE id = $1"#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn list_reports(&self) -> Vec<Report> {
        list_or_empty(
            "list_reports",
            sqlx::query_as::<_, Report>(
                r#"SELECT id, title, description, category, file_url, published_date, cover_image_url
                   FROM reports
                   ORDER BY published_date DESC"#,
            )
            .fetch_all(&self.pool)
            .await,
        )
    }

    async fn list_reports_by_category(&self, category: &str) -> Vec<Report> {
        list_or_empty(
            "list_reports_by_category",
            sqlx::query_as::<_, Report>(
                r#"SELECT id, title, description, category, file_url, published_date, cover_image_url
                   FROM reports
                   WHERE category = $1
                   ORDER BY published_date DESC"#,
            )
            .bind(category)
            .fetch_all(&self.pool)
            .await,
        )
    }

    async fn get_report(&self, id: Uuid) -> Option<Report> {
        one_or_none(
            "get_report",
            sqlx::query_as::<_, Report>(
                r#"SELECT id, title, description, category, file_url, published_date, cover_image_url
                   FROM reports
                   WHERE id = $1"#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn list_upcoming_auctions(&self) -> Vec<UpcomingAuction> {
        list_or_empty(
            "list_upcoming_auctions",
            sqlx::query_as::<_, UpcomingAuction>(
                r#"SELECT id, date, type, amountmillions, status
                   FROM upcoming_auctions
                   ORDER BY date ASC"#,
            )
            .fetch_all(&self.pool)
            .await,
        )
    }

    async fn get_upcoming_auction(&self, id: Uuid) -> Option<UpcomingAuction> {
        one_or_none(
            "get_upcoming_auction",
            sqlx::query_as::<_, UpcomingAuction>(
                r#"SELECT id, date, type, amountmillions, status
                   FROM upcoming_auctions
                   WHERE id = $1"#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn list_auction_results(&self) -> Vec<AuctionResult> {
        list_or_empty(
            "list_auction_results",
            sqlx::query_as::<_, AuctionResult>(
                r#"SELECT id, date, type, amountawarded, interestrate, slug
                   FROM auction_results
                   ORDER BY date DESC"#,
            )
            .fetch_all(&self.pool)
            .await,
        )
    }

    async fn get_auction_result(&self, id: Uuid) -> Option<AuctionResult> {
        one_or_none(
            "get_auction_result",
            sqlx::query_as::<_, AuctionResult>(
                r#"SELECT id, date, type, amountawarded, interestrate, slug
                   FROM auction_results
                   WHERE id = $1"#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn get_auction_result_by_slug(&self, slug: &str) -> Option<AuctionResult> {
        one_or_none(
            "get_auction_result_by_slug",
            sqlx::query_as::<_, AuctionResult>(
                r#"SELECT id, date, type, amountawarded, interestrate, slug
                   FROM auction_results
                   WHERE slug = $1"#,
            )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn list_market_stats(&self) -> Vec<MarketStat> {
        list_or_empty(
            "list_market_stats",
            sqlx::query_as::<_, MarketStat>(
                r#"SELECT id, nom_statistique, libelle_statistique, valeur_statistique
                   FROM market_stats
                   ORDER BY nom_statistique"#,
            )
            .fetch_all(&self.pool)
            .await,
        )
    }

    async fn get_market_stat(&self, id: Uuid) -> Option<MarketStat> {
        one_or_none(
            "get_market_stat",
            sqlx::query_as::<_, MarketStat>(
                r#"SELECT id, nom_statistique, libelle_statistique, valeur_statistique
                   FROM market_stats
                   WHERE id = $1"#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn get_personnel(&self, role: PersonnelRole) -> Option<Personnel> {
        one_or_none(
            "get_personnel",
            sqlx::query_as::<_, Personnel>(
                "SELECT role, name, title, bio, image_url FROM personnel WHERE role = $1",
            )
            .bind(role.as_str())
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn list_personnel(&self) -> Vec<Personnel> {
        list_or_empty(
            "list_personnel",
            sqlx::query_as::<_, Personnel>(
                "SELECT role, name, title, bio, image_url FROM personnel ORDER BY role",
            )
            .fetch_all(&self.pool)
            .await,
        )
    }

    async fn get_active_organigramme(&self) -> Option<Organigramme> {
        one_or_none(
            "get_active_organigramme",
            sqlx::query_as::<_, Organigramme>(
                r#"SELECT id, image_url, active, created_at
                   FROM organigrammes
                   WHERE active = true
                   ORDER BY created_at DESC
                   LIMIT 1"#,
            )
            .fetch_optional(&self.pool)
            .await,
        )
    }
}

#[async_trait]
impl AdminRepository for PostgresRepository {
    // --- Articles ---

    async fn create_article(&self, input: NewArticle) -> Result<Article, RepositoryError> {
        let article = input.into_article(Uuid::new_v4());
        let created = sqlx::query_as::<_, Article>(
            r#"INSERT INTO articles (id, slug, title, excerpt, content, image_url, published_at, category)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING id, slug, title, excerpt, content, image_url, published_at, category"#,
        )
        .bind(article.id)
        .bind(&article.slug)
        .bind(&article.title)
        .bind(&article.excerpt)
        .bind(&article.content)
        .bind(&article.image_url)
        .bind(article.published_at)
        .bind(&article.category)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Partial update via `COALESCE`: a `NULL` parameter keeps the stored column.
    async fn update_article(
        &self,
        id: Uuid,
        input: ArticleUpdate,
    ) -> Result<Article, RepositoryError> {
        updated(
            sqlx::query_as::<_, Article>(
                r#"UPDATE articles
                   SET slug = COALESCE($2, slug),
                       title = COALESCE($3, title),
                       excerpt = COALESCE($4, excerpt),
                       content = COALESCE($5, content),
                       image_url = COALESCE($6, image_url),
                       published_at = COALESCE($7, published_at),
                       category = COALESCE($8, category)
                   WHERE id = $1
                   RETURNING id, slug, title, excerpt, content, image_url, published_at, category"#,
            )
            .bind(id)
            .bind(input.slug)
            .bind(input.title)
            .bind(input.excerpt)
            .bind(input.content)
            .bind(input.image_url)
            .bind(input.published_at)
            .bind(input.category)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn delete_article(&self, id: Uuid) -> Result<(), RepositoryError> {
        deleted(
            sqlx::query("DELETE FROM articles WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await,
        )
    }

    // --- Directorates ---

    async fn create_directorate(
        &self,
        input: NewDirectorate,
    ) -> Result<Directorate, RepositoryError> {
        let directorate = input.into_directorate(Uuid::new_v4());
        let created = sqlx::query_as::<_, Directorate>(
            r#"INSERT INTO directorates (id, slug, name, director_name, image_url, mission_excerpt, services)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id, slug, name, director_name, image_url, mission_excerpt, services"#,
        )
        .bind(directorate.id)
        .bind(&directorate.slug)
        .bind(&directorate.name)
        .bind(&directorate.director_name)
        .bind(&directorate.image_url)
        .bind(&directorate.mission_excerpt)
        .bind(&directorate.services)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update_directorate(
        &self,
        id: Uuid,
        input: DirectorateUpdate,
    ) -> Result<Directorate, RepositoryError> {
        updated(
            sqlx::query_as::<_, Directorate>(
                r#"UPDATE directorates
                   SET slug = COALESCE($2, slug),
                       name = COALESCE($3, name),
                       director_name = COALESCE($4, director_name),
                       image_url = COALESCE($5, image_url),
                       mission_excerpt = COALESCE($6, mission_excerpt),
                       services = COALESCE($7, services)
                   WHERE id = $1
                   RETURNING id, slug, name, director_name, image_url, mission_excerpt, services"#,
            )
            .bind(id)
            .bind(input.slug)
            .bind(input.name)
            .bind(input.director_name)
            .bind(input.image_url)
            .bind(input.mission_excerpt)
            .bind(input.services)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn delete_directorate(&self, id: Uuid) -> Result<(), RepositoryError> {
        deleted(
            sqlx::query("DELETE FROM directorates WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await,
        )
    }

    // --- Hero Slides ---

    async fn create_hero_slide(&self, input: NewHeroSlide) -> Result<HeroSlide, RepositoryError> {
        let slide = input.into_slide(Uuid::new_v4());
        let created = sqlx::query_as::<_, HeroSlide>(
            r#"INSERT INTO hero_slides (id, title, image_url, date, button_text, button_link)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, title, image_url, date, button_text, button_link"#,
        )
        .bind(slide.id)
        .bind(&slide.title)
        .bind(&slide.image_url)
        .bind(slide.date)
        .bind(&slide.button_text)
        .bind(&slide.button_link)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update_hero_slide(
        &self,
        id: Uuid,
        input: HeroSlideUpdate,
    ) -> Result<HeroSlide, RepositoryError> {
        updated(
            sqlx::query_as::<_, HeroSlide>(
                r#"UPDATE hero_slides
                   SET title = COALESCE($2, title),
                       image_url = COALESCE($3, image_url),
                       date = COALESCE($4, date),
                       button_text = COALESCE($5, button_text),
                       button_link = COALESCE($6, button_link)
                   WHERE id = $1
                   RETURNING id, title, image_url, date, button_text, button_link"#,
            )
            .bind(id)
            .bind(input.title)
            .bind(input.image_url)
            .bind(input.date)
            .bind(input.button_text)
            .bind(input.button_link)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn delete_hero_slide(&self, id: Uuid) -> Result<(), RepositoryError> {
        deleted(
            sqlx::query("DELETE FROM hero_slides WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await,
        )
    }

    // --- Reports ---

    async fn create_report(&self, input: NewReport) -> Result<Report, RepositoryError> {
        let report = input.into_report(Uuid::new_v4());
        let created = sqlx::query_as::<_, Report>(
            r#"INSERT INTO reports (id, title, description, category, file_url, published_date, cover_image_url)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id, title, description, category, file_url, published_date, cover_image_url"#,
        )
        .bind(report.id)
        .bind(&report.title)
        .bind(&report.description)
        .bind(&report.category)
        .bind(&report.file_url)
        .bind(report.published_date)
        .bind(&report.cover_image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update_report(
        &self,
        id: Uuid,
        input: ReportUpdate,
    ) -> Result<Report, RepositoryError> {
        updated(
            sqlx::query_as::<_, Report>(
                r#"UPDATE reports
                   SET title = COALESCE($2, title),
                       description = COALESCE($3, description),
                       category = COALESCE($4, category),
                       file_url = COALESCE($5, file_url),
                       published_date = COALESCE($6, published_date),
                       cover_image_url = COALESCE($7, cover_image_url)
                   WHERE id = $1
                   RETURNING id, title, description, category, file_url, published_date, cover_image_url"#,
            )
            .bind(id)
            .bind(input.title)
            .bind(input.description)
            .bind(input.category)
            .bind(input.file_url)
            .bind(input.published_date)
            .bind(input.cover_image_url)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn delete_report(&self, id: Uuid) -> Result<(), RepositoryError> {
        deleted(
            sqlx::query("DELETE FROM reports WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await,
        )
    }

    // --- Upcoming Auctions ---

    async fn create_upcoming_auction(
        &self,
        input: NewUpcomingAuction,
    ) -> Result<UpcomingAuction, RepositoryError> {
        let auction = input.into_auction(Uuid::new_v4());
        let created = sqlx::query_as::<_, UpcomingAuction>(
            r#"INSERT INTO upcoming_auctions (id, date, type, amountmillions, status)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, date, type, amountmillions, status"#,
        )
        .bind(auction.id)
        .bind(auction.date)
        .bind(&auction.security_type)
        .bind(auction.amount_millions)
        .bind(&auction.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update_upcoming_auction(
        &self,
        id: Uuid,
        input: UpcomingAuctionUpdate,
    ) -> Result<UpcomingAuction, RepositoryError> {
        updated(
            sqlx::query_as::<_, UpcomingAuction>(
                r#"UPDATE upcoming_auctions
                   SET date = COALESCE($2, date),
                       type = COALESCE($3, type),
                       amountmillions = COALESCE($4, amountmillions),
                       status = COALESCE($5, status)
                   WHERE id = $1
                   RETURNING id, date, type, amountmillions, status"#,
            )
            .bind(id)
            .bind(input.date)
            .bind(input.security_type)
            .bind(input.amount_millions)
            .bind(input.status)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn delete_upcoming_auction(&self, id: Uuid) -> Result<(), RepositoryError> {
        deleted(
            sqlx::query("DELETE FROM upcoming_auctions WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await,
        )
    }

    // --- Auction Results ---

    async fn create_auction_result(
        &self,
        input: NewAuctionResult,
    ) -> Result<AuctionResult, RepositoryError> {
        let result = input.into_result(Uuid::new_v4());
        let created = sqlx::query_as::<_, AuctionResult>(
            r#"INSERT INTO auction_results (id, date, type, amountawarded, interestrate, slug)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, date, type, amountawarded, interestrate, slug"#,
        )
        .bind(result.id)
        .bind(result.date)
        .bind(&result.security_type)
        .bind(result.amount_awarded)
        .bind(&result.interest_rate)
        .bind(&result.slug)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update_auction_result(
        &self,
        id: Uuid,
        input: AuctionResultUpdate,
    ) -> Result<AuctionResult, RepositoryError> {
        updated(
            sqlx::query_as::<_, AuctionResult>(
                r#"UPDATE auction_results
                   SET date = COALESCE($2, date),
                       type = COALESCE($3, type),
                       amountawarded = COALESCE($4, amountawarded),
                       interestrate = COALESCE($5, interestrate),
                       slug = COALESCE($6, slug)
                   WHERE id = $1
                   RETURNING id, date, type, amountawarded, interestrate, slug"#,
            )
            .bind(id)
            .bind(input.date)
            .bind(input.security_type)
            .bind(input.amount_awarded)
            .bind(input.interest_rate)
            .bind(input.slug)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn delete_auction_result(&self, id: Uuid) -> Result<(), RepositoryError> {
        deleted(
            sqlx::query("DELETE FROM auction_results WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await,
        )
    }

    // --- Market Statistics ---

    async fn create_market_stat(
        &self,
        input: NewMarketStat,
    ) -> Result<MarketStat, RepositoryError> {
        let stat = input.into_stat(Uuid::new_v4());
        let created = sqlx::query_as::<_, MarketStat>(
            r#"INSERT INTO market_stats (id, nom_statistique, libelle_statistique, valeur_statistique)
               VALUES ($1, $2, $3, $4)
               RETURNING id, nom_statistique, libelle_statistique, valeur_statistique"#,
        )
        .bind(stat.id)
        .bind(&stat.name)
        .bind(&stat.label)
        .bind(&stat.value)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update_market_stat(
        &self,
        id: Uuid,
        input: MarketStatUpdate,
    ) -> Result<MarketStat, RepositoryError> {
        updated(
            sqlx::query_as::<_, MarketStat>(
                r#"UPDATE market_stats
                   SET nom_statistique = COALESCE($2, nom_statistique),
                       libelle_statistique = COALESCE($3, libelle_statistique),
                       valeur_statistique = COALESCE($4, valeur_statistique)
                   WHERE id = $1
                   RETURNING id, nom_statistique, libelle_statistique, valeur_statistique"#,
            )
            .bind(id)
            .bind(input.name)
            .bind(input.label)
            .bind(input.value)
            .fetch_optional(&self.pool)
            .await,
        )
    }

    async fn delete_market_stat(&self, id: Uuid) -> Result<(), RepositoryError> {
        deleted(
            sqlx::query("DELETE FROM market_stats WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await,
        )
    }

    // --- Institution ---

    async fn upsert_personnel(
        &self,
        role: PersonnelRole,
        input: PersonnelInput,
    ) -> Result<Personnel, RepositoryError> {
        let personnel = sqlx::query_as::<_, Personnel>(
            r#"INSERT INTO personnel (role, name, title, bio, image_url)
               VALUES ($1, $2, $3, $4, $5)
               ON CONFLICT (role) DO UPDATE
               SET name = EXCLUDED.name,
                   title = EXCLUDED.title,
                   bio = EXCLUDED.bio,
                   image_url = EXCLUDED.image_url
               RETURNING role, name, title, bio, image_url"#,
        )
        .bind(role.as_str())
        .bind(input.name)
        .bind(input.title)
        .bind(input.bio)
        .bind(input.image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(personnel)
    }

    async fn delete_personnel(&self, role: PersonnelRole) -> Result<(), RepositoryError> {
        deleted(
            sqlx::query("DELETE FROM personnel WHERE role = $1")
                .bind(role.as_str())
                .execute(&self.pool)
                .await,
        )
    }

    /// Deactivation and insert run in one transaction so readers never see two
    /// active org charts.
    async fn create_organigramme(
        &self,
        input: NewOrganigramme,
    ) -> Result<Organigramme, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE organigrammes SET active = false WHERE active = true")
            .execute(&mut *tx)
            .await?;

        let created = sqlx::query_as::<_, Organigramme>(
            r#"INSERT INTO organigrammes (id, image_url, active, created_at)
               VALUES ($1, $2, true, NOW())
               RETURNING id, image_url, active, created_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(input.image_url)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn delete_organigramme(&self, id: Uuid) -> Result<(), RepositoryError> {
        deleted(
            sqlx::query("DELETE FROM organigrammes WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await,
        )
    }
}
