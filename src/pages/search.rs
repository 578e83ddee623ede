//! Query-parameterized public pages, rendered on every request.

use axum::{Json, extract::State};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::{
    EVENTS_CATEGORY, NEWS_PER_PAGE,
    faq::{FAQ, FaqEntry},
};
use crate::{
    AppState,
    error::ApiError,
    filters::{
        CalendarEvent, Page, events_in_month, filter_by_category, month_days_with_events,
        paginate, search_by_keyword,
    },
    models::{Article, AuctionResult, Category, MarketStat, UpcomingAuction},
    validation::QueryParams,
};

/// Years the calendar can show; keeps `MonthRef::previous`/`next` in range.
const CALENDAR_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPage {
    pub categories: Vec<Category>,
    pub active_category: Option<String>,
    pub articles: Page<Article>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritiesPage {
    pub query: String,
    pub upcoming_auctions: Vec<UpcomingAuction>,
    pub auction_results: Vec<AuctionResult>,
    pub market_stats: Vec<MarketStat>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    pub query: String,
    pub entries: Vec<FaqEntry>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl MonthRef {
    fn previous(self) -> Self {
        match self.month {
            1 => MonthRef {
                year: self.year - 1,
                month: 12,
            },
            m => MonthRef {
                year: self.year,
                month: m - 1,
            },
        }
    }

    fn next(self) -> Self {
        match self.month {
            12 => MonthRef {
                year: self.year + 1,
                month: 1,
            },
            m => MonthRef {
                year: self.year,
                month: m + 1,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPage {
    pub year: i32,
    pub month: u32,
    pub events: Vec<CalendarEvent>,
    pub days_with_events: Vec<u32>,
    pub previous: MonthRef,
    pub next: MonthRef,
}

/// news_page
///
/// The news listing, filtered by category and paged.
pub async fn news_page(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<NewsQuery>,
) -> Json<NewsPage> {
    let (categories, articles) =
        tokio::join!(state.public.list_categories(), state.public.list_articles());

    let active_category = query
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let filtered = filter_by_category(&articles, active_category.as_deref());
    let articles = paginate(&filtered, query.page.unwrap_or(1), NEWS_PER_PAGE);

    Json(NewsPage {
        categories,
        active_category,
        articles,
    })
}

/// securities_page
///
/// Government securities: upcoming auctions and results, narrowed by `?q=`.
pub async fn securities_page(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Json<SecuritiesPage> {
    let repo = &state.public;
    let (upcoming, results, market_stats) = tokio::join!(
        repo.list_upcoming_auctions(),
        repo.list_auction_results(),
        repo.list_market_stats(),
    );

    let keyword = query.q.unwrap_or_default();
    Json(SecuritiesPage {
        upcoming_auctions: search_by_keyword(&upcoming, &keyword),
        auction_results: search_by_keyword(&results, &keyword),
        market_stats,
        query: keyword,
    })
}

pub async fn faq_page(QueryParams(query): QueryParams<SearchQuery>) -> Json<FaqPage> {
    let keyword = query.q.unwrap_or_default();
    Json(FaqPage {
        entries: search_by_keyword(FAQ, &keyword),
        query: keyword,
    })
}

/// calendar_page
///
/// Auctions and event articles of one month (the current one by default).
pub async fn calendar_page(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<CalendarQuery>,
) -> Result<Json<CalendarPage>, ApiError> {
    let today = Utc::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    if !(1..=12).contains(&month) {
        return Err(ApiError::validation(format!("Mois invalide: {}", month)));
    }
    if !CALENDAR_YEARS.contains(&year) {
        return Err(ApiError::validation(format!("Année invalide: {}", year)));
    }

    let (auctions, event_articles) = tokio::join!(
        state.public.list_upcoming_auctions(),
        state.public.list_articles_by_category(EVENTS_CATEGORY),
    );

    let events: Vec<CalendarEvent> = auctions
        .iter()
        .map(CalendarEvent::from)
        .chain(event_articles.iter().map(CalendarEvent::from))
        .collect();

    let current = MonthRef { year, month };
    Ok(Json(CalendarPage {
        year,
        month,
        days_with_events: month_days_with_events(&events, year, month),
        events: events_in_month(&events, year, month),
        previous: current.previous(),
        next: current.next(),
    }))
}
