//! Listing logic behind the public pages: keyword search, category filtering,
//! paging and calendar grouping. Everything here works on records already
//! fetched for the page; nothing reaches the store.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Article, AuctionResult, Directorate, MarketStat, Report, UpcomingAuction};

/// Searchable
///
/// Exposes the text fields a keyword search looks at (name, title, code...).
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Categorized
///
/// Records filtered by a category slug.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Searchable for Article {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.slug.as_str(), self.excerpt.as_str()]
    }
}

impl Searchable for Directorate {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.director_name.as_str(), self.slug.as_str()]
    }
}

impl Searchable for Report {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.category.as_str()]
    }
}

impl Searchable for UpcomingAuction {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.security_type.as_str(), self.status.as_str()]
    }
}

impl Searchable for AuctionResult {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.security_type.as_str(), self.slug.as_str(), self.interest_rate.as_str()]
    }
}

impl Searchable for MarketStat {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.label.as_str()]
    }
}

impl Categorized for Article {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for Report {
    fn category(&self) -> &str {
        &self.category
    }
}

/// search_by_keyword
///
/// Case-insensitive substring match over `Searchable::search_fields`. A blank
/// keyword returns every record. Order is preserved.
pub fn search_by_keyword<T: Searchable + Clone>(items: &[T], keyword: &str) -> Vec<T> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// filter_by_category
///
/// Keeps the records whose category equals `category`. `None` or a blank value
/// means "all categories".
pub fn filter_by_category<T: Categorized + Clone>(items: &[T], category: Option<&str>) -> Vec<T> {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => items
            .iter()
            .filter(|item| item.category() == category)
            .cloned()
            .collect(),
        None => items.to_vec(),
    }
}

// --- Paging ---

/// Page
///
/// One page of a listing. `page` is 1-based and always within
/// `1..=total_pages`; an empty listing still has one (empty) page.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let items = items
        .iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .cloned()
        .collect();

    Page {
        items,
        page,
        total_pages,
        total_items,
    }
}

// --- Calendar ---

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Auction,
    News,
}

/// CalendarEvent
///
/// An entry of the public calendar: upcoming securities auctions and articles
/// of the `evenements` category.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub title: String,
    pub kind: EventKind,
    /// Article slug, for news entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl From<&UpcomingAuction> for CalendarEvent {
    fn from(auction: &UpcomingAuction) -> Self {
        CalendarEvent {
            date: auction.date,
            title: format!(
                "Adjudication {} ({} M)",
                auction.security_type, auction.amount_millions
            ),
            kind: EventKind::Auction,
            slug: None,
        }
    }
}

impl From<&Article> for CalendarEvent {
    fn from(article: &Article) -> Self {
        CalendarEvent {
            date: article.published_at.date_naive(),
            title: article.title.clone(),
            kind: EventKind::News,
            slug: Some(article.slug.clone()),
        }
    }
}

/// events_in_month
///
/// The events dated in `year`/`month`, in date order.
pub fn events_in_month(events: &[CalendarEvent], year: i32, month: u32) -> Vec<CalendarEvent> {
    let mut selected: Vec<CalendarEvent> = events
        .iter()
        .filter(|event| event.date.year() == year && event.date.month() == month)
        .cloned()
        .collect();
    selected.sort_by_key(|event| event.date);
    selected
}

/// month_days_with_events
///
/// Days of the month (1-31) carrying at least one event, ascending and
/// without duplicates. Drives the highlighted cells of the calendar grid.
pub fn month_days_with_events(events: &[CalendarEvent], year: i32, month: u32) -> Vec<u32> {
    let mut days: Vec<u32> = events_in_month(events, year, month)
        .iter()
        .map(|event| event.date.day())
        .collect();
    days.dedup();
    days
}
