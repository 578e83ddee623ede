//! Page renderers.
//!
//! Each renderer fetches what one page of the site shows and answers it as a
//! JSON page payload for the presentational layer. Two modes:
//! - static pages (`public`): rendered once, served from `PageCache` until the
//!   revalidation interval passes or an admin write drops the cache;
//! - per-request pages: query-parameterized listings (`search`) and the
//!   session-gated admin screens (`admin`).
//!
//! A missing record (unknown slug or id) is a 404 outcome, never a 500.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

pub mod admin;
pub mod cache;
pub mod faq;
pub mod public;
pub mod search;

pub use cache::PageCache;

// Listing sizes.
pub const HOME_ARTICLES: usize = 3;
pub const HOME_AUCTIONS: usize = 5;
pub const RELATED_ARTICLES: usize = 3;
pub const RECENT_RESULTS: usize = 5;
pub const NEWS_PER_PAGE: usize = 9;

/// Category slug of the articles shown in the calendar.
pub const EVENTS_CATEGORY: &str = "evenements";

pub(crate) fn to_payload<T: Serialize>(props: &T) -> Result<Value, ApiError> {
    serde_json::to_value(props).map_err(|e| ApiError::Internal(e.to_string()))
}
