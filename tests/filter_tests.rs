use chrono::{NaiveDate, TimeZone, Utc};
use tresor_portal::{
    filters::{
        CalendarEvent, EventKind, events_in_month, filter_by_category, month_days_with_events,
        paginate, search_by_keyword,
    },
    models::{Article, AuctionResult, UpcomingAuction},
};
use uuid::Uuid;

// --- Fixtures ---

fn article(slug: &str, title: &str, category: &str, day: u32) -> Article {
    Article {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: format!("Résumé de {}", title),
        content: "<p></p>".to_string(),
        image_url: None,
        published_at: Utc.with_ymd_and_hms(2025, 9, day, 10, 0, 0).unwrap(),
        category: category.to_string(),
    }
}

fn result(security_type: &str, slug: &str, rate: &str) -> AuctionResult {
    AuctionResult {
        id: Uuid::new_v4(),
        date: NaiveDate::from_ymd_opt(2025, 9, 17).unwrap(),
        security_type: security_type.to_string(),
        amount_awarded: 1000.0,
        interest_rate: rate.to_string(),
        slug: slug.to_string(),
    }
}

fn auction(date: NaiveDate, security_type: &str) -> UpcomingAuction {
    UpcomingAuction {
        id: Uuid::new_v4(),
        date,
        security_type: security_type.to_string(),
        amount_millions: 20000.0,
        status: "programmée".to_string(),
    }
}

// --- Keyword Search ---

#[test]
fn test_search_is_case_insensitive() {
    let results = vec![
        result("BTA", "resultat-bta-2025-09-17", "2.45%"),
        result("BTC", "resultat-btc-2025-09-10", "1.90%"),
    ];

    let found = search_by_keyword(&results, "bta");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].security_type, "BTA");

    // Matches on the rate as well.
    assert_eq!(search_by_keyword(&results, "1.90").len(), 1);
}

#[test]
fn test_blank_keyword_returns_everything_in_order() {
    let articles = vec![
        article("a", "Premier", "actualites", 3),
        article("b", "Second", "communiques", 2),
    ];

    let found = search_by_keyword(&articles, "   ");
    assert_eq!(found, articles);
}

#[test]
fn test_search_without_match() {
    let articles = vec![article("a", "Premier", "actualites", 3)];
    assert!(search_by_keyword(&articles, "obligation").is_empty());
}

// --- Category Filter ---

#[test]
fn test_filter_by_category() {
    let articles = vec![
        article("a", "A", "actualites", 1),
        article("b", "B", "communiques", 2),
        article("c", "C", "actualites", 3),
    ];

    let news = filter_by_category(&articles, Some("actualites"));
    assert_eq!(news.len(), 2);
    assert!(news.iter().all(|a| a.category == "actualites"));

    assert_eq!(filter_by_category(&articles, None).len(), 3);
    assert_eq!(filter_by_category(&articles, Some("")).len(), 3);
    assert!(filter_by_category(&articles, Some("inconnue")).is_empty());
}

// --- Paging ---

#[test]
fn test_paginate_splits_pages() {
    let items: Vec<u32> = (1..=20).collect();

    let first = paginate(&items, 1, 9);
    assert_eq!(first.items, (1..=9).collect::<Vec<_>>());
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.total_items, 20);

    let last = paginate(&items, 3, 9);
    assert_eq!(last.items, vec![19, 20]);
}

#[test]
fn test_paginate_clamps_page() {
    let items: Vec<u32> = (1..=20).collect();

    assert_eq!(paginate(&items, 0, 9).page, 1);
    let beyond = paginate(&items, 42, 9);
    assert_eq!(beyond.page, 3);
    assert_eq!(beyond.items, vec![19, 20]);
}

#[test]
fn test_paginate_empty_listing() {
    let items: Vec<u32> = Vec::new();
    let page = paginate(&items, 5, 9);

    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}

// --- Calendar ---

#[test]
fn test_events_in_month_sorted() {
    let september = |d| NaiveDate::from_ymd_opt(2025, 9, d).unwrap();
    let auctions = [
        auction(september(24), "BTA"),
        auction(september(3), "BTC"),
        auction(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(), "BTA"),
    ];
    let news = [article("forum", "Forum des investisseurs", "evenements", 10)];

    let events: Vec<CalendarEvent> = auctions
        .iter()
        .map(CalendarEvent::from)
        .chain(news.iter().map(CalendarEvent::from))
        .collect();

    let selected = events_in_month(&events, 2025, 9);
    let dates: Vec<NaiveDate> = selected.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![september(3), september(10), september(24)]);

    assert_eq!(selected[0].kind, EventKind::Auction);
    assert_eq!(selected[1].kind, EventKind::News);
    assert_eq!(selected[1].slug.as_deref(), Some("forum"));
    assert!(selected[0].title.contains("BTC"));
}

#[test]
fn test_month_days_with_events_dedup() {
    let date = |d| NaiveDate::from_ymd_opt(2025, 9, d).unwrap();
    let auctions = [
        auction(date(17), "BTA"),
        auction(date(17), "BTC"),
        auction(date(2), "BTA"),
    ];
    let events: Vec<CalendarEvent> = auctions.iter().map(CalendarEvent::from).collect();

    assert_eq!(month_days_with_events(&events, 2025, 9), vec![2, 17]);
    assert!(month_days_with_events(&events, 2024, 9).is_empty());
}
