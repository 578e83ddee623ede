use chrono::NaiveDate;
use serde_json::json;
use tresor_portal::{
    models::{
        ArticleUpdate, AuctionResult, AuctionResultUpdate, ContactRequest, InvestorRegistration,
        MarketStat, NewArticle, NewAuctionResult, NewDirectorate, PersonnelRole,
        UpcomingAuction,
    },
    validation::{Validate, validate_email, validate_slug},
};
use uuid::Uuid;

// --- Wire Names ---

#[test]
fn test_auction_result_wire_names() {
    // The auction tables use lowercase column names; the JSON mirrors them.
    let result = AuctionResult {
        id: Uuid::nil(),
        date: NaiveDate::from_ymd_opt(2025, 9, 17).unwrap(),
        security_type: "BTA".to_string(),
        amount_awarded: 35000.0,
        interest_rate: "2.45%".to_string(),
        slug: "resultat-bta-2025-09-17".to_string(),
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["type"], "BTA");
    assert_eq!(json["amountawarded"], 35000.0);
    assert_eq!(json["interestrate"], "2.45%");
    assert_eq!(json["date"], "2025-09-17");
    assert!(json.get("security_type").is_none());
    assert!(json.get("amount_awarded").is_none());
}

#[test]
fn test_upcoming_auction_deserializes_wire_names() {
    let auction: UpcomingAuction = serde_json::from_value(json!({
        "id": Uuid::nil(),
        "date": "2025-10-02",
        "type": "BTC",
        "amountmillions": 25000.5,
        "status": "programmée"
    }))
    .unwrap();

    assert_eq!(auction.security_type, "BTC");
    assert_eq!(auction.amount_millions, 25000.5);
}

#[test]
fn test_market_stat_wire_names() {
    let stat = MarketStat {
        id: Uuid::nil(),
        name: "taux_moyen".to_string(),
        label: "Taux moyen pondéré".to_string(),
        value: "5,12 %".to_string(),
    };

    let json = serde_json::to_string(&stat).unwrap();
    assert!(json.contains(r#""nom_statistique":"taux_moyen""#));
    assert!(json.contains(r#""libelle_statistique":"Taux moyen pondéré""#));
    assert!(json.contains(r#""valeur_statistique":"5,12 %""#));
}

#[test]
fn test_article_update_omits_absent_fields() {
    // Partial updates: only submitted fields are serialized and applied.
    let partial = ArticleUpdate {
        title: Some("Nouveau titre".to_string()),
        ..ArticleUpdate::default()
    };

    let json = serde_json::to_string(&partial).unwrap();
    assert_eq!(json, r#"{"title":"Nouveau titre"}"#);
}

#[test]
fn test_personnel_role_parsing() {
    assert_eq!("dg".parse::<PersonnelRole>().unwrap(), PersonnelRole::Dg);
    assert_eq!(" DGA ".parse::<PersonnelRole>().unwrap(), PersonnelRole::Dga);
    assert!("directeur".parse::<PersonnelRole>().is_err());
    assert_eq!(serde_json::to_value(PersonnelRole::Dga).unwrap(), "dga");
}

// --- Field Rules ---

#[test]
fn test_slug_rules() {
    assert!(validate_slug("resultat-bta-2025-09-17").is_ok());
    assert!(validate_slug("a").is_ok());

    for bad in ["", "Majuscule", "double--tiret", "-debut", "fin-", "avec espace", "accentué"] {
        assert!(validate_slug(bad).is_err(), "slug '{}' should be rejected", bad);
    }
}

#[test]
fn test_email_rules() {
    assert!(validate_email("contact@tresor.gouv.sn").is_ok());

    for bad in ["", "sans-arobase", "@domaine.sn", "a@b", "a@b@c.sn", "a@.sn", "a@domaine."] {
        assert!(validate_email(bad).is_err(), "email '{}' should be rejected", bad);
    }
}

#[test]
fn test_new_article_requires_fields() {
    let article = NewArticle {
        slug: "budget-2026".to_string(),
        title: "Budget 2026".to_string(),
        excerpt: "Résumé".to_string(),
        content: "<p>…</p>".to_string(),
        image_url: None,
        published_at: None,
        category: "communiques".to_string(),
    };
    assert!(article.validate().is_ok());

    let blank_title = NewArticle {
        title: "   ".to_string(),
        ..article.clone()
    };
    assert!(blank_title.validate().is_err());
}

#[test]
fn test_empty_update_is_rejected() {
    assert!(ArticleUpdate::default().validate().is_err());
    assert!(AuctionResultUpdate::default().validate().is_err());

    let bad_amount = AuctionResultUpdate {
        amount_awarded: Some(f64::NAN),
        ..AuctionResultUpdate::default()
    };
    assert!(bad_amount.validate().is_err());
}

#[test]
fn test_new_auction_result_amount() {
    let result = NewAuctionResult {
        date: NaiveDate::from_ymd_opt(2025, 9, 17).unwrap(),
        security_type: "BTA".to_string(),
        amount_awarded: 0.0,
        interest_rate: "2.45%".to_string(),
        slug: "resultat-bta".to_string(),
    };
    assert!(result.validate().is_ok());

    let negative = NewAuctionResult {
        amount_awarded: -10.0,
        ..result
    };
    assert!(negative.validate().is_err());
}

#[test]
fn test_directorate_services_must_be_filled() {
    let directorate: NewDirectorate = serde_json::from_value(json!({
        "slug": "dette-publique",
        "name": "Direction de la dette publique",
        "directorName": "M. Sarr",
        "missionExcerpt": "Gestion de la dette",
        "services": ["Émissions", ""]
    }))
    .unwrap();

    assert!(directorate.validate().is_err());
}

#[test]
fn test_contact_phone_is_optional() {
    let request: ContactRequest = serde_json::from_value(json!({
        "name": "Awa",
        "email": "awa@example.com",
        "subject": "Question",
        "message": "Bonjour"
    }))
    .unwrap();

    assert_eq!(request.phone, None);
    assert!(request.validate().is_ok());
}

#[test]
fn test_investor_types() {
    let mut registration: InvestorRegistration = serde_json::from_value(json!({
        "fullName": "Moussa Sow",
        "email": "moussa@example.com",
        "investorType": "particulier"
    }))
    .unwrap();
    assert!(registration.validate().is_ok());

    registration.investor_type = "institutionnel".to_string();
    assert!(registration.validate().is_ok());

    registration.investor_type = "autre".to_string();
    assert!(registration.validate().is_err());
}
