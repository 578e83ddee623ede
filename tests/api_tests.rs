use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tresor_portal::{
    AppConfig, AppState, InMemoryRepository, MockAuthProvider, MockMailer, MockStorageService,
    auth::{AuthProviderState, issue_token},
    create_router,
    mailer::MailerState,
    repository::{AdminRepositoryState, PublicRepositoryState},
    storage::StorageState,
};
use uuid::Uuid;

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
    pub token: String,
    pub client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    async fn create(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("Authorization", self.bearer())
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    async fn update(&self, path: &str, id: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(self.url(&format!("{}?id={}", path, id)))
            .header("Authorization", self.bearer())
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    async fn delete(&self, path: &str, id: &str) -> reqwest::Response {
        self.client
            .delete(self.url(&format!("{}?id={}", path, id)))
            .header("Authorization", self.bearer())
            .send()
            .await
            .expect("Failed to execute request.")
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Serves the full router over the in-memory store on a random port.
async fn spawn_app() -> TestApp {
    let config = AppConfig::default();
    let repo = Arc::new(InMemoryRepository::seeded());
    let auth = Arc::new(MockAuthProvider::new("admin@tresor.test", "secret", &config))
        as AuthProviderState;

    let token = issue_token(
        &config.jwt_secret,
        &config.jwt_audience,
        Uuid::new_v4(),
        Some("admin@tresor.test"),
        3600,
    )
    .unwrap();

    let state = AppState::new(
        repo.clone() as PublicRepositoryState,
        repo as AdminRepositoryState,
        Arc::new(MockStorageService::new()) as StorageState,
        Arc::new(MockMailer::new()) as MailerState,
        auth,
        config,
    );
    let router = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp {
        address,
        token,
        client: reqwest::Client::new(),
    }
}

fn auction_result_payload() -> Value {
    json!({
        "date": "2025-09-17",
        "type": "BTA",
        "amountawarded": 35000,
        "interestrate": "2.45%",
        "slug": "resultat-bta-2025-09-17"
    })
}

fn article_payload(slug: &str, category: &str) -> Value {
    json!({
        "slug": slug,
        "title": format!("Titre {}", slug),
        "excerpt": "Résumé",
        "content": "<p>Contenu</p>",
        "category": category
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;
    let response = app.get("/health").await;

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_create_then_read_auction_result() {
    let app = spawn_app().await;

    let response = app
        .create("/api/auction-results/create", &auction_result_payload())
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Value = response.json().await.unwrap();
    assert!(created["id"].is_string());

    let response = app.get("/api/auction-results/resultat-bta-2025-09-17").await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched["date"], "2025-09-17");
    assert_eq!(fetched["type"], "BTA");
    assert_eq!(fetched["amountawarded"], 35000.0);
    assert_eq!(fetched["interestrate"], "2.45%");
    assert_eq!(fetched["slug"], "resultat-bta-2025-09-17");
    assert_eq!(fetched["id"], created["id"]);
}

#[tokio::test]
async fn test_create_without_session_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/auction-results/create"))
        .json(&auction_result_payload())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);

    // Nothing reached the store.
    let listing: Vec<Value> = app.get("/api/auction-results").await.json().await.unwrap();
    assert!(listing.is_empty());
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/api/auction-results/create"))
        .header("Authorization", app.bearer())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    // No session either: the method check still answers first.
    for (method, path) in [
        (reqwest::Method::PUT, "/api/articles/create"),
        (reqwest::Method::GET, "/api/directorates/create"),
        (reqwest::Method::POST, "/api/articles/delete?id=x"),
        (reqwest::Method::PUT, "/api/hero-slides/create"),
        (reqwest::Method::GET, "/api/reports/upload-pdf"),
        (reqwest::Method::POST, "/api/institution/personnel/update?role=dg"),
    ] {
        let response = app
            .client
            .request(method.clone(), app.url(path))
            .send()
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{} {}",
            method,
            path
        );
    }
}

#[tokio::test]
async fn test_duplicate_slug_is_409() {
    let app = spawn_app().await;

    let first = app
        .create("/api/auction-results/create", &auction_result_payload())
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .create("/api/auction-results/create", &auction_result_payload())
        .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body: Value = second.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_invalid_input_is_400() {
    let app = spawn_app().await;

    // Uppercase slug.
    let mut payload = auction_result_payload();
    payload["slug"] = json!("Resultat BTA");
    let response = app.create("/api/auction-results/create", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing required field.
    let response = app
        .create("/api/articles/create", &json!({ "slug": "sans-titre" }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Negative amount.
    let mut payload = auction_result_payload();
    payload["amountawarded"] = json!(-1);
    let response = app.create("/api/auction-results/create", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = spawn_app().await;

    let created: Value = app
        .create("/api/articles/create", &article_payload("budget-2026", "communiques"))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let response = app
        .update("/api/articles/update", id, &json!({ "title": "Loi de finances 2026" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: Value = app.get("/api/articles/budget-2026").await.json().await.unwrap();
    assert_eq!(fetched["title"], "Loi de finances 2026");
    assert_eq!(fetched["excerpt"], created["excerpt"]);
    assert_eq!(fetched["content"], created["content"]);
    assert_eq!(fetched["category"], "communiques");
    assert_eq!(fetched["publishedAt"], created["publishedAt"]);
}

#[tokio::test]
async fn test_empty_update_is_400() {
    let app = spawn_app().await;

    let created: Value = app
        .create("/api/articles/create", &article_payload("vide", "actualites"))
        .await
        .json()
        .await
        .unwrap();

    let response = app
        .update("/api/articles/update", created["id"].as_str().unwrap(), &json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_fetch_is_404() {
    let app = spawn_app().await;

    let created: Value = app
        .create("/api/auction-results/create", &auction_result_payload())
        .await
        .json()
        .await
        .unwrap();

    let response = app
        .delete("/api/auction-results/delete", created["id"].as_str().unwrap())
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let response = app.get("/api/auction-results/resultat-bta-2025-09-17").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A second delete finds nothing.
    let response = app
        .delete("/api/auction-results/delete", created["id"].as_str().unwrap())
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_or_invalid_id_is_400() {
    let app = spawn_app().await;

    let response = app
        .client
        .delete(app.url("/api/articles/delete"))
        .header("Authorization", app.bearer())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Le paramètre 'id' est obligatoire");

    let response = app.delete("/api/articles/delete", "not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .update(
            "/api/articles/update",
            &Uuid::new_v4().to_string(),
            &json!({ "title": "Personne" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_category_listings_partition_articles() {
    let app = spawn_app().await;

    for (slug, category) in [
        ("a-1", "actualites"),
        ("a-2", "actualites"),
        ("c-1", "communiques"),
        ("e-1", "evenements"),
    ] {
        let response = app.create("/api/articles/create", &article_payload(slug, category)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let all: Vec<Value> = app.get("/api/articles").await.json().await.unwrap();
    assert_eq!(all.len(), 4);

    let categories: Vec<Value> = app.get("/api/categories").await.json().await.unwrap();
    let mut union: Vec<String> = Vec::new();
    for category in &categories {
        let slug = category["slug"].as_str().unwrap();
        let listed: Vec<Value> = app
            .get(&format!("/api/articles?category={}", slug))
            .await
            .json()
            .await
            .unwrap();
        assert!(listed.iter().all(|a| a["category"] == slug));
        union.extend(listed.iter().map(|a| a["slug"].as_str().unwrap().to_string()));
    }

    let mut expected: Vec<String> = all
        .iter()
        .map(|a| a["slug"].as_str().unwrap().to_string())
        .collect();
    union.sort();
    expected.sort();
    assert_eq!(union, expected);
}

#[tokio::test]
async fn test_unknown_article_page_is_404_json() {
    let app = spawn_app().await;

    let response = app.get("/pages/actualites/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Article introuvable");
}

#[tokio::test]
async fn test_admin_write_refreshes_cached_page() {
    let app = spawn_app().await;

    let before: Value = app.get("/pages/home").await.json().await.unwrap();
    assert_eq!(before["latestResults"].as_array().unwrap().len(), 0);

    let response = app
        .create("/api/auction-results/create", &auction_result_payload())
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let after: Value = app.get("/pages/home").await.json().await.unwrap();
    assert_eq!(after["latestResults"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = spawn_app().await;

    let response = app.get("/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc: Value = response.json().await.unwrap();
    assert!(doc["paths"]["/api/auction-results/create"].is_object());
}

// --- Lifecycle Per Entity ---

/// One admin-managed content type: its routes, a creation payload and a
/// partial update touching `updated_field` only.
struct EntityCase {
    prefix: &'static str,
    listing: &'static str,
    create: Value,
    update: Value,
    updated_field: &'static str,
    kept_field: &'static str,
}

fn entity_cases() -> Vec<EntityCase> {
    vec![
        EntityCase {
            prefix: "/api/directorates",
            listing: "/api/directorates",
            create: json!({
                "slug": "dette-publique",
                "name": "Direction de la dette publique",
                "directorName": "M. Sarr",
                "missionExcerpt": "Gestion de la dette",
                "services": ["Émissions", "Suivi"]
            }),
            update: json!({ "directorName": "Mme Ndiaye" }),
            updated_field: "directorName",
            kept_field: "missionExcerpt",
        },
        EntityCase {
            prefix: "/api/hero-slides",
            listing: "/api/hero-slides",
            create: json!({
                "title": "Forum des investisseurs",
                "imageUrl": "https://cdn.example/slide.png",
                "date": "2025-09-01",
                "buttonText": "En savoir plus"
            }),
            update: json!({ "title": "Forum 2025" }),
            updated_field: "title",
            kept_field: "imageUrl",
        },
        EntityCase {
            prefix: "/api/reports",
            listing: "/api/reports",
            create: json!({
                "title": "Rapport annuel 2024",
                "description": "Synthèse",
                "category": "rapports-annuels",
                "fileUrl": "https://cdn.example/rapport.pdf",
                "publishedDate": "2025-03-31"
            }),
            update: json!({ "description": "Synthèse révisée" }),
            updated_field: "description",
            kept_field: "fileUrl",
        },
        EntityCase {
            prefix: "/api/upcoming-auctions",
            listing: "/api/upcoming-auctions",
            create: json!({
                "date": "2025-10-02",
                "type": "BTC",
                "amountmillions": 25000.5,
                "status": "programmée"
            }),
            update: json!({ "status": "clôturée" }),
            updated_field: "status",
            kept_field: "amountmillions",
        },
        EntityCase {
            prefix: "/api/market-stats",
            listing: "/api/market-stats",
            create: json!({
                "nom_statistique": "encours_dette",
                "libelle_statistique": "Encours de la dette",
                "valeur_statistique": "12 %"
            }),
            update: json!({ "valeur_statistique": "12,4 %" }),
            updated_field: "valeur_statistique",
            kept_field: "libelle_statistique",
        },
    ]
}

async fn find_listed(app: &TestApp, listing: &str, id: &Value) -> Option<Value> {
    let listed: Vec<Value> = app.get(listing).await.json().await.unwrap();
    listed.into_iter().find(|row| &row["id"] == id)
}

#[tokio::test]
async fn test_entity_lifecycles() {
    let app = spawn_app().await;

    for case in entity_cases() {
        let prefix = case.prefix;

        // Create: the record comes back with the submitted wire fields.
        let response = app.create(&format!("{}/create", prefix), &case.create).await;
        assert_eq!(response.status(), StatusCode::CREATED, "{}", prefix);
        let created: Value = response.json().await.unwrap();
        for (key, value) in case.create.as_object().unwrap() {
            assert_eq!(&created[key], value, "{} field {}", prefix, key);
        }

        let id = created["id"].clone();
        let listed = find_listed(&app, case.listing, &id).await;
        assert_eq!(listed.as_ref(), Some(&created), "{}", prefix);

        // Partial update: only the submitted field changes.
        let response = app
            .update(&format!("{}/update", prefix), id.as_str().unwrap(), &case.update)
            .await;
        assert_eq!(response.status(), StatusCode::OK, "{}", prefix);

        let listed = find_listed(&app, case.listing, &id).await.unwrap();
        assert_eq!(listed[case.updated_field], case.update[case.updated_field]);
        assert_eq!(listed[case.kept_field], created[case.kept_field]);

        // Delete: gone from the listing, and a second delete finds nothing.
        let response = app
            .delete(&format!("{}/delete", prefix), id.as_str().unwrap())
            .await;
        assert_eq!(response.status(), StatusCode::OK, "{}", prefix);
        assert!(find_listed(&app, case.listing, &id).await.is_none());

        let response = app
            .delete(&format!("{}/delete", prefix), id.as_str().unwrap())
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", prefix);
    }

    let response = app.get("/api/directorates/dette-publique").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
