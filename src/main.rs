use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tresor_portal::{
    AppState,
    auth::AuthProviderState,
    config::{AppConfig, Env, StoreBackend},
    create_router,
    mailer::{HttpMailer, MailerState},
    repository::{
        AdminRepositoryState, InMemoryRepository, PostgresRepository, PublicRepositoryState,
    },
    storage::{S3StorageClient, StorageService, StorageState},
    SupabaseAuthClient,
};

/// main
///
/// Entry point: configuration, logging, data stores, storage, external
/// services, then the HTTP server.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    dotenv::dotenv().ok();
    // Panics on a missing production secret.
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // RUST_LOG wins; otherwise debug for this crate, info for the HTTP stack.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tresor_portal=debug,tower_http=info,axum=info".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            // LOCAL: pretty output for humans.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON lines for the log aggregator.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Data Access Layer
    // Two Postgres pools: the public-read role for pages and public reads, the
    // service role for admin writes.
    let (public, admin): (PublicRepositoryState, AdminRepositoryState) = match config.store {
        StoreBackend::Postgres => {
            let public_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&config.public_db_url)
                .await
                .expect("FATAL: Failed to connect to Postgres. Check PUBLIC_DATABASE_URL.");

            let admin_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&config.db_url)
                .await
                .expect("FATAL: Failed to connect to Postgres. Check DATABASE_URL.");

            // LOCAL-ONLY: apply the reference schema to the development database.
            if config.env == Env::Local {
                sqlx::migrate!("./migrations")
                    .run(&admin_pool)
                    .await
                    .expect("FATAL: Failed to apply migrations.");
            }

            (
                Arc::new(PostgresRepository::new(public_pool)) as PublicRepositoryState,
                Arc::new(PostgresRepository::new(admin_pool)) as AdminRepositoryState,
            )
        }
        StoreBackend::Memory => {
            tracing::warn!("STORE=memory: content lives in process memory and is lost on exit");
            let repo = Arc::new(InMemoryRepository::seeded());
            (
                repo.clone() as PublicRepositoryState,
                repo as AdminRepositoryState,
            )
        }
    };

    // 5. Storage Initialization (S3-compatible)
    let s3_client = S3StorageClient::new(
        &config.s3_endpoint,
        &config.s3_region,
        &config.s3_key,
        &config.s3_secret,
        &config.storage_public_base,
    );

    // LOCAL-ONLY: create the MinIO buckets of the Docker setup.
    if config.env == Env::Local {
        s3_client.ensure_buckets().await;
    }

    let storage = Arc::new(s3_client) as StorageState;

    // 6. External Services
    let mailer = Arc::new(HttpMailer::new(
        &config.mail_api_url,
        &config.mail_api_key,
        &config.mail_from,
        &config.contact_recipient,
    )) as MailerState;

    let auth = Arc::new(SupabaseAuthClient::new(
        &config.supabase_url,
        &config.supabase_anon_key,
    )) as AuthProviderState;

    // 7. Unified State Assembly
    let bind_addr = config.bind_addr.clone();
    let app_state = AppState::new(public, admin, storage, mailer, auth, config);

    // 8. Router and Server Startup
    let app = create_router(app_state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .expect("FATAL: Failed to bind the HTTP listener. Check BIND_ADDR.");

    tracing::info!("Listening on {}", bind_addr);
    tracing::info!("API Documentation (Swagger UI) available at: http://{}/swagger-ui", bind_addr);

    axum::serve(listener, app)
        .await
        .expect("FATAL: HTTP server terminated unexpectedly");
}
