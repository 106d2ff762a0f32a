use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use videoteca_api::config::ServerConfig;
use videoteca_api::router::build_app_router;
use videoteca_api::state::AppState;
use videoteca_db::store::postgres::PgVideoStore;
use videoteca_db::store::VideoStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "videoteca_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    // --- Database ---
    // Schema is managed externally (see crates/db/schema.sql); only
    // connectivity is verified here.
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = videoteca_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    videoteca_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    let store: Arc<dyn VideoStore> = Arc::new(PgVideoStore::new(pool));
    let app = build_app_router(AppState { store }, &config);

    let addr = SocketAddr::new(config.host.parse().expect("Invalid HOST"), config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
