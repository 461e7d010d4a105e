//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; application-level errors go
//! through `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use auth::{AuthConfig, PgAccountRepository, auth_router};
use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use ledger::{PgLedgerRepository, ledger_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,ledger=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../database/migrations").run(&pool).await?;

    tracing::info!("Migrations completed");

    // Auth configuration: one process-wide secret key feeds both
    // credential hashing and token signing
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load the secret from environment
        let secret_b64 = env::var("SECRET_KEY").expect("SECRET_KEY must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "SECRET_KEY must decode to 32 bytes"
        );
        let mut secret_key = [0u8; 32];
        secret_key.copy_from_slice(&secret_bytes);
        AuthConfig {
            secret_key,
            ..AuthConfig::default()
        }
    };

    if let Some(minutes) = env::var("TOKEN_TTL_MINUTES")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
    {
        config.token_ttl = Duration::from_secs(minutes * 60);
    }

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let account_repo = PgAccountRepository::new(pool.clone());
    let app = Router::new()
        .route("/", get(service_status))
        .nest(
            "/api/v1/auth",
            auth_router(account_repo.clone(), config.clone()),
        )
        .nest(
            "/api/v1/transactions",
            ledger_router(
                PgLedgerRepository::new(pool.clone()),
                account_repo,
                config.clone(),
            ),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET / - API status
async fn service_status() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Orchard Bank API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
