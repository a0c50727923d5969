//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trivia::{InMemoryTriviaRepository, PgTriviaRepository, TriviaConfig};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,trivia=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Trivia configuration
    let config = match env::var("QUESTIONS_PER_PAGE") {
        Ok(value) => {
            let per_page = value
                .trim()
                .parse()
                .context("QUESTIONS_PER_PAGE must be a positive integer")?;
            TriviaConfig::with_questions_per_page(per_page)
        }
        Err(_) => TriviaConfig::default(),
    };

    // Storage: PostgreSQL when configured, seeded in-memory store otherwise
    let trivia = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS);

            let pool = PgPoolOptions::new()
                .max_connections(max_connections)
                .connect(&database_url)
                .await
                .context("failed to connect to DATABASE_URL")?;

            tracing::info!(max_connections, "Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            trivia::trivia_router(PgTriviaRepository::new(pool), config)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, serving seeded in-memory data");
            trivia::trivia_router_generic(InMemoryTriviaRepository::seeded(), config)
        }
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| "*".to_string());

    let allow_origin = if frontend_origins.trim() == "*" {
        AllowOrigin::any()
    } else {
        let allowed_origins: Vec<http::HeaderValue> = frontend_origins
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();
        AllowOrigin::list(allowed_origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ]));

    // Build router
    let app = Router::new()
        .merge(trivia)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
