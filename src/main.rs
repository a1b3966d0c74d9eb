//! Portfolio Backend
//!
//! REST backend for the portfolio site: whole-collection reads and replacements over SQLite.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod seed;
mod sync;
mod views;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use db::Store;
use models::{Certificate, Education, OnlineCourse, Project, Skill, Update};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting Portfolio Backend");
    tracing::info!("Database: {} at {:?}", config.db_name, config.db_path());
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.admin_key.is_none() {
        tracing::warn!("No admin key configured (PORTFOLIO_ADMIN_KEY). Writes are open!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path()).await?;
    let store = Arc::new(Store::new(pool));

    if let Some(seed_path) = &config.seed_path {
        tracing::info!("Seeding empty collections from {:?}", seed_path);
        let seeded = seed::seed_empty_collections(&store, seed_path).await?;
        tracing::info!("Seeded {} collections", seeded.len());
    }

    // Create application state
    let state = AppState {
        store: store.clone(),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Store closed, bye");

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone admin key for the auth layer
    let admin_key = state.config.admin_key.clone();

    // API routes
    let api_routes = Router::new()
        // Aggregate
        .route("/data", get(api::get_portfolio))
        .route("/data", post(api::sync_by_type))
        // Collections
        .route("/data/education", get(api::list_records::<Education>))
        .route("/data/education", post(api::sync_records::<Education>))
        .route("/data/certificates", get(api::list_records::<Certificate>))
        .route("/data/certificates", post(api::sync_records::<Certificate>))
        .route("/data/courses", get(api::list_records::<OnlineCourse>))
        .route("/data/courses", post(api::sync_records::<OnlineCourse>))
        .route("/data/skills", get(api::list_records::<Skill>))
        .route("/data/skills", post(api::sync_records::<Skill>))
        .route("/data/projects", get(api::list_records::<Project>))
        .route("/data/projects", post(api::sync_records::<Project>))
        .route("/data/updates", get(api::list_records::<Update>))
        .route("/data/updates", post(api::sync_records::<Update>))
        // Page views
        .route("/data/projects/tags", get(api::project_tags))
        .route("/data/projects/tags/{tag}", get(api::projects_by_tag))
        .route("/data/skills/grouped", get(api::grouped_skills))
        .route("/data/highlights", get(api::highlights))
        .route("/data/education/page", get(api::education_page))
        // Writes need the admin key when one is configured
        .layer(middleware::from_fn(move |req, next| {
            auth::admin_key_layer(admin_key.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint; fails when the store is unreachable.
async fn health_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests;
