//! # folio-server
//!
//! HTTP API for the portfolio. Provides:
//!
//! - `GET /health` liveness
//! - `GET /profile` the portfolio owner
//! - `GET /projects` and `GET /projects/{slug}`
//! - `GET /skills` and `POST /skills` (single object or batch)
//!
//! Every route is also mounted under `/api` unless `server.api_prefix` is off.

pub mod error;
pub mod handlers;
pub mod payload;

use axum::{Router, routing::get};
use folio_config::ServerConfig;
use folio_store::PortfolioStore;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::ApiError;

/// Shared server state.
pub struct AppState {
    pub store: PortfolioStore,
}

fn resource_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/profile", get(handlers::get_profile))
        .route("/projects", get(handlers::list_projects))
        .route("/projects/", get(handlers::missing_slug))
        .route("/projects/{slug}", get(handlers::get_project))
        .route(
            "/skills",
            get(handlers::list_skills).post(handlers::create_skills),
        )
}

/// Build the Axum router.
pub fn build_router(config: &ServerConfig, store: PortfolioStore) -> Router {
    let state = Arc::new(AppState { store });

    let mut router = Router::new().merge(resource_routes());
    if config.api_prefix {
        router = router.nest("/api", resource_routes());
    }

    let mut router = router
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Start the HTTP server.
pub async fn start_server(config: ServerConfig, store: PortfolioStore) -> folio_core::Result<()> {
    let listen = config.listen.clone();
    let router = build_router(&config, store);

    info!(listen = %listen, "starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&listen).await.map_err(|e| {
        folio_core::FolioError::Server(format!("failed to bind {}: {}", listen, e))
    })?;

    info!("API listening on http://{}", listen);

    axum::serve(listener, router)
        .await
        .map_err(|e| folio_core::FolioError::Server(format!("server error: {}", e)))?;

    Ok(())
}
