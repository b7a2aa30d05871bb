pub mod api;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

use crate::services::SharedSessionStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub session: SharedSessionStore,
    pub started_at: Instant,
}

/// Build the dashboard router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/catalog", get(api::catalog_handler))
        .route("/fetch", post(api::fetch_handler))
        .route("/page/{page}", get(api::page_handler))
        .route("/export", get(api::export_handler))
        .route("/health", get(api::health_handler))
        .layer(cors)
        .with_state(state)
}

/// Start the axum server
pub async fn serve(session: SharedSessionStore, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting stockdash server");

    let state = AppState {
        session,
        started_at: Instant::now(),
    };

    tracing::info!("Registering routes:");
    tracing::info!("  GET  /catalog");
    tracing::info!("  POST /fetch  {{\"symbol\":\"AAPL\",\"start_date\":\"2020-01-01\",\"end_date\":\"2020-12-31\"}}");
    tracing::info!("  GET  /page/{{page}}");
    tracing::info!("  GET  /export");
    tracing::info!("  GET  /health");

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
