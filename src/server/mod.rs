pub mod routes;

use crate::constants;
use crate::services::SheetValues;
use axum::http::Method;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Single long-lived values-API handle, injected at startup
    pub sheets: Arc<dyn SheetValues>,
}

/// Start the axum server
pub async fn serve(
    sheets: Arc<dyn SheetValues>,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting sheetbridge server");

    // Callers are browser dashboards on assorted hosts and the API carries
    // no cookies or per-caller credentials, so CORS stays open
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    tracing::info!("Registering routes:");
    for spec in constants::LOCATIONS {
        tracing::info!("  GET  /{}", spec.name);
        tracing::info!("  POST /{}/write", spec.name);
        if spec.appendable {
            tracing::info!("  POST /{}/add", spec.name);
        }
    }
    tracing::info!("  GET  /data (legacy, {} tab)", constants::SUMMARY.sheet_title);
    tracing::info!("  POST /write (legacy, {} tab)", constants::SUMMARY.sheet_title);
    tracing::info!("  GET  /health");

    let app_state = AppState { sheets };
    let app = routes::build_router(app_state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
