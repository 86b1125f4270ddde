//! HTTP surface
//!
//! # Routes
//!
//! - `GET /` - plain-text preset listing
//! - `GET /healthz` - liveness probe
//! - `GET /{presets}` - combined documentation for a comma-separated preset list;
//!   `?download=true` serves it as an attachment

mod error;
mod routes;

pub use error::ApiError;

use crate::service::DocsService;
use crate::HarvestError;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

/// Builds the application router around a shared service
pub fn router(service: Arc<DocsService>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/healthz", get(routes::healthz))
        .route("/:presets", get(routes::documentation))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serves the router on `bind` until `shutdown` is cancelled
pub async fn serve(
    service: DocsService,
    bind: &str,
    shutdown: CancellationToken,
) -> Result<(), HarvestError> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(Arc::new(service)))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
