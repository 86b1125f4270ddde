//! Request handlers

use crate::output::download_filename;
use crate::server::error::ApiError;
use crate::service::{split_names, DocsService};
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

#[derive(Debug, Default, Deserialize)]
pub struct DocumentationParams {
    download: Option<String>,
}

impl DocumentationParams {
    fn is_download(&self) -> bool {
        self.download.as_deref() == Some("true")
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}

/// Lists the registered presets, one `name - title` per line
pub async fn index(State(service): State<Arc<DocsService>>) -> Response {
    let mut body = String::from("Available presets:\n\n");
    for preset in service.presets() {
        body.push_str(&format!("{} - {}\n", preset.name, preset.title));
    }

    ([(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}

pub async fn documentation(
    State(service): State<Arc<DocsService>>,
    Path(presets): Path<String>,
    Query(params): Query<DocumentationParams>,
) -> Result<Response, ApiError> {
    let names = split_names(&presets);
    tracing::info!("Received request for presets: {}", names.join(", "));

    let body = service
        .render(&presets)
        .await
        .map_err(|e| ApiError::from_render(e, &names))?;

    let mut response = (StatusCode::OK, body).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));

    if params.is_download() {
        let disposition = format!("attachment; filename=\"{}\"", download_filename(&names));
        let value = HeaderValue::from_str(&disposition)
            .map_err(|e| ApiError::Internal(format!("Invalid download filename: {}", e)))?;
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    Ok(response)
}
