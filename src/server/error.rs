//! HTTP error mapping

use crate::HarvestError;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Error returned by request handlers, rendered as plain text
#[derive(Debug)]
pub enum ApiError {
    /// The request named presets that do not exist
    BadRequest(String),

    /// Crawling or assembling the documentation failed
    Internal(String),
}

impl ApiError {
    /// Maps a service error for the given preset names
    ///
    /// Unknown presets are the caller's fault and keep their message; every
    /// other failure is logged and reported generically.
    pub fn from_render(error: HarvestError, names: &[&str]) -> Self {
        match error {
            HarvestError::UnknownPresets(_) => Self::BadRequest(error.to_string()),
            other => {
                tracing::error!(
                    "Error fetching documentation for presets [{}]: {}",
                    names.join(", "),
                    other
                );
                Self::Internal(format!(
                    "Failed to fetch documentation for presets \"{}\"",
                    names.join(", ")
                ))
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(message) | Self::Internal(message) => message,
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}
