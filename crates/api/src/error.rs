//! API error types with HTTP response mapping.

use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use status_common::HostnameError;
use thiserror::Error;

/// Per-request failure, rendered as a JSON error response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The local host name could not be read.
    #[error(transparent)]
    Hostname(#[from] HostnameError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Hostname(err) => {
                tracing::error!(error = %err, "failed to read host name");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

/// Failure while starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}
