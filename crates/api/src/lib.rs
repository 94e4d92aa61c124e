//! HTTP server reporting the local timestamp and host name.
//!
//! Serves a single route, `GET /`, answering with
//! `{"timestamp": ..., "hostname": ...}`.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ApiError, ServerError};

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::status::get))
        .layer(TraceLayer::new_for_http())
}

/// Binds a TCP listener on `addr`.
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serves the application on `listener` until the process exits.
pub async fn run(listener: TcpListener) -> Result<(), ServerError> {
    axum::serve(listener, create_app())
        .await
        .map_err(ServerError::Serve)
}
