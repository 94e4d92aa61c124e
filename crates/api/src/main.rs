//! Status server entry point.

use status_api::{Config, ServerError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = Config::load();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.addr();
    let listener = status_api::bind(&addr)
        .await
        .inspect_err(|err| tracing::error!(error = %err, "failed to start server"))?;
    tracing::info!(%addr, "starting status server");

    status_api::run(listener).await
}
