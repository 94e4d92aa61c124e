//! Status endpoint.

use axum::Json;
use status_common::StatusReport;

use crate::error::ApiError;

/// GET / — returns the current local timestamp and host name.
pub async fn get() -> Result<Json<StatusReport>, ApiError> {
    let report = StatusReport::capture()?;
    tracing::debug!(hostname = %report.hostname, timestamp = %report.timestamp, "status report");
    Ok(Json(report))
}
