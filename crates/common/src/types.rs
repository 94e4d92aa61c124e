use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{HostnameError, hostname};

/// Snapshot of the server clock and host name taken for a single request.
///
/// The timestamp is local wall-clock time with no offset attached, so two
/// hosts in different zones report different values for the same instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    #[serde(with = "iso_micros")]
    pub timestamp: NaiveDateTime,
    pub hostname: String,
}

impl StatusReport {
    /// Creates a report from already-known values.
    pub fn new(timestamp: NaiveDateTime, hostname: impl Into<String>) -> Self {
        Self {
            timestamp,
            hostname: hostname.into(),
        }
    }

    /// Reads the local clock and host name.
    pub fn capture() -> Result<Self, HostnameError> {
        let hostname = hostname()?;
        Ok(Self::new(Local::now().naive_local(), hostname))
    }
}

/// ISO-8601 local date-time with a fixed six-digit fraction,
/// e.g. `2024-03-01T10:00:00.123456`.
mod iso_micros {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
    const READ_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(WRITE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, READ_FORMAT).map_err(serde::de::Error::custom)
    }
}
