//! Shared types for the host status service.
//!
//! Holds the per-request [`StatusReport`] record and the host name lookup
//! it is built from.

pub mod error;
pub mod host;
pub mod types;

pub use error::HostnameError;
pub use host::hostname;
pub use types::StatusReport;
