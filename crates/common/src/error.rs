use thiserror::Error;

/// Errors that can occur when reading the local host name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostnameError {
    /// The operating system returned a name that is not valid UTF-8.
    #[error("Host name is not valid UTF-8: {0}")]
    NotUtf8(String),

    /// The operating system returned an empty host name.
    #[error("Host name is empty")]
    Empty,
}
