//! Host name lookup.

use std::ffi::OsString;

use crate::HostnameError;

/// Returns the configured host name of the local machine.
pub fn hostname() -> Result<String, HostnameError> {
    from_os_string(gethostname::gethostname())
}

fn from_os_string(raw: OsString) -> Result<String, HostnameError> {
    let name = raw
        .into_string()
        .map_err(|raw| HostnameError::NotUtf8(raw.to_string_lossy().into_owned()))?;

    if name.is_empty() {
        return Err(HostnameError::Empty);
    }

    Ok(name)
}
