//! Install-event parsing.
//!
//! Platforms announce package changes with a URI-style payload such as
//! `package:com.example.app`. Parsing strips the scheme prefix and keeps
//! the package name; everything else about the event stays platform-side.

use crate::error::MonitorError;

/// Scheme prefix carried by install-event payloads.
pub const PACKAGE_PREFIX: &str = "package:";

/// A parsed install, update, or replace notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallEvent {
    package_name: String,
}

impl InstallEvent {
    /// Parse an event payload of the form `package:<name>`.
    ///
    /// Rejects payloads without the prefix and payloads whose remainder is
    /// empty, so an event can never carry an empty package name forward.
    pub fn parse(payload: &str) -> Result<Self, MonitorError> {
        let package_name = payload
            .strip_prefix(PACKAGE_PREFIX)
            .ok_or_else(|| MonitorError::InvalidEvent(payload.to_string()))?;
        if package_name.is_empty() {
            return Err(MonitorError::InvalidEvent(payload.to_string()));
        }
        Ok(Self {
            package_name: package_name.to_string(),
        })
    }

    /// The package the event refers to.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}
