//! The PackageMonitor: wires a certificate source to the deriver.
//!
//! This is the layer a platform embeds. It owns the configured deriver,
//! resolves packages through the injected [`CertificateSource`], and logs
//! the outcome of every identification.

use uappid_core::{CancelToken, Deriver, DigestAlgorithm, UAppRecord};
use uappid_source::CertificateSource;

use crate::error::Result;
use crate::event::InstallEvent;

/// Configuration for the monitor.
#[derive(Debug, Clone, Default)]
pub struct MonitorConfig {
    /// Digest algorithm used for every hash within a derivation.
    pub algorithm: DigestAlgorithm,
}

/// Identifies installed packages in response to install events.
///
/// One monitor serves any number of sequential identifications; it keeps no
/// state between calls beyond its configuration.
pub struct PackageMonitor<S: CertificateSource> {
    source: S,
    deriver: Deriver,
}

impl<S: CertificateSource> PackageMonitor<S> {
    /// Create a monitor with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, MonitorConfig::default())
    }

    /// Create a monitor with an explicit configuration.
    pub fn with_config(source: S, config: MonitorConfig) -> Self {
        Self {
            source,
            deriver: Deriver::new(config.algorithm),
        }
    }

    /// The source backing this monitor.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The digest algorithm in use.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.deriver.algorithm()
    }

    /// Derive the identity record for a package by name.
    pub fn identify(&self, package_name: &str) -> Result<UAppRecord> {
        self.identify_with_cancel(package_name, &CancelToken::new())
    }

    /// [`identify`](Self::identify), aborting once `cancel` is set.
    pub fn identify_with_cancel(
        &self,
        package_name: &str,
        cancel: &CancelToken,
    ) -> Result<UAppRecord> {
        let package = self.source.lookup(package_name).map_err(|e| {
            tracing::warn!("lookup failed for {}: {}", package_name, e);
            e
        })?;

        match self.deriver.derive_with_cancel(
            package_name,
            &package.certificates,
            &package.artifact,
            cancel,
        ) {
            Ok(record) => {
                tracing::info!(
                    "derived identity for {}: uapp_id={} binary_hash={}",
                    package_name,
                    record.uapp_id(),
                    record.binary_hash()
                );
                Ok(record)
            }
            Err(e) => {
                tracing::warn!("derivation failed for {}: {}", package_name, e);
                Err(e.into())
            }
        }
    }

    /// Parse an install-event payload and identify the named package.
    pub fn handle_event(&self, payload: &str) -> Result<UAppRecord> {
        let event = InstallEvent::parse(payload)?;
        self.identify(event.package_name())
    }
}
