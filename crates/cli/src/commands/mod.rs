//! Command implementations.

pub mod generate;
pub mod sitemap;
pub mod zones;

use std::io::Write;

use balade_core::{Registry, Service, Zone};
use balade_seo::Site;

use crate::config::CliConfig;

/// Shared state handed to every command.
pub struct Context<'a> {
    pub config: &'a CliConfig,
    pub registry: &'a Registry,
    pub site: &'a Site,
}

impl Context<'_> {
    /// Find a zone by slug, falling back to ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no zone matches.
    pub fn zone(&self, key: &str) -> Result<&Zone, Box<dyn std::error::Error>> {
        self.registry
            .zone_by_slug(key)
            .or_else(|| self.registry.zone(key))
            .ok_or_else(|| format!("Unknown zone: {key}").into())
    }

    /// Find a service by slug, or the configured default when `key` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if no service matches.
    pub fn service(&self, key: Option<&str>) -> Result<&Service, Box<dyn std::error::Error>> {
        let key = key.unwrap_or_else(|| self.config.default_service.as_str());
        self.registry
            .service_by_slug(key)
            .ok_or_else(|| format!("Unknown service: {key}").into())
    }
}

/// Write `text` to stdout followed by a newline.
///
/// # Errors
///
/// Returns an error if stdout is closed.
pub fn emit(text: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}")
}

/// Write `value` to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails or stdout is closed.
pub fn emit_json<T: serde::Serialize + ?Sized>(
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    emit(&serde_json::to_string_pretty(value)?)?;
    Ok(())
}
