//! Built-in dataset embedded at compile time.

use std::sync::LazyLock;

use super::Registry;

/// YAML source of the built-in zones.
pub const ZONES_YAML: &str = include_str!("../../data/zones.yaml");
/// YAML source of the built-in services.
pub const SERVICES_YAML: &str = include_str!("../../data/services.yaml");

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    let registry = Registry::from_yaml(ZONES_YAML, SERVICES_YAML)
        .expect("embedded registry data is valid");
    tracing::info!(
        zones = registry.zones().len(),
        services = registry.services().len(),
        "Loaded built-in registry"
    );
    registry
});

/// The registry shipped with the crate.
///
/// Parsed on first access and shared for the life of the process.
#[must_use]
pub fn builtin() -> &'static Registry {
    &BUILTIN
}
