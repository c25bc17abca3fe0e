//! Immutable registry of zones and services.
//!
//! A [`Registry`] is built once from static data and only exposes read-only
//! lookups. Zones keep their authored order: every query returns results in
//! registry order.
//!
//! # Duplicates
//!
//! Authored data may list the same zone ID more than once. The first entry
//! wins; later entries are dropped, logged at `warn` and kept aside in
//! [`Registry::duplicates`] so tooling can report them.

mod builtin;
mod query;

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::types::{Service, Slug, Zone, ZoneId};

pub use builtin::{SERVICES_YAML, ZONES_YAML, builtin};

/// Errors that can occur while building a [`Registry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The YAML document could not be parsed.
    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
    /// Two distinct zones share a slug.
    #[error("Zone slug {slug} is used by both {first} and {second}")]
    DuplicateZoneSlug {
        slug: Slug,
        first: ZoneId,
        second: ZoneId,
    },
    /// Two services share an ID or slug.
    #[error("Duplicate service: {0}")]
    DuplicateService(String),
    /// No zones were provided.
    #[error("Registry has no zones")]
    NoZones,
}

/// A data-quality problem that does not prevent the registry from loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryIssue {
    /// `parent` does not resolve to a zone in the registry.
    DanglingParent { zone: ZoneId, parent: ZoneId },
    /// A zone names itself as its parent.
    SelfParent { zone: ZoneId },
    /// A zone has no points of interest, so its FAQ reads oddly.
    NoHighlights { zone: ZoneId },
    /// The zone ID appeared more than once in the source data.
    DuplicateId { zone: ZoneId, count: usize },
}

impl fmt::Display for RegistryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingParent { zone, parent } => {
                write!(f, "{zone}: parent {parent} does not exist")
            }
            Self::SelfParent { zone } => write!(f, "{zone}: zone is its own parent"),
            Self::NoHighlights { zone } => write!(f, "{zone}: no highlights"),
            Self::DuplicateId { zone, count } => {
                write!(f, "{zone}: listed {count} times, first entry kept")
            }
        }
    }
}

/// Read-only collection of zones and services.
#[derive(Debug, Clone)]
pub struct Registry {
    zones: Vec<Zone>,
    services: Vec<Service>,
    zone_ids: HashMap<ZoneId, usize>,
    zone_slugs: HashMap<Slug, usize>,
    duplicates: Vec<Zone>,
}

#[derive(Deserialize)]
struct ZonesDocument {
    zones: Vec<Zone>,
}

#[derive(Deserialize)]
struct ServicesDocument {
    services: Vec<Service>,
}

impl Registry {
    /// Build a registry from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns an error if `zones` is empty, if two distinct zone IDs share a
    /// slug, or if two services share an ID or slug.
    pub fn new(zones: Vec<Zone>, services: Vec<Service>) -> Result<Self, RegistryError> {
        if zones.is_empty() {
            return Err(RegistryError::NoZones);
        }

        let mut kept: Vec<Zone> = Vec::with_capacity(zones.len());
        let mut zone_ids = HashMap::with_capacity(zones.len());
        let mut zone_slugs: HashMap<Slug, usize> = HashMap::with_capacity(zones.len());
        let mut duplicates = Vec::new();

        for zone in zones {
            if zone_ids.contains_key(&zone.id) {
                tracing::warn!(
                    zone = %zone.id,
                    priority = %zone.priority,
                    "Duplicate zone id, keeping first entry"
                );
                duplicates.push(zone);
                continue;
            }

            if let Some(&existing) = zone_slugs.get(&zone.slug) {
                let first = kept
                    .get(existing)
                    .map_or_else(|| zone.id.clone(), |z| z.id.clone());
                return Err(RegistryError::DuplicateZoneSlug {
                    slug: zone.slug,
                    first,
                    second: zone.id,
                });
            }

            let index = kept.len();
            zone_ids.insert(zone.id.clone(), index);
            zone_slugs.insert(zone.slug.clone(), index);
            kept.push(zone);
        }

        for (i, service) in services.iter().enumerate() {
            if services
                .iter()
                .take(i)
                .any(|s| s.id == service.id || s.slug == service.slug)
            {
                return Err(RegistryError::DuplicateService(service.id.to_string()));
            }
        }

        tracing::debug!(
            zones = kept.len(),
            services = services.len(),
            duplicates = duplicates.len(),
            "Registry built"
        );

        Ok(Self {
            zones: kept,
            services,
            zone_ids,
            zone_slugs,
            duplicates,
        })
    }

    /// Parse a registry from YAML documents.
    ///
    /// `zones_yaml` must contain a top-level `zones:` list and
    /// `services_yaml` a top-level `services:` list.
    ///
    /// # Errors
    ///
    /// Returns an error if either document fails to parse (including invalid
    /// slugs or priorities) or if [`Registry::new`] rejects the records.
    pub fn from_yaml(zones_yaml: &str, services_yaml: &str) -> Result<Self, RegistryError> {
        let zones: ZonesDocument =
            serde_yaml::from_str(zones_yaml).map_err(|source| RegistryError::Parse {
                what: "zones",
                source,
            })?;
        let services: ServicesDocument =
            serde_yaml::from_str(services_yaml).map_err(|source| RegistryError::Parse {
                what: "services",
                source,
            })?;

        Self::new(zones.zones, services.services)
    }

    /// All zones in registry order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// All services in registry order.
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Entries dropped because their ID was already taken.
    #[must_use]
    pub fn duplicates(&self) -> &[Zone] {
        &self.duplicates
    }

    /// Get a zone by ID.
    #[must_use]
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zone_ids.get(id).and_then(|&i| self.zones.get(i))
    }

    /// Get a zone by slug.
    #[must_use]
    pub fn zone_by_slug(&self, slug: &str) -> Option<&Zone> {
        self.zone_slugs.get(slug).and_then(|&i| self.zones.get(i))
    }

    /// Get a service by ID.
    #[must_use]
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id.as_str() == id)
    }

    /// Get a service by slug.
    #[must_use]
    pub fn service_by_slug(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug.as_str() == slug)
    }

    /// Resolve a zone's parent. Returns `None` if it has none or it dangles.
    #[must_use]
    pub fn parent_of(&self, zone: &Zone) -> Option<&Zone> {
        zone.parent.as_ref().and_then(|id| self.zone(id.as_str()))
    }

    /// Check the registry for data-quality issues.
    ///
    /// Issues are reported in registry order; duplicate IDs come last.
    #[must_use]
    pub fn validate(&self) -> Vec<RegistryIssue> {
        let mut issues = Vec::new();

        for zone in &self.zones {
            if let Some(parent) = &zone.parent {
                if parent == &zone.id {
                    issues.push(RegistryIssue::SelfParent {
                        zone: zone.id.clone(),
                    });
                } else if self.zone(parent.as_str()).is_none() {
                    issues.push(RegistryIssue::DanglingParent {
                        zone: zone.id.clone(),
                        parent: parent.clone(),
                    });
                }
            }
            if zone.highlights.is_empty() {
                issues.push(RegistryIssue::NoHighlights {
                    zone: zone.id.clone(),
                });
            }
        }

        let mut seen: Vec<&ZoneId> = Vec::new();
        for dup in &self.duplicates {
            if seen.contains(&&dup.id) {
                continue;
            }
            seen.push(&dup.id);
            let count = 1 + self.duplicates.iter().filter(|d| d.id == dup.id).count();
            issues.push(RegistryIssue::DuplicateId {
                zone: dup.id.clone(),
                count,
            });
        }

        issues
    }
}
