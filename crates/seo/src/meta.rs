//! Head metadata of a landing page.

use balade_core::{Registry, Service, Zone};
use serde::Serialize;

use crate::content::location_label;
use crate::site::{BRAND, Site};

/// Longest meta description search engines display in full.
pub const MAX_DESCRIPTION_CHARS: usize = 160;

/// `<title>`, description, canonical URL and OpenGraph image of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub og_image: String,
    pub og_image_alt: String,
}

/// Build the metadata of the landing page for `service` in `zone`.
#[must_use]
pub fn page_meta(site: &Site, registry: &Registry, zone: &Zone, service: &Service) -> PageMeta {
    let label = location_label(registry, zone);
    let description = format!(
        "{} à {} : {} Intervenants vérifiés, assurance incluse. Réservez en ligne.",
        service.name, zone.name, service.description
    );

    PageMeta {
        title: format!("{} à {label} | {BRAND}", service.name),
        description: truncate(&description, MAX_DESCRIPTION_CHARS),
        canonical_url: site.landing_url(service.slug.as_str(), zone.slug.as_str()),
        og_image: site.absolute(&zone.image),
        og_image_alt: zone.image_alt.clone(),
    }
}

/// Cut `text` to at most `max` characters, ending with `…` when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
