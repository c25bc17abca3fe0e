//! Site-wide settings shared by the generators.

/// Brand name used in titles and structured data.
pub const BRAND: &str = "Balade";

/// Default public URL of the site.
pub const DEFAULT_BASE_URL: &str = "https://www.balade.fr";

/// Public site settings.
///
/// Only the base URL varies between environments; the rest is fixed business
/// information that every generated page repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    base_url: String,
}

impl Default for Site {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Site {
    /// Create settings for the given base URL. A trailing slash is dropped.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a site-relative path absolute. Absolute URLs pass through.
    #[must_use]
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Hub page of a zone, e.g. `https://www.balade.fr/zones/lyon`.
    ///
    /// The hub is served by the site router, not generated here. It is the
    /// one URL per zone shared by every service, so JSON-LD uses it to name
    /// the zone's business node.
    #[must_use]
    pub fn zone_url(&self, zone_slug: &str) -> String {
        format!("{}/zones/{zone_slug}", self.base_url)
    }

    /// Page of a service, e.g. `https://www.balade.fr/promenade-chien`.
    #[must_use]
    pub fn service_url(&self, service_slug: &str) -> String {
        format!("{}/{service_slug}", self.base_url)
    }

    /// Landing page of a service in a zone, e.g. `https://www.balade.fr/promenade-chien/lyon`.
    #[must_use]
    pub fn landing_url(&self, service_slug: &str, zone_slug: &str) -> String {
        format!("{}/{service_slug}/{zone_slug}", self.base_url)
    }

    /// JSON-LD node ID of the company.
    #[must_use]
    pub fn organization_id(&self) -> String {
        format!("{}/#organization", self.base_url)
    }
}
