//! Everything a zone landing page renders, in one value.

use balade_core::{Registry, Service, Zone};
use serde::Serialize;

use crate::content::{local_content, render_html};
use crate::faq::{FaqEntry, local_faq};
use crate::meta::{PageMeta, page_meta};
use crate::schema::{
    BreadcrumbListSchema, FaqPageSchema, LocalBusinessSchema, breadcrumbs, faq_page,
    local_business,
};
use crate::site::Site;

/// Generated artifacts of the landing page for one service in one zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingPage {
    pub meta: PageMeta,
    pub faq: [FaqEntry; 5],
    pub content: String,
    pub content_html: String,
    pub local_business: LocalBusinessSchema,
    pub faq_page: FaqPageSchema,
    pub breadcrumbs: BreadcrumbListSchema,
}

impl LandingPage {
    /// Generate every artifact of the page.
    #[must_use]
    pub fn build(site: &Site, registry: &Registry, zone: &Zone, service: &Service) -> Self {
        tracing::debug!(zone = %zone.slug, service = %service.slug, "Building landing page");

        let faq = local_faq(zone, service);
        let content = local_content(registry, zone, service);

        Self {
            meta: page_meta(site, registry, zone, service),
            faq_page: faq_page(&faq),
            faq,
            content_html: render_html(&content),
            content,
            local_business: local_business(site, zone),
            breadcrumbs: breadcrumbs(site, registry, zone, service),
        }
    }

    /// JSON-LD documents to embed in the page head, in embedding order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json_ld(&self) -> Result<Vec<String>, serde_json::Error> {
        Ok(vec![
            serde_json::to_string(&self.local_business)?,
            serde_json::to_string(&self.faq_page)?,
            serde_json::to_string(&self.breadcrumbs)?,
        ])
    }
}
