//! XML sitemap of every landing page.
//!
//! One `<url>` per (service, zone) pair, services in registry order and zones
//! in registry order within each service. The zone tier drives `<priority>`.

use std::fmt::Write;

use balade_core::{Priority, Registry};
use chrono::NaiveDate;

use crate::site::Site;

/// Sitemap priority of a zone tier.
#[must_use]
pub const fn url_priority(priority: Priority) -> &'static str {
    match priority {
        Priority::One => "1.0",
        Priority::Two => "0.8",
        Priority::Three => "0.6",
        Priority::Four => "0.4",
    }
}

/// Build the sitemap document.
///
/// `lastmod` is stamped on every entry when given.
#[must_use]
pub fn build(site: &Site, registry: &Registry, lastmod: Option<NaiveDate>) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    let mut count = 0usize;
    for service in registry.services() {
        for zone in registry.zones() {
            let loc = site.landing_url(service.slug.as_str(), zone.slug.as_str());
            xml.push_str("  <url>\n");
            // Writing into a String cannot fail.
            let _ = writeln!(xml, "    <loc>{}</loc>", escape(&loc));
            if let Some(date) = lastmod {
                let _ = writeln!(xml, "    <lastmod>{}</lastmod>", date.format("%Y-%m-%d"));
            }
            xml.push_str("    <changefreq>weekly</changefreq>\n");
            let _ = writeln!(
                xml,
                "    <priority>{}</priority>",
                url_priority(zone.priority)
            );
            xml.push_str("  </url>\n");
            count += 1;
        }
    }

    xml.push_str("</urlset>\n");
    tracing::debug!(urls = count, "Sitemap built");
    xml
}

/// Escape the five XML special characters.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
