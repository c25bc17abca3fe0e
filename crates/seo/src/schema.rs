//! schema.org structured data (JSON-LD).
//!
//! The structs here serialize straight to JSON-LD documents that pages embed
//! in a `<script type="application/ld+json">` tag. They only populate fields;
//! vocabulary validation is left to external tools.
//!
//! # Known gaps
//!
//! - [`GeoCoordinates`] is always emitted empty: zones carry no coordinates.
//! - [`AggregateRating`] is a fixed placeholder, not derived from reviews.

use balade_core::{Registry, Service, Zone};
use serde::Serialize;

use crate::faq::FaqEntry;
use crate::site::{BRAND, Site};

const CONTEXT: &str = "https://schema.org";

/// Business phone number shown on every zone.
pub const TELEPHONE: &str = "+33 1 84 80 12 34";
/// Price range tag.
pub const PRICE_RANGE: &str = "€€";
/// Opening hours in schema.org shorthand.
pub const OPENING_HOURS: &str = "Mo-Su 07:00-21:00";
/// Placeholder rating value.
pub const RATING_VALUE: f32 = 4.8;
/// Placeholder review count.
pub const REVIEW_COUNT: u32 = 127;
/// Services advertised by every zone.
pub const SERVICE_TYPES: [&str; 4] = [
    "Promenade de chien",
    "Garde de chien",
    "Visite à domicile",
    "Garde de chat",
];

/// A schema.org `LocalBusiness` for one zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusinessSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub url: String,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    pub telephone: &'static str,
    pub price_range: &'static str,
    pub opening_hours: &'static str,
    pub aggregate_rating: AggregateRating,
    pub service_type: [&'static str; 4],
    pub parent_organization: NodeRef,
}

/// A schema.org `PostalAddress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub address_locality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    pub address_country: &'static str,
}

/// A schema.org `GeoCoordinates`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// A schema.org `AggregateRating`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub rating_value: f32,
    pub best_rating: u8,
    pub review_count: u32,
}

/// Reference to a node defined elsewhere in the site's graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRef {
    #[serde(rename = "@id")]
    pub id: String,
}

/// Build the `LocalBusiness` node of `zone`.
///
/// `url` and `@id` point at the zone hub ([`Site::zone_url`]) rather than a
/// landing page, so every service page of the zone embeds the same node.
#[must_use]
pub fn local_business(site: &Site, zone: &Zone) -> LocalBusinessSchema {
    let url = site.zone_url(zone.slug.as_str());

    LocalBusinessSchema {
        context: CONTEXT,
        kind: "LocalBusiness",
        id: format!("{url}#localbusiness"),
        name: format!("{BRAND} {}", zone.name),
        description: zone.description.clone(),
        image: site.absolute(&zone.image),
        url,
        address: PostalAddress {
            kind: "PostalAddress",
            address_locality: zone.name.clone(),
            address_region: zone.department.clone(),
            address_country: "FR",
        },
        geo: GeoCoordinates {
            kind: "GeoCoordinates",
            latitude: None,
            longitude: None,
        },
        telephone: TELEPHONE,
        price_range: PRICE_RANGE,
        opening_hours: OPENING_HOURS,
        aggregate_rating: AggregateRating {
            kind: "AggregateRating",
            rating_value: RATING_VALUE,
            best_rating: 5,
            review_count: REVIEW_COUNT,
        },
        service_type: SERVICE_TYPES,
        parent_organization: NodeRef {
            id: site.organization_id(),
        },
    }
}

/// A schema.org `FAQPage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPageSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub main_entity: Vec<Question>,
}

/// A schema.org `Question` with its accepted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

/// A schema.org `Answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

/// Build the `FAQPage` node for a generated FAQ.
#[must_use]
pub fn faq_page(faq: &[FaqEntry]) -> FaqPageSchema {
    FaqPageSchema {
        context: CONTEXT,
        kind: "FAQPage",
        main_entity: faq
            .iter()
            .map(|entry| Question {
                kind: "Question",
                name: entry.question.clone(),
                accepted_answer: Answer {
                    kind: "Answer",
                    text: entry.answer.clone(),
                },
            })
            .collect(),
    }
}

/// A schema.org `BreadcrumbList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbListSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

/// Build the breadcrumb trail of a landing page.
///
/// Home, then the service, then the parent zone when it resolves, then the
/// zone itself.
#[must_use]
pub fn breadcrumbs(
    site: &Site,
    registry: &Registry,
    zone: &Zone,
    service: &Service,
) -> BreadcrumbListSchema {
    let mut trail = vec![
        ("Accueil".to_string(), format!("{}/", site.base_url())),
        (service.name.clone(), site.service_url(service.slug.as_str())),
    ];
    if let Some(parent) = registry.parent_of(zone) {
        trail.push((
            parent.name.clone(),
            site.landing_url(service.slug.as_str(), parent.slug.as_str()),
        ));
    }
    trail.push((
        zone.name.clone(),
        site.landing_url(service.slug.as_str(), zone.slug.as_str()),
    ));

    BreadcrumbListSchema {
        context: CONTEXT,
        kind: "BreadcrumbList",
        item_list_element: trail
            .into_iter()
            .enumerate()
            .map(|(i, (name, item))| ListItem {
                kind: "ListItem",
                position: i + 1,
                name,
                item,
            })
            .collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::faq::local_faq;
    use crate::fixtures;

    #[test]
    fn test_local_business_address() {
        let registry = fixtures::registry();
        let lyon = fixtures::zone(&registry, "lyon");
        let schema = local_business(&Site::default(), lyon);

        assert_eq!(schema.address.address_locality, "Lyon");
        assert_eq!(schema.address.address_country, "FR");
        assert_eq!(schema.address.address_region.as_deref(), Some("69"));
    }

    #[test]
    fn test_local_business_json() {
        let registry = fixtures::registry();
        let lyon = fixtures::zone(&registry, "lyon");
        let value = serde_json::to_value(local_business(&Site::default(), lyon)).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "LocalBusiness");
        assert_eq!(value["@id"], "https://www.balade.fr/zones/lyon#localbusiness");
        assert_eq!(value["url"], "https://www.balade.fr/zones/lyon");
        assert_eq!(value["name"], "Balade Lyon");
        assert_eq!(value["image"], "https://www.balade.fr/images/zones/lyon.jpg");
        assert_eq!(value["geo"], json!({ "@type": "GeoCoordinates" }));
        assert_eq!(value["priceRange"], "€€");
        assert_eq!(value["openingHours"], "Mo-Su 07:00-21:00");
        assert_eq!(value["aggregateRating"]["reviewCount"], 127);
        assert_eq!(value["aggregateRating"]["bestRating"], 5);
        assert_eq!(value["serviceType"].as_array().unwrap().len(), 4);
        assert_eq!(
            value["parentOrganization"],
            json!({ "@id": "https://www.balade.fr/#organization" })
        );
    }

    #[test]
    fn test_local_business_node_shared_by_service_pages() {
        let registry = fixtures::registry();
        let site = Site::default();
        let lyon = fixtures::zone(&registry, "lyon");
        let schema = local_business(&site, lyon);

        assert_eq!(schema.url, site.zone_url("lyon"));
        for service in registry.services() {
            let landing = site.landing_url(service.slug.as_str(), "lyon");
            assert_ne!(schema.url, landing);
            let page = crate::page::LandingPage::build(&site, &registry, lyon, service);
            assert_eq!(page.local_business.id, schema.id);
        }
    }

    #[test]
    fn test_local_business_without_department_omits_region() {
        let registry = fixtures::registry();
        let orphan = fixtures::zone(&registry, "orphan");
        let value = serde_json::to_value(local_business(&Site::default(), orphan)).unwrap();

        assert!(value["address"].get("addressRegion").is_none());
        assert_eq!(value["address"]["addressLocality"], "Quartier perdu");
        assert_eq!(value["image"], "https://cdn.example.com/orphan.jpg");
    }

    #[test]
    fn test_rating_is_identical_for_every_zone() {
        let registry = fixtures::registry();
        let site = Site::default();
        let ratings: Vec<_> = registry
            .zones()
            .iter()
            .map(|z| local_business(&site, z).aggregate_rating)
            .collect();
        assert!(ratings.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_faq_page() {
        let registry = fixtures::registry();
        let lyon = fixtures::zone(&registry, "lyon");
        let faq = local_faq(lyon, fixtures::walk(&registry));
        let value = serde_json::to_value(faq_page(&faq)).unwrap();

        assert_eq!(value["@type"], "FAQPage");
        let questions = value["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[2]["@type"], "Question");
        assert_eq!(
            questions[2]["name"],
            "Quels sont les meilleurs endroits pour promener son chien à Lyon ?"
        );
        assert_eq!(questions[2]["acceptedAnswer"]["@type"], "Answer");
    }

    #[test]
    fn test_breadcrumbs_with_parent() {
        let registry = fixtures::registry();
        let zone = fixtures::zone(&registry, "lyon-6e");
        let trail = breadcrumbs(&Site::default(), &registry, zone, fixtures::walk(&registry));

        let names: Vec<_> = trail
            .item_list_element
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Accueil", "Promenade de chien", "Lyon", "6e arrondissement"]
        );
        assert_eq!(trail.item_list_element[3].position, 4);
        assert_eq!(
            trail.item_list_element[3].item,
            "https://www.balade.fr/promenade-chien/lyon-6e"
        );
    }

    #[test]
    fn test_breadcrumbs_with_dangling_parent() {
        let registry = fixtures::registry();
        let zone = fixtures::zone(&registry, "orphan");
        let trail = breadcrumbs(&Site::default(), &registry, zone, fixtures::walk(&registry));
        assert_eq!(trail.item_list_element.len(), 3);
        assert_eq!(trail.item_list_element[0].item, "https://www.balade.fr/");
    }
}
