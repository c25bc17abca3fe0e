//! Balade SEO - Local landing page generation.
//!
//! Every function in this crate is a pure transformation of registry data:
//! the same zone and service always produce byte-identical output.
//!
//! # Modules
//!
//! - [`faq`] - The five-question local FAQ
//! - [`content`] - Long-form marketing copy and its HTML rendering
//! - [`schema`] - schema.org JSON-LD (`LocalBusiness`, `FAQPage`, `BreadcrumbList`)
//! - [`meta`] - Title, description and canonical URL of a landing page
//! - [`page`] - Everything a landing page needs, bundled
//! - [`sitemap`] - XML sitemap of all landing pages
//! - [`site`] - Site-wide settings (base URL, brand, fixed business details)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod content;
pub mod faq;
pub mod meta;
pub mod page;
pub mod schema;
pub mod site;
pub mod sitemap;

#[cfg(test)]
pub(crate) mod fixtures;

pub use content::{local_content, render_html};
pub use faq::{FaqEntry, local_faq};
pub use meta::{PageMeta, page_meta};
pub use page::LandingPage;
pub use schema::{LocalBusinessSchema, local_business};
pub use site::Site;
