//! Landing page generation commands.

use balade_seo::{LandingPage, local_business, local_content, local_faq, render_html};
use tracing::debug;

use super::{Context, emit, emit_json};

/// Print the five FAQ entries of a landing page.
///
/// # Errors
///
/// Returns an error if the zone or service does not exist, or writing fails.
pub fn faq(
    ctx: &Context<'_>,
    zone: &str,
    service: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let zone = ctx.zone(zone)?;
    let service = ctx.service(service)?;
    let entries = local_faq(zone, service);
    debug!(zone = %zone.id, service = %service.id, "Generated FAQ");

    if json {
        return emit_json(&entries);
    }

    let text: Vec<String> = entries
        .iter()
        .map(|entry| format!("Q: {}\nR: {}", entry.question, entry.answer))
        .collect();
    emit(&text.join("\n\n"))?;
    Ok(())
}

/// Print the long-form copy of a landing page, as markdown or HTML.
///
/// # Errors
///
/// Returns an error if the zone or service does not exist, or writing fails.
pub fn content(
    ctx: &Context<'_>,
    zone: &str,
    service: Option<&str>,
    html: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let zone = ctx.zone(zone)?;
    let service = ctx.service(service)?;
    let markdown = local_content(ctx.registry, zone, service);

    if html {
        emit(render_html(&markdown).trim_end())?;
    } else {
        emit(&markdown)?;
    }
    Ok(())
}

/// Print the `LocalBusiness` JSON-LD of a zone.
///
/// # Errors
///
/// Returns an error if the zone does not exist, or writing fails.
pub fn schema(ctx: &Context<'_>, zone: &str) -> Result<(), Box<dyn std::error::Error>> {
    let zone = ctx.zone(zone)?;
    emit_json(&local_business(ctx.site, zone))
}

/// Print every artifact of a landing page as one JSON document.
///
/// # Errors
///
/// Returns an error if the zone or service does not exist, or writing fails.
pub fn page(
    ctx: &Context<'_>,
    zone: &str,
    service: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let zone = ctx.zone(zone)?;
    let service = ctx.service(service)?;
    emit_json(&LandingPage::build(ctx.site, ctx.registry, zone, service))
}
