//! Sitemap command.

use std::path::Path;

use balade_seo::sitemap;
use tracing::info;

use super::{Context, emit};

/// Build the sitemap and write it to `output`, or stdout when `None`.
///
/// # Errors
///
/// Returns an error if the output file cannot be written.
pub fn write(
    ctx: &Context<'_>,
    output: Option<&Path>,
    with_lastmod: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let lastmod = with_lastmod.then(|| chrono::Utc::now().date_naive());
    let xml = sitemap::build(ctx.site, ctx.registry, lastmod);

    let urls = ctx.registry.zones().len() * ctx.registry.services().len();
    match output {
        Some(path) => {
            std::fs::write(path, &xml)?;
            info!(path = %path.display(), urls, "Sitemap written");
        }
        None => {
            emit(xml.trim_end())?;
            info!(urls, "Sitemap printed");
        }
    }
    Ok(())
}
