//! Registry inspection commands.

use balade_core::{Priority, RegistryIssue, Zone, ZoneKind};
use tracing::{info, warn};

use super::{Context, emit, emit_json};

/// List zones matching every given filter, in registry order.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn list(
    ctx: &Context<'_>,
    department: Option<&str>,
    priority: Option<Priority>,
    kind: Option<ZoneKind>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let zones = filter(ctx, department, priority, kind);
    info!(count = zones.len(), "Matched zones");

    if json {
        return emit_json(&zones);
    }

    for zone in zones {
        emit(&format!(
            "{:<28} {:<15} {} {:<3} {}",
            zone.slug.as_str(),
            zone.kind.to_string(),
            zone.priority,
            zone.department.as_deref().unwrap_or("-"),
            zone.name
        ))?;
    }
    Ok(())
}

fn filter<'a>(
    ctx: &Context<'a>,
    department: Option<&str>,
    priority: Option<Priority>,
    kind: Option<ZoneKind>,
) -> Vec<&'a Zone> {
    let mut zones: Vec<&Zone> = match (department, priority, kind) {
        (Some(code), _, _) => ctx.registry.by_department(code),
        (None, Some(tier), _) => ctx.registry.by_priority(tier),
        (None, None, Some(kind)) => ctx.registry.by_kind(kind),
        (None, None, None) => ctx.registry.zones().iter().collect(),
    };
    if let Some(tier) = priority {
        zones.retain(|z| z.priority == tier);
    }
    if let Some(kind) = kind {
        zones.retain(|z| z.kind == kind);
    }
    zones
}

/// Show one zone with its parent and children.
///
/// # Errors
///
/// Returns an error if the zone does not exist or writing fails.
pub fn show(ctx: &Context<'_>, key: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let zone = ctx.zone(key)?;

    if json {
        return emit_json(zone);
    }

    let children = ctx.registry.children_of(zone.id.as_str());
    let parent = ctx
        .registry
        .parent_of(zone)
        .map_or_else(|| "-".to_string(), |p| format!("{} ({})", p.name, p.slug));

    emit(&format!("{} [{}]", zone.name, zone.slug))?;
    emit(&format!("  type:        {} ({})", zone.kind, zone.kind.label()))?;
    emit(&format!("  priority:    {}", zone.priority))?;
    emit(&format!(
        "  department:  {} {}",
        zone.department.as_deref().unwrap_or("-"),
        zone.department_name.as_deref().unwrap_or("")
    ))?;
    emit(&format!("  parent:      {parent}"))?;
    emit(&format!(
        "  population:  {}",
        zone.population.as_deref().unwrap_or("-")
    ))?;
    emit(&format!("  highlights:  {}", zone.highlights_list()))?;
    emit(&format!("  image:       {}", ctx.site.absolute(&zone.image)))?;
    if !children.is_empty() {
        let names: Vec<&str> = children.iter().map(|c| c.slug.as_str()).collect();
        emit(&format!("  children:    {}", names.join(", ")))?;
    }
    Ok(())
}

/// Log zone counts per tier and print registry issues.
///
/// # Errors
///
/// Returns an error in strict mode when any issue is found, or if writing fails.
pub fn validate(ctx: &Context<'_>, strict: bool) -> Result<(), Box<dyn std::error::Error>> {
    for (tier, zones) in ctx.registry.sections() {
        info!(priority = %tier, zones = zones.len(), "Tier");
    }

    let issues = ctx.registry.validate();
    for issue in &issues {
        emit(&issue.to_string())?;
    }

    let duplicates = issues
        .iter()
        .filter(|i| matches!(i, RegistryIssue::DuplicateId { .. }))
        .count();
    if issues.is_empty() {
        info!("Registry is clean");
    } else {
        warn!(issues = issues.len(), duplicates, "Registry has issues");
    }

    if strict && !issues.is_empty() {
        return Err(format!("{} registry issues found", issues.len()).into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use balade_core::registry;
    use balade_seo::Site;

    use super::*;
    use crate::config::CliConfig;

    fn with_ctx(f: impl FnOnce(&Context<'_>)) {
        let config = CliConfig {
            base_url: url::Url::parse("https://www.balade.fr").unwrap(),
            zones_file: None,
            services_file: None,
            default_service: balade_core::Slug::parse("promenade-chien").unwrap(),
        };
        let site = Site::default();
        let ctx = Context {
            config: &config,
            registry: registry::builtin(),
            site: &site,
        };
        f(&ctx);
    }

    #[test]
    fn test_filter_combines_all_filters() {
        with_ctx(|ctx| {
            let zones = filter(ctx, Some("75"), Some(Priority::Two), Some(ZoneKind::Quartier));
            assert!(!zones.is_empty());
            assert!(zones.iter().all(|z| z.in_department("75")
                && z.priority == Priority::Two
                && z.kind == ZoneKind::Quartier));
        });
    }

    #[test]
    fn test_filter_without_filters_lists_everything() {
        with_ctx(|ctx| {
            assert_eq!(filter(ctx, None, None, None).len(), ctx.registry.zones().len());
        });
    }

    #[test]
    fn test_filter_unknown_department_is_empty() {
        with_ctx(|ctx| {
            assert!(filter(ctx, Some("999"), None, None).is_empty());
        });
    }
}
