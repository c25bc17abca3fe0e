//! Read-only query helpers over the zone list.
//!
//! All queries are linear scans in registry order. The registry holds a few
//! hundred zones at most, so no secondary index is kept.

use std::collections::BTreeMap;

use super::Registry;
use crate::types::{Priority, Zone, ZoneKind};

impl Registry {
    /// Zones whose department code equals `code`.
    #[must_use]
    pub fn by_department(&self, code: &str) -> Vec<&Zone> {
        self.zones.iter().filter(|z| z.in_department(code)).collect()
    }

    /// Zones in the given priority tier.
    #[must_use]
    pub fn by_priority(&self, priority: Priority) -> Vec<&Zone> {
        self.zones
            .iter()
            .filter(|z| z.priority == priority)
            .collect()
    }

    /// Zones of the given kind.
    #[must_use]
    pub fn by_kind(&self, kind: ZoneKind) -> Vec<&Zone> {
        self.zones.iter().filter(|z| z.kind == kind).collect()
    }

    /// Zones whose `parent` is `id`.
    #[must_use]
    pub fn children_of(&self, id: &str) -> Vec<&Zone> {
        self.zones
            .iter()
            .filter(|z| z.parent.as_ref().is_some_and(|p| p.as_str() == id))
            .collect()
    }

    /// Zones grouped by priority tier, highest priority first.
    ///
    /// Empty tiers are omitted.
    #[must_use]
    pub fn sections(&self) -> BTreeMap<Priority, Vec<&Zone>> {
        let mut sections: BTreeMap<Priority, Vec<&Zone>> = BTreeMap::new();
        for zone in &self.zones {
            sections.entry(zone.priority).or_default().push(zone);
        }
        sections
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use crate::registry::tests::registry;
    use crate::types::{Priority, ZoneKind};

    fn ids(zones: &[&crate::Zone]) -> Vec<String> {
        zones.iter().map(|z| z.id.to_string()).collect()
    }

    #[test]
    fn test_by_department_keeps_registry_order() {
        let registry = registry();
        assert_eq!(
            ids(&registry.by_department("75")),
            vec!["paris", "paris-18e", "montmartre"]
        );
        assert!(registry.by_department("13").is_empty());
    }

    #[test]
    fn test_by_department_skips_zones_without_department() {
        let registry = registry();
        assert!(registry.by_department("").is_empty());
    }

    #[test]
    fn test_by_priority() {
        let registry = registry();
        assert_eq!(ids(&registry.by_priority(Priority::One)), vec!["paris"]);
        assert_eq!(ids(&registry.by_priority(Priority::Four)), vec!["orphan"]);
    }

    #[test]
    fn test_priority_tiers_partition_registry() {
        let registry = registry();
        let total: usize = Priority::ALL
            .iter()
            .map(|&p| registry.by_priority(p).len())
            .sum();
        assert_eq!(total, registry.zones().len());
    }

    #[test]
    fn test_by_kind() {
        let registry = registry();
        assert_eq!(
            ids(&registry.by_kind(ZoneKind::Quartier)),
            vec!["montmartre", "orphan"]
        );
        assert!(registry.by_kind(ZoneKind::Region).is_empty());
    }

    #[test]
    fn test_children_of() {
        let registry = registry();
        assert_eq!(ids(&registry.children_of("paris")), vec!["paris-18e"]);
        assert_eq!(ids(&registry.children_of("paris-18e")), vec!["montmartre"]);
        assert!(registry.children_of("vannes").is_empty());
    }

    #[test]
    fn test_sections() {
        let registry = registry();
        let sections = registry.sections();
        let tiers: Vec<Priority> = sections.keys().copied().collect();
        assert_eq!(
            tiers,
            vec![Priority::One, Priority::Two, Priority::Three, Priority::Four]
        );
        assert_eq!(ids(&sections[&Priority::Three]), vec!["montmartre", "vannes"]);
    }
}
