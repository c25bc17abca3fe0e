//! Bookable service categories.

use serde::{Deserialize, Serialize};

use super::{ServiceId, Slug};

/// An offering a walker or sitter can be booked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub slug: Slug,
    pub description: String,
}

impl Service {
    /// Service name for use mid-sentence ("Promenade de chien" -> "promenade de chien").
    #[must_use]
    pub fn name_lowercase(&self) -> String {
        let mut chars = self.name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_lowercase().chain(chars).collect()
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lowercase_only_touches_first_char() {
        let service = Service {
            id: ServiceId::new("visite-domicile"),
            name: "Visite à domicile Premium".to_string(),
            slug: Slug::parse("visite-domicile").unwrap(),
            description: String::new(),
        };
        assert_eq!(service.name_lowercase(), "visite à domicile Premium");
    }

    #[test]
    fn test_name_lowercase_empty() {
        let service = Service {
            id: ServiceId::new("x"),
            name: String::new(),
            slug: Slug::parse("x").unwrap(),
            description: String::new(),
        };
        assert_eq!(service.name_lowercase(), "");
    }
}
