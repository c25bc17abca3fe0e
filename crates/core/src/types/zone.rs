//! Geographic zones eligible for a local landing page.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Slug, ZoneId};

/// Kind of geographic area a [`Zone`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    /// A city or town.
    City,
    /// A municipal district (Paris, Lyon, Marseille).
    Arrondissement,
    /// A neighborhood inside a city or district.
    Quartier,
    /// An administrative region.
    Region,
}

impl ZoneKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::City, Self::Arrondissement, Self::Quartier, Self::Region];

    /// French label used in generated copy.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::City => "ville",
            Self::Arrondissement => "arrondissement",
            Self::Quartier => "quartier",
            Self::Region => "région",
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City => write!(f, "city"),
            Self::Arrondissement => write!(f, "arrondissement"),
            Self::Quartier => write!(f, "quartier"),
            Self::Region => write!(f, "region"),
        }
    }
}

impl std::str::FromStr for ZoneKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "city" => Ok(Self::City),
            "arrondissement" => Ok(Self::Arrondissement),
            "quartier" => Ok(Self::Quartier),
            "region" => Ok(Self::Region),
            _ => Err(format!("invalid zone kind: {s}")),
        }
    }
}

/// Error returned when an integer is outside the priority range.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("priority must be between 1 and 4 (got {0})")]
pub struct PriorityError(pub u8);

/// Priority tier of a zone, used for sorting and page sectioning.
///
/// Tier 1 is the most important (major cities), tier 4 the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Priority {
    /// All tiers, highest priority first.
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Numeric tier value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Priority {
    type Error = PriorityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(PriorityError(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.as_u8()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.parse().map_err(|_| format!("invalid priority: {s}"))?;
        Self::try_from(value).map_err(|e| e.to_string())
    }
}

/// A geographic area with its own SEO landing page.
///
/// Zones are static data: they are loaded once into a
/// [`Registry`](crate::Registry) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub slug: Slug,
    #[serde(rename = "type")]
    pub kind: ZoneKind,
    /// Enclosing zone. Only used for lookups, a dangling reference is tolerated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ZoneId>,
    pub priority: Priority,
    /// Department code, e.g. `"75"` or `"2A"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Department label, e.g. `"Rhône"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    pub image: String,
    pub image_alt: String,
    pub description: String,
    /// Free-form population figure, rendered verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,
    /// Points of interest, in display order.
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Zone {
    /// Points of interest joined for inline display.
    #[must_use]
    pub fn highlights_list(&self) -> String {
        self.highlights.join(", ")
    }

    /// Whether this zone is in the given department.
    #[must_use]
    pub fn in_department(&self, code: &str) -> bool {
        self.department.as_deref() == Some(code)
    }
}
