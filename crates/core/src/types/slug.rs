//! URL slug type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("slug contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// The input starts or ends with a hyphen, or contains `--`.
    #[error("slug has a misplaced hyphen")]
    MisplacedHyphen,
}

/// A URL path segment identifying a zone or service.
///
/// ## Constraints
///
/// - Length: 1-100 characters
/// - Only lowercase ASCII letters, digits and hyphens
/// - No leading, trailing or doubled hyphen
///
/// ## Examples
///
/// ```
/// use balade_core::Slug;
///
/// assert!(Slug::parse("saint-etienne").is_ok());
/// assert!(Slug::parse("paris-18e").is_ok());
///
/// assert!(Slug::parse("").is_err());            // empty
/// assert!(Slug::parse("Saint-Etienne").is_err()); // uppercase
/// assert!(Slug::parse("-lyon").is_err());       // leading hyphen
/// assert!(Slug::parse("côte").is_err());        // non-ASCII
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Maximum length of a slug.
    pub const MAX_LENGTH: usize = 100;

    /// Parse a `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 100 characters
    /// - Contains anything other than `[a-z0-9-]`
    /// - Starts or ends with a hyphen, or contains two hyphens in a row
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidCharacter(c));
        }

        if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(SlugError::MisplacedHyphen);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}
