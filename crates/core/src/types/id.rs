//! Newtype IDs for type-safe registry references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different record types.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>`, `AsRef<str>` and `Borrow<str>`
///
/// `Borrow<str>` lets maps keyed by the ID be queried with a plain `&str`.
///
/// # Example
///
/// ```rust
/// # use balade_core::define_id;
/// define_id!(WalkerId);
/// define_id!(BookingId);
///
/// let walker = WalkerId::new("w-1");
/// let booking = BookingId::new("w-1");
///
/// // These are different types, so this won't compile:
/// // let _: WalkerId = booking;
/// assert_eq!(walker.as_str(), booking.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ZoneId);
define_id!(ServiceId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_display_and_as_str() {
        let id = ZoneId::new("lyon");
        assert_eq!(id.as_str(), "lyon");
        assert_eq!(id.to_string(), "lyon");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ServiceId::from("promenade-chien");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"promenade-chien\"");
    }

    #[test]
    fn test_map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ZoneId::new("paris"), 1);
        assert_eq!(map.get("paris"), Some(&1));
        assert_eq!(map.get("lyon"), None);
    }
}
