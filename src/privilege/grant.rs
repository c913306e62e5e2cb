//! Grant representation: the wildcard marker or an explicit privilege list.
//!
//! Raw input arrives as the bare wildcard marker, a single identifier, or a
//! collection of identifiers, and is normalized into [`Grant`] before any
//! check runs.

use crate::key::Key;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// The distinguished marker granting every privilege for a target.
///
/// Only the *bare* marker is special: `"all"` inside a privilege list is a
/// literal privilege named `all`.
pub const WILDCARD: &str = "all";

/// A normalized privilege specification for one target.
///
/// The wildcard is a tagged variant rather than a sentinel inside the list,
/// so evaluation branches on shape, never on value inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
    /// Every privilege is granted for this target, including identifiers
    /// never mentioned anywhere in the mapping.
    All,
    /// Exactly these privileges are granted.
    List(AHashSet<Key>),
}

impl Grant {
    /// True if this grant admits the given privilege.
    pub fn admits(&self, privilege: &Key) -> bool {
        match self {
            Grant::All => true,
            Grant::List(privileges) => privileges.contains(privilege),
        }
    }
}

/// A privilege specification as a config loader hands it over, before
/// normalization.
///
/// Deserializes untagged, so JSON/TOML values map directly:
/// `"all"` → wildcard, `"get"` → single identifier, `["get", "put"]` → list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawGrant {
    /// The wildcard marker, or a single privilege identifier.
    Single(String),
    /// A collection of privilege identifiers.
    List(Vec<String>),
}

impl RawGrant {
    /// Normalize into canonical [`Grant`] form.
    ///
    /// A single identifier other than the wildcard marker becomes a
    /// one-element list.
    pub fn normalize(self) -> Grant {
        match self {
            RawGrant::Single(name) if name == WILDCARD => Grant::All,
            RawGrant::Single(name) => Grant::List(std::iter::once(Key::from(name)).collect()),
            RawGrant::List(names) => Grant::List(names.into_iter().map(Key::from).collect()),
        }
    }
}

impl From<&str> for RawGrant {
    fn from(name: &str) -> Self {
        RawGrant::Single(name.to_owned())
    }
}

impl From<String> for RawGrant {
    fn from(name: String) -> Self {
        RawGrant::Single(name)
    }
}

impl From<Key> for RawGrant {
    fn from(key: Key) -> Self {
        RawGrant::Single(key.as_str().to_owned())
    }
}

impl From<Vec<String>> for RawGrant {
    fn from(names: Vec<String>) -> Self {
        RawGrant::List(names)
    }
}

impl From<Vec<&str>> for RawGrant {
    fn from(names: Vec<&str>) -> Self {
        RawGrant::List(names.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RawGrant {
    fn from(names: [&str; N]) -> Self {
        RawGrant::List(names.iter().map(|name| (*name).to_owned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_wildcard_normalizes_to_all() {
        assert_eq!(RawGrant::from(WILDCARD).normalize(), Grant::All);
        assert_eq!(RawGrant::Single("all".to_owned()).normalize(), Grant::All);
    }

    #[test]
    fn test_single_identifier_becomes_one_element_list() {
        let grant = RawGrant::from("get").normalize();
        assert!(grant.admits(&Key::new("get")));
        assert!(!grant.admits(&Key::new("put")));
        assert_ne!(grant, Grant::All);
    }

    #[test]
    fn test_wildcard_inside_list_is_literal() {
        let grant = RawGrant::from(vec!["all"]).normalize();
        assert_ne!(grant, Grant::All);
        assert!(grant.admits(&Key::new("all")));
        assert!(!grant.admits(&Key::new("get")));
    }

    #[test]
    fn test_list_normalization() {
        let grant = RawGrant::from(["get", "put"]).normalize();
        assert!(grant.admits(&Key::new("get")));
        assert!(grant.admits(&Key::new("put")));
        assert!(!grant.admits(&Key::new("delete")));
    }

    #[test]
    fn test_all_admits_anything() {
        assert!(Grant::All.admits(&Key::new("get")));
        assert!(Grant::All.admits(&Key::new("never_mentioned")));
        assert!(Grant::All.admits(&Key::new("")));
    }

    #[test]
    fn test_untagged_deserialization() {
        let single: RawGrant = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(single, RawGrant::Single("all".to_owned()));

        let list: RawGrant = serde_json::from_str("[\"get\", \"put\"]").unwrap();
        assert_eq!(list, RawGrant::List(vec!["get".to_owned(), "put".to_owned()]));
    }
}
