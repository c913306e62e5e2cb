//! Canonical identifier type for targets, privileges, and usernames.
//!
//! Every public entry point normalizes its identifiers into [`Key`] before
//! storage or comparison, so `&str`, `String`, and `Key` inputs behave
//! identically. Comparison is exact: no case folding, no trimming.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A normalized identifier.
///
/// `Key` is the single canonical form for target names, privilege names, and
/// usernames. Anything `Into<Key>` is accepted wherever an identifier is
/// expected, so lookups are representation-independent:
///
/// ```
/// use gatekey::{Key, PrivilegeSet, RawGrant};
///
/// let privs = PrivilegeSet::new([("channel", RawGrant::from(["get", "put"]))]);
/// assert_eq!(privs.has("get", "channel"), privs.has(Key::new("get"), Key::new("channel")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Create a key from any string-like name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Key(name.as_ref().to_owned())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty identifier.
    ///
    /// Blank identifiers are never rejected here; they simply match nothing
    /// in any well-formed table, so checks against them fail closed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key(name.clone())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<Key, _>` be probed with a bare `&str`.
impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_representations_are_interchangeable() {
        let from_str = Key::from("get");
        let from_string = Key::from(String::from("get"));
        let from_ref = Key::from(&from_str);

        assert_eq!(from_str, from_string);
        assert_eq!(from_str, from_ref);
        assert_eq!(from_str, Key::new("get"));
    }

    #[test]
    fn test_comparison_is_exact() {
        assert_ne!(Key::new("Get"), Key::new("get"));
        assert_ne!(Key::new(" get"), Key::new("get"));
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut map = HashMap::new();
        map.insert(Key::new("channel"), 1);

        assert_eq!(map.get("channel"), Some(&1));
        assert_eq!(map.get("player"), None);
    }

    #[test]
    fn test_serde_transparent() {
        let key: Key = serde_json::from_str("\"channel_set\"").unwrap();
        assert_eq!(key, Key::new("channel_set"));
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"channel_set\"");
    }

    #[test]
    fn test_empty_key() {
        assert!(Key::new("").is_empty());
        assert!(!Key::new("get").is_empty());
    }
}
