//! The privilege decision rule, separated from storage so it is
//! independently testable.

use super::grant::Grant;
use crate::key::Key;
use ahash::AHashMap;

/// A method object deciding one permission question against a normalized
/// grant mapping.
///
/// The rule is `has_all() || has_direct()`: a wildcard grant for the target
/// admits everything; otherwise the privilege must be a direct member of the
/// target's list. Targets absent from the mapping grant nothing.
pub struct PrivilegeChecker<'a> {
    target: Key,
    requisite: Key,
    grants: &'a AHashMap<Key, Grant>,
}

impl<'a> PrivilegeChecker<'a> {
    /// Build a checker for one target/privilege question.
    ///
    /// Both identifiers are normalized on entry, so string and [`Key`] inputs
    /// are interchangeable.
    pub fn new(
        target: impl Into<Key>,
        privilege: impl Into<Key>,
        grants: &'a AHashMap<Key, Grant>,
    ) -> Self {
        PrivilegeChecker {
            target: target.into(),
            requisite: privilege.into(),
            grants,
        }
    }

    /// Decide the question. Pure; no state is retained across calls.
    pub fn check(&self) -> bool {
        self.has_all() || self.has_direct()
    }

    /// The target's grant is the wildcard.
    fn has_all(&self) -> bool {
        matches!(self.grants.get(&self.target), Some(Grant::All))
    }

    /// The target is present and its list contains the requisite privilege.
    fn has_direct(&self) -> bool {
        match self.grants.get(&self.target) {
            Some(Grant::List(privileges)) => privileges.contains(&self.requisite),
            _ => false,
        }
    }
}
