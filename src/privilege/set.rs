//! Normalized, queryable target→privilege grants for one identity.

use super::checker::PrivilegeChecker;
use super::grant::{Grant, RawGrant};
use crate::error::{ConfigError, InsufficientPrivilege};
use crate::key::Key;
use ahash::AHashMap;
use serde_json::Value;
use tracing::debug;

/// The privileges one identity holds, keyed by target.
///
/// A `PrivilegeSet` is a value object: it normalizes its raw mapping once at
/// construction and is never mutated afterwards, so it can be queried from
/// any number of threads without coordination. Targets absent from the
/// mapping grant nothing (default-deny).
///
/// # Examples
///
/// ```
/// use gatekey::{PrivilegeSet, RawGrant};
///
/// let privs = PrivilegeSet::new([
///     ("channel_set", RawGrant::from(["get"])),
///     ("channel", RawGrant::from("all")),
/// ]);
///
/// assert!(privs.has("get", "channel_set"));
/// assert!(!privs.has("put", "channel_set"));
/// assert!(privs.has("put", "channel"));      // wildcard
/// assert!(!privs.has("get", "player"));      // unknown target
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PrivilegeSet {
    grants: AHashMap<Key, Grant>,
}

impl PrivilegeSet {
    /// Build a privilege set from a raw mapping.
    ///
    /// Keys and privilege identifiers are accepted in any `Into<Key>` form
    /// and normalized here; grant values are accepted in any
    /// `Into<RawGrant>` form (wildcard marker, single identifier, or list).
    /// Construction never fails.
    pub fn new<I, K, G>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, G)>,
        K: Into<Key>,
        G: Into<RawGrant>,
    {
        let grants = raw
            .into_iter()
            .map(|(target, grant)| (target.into(), grant.into().normalize()))
            .collect();
        PrivilegeSet { grants }
    }

    /// Build a privilege set from an already-parsed JSON mapping.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a mapping of targets to grant shapes.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let raw: AHashMap<Key, RawGrant> = serde_json::from_value(value.clone())?;
        Ok(Self::new(raw))
    }

    /// Parse a privilege mapping from a JSON document.
    ///
    /// ```
    /// use gatekey::PrivilegeSet;
    ///
    /// let privs = PrivilegeSet::from_json(r#"{"channel": "all", "channel_set": ["get"]}"#)?;
    /// assert!(privs.has("put", "channel"));
    /// # Ok::<(), gatekey::ConfigError>(())
    /// ```
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let raw: AHashMap<Key, RawGrant> = serde_json::from_str(source)?;
        Ok(Self::new(raw))
    }

    /// Check whether `privilege` is granted on `target`.
    ///
    /// Both arguments are normalized exactly as at construction, so string
    /// and [`Key`] inputs are interchangeable. Unknown targets return
    /// `false`; this never fails.
    pub fn has(&self, privilege: impl Into<Key>, target: impl Into<Key>) -> bool {
        PrivilegeChecker::new(target, privilege, &self.grants).check()
    }

    /// Enforce that `privilege` is granted on `target`.
    ///
    /// Returns `Ok(())` exactly when [`has`](Self::has) is true; otherwise an
    /// [`InsufficientPrivilege`] carrying the denied pair. Callers should
    /// treat the error as a hard stop for the current operation. No side
    /// effect beyond control flow.
    pub fn require(
        &self,
        privilege: impl Into<Key>,
        target: impl Into<Key>,
    ) -> Result<(), InsufficientPrivilege> {
        let privilege = privilege.into();
        let target = target.into();

        if PrivilegeChecker::new(&target, &privilege, &self.grants).check() {
            Ok(())
        } else {
            debug!("privilege denied: '{}' on '{}'", privilege, target);
            Err(InsufficientPrivilege { target, privilege })
        }
    }

    /// The normalized grant mapping.
    pub fn grants(&self) -> &AHashMap<Key, Grant> {
        &self.grants
    }

    /// Number of targets with explicit grants.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// True if no target has any grant.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}
