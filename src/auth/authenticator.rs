//! Static-table credential authentication.

use super::config::{parse_credential_table, Credentials};
use crate::error::{AuthenticationFailure, ConfigError};
use crate::key::Key;
use crate::privilege::PrivilegeSet;
use ahash::AHashMap;
use serde_json::Value;
use tracing::debug;

/// Verifies username/password pairs against a static credential table and
/// materializes the matching [`PrivilegeSet`] on success.
///
/// The table is supplied once at construction and never mutated, so a shared
/// authenticator can serve concurrent callers without locking. Each
/// successful call builds a fresh `PrivilegeSet`; nothing is cached or
/// shared between calls.
///
/// # Examples
///
/// ```
/// use gatekey::SimpleAuthenticator;
///
/// let auth = SimpleAuthenticator::from_json(r#"{
///     "editor": {
///         "password": "hunter2",
///         "privileges": { "channel_set": ["get"], "channel": "all" }
///     }
/// }"#)?;
///
/// let privs = auth.authenticate("editor", "hunter2")?;
/// assert!(privs.has("get", "channel_set"));
/// assert!(auth.authenticate("editor", "wrong").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SimpleAuthenticator {
    users: AHashMap<Key, Credentials>,
}

impl SimpleAuthenticator {
    /// Build an authenticator from typed credential records.
    ///
    /// Typed records cannot be structurally malformed, so this path is
    /// infallible; raw config goes through [`from_value`](Self::from_value)
    /// instead.
    pub fn new<I, K>(users: I) -> Self
    where
        I: IntoIterator<Item = (K, Credentials)>,
        K: Into<Key>,
    {
        let users = users
            .into_iter()
            .map(|(name, record)| (name.into(), record))
            .collect();
        SimpleAuthenticator { users }
    }

    /// Build an authenticator from an already-parsed config mapping,
    /// validating the whole table eagerly.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the top level is not a mapping, or any
    /// record is missing its `password` or `privileges` field (or carries
    /// them in the wrong shape). These are startup failures, distinct from
    /// authentication failures.
    pub fn from_value(config: &Value) -> Result<Self, ConfigError> {
        let users = parse_credential_table(config)?;
        Ok(SimpleAuthenticator { users })
    }

    /// Parse a credential table from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Value = serde_json::from_str(source)?;
        Self::from_value(&config)
    }

    /// Parse a credential table from a TOML document.
    ///
    /// ```
    /// use gatekey::SimpleAuthenticator;
    ///
    /// let auth = SimpleAuthenticator::from_toml(r#"
    ///     [editor]
    ///     password = "hunter2"
    ///
    ///     [editor.privileges]
    ///     channel_set = ["get"]
    ///     channel = "all"
    /// "#)?;
    /// assert!(auth.authenticate("editor", "hunter2").is_ok());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Value = toml::from_str(source)?;
        Self::from_value(&config)
    }

    /// Verify credentials and build the matching privilege set.
    ///
    /// The username is normalized like every other identifier, so string and
    /// [`Key`] inputs are interchangeable. Blank usernames and blank
    /// passwords fail closed, even against a record whose stored password is
    /// itself blank.
    ///
    /// # Errors
    ///
    /// [`AuthenticationFailure`] for any invalid credentials; the error does
    /// not say which part of the check failed. Repeated calls are idempotent
    /// and side-effect-free beyond allocating the returned set.
    pub fn authenticate(
        &self,
        username: impl Into<Key>,
        password: &str,
    ) -> Result<PrivilegeSet, AuthenticationFailure> {
        let username = username.into();

        if username.is_empty() || password.is_empty() {
            debug!("rejected authentication attempt with blank credentials");
            return Err(AuthenticationFailure);
        }

        match self.users.get(&username) {
            Some(record) if record.password == password => {
                debug!("authenticated '{}'", username);
                Ok(PrivilegeSet::new(record.privileges.clone()))
            }
            _ => {
                debug!("rejected credentials for '{}'", username);
                Err(AuthenticationFailure)
            }
        }
    }

    /// Number of configured users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True if no users are configured.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
