//! Credential table: typed records plus eager validation of raw config.
//!
//! A credential table is a mapping from username to record, each record a
//! plaintext password and a raw privilege mapping. Validation happens here,
//! at construction, so a malformed table is rejected before any
//! authentication attempt rather than discovered mid-request.

use crate::error::ConfigError;
use crate::key::Key;
use crate::privilege::RawGrant;
use ahash::AHashMap;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// One user's credential record: a plaintext password and the raw privilege
/// mapping their [`PrivilegeSet`](crate::PrivilegeSet) is built from on each
/// successful authentication.
#[derive(Clone, PartialEq, Deserialize)]
pub struct Credentials {
    /// The stored password. Compared exact-match; hashing belongs at the
    /// deployment boundary, not here.
    pub password: String,
    /// Raw target→grant mapping, normalized per authentication.
    pub privileges: AHashMap<Key, RawGrant>,
}

impl Credentials {
    /// Build a record from any identifier/grant representations.
    pub fn new<I, K, G>(password: impl Into<String>, privileges: I) -> Self
    where
        I: IntoIterator<Item = (K, G)>,
        K: Into<Key>,
        G: Into<RawGrant>,
    {
        Credentials {
            password: password.into(),
            privileges: privileges
                .into_iter()
                .map(|(target, grant)| (target.into(), grant.into()))
                .collect(),
        }
    }
}

// The password stays out of Debug output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("password", &"<redacted>")
            .field("privileges", &self.privileges)
            .finish()
    }
}

/// Validate a raw parsed config mapping into a credential table.
///
/// Every structural defect is reported as the [`ConfigError`] variant naming
/// the offending user, checked in record order: the record must be a mapping,
/// must carry a string `password`, and must carry a `privileges` mapping of
/// targets to grant shapes.
pub(crate) fn parse_credential_table(
    config: &Value,
) -> Result<AHashMap<Key, Credentials>, ConfigError> {
    let table = config.as_object().ok_or(ConfigError::NotAMapping)?;

    let mut users = AHashMap::with_capacity(table.len());
    for (name, entry) in table {
        let user = Key::from(name);
        let record = entry
            .as_object()
            .ok_or_else(|| ConfigError::MalformedRecord(user.clone()))?;

        let password = match record.get("password") {
            Some(Value::String(password)) => password.clone(),
            Some(_) => return Err(ConfigError::InvalidPassword(user)),
            None => return Err(ConfigError::MissingPassword(user)),
        };

        let raw = record
            .get("privileges")
            .ok_or_else(|| ConfigError::MissingPrivileges(user.clone()))?;
        let privileges = serde_json::from_value(raw.clone())
            .map_err(|err| ConfigError::InvalidPrivileges(user.clone(), err))?;

        users.insert(user, Credentials { password, privileges });
    }

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_table() {
        let users = parse_credential_table(&json!({
            "test": {
                "password": "hunter2",
                "privileges": { "channel_set": ["get"], "channel": "all" },
            }
        }))
        .unwrap();

        assert_eq!(users.len(), 1);
        let record = users.get("test").unwrap();
        assert_eq!(record.password, "hunter2");
        assert_eq!(record.privileges.len(), 2);
    }

    #[test]
    fn test_rejects_non_mapping() {
        assert!(matches!(
            parse_credential_table(&json!("nope")),
            Err(ConfigError::NotAMapping)
        ));
        assert!(matches!(
            parse_credential_table(&json!(["test"])),
            Err(ConfigError::NotAMapping)
        ));
    }

    #[test]
    fn test_rejects_non_mapping_record() {
        assert!(matches!(
            parse_credential_table(&json!({ "test": "hunter2" })),
            Err(ConfigError::MalformedRecord(user)) if user == Key::new("test")
        ));
    }

    #[test]
    fn test_rejects_missing_password() {
        let result = parse_credential_table(&json!({
            "test": { "privileges": { "channel": "all" } }
        }));
        assert!(matches!(
            result,
            Err(ConfigError::MissingPassword(user)) if user == Key::new("test")
        ));
    }

    #[test]
    fn test_rejects_non_string_password() {
        let result = parse_credential_table(&json!({
            "test": { "password": 42, "privileges": {} }
        }));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPassword(user)) if user == Key::new("test")
        ));
    }

    #[test]
    fn test_rejects_missing_privileges() {
        let result = parse_credential_table(&json!({
            "test": { "password": "hunter2" }
        }));
        assert!(matches!(
            result,
            Err(ConfigError::MissingPrivileges(user)) if user == Key::new("test")
        ));
    }

    #[test]
    fn test_rejects_malformed_privileges() {
        let result = parse_credential_table(&json!({
            "test": { "password": "hunter2", "privileges": 42 }
        }));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPrivileges(user, _)) if user == Key::new("test")
        ));
    }

    #[test]
    fn test_debug_redacts_password() {
        let record = Credentials::new("hunter2", [("channel", RawGrant::from("all"))]);
        let rendered = format!("{:?}", record);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
