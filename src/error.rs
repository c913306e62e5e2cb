//! Error types for credential-table construction and authorization checks.
//!
//! Configuration errors and runtime authorization failures are separate
//! families: a [`ConfigError`] means the credential table itself is malformed
//! and should be treated as a startup failure, while [`AuthenticationFailure`]
//! and [`InsufficientPrivilege`] are per-call outcomes.

use crate::key::Key;
use thiserror::Error;

/// A malformed credential table, rejected eagerly at construction.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("credential table must be a mapping of usernames to records")]
    NotAMapping,

    #[error("credential record for '{0}' must be a mapping")]
    MalformedRecord(Key),

    #[error("credential record for '{0}' is missing a password")]
    MissingPassword(Key),

    #[error("password for '{0}' must be a string")]
    InvalidPassword(Key),

    #[error("credential record for '{0}' is missing a privilege mapping")]
    MissingPrivileges(Key),

    #[error("privilege mapping for '{0}' is malformed: {1}")]
    InvalidPrivileges(Key, #[source] serde_json::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Credentials were rejected.
///
/// Deliberately opaque: unknown username, wrong password, and blank
/// credentials are indistinguishable from the caller's side, so a failed
/// call leaks nothing about which part of the check failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("authentication failed")]
pub struct AuthenticationFailure;

/// An authenticated identity's privilege set does not permit the action.
///
/// Distinct from [`AuthenticationFailure`]: this is raised post-authentication
/// by [`PrivilegeSet::require`](crate::PrivilegeSet::require). Carries the
/// denied pair so the host can report what was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("insufficient privilege: '{privilege}' on '{target}'")]
pub struct InsufficientPrivilege {
    /// The target the check ran against.
    pub target: Key,
    /// The privilege that was not granted.
    pub privilege: Key,
}
