//! # Gatekey - In-Process Authorization Primitive
//!
//! `gatekey` answers "is action X permitted on target Y?" and can enforce
//! the answer by failing loudly when it is no. A companion authenticator
//! maps a username/password pair to one privilege set drawn from a static
//! credential table, so callers turn "who is this" into "what can they do"
//! in one step.
//!
//! - **Privilege sets** with per-target grants and a wildcard that subsumes
//!   every privilege
//! - **Default-deny**: targets without grants permit nothing
//! - **Representation independence**: `&str`, `String`, and [`Key`] inputs
//!   behave identically everywhere
//! - **Immutable after construction**: every operation is synchronous,
//!   side-effect-free, and safe to call from concurrent threads
//!
//! ## Quick Start
//!
//! ```rust
//! use gatekey::SimpleAuthenticator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let auth = SimpleAuthenticator::from_json(r#"{
//!     "editor": {
//!         "password": "hunter2",
//!         "privileges": { "channel_set": ["get"], "channel": "all" }
//!     }
//! }"#)?;
//!
//! // Who is this?
//! let privs = auth.authenticate("editor", "hunter2")?;
//!
//! // What can they do?
//! assert!(privs.has("get", "channel_set"));
//! assert!(!privs.has("put", "channel_set"));
//! privs.require("put", "channel")?;   // wildcard target
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! This is a pure, read-only evaluator over data supplied at construction.
//! It does not manage accounts, hash passwords, rate-limit attempts, or
//! persist anything; a production deployment adds those at its own boundary.

pub mod auth;
pub mod error;
pub mod key;
pub mod privilege;

pub use crate::auth::{Credentials, SimpleAuthenticator};
pub use crate::error::{AuthenticationFailure, ConfigError, InsufficientPrivilege};
pub use crate::key::Key;
pub use crate::privilege::{Grant, PrivilegeChecker, PrivilegeSet, RawGrant, WILDCARD};
