//! Privilege representation and evaluation.
//!
//! - Wildcard-or-list grants per target, normalized at construction
//! - Default-deny for targets without grants
//! - Wildcard-first decision rule, split out into [`PrivilegeChecker`]

mod checker;
mod grant;
mod set;

pub use checker::PrivilegeChecker;
pub use grant::{Grant, RawGrant, WILDCARD};
pub use set::PrivilegeSet;
