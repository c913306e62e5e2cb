//! Credential verification against a static table.

mod authenticator;
mod config;

pub use authenticator::SimpleAuthenticator;
pub use config::Credentials;
