//! Domain types for the persisted admin session.

mod credentials;
mod identity;

pub use credentials::{AuthDomainError, Credentials, Registration};
pub use identity::{AdminIdentity, GateDecision, SessionKey};
