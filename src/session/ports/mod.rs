//! Port contracts for local session persistence.

pub mod store;

pub use store::{SessionStore, SessionStoreError, SessionStoreResult};
