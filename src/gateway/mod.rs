//! Resource Gateway: the HTTP seam every other context depends on.
//!
//! The gateway exposes four verbs (`fetch`, `create`, `update`, `remove`)
//! against a configurable base URL and per-resource path. It never retries
//! and never caches. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
