//! Session Gate and admin sign-in.
//!
//! The gate is a routing guard, not a security boundary: it only checks
//! that a well-formed admin identity is persisted locally. The backend
//! enforces access. Sign-in persists the identity and, when the backend
//! returns one, a bearer token for the resource gateway. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
