//! Technician Assignment Workflow.
//!
//! Lets an operator attach exactly one available technician to exactly one
//! displayed order and then reconciles the order view with the backend:
//! one write, followed by two concurrent reads (orders, technicians) that
//! replace the view's list and technician directory wholesale. Failures
//! never mutate the displayed lists. The backend may still reject a
//! technician that became unavailable after filtering; last write wins and
//! no locking is attempted. The module follows hexagonal architecture:
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
