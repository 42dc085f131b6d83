//! Port contracts for backend access.
//!
//! Ports define transport-agnostic interfaces used by every service.

pub mod gateway;

pub use gateway::{GatewayError, GatewayResult, ResourceGateway, fetch_collection};
