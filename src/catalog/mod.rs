//! Entity catalogue for the admin dashboard.
//!
//! Holds the typed views of backend records (orders, technicians, products,
//! users) together with the management services behind the product,
//! technician and customer screens. All persistence lives in the backend;
//! services read and write through the resource gateway and re-fetch after
//! every successful write. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
