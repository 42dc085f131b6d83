//! Wifi Admin: operator dashboard for an internet installation business.
//!
//! Administrators sign in, review customer orders, manage the package
//! catalog and field technicians, and assign an available technician to each
//! pending installation order.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, files, memory)
//!
//! # Modules
//!
//! - [`gateway`]: Resource gateway over the REST backend
//! - [`catalog`]: Orders, products, technicians and users
//! - [`directory`]: Id-to-name lookups for display
//! - [`orders`]: Order collection view with resolved names
//! - [`assignment`]: Order-technician assignment workflow
//! - [`session`]: Admin sign-in and the session gate
//! - [`dashboard`]: Headline counts and recent orders
//! - [`presentation`]: Plain-text screen rendering
//! - [`cli`]: Operator command line

pub mod assignment;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod directory;
pub mod gateway;
pub mod orders;
pub mod presentation;
pub mod session;
