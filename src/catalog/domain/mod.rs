//! Domain model for backend entities.
//!
//! Records are decoded leniently: identifiers may arrive as strings or
//! numbers, amounts as numbers or numeric strings, and unknown status values
//! are preserved verbatim rather than rejected.

mod error;
mod ids;
mod lenient;
mod order;
mod product;
mod technician;
mod user;

pub use error::CatalogDomainError;
pub use ids::{OrderId, ProductId, TechnicianId, UserId};
pub use order::{Order, OrderStatus};
pub use product::{Product, ProductDraft};
pub use technician::{NewTechnician, Technician, TechnicianStatus};
pub use user::User;
