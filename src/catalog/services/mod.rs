//! Orchestration services for the management screens.

mod management;

pub use management::{CatalogService, CatalogServiceError, CatalogServiceResult};
