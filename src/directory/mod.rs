//! Entity Directories: disposable id-keyed lookups.
//!
//! A directory is projected from one bulk list response and resolves
//! foreign references to display fields. Directories are rebuilt wholesale
//! on every load and never patched, so each one reflects exactly the last
//! successful fetch of its collection.

mod entity;
mod technicians;

pub use entity::{DisplayName, EntityDirectory, ProductDirectory, ProductSummary, UserDirectory};
pub use technicians::{Candidate, TechnicianCandidates, TechnicianDirectory, TechnicianSummary};
