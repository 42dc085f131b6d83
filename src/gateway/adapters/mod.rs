//! Adapter implementations for the resource gateway port.

pub mod http;
pub mod memory;

pub use http::HttpResourceGateway;
pub use memory::{InMemoryResourceGateway, ListShape, RecordedCall};
