//! Domain types for resource addressing and response decoding.

mod envelope;
mod path;
mod token;

pub use envelope::{collection_total, decode_collection, extract_error_message};
pub use path::{GatewayMethod, Resource, ResourcePath};
pub use token::BearerToken;
