//! Resource gateway port.

use crate::gateway::domain::{Resource, ResourcePath, decode_collection};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Minimal backend client contract.
///
/// Bodies and responses are JSON documents; typed decoding happens in the
/// calling service so every consumer can apply envelope tolerance.
#[async_trait]
pub trait ResourceGateway: Send + Sync {
    /// Reads a collection or item.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn fetch(&self, path: &ResourcePath) -> GatewayResult<Value>;

    /// Creates a resource (`POST`).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn create(&self, path: &ResourcePath, body: &Value) -> GatewayResult<Value>;

    /// Updates a resource (`PUT`).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn update(&self, path: &ResourcePath, body: &Value) -> GatewayResult<Value>;

    /// Deletes a resource (`DELETE`).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn remove(&self, path: &ResourcePath) -> GatewayResult<Value>;
}

/// Errors returned by gateway adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("request to {path} failed: {message}")]
    Transport {
        /// Logical resource path.
        path: String,
        /// Transport diagnostic.
        message: String,
    },

    /// The backend answered with a non-2xx status.
    #[error("{path} responded with status {status}: {message}")]
    Status {
        /// Logical resource path.
        path: String,
        /// HTTP status code.
        status: u16,
        /// Best-effort message taken from the response body.
        message: String,
    },

    /// The response body was not valid JSON.
    #[error("response from {path} could not be decoded: {message}")]
    Decode {
        /// Logical resource path.
        path: String,
        /// Decoder diagnostic.
        message: String,
    },

    /// The request URL could not be constructed.
    #[error("cannot build request URL for {path}: {message}")]
    InvalidUrl {
        /// Logical resource path.
        path: String,
        /// Builder diagnostic.
        message: String,
    },

    /// The underlying client could not be initialised.
    #[error("failed to initialise gateway client: {0}")]
    Client(String),
}

impl GatewayError {
    /// Returns the message an operator should see for this failure.
    #[must_use]
    pub fn operator_message(&self) -> &str {
        match self {
            Self::Transport { message, .. }
            | Self::Status { message, .. }
            | Self::Decode { message, .. }
            | Self::InvalidUrl { message, .. }
            | Self::Client(message) => message,
        }
    }

    /// Returns the HTTP status for status failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Reads a whole collection and decodes it with list-envelope tolerance.
///
/// # Errors
///
/// Returns [`GatewayError`] when the read itself fails. Shape mismatches are
/// tolerated and yield an empty collection.
pub async fn fetch_collection<G, T>(gateway: &G, resource: Resource) -> GatewayResult<Vec<T>>
where
    G: ResourceGateway + ?Sized,
    T: DeserializeOwned,
{
    let body = gateway.fetch(&ResourcePath::collection(resource)).await?;
    Ok(decode_collection(body, resource.collection_key()))
}
