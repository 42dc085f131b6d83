//! Durable local key-value store port.

use crate::session::domain::SessionKey;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Synchronous key-value storage for the admin session.
///
/// Reads are synchronous so the gate can decide on every protected entry
/// without awaiting.
pub trait SessionStore: Send + Sync {
    /// Reads a value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the backing storage fails. A
    /// missing key is `Ok(None)`.
    fn get(&self, key: SessionKey) -> SessionStoreResult<Option<String>>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the backing storage fails.
    fn set(&self, key: SessionKey, value: &str) -> SessionStoreResult<()>;

    /// Deletes a value. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the backing storage fails.
    fn remove(&self, key: SessionKey) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Underlying storage failure.
    #[error("session storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
