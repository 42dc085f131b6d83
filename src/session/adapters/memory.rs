//! In-memory session store for tests and ephemeral sessions.

use crate::session::{
    domain::SessionKey,
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    values: Arc<RwLock<HashMap<SessionKey, String>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(message: &str) -> SessionStoreError {
    SessionStoreError::storage(std::io::Error::other(message.to_owned()))
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: SessionKey) -> SessionStoreResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|err| lock_error(&err.to_string()))?;
        Ok(values.get(&key).cloned())
    }

    fn set(&self, key: SessionKey, value: &str) -> SessionStoreResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|err| lock_error(&err.to_string()))?;
        values.insert(key, value.to_owned());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> SessionStoreResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|err| lock_error(&err.to_string()))?;
        values.remove(&key);
        Ok(())
    }
}
