//! Directory-backed session store.
//!
//! Each key is a file inside a capability-scoped directory, so the store
//! can never touch paths outside it.

use crate::session::{
    domain::SessionKey,
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::fmt;
use std::io::ErrorKind;

/// Session store persisting one file per key.
pub struct FileSessionStore {
    dir: Dir,
}

impl fmt::Debug for FileSessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSessionStore").finish_non_exhaustive()
    }
}

impl FileSessionStore {
    /// Opens the store, creating the directory when missing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Storage`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> SessionStoreResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(SessionStoreError::storage)?;
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(SessionStoreError::storage)?;
        Ok(Self { dir })
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: SessionKey) -> SessionStoreResult<Option<String>> {
        match self.dir.read_to_string(key.as_str()) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SessionStoreError::storage(err)),
        }
    }

    fn set(&self, key: SessionKey, value: &str) -> SessionStoreResult<()> {
        self.dir
            .write(key.as_str(), value)
            .map_err(SessionStoreError::storage)
    }

    fn remove(&self, key: SessionKey) -> SessionStoreResult<()> {
        match self.dir.remove_file(key.as_str()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionStoreError::storage(err)),
        }
    }
}
