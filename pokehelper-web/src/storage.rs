//! `localStorage` backend for the core persistence layer.

use pokehelper_core::{KeyValueStore, StorageError};
use thiserror::Error;

use crate::dom;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage rejected the operation: {0}")]
    Rejected(String),
}

impl From<WebStorageError> for StorageError {
    fn from(err: WebStorageError) -> Self {
        match err {
            WebStorageError::Unavailable(reason) => Self::Unavailable(reason),
            WebStorageError::Rejected(reason) => Self::Backend(reason),
        }
    }
}

/// Browser `localStorage`, looked up on every access so a store disabled
/// mid-session degrades to logged failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, WebStorageError> {
        dom::local_storage().map_err(|err| WebStorageError::Unavailable(dom::js_error_message(&err)))
    }
}

impl KeyValueStore for LocalStore {
    type Error = WebStorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| WebStorageError::Rejected(dom::js_error_message(&err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| WebStorageError::Rejected(dom::js_error_message(&err)))
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .remove_item(key)
            .map_err(|err| WebStorageError::Rejected(dom::js_error_message(&err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_errors_map_onto_core_storage_errors() {
        let unavailable: StorageError = WebStorageError::Unavailable("private mode".into()).into();
        assert!(matches!(unavailable, StorageError::Unavailable(ref r) if r == "private mode"));
        let rejected: StorageError = WebStorageError::Rejected("QuotaExceededError".into()).into();
        assert!(matches!(rejected, StorageError::Backend(_)));
    }
}
