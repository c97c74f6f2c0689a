// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! The uniform key/value contract.

use std::collections::BTreeMap;

use super::error::BackendError;
use super::{Key, Value};

/// A storage backend offering point, bulk and prefix access to an ordered
/// byte-key store.
///
/// Implementations translate their engine's notion of an absent key into
/// [`BackendError::KeyNotFound`] and pass every other failure through
/// unchanged.
pub trait Backend: Send + Sync {
    /// Reads the value stored at `key`.
    ///
    /// Returns `Err(BackendError::KeyNotFound)` if the key does not exist.
    fn get(&self, key: &Key) -> Result<Value, BackendError>;

    /// Reads several keys at once.
    ///
    /// Absent keys map to an empty value. Any other error aborts the whole
    /// call, so the result never silently omits a key.
    fn get_bulk(&self, keys: &[Key]) -> Result<BTreeMap<Key, Value>, BackendError> {
        let mut out = BTreeMap::new();
        for key in keys {
            match self.get(key) {
                Ok(value) => {
                    out.insert(key.clone(), value);
                }
                Err(BackendError::KeyNotFound) => {
                    out.insert(key.clone(), Value::default());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }

    /// Returns every key/value pair whose key begins with `prefix`.
    fn get_prefix(&self, prefix: &[u8]) -> Result<BTreeMap<Key, Value>, BackendError>;

    /// Writes `value` at `key`, replacing any previous value.
    fn set(&self, key: Key, value: Value) -> Result<(), BackendError>;

    /// Atomically writes every entry: either all become visible or none do.
    fn set_bulk(&self, entries: BTreeMap<Key, Value>) -> Result<(), BackendError>;

    /// Removes `key`. Deleting an absent key succeeds.
    fn delete(&self, key: &Key) -> Result<(), BackendError>;

    /// Returns the keys beginning with `prefix`, in ascending byte order.
    fn list(&self, prefix: &[u8]) -> Result<Vec<Key>, BackendError>;
}
