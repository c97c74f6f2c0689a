// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! In-memory implementation of [`Backend`].

use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::types::{validate_key, validate_value};
use super::{Backend, BackendError, Key, PrefixRange, Value};

/// Ordered in-memory backend.
///
/// Follows the same contract as [`RocksBackend`](super::RocksBackend),
/// including size limits, so it can stand in for it in tests. Nothing is
/// persisted.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: RwLock<BTreeMap<Key, Value>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &Key) -> Result<Value, BackendError> {
        self.data
            .read()
            .get(key)
            .cloned()
            .ok_or(BackendError::KeyNotFound)
    }

    fn get_prefix(&self, prefix: &[u8]) -> Result<BTreeMap<Key, Value>, BackendError> {
        let data = self.data.read();
        let out = data
            .range(PrefixRange::new(prefix).to_bounds())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(out)
    }

    fn set(&self, key: Key, value: Value) -> Result<(), BackendError> {
        validate_key(&key)?;
        validate_value(&value)?;
        self.data.write().insert(key, value);
        Ok(())
    }

    fn set_bulk(&self, entries: BTreeMap<Key, Value>) -> Result<(), BackendError> {
        for (key, value) in &entries {
            validate_key(key)?;
            validate_value(value)?;
        }

        // Single lock acquisition: readers see all entries or none.
        self.data.write().extend(entries);
        Ok(())
    }

    fn delete(&self, key: &Key) -> Result<(), BackendError> {
        self.data.write().remove(key);
        Ok(())
    }

    fn list(&self, prefix: &[u8]) -> Result<Vec<Key>, BackendError> {
        let data = self.data.read();
        let out = data
            .range(PrefixRange::new(prefix).to_bounds())
            .map(|(k, _)| k.clone())
            .collect();
        Ok(out)
    }
}
