// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! RocksDB-backed implementation of [`Backend`].

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use rocksdb::{Direction, IteratorMode, ReadOptions, WriteBatch, WriteOptions};
use tracing::{debug, trace, warn};

use super::config::{open_db, Db, DurabilityMode, EngineConfig};
use super::types::{validate_key, validate_value};
use super::{Backend, BackendError, Key, PrefixRange, Value};

/// Backend over a shared RocksDB handle.
///
/// Holds only immutable state: the handle and the write options derived from
/// the durability mode. Share it across threads behind an `Arc`; all
/// concurrency control is left to RocksDB.
pub struct RocksBackend {
    db: Arc<Db>,
    durability: DurabilityMode,
    write_opts: WriteOptions,
}

impl RocksBackend {
    /// Wraps an already-open database.
    ///
    /// The caller keeps ownership of the handle's lifecycle; the database
    /// closes when the last `Arc` is dropped.
    pub fn new(db: Arc<Db>, durability: DurabilityMode) -> Self {
        Self {
            db,
            durability,
            write_opts: durability.write_options(),
        }
    }

    /// Opens or creates a database and wraps it.
    pub fn open(path: &Path, config: &EngineConfig) -> Result<Self, BackendError> {
        let db = open_db(path, config)?;
        Ok(Self::new(db, config.durability))
    }

    /// Returns the durability mode applied to every write.
    #[inline]
    pub fn durability(&self) -> DurabilityMode {
        self.durability
    }

    /// Returns the shared database handle.
    #[inline]
    pub fn db(&self) -> &Arc<Db> {
        &self.db
    }

    /// Flushes memtables to disk.
    pub fn flush(&self) -> Result<(), BackendError> {
        self.db.flush().map_err(|e| Self::engine_error("flush", e))
    }

    /// Builds a write batch holding every entry.
    ///
    /// Nothing is applied until the batch is committed; dropping it discards
    /// every staged write.
    fn build_batch(&self, entries: BTreeMap<Key, Value>) -> Result<WriteBatch, BackendError> {
        let mut batch = WriteBatch::default();
        for (key, value) in entries {
            validate_key(&key)?;
            validate_value(&value)?;
            batch.put(key.as_bytes(), value.as_bytes());
        }
        Ok(batch)
    }

    fn commit(&self, batch: WriteBatch) -> Result<(), BackendError> {
        self.db
            .write_opt(batch, &self.write_opts)
            .map_err(|e| Self::engine_error("commit", e))
    }

    /// Opens an ascending iterator over every key beginning with `prefix`.
    ///
    /// The iterator reads from an implicit snapshot and is released when
    /// dropped, which happens on every exit path of the scanning call.
    fn scan(
        &self,
        prefix: &[u8],
    ) -> impl Iterator<Item = Result<(Box<[u8]>, Box<[u8]>), rocksdb::Error>> + '_ {
        let (lower, upper) = PrefixRange::new(prefix).into_parts();

        let mut read_opts = ReadOptions::default();
        read_opts.set_iterate_lower_bound(lower.clone());
        if let Some(upper) = upper {
            read_opts.set_iterate_upper_bound(upper);
        }

        self.db
            .iterator_opt(IteratorMode::From(lower.as_slice(), Direction::Forward), read_opts)
    }

    fn engine_error(op: &'static str, e: rocksdb::Error) -> BackendError {
        warn!(op, error = %e, "RocksDB operation failed");
        BackendError::RocksDb(e)
    }
}

impl Backend for RocksBackend {
    fn get(&self, key: &Key) -> Result<Value, BackendError> {
        trace!(key_len = key.len(), "get");

        // The only place the engine's absent-key signal is translated.
        match self.db.get_pinned(key.as_bytes()) {
            Ok(Some(value)) => Ok(Value::new(value.to_vec())),
            Ok(None) => Err(BackendError::KeyNotFound),
            Err(e) => Err(Self::engine_error("get", e)),
        }
    }

    fn get_prefix(&self, prefix: &[u8]) -> Result<BTreeMap<Key, Value>, BackendError> {
        let mut out = BTreeMap::new();
        for item in self.scan(prefix) {
            let (key, value) = item.map_err(|e| Self::engine_error("scan", e))?;
            out.insert(Key::from(key), Value::from(value));
        }

        debug!(prefix_len = prefix.len(), entries = out.len(), "Prefix scan complete");
        Ok(out)
    }

    fn set(&self, key: Key, value: Value) -> Result<(), BackendError> {
        validate_key(&key)?;
        validate_value(&value)?;
        trace!(key_len = key.len(), value_len = value.len(), "set");

        self.db
            .put_opt(key.as_bytes(), value.as_bytes(), &self.write_opts)
            .map_err(|e| Self::engine_error("set", e))
    }

    fn set_bulk(&self, entries: BTreeMap<Key, Value>) -> Result<(), BackendError> {
        let count = entries.len();
        let batch = self.build_batch(entries)?;
        self.commit(batch)?;

        debug!(entries = count, sync = self.durability.is_sync(), "Committed bulk write");
        Ok(())
    }

    fn delete(&self, key: &Key) -> Result<(), BackendError> {
        trace!(key_len = key.len(), "delete");

        self.db
            .delete_opt(key.as_bytes(), &self.write_opts)
            .map_err(|e| Self::engine_error("delete", e))
    }

    fn list(&self, prefix: &[u8]) -> Result<Vec<Key>, BackendError> {
        let mut out = Vec::new();
        for item in self.scan(prefix) {
            let (key, _) = item.map_err(|e| Self::engine_error("scan", e))?;
            out.push(Key::from(key));
        }

        debug!(prefix_len = prefix.len(), keys = out.len(), "Key listing complete");
        Ok(out)
    }
}
