// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration and durability settings.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{BlockBasedOptions, DBWithThreadMode, MultiThreaded, Options, WriteOptions};
use tracing::{info, instrument};

use super::error::BackendError;

/// The shared RocksDB handle type used by [`RocksBackend`](super::RocksBackend).
pub type Db = DBWithThreadMode<MultiThreaded>;

/// Durability mode for write operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurabilityMode {
    /// Writes are appended to the WAL but not fsynced.
    /// Durable against process crashes but not power failures.
    #[default]
    WalOnly,
    /// Every write blocks until it is fsynced to disk.
    FsyncEveryWrite,
}

impl DurabilityMode {
    /// Maps a boolean `sync` flag onto a durability mode.
    #[inline]
    pub fn from_sync(sync: bool) -> Self {
        if sync {
            DurabilityMode::FsyncEveryWrite
        } else {
            DurabilityMode::WalOnly
        }
    }

    /// Returns true if writes wait for fsync.
    #[inline]
    pub fn is_sync(self) -> bool {
        self == DurabilityMode::FsyncEveryWrite
    }

    /// Builds the engine write options for this mode.
    pub fn write_options(self) -> WriteOptions {
        let mut opts = WriteOptions::default();
        opts.set_sync(self.is_sync());
        opts
    }
}

impl From<bool> for DurabilityMode {
    fn from(sync: bool) -> Self {
        Self::from_sync(sync)
    }
}

/// Configuration for opening a RocksDB store.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Create the database directory if it does not exist.
    pub create_if_missing: bool,
    /// Memtable size in bytes.
    pub write_buffer_size: usize,
    /// Maximum number of memtables.
    pub max_write_buffer_number: i32,
    /// Target SST file size for level 1.
    pub target_file_size_base: u64,
    /// Bloom filter bits per key (None = no bloom filter).
    pub bloom_filter_bits: Option<f64>,
    /// Durability applied to every write issued through the backend.
    pub durability: DurabilityMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            create_if_missing: true,
            write_buffer_size: 64 * 1024 * 1024, // 64MB
            max_write_buffer_number: 4,
            target_file_size_base: 64 * 1024 * 1024,
            bloom_filter_bits: Some(10.0),
            durability: DurabilityMode::default(),
        }
    }
}

impl EngineConfig {
    /// Small buffers for tests and benchmarks.
    pub fn for_testing() -> Self {
        Self {
            write_buffer_size: 4 * 1024 * 1024, // 4MB
            max_write_buffer_number: 2,
            target_file_size_base: 4 * 1024 * 1024,
            ..Self::default()
        }
    }

    /// Sets the durability mode.
    pub fn with_durability(mut self, durability: DurabilityMode) -> Self {
        self.durability = durability;
        self
    }

    /// Sets the memtable size.
    pub fn with_write_buffer_size(mut self, bytes: usize) -> Self {
        self.write_buffer_size = bytes;
        self
    }

    /// Sets bloom filter bits per key, or disables the filter.
    pub fn with_bloom_filter_bits(mut self, bits: Option<f64>) -> Self {
        self.bloom_filter_bits = bits;
        self
    }

    /// Refuses to create a missing database.
    pub fn must_exist(mut self) -> Self {
        self.create_if_missing = false;
        self
    }

    /// Renders the engine options.
    ///
    /// No prefix extractor is installed: prefix scans rely on total key order.
    pub fn to_options(&self) -> Options {
        let mut opts = Options::default();
        opts.create_if_missing(self.create_if_missing);

        opts.set_write_buffer_size(self.write_buffer_size);
        opts.set_max_write_buffer_number(self.max_write_buffer_number);
        opts.set_target_file_size_base(self.target_file_size_base);
        opts.set_level_compaction_dynamic_level_bytes(true);

        if let Some(bits) = self.bloom_filter_bits {
            let mut block_opts = BlockBasedOptions::default();
            block_opts.set_bloom_filter(bits, false);
            opts.set_block_based_table_factory(&block_opts);
        }

        opts
    }
}

/// Opens a RocksDB store, returning a handle that can be shared across
/// backends and threads.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn open_db(path: &Path, config: &EngineConfig) -> Result<Arc<Db>, BackendError> {
    let db = Db::open(&config.to_options(), path)?;
    info!(durability = ?config.durability, "Opened RocksDB store");
    Ok(Arc::new(db))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_durability_from_sync() {
        assert_eq!(DurabilityMode::from(true), DurabilityMode::FsyncEveryWrite);
        assert_eq!(DurabilityMode::from(false), DurabilityMode::WalOnly);
        assert!(DurabilityMode::FsyncEveryWrite.is_sync());
        assert!(!DurabilityMode::default().is_sync());
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::for_testing()
            .with_durability(DurabilityMode::FsyncEveryWrite)
            .with_bloom_filter_bits(None)
            .with_write_buffer_size(8 * 1024 * 1024)
            .must_exist();

        assert_eq!(config.durability, DurabilityMode::FsyncEveryWrite);
        assert_eq!(config.bloom_filter_bits, None);
        assert!(!config.create_if_missing);
        assert_eq!(config.write_buffer_size, 8 * 1024 * 1024);
        assert_eq!(config.max_write_buffer_number, 2);
    }

    #[test]
    fn test_open_db_creates_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store");

        let db = open_db(&path, &EngineConfig::for_testing()).unwrap();
        db.put(b"k", b"v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_missing_db_fails_when_must_exist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent");

        let result = open_db(&path, &EngineConfig::for_testing().must_exist());
        assert!(matches!(result, Err(BackendError::RocksDb(_))));
    }
}
