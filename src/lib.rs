// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! rockskv: a uniform key/value backend contract over RocksDB.
//!
//! Higher-level services program against [`Backend`] and stay agnostic of the
//! engine, while [`RocksBackend`] handles byte-range scans, not-found mapping
//! and atomic, durability-configured batch writes.

pub mod storage;

pub use storage::{
    open_db, prefix_upper_bound, Backend, BackendError, Db, DurabilityMode, EngineConfig, Key,
    MemoryBackend, PrefixRange, RocksBackend, Value, MAX_KEY_SIZE, MAX_VALUE_SIZE,
};
