// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Uniform key/value backends over an ordered byte-key store.
//!
//! This module exposes a storage-agnostic contract ([`Backend`]) with point
//! reads, bulk reads, prefix scans, point writes, atomic bulk writes,
//! deletes and key enumeration, and a RocksDB adapter implementing it.
//!
//! # Key Concepts
//!
//! - **Prefix scans** are translated into bounded range scans `[P, U)` where
//!   `U` is the smallest key greater than every key starting with `P`. Prefixes
//!   that are empty or all `0xFF` have no finite `U` and scan to the end.
//! - **Absent keys** surface as [`BackendError::KeyNotFound`]; an empty value
//!   is a real value. Bulk reads soften only this error.
//! - **Bulk writes** commit as a single engine batch, all or nothing, with the
//!   backend's fixed [`DurabilityMode`].
//!
//! # Example
//!
//! ```no_run
//! use rockskv::storage::{Backend, EngineConfig, Key, RocksBackend, Value};
//! use std::path::Path;
//!
//! let backend = RocksBackend::open(Path::new("/tmp/kv"), &EngineConfig::default()).unwrap();
//!
//! backend.set(Key::from("user/1"), Value::from("alice")).unwrap();
//! backend.set(Key::from("user/2"), Value::from("bob")).unwrap();
//!
//! for key in backend.list(b"user/").unwrap() {
//!     println!("{:?}", key);
//! }
//!
//! match backend.get(&Key::from("user/3")) {
//!     Ok(value) => println!("Found: {:?}", value),
//!     Err(e) if e.is_not_found() => println!("Not found"),
//!     Err(e) => panic!("storage failure: {}", e),
//! }
//! ```

mod backend;
mod bounds;
mod config;
mod error;
mod memory;
mod rocks;
mod types;

pub use backend::Backend;
pub use bounds::{prefix_upper_bound, PrefixRange};
pub use config::{open_db, Db, DurabilityMode, EngineConfig};
pub use error::BackendError;
pub use memory::MemoryBackend;
pub use rocks::RocksBackend;
pub use types::{Key, Value, MAX_KEY_SIZE, MAX_VALUE_SIZE};
