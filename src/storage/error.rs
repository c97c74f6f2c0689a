// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Backend error types.

/// Errors that can occur in backend operations.
///
/// Callers are expected to branch on [`BackendError::KeyNotFound`] and treat
/// every other variant as a storage malfunction.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("key not found")]
    KeyNotFound,

    #[error("key too large: {size} > {max}")]
    KeyTooLarge { size: usize, max: usize },

    #[error("value too large: {size} > {max}")]
    ValueTooLarge { size: usize, max: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("rocksdb error: {0}")]
    RocksDb(#[from] rocksdb::Error),
}

impl BackendError {
    /// Returns true if this error signals an absent key.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::KeyNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(BackendError::KeyNotFound.is_not_found());
        assert!(!BackendError::KeyTooLarge { size: 10, max: 5 }.is_not_found());

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        assert!(!BackendError::from(io).is_not_found());
    }

    #[test]
    fn test_display() {
        let err = BackendError::ValueTooLarge { size: 70, max: 64 };
        assert_eq!(err.to_string(), "value too large: 70 > 64");
        assert_eq!(BackendError::KeyNotFound.to_string(), "key not found");
    }
}
