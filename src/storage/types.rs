// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Byte-string keys and values exchanged through [`Backend`](super::Backend).
//!
//! Size limits are write-side guards only: reads, deletes and scans accept
//! keys of any length so an absent key always reports `KeyNotFound`.

use super::error::BackendError;

/// Largest key accepted by `set` and `set_bulk`.
pub const MAX_KEY_SIZE: usize = 8 * 1024; // 8KB

/// Largest value accepted by `set` and `set_bulk`.
pub const MAX_VALUE_SIZE: usize = 64 * 1024 * 1024; // 64MB

/// Raw key bytes.
///
/// `Ord` is unsigned lexicographic byte order, identical to the engine's
/// comparator, so `BTreeMap<Key, _>` results from `get_prefix` iterate in the
/// same order `list` returns.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(pub Vec<u8>);

impl Key {
    #[inline]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrowed bytes, as handed to the engine.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Unwraps the key, e.g. to hand it to a protocol layer without copying.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if this key falls inside a prefix scan for `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }
}

impl From<&[u8]> for Key {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Key {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<Box<[u8]>> for Key {
    fn from(bytes: Box<[u8]>) -> Self {
        Self(bytes.into_vec())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Raw value bytes.
///
/// The default (empty) value is what `get_bulk` reports for absent keys; a
/// stored empty value is still distinguishable through `get`, which returns
/// [`BackendError::KeyNotFound`] only for absence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Value(pub Vec<u8>);

impl Value {
    #[inline]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for both a stored empty value and a `get_bulk` placeholder.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<Box<[u8]>> for Value {
    fn from(bytes: Box<[u8]>) -> Self {
        Self(bytes.into_vec())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl AsRef<[u8]> for Value {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Rejects keys over [`MAX_KEY_SIZE`] before they are staged for a write.
#[inline]
pub(crate) fn validate_key(key: &Key) -> Result<(), BackendError> {
    if key.len() > MAX_KEY_SIZE {
        return Err(BackendError::KeyTooLarge {
            size: key.len(),
            max: MAX_KEY_SIZE,
        });
    }
    Ok(())
}

/// Rejects values over [`MAX_VALUE_SIZE`] before they are staged for a write.
#[inline]
pub(crate) fn validate_value(value: &Value) -> Result<(), BackendError> {
    if value.len() > MAX_VALUE_SIZE {
        return Err(BackendError::ValueTooLarge {
            size: value.len(),
            max: MAX_VALUE_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_bytes() {
        let key = Key::from(b"hello".as_slice());
        assert_eq!(key.as_bytes(), b"hello");
        assert_eq!(key.len(), 5);
    }

    #[test]
    fn test_key_from_str() {
        let key = Key::from("hello");
        assert_eq!(key.as_bytes(), b"hello");
        assert!(key.starts_with(b"he"));
        assert!(!key.starts_with(b"lo"));
    }

    #[test]
    fn test_into_bytes_returns_owned_buffer() {
        let key = Key::from(vec![0x00, 0xFF]);
        assert_eq!(key.into_bytes(), vec![0x00, 0xFF]);

        let value = Value::from(String::from("payload"));
        assert_eq!(value.into_bytes(), b"payload".to_vec());
    }

    #[test]
    fn test_value_from_bytes() {
        let value = Value::from(b"world".as_slice());
        assert_eq!(value.as_bytes(), b"world");
        assert_eq!(value.len(), 5);
    }

    #[test]
    fn test_key_order_is_unsigned_bytewise() {
        // 0xFF must sort after 0x7F, and a strict prefix before its extensions
        assert!(Key::new(vec![0x7F]) < Key::new(vec![0xFF]));
        assert!(Key::from("key") < Key::from("key1"));
        assert!(Key::from("key1") < Key::from("key2"));
        assert!(Key::from("key2") < Key::from("other"));
    }

    #[test]
    fn test_validate_limits() {
        assert!(validate_key(&Key::new(vec![0u8; MAX_KEY_SIZE])).is_ok());
        assert!(matches!(
            validate_key(&Key::new(vec![0u8; MAX_KEY_SIZE + 1])),
            Err(BackendError::KeyTooLarge { .. })
        ));

        assert!(validate_value(&Value::default()).is_ok());
        assert!(matches!(
            validate_value(&Value::new(vec![0u8; MAX_VALUE_SIZE + 1])),
            Err(BackendError::ValueTooLarge { .. })
        ));
    }
}
