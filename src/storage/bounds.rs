// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Prefix-to-range translation.
//!
//! Ordered engines iterate over byte ranges, not "starts-with" predicates.
//! A prefix `P` is translated into the half-open range `[P, U)` where `U` is
//! the smallest byte string greater than every string beginning with `P`.
//!
//! ```text
//! prefix          upper bound
//! "key"       ->  "kez"
//! [0x01 0xFF] ->  [0x02]
//! [0xFF 0xFF] ->  none (scan to end of key-space)
//! []          ->  none (every key matches)
//! ```

use std::ops::Bound;

use super::Key;

/// Computes the exclusive upper bound for a prefix scan.
///
/// Returns `None` when no finite bound exists, i.e. the prefix is empty or
/// consists only of `0xFF` bytes. The scan is then bounded only below.
pub fn prefix_upper_bound(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut end = prefix.to_vec();
    for i in (0..end.len()).rev() {
        end[i] = end[i].wrapping_add(1);
        if end[i] != 0 {
            end.truncate(i + 1);
            return Some(end);
        }
    }
    None
}

/// The half-open key range `[lower, upper)` covered by a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRange {
    lower: Vec<u8>,
    upper: Option<Vec<u8>>,
}

impl PrefixRange {
    /// Builds the range of every key beginning with `prefix`.
    pub fn new(prefix: &[u8]) -> Self {
        Self {
            lower: prefix.to_vec(),
            upper: prefix_upper_bound(prefix),
        }
    }

    /// Inclusive lower bound (the prefix itself).
    #[inline]
    pub fn lower(&self) -> &[u8] {
        &self.lower
    }

    /// Exclusive upper bound, or `None` if the range runs to the end.
    #[inline]
    pub fn upper(&self) -> Option<&[u8]> {
        self.upper.as_deref()
    }

    /// Returns true if `key` lies inside the range.
    pub fn contains(&self, key: &[u8]) -> bool {
        if key < self.lower.as_slice() {
            return false;
        }
        match &self.upper {
            Some(upper) => key < upper.as_slice(),
            None => true,
        }
    }

    /// Converts the range into bounds usable with ordered std collections.
    pub fn to_bounds(&self) -> (Bound<Key>, Bound<Key>) {
        let lower = Bound::Included(Key::new(self.lower.clone()));
        let upper = match &self.upper {
            Some(upper) => Bound::Excluded(Key::new(upper.clone())),
            None => Bound::Unbounded,
        };
        (lower, upper)
    }

    /// Splits the range into its raw bounds.
    pub fn into_parts(self) -> (Vec<u8>, Option<Vec<u8>>) {
        (self.lower, self.upper)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // A narrow alphabet around the carry boundary keeps collisions frequent.
    fn edge_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(prop::sample::select(vec![0x00u8, 0x01, 0x7F, 0xFE, 0xFF]), 0..max_len)
    }

    proptest! {
        #[test]
        fn bound_exceeds_every_extension(
            prefix in prop::collection::vec(any::<u8>(), 0..16),
            suffix in prop::collection::vec(any::<u8>(), 0..16),
        ) {
            if let Some(upper) = prefix_upper_bound(&prefix) {
                let mut key = prefix.clone();
                key.extend_from_slice(&suffix);
                prop_assert!(key < upper);
                prop_assert!(!upper.starts_with(&prefix));
            } else {
                prop_assert!(prefix.iter().all(|b| *b == 0xFF));
            }
        }

        #[test]
        fn range_matches_exactly_the_prefixed_keys(
            prefix in edge_bytes(4),
            key in edge_bytes(6),
        ) {
            let range = PrefixRange::new(&prefix);
            prop_assert_eq!(range.contains(&key), key.starts_with(&prefix));
        }

        #[test]
        fn bound_is_tight(prefix in prop::collection::vec(any::<u8>(), 1..16)) {
            prop_assume!(prefix.iter().any(|b| *b != 0xFF));
            let upper = prefix_upper_bound(&prefix).unwrap();

            // The bound is no longer than the prefix and differs only in its last byte
            prop_assert!(upper.len() <= prefix.len());
            let last = upper.len() - 1;
            prop_assert_eq!(&upper[..last], &prefix[..last]);
            prop_assert_eq!(upper[last], prefix[last] + 1);
        }
    }
}
