// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test pool construction: many ranges in, one canonical verse list out.
//!
//! Learners pick overlapping ranges all the time ("juz 1" plus "al-Fatiha"
//! plus "2:1-2:20"). A verse must appear at most once in the pool no matter
//! how many ranges cover it, and the pool must read in text order no matter
//! what order the ranges were picked in.
//!
//! `PoolBuilder` accumulates resolved runs into a set keyed by `verse_key`
//! and sorts once on the way out. Because every field of a verse is fixed by
//! its key, the set union is all there is to merging.
//!
//! **Invariant**: the pool is strictly ascending by `global_order`, each key
//! at most once. Checked by `verify::contracts::check_pool_canonical`.

use crate::index::VerseIndex;
use crate::resolve::resolve;
use crate::types::{RangeDescriptor, Verse};
use crate::verify::contracts::check_pool_canonical;
use std::collections::HashMap;

/// A deduplicated, canonically ordered selection of verses.
pub type TestPool<'a> = Vec<&'a Verse>;

/// Build the pool for a list of descriptors.
///
/// Idempotent: the same descriptors in any order, with any repeats, give the
/// same pool. An empty list gives an empty pool.
pub fn build_pool<'a>(index: &'a VerseIndex, descriptors: &[RangeDescriptor]) -> TestPool<'a> {
    let mut builder = PoolBuilder::new(index);
    builder.add_all(descriptors);
    builder.into_sorted()
}

/// Incremental pool construction.
///
/// # Example
///
/// ```ignore
/// let mut builder = PoolBuilder::new(&index);
/// builder.add(&"juz:1".parse()?);
/// builder.add(&"1:1-1:7".parse()?);
/// let pool = builder.into_sorted();
/// ```
pub struct PoolBuilder<'a> {
    index: &'a VerseIndex,
    /// Keyed by `verse_key` only; nothing else identifies a verse.
    map: HashMap<&'a str, &'a Verse>,
}

impl<'a> PoolBuilder<'a> {
    pub fn new(index: &'a VerseIndex) -> Self {
        Self {
            index,
            map: HashMap::new(),
        }
    }

    /// Resolve one descriptor and merge its verses.
    ///
    /// Returns how many verses the descriptor resolved to (before dedup), so
    /// callers can flag a range that selected nothing.
    pub fn add(&mut self, descriptor: &RangeDescriptor) -> usize {
        let run = resolve(self.index, descriptor);
        self.map.reserve(run.len());
        for verse in run {
            self.map.insert(verse.verse_key.as_str(), verse);
        }
        run.len()
    }

    /// Merge every descriptor in turn.
    pub fn add_all<'d>(&mut self, descriptors: impl IntoIterator<Item = &'d RangeDescriptor>) {
        for descriptor in descriptors {
            self.add(descriptor);
        }
    }

    /// Distinct verses merged so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether a verse key is already in the pool.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Finish: every merged verse, ascending by `global_order`.
    pub fn into_sorted(self) -> TestPool<'a> {
        let mut pool: TestPool<'a> = self.map.into_values().collect();
        pool.sort_unstable_by_key(|v| v.global_order);
        check_pool_canonical(&pool);
        pool
    }
}
