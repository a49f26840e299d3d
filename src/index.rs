// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verse index: an immutable, ordered view of the whole text.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **ORDERED**: `verses` ascends strictly by `global_order`.
//! 2. **RUNS**: page, sub-section and division are non-decreasing, so each is
//!    a contiguous slice findable with `partition_point`.
//! 3. **KEYED**: `by_key` maps every `verse_key` to its position.
//!
//! `VerseIndex::new` validates the collection, so every accessor can rely on
//! these without re-checking. Lookups by key are a hash probe; everything
//! else is a binary search over the ordered slice.

use crate::types::Verse;
use crate::verify::{validate_verses, InvariantError};
use std::collections::HashMap;

/// The loaded text, ordered by `global_order`. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct VerseIndex {
    verses: Vec<Verse>,
    by_key: HashMap<String, usize>,
}

impl VerseIndex {
    /// Build an index over an ordered verse collection.
    ///
    /// Fails if the collection is empty or breaks any ordering or flag
    /// invariant; see `verify::validate_verses`.
    pub fn new(verses: Vec<Verse>) -> Result<Self, InvariantError> {
        validate_verses(&verses)?;
        let by_key = verses
            .iter()
            .enumerate()
            .map(|(i, v)| (v.verse_key.clone(), i))
            .collect();
        Ok(VerseIndex { verses, by_key })
    }

    // =========================================================================
    // LOOKUPS
    // =========================================================================

    /// The verse with this composite key, e.g. `"2:255"`.
    pub fn find_by_key(&self, key: &str) -> Option<&Verse> {
        self.by_key.get(key).map(|&i| &self.verses[i])
    }

    /// The verse with exactly this `global_order`.
    pub fn find_by_order(&self, order: u32) -> Option<&Verse> {
        self.position_of_order(order).map(|i| &self.verses[i])
    }

    /// Every verse matching `predicate`, in index order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&Verse>
    where
        P: FnMut(&Verse) -> bool,
    {
        self.verses.iter().filter(|v| predicate(v)).collect()
    }

    /// Position of `order` in the ordered slice.
    pub(crate) fn position_of_order(&self, order: u32) -> Option<usize> {
        self.verses
            .binary_search_by_key(&order, |v| v.global_order)
            .ok()
    }

    /// Position of a verse belonging to this index.
    ///
    /// Matches on `global_order` and key together, so a verse from another
    /// index that happens to share an order is not mistaken for one of ours.
    pub(crate) fn position_of(&self, verse: &Verse) -> Option<usize> {
        self.position_of_order(verse.global_order)
            .filter(|&i| self.verses[i].verse_key == verse.verse_key)
    }

    /// The verse at a slice position.
    pub(crate) fn at(&self, position: usize) -> Option<&Verse> {
        self.verses.get(position)
    }

    // =========================================================================
    // RUNS
    // =========================================================================

    /// Every verse with `global_order` in `[lo, hi]`. Empty when `lo > hi`.
    pub fn range_by_order(&self, lo: u32, hi: u32) -> &[Verse] {
        if lo > hi {
            return &[];
        }
        let start = self.verses.partition_point(|v| v.global_order < lo);
        let end = self.verses.partition_point(|v| v.global_order <= hi);
        &self.verses[start..end]
    }

    /// Every verse on `page`.
    pub fn page_run(&self, page: u32) -> &[Verse] {
        let start = self.verses.partition_point(|v| v.page < page);
        let end = self.verses.partition_point(|v| v.page <= page);
        &self.verses[start..end]
    }

    /// Every verse of sub-section `id` (global numbering).
    pub fn sub_section_run(&self, id: u32) -> &[Verse] {
        let start = self.verses.partition_point(|v| v.sub_section_global < id);
        let end = self.verses.partition_point(|v| v.sub_section_global <= id);
        &self.verses[start..end]
    }

    /// Every verse whose `major_division` lies in `[lo, hi]`. Empty when `lo > hi`.
    pub fn division_run(&self, lo: u8, hi: u8) -> &[Verse] {
        if lo > hi {
            return &[];
        }
        let start = self.verses.partition_point(|v| v.major_division < lo);
        let end = self.verses.partition_point(|v| v.major_division <= hi);
        &self.verses[start..end]
    }

    // =========================================================================
    // WHOLE-INDEX ACCESS
    // =========================================================================

    /// The verse with the smallest `global_order`.
    pub fn first(&self) -> &Verse {
        &self.verses[0]
    }

    /// The verse with the largest `global_order`.
    pub fn last(&self) -> &Verse {
        &self.verses[self.verses.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Always false: construction rejects empty collections.
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Verse> {
        self.verses.iter()
    }

    pub fn as_slice(&self) -> &[Verse] {
        &self.verses
    }

    /// Number of distinct pages.
    pub fn page_count(&self) -> usize {
        self.verses.iter().filter(|v| v.is_page_start).count()
    }

    /// Number of distinct sub-sections.
    pub fn sub_section_count(&self) -> usize {
        self.verses.iter().filter(|v| v.is_sub_section_start).count()
    }

    /// Number of distinct major divisions.
    pub fn division_count(&self) -> usize {
        let mut count = 0;
        let mut previous = None;
        for verse in &self.verses {
            if previous != Some(verse.major_division) {
                count += 1;
                previous = Some(verse.major_division);
            }
        }
        count
    }
}

impl<'a> IntoIterator for &'a VerseIndex {
    type Item = &'a Verse;
    type IntoIter = std::slice::Iter<'a, Verse>;

    fn into_iter(self) -> Self::IntoIter {
        self.verses.iter()
    }
}
