//! Shared test utilities and fixtures.

#![allow(dead_code)]

use hifz::testing::Layout;
use hifz::{RangeDescriptor, TestPool, Verse, VerseIndex};
use proptest::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;

// Re-export canonical test utilities from hifz::testing
pub use hifz::testing::CHAPTER_LENGTHS;

// ============================================================================
// FIXTURES
// ============================================================================

/// Three chapters (7 + 20 + 13 = 40 verses), pages of 8, sub-sections of 5,
/// two sub-sections per division: 5 pages, 8 sub-sections, 4 divisions.
pub fn small_layout() -> Layout {
    Layout::uniform(&[7, 20, 13], 8, 5, 2)
}

pub fn small_index() -> VerseIndex {
    small_layout().index()
}

/// The first three chapters of the real text, 493 verses.
pub fn opening_chapters() -> VerseIndex {
    Layout::uniform(&CHAPTER_LENGTHS[..3], 15, 12, 8).index()
}

/// Write `verses` to a JSON file in a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn write_dataset(verses: &[Verse]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("verses.json");
    std::fs::write(&path, serde_json::to_string(verses).expect("serialize")).expect("write");
    (dir, path)
}

pub fn parse(range: &str) -> RangeDescriptor {
    range
        .parse()
        .unwrap_or_else(|e| panic!("bad range {}: {}", range, e))
}

pub fn keys<'a>(pool: &[&'a Verse]) -> Vec<&'a str> {
    pool.iter().map(|v| v.verse_key.as_str()).collect()
}

pub fn orders(verses: &[Verse]) -> Vec<u32> {
    verses.iter().map(|v| v.global_order).collect()
}

/// Strictly ascending by order and every key once.
pub fn assert_pool_canonical(pool: &TestPool<'_>) {
    for pair in pool.windows(2) {
        assert!(
            pair[0].global_order < pair[1].global_order,
            "pool out of order at {} -> {}",
            pair[0].verse_key,
            pair[1].verse_key
        );
    }
    let unique: HashSet<&str> = pool.iter().map(|v| v.verse_key.as_str()).collect();
    assert_eq!(unique.len(), pool.len(), "pool has duplicate keys");
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Layouts of 1-4 chapters with random page, sub-section and division
/// boundaries and a random `global_order` step.
pub fn layout_strategy() -> impl Strategy<Value = Layout> {
    (prop::collection::vec(1u16..25, 1..5), 1u32..4).prop_flat_map(|(chapters, step)| {
        let total: u32 = chapters.iter().map(|&c| u32::from(c)).sum();
        (
            prop::collection::vec(1..=total, 0..8),
            prop::collection::vec(1..=total, 0..12),
            prop::collection::vec(1..=total, 0..4),
        )
            .prop_map(move |(pages, subs, divisions)| Layout {
                chapter_lengths: chapters.clone(),
                page_starts: pages,
                sub_section_starts: subs,
                division_starts: divisions,
                order_step: step,
            })
    })
}

/// A descriptor of any kind, biased toward references that exist in a
/// layout of up to four chapters but free to miss.
pub fn descriptor_strategy() -> impl Strategy<Value = RangeDescriptor> {
    let verse = (1u16..6, 0u16..28).prop_map(|(a, b)| hifz::VerseRef::new(a, b));
    let sub = (0u8..6, 0u32..10).prop_map(|(d, s)| hifz::SubSectionRef::new(d, s));
    prop_oneof![
        (verse.clone(), verse).prop_map(|(s, e)| RangeDescriptor::verse_span(s, e)),
        (sub.clone(), sub).prop_map(|(s, e)| RangeDescriptor::sub_section_span(s, e)),
        (0u8..8, 0u8..8).prop_map(|(s, e)| RangeDescriptor::division_span(s, e)),
    ]
}

/// A layout together with a list of descriptors to run against it.
pub fn workload_strategy() -> impl Strategy<Value = (Layout, Vec<RangeDescriptor>)> {
    (
        layout_strategy(),
        prop::collection::vec(descriptor_strategy(), 0..6),
    )
}
