//! Adjacency and boundary scenarios.

mod common;

use common::opening_chapters;
use hifz::testing::Layout;
use hifz::{Direction, Verse, VerseIndex};

fn key(verse: Option<&Verse>) -> Option<&str> {
    verse.map(|v| v.verse_key.as_str())
}

fn verse<'a>(index: &'a VerseIndex, key: &str) -> &'a Verse {
    index.find_by_key(key).unwrap()
}

// ============================================================================
// ADJACENCY
// ============================================================================

#[test]
fn neighbours_cross_chapter_boundaries() {
    let index = opening_chapters();
    assert_eq!(key(index.next(verse(&index, "1:7"))), Some("2:1"));
    assert_eq!(key(index.prev(verse(&index, "2:1"))), Some("1:7"));
    assert_eq!(key(index.prev(verse(&index, "3:1"))), Some("2:286"));
}

#[test]
fn ends_of_the_text_have_no_neighbour() {
    let index = opening_chapters();
    assert!(index.next(verse(&index, "3:200")).is_none());
    assert!(index.prev(verse(&index, "1:1")).is_none());
}

#[test]
fn neighbours_need_consecutive_global_order() {
    // orders 1, 4, 7, 10, 13: nothing sits one step away
    let index = Layout::single_chapter(5).with_order_step(3).index();
    assert!(index.next(verse(&index, "1:2")).is_none());
    assert!(index.prev(verse(&index, "1:2")).is_none());
    assert_eq!(
        key(index.last_of_sub_section(1)),
        Some("1:5"),
        "sub-section ends do not depend on adjacency"
    );
}

// ============================================================================
// PAGES AND SUB-SECTIONS
// ============================================================================

#[test]
fn page_ends() {
    let index = opening_chapters();
    assert_eq!(key(index.first_of_page(1)), Some("1:1"));
    assert_eq!(key(index.last_of_page(1)), Some("2:8"));
    assert_eq!(key(index.first_of_page(2)), Some("2:9"));
    assert_eq!(key(index.last_of_page(33)), Some("3:200"));
    assert!(index.first_of_page(34).is_none());
}

#[test]
fn sub_section_ends() {
    let index = opening_chapters();
    assert_eq!(key(index.first_of_sub_section(2)), Some("2:6"));
    assert_eq!(key(index.last_of_sub_section(1)), Some("2:5"));
    assert!(index.first_of_sub_section(43).is_none());
    assert!(index.last_of_sub_section(43).is_none());
}

#[test]
fn penultimate_to_terminal_sub_section() {
    let index = opening_chapters();
    // 41 anchors on the start of 42; 42 has no successor and falls back
    assert_eq!(key(index.last_of_sub_section(41)), Some("3:199"));
    assert_eq!(key(index.first_of_sub_section(42)), Some("3:200"));
    assert_eq!(key(index.last_of_sub_section(42)), Some("3:200"));

    let penultimate_end = index.last_of_sub_section(41).unwrap();
    assert_eq!(
        index.next(penultimate_end),
        index.first_of_sub_section(42)
    );
}

// ============================================================================
// BOUNDARIES
// ============================================================================

#[test]
fn boundary_from_the_middle_of_a_sub_section() {
    // ten verses, sub-sections starting at 1, 4 and 8
    let index = Layout::single_chapter(10)
        .with_sub_sections(&[1, 4, 8])
        .index();
    let fifth = verse(&index, "1:5");
    assert_eq!(
        index.nearest_sub_section_boundary(fifth, Direction::Forward).verse_key,
        "1:7"
    );
    assert_eq!(
        index.nearest_sub_section_boundary(fifth, Direction::Backward).verse_key,
        "1:4"
    );
}

#[test]
fn boundary_from_a_sub_section_start() {
    let index = opening_chapters();
    let start = verse(&index, "2:6");
    assert!(start.is_sub_section_start);
    // backward looks strictly before, so it skips the verse's own start
    assert_eq!(
        index.nearest_sub_section_boundary(start, Direction::Backward).verse_key,
        "1:1"
    );
    assert_eq!(
        index.nearest_sub_section_boundary(start, Direction::Forward).verse_key,
        "2:17"
    );
}

#[test]
fn boundary_falls_back_at_the_ends() {
    let index = opening_chapters();
    let last = verse(&index, "3:200");
    let first = verse(&index, "1:1");
    assert_eq!(
        index.nearest_sub_section_boundary(last, Direction::Forward),
        last
    );
    assert_eq!(
        index.nearest_sub_section_boundary(first, Direction::Backward),
        first
    );
    // inside the first sub-section nothing starts before, so the text start
    assert_eq!(
        index
            .nearest_sub_section_boundary(verse(&index, "1:4"), Direction::Backward)
            .verse_key,
        "1:1"
    );
}
