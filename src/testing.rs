//! Test utilities shared across unit tests, integration tests, fuzz targets
//! and benches.
//!
//! This module is always compiled but hidden from documentation.
//! `Layout` describes where pages, sub-sections and divisions begin and
//! generates a verse collection that satisfies every index invariant.

#![doc(hidden)]

use crate::index::VerseIndex;
use crate::types::{Verse, MAX_DIVISION};

/// Verses per chapter of the full text (114 chapters, 6,236 verses).
pub const CHAPTER_LENGTHS: [u16; 114] = [
    7, 286, 200, 176, 120, 165, 206, 75, 129, 109, 123, 111, 43, 52, 99, 128, 111, 110, 98, 135,
    112, 78, 118, 64, 77, 227, 93, 88, 69, 60, 34, 30, 73, 54, 45, 83, 182, 88, 75, 85, 54, 53,
    89, 59, 37, 35, 38, 29, 18, 45, 60, 49, 62, 55, 78, 96, 29, 22, 24, 13, 14, 11, 11, 18, 12,
    12, 30, 52, 52, 44, 28, 28, 20, 56, 40, 31, 50, 40, 46, 42, 29, 19, 36, 25, 22, 17, 19, 26,
    30, 20, 15, 21, 11, 8, 8, 19, 5, 8, 8, 11, 11, 8, 3, 9, 5, 4, 7, 3, 6, 3, 5, 4, 5, 6,
];

/// A synthetic text layout.
///
/// Boundaries are 1-based positions in the text. Position 1 always starts a
/// page, a sub-section and a division whether or not it is listed; positions
/// past the end are ignored. Every division start is also a sub-section start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub chapter_lengths: Vec<u16>,
    pub page_starts: Vec<u32>,
    pub sub_section_starts: Vec<u32>,
    pub division_starts: Vec<u32>,
    /// Distance between consecutive `global_order` values.
    pub order_step: u32,
}

impl Layout {
    /// One chapter of `len` verses on one page, one sub-section, one division.
    pub fn single_chapter(len: u16) -> Self {
        Layout {
            chapter_lengths: vec![len],
            page_starts: vec![1],
            sub_section_starts: vec![1],
            division_starts: vec![1],
            order_step: 1,
        }
    }

    /// Fixed-size pages and sub-sections, a fixed number of sub-sections per
    /// division (capped at thirty divisions).
    pub fn uniform(
        chapter_lengths: &[u16],
        verses_per_page: u32,
        verses_per_sub_section: u32,
        sub_sections_per_division: usize,
    ) -> Self {
        let total: u32 = chapter_lengths.iter().map(|&l| u32::from(l)).sum();
        let sub_section_starts: Vec<u32> =
            (1..=total).step_by(verses_per_sub_section.max(1) as usize).collect();
        let division_starts = sub_section_starts
            .iter()
            .copied()
            .step_by(sub_sections_per_division.max(1))
            .take(MAX_DIVISION as usize)
            .collect();
        Layout {
            chapter_lengths: chapter_lengths.to_vec(),
            page_starts: (1..=total).step_by(verses_per_page.max(1) as usize).collect(),
            sub_section_starts,
            division_starts,
            order_step: 1,
        }
    }

    /// A layout the size of the full text.
    pub fn full_text() -> Self {
        Layout::uniform(&CHAPTER_LENGTHS, 11, 11, 19)
    }

    pub fn with_pages(mut self, starts: &[u32]) -> Self {
        self.page_starts = starts.to_vec();
        self
    }

    pub fn with_sub_sections(mut self, starts: &[u32]) -> Self {
        self.sub_section_starts = starts.to_vec();
        self
    }

    pub fn with_divisions(mut self, starts: &[u32]) -> Self {
        self.division_starts = starts.to_vec();
        self
    }

    pub fn with_order_step(mut self, step: u32) -> Self {
        self.order_step = step.max(1);
        self
    }

    /// Total number of verses.
    pub fn len(&self) -> u32 {
        self.chapter_lengths.iter().map(|&l| u32::from(l)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `global_order` of the verse at 1-based `position`.
    pub fn order_at(&self, position: u32) -> u32 {
        1 + (position - 1) * self.order_step
    }

    /// Generate the verse collection.
    pub fn build(&self) -> Vec<Verse> {
        let total = self.len();
        let pages = normalize_starts(&self.page_starts, total);
        let mut divisions = normalize_starts(&self.division_starts, total);
        divisions.truncate(MAX_DIVISION as usize);
        let mut all_subs = self.sub_section_starts.clone();
        all_subs.extend_from_slice(&divisions);
        let subs = normalize_starts(&all_subs, total);

        let mut verses = Vec::with_capacity(total as usize);
        let mut position = 0u32;
        for (chapter, &len) in self.chapter_lengths.iter().enumerate() {
            let major = chapter as u16 + 1;
            for minor in 1..=len {
                position += 1;
                let page = pages.partition_point(|&s| s <= position);
                let sub_section = subs.partition_point(|&s| s <= position) as u32;
                let division = divisions.partition_point(|&s| s <= position);
                let first_sub_of_division =
                    subs.partition_point(|&s| s <= divisions[division - 1]) as u32;

                verses.push(Verse {
                    verse_key: format!("{}:{}", major, minor),
                    major,
                    minor,
                    display_text: format!("verse {}:{}", major, minor),
                    page: page as u32,
                    line_numbers: vec![position - pages[page - 1] + 1],
                    global_order: self.order_at(position),
                    major_division: division as u8,
                    sub_section_global: sub_section,
                    sub_section_in_division: sub_section - first_sub_of_division + 1,
                    is_sub_section_start: subs.binary_search(&position).is_ok(),
                    is_page_start: pages.binary_search(&position).is_ok(),
                    is_page_end: position == total || pages.binary_search(&(position + 1)).is_ok(),
                });
            }
        }
        verses
    }

    /// Generate the verses and build an index over them.
    ///
    /// # Panics
    /// Panics if the layout has no verses.
    pub fn index(&self) -> VerseIndex {
        VerseIndex::new(self.build()).expect("generated layouts satisfy every index invariant")
    }
}

/// Sort, dedup, clamp to `1..=total`, and make sure position 1 is present.
fn normalize_starts(starts: &[u32], total: u32) -> Vec<u32> {
    let mut out: Vec<u32> = starts
        .iter()
        .copied()
        .filter(|s| (1..=total).contains(s))
        .collect();
    out.push(1);
    out.sort_unstable();
    out.dedup();
    out
}
