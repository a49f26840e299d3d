// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Adjacency and boundary lookups against the whole index.
//!
//! These work on the index, never on a pool: "what comes after 2:5" has one
//! answer regardless of which ranges the learner is drilling.
//!
//! Adjacency is by order: `next` is the verse numbered `global_order + 1`.
//! Where a dataset leaves gaps in the numbering, the verse before a gap has
//! no `next` and the one after it has no `prev`. Boundary lookups step
//! through the ordered index instead, so they are unaffected by gaps.
//!
//! # The terminal sub-section
//!
//! `last_of_sub_section(s)` anchors on the start of `s + 1` and steps back
//! one verse. The final sub-section has no successor to anchor on, so it
//! falls back to the highest-ordered verse carrying its id. Both paths must
//! agree wherever both are defined; see the transition test below.

use crate::index::VerseIndex;
use crate::types::{Direction, Verse};

impl VerseIndex {
    /// The verse with `global_order` one above `verse`'s.
    pub fn next(&self, verse: &Verse) -> Option<&Verse> {
        self.find_by_order(verse.global_order.checked_add(1)?)
    }

    /// The verse with `global_order` one below `verse`'s.
    pub fn prev(&self, verse: &Verse) -> Option<&Verse> {
        self.find_by_order(verse.global_order.checked_sub(1)?)
    }

    /// The entry just before `verse` in the ordered index.
    fn preceding(&self, verse: &Verse) -> Option<&Verse> {
        self.position_of(verse)?
            .checked_sub(1)
            .and_then(|i| self.at(i))
    }

    /// The verse flagged as the first on `page`.
    pub fn first_of_page(&self, page: u32) -> Option<&Verse> {
        self.page_run(page).iter().find(|v| v.is_page_start)
    }

    /// The verse flagged as the last on `page`.
    pub fn last_of_page(&self, page: u32) -> Option<&Verse> {
        self.page_run(page).iter().rev().find(|v| v.is_page_end)
    }

    /// The verse flagged as the start of sub-section `id`.
    pub fn first_of_sub_section(&self, id: u32) -> Option<&Verse> {
        self.sub_section_run(id)
            .iter()
            .find(|v| v.is_sub_section_start)
    }

    /// The last verse of sub-section `id`.
    ///
    /// The entry before the start of `id + 1` when that sub-section exists;
    /// otherwise the highest-ordered verse of `id`, or `None` if it has none.
    ///
    /// Sub-section ids are gap-free once the index is validated, so the
    /// anchor never lands in an earlier sub-section.
    pub fn last_of_sub_section(&self, id: u32) -> Option<&Verse> {
        match id.checked_add(1).and_then(|n| self.first_of_sub_section(n)) {
            Some(successor) => self.preceding(successor),
            None => self.sub_section_run(id).last(),
        }
    }

    /// The nearest sub-section boundary from `verse` in `direction`.
    ///
    /// - `Forward`: the verse just before the next sub-section start after
    ///   `verse`; the last verse of the text if no start follows.
    /// - `Backward`: the closest sub-section start strictly before `verse`;
    ///   the first verse of the text if none precedes.
    ///
    /// Always returns a verse.
    pub fn nearest_sub_section_boundary(&self, verse: &Verse, direction: Direction) -> &Verse {
        let verses = self.as_slice();
        match direction {
            Direction::Forward => {
                let after = verses.partition_point(|v| v.global_order <= verse.global_order);
                verses[after..]
                    .iter()
                    .position(|v| v.is_sub_section_start)
                    .and_then(|offset| (after + offset).checked_sub(1))
                    .and_then(|i| self.at(i))
                    .unwrap_or_else(|| self.last())
            }
            Direction::Backward => {
                let before = verses.partition_point(|v| v.global_order < verse.global_order);
                verses[..before]
                    .iter()
                    .rev()
                    .find(|v| v.is_sub_section_start)
                    .unwrap_or_else(|| self.first())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Layout;
    use crate::verify::InvariantError;

    /// Ten verses with sub-sections starting at orders 1, 4 and 8.
    fn ten() -> VerseIndex {
        Layout::single_chapter(10)
            .with_sub_sections(&[1, 4, 8])
            .with_pages(&[1, 6])
            .index()
    }

    fn order(v: Option<&Verse>) -> Option<u32> {
        v.map(|v| v.global_order)
    }

    #[test]
    fn next_and_prev_walk_the_text() {
        let index = ten();
        let fifth = index.find_by_order(5).unwrap();
        assert_eq!(order(index.next(fifth)), Some(6));
        assert_eq!(order(index.prev(fifth)), Some(4));
    }

    #[test]
    fn next_of_last_and_prev_of_first_are_none() {
        let index = ten();
        assert!(index.next(index.last()).is_none());
        assert!(index.prev(index.first()).is_none());
    }

    #[test]
    fn adjacency_stops_at_order_gaps() {
        let index = Layout::single_chapter(4).with_order_step(5).index();
        let second = index.find_by_order(6).unwrap();
        assert!(index.find_by_order(7).is_none());
        assert!(index.next(second).is_none());
        assert!(index.prev(second).is_none());
    }

    #[test]
    fn sub_section_ends_survive_order_gaps() {
        let index = Layout::single_chapter(10)
            .with_sub_sections(&[1, 4, 8])
            .with_order_step(3)
            .index();
        // positions 3 and 7 carry orders 7 and 19
        assert_eq!(order(index.last_of_sub_section(1)), Some(7));
        assert_eq!(order(index.last_of_sub_section(2)), Some(19));
        assert_eq!(index.last_of_sub_section(3), Some(index.last()));
        let fifth = index.find_by_order(13).unwrap();
        assert_eq!(
            index
                .nearest_sub_section_boundary(fifth, Direction::Forward)
                .global_order,
            19
        );
    }

    #[test]
    fn page_bounds_follow_flags() {
        let index = ten();
        assert_eq!(order(index.first_of_page(1)), Some(1));
        assert_eq!(order(index.last_of_page(1)), Some(5));
        assert_eq!(order(index.first_of_page(2)), Some(6));
        assert_eq!(order(index.last_of_page(2)), Some(10));
        assert!(index.first_of_page(3).is_none());
        assert!(index.last_of_page(0).is_none());
    }

    #[test]
    fn sub_section_bounds() {
        let index = ten();
        assert_eq!(order(index.first_of_sub_section(2)), Some(4));
        assert_eq!(order(index.last_of_sub_section(1)), Some(3));
        assert_eq!(order(index.last_of_sub_section(2)), Some(7));
        assert!(index.first_of_sub_section(4).is_none());
        assert!(index.last_of_sub_section(4).is_none());
        assert!(index.last_of_sub_section(0).is_none());
    }

    #[test]
    fn gapped_sub_section_ids_never_reach_the_index() {
        // ids {1, 3}: id 2 would otherwise anchor on the start of 3
        let mut verses = Layout::single_chapter(6).with_sub_sections(&[1, 4]).build();
        for verse in verses.iter_mut().filter(|v| v.sub_section_global == 2) {
            verse.sub_section_global = 3;
        }
        assert!(matches!(
            VerseIndex::new(verses),
            Err(InvariantError::SkippedSubSection { previous: 1, current: 3, .. })
        ));
    }

    #[test]
    fn terminal_sub_section_uses_max_order() {
        let index = ten();
        let last = index.last_of_sub_section(3).unwrap();
        let expected = index
            .filter(|v| v.sub_section_global == 3)
            .into_iter()
            .max_by_key(|v| v.global_order)
            .unwrap();
        assert_eq!(last, expected);
        assert_eq!(last.global_order, 10);
    }

    #[test]
    fn penultimate_and_terminal_paths_agree() {
        // The penultimate sub-section anchors on the terminal one's start;
        // the terminal one falls back to max order. They must meet exactly.
        let index = ten();
        let penultimate_end = index.last_of_sub_section(2).unwrap();
        let terminal_start = index.first_of_sub_section(3).unwrap();
        assert_eq!(index.next(penultimate_end), Some(terminal_start));
        assert_eq!(
            penultimate_end,
            index.sub_section_run(2).last().unwrap(),
            "anchor path and max-order path disagree for the penultimate sub-section"
        );
        assert_eq!(index.last_of_sub_section(3), Some(index.last()));
    }

    #[test]
    fn forward_boundary_stops_before_next_start() {
        let index = ten();
        let fifth = index.find_by_order(5).unwrap();
        let boundary = index.nearest_sub_section_boundary(fifth, Direction::Forward);
        assert_eq!(boundary.global_order, 7);
    }

    #[test]
    fn backward_boundary_finds_previous_start() {
        let index = ten();
        let fifth = index.find_by_order(5).unwrap();
        let boundary = index.nearest_sub_section_boundary(fifth, Direction::Backward);
        assert_eq!(boundary.global_order, 4);
    }

    #[test]
    fn backward_from_a_start_skips_itself() {
        let index = ten();
        let fourth = index.find_by_order(4).unwrap();
        let boundary = index.nearest_sub_section_boundary(fourth, Direction::Backward);
        assert_eq!(boundary.global_order, 1);
    }

    #[test]
    fn forward_from_a_sub_section_end_is_itself() {
        let index = ten();
        let third = index.find_by_order(3).unwrap();
        let boundary = index.nearest_sub_section_boundary(third, Direction::Forward);
        assert_eq!(boundary.global_order, 3);
    }

    #[test]
    fn boundaries_fall_back_to_text_ends() {
        let index = ten();
        assert_eq!(
            index.nearest_sub_section_boundary(index.first(), Direction::Backward),
            index.first()
        );
        assert_eq!(
            index.nearest_sub_section_boundary(index.last(), Direction::Forward),
            index.last()
        );
        let ninth = index.find_by_order(9).unwrap();
        assert_eq!(
            index.nearest_sub_section_boundary(ninth, Direction::Forward),
            index.last()
        );
    }
}
