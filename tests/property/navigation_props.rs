//! Navigation properties: adjacency follows `global_order` one step at a
//! time, boundaries land on the edges of sub-sections, and both ends of every
//! page are found.

use crate::common::layout_strategy;
use hifz::testing::Layout;
use hifz::Direction;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: `next` and `prev` are exactly the verses one order away.
    #[test]
    fn prop_adjacency_is_one_order_step(layout in layout_strategy()) {
        let index = layout.index();
        for verse in &index {
            prop_assert_eq!(index.next(verse), index.find_by_order(verse.global_order + 1));
            prop_assert_eq!(
                index.prev(verse),
                verse.global_order.checked_sub(1).and_then(|o| index.find_by_order(o))
            );
            if let Some(next) = index.next(verse) {
                prop_assert_eq!(index.prev(next), Some(verse));
            }
        }
    }

    /// Property: with gap-free numbering `next` walks the whole index.
    #[test]
    fn prop_next_walks_a_dense_index(layout in layout_strategy()) {
        let index = Layout { order_step: 1, ..layout }.index();
        let mut current = index.first();
        let mut walked = 1;
        while let Some(next) = index.next(current) {
            prop_assert_eq!(index.prev(next), Some(current));
            current = next;
            walked += 1;
        }
        prop_assert_eq!(walked, index.len());
        prop_assert!(std::ptr::eq(current, index.last()));
    }

    /// Property: the last verse of every sub-section is its highest-ordered
    /// member, terminal sub-section included.
    #[test]
    fn prop_last_of_sub_section_is_max(layout in layout_strategy()) {
        let index = layout.index();
        let count = index.sub_section_count() as u32;
        for id in 1..=count {
            let run = index.sub_section_run(id);
            prop_assert_eq!(index.last_of_sub_section(id), run.last());
            prop_assert_eq!(index.first_of_sub_section(id), run.first());
        }
        prop_assert!(index.last_of_sub_section(count + 1).is_none());
    }

    /// Property: forward boundary is the end of the verse's own sub-section.
    #[test]
    fn prop_forward_boundary(layout in layout_strategy()) {
        let index = layout.index();
        let verses = index.as_slice();
        for verse in verses {
            let boundary = index.nearest_sub_section_boundary(verse, Direction::Forward);
            prop_assert!(boundary.global_order >= verse.global_order);
            prop_assert_eq!(boundary.sub_section_global, verse.sub_section_global);
            let after = verses.partition_point(|v| v.global_order <= boundary.global_order);
            prop_assert!(verses.get(after).map_or(true, |n| n.is_sub_section_start));
        }
    }

    /// Property: backward boundary is the closest start strictly before the
    /// verse, and only the first verse maps to itself.
    #[test]
    fn prop_backward_boundary(layout in layout_strategy()) {
        let index = layout.index();
        for verse in &index {
            let boundary = index.nearest_sub_section_boundary(verse, Direction::Backward);
            if std::ptr::eq(verse, index.first()) {
                prop_assert!(std::ptr::eq(boundary, index.first()));
                continue;
            }
            prop_assert!(boundary.is_sub_section_start);
            prop_assert!(boundary.global_order < verse.global_order);
            let skipped = index
                .range_by_order(boundary.global_order + 1, verse.global_order - 1)
                .iter()
                .any(|v| v.is_sub_section_start);
            prop_assert!(!skipped);
        }
    }

    /// Property: each page's flagged ends bracket exactly its run.
    #[test]
    fn prop_page_ends(layout in layout_strategy()) {
        let index = layout.index();
        for page in 1..=index.page_count() as u32 {
            let run = index.page_run(page);
            prop_assert_eq!(index.first_of_page(page), run.first());
            prop_assert_eq!(index.last_of_page(page), run.last());
        }
    }
}
