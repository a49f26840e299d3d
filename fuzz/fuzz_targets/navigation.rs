// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for adjacency and boundary lookups.
//!
//! Every lookup must return a verse of the same index, never panic, and the
//! two ways of finding a sub-section's last verse (anchor on the successor's
//! start, or take the highest order) must agree.

#![no_main]

use hifz::Direction;
use libfuzzer_sys::fuzz_target;

#[path = "layout_input.rs"]
mod layout_input;
use layout_input::LayoutInput;

fuzz_target!(|input: LayoutInput| {
    let Some(layout) = input.into_layout() else {
        return;
    };
    let index = layout.index();

    for verse in &index {
        if let Some(next) = index.next(verse) {
            assert_eq!(index.prev(next), Some(verse));
        }

        let forward = index.nearest_sub_section_boundary(verse, Direction::Forward);
        assert!(forward.global_order >= verse.global_order);
        assert_eq!(forward.sub_section_global, verse.sub_section_global);

        let backward = index.nearest_sub_section_boundary(verse, Direction::Backward);
        assert!(backward.global_order <= verse.global_order);
        assert!(backward.is_sub_section_start);
    }

    for id in 0..=index.sub_section_count() as u32 + 1 {
        let run = index.sub_section_run(id);
        assert_eq!(index.last_of_sub_section(id), run.last());
    }
    for page in 0..=index.page_count() as u32 + 1 {
        let run = index.page_run(page);
        assert_eq!(index.first_of_page(page), run.first());
        assert_eq!(index.last_of_page(page), run.last());
    }
});
