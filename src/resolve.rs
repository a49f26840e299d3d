// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Range resolution: turning a descriptor into a run of verses.
//!
//! Three strategies, one per descriptor kind. Each returns a contiguous slice
//! of the index in ascending `global_order`, or an empty slice. There is no
//! error path. Unknown endpoints and inverted spans both mean "no match",
//! because a half-typed range in the picker is a normal state, not a fault.
//!
//! | Resolver                  | Endpoints                     | Result                     |
//! |---------------------------|-------------------------------|----------------------------|
//! | `resolve_verse_span`      | two verse keys                | `[start, end]` by order    |
//! | `resolve_sub_section_span`| two (division, sub) pairs     | first of start .. last of end |
//! | `resolve_division_span`   | two division numbers          | every verse in the divisions |
//!
//! A sub-section span covers every sub-section between its endpoints, not
//! just the two named ones: it is a contiguous stretch of the text.

use crate::index::VerseIndex;
use crate::types::{RangeDescriptor, SubSectionRef, Verse, VerseRef};
use crate::verify::contracts::check_run_contiguous;

/// Resolve any descriptor by dispatching on its kind.
pub fn resolve<'a>(index: &'a VerseIndex, descriptor: &RangeDescriptor) -> &'a [Verse] {
    let run = match *descriptor {
        RangeDescriptor::VerseSpan { start, end } => resolve_verse_span(index, start, end),
        RangeDescriptor::SubSectionSpan { start, end } => {
            resolve_sub_section_span(index, start, end)
        }
        RangeDescriptor::DivisionSpan { start, end } => resolve_division_span(index, start, end),
    };
    check_run_contiguous(run);
    run
}

/// Every verse from `start` to `end` inclusive.
///
/// Empty if either key is unknown or `start` comes after `end`.
pub fn resolve_verse_span(index: &VerseIndex, start: VerseRef, end: VerseRef) -> &[Verse] {
    let (Some(first), Some(last)) = (
        index.find_by_key(&start.key()),
        index.find_by_key(&end.key()),
    ) else {
        return &[];
    };
    index.range_by_order(first.global_order, last.global_order)
}

/// Every verse from the first verse of `start` to the last verse of `end`.
///
/// Each endpoint is the set of verses sharing its (division, sub-section)
/// pair. Empty if either set is empty or the span is inverted.
pub fn resolve_sub_section_span(
    index: &VerseIndex,
    start: SubSectionRef,
    end: SubSectionRef,
) -> &[Verse] {
    let lo = index
        .iter()
        .filter(|v| v.sub_section_ref() == start)
        .map(|v| v.global_order)
        .min();
    let hi = index
        .iter()
        .filter(|v| v.sub_section_ref() == end)
        .map(|v| v.global_order)
        .max();

    match (lo, hi) {
        (Some(lo), Some(hi)) => index.range_by_order(lo, hi),
        _ => &[],
    }
}

/// Every verse whose division lies in `[start, end]`. Empty if `start > end`.
pub fn resolve_division_span(index: &VerseIndex, start: u8, end: u8) -> &[Verse] {
    index.division_run(start, end)
}

impl RangeDescriptor {
    /// Whether this descriptor selects at least one verse.
    ///
    /// The range picker uses this to reject a range before it is added.
    pub fn is_valid(&self, index: &VerseIndex) -> bool {
        !resolve(index, self).is_empty()
    }
}
