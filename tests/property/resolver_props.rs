//! Resolver properties over random layouts.

use crate::common::{descriptor_strategy, layout_strategy, orders};
use hifz::{diagnose, resolve, RangeDescriptor, SubSectionRef};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a non-empty run is every verse between its two ends.
    #[test]
    fn prop_runs_are_contiguous(
        layout in layout_strategy(),
        descriptor in descriptor_strategy(),
    ) {
        let index = layout.index();
        let run = resolve(&index, &descriptor);
        if let (Some(first), Some(last)) = (run.first(), run.last()) {
            let between = index.range_by_order(first.global_order, last.global_order);
            prop_assert_eq!(orders(run), orders(between));
        }
    }

    /// Property: `diagnose` finds an issue exactly when the run is empty.
    #[test]
    fn prop_diagnose_agrees_with_resolve(
        layout in layout_strategy(),
        descriptor in descriptor_strategy(),
    ) {
        let index = layout.index();
        prop_assert_eq!(diagnose(&index, &descriptor).is_none(), descriptor.is_valid(&index));
        prop_assert_eq!(descriptor.is_valid(&index), !resolve(&index, &descriptor).is_empty());
    }

    /// Property: a division spelled three ways selects the same verses.
    ///
    /// As a division span, as a verse span from its first to its last key,
    /// and as a sub-section span from its first to its last sub-section.
    #[test]
    fn prop_division_equivalent_spans(layout in layout_strategy()) {
        let index = layout.index();
        for division in 1..=index.division_count() as u8 {
            let run = resolve(&index, &RangeDescriptor::division_span(division, division));
            prop_assert!(!run.is_empty());
            let (first, last) = (&run[0], &run[run.len() - 1]);

            let by_verse = resolve(
                &index,
                &RangeDescriptor::verse_span(first.reference(), last.reference()),
            );
            prop_assert_eq!(orders(by_verse), orders(run));

            let last_sub = run.iter().map(|v| v.sub_section_in_division).max().unwrap_or(1);
            let by_sub = resolve(
                &index,
                &RangeDescriptor::sub_section_span(
                    SubSectionRef::new(division, 1),
                    SubSectionRef::new(division, last_sub),
                ),
            );
            prop_assert_eq!(orders(by_sub), orders(run));
        }
    }
}
