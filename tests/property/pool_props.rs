//! Pool properties: the pool is the set union of the resolved runs, in text
//! order, whatever the order or multiplicity of the descriptors.

use crate::common::{assert_pool_canonical, keys, workload_strategy};
use hifz::{build_pool, resolve, RangeDescriptor};
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every pool is strictly ascending with unique keys.
    #[test]
    fn prop_pool_is_canonical((layout, descriptors) in workload_strategy()) {
        let index = layout.index();
        assert_pool_canonical(&build_pool(&index, &descriptors));
    }

    /// Property: listing every descriptor twice changes nothing.
    #[test]
    fn prop_duplication_is_idempotent((layout, descriptors) in workload_strategy()) {
        let index = layout.index();
        let doubled: Vec<RangeDescriptor> =
            descriptors.iter().chain(descriptors.iter()).copied().collect();
        prop_assert_eq!(build_pool(&index, &doubled), build_pool(&index, &descriptors));
    }

    /// Property: descriptor order does not affect the pool.
    #[test]
    fn prop_order_independent((layout, descriptors) in workload_strategy()) {
        let index = layout.index();
        let mut reversed = descriptors.clone();
        reversed.reverse();
        prop_assert_eq!(build_pool(&index, &reversed), build_pool(&index, &descriptors));
    }

    /// Property: pool keys are exactly the union of each descriptor's run.
    #[test]
    fn prop_pool_is_union_of_runs((layout, descriptors) in workload_strategy()) {
        let index = layout.index();
        let expected: BTreeSet<&str> = descriptors
            .iter()
            .flat_map(|d| resolve(&index, d))
            .map(|v| v.verse_key.as_str())
            .collect();
        let pool = build_pool(&index, &descriptors);
        let actual: BTreeSet<&str> = keys(&pool).into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: pooling two lists is the union of pooling each.
    #[test]
    fn prop_concatenation_is_union(
        (layout, left) in workload_strategy(),
        right in prop::collection::vec(crate::common::descriptor_strategy(), 0..4),
    ) {
        let index = layout.index();
        let both: Vec<RangeDescriptor> = left.iter().chain(right.iter()).copied().collect();
        let mut expected: Vec<u32> = build_pool(&index, &left)
            .into_iter()
            .chain(build_pool(&index, &right))
            .map(|v| v.global_order)
            .collect();
        expected.sort_unstable();
        expected.dedup();
        let actual: Vec<u32> = build_pool(&index, &both).iter().map(|v| v.global_order).collect();
        prop_assert_eq!(actual, expected);
    }
}
