// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for range resolution and pool building.
//!
//! Arbitrary layouts, arbitrary descriptors (most of them pointing at verses
//! or sub-sections that do not exist). The pool must come out strictly
//! ascending and duplicate-free, must not change when the descriptors are
//! repeated, and `diagnose` must agree with the resolver about emptiness.

#![no_main]

use arbitrary::Arbitrary;
use hifz::{build_pool, diagnose, resolve, RangeDescriptor, SubSectionRef, VerseRef};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[path = "layout_input.rs"]
mod layout_input;
use layout_input::LayoutInput;

#[derive(Debug, Arbitrary)]
enum DescriptorInput {
    Verse(u8, u8, u8, u8),
    SubSection(u8, u8, u8, u8),
    Division(u8, u8),
}

impl DescriptorInput {
    fn descriptor(&self) -> RangeDescriptor {
        match *self {
            DescriptorInput::Verse(a, b, c, d) => RangeDescriptor::verse_span(
                VerseRef::new(a.into(), b.into()),
                VerseRef::new(c.into(), d.into()),
            ),
            DescriptorInput::SubSection(a, b, c, d) => RangeDescriptor::sub_section_span(
                SubSectionRef::new(a, b.into()),
                SubSectionRef::new(c, d.into()),
            ),
            DescriptorInput::Division(a, b) => RangeDescriptor::division_span(a, b),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct PoolInput {
    layout: LayoutInput,
    descriptors: Vec<DescriptorInput>,
}

fuzz_target!(|input: PoolInput| {
    let Some(layout) = input.layout.into_layout() else {
        return;
    };
    let index = layout.index();
    let descriptors: Vec<RangeDescriptor> =
        input.descriptors.iter().take(16).map(|d| d.descriptor()).collect();

    for d in &descriptors {
        let run = resolve(&index, d);
        assert_eq!(run.is_empty(), diagnose(&index, d).is_some(), "{}", d);
        assert!(run.windows(2).all(|w| w[0].global_order < w[1].global_order));
    }

    let pool = build_pool(&index, &descriptors);
    assert!(pool.windows(2).all(|w| w[0].global_order < w[1].global_order));
    let unique: HashSet<&str> = pool.iter().map(|v| v.verse_key.as_str()).collect();
    assert_eq!(unique.len(), pool.len());

    let doubled: Vec<RangeDescriptor> = descriptors.iter().chain(&descriptors).copied().collect();
    assert_eq!(build_pool(&index, &doubled), pool);
});
