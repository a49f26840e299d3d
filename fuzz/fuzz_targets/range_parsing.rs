// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the range syntax typed into the picker.
//!
//! Any string must parse or fail cleanly, and whatever parses must print
//! back to a form that parses to the same descriptor.

#![no_main]

use hifz::RangeDescriptor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    if let Ok(descriptor) = text.parse::<RangeDescriptor>() {
        let printed = descriptor.to_string();
        assert_eq!(printed.parse::<RangeDescriptor>(), Ok(descriptor), "{}", text);
    }
});
