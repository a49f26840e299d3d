// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for dataset loading.
//!
//! Arbitrary bytes as a dataset. Anything accepted must satisfy every index
//! invariant; anything else must be an error, never a panic.

#![no_main]

use hifz::{parse_index, validate_verses};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(index) = parse_index(json) {
        assert!(validate_verses(index.as_slice()).is_ok());
        assert!(!index.is_empty());
    }
});
