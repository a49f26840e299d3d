// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: load-time invariant checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Load-time validation** (`validate_verses`) that refuses a verse
//!    collection whose ordering or boundary flags are inconsistent. Every
//!    binary search in the index assumes these hold, so a bad dataset is
//!    rejected once instead of producing subtly wrong ranges forever.
//!
//! 2. **Runtime contracts** that panic in debug builds when a resolver or the
//!    pool builder produces output out of canonical order. Zero-cost in
//!    release, but catch algorithmic errors when tests run.

mod types;
pub mod contracts;

pub use types::*;
