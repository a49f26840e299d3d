// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for resolver and pool output.
//!
//! Debug-mode assertions that hold the range engine to its ordering rules:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** in tests and fuzzing
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                          |
//! |----------------------------|---------------------------------------------------|
//! | `check_run_contiguous`     | Resolver output is a gap-free run of the index    |
//! | `check_pool_canonical`     | Pool is strictly ascending, one entry per key     |

use crate::types::Verse;
use std::collections::HashSet;

// ============================================================================
// RESOLVER CONTRACTS
// ============================================================================

/// Check that a resolver returned an ascending run of the index.
///
/// Resolvers slice the ordered verse array, so consecutive entries must
/// ascend. An inverted slice would mean a bound was computed the wrong way.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_run_contiguous(run: &[Verse]) {
    for i in 1..run.len() {
        debug_assert!(
            run[i - 1].global_order < run[i].global_order,
            "Contract violation: resolver run not ascending at {} ({} >= {})",
            i,
            run[i - 1].global_order,
            run[i].global_order
        );
    }
}

// ============================================================================
// POOL CONTRACTS
// ============================================================================

/// Check that a pool is in canonical form.
///
/// Strictly ascending `global_order` with no repeated `verse_key`.
///
/// # Panics (debug builds only)
/// Panics on the first out-of-order pair or duplicate key.
#[inline]
pub fn check_pool_canonical(pool: &[&Verse]) {
    for i in 1..pool.len() {
        debug_assert!(
            pool[i - 1].global_order < pool[i].global_order,
            "Contract violation: pool not strictly ascending at {} ({} >= {})",
            i,
            pool[i - 1].global_order,
            pool[i].global_order
        );
    }

    if cfg!(debug_assertions) {
        let mut seen = HashSet::with_capacity(pool.len());
        for verse in pool {
            debug_assert!(
                seen.insert(verse.verse_key.as_str()),
                "Contract violation: pool contains '{}' twice",
                verse.verse_key
            );
        }
    }
}
