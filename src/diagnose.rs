// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Explaining why a range selects nothing.
//!
//! The resolvers deliberately say only "empty". The range picker still wants
//! to tell the learner *what* is wrong with what they typed, so this module
//! re-derives the reason from the same lookups. It never disagrees with the
//! resolvers: `diagnose` returns `None` exactly when `resolve` is non-empty.

use crate::index::VerseIndex;
use crate::resolve::resolve;
use crate::types::{RangeDescriptor, SubSectionRef, VerseRef, MAX_DIVISION};
use thiserror::Error;

/// A human-readable reason a range is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeIssue {
    #[error("verse {0} does not exist")]
    UnknownVerse(VerseRef),
    #[error("sub-section {0} does not exist")]
    UnknownSubSection(SubSectionRef),
    #[error("juz {0} is outside 1..={MAX_DIVISION}")]
    DivisionOutOfRange(u8),
    #[error("juz {0} has no verses in this dataset")]
    EmptyDivision(u8),
    #[error("range start {start} comes after its end {end}")]
    Inverted { start: String, end: String },
}

/// Why `descriptor` resolves to nothing, or `None` if it selects verses.
pub fn diagnose(index: &VerseIndex, descriptor: &RangeDescriptor) -> Option<RangeIssue> {
    if resolve(index, descriptor).is_empty() {
        Some(explain_empty(index, descriptor))
    } else {
        None
    }
}

/// The reason for a descriptor already known to resolve to nothing.
///
/// Callers that have the resolution in hand use this to skip resolving
/// twice. The answer is meaningless for a descriptor that selects verses.
pub fn explain_empty(index: &VerseIndex, descriptor: &RangeDescriptor) -> RangeIssue {
    match *descriptor {
        RangeDescriptor::VerseSpan { start, end } => {
            if index.find_by_key(&start.key()).is_none() {
                RangeIssue::UnknownVerse(start)
            } else if index.find_by_key(&end.key()).is_none() {
                RangeIssue::UnknownVerse(end)
            } else {
                inverted(start, end)
            }
        }
        RangeDescriptor::SubSectionSpan { start, end } => {
            let exists = |r: SubSectionRef| index.iter().any(|v| v.sub_section_ref() == r);
            if !exists(start) {
                RangeIssue::UnknownSubSection(start)
            } else if !exists(end) {
                RangeIssue::UnknownSubSection(end)
            } else {
                inverted(start, end)
            }
        }
        RangeDescriptor::DivisionSpan { start, end } => {
            if let Some(bad) = [start, end]
                .into_iter()
                .find(|&d| d == 0 || d > MAX_DIVISION)
            {
                RangeIssue::DivisionOutOfRange(bad)
            } else if start > end {
                inverted(start, end)
            } else {
                RangeIssue::EmptyDivision(start)
            }
        }
    }
}

fn inverted(start: impl ToString, end: impl ToString) -> RangeIssue {
    RangeIssue::Inverted {
        start: start.to_string(),
        end: end.to_string(),
    }
}
