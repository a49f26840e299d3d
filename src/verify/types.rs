// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load-time validation of a verse collection.
//!
//! | Check                    | What's Guaranteed                           |
//! |--------------------------|---------------------------------------------|
//! | order                    | `global_order` strictly increasing           |
//! | keys                     | `verse_key` unique and equal to major:minor |
//! | monotone runs            | page, sub-section, division never decrease  |
//! | flags                    | start/end flags mark exactly the run ends   |
//! | divisions                | `major_division` in `1..=30`                |
//!
//! Monotone runs plus strictly increasing order imply that every page and
//! sub-section is contiguous, so there is no separate contiguity check.

use crate::types::{Verse, MAX_DIVISION};
use std::collections::HashSet;
use thiserror::Error;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The collection has no verses at all.
    #[error("verse collection is empty")]
    Empty,
    /// `global_order` does not strictly increase.
    #[error("global_order not strictly increasing at position {position}: {previous} then {current}")]
    UnorderedVerses {
        position: usize,
        previous: u32,
        current: u32,
    },
    /// Two verses share a key.
    #[error("duplicate verse_key '{key}'")]
    DuplicateKey { key: String },
    /// The key does not spell out the verse's own numbering.
    #[error("verse_key '{key}' does not match {major}:{minor}")]
    MalformedKey { key: String, major: u16, minor: u16 },
    /// Division outside 1..=30.
    #[error("verse '{key}' has major_division {division} outside 1..={MAX_DIVISION}")]
    DivisionOutOfRange { key: String, division: u8 },
    /// A structural field went backwards.
    #[error("{field} decreases at verse '{key}'")]
    Regression { key: String, field: &'static str },
    /// `sub_section_global` jumped past an id no verse carries.
    #[error("sub_section_global skips from {previous} to {current} at verse '{key}'")]
    SkippedSubSection {
        key: String,
        previous: u32,
        current: u32,
    },
    /// A start/end flag disagrees with the verse's position in its run.
    #[error("verse '{key}' has {flag} = {found}, expected {expected}")]
    MisplacedFlag {
        key: String,
        flag: &'static str,
        found: bool,
        expected: bool,
    },
}

/// Check every structural invariant of an ordered verse collection.
///
/// Returns the first violation found, scanning in collection order.
pub fn validate_verses(verses: &[Verse]) -> Result<(), InvariantError> {
    if verses.is_empty() {
        return Err(InvariantError::Empty);
    }

    let mut seen = HashSet::with_capacity(verses.len());
    for (i, verse) in verses.iter().enumerate() {
        if verse.verse_key != verse.reference().key() {
            return Err(InvariantError::MalformedKey {
                key: verse.verse_key.clone(),
                major: verse.major,
                minor: verse.minor,
            });
        }
        if !seen.insert(verse.verse_key.as_str()) {
            return Err(InvariantError::DuplicateKey {
                key: verse.verse_key.clone(),
            });
        }
        if verse.major_division == 0 || verse.major_division > MAX_DIVISION {
            return Err(InvariantError::DivisionOutOfRange {
                key: verse.verse_key.clone(),
                division: verse.major_division,
            });
        }

        let prev = i.checked_sub(1).map(|p| &verses[p]);
        let next = verses.get(i + 1);

        if let Some(prev) = prev {
            check_monotone(i, prev, verse)?;
            check_sub_section_step(prev, verse)?;
        }

        check_flag(
            verse,
            "is_sub_section_start",
            verse.is_sub_section_start,
            prev.map_or(true, |p| p.sub_section_global != verse.sub_section_global),
        )?;
        check_flag(
            verse,
            "is_page_start",
            verse.is_page_start,
            prev.map_or(true, |p| p.page != verse.page),
        )?;
        check_flag(
            verse,
            "is_page_end",
            verse.is_page_end,
            next.map_or(true, |n| n.page != verse.page),
        )?;
    }

    Ok(())
}

fn check_monotone(position: usize, prev: &Verse, verse: &Verse) -> Result<(), InvariantError> {
    if prev.global_order >= verse.global_order {
        return Err(InvariantError::UnorderedVerses {
            position,
            previous: prev.global_order,
            current: verse.global_order,
        });
    }

    let regressed = if verse.page < prev.page {
        Some("page")
    } else if verse.sub_section_global < prev.sub_section_global {
        Some("sub_section_global")
    } else if verse.major_division < prev.major_division {
        Some("major_division")
    } else {
        None
    };

    match regressed {
        Some(field) => Err(InvariantError::Regression {
            key: verse.verse_key.clone(),
            field,
        }),
        None => Ok(()),
    }
}

/// Sub-section ids advance by at most one between neighbours.
fn check_sub_section_step(prev: &Verse, verse: &Verse) -> Result<(), InvariantError> {
    if verse.sub_section_global > prev.sub_section_global.saturating_add(1) {
        return Err(InvariantError::SkippedSubSection {
            key: verse.verse_key.clone(),
            previous: prev.sub_section_global,
            current: verse.sub_section_global,
        });
    }
    Ok(())
}

fn check_flag(
    verse: &Verse,
    flag: &'static str,
    found: bool,
    expected: bool,
) -> Result<(), InvariantError> {
    if found == expected {
        Ok(())
    } else {
        Err(InvariantError::MisplacedFlag {
            key: verse.verse_key.clone(),
            flag,
            found,
            expected,
        })
    }
}
