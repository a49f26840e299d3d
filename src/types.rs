// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the range engine.
//!
//! A `Verse` is one record of the text with its structural metadata. A
//! `RangeDescriptor` is what a learner types into the range picker. Everything
//! else in the crate is a function from these two to a slice of verses.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **global_order**: strictly increasing across the collection. Every range
//!   and adjacency query is defined in terms of it, never in terms of keys.
//!
//! - **page / sub_section_global / major_division**: non-decreasing with
//!   `global_order`, so each page, sub-section and division is a contiguous
//!   run. Binary search over the verse slice depends on this.
//!
//! - **Flags**: `is_sub_section_start`, `is_page_start` and `is_page_end` mark
//!   exactly the first/last verse of their run.
//!
//! `verify::validate_verses` checks all of these before an index is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Highest major division number (the text has thirty juz).
pub const MAX_DIVISION: u8 = 30;

// =============================================================================
// VERSE
// =============================================================================

/// One verse of the text plus where it sits in the printed layout.
///
/// Field names follow the dataset; the aliases accept the common
/// surah/ayah/juz naming used by published layout files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Composite identifier, `"<major>:<minor>"`.
    pub verse_key: String,
    #[serde(alias = "surah")]
    pub major: u16,
    #[serde(alias = "ayah")]
    pub minor: u16,
    #[serde(alias = "text", default)]
    pub display_text: String,
    pub page: u32,
    #[serde(alias = "lines", default)]
    pub line_numbers: Vec<u32>,
    pub global_order: u32,
    #[serde(alias = "juz")]
    pub major_division: u8,
    pub sub_section_global: u32,
    pub sub_section_in_division: u32,
    #[serde(default)]
    pub is_sub_section_start: bool,
    #[serde(default)]
    pub is_page_start: bool,
    #[serde(default)]
    pub is_page_end: bool,
}

impl Verse {
    /// The `(major, minor)` pair as a typed reference.
    #[inline]
    pub fn reference(&self) -> VerseRef {
        VerseRef::new(self.major, self.minor)
    }

    /// The `(division, sub_in_division)` pair this verse belongs to.
    #[inline]
    pub fn sub_section_ref(&self) -> SubSectionRef {
        SubSectionRef::new(self.major_division, self.sub_section_in_division)
    }
}

// =============================================================================
// REFERENCES
// =============================================================================

/// A verse addressed by chapter and verse-within-chapter.
///
/// Displays and parses as `"2:255"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VerseRef {
    pub major: u16,
    pub minor: u16,
}

impl VerseRef {
    pub fn new(major: u16, minor: u16) -> Self {
        VerseRef { major, minor }
    }

    /// The dataset key for this reference.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.major, self.minor)
    }
}

impl FromStr for VerseRef {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| ParseRangeError::Malformed(s.to_string()))?;
        Ok(VerseRef {
            major: parse_number(major, s)?,
            minor: parse_number(minor, s)?,
        })
    }
}

/// A sub-section addressed by its division and its ordinal inside it.
///
/// Displays and parses as `"3.2"` (second sub-section of division 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubSectionRef {
    pub division: u8,
    pub sub_section: u32,
}

impl SubSectionRef {
    pub fn new(division: u8, sub_section: u32) -> Self {
        SubSectionRef {
            division,
            sub_section,
        }
    }
}

impl fmt::Display for SubSectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.division, self.sub_section)
    }
}

impl FromStr for SubSectionRef {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (division, sub_section) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| ParseRangeError::Malformed(s.to_string()))?;
        Ok(SubSectionRef {
            division: parse_number(division, s)?,
            sub_section: parse_number(sub_section, s)?,
        })
    }
}

// =============================================================================
// RANGE DESCRIPTORS
// =============================================================================

/// A range the learner wants to be tested on.
///
/// Serialized with an explicit `kind` tag so saved range lists stay readable:
///
/// ```json
/// { "kind": "verse_span", "start": { "major": 1, "minor": 1 }, "end": { "major": 1, "minor": 7 } }
/// { "kind": "division_span", "start": 1, "end": 2 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeDescriptor {
    VerseSpan { start: VerseRef, end: VerseRef },
    SubSectionSpan { start: SubSectionRef, end: SubSectionRef },
    DivisionSpan { start: u8, end: u8 },
}

impl RangeDescriptor {
    pub fn verse_span(start: VerseRef, end: VerseRef) -> Self {
        RangeDescriptor::VerseSpan { start, end }
    }

    pub fn sub_section_span(start: SubSectionRef, end: SubSectionRef) -> Self {
        RangeDescriptor::SubSectionSpan { start, end }
    }

    pub fn division_span(start: u8, end: u8) -> Self {
        RangeDescriptor::DivisionSpan { start, end }
    }

    /// Short label for the variant, used in CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            RangeDescriptor::VerseSpan { .. } => "verse",
            RangeDescriptor::SubSectionSpan { .. } => "ruku",
            RangeDescriptor::DivisionSpan { .. } => "juz",
        }
    }
}

impl fmt::Display for RangeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeDescriptor::VerseSpan { start, end } => write!(f, "verse:{}-{}", start, end),
            RangeDescriptor::SubSectionSpan { start, end } => {
                write!(f, "ruku:{}-{}", start, end)
            }
            RangeDescriptor::DivisionSpan { start, end } => write!(f, "juz:{}-{}", start, end),
        }
    }
}

/// Parses the compact range syntax used on the command line.
///
/// | Input              | Descriptor              |
/// |--------------------|-------------------------|
/// | `1:1-1:7`          | verse span              |
/// | `verse:2:1-2:5`    | verse span              |
/// | `ruku:1.1-1.3`     | sub-section span        |
/// | `juz:1-2`, `juz:5` | division span           |
/// | `2:255`            | single-verse span       |
impl FromStr for RangeDescriptor {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("juz:") {
            let (start, end) = split_span(rest);
            return Ok(RangeDescriptor::DivisionSpan {
                start: parse_number(start, s)?,
                end: parse_number(end, s)?,
            });
        }
        if let Some(rest) = s.strip_prefix("ruku:") {
            let (start, end) = split_span(rest);
            return Ok(RangeDescriptor::SubSectionSpan {
                start: start.parse()?,
                end: end.parse()?,
            });
        }

        let rest = s.strip_prefix("verse:").unwrap_or(s);
        if !rest.contains(':') {
            return Err(ParseRangeError::Malformed(s.to_string()));
        }
        let (start, end) = split_span(rest);
        Ok(RangeDescriptor::VerseSpan {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

/// Which way to look for a sub-section boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

// =============================================================================
// PARSE ERRORS
// =============================================================================

/// Failure to parse a range or reference from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRangeError {
    #[error("malformed range '{0}'")]
    Malformed(String),
    #[error("'{value}' is not a number in '{input}'")]
    InvalidNumber { value: String, input: String },
}

/// Split `"a-b"` into `("a", "b")`; a single value is a span of one.
fn split_span(s: &str) -> (&str, &str) {
    match s.split_once('-') {
        Some((start, end)) => (start, end),
        None => (s, s),
    }
}

fn parse_number<T: FromStr>(value: &str, input: &str) -> Result<T, ParseRangeError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseRangeError::InvalidNumber {
            value: value.trim().to_string(),
            input: input.to_string(),
        })
}
