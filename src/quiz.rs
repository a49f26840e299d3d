// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Question generation on top of the pool and navigation queries.
//!
//! A question is a prompt verse, a kind, and the one correct answer derived
//! from the index. Nothing here is random: `plan` walks the pool and rotates
//! through the requested kinds, so the same pool and kinds always produce the
//! same quiz. Shuffling, if wanted, belongs to the caller.

use crate::index::VerseIndex;
use crate::types::{Direction, Verse, VerseRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What the learner is asked about a verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Which page is the verse on?
    Page,
    /// Which verse follows it?
    NextVerse,
    /// Which verse precedes it?
    PreviousVerse,
    /// Which verse opens its page?
    PageStart,
    /// Which verse closes its page?
    PageEnd,
    /// Which verse opens its sub-section?
    #[serde(rename = "ruku-start")]
    SubSectionStart,
    /// Reciting onward, which verse ends its sub-section?
    #[serde(rename = "ruku-end")]
    SubSectionEnd,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 7] = [
        QuestionKind::Page,
        QuestionKind::NextVerse,
        QuestionKind::PreviousVerse,
        QuestionKind::PageStart,
        QuestionKind::PageEnd,
        QuestionKind::SubSectionStart,
        QuestionKind::SubSectionEnd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Page => "page",
            QuestionKind::NextVerse => "next-verse",
            QuestionKind::PreviousVerse => "previous-verse",
            QuestionKind::PageStart => "page-start",
            QuestionKind::PageEnd => "page-end",
            QuestionKind::SubSectionStart => "ruku-start",
            QuestionKind::SubSectionEnd => "ruku-end",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question kind name that matches none of [`QuestionKind::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown question kind '{0}'")]
pub struct UnknownQuestionKind(pub String);

impl FromStr for QuestionKind {
    type Err = UnknownQuestionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| UnknownQuestionKind(s.to_string()))
    }
}

/// The expected response to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Page(u32),
    Verse(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Page(page) => write!(f, "page {}", page),
            Answer::Verse(key) => f.write_str(key),
        }
    }
}

/// One generated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub kind: QuestionKind,
    /// Key of the verse the question is about.
    pub prompt: String,
    pub answer: Answer,
}

impl Question {
    /// Whether `answer` is correct.
    pub fn check(&self, answer: &Answer) -> bool {
        self.answer == *answer
    }

    /// Score a typed response: a page number, or a verse key such as `2:5`.
    ///
    /// Unparseable input is simply wrong.
    pub fn check_response(&self, response: &str) -> bool {
        match &self.answer {
            Answer::Page(page) => response.trim().parse::<u32>().ok() == Some(*page),
            Answer::Verse(key) => response
                .parse::<VerseRef>()
                .is_ok_and(|r| r.key() == *key),
        }
    }

    /// The question as shown to the learner.
    pub fn prompt_text(&self) -> String {
        let p = &self.prompt;
        match self.kind {
            QuestionKind::Page => format!("Which page is {} on?", p),
            QuestionKind::NextVerse => format!("Which verse comes after {}?", p),
            QuestionKind::PreviousVerse => format!("Which verse comes before {}?", p),
            QuestionKind::PageStart => format!("Which verse starts the page {} is on?", p),
            QuestionKind::PageEnd => format!("Which verse ends the page {} is on?", p),
            QuestionKind::SubSectionStart => format!("Where does the ruku containing {} begin?", p),
            QuestionKind::SubSectionEnd => {
                format!("Reciting on from {}, which verse ends the ruku?", p)
            }
        }
    }
}

/// Build a question of `kind` about `verse`.
///
/// `None` when there is no answer (the verse after the last verse) or the
/// answer is the prompt verse itself, which would give the question away.
pub fn ask(index: &VerseIndex, verse: &Verse, kind: QuestionKind) -> Option<Question> {
    let target = match kind {
        QuestionKind::Page => {
            return Some(Question {
                kind,
                prompt: verse.verse_key.clone(),
                answer: Answer::Page(verse.page),
            });
        }
        QuestionKind::NextVerse => index.next(verse),
        QuestionKind::PreviousVerse => index.prev(verse),
        QuestionKind::PageStart => index.first_of_page(verse.page),
        QuestionKind::PageEnd => index.last_of_page(verse.page),
        QuestionKind::SubSectionStart => index.first_of_sub_section(verse.sub_section_global),
        QuestionKind::SubSectionEnd => {
            Some(index.nearest_sub_section_boundary(verse, Direction::Forward))
        }
    }?;

    if target.verse_key == verse.verse_key {
        return None;
    }
    Some(Question {
        kind,
        prompt: verse.verse_key.clone(),
        answer: Answer::Verse(target.verse_key.clone()),
    })
}

/// One question per pool verse, rotating through `kinds`.
///
/// Verse `i` starts at `kinds[i % kinds.len()]` and falls through to the next
/// kind when that one is unanswerable; a verse with no answerable kind is
/// skipped.
pub fn plan(index: &VerseIndex, pool: &[&Verse], kinds: &[QuestionKind]) -> Vec<Question> {
    if kinds.is_empty() {
        return Vec::new();
    }
    pool.iter()
        .enumerate()
        .filter_map(|(i, verse)| {
            (0..kinds.len())
                .map(|k| kinds[(i + k) % kinds.len()])
                .find_map(|kind| ask(index, verse, kind))
        })
        .collect()
}
