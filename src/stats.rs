// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Accuracy aggregation over recorded quiz attempts.
//!
//! Storage of attempts is someone else's job; this only folds a list of them
//! into per-verse and per-kind counts.

use crate::quiz::QuestionKind;
use crate::types::Verse;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub verse_key: String,
    pub kind: QuestionKind,
    pub correct: bool,
}

/// Correct answers out of attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accuracy {
    pub attempts: u32,
    pub correct: u32,
}

impl Accuracy {
    pub fn record(&mut self, correct: bool) {
        self.attempts += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Fraction correct, or `None` before the first attempt.
    pub fn ratio(&self) -> Option<f64> {
        (self.attempts > 0).then(|| f64::from(self.correct) / f64::from(self.attempts))
    }

    fn merge(&mut self, other: Accuracy) {
        self.attempts += other.attempts;
        self.correct += other.correct;
    }
}

/// Attempts folded by verse and by question kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccuracyTable {
    pub overall: Accuracy,
    pub by_verse: BTreeMap<String, Accuracy>,
    pub by_kind: BTreeMap<QuestionKind, Accuracy>,
}

impl AccuracyTable {
    pub fn from_attempts<'a>(attempts: impl IntoIterator<Item = &'a Attempt>) -> Self {
        let mut table = AccuracyTable::default();
        for attempt in attempts {
            table.record(attempt);
        }
        table
    }

    pub fn record(&mut self, attempt: &Attempt) {
        self.overall.record(attempt.correct);
        self.by_verse
            .entry(attempt.verse_key.clone())
            .or_default()
            .record(attempt.correct);
        self.by_kind
            .entry(attempt.kind)
            .or_default()
            .record(attempt.correct);
    }

    /// Combined accuracy over the verses of a pool.
    pub fn for_pool(&self, pool: &[&Verse]) -> Accuracy {
        let mut total = Accuracy::default();
        for verse in pool {
            if let Some(acc) = self.by_verse.get(&verse.verse_key) {
                total.merge(*acc);
            }
        }
        total
    }

    /// The `n` attempted verses with the lowest accuracy.
    ///
    /// Ties go to the verse with more attempts,
    /// then to key order.
    pub fn weakest(&self, n: usize) -> Vec<(&str, Accuracy)> {
        let mut rows: Vec<(&str, Accuracy)> = self
            .by_verse
            .iter()
            .map(|(key, acc)| (key.as_str(), *acc))
            .collect();
        rows.sort_by(|(ka, a), (kb, b)| {
            let ra = a.ratio().unwrap_or(0.0);
            let rb = b.ratio().unwrap_or(0.0);
            ra.total_cmp(&rb)
                .then(b.attempts.cmp(&a.attempts))
                .then(ka.cmp(kb))
        });
        rows.truncate(n);
        rows
    }
}
