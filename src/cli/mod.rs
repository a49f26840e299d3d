// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the hifz command-line interface.
//!
//! Every command loads the dataset named by `--data` (or `HIFZ_DATA`) and
//! runs one query against it. `--json` switches output to serde_json so the
//! commands can back a range picker or a quiz front end.

pub mod display;

use clap::{Args, Parser, Subcommand};
use hifz::QuestionKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hifz",
    about = "Range pools and layout navigation for memorizing the text",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Verse dataset (JSON array of verses, or an object with a `verses` array)
    #[arg(short, long, global = true, env = "HIFZ_DATA", default_value = "verses.json")]
    pub data: PathBuf,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate the dataset, then print its shape
    Validate,

    /// Build the test pool for one or more ranges
    ///
    /// Ranges are `1:1-1:7` (verses), `ruku:1.1-1.3` (division.sub-section)
    /// or `juz:1-2`. Overlaps are merged and the pool is printed in text order.
    Pool {
        /// Ranges to include
        #[arg(required = true)]
        ranges: Vec<String>,

        /// Print only the number of verses
        #[arg(long)]
        count: bool,
    },

    /// Explain whether a range selects anything
    Check {
        /// Range to check
        range: String,
    },

    /// Adjacency and boundary lookups
    Nav {
        #[command(subcommand)]
        query: NavQuery,
    },

    /// Generate questions over a pool
    Quiz {
        /// Ranges to draw verses from
        #[arg(required = true)]
        ranges: Vec<String>,

        /// Question kinds to rotate through
        #[arg(long, value_delimiter = ',', default_value = "page,next-verse,ruku-end")]
        kinds: Vec<QuestionKind>,

        /// Stop after this many questions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Summarize recorded quiz attempts
    Stats {
        /// JSON array of attempts
        attempts: PathBuf,

        /// Restrict the summary to these ranges
        #[arg(long)]
        range: Vec<String>,

        /// Number of weakest verses to list
        #[arg(long, default_value = "10")]
        weakest: usize,
    },
}

#[derive(Subcommand)]
pub enum NavQuery {
    /// The verse after KEY
    Next { key: String },
    /// The verse before KEY
    Prev { key: String },
    /// First verse of PAGE
    PageStart { page: u32 },
    /// Last verse of PAGE
    PageEnd { page: u32 },
    /// First verse of sub-section ID (global numbering)
    RukuStart { id: u32 },
    /// Last verse of sub-section ID (global numbering)
    RukuEnd { id: u32 },
    /// Nearest sub-section boundary from KEY
    Boundary {
        key: String,

        /// Search toward the start of the text
        #[arg(long)]
        backward: bool,
    },
}
