//! Range queries and test pools for memorizing the layout of the text.
//!
//! A learner picks ranges (verse spans, ruku spans, juz spans), the crate
//! resolves them against an immutable verse index into one canonical pool,
//! and answers adjacency and boundary questions ("what follows 2:5", "where
//! does this ruku end") against the same index.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  index.rs    │────▶│ resolve.rs  │
//! │ (Verse,     │     │ (VerseIndex, │     │ (verse/ruku/│
//! │  Range-     │     │  runs, keys) │     │  juz spans) │
//! │  Descriptor)│     └──────────────┘     └─────────────┘
//! └─────────────┘            │                    │
//!                            ▼                    ▼
//!                   ┌──────────────┐     ┌─────────────┐
//!                   │navigation.rs │     │  pool.rs    │
//!                   │ (next/prev,  │     │ (dedup +    │
//!                   │  boundaries) │     │  ordering)  │
//!                   └──────────────┘     └─────────────┘
//!                            │                    │
//!                            ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                         │
//! │  (validate_verses at load, debug contracts on       │
//! │   resolver runs and pools)                          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! `quiz`, `stats`, `diagnose` and `dataset` sit on top and are what the CLI
//! drives. None of the core modules log or return errors: an impossible range
//! is an empty slice, an absent neighbour is `None`.
//!
//! # Usage
//!
//! ```ignore
//! use hifz::{build_pool, load_index, Direction};
//!
//! let index = load_index("verses.json")?;
//! let pool = build_pool(&index, &["juz:1".parse()?, "2:1-2:20".parse()?]);
//!
//! let verse = index.find_by_key("2:5").unwrap();
//! let end = index.nearest_sub_section_boundary(verse, Direction::Forward);
//! ```

// Module declarations
pub mod dataset;
pub mod diagnose;
mod index;
mod navigation;
mod pool;
pub mod quiz;
mod resolve;
pub mod stats;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use dataset::{load_index, parse_index, LoadError};
pub use diagnose::{diagnose, explain_empty, RangeIssue};
pub use index::VerseIndex;
pub use pool::{build_pool, PoolBuilder, TestPool};
pub use quiz::{ask, plan, Answer, Question, QuestionKind, UnknownQuestionKind};
pub use resolve::{resolve, resolve_division_span, resolve_sub_section_span, resolve_verse_span};
pub use stats::{Accuracy, AccuracyTable, Attempt};
pub use types::{
    Direction, ParseRangeError, RangeDescriptor, SubSectionRef, Verse, VerseRef, MAX_DIVISION,
};
pub use verify::{validate_verses, InvariantError};
