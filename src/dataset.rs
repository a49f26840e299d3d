// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a verse dataset from JSON.
//!
//! Two payload shapes are accepted: a bare array of verses, or an object with
//! a `verses` array (the shape exported by the layout tooling, which also
//! carries a few metadata fields we ignore). Verses are sorted by
//! `global_order` before validation, so exporters don't need to care about
//! array order; everything else must already be consistent.

use crate::index::VerseIndex;
use crate::types::Verse;
use crate::verify::InvariantError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a dataset could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset violates index invariants: {0}")]
    Invariant(#[from] InvariantError),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Bare(Vec<Verse>),
    Wrapped { verses: Vec<Verse> },
}

/// Read, validate and index a dataset file.
pub fn load_index(path: impl AsRef<Path>) -> Result<VerseIndex, LoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let index = parse_index(&raw)?;
    tracing::debug!(
        path = %path.display(),
        verses = index.len(),
        pages = index.page_count(),
        sub_sections = index.sub_section_count(),
        "loaded verse dataset"
    );
    Ok(index)
}

/// Validate and index an in-memory JSON payload.
pub fn parse_index(json: &str) -> Result<VerseIndex, LoadError> {
    let mut verses = match serde_json::from_str(json)? {
        Payload::Bare(verses) | Payload::Wrapped { verses } => verses,
    };
    verses.sort_by_key(|v| v.global_order);
    Ok(VerseIndex::new(verses)?)
}

/// Serialize verses in the bare-array shape `parse_index` reads back.
pub fn to_json(verses: &[Verse]) -> Result<String, LoadError> {
    Ok(serde_json::to_string(verses)?)
}
