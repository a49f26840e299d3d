// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared fuzzer input: a small layout described by raw bytes.

use arbitrary::Arbitrary;
use hifz::testing::Layout;

/// Chapter lengths and boundary positions, all reduced into range by
/// `into_layout`. Zero-length chapters are dropped.
#[derive(Debug, Arbitrary)]
pub struct LayoutInput {
    pub chapters: Vec<u8>,
    pub pages: Vec<u16>,
    pub sub_sections: Vec<u16>,
    pub divisions: Vec<u16>,
    pub order_step: u8,
}

impl LayoutInput {
    /// `None` when the input describes no verses.
    pub fn into_layout(self) -> Option<Layout> {
        let chapters: Vec<u16> = self
            .chapters
            .iter()
            .take(12)
            .filter(|&&c| c > 0)
            .map(|&c| u16::from(c))
            .collect();
        if chapters.is_empty() {
            return None;
        }
        let total: u32 = chapters.iter().map(|&c| u32::from(c)).sum();
        let scale = |starts: &[u16]| -> Vec<u32> {
            starts.iter().map(|&s| u32::from(s) % total + 1).collect()
        };
        Some(
            Layout::uniform(&chapters, total, total, 1)
                .with_pages(&scale(&self.pages))
                .with_sub_sections(&scale(&self.sub_sections))
                .with_divisions(&scale(&self.divisions))
                .with_order_step(u32::from(self.order_step % 8) + 1),
        )
    }
}
