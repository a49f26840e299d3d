// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the hifz CLI.
//!
//! OneDark for dark terminals, One Light for light ones. `HIFZ_THEME` picks
//! explicitly; otherwise `COLORFGBG` is consulted, otherwise dark. `NO_COLOR`
//! and non-TTY stdout turn colour off entirely, so piped output is plain.
//!
//! # Theme detection order
//!
//! 1. `HIFZ_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use hifz::{Accuracy, Question, RangeIssue, Verse};
use std::sync::OnceLock;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("HIFZ_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", where bg 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `2:255` in bold cyan
pub fn verse_key(key: &str) -> String {
    themed(CYAN, &[BOLD], key)
}

/// One verse with its layout position:
/// `2:255     p.42  juz 3  ruku 3.1 (35)`
pub fn verse_line(verse: &Verse) -> String {
    let position = format!(
        "p.{:<4} juz {:<2} ruku {} ({})",
        verse.page,
        verse.major_division,
        verse.sub_section_ref(),
        verse.sub_section_global
    );
    format!(
        "{} {}",
        pad_right(&verse_key(&verse.verse_key), 9),
        themed(GRAY, &[], &position)
    )
}

/// Diagnostic for a rejected range
pub fn issue_line(range: &str, issue: &RangeIssue) -> String {
    format!("{} {}: {}", themed(RED, &[BOLD], "✗"), range, issue)
}

/// A range that selects verses
pub fn ok_line(range: &str, count: usize) -> String {
    format!(
        "{} {}: {} verse{}",
        themed(GREEN, &[BOLD], "✓"),
        range,
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// `[page]` style tag for a question kind
pub fn kind_badge(question: &Question) -> String {
    themed(YELLOW, &[], &format!("[{}]", question.kind))
}

/// Percentage colored by how good it is; `-` before any attempt
pub fn accuracy(acc: &Accuracy) -> String {
    let Some(ratio) = acc.ratio() else {
        return themed(GRAY, &[], "     -");
    };
    let text = format!("{:>5.1}%", ratio * 100.0);
    let color = if ratio >= 0.9 {
        GREEN
    } else if ratio >= 0.6 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[BOLD], &text)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
