// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use hifz::{
    build_pool, diagnose, explain_empty, load_index, plan, resolve, Attempt, AccuracyTable, Direction,
    PoolBuilder, RangeDescriptor, Verse, VerseIndex, VerseRef,
};

mod cli;
use cli::display::{self, themed, BOLD, GRAY};
use cli::{Cli, Commands, NavQuery};

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr, filtered by `HIFZ_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("HIFZ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run one command. `Ok(false)` means the command worked but the answer is
/// a failure the shell should see (a rejected range, an empty pool).
fn run(cli: Cli) -> Result<bool> {
    let json = cli.global.json;
    let data = cli.global.data.as_path();

    match cli.command {
        Commands::Validate => run_validate(&open(data)?, data, json),
        Commands::Pool { ranges, count } => run_pool(&open(data)?, &ranges, count, json),
        Commands::Check { range } => run_check(&open(data)?, &range, json),
        Commands::Nav { query } => run_nav(&open(data)?, query, json),
        Commands::Quiz {
            ranges,
            kinds,
            limit,
        } => {
            let index = open(data)?;
            let descriptors = parse_ranges(&ranges)?;
            let pool = build_pool(&index, &descriptors);
            let mut questions = plan(&index, &pool, &kinds);
            if let Some(limit) = limit {
                questions.truncate(limit);
            }
            tracing::info!(pool = pool.len(), questions = questions.len(), "planned quiz");

            if json {
                print_json(&questions)?;
            } else {
                for (i, q) in questions.iter().enumerate() {
                    println!(
                        "{:>3}. {} {}  {}",
                        i + 1,
                        display::kind_badge(q),
                        q.prompt_text(),
                        themed(GRAY, &[], &format!("({})", q.answer))
                    );
                }
            }
            Ok(!questions.is_empty())
        }
        Commands::Stats {
            attempts,
            range,
            weakest,
        } => {
            // The dataset is only needed to scope the summary to ranges.
            let index = if range.is_empty() {
                None
            } else {
                Some(open(data)?)
            };
            run_stats(&attempts, index.as_ref(), &range, weakest, json)
        }
    }
}

fn open(path: &Path) -> Result<VerseIndex> {
    load_index(path).with_context(|| format!("loading dataset {}", path.display()))
}

fn parse_range(range: &str) -> Result<RangeDescriptor> {
    range
        .parse::<RangeDescriptor>()
        .with_context(|| format!("parsing range '{}'", range))
}

fn parse_ranges(ranges: &[String]) -> Result<Vec<RangeDescriptor>> {
    ranges.iter().map(|r| parse_range(r)).collect()
}

/// Look up a typed key such as `2:5` (surrounding spaces allowed).
fn find_verse<'a>(index: &'a VerseIndex, key: &str) -> Result<&'a Verse> {
    let reference = key
        .parse::<VerseRef>()
        .with_context(|| format!("parsing verse key '{}'", key))?;
    index
        .find_by_key(&reference.key())
        .with_context(|| format!("verse {} is not in the dataset", reference))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMANDS
// ═══════════════════════════════════════════════════════════════════════════

fn run_validate(index: &VerseIndex, path: &Path, json: bool) -> Result<bool> {
    if json {
        print_json(&json!({
            "path": path.display().to_string(),
            "verses": index.len(),
            "pages": index.page_count(),
            "sub_sections": index.sub_section_count(),
            "divisions": index.division_count(),
            "first": index.first().verse_key,
            "last": index.last().verse_key,
        }))?;
    } else {
        eprintln!("✓ {} is a valid dataset", path.display());
        println!("  verses        {}", index.len());
        println!("  pages         {}", index.page_count());
        println!("  sub-sections  {}", index.sub_section_count());
        println!("  divisions     {}", index.division_count());
        println!(
            "  span          {} .. {}",
            display::verse_key(&index.first().verse_key),
            display::verse_key(&index.last().verse_key)
        );
    }
    Ok(true)
}

fn run_pool(index: &VerseIndex, ranges: &[String], count: bool, json: bool) -> Result<bool> {
    let descriptors = parse_ranges(ranges)?;
    let mut builder = PoolBuilder::new(index);
    for (text, descriptor) in ranges.iter().zip(&descriptors) {
        if builder.add(descriptor) == 0 {
            if let Some(issue) = diagnose(index, descriptor) {
                tracing::warn!(range = %text, %issue, "range selects no verses");
            }
        }
    }
    let pool = builder.into_sorted();
    tracing::info!(ranges = ranges.len(), verses = pool.len(), "built pool");

    if count {
        if json {
            print_json(&json!({ "verses": pool.len() }))?;
        } else {
            println!("{}", pool.len());
        }
    } else if json {
        print_json(&pool)?;
    } else {
        for verse in &pool {
            println!("{}", display::verse_line(verse));
        }
    }
    Ok(!pool.is_empty())
}

fn run_check(index: &VerseIndex, range: &str, json: bool) -> Result<bool> {
    let descriptor = parse_range(range)?;
    let selected = resolve(index, &descriptor);
    let issue = selected.is_empty().then(|| explain_empty(index, &descriptor));

    if json {
        print_json(&json!({
            "range": descriptor,
            "valid": issue.is_none(),
            "verses": selected.len(),
            "first": selected.first().map(|v| &v.verse_key),
            "last": selected.last().map(|v| &v.verse_key),
            "issue": issue.as_ref().map(|i| i.to_string()),
        }))?;
    } else {
        match &issue {
            Some(issue) => println!("{}", display::issue_line(range, issue)),
            None => println!("{}", display::ok_line(range, selected.len())),
        }
    }
    Ok(issue.is_none())
}

fn run_nav(index: &VerseIndex, query: NavQuery, json: bool) -> Result<bool> {
    let answer = match query {
        NavQuery::Next { key } => index.next(find_verse(index, &key)?),
        NavQuery::Prev { key } => index.prev(find_verse(index, &key)?),
        NavQuery::PageStart { page } => index.first_of_page(page),
        NavQuery::PageEnd { page } => index.last_of_page(page),
        NavQuery::RukuStart { id } => index.first_of_sub_section(id),
        NavQuery::RukuEnd { id } => index.last_of_sub_section(id),
        NavQuery::Boundary { key, backward } => {
            let direction = if backward {
                Direction::Backward
            } else {
                Direction::Forward
            };
            Some(index.nearest_sub_section_boundary(find_verse(index, &key)?, direction))
        }
    };

    if json {
        print_json(&answer)?;
    } else {
        match answer {
            Some(verse) => println!("{}", display::verse_line(verse)),
            None => println!("{}", themed(GRAY, &[], "none")),
        }
    }
    Ok(answer.is_some())
}

fn run_stats(
    attempts_path: &Path,
    index: Option<&VerseIndex>,
    ranges: &[String],
    weakest: usize,
    json: bool,
) -> Result<bool> {
    let raw = fs::read_to_string(attempts_path)
        .with_context(|| format!("reading attempts {}", attempts_path.display()))?;
    let mut attempts: Vec<Attempt> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing attempts {}", attempts_path.display()))?;

    if let Some(index) = index {
        let pool = build_pool(index, &parse_ranges(ranges)?);
        attempts.retain(|a| pool.iter().any(|v| v.verse_key == a.verse_key));
        tracing::debug!(pool = pool.len(), attempts = attempts.len(), "scoped attempts to ranges");
    }
    let table = AccuracyTable::from_attempts(&attempts);
    let weakest_rows = table.weakest(weakest);

    if json {
        print_json(&json!({
            "overall": table.overall,
            "by_kind": table.by_kind,
            "weakest": weakest_rows
                .iter()
                .map(|(key, acc)| json!({ "verse_key": key, "attempts": acc.attempts, "correct": acc.correct }))
                .collect::<Vec<_>>(),
        }))?;
        return Ok(true);
    }

    println!(
        "{} {}  ({} of {})",
        themed(display::CYAN, &[BOLD], "overall"),
        display::accuracy(&table.overall),
        table.overall.correct,
        table.overall.attempts
    );
    for (kind, acc) in &table.by_kind {
        println!(
            "  {} {}  ({} of {})",
            display::pad_right(kind.as_str(), 15),
            display::accuracy(acc),
            acc.correct,
            acc.attempts
        );
    }
    if !weakest_rows.is_empty() {
        println!("{}", themed(display::CYAN, &[BOLD], "weakest"));
        for (key, acc) in &weakest_rows {
            println!(
                "  {} {}  ({} of {})",
                display::pad_right(&display::verse_key(key), 15),
                display::accuracy(acc),
                acc.correct,
                acc.attempts
            );
        }
    }
    Ok(true)
}
