//! Custom cargo commands for the hifz crate.
//!
//! Usage:
//!   cargo xtask verify          - Run full verification suite
//!   cargo xtask test            - Run all tests
//!   cargo xtask check           - Quick check (check + test + clippy)
//!   cargo xtask bench           - Run benchmarks
//!   cargo xtask fuzz [TARGET]   - Run fuzz targets for a short while

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["pool_building", "navigation", "range_parsing", "dataset_parsing"];

/// Seconds per fuzz target unless `FUZZ_SECONDS` says otherwise.
const DEFAULT_FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify          Run full verification suite (contracts wired + tests + clippy + fuzz smoke)
  test            Run all Rust tests
  check           Quick check (cargo check + test + clippy)
  bench           Run benchmarks
  fuzz [TARGET]   Run one fuzz target, or all of them ({})
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("hifz Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking runtime contracts are wired...");
    check_contract_calls()?;
    println!("✓ Contracts called from resolvers and pool builder\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Fuzz smoke run...");
    for target in FUZZ_TARGETS {
        run_fuzz(target, 10)?;
    }
    println!("✓ Fuzz targets survived\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "pool_bench"])
}

/// Run one target, or every target, for `FUZZ_SECONDS` each.
fn fuzz(target: Option<&str>) -> Result<()> {
    let seconds = match env::var("FUZZ_SECONDS") {
        Ok(s) => s
            .parse()
            .with_context(|| format!("FUZZ_SECONDS must be a number, got '{}'", s))?,
        Err(_) => DEFAULT_FUZZ_SECONDS,
    };

    match target {
        Some(name) if !FUZZ_TARGETS.contains(&name) => {
            bail!("unknown fuzz target '{}' (have: {})", name, FUZZ_TARGETS.join(", "))
        }
        Some(name) => run_fuzz(name, seconds),
        None => FUZZ_TARGETS.iter().try_for_each(|t| run_fuzz(t, seconds)),
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no CARGO_MANIFEST_DIR and no current dir")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn run_fuzz(target: &str, seconds: u32) -> Result<()> {
    println!("  fuzzing {} for {}s", target, seconds);
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", seconds);

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", &max_time])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

/// The debug contracts only protect anything if the resolvers and the pool
/// builder actually call them.
fn check_contract_calls() -> Result<()> {
    let root = project_root()?;

    for (file, contract) in [
        ("src/resolve.rs", "check_run_contiguous("),
        ("src/pool.rs", "check_pool_canonical("),
    ] {
        let source = std::fs::read_to_string(root.join(file))
            .with_context(|| format!("Failed to read {}", file))?;
        let calls = source
            .lines()
            .filter(|l| !l.trim_start().starts_with("use ") && l.contains(contract))
            .count();
        if calls == 0 {
            bail!(
                "{} no longer calls {}. Someone may have removed a runtime contract!",
                file,
                contract
            );
        }
    }

    Ok(())
}
