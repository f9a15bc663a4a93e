//! Core CLI commands for mdlinks: scan, check, info.

use std::path::Path;
use std::process::ExitCode;

use mdlinks::config::Config;
use mdlinks::error::Error;
use mdlinks::types::{FileReport, FileResult};
use mdlinks::walker;

/// Scan a path and report unresolved reference uses and unreadable files.
///
/// # Errors
///
/// Returns config loading errors. Per-file problems are reported in the
/// output and reflected in the exit code, never raised.
pub fn check(path: &Path, json: bool) -> Result<ExitCode, Error> {
    let reports = collect_reports(path)?;

    let error_count = reports.iter().filter(|r| return r.result.error.is_some()).count();
    let unresolved_count: usize = reports.iter().map(|r| return r.unresolved.len()).sum();

    if json {
        print_reports_json(path, &reports);
        return Ok(exit_code_for(error_count, unresolved_count));
    }

    for report in &reports {
        if let Some(reason) = &report.result.error {
            println!("ERROR       {} ({reason})", report.result.file.display());
        }
        for unresolved in &report.unresolved {
            println!(
                "UNRESOLVED  {}:{}  [{}][{}]",
                report.result.file.display(),
                unresolved.line,
                unresolved.text,
                unresolved.name
            );
        }
    }

    if error_count > 0 {
        println!();
        println!("{error_count} file errors, {unresolved_count} unresolved");
    } else if unresolved_count > 0 {
        println!();
        println!("{unresolved_count} unresolved");
    } else {
        let total: usize = reports.iter().map(|r| return r.result.total_links).sum();
        println!("All {total} links resolved");
    }

    return Ok(exit_code_for(error_count, unresolved_count));
}

/// Gather per-file reports for a path: a single report for a file, or a
/// config-filtered report per markdown file for a directory.
///
/// # Errors
///
/// Returns config loading errors; per-file read failures are recovered
/// into the reports themselves.
fn collect_reports(path: &Path) -> Result<Vec<FileReport>, Error> {
    if !path.is_dir() {
        return Ok(vec![walker::report_file(path)]);
    }

    let config = Config::load(path)?;
    let mut reports = Vec::new();
    for file in walker::discover_markdown_files(path) {
        let relative = file.strip_prefix(path).unwrap_or(&file);
        if !config.should_scan(&relative.to_string_lossy()) {
            continue;
        }
        reports.push(walker::report_file(&file));
    }

    return Ok(reports);
}

/// Map per-file problem counts to the process exit code.
fn exit_code_for(error_count: usize, unresolved_count: usize) -> ExitCode {
    // Exit code priority: file errors (2) > unresolved (1) > clean (0).
    if error_count > 0 {
        return ExitCode::from(2);
    } else if unresolved_count > 0 {
        return ExitCode::from(1);
    }
    return ExitCode::SUCCESS;
}

/// Output a comprehensive reference document for mdlinks.
pub fn info(json: bool) {
    return crate::info::run(json);
}

/// Print check reports as pretty JSON: a single object for a file path, an
/// array for a directory scan.
fn print_reports_json(path: &Path, reports: &[FileReport]) {
    // serde_json::to_string_pretty won't fail on these structures.
    let payload = if path.is_dir() {
        serde_json::to_string_pretty(reports).unwrap_or_default()
    } else {
        reports
            .first()
            .map(|r| return serde_json::to_string_pretty(r).unwrap_or_default())
            .unwrap_or_default()
    };
    println!("{payload}");
    return;
}

/// Print scan results as pretty JSON: a single object for a file path, an
/// array for a directory scan.
fn print_results_json(path: &Path, results: &[FileResult]) {
    // serde_json::to_string_pretty won't fail on these structures.
    let payload = if path.is_dir() {
        serde_json::to_string_pretty(results).unwrap_or_default()
    } else {
        results
            .first()
            .map(|r| return serde_json::to_string_pretty(r).unwrap_or_default())
            .unwrap_or_default()
    };
    println!("{payload}");
    return;
}

/// List every extracted link with `file:line  text -> target` provenance.
/// Always exits 0 apart from runtime errors; `check` is the gating command.
///
/// # Errors
///
/// Returns config loading errors.
pub fn scan(path: &Path, json: bool) -> Result<ExitCode, Error> {
    let reports = collect_reports(path)?;
    let results: Vec<FileResult> = reports.into_iter().map(|r| return r.result).collect();

    if json {
        print_results_json(path, &results);
        return Ok(ExitCode::SUCCESS);
    }

    let mut total = 0_usize;
    for result in &results {
        if let Some(reason) = &result.error {
            println!("ERROR  {} ({reason})", result.file.display());
        }
        for link in &result.links {
            println!(
                "{}:{}  {} -> {}",
                result.file.display(),
                link.line,
                link.text,
                link.target
            );
        }
        total = total.saturating_add(result.total_links);
    }

    println!();
    println!("{total} links in {} files", results.len());
    return Ok(ExitCode::SUCCESS);
}
