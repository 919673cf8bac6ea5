//! Report builder for chat history summarization.
//!
//! # Error Handling Strategy
//!
//! - **Missing input**: Reported as a [`Report::NotFound`] value rather than an
//!   error, so the driver can print it like any other report and exit non-zero.
//! - **Line-level errors**: Collected into [`FileReport::errors`]; partial
//!   success is still success.
//! - **I/O errors**: Unreadable files or directories are propagated via
//!   `anyhow::Result` and abort the run immediately. Nothing is retried.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::discovery::list_jsonl_files;
use crate::models::{DirectoryListing, EntrySummary, FileReport, Report};
use crate::parsers::parse_jsonl_file;
use crate::summarizer::summarize_entry;

/// Summarize every record of a single JSONL file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read. Malformed lines are
/// not errors; they are listed in the report.
pub fn summarize_file(path: &Path, max_chars: usize) -> Result<FileReport> {
    let parsed = parse_jsonl_file(path)?;

    let entries: Vec<EntrySummary> =
        parsed.records.iter().map(|record| summarize_entry(record, max_chars)).collect();

    info!(
        "Summarized {}: {} entries, {} parse errors",
        path.display(),
        entries.len(),
        parsed.errors.len()
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        line_count: parsed.line_count(),
        entry_count: parsed.records.len(),
        errors: parsed.errors,
        entries,
    })
}

/// List the JSONL files under a directory without summarizing them
pub fn list_directory(path: &Path) -> Result<DirectoryListing> {
    let jsonl_files = list_jsonl_files(path)?;
    Ok(DirectoryListing { path: path.to_path_buf(), is_directory: true, jsonl_files })
}

/// Build the report for `path`: a file summary, a directory listing, or not-found
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use chat_history_summarizer::build_report;
///
/// let report = build_report(Path::new("logs/chat-history.jsonl"), 2000)?;
/// println!("{}", serde_json::to_string_pretty(&report)?);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_report(path: &Path, max_chars: usize) -> Result<Report> {
    if !path.exists() {
        return Ok(Report::not_found(PathBuf::from(path)));
    }

    if path.is_dir() {
        return list_directory(path).map(Report::Directory);
    }

    summarize_file(path, max_chars).map(Report::File)
}
