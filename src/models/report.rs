use std::path::PathBuf;

use serde::Serialize;

use super::summary::EntrySummary;

/// Error code emitted when the input path does not exist
pub const PATH_NOT_FOUND: &str = "path_not_found";

/// A line that could not be parsed as a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    /// 1-based, blank lines included
    pub line: usize,
    pub error: String,
    /// First characters of the offending (trimmed) line
    pub preview: String,
}

/// Summary of a single JSONL file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    /// Parsed records plus parse errors; blank lines are not counted
    pub line_count: usize,
    pub entry_count: usize,
    pub errors: Vec<ParseError>,
    pub entries: Vec<EntrySummary>,
}

/// Candidate files found under a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryListing {
    pub path: PathBuf,
    pub is_directory: bool,
    pub jsonl_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathNotFound {
    pub error: &'static str,
    pub path: PathBuf,
}

/// Everything the driver can print
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    File(FileReport),
    Directory(DirectoryListing),
    NotFound(PathNotFound),
}

impl Report {
    pub fn not_found(path: PathBuf) -> Self {
        Report::NotFound(PathNotFound { error: PATH_NOT_FOUND, path })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Report::NotFound(_))
    }
}
