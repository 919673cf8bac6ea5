use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

const JSONL_EXTENSION: &str = "jsonl";

fn has_jsonl_extension(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(JSONL_EXTENSION))
}

/// List candidate `.jsonl` files under `dir`
///
/// Files directly inside `dir` win. Only when there are none does the search
/// recurse into subdirectories; the two listings are never merged. Results are
/// sorted by path.
///
/// # Errors
///
/// Returns an error if `dir` itself cannot be read. Unreadable entries found
/// during the recursive search are logged and skipped.
pub fn list_jsonl_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let direct = list_direct_children(dir)?;
    if !direct.is_empty() {
        debug!("Found {} JSONL files directly in {}", direct.len(), dir.display());
        return Ok(direct);
    }

    let nested = list_recursive(dir);
    debug!("Found {} JSONL files below {}", nested.len(), dir.display());
    Ok(nested)
}

fn list_direct_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if path.is_file() && has_jsonl_extension(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn list_recursive(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1) {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && has_jsonl_extension(path) {
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
            }
        }
    }

    files.sort();
    files
}
