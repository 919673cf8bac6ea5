//! Chat History Summarizer - Bounded-size summaries of chat history logs
//!
//! This library turns JSONL chat history logs (one conversation record per line)
//! into compact, structured summaries. It supports:
//!
//! - Parsing JSONL logs line by line, collecting malformed lines instead of failing
//! - Compacting arbitrary JSON values against a character budget
//! - Summarizing request and model messages, including tool-call correlation
//! - Listing candidate `.jsonl` files under a directory
//!
//! # Example
//!
//! ```no_run
//! use chat_history_summarizer::summarize_file;
//! use std::path::PathBuf;
//!
//! let path = PathBuf::from("/var/log/chat/history.jsonl");
//! let report = summarize_file(&path, 2000)?;
//! println!("Summarized {} entries", report.entry_count);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod discovery;
pub mod models;
pub mod parsers;
pub mod report;
pub mod summarizer;
pub mod utils;

// Re-export commonly used types
pub use discovery::list_jsonl_files;
pub use models::{EntrySummary, Record, Report};
pub use parsers::parse_jsonl_file;
pub use report::{build_report, summarize_file};
pub use summarizer::{Compacted, compact, summarize_entry};
pub use utils::expand_tilde;
