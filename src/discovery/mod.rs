//! Discovery of candidate chat history files
//!
//! Directory inputs are never summarized, only listed. Direct `.jsonl` children
//! take precedence; a recursive search runs only when there are none.

pub mod jsonl_files;

pub use jsonl_files::list_jsonl_files;
