//! JSONL parsing for chat history logs
//!
//! # Error Handling Strategy
//!
//! - **Individual line failures**: A line that is not valid JSON, or is valid JSON
//!   but not an object, becomes a [`ParseError`](crate::models::ParseError) with its
//!   1-based line number and a short preview. Parsing continues with the next line.
//!
//! - **No schema validation**: Records decode leniently. A field of the wrong type
//!   is treated as absent (see [`deserializers`]), so structurally odd records
//!   still produce a summary.
//!
//! - **Fatal failures**: Only I/O problems (missing file, unreadable stream,
//!   invalid UTF-8) are returned as `anyhow` errors.

pub mod deserializers;
pub mod jsonl;

pub use jsonl::{JsonlReader, LineOutcome, ParsedFile, parse_jsonl_file, read_jsonl};
