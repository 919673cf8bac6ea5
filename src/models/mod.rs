//! Data models for chat history logs and their summaries.
//!
//! - [`Record`] and friends describe one parsed JSONL line (input side)
//! - [`EntrySummary`] and friends are the bounded-size projection (output side)
//! - [`Report`] is the top-level value printed by the driver
//!
//! Input models decode leniently through the helpers in
//! `parsers::deserializers`: a wrong-typed field is treated as absent.

pub mod record;
pub mod report;
pub mod summary;

pub use record::{
    ContentPart, Message, RawContentPart, Record, Request, Role, TOOL_PART_PREFIX, TextPart,
    ToolInvocationPart,
};
pub use report::{DirectoryListing, FileReport, PATH_NOT_FOUND, ParseError, PathNotFound, Report};
pub use summary::{
    EntrySummary, FlattenedToolCall, InputMessageSummary, ModelMessageSummary, RequestSummary,
    ToolCallSummary,
};
