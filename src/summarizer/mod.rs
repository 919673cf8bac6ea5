//! Size-bounded summarization of chat history records
//!
//! Every function here is pure: the character budget is passed in explicitly
//! and no state is shared between records, so each record can be summarized
//! independently.

pub mod compactor;
pub mod entry;
pub mod text;
pub mod tool_calls;

pub use compactor::{
    Compacted, PREVIEW_KEY, TRUNCATION_MARKER, compact, compact_optional, to_compact_json,
    truncate_text,
};
pub use entry::{summarize_entry, summarize_model_message, summarize_request};
pub use text::extract_text;
pub use tool_calls::collect_tool_calls;

/// Character budget used when none is configured
pub const DEFAULT_MAX_CHARS: usize = 2000;
