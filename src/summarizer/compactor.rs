//! Bounded value compaction.
//!
//! [`compact`] keeps a value verbatim when it fits the character budget and
//! otherwise swaps it for something bounded: strings are truncated, structured
//! values become a [`Compacted::Preview`] holding a truncated serialization.
//!
//! Lengths are counted in `char`s, so truncation never splits a code point.
//!
//! Compaction is not idempotent on previews. Feeding
//! [`Compacted::into_value`] of a preview back into [`compact`] measures the
//! wrapper object itself and may wrap it a second time.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Appended to any string that was cut short
pub const TRUNCATION_MARKER: &str = "...(truncated)";

/// Key of the single-entry object a preview serializes to
pub const PREVIEW_KEY: &str = "_preview";

/// Result of compacting a value against a character budget
#[derive(Debug, Clone, PartialEq)]
pub enum Compacted {
    /// The source value was missing or null
    Absent,
    /// A string, truncated if it was over budget
    Text(String),
    /// A structured value whose serialization fit the budget, unchanged
    Intact(Value),
    /// Truncated serialization of an oversized structured value
    Preview(String),
}

impl Compacted {
    pub fn is_preview(&self) -> bool {
        matches!(self, Compacted::Preview(_))
    }

    /// Preview text when this is a preview substitute
    pub fn preview(&self) -> Option<&str> {
        match self {
            Compacted::Preview(preview) => Some(preview),
            _ => None,
        }
    }

    /// JSON form as it appears in the report
    pub fn into_value(self) -> Value {
        match self {
            Compacted::Absent => Value::Null,
            Compacted::Text(text) => Value::String(text),
            Compacted::Intact(value) => value,
            Compacted::Preview(preview) => {
                let mut wrapper = Map::new();
                wrapper.insert(PREVIEW_KEY.to_string(), Value::String(preview));
                Value::Object(wrapper)
            }
        }
    }
}

impl Serialize for Compacted {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Compacted::Absent => serializer.serialize_none(),
            Compacted::Text(text) => serializer.serialize_str(text),
            Compacted::Intact(value) => value.serialize(serializer),
            Compacted::Preview(preview) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(PREVIEW_KEY, preview)?;
                map.end()
            }
        }
    }
}

/// Truncate `text` to `limit` characters, appending [`TRUNCATION_MARKER`] if cut
pub fn truncate_text(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        None => text.to_string(),
        Some((byte_offset, _)) => {
            let mut truncated = String::with_capacity(byte_offset + TRUNCATION_MARKER.len());
            truncated.push_str(&text[..byte_offset]);
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
    }
}

/// Compact JSON serialization with a best-effort `Debug` fallback
///
/// serde_json leaves non-ASCII characters unescaped. Map keys come out in a
/// stable order for any given input.
pub fn to_compact_json<T>(value: &T) -> String
where
    T: Serialize + fmt::Debug + ?Sized,
{
    serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
}

/// Compact `value` against a budget of `limit` characters
pub fn compact(value: &Value, limit: usize) -> Compacted {
    match value {
        Value::Null => Compacted::Absent,
        Value::String(text) => Compacted::Text(truncate_text(text, limit)),
        structured => {
            let serialized = to_compact_json(structured);
            if serialized.chars().count() <= limit {
                Compacted::Intact(structured.clone())
            } else {
                Compacted::Preview(truncate_text(&serialized, limit))
            }
        }
    }
}

/// [`compact`] for optional fields; a missing field stays [`Compacted::Absent`]
pub fn compact_optional(value: Option<&Value>, limit: usize) -> Compacted {
    value.map_or(Compacted::Absent, |value| compact(value, limit))
}
