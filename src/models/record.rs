use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parsers::deserializers::{
    deserialize_lenient, deserialize_lenient_object, deserialize_lenient_seq, deserialize_present,
};

/// Type tags starting with this prefix mark a tool invocation part
pub const TOOL_PART_PREFIX: &str = "tool-";

/// One line of a chat history log
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub session_id: Option<Value>,
    #[serde(default)]
    pub workspace_id: Option<Value>,
    #[serde(default)]
    pub message_path: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_lenient_object")]
    pub request: Request,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub system_prompt: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_seq")]
    pub model_messages: Vec<Message>,
}

/// Metadata about the originating chat call plus the messages sent with it
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default)]
    pub session_id: Option<Value>,
    #[serde(default)]
    pub client_id: Option<Value>,
    #[serde(default)]
    pub timezone: Option<Value>,
    #[serde(default)]
    pub tab_id: Option<Value>,
    #[serde(default)]
    pub chat_model_id: Option<Value>,
    #[serde(default)]
    pub chat_model_source: Option<Value>,
    #[serde(default)]
    pub workspace_id: Option<Value>,
    #[serde(default)]
    pub project_id: Option<Value>,
    #[serde(default)]
    pub selected_skills: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_lenient_seq")]
    pub messages: Vec<Message>,
}

/// Message author role
///
/// Unknown roles, including non-string ones, are kept verbatim so they survive
/// into the summary unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
    Other(Value),
}

impl Role {
    /// Role name, or `None` for a non-string role
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Role::User => Some("user"),
            Role::Assistant => Some("assistant"),
            Role::System => Some("system"),
            Role::Tool => Some("tool"),
            Role::Other(other) => other.as_str(),
        }
    }
}

impl From<Value> for Role {
    fn from(value: Value) -> Self {
        match value.as_str() {
            Some("user") => Role::User,
            Some("assistant") => Role::Assistant,
            Some("system") => Role::System,
            Some("tool") => Role::Tool,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for Value {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(other) => other,
            known => Value::String(known.to_string()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Other(other) if !other.is_string() => write!(f, "{other}"),
            _ => f.write_str(self.as_str().unwrap_or_default()),
        }
    }
}

/// A request message or a model-generated message
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub parent_message_id: Option<Value>,
    #[serde(default)]
    pub message_kind: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_lenient_seq")]
    pub parts: Vec<ContentPart>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// One fragment of a message
///
/// Decoded through [`RawContentPart`] so the tool-invocation rule is applied in
/// exactly one place: a `tool-` prefixed type tag, or an `input`/`output` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawContentPart")]
pub enum ContentPart {
    Text(TextPart),
    ToolInvocation(ToolInvocationPart),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPart {
    pub part_type: Option<Value>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolInvocationPart {
    /// Raw type tag; usually a string, carried through whatever its JSON type
    pub part_type: Option<Value>,
    pub state: Option<Value>,
    pub tool_call_id: Option<Value>,
    /// `None` when the field is missing; `Some(Value::Null)` when present but null
    pub input: Option<Value>,
    pub output: Option<Value>,
    pub text: Option<String>,
}

impl ContentPart {
    /// Type tag when it is a string
    pub fn part_type(&self) -> Option<&str> {
        let tag = match self {
            ContentPart::Text(part) => part.part_type.as_ref(),
            ContentPart::ToolInvocation(part) => part.part_type.as_ref(),
        };
        tag.and_then(Value::as_str)
    }

    /// Text fragment carried by this part, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentPart::Text(part) => part.text.as_deref(),
            ContentPart::ToolInvocation(part) => part.text.as_deref(),
        }
    }

    pub fn as_tool_invocation(&self) -> Option<&ToolInvocationPart> {
        match self {
            ContentPart::ToolInvocation(part) => Some(part),
            ContentPart::Text(_) => None,
        }
    }
}

/// Wire shape of a content part before classification
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContentPart {
    #[serde(rename = "type", default)]
    pub part_type: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub text: Option<String>,
    #[serde(default)]
    pub state: Option<Value>,
    #[serde(default)]
    pub tool_call_id: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub input: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub output: Option<Value>,
}

impl RawContentPart {
    fn is_tool_invocation(&self) -> bool {
        let tagged = self
            .part_type
            .as_ref()
            .and_then(Value::as_str)
            .is_some_and(|tag| tag.starts_with(TOOL_PART_PREFIX));
        tagged || self.input.is_some() || self.output.is_some()
    }
}

impl From<RawContentPart> for ContentPart {
    fn from(raw: RawContentPart) -> Self {
        if raw.is_tool_invocation() {
            ContentPart::ToolInvocation(ToolInvocationPart {
                part_type: raw.part_type,
                state: raw.state,
                tool_call_id: raw.tool_call_id,
                input: raw.input,
                output: raw.output,
                text: raw.text,
            })
        } else {
            ContentPart::Text(TextPart { part_type: raw.part_type, text: raw.text })
        }
    }
}
