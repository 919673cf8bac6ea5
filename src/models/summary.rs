use serde::Serialize;
use serde_json::Value;

use super::record::Role;
use crate::summarizer::compactor::Compacted;

/// Bounded-size projection of a [`Record`](super::Record)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySummary {
    pub timestamp: Option<Value>,
    pub session_id: Option<Value>,
    pub message_path: Option<Value>,
    pub workspace_id: Option<Value>,
    pub request: RequestSummary,
    pub system_prompt_preview: String,
    pub model_messages: Vec<ModelMessageSummary>,
    pub tool_calls: Vec<FlattenedToolCall>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSummary {
    pub session_id: Option<Value>,
    pub client_id: Option<Value>,
    pub timezone: Option<Value>,
    pub tab_id: Option<Value>,
    pub chat_model_id: Option<Value>,
    pub chat_model_source: Option<Value>,
    pub workspace_id: Option<Value>,
    pub project_id: Option<Value>,
    pub selected_skills: Option<Value>,
    pub messages: Vec<InputMessageSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputMessageSummary {
    pub role: Option<Role>,
    pub id: Option<Value>,
    pub parent_message_id: Option<Value>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMessageSummary {
    pub id: Option<Value>,
    pub role: Option<Role>,
    pub message_kind: Option<Value>,
    pub parent_message_id: Option<Value>,
    pub text: String,
    pub tool_calls: Vec<ToolCallSummary>,
    pub metadata: Compacted,
}

/// Normalized tool invocation with compacted payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallSummary {
    #[serde(rename = "type")]
    pub part_type: Option<Value>,
    pub state: Option<Value>,
    pub tool_call_id: Option<Value>,
    pub input: Compacted,
    pub output: Compacted,
}

/// Tool call annotated with the model message it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedToolCall {
    pub source_message_id: Option<Value>,
    pub source_role: Option<Role>,
    #[serde(flatten)]
    pub call: ToolCallSummary,
}
