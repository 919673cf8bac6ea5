use super::compactor::{compact_optional, truncate_text};
use super::text::extract_text;
use super::tool_calls::collect_tool_calls;
use crate::models::{
    EntrySummary, FlattenedToolCall, InputMessageSummary, Message, ModelMessageSummary, Record,
    Request, RequestSummary, ToolCallSummary,
};

/// Summarize the request section: metadata as-is, messages reduced to their text
pub fn summarize_request(request: &Request, max_chars: usize) -> RequestSummary {
    let messages = request
        .messages
        .iter()
        .map(|message| InputMessageSummary {
            role: message.role.clone(),
            id: message.id.clone(),
            parent_message_id: message.parent_message_id.clone(),
            text: truncate_text(&extract_text(&message.parts), max_chars),
        })
        .collect();

    RequestSummary {
        session_id: request.session_id.clone(),
        client_id: request.client_id.clone(),
        timezone: request.timezone.clone(),
        tab_id: request.tab_id.clone(),
        chat_model_id: request.chat_model_id.clone(),
        chat_model_source: request.chat_model_source.clone(),
        workspace_id: request.workspace_id.clone(),
        project_id: request.project_id.clone(),
        selected_skills: request.selected_skills.clone(),
        messages,
    }
}

/// Summarize one model message; the returned summary owns its tool calls
pub fn summarize_model_message(message: &Message, max_chars: usize) -> ModelMessageSummary {
    ModelMessageSummary {
        id: message.id.clone(),
        role: message.role.clone(),
        message_kind: message.message_kind.clone(),
        parent_message_id: message.parent_message_id.clone(),
        text: truncate_text(&extract_text(&message.parts), max_chars),
        tool_calls: collect_tool_calls(&message.parts, max_chars),
        metadata: compact_optional(message.metadata.as_ref(), max_chars),
    }
}

fn flatten_tool_calls(summary: &ModelMessageSummary) -> impl Iterator<Item = FlattenedToolCall> {
    summary.tool_calls.iter().map(|call: &ToolCallSummary| FlattenedToolCall {
        source_message_id: summary.id.clone(),
        source_role: summary.role.clone(),
        call: call.clone(),
    })
}

/// Summarize one record
///
/// Tool calls from every model message are also collected into one list, in
/// message order then part order, each tagged with its source message.
///
/// # Examples
///
/// ```
/// use chat_history_summarizer::models::Record;
/// use chat_history_summarizer::summarize_entry;
///
/// let record: Record = serde_json::from_str(
///     r#"{"sessionId":"s1","modelMessages":[{"id":"m1","role":"assistant",
///         "parts":[{"type":"tool-read","toolCallId":"t1","input":{"path":"a"}}]}]}"#,
/// )?;
/// let summary = summarize_entry(&record, 2000);
/// assert_eq!(summary.tool_calls.len(), 1);
/// assert_eq!(summary.system_prompt_preview, "");
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn summarize_entry(record: &Record, max_chars: usize) -> EntrySummary {
    let model_messages: Vec<ModelMessageSummary> = record
        .model_messages
        .iter()
        .map(|message| summarize_model_message(message, max_chars))
        .collect();

    let tool_calls = model_messages.iter().flat_map(flatten_tool_calls).collect();

    EntrySummary {
        timestamp: record.timestamp.clone(),
        session_id: record.session_id.clone(),
        message_path: record.message_path.clone(),
        workspace_id: record.workspace_id.clone(),
        request: summarize_request(&record.request, max_chars),
        system_prompt_preview: truncate_text(
            record.system_prompt.as_deref().unwrap_or_default(),
            max_chars,
        ),
        model_messages,
        tool_calls,
    }
}
