use super::compactor::compact_optional;
use crate::models::{ContentPart, ToolCallSummary, ToolInvocationPart};

/// Collect the tool invocation parts of a message, in order, with payloads compacted
///
/// Parts that are neither `tool-` tagged nor carry `input`/`output` are left out
/// entirely.
pub fn collect_tool_calls(parts: &[ContentPart], max_chars: usize) -> Vec<ToolCallSummary> {
    parts
        .iter()
        .filter_map(ContentPart::as_tool_invocation)
        .map(|part| summarize_tool_call(part, max_chars))
        .collect()
}

fn summarize_tool_call(part: &ToolInvocationPart, max_chars: usize) -> ToolCallSummary {
    ToolCallSummary {
        part_type: part.part_type.clone(),
        state: part.state.clone(),
        tool_call_id: part.tool_call_id.clone(),
        input: compact_optional(part.input.as_ref(), max_chars),
        output: compact_optional(part.output.as_ref(), max_chars),
    }
}
