//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for directories holding chat history JSONL files
pub struct LogDirBuilder {
    temp_dir: TempDir,
}

impl LogDirBuilder {
    /// Create a new builder with an empty directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file with raw content at a path relative to the directory
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(path, content).expect("Failed to write file");
        self
    }

    /// Write a JSONL file with one line per record
    pub fn with_records(self, relative: &str, records: &[RecordBuilder]) -> Self {
        let content = records.iter().map(RecordBuilder::to_json).collect::<Vec<_>>().join("\n");
        self.with_file(relative, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for LogDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one chat history record (one JSONL line)
pub struct RecordBuilder {
    timestamp: Value,
    session_id: String,
    workspace_id: Option<String>,
    message_path: Option<String>,
    system_prompt: Option<String>,
    request_messages: Vec<MessageBuilder>,
    model_messages: Vec<MessageBuilder>,
}

impl RecordBuilder {
    /// Create a new record with default values
    pub fn new() -> Self {
        Self {
            timestamp: json!("2025-01-15T10:30:00Z"),
            session_id: "session-1".to_string(),
            workspace_id: None,
            message_path: None,
            system_prompt: None,
            request_messages: Vec::new(),
            model_messages: Vec::new(),
        }
    }

    pub fn timestamp(mut self, timestamp: Value) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = session_id.to_string();
        self
    }

    pub fn workspace_id(mut self, workspace_id: &str) -> Self {
        self.workspace_id = Some(workspace_id.to_string());
        self
    }

    pub fn message_path(mut self, message_path: &str) -> Self {
        self.message_path = Some(message_path.to_string());
        self
    }

    pub fn system_prompt(mut self, prompt: &str) -> Self {
        self.system_prompt = Some(prompt.to_string());
        self
    }

    /// Add an input message to the request
    pub fn request_message(mut self, message: MessageBuilder) -> Self {
        self.request_messages.push(message);
        self
    }

    /// Add a model-generated message
    pub fn model_message(mut self, message: MessageBuilder) -> Self {
        self.model_messages.push(message);
        self
    }

    pub fn to_value(&self) -> Value {
        let mut record = json!({
            "timestamp": self.timestamp,
            "sessionId": self.session_id,
            "request": {
                "sessionId": self.session_id,
                "clientId": "client-1",
                "chatModelId": "model-1",
                "messages": self.request_messages.iter().map(MessageBuilder::to_value).collect::<Vec<_>>(),
            },
            "modelMessages": self.model_messages.iter().map(MessageBuilder::to_value).collect::<Vec<_>>(),
        });

        if let Some(workspace_id) = &self.workspace_id {
            record["workspaceId"] = json!(workspace_id);
        }
        if let Some(message_path) = &self.message_path {
            record["messagePath"] = json!(message_path);
        }
        if let Some(prompt) = &self.system_prompt {
            record["systemPrompt"] = json!(prompt);
        }
        record
    }

    /// Convert to a single JSON line
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for request and model messages
pub struct MessageBuilder {
    role: String,
    id: String,
    parent_message_id: Option<String>,
    message_kind: Option<String>,
    parts: Vec<Value>,
    metadata: Option<Value>,
}

impl MessageBuilder {
    pub fn user(id: &str) -> Self {
        Self::with_role("user", id)
    }

    pub fn assistant(id: &str) -> Self {
        Self::with_role("assistant", id)
    }

    fn with_role(role: &str, id: &str) -> Self {
        Self {
            role: role.to_string(),
            id: id.to_string(),
            parent_message_id: None,
            message_kind: None,
            parts: Vec::new(),
            metadata: None,
        }
    }

    pub fn parent(mut self, parent_id: &str) -> Self {
        self.parent_message_id = Some(parent_id.to_string());
        self
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.message_kind = Some(kind.to_string());
        self
    }

    pub fn metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Add a plain text part
    pub fn text(mut self, text: &str) -> Self {
        self.parts.push(json!({"type": "text", "text": text}));
        self
    }

    /// Add a tool invocation part
    pub fn tool(mut self, tool: &str, call_id: &str, input: Value, output: Value) -> Self {
        self.parts.push(json!({
            "type": format!("tool-{tool}"),
            "toolCallId": call_id,
            "state": "output-available",
            "input": input,
            "output": output,
        }));
        self
    }

    /// Add an arbitrary raw part
    pub fn part(mut self, part: Value) -> Self {
        self.parts.push(part);
        self
    }

    pub fn to_value(&self) -> Value {
        json!({
            "role": self.role,
            "id": self.id,
            "parentMessageId": self.parent_message_id,
            "messageKind": self.message_kind,
            "parts": self.parts,
            "metadata": self.metadata,
        })
    }
}

/// Helper to create a realistic log file with a short tool-using conversation
pub fn realistic_log_dir() -> TempDir {
    LogDirBuilder::new()
        .with_records(
            "chat-history.jsonl",
            &[
                RecordBuilder::new()
                    .session_id("session-a")
                    .workspace_id("ws-1")
                    .message_path("u1/a1")
                    .system_prompt("You are a coding assistant.")
                    .request_message(MessageBuilder::user("u1").text("Why does the build fail?"))
                    .model_message(
                        MessageBuilder::assistant("a1")
                            .parent("u1")
                            .kind("normal")
                            .text("Let me check the logs.")
                            .tool("readFile", "call-1", json!({"path": "build.log"}), json!("error: E0425"))
                            .metadata(json!({"usage": {"inputTokens": 120, "outputTokens": 40}})),
                    ),
                RecordBuilder::new()
                    .session_id("session-a")
                    .request_message(MessageBuilder::user("u2").parent("a1").text("Fix it please"))
                    .model_message(
                        MessageBuilder::assistant("a2")
                            .parent("u2")
                            .tool("editFile", "call-2", json!({"path": "src/main.rs"}), Value::Null),
                    )
                    .model_message(
                        MessageBuilder::assistant("a3")
                            .parent("a2")
                            .text("Done.")
                            .tool("runTests", "call-3", json!({}), json!({"passed": 12})),
                    ),
            ],
        )
        .build()
}

/// Path of the single log file inside [`realistic_log_dir`]
pub fn realistic_log_file(dir: &TempDir) -> PathBuf {
    dir.path().join("chat-history.jsonl")
}
