use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// Tool name the host uses for browser evaluation calls.
pub const BROWSER_EVAL_TOOL: &str = "browser_eval";

/// One tool invocation as stored by the conversation. `input` is the raw
/// serialized payload the model sent; it is never decoded here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "toolCallId", skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default, alias = "resultMessage", skip_serializing_if = "Option::is_none")]
    pub result_message: Option<ResultMessage>,
}

/// Result side of a tool call; absent while the tool is still running.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMessage {
    #[serde(default, alias = "toolResult", skip_serializing_if = "Option::is_none")]
    pub tool_result: Option<String>,
    #[serde(default, alias = "toolError")]
    pub tool_error: bool,
}

impl ToolCallRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Decode a record as exported by the tool-call store.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(CardError::Record)
    }

    /// Read and decode a record file written by the tool-call store.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.tool_call_id = Some(id.into());
        self
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result_message = Some(ResultMessage {
            tool_result: Some(result.into()),
            tool_error: false,
        });
        self
    }

    pub fn with_error_result(mut self, result: impl Into<String>) -> Self {
        self.result_message = Some(ResultMessage {
            tool_result: Some(result.into()),
            tool_error: true,
        });
        self
    }

    /// Result text when there is something to show. An empty `tool_result`
    /// counts as no result.
    pub fn result_text(&self) -> Option<&str> {
        self.result_message
            .as_ref()
            .and_then(|m| m.tool_result.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// True once a result message has arrived, even an empty one.
    pub fn is_finished(&self) -> bool {
        self.result_message.is_some()
    }

    pub fn is_error(&self) -> bool {
        self.result_message.as_ref().is_some_and(|m| m.tool_error)
    }
}
