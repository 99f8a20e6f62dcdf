//! Diagnostic channel for input the card could not decode.
//!
//! The sink is injected by the host. Emission is best-effort: implementations
//! must not block and must not fail the render.

use std::sync::Mutex;

use crate::error::MalformedInputError;

/// Target used for diagnostic tracing events.
pub const DIAGNOSTICS_TARGET: &str = "browser_eval::diagnostics";

/// Receives one entry per malformed tool input.
pub trait DiagnosticSink: Send + Sync {
    fn malformed_input(&self, tool_call_id: Option<&str>, error: &MalformedInputError);
}

/// Default sink: one `warn` event on the host's tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn malformed_input(&self, tool_call_id: Option<&str>, error: &MalformedInputError) {
        tracing::warn!(
            target: DIAGNOSTICS_TARGET,
            tool_call_id = tool_call_id.unwrap_or("-"),
            line = error.line(),
            column = error.column(),
            error = %error,
            "Error parsing eval input"
        );
    }
}

/// One recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub tool_call_id: Option<String>,
    pub message: String,
}

/// Keeps diagnostics in memory, e.g. for a debug pane.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .map(|e| e.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingDiagnostics {
    fn malformed_input(&self, tool_call_id: Option<&str>, error: &MalformedInputError) {
        // A poisoned lock drops the entry.
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(DiagnosticEntry {
                tool_call_id: tool_call_id.map(str::to_owned),
                message: error.to_string(),
            });
        }
    }
}
