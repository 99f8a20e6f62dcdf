//! browser-eval-core: data model for the browser_eval tool card.
//!
//! - **[tool_call]**: [ToolCallRecord] as supplied by the tool-call store.
//! - **[expression]**: typed decode of the record's `input` into [ExpressionPayload].
//! - **[diagnostics]**: the [DiagnosticSink] capability for malformed input.
//! - **[error]**: [MalformedInputError] and [CardError].

pub mod diagnostics;
pub mod error;
pub mod expression;
pub mod tool_call;

pub use diagnostics::{CollectingDiagnostics, DiagnosticEntry, DiagnosticSink, TracingDiagnostics};
pub use error::{CardError, MalformedInputError, Result};
pub use expression::ExpressionPayload;
pub use tool_call::{BROWSER_EVAL_TOOL, ResultMessage, ToolCallRecord};
