//! Span helpers for card rendering

/// Create a span around one render of a tool card
///
/// # Example
///
/// ```rust
/// use browser_eval_observability::render_span;
///
/// let span = render_span!("browser_eval", Some("toolu_01"));
/// let _guard = span.enter();
/// // ... build fragments ...
/// ```
#[macro_export]
macro_rules! render_span {
    ($tool:expr, $tool_call_id:expr) => {
        $crate::tracing::debug_span!(
            "card.render",
            tool.name = $tool,
            tool.call_id = $tool_call_id.unwrap_or("-"),
            card.open = $crate::tracing::field::Empty,
        )
    };
}
