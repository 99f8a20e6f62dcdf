//! Card text and spacing constants.

/// Longest expression shown verbatim in the collapsed summary (in characters).
pub const SUMMARY_MAX_CHARS: usize = 50;

/// Appended to a summary cut at [SUMMARY_MAX_CHARS].
pub const TRUNCATION_MARKER: &str = "...";

/// Leading glyph of the summary line.
pub const SUMMARY_GLYPH: &str = "📱";

/// Label in front of the full expression in the input view.
pub const INPUT_LABEL: &str = "Evaluate:";

/// Left indent for expanded card sections (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Tab stops used when laying fragments out for the terminal.
pub const TAB_WIDTH: usize = 8;
