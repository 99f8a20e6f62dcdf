//! Formatting helpers for card text (truncation, wrapping).
//!
//! Truncation counts characters (Rust `char`s). Wrapping measures terminal
//! columns with `unicode-width`, so wide glyphs take two cells.

use std::ops::Range;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Terminal columns taken by `s`.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Keep `s` when it has at most `max_chars` characters; otherwise the first
/// `max_chars` characters followed by `marker`.
///
/// Hard cut: no word-boundary awareness.
pub fn truncate_chars(s: &str, max_chars: usize, marker: &str) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &s[..cut], marker),
        None => s.to_string(),
    }
}

/// Split text into lines on `\n` only. A `\r` stays at the end of its line
/// and a trailing newline yields a trailing empty line, so joining the result
/// with `\n` gives back the input exactly.
pub fn split_lines(s: &str) -> Vec<&str> {
    s.split('\n').collect()
}

/// `s` as a single line: every `\r` and `\n` becomes a space, one for one.
pub fn inline_text(s: &str) -> String {
    s.chars()
        .map(|c| if matches!(c, '\r' | '\n') { ' ' } else { c })
        .collect()
}

/// Text as a terminal should draw it when it starts at column `start_col`:
/// tabs become spaces up to the next multiple of `tab_width` columns, other
/// control characters (such as `\r`) are dropped.
pub fn terminal_text(s: &str, start_col: usize, tab_width: usize) -> String {
    if !s.contains(|c: char| c.is_control()) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + tab_width);
    let mut col = start_col;
    for c in s.chars() {
        if c == '\t' && tab_width > 0 {
            let pad = tab_width - (col % tab_width);
            out.extend(std::iter::repeat_n(' ', pad));
            col += pad;
        } else if !c.is_control() {
            out.push(c);
            col += char_width(c);
        }
    }
    out
}

/// Byte ranges of one line cut at arbitrary character boundaries so every
/// piece fits in `width` columns. A character wider than `width` gets a piece
/// of its own. An empty line yields one empty range.
pub fn break_all_ranges(s: &str, width: usize) -> Vec<Range<usize>> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = char_width(c);
        if used + w > width && idx > start {
            out.push(start..idx);
            start = idx;
            used = 0;
        }
        used += w;
    }
    out.push(start..s.len());
    out
}

/// Byte ranges of one line wrapped the way a `pre-wrap` block with
/// `break-word` does: prefer breaking after whitespace, cut a run with no
/// whitespace at the column limit. No character is dropped, so the ranges
/// always tile the whole line.
pub fn preformatted_ranges(s: &str, width: usize) -> Vec<Range<usize>> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut start = 0;
    let mut used = 0;
    // Byte offset just past the last whitespace seen on the current piece.
    let mut last_break: Option<usize> = None;
    for (idx, c) in s.char_indices() {
        let w = char_width(c);
        if used + w > width && idx > start {
            match last_break.filter(|&b| b > start) {
                Some(b) => {
                    out.push(start..b);
                    start = b;
                    used = display_width(&s[b..idx]);
                    if used + w > width && idx > start {
                        out.push(start..idx);
                        start = idx;
                        used = 0;
                    }
                }
                None => {
                    out.push(start..idx);
                    start = idx;
                    used = 0;
                }
            }
            last_break = None;
        }
        used += w;
        if c.is_whitespace() {
            last_break = Some(idx + c.len_utf8());
        }
    }
    out.push(start..s.len());
    out
}
