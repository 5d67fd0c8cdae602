//! Escape-aware greedy word wrapping.

use crate::ansi::visible_length;

/// Wraps `text` to `width` columns, prefixing every produced line with
/// `indent` literal spaces and measuring against `width - indent`.
///
/// A width of 0, or any width at or below the indent, disables wrapping
/// and returns the input unchanged. Runs of whitespace are collapsed to
/// single spaces. A word longer than the budget is emitted on its own
/// line and overflows; words are never split or hyphenated.
///
/// Escape sequences are excluded from measurement, so already-styled text
/// wraps by its visible length. The wrapper has no awareness of style
/// span boundaries: a span broken across lines leaves fragments without
/// matching open/close codes.
#[must_use]
pub fn wrap(text: &str, width: usize, indent: usize) -> String {
    if width <= indent {
        // width 0 disables wrapping, as does an indent that consumes it
        return text.to_string();
    }

    let budget = width - indent;
    let indent_str = " ".repeat(indent);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if visible_length(&current) + visible_length(word) + 1 <= budget {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(format!("{indent_str}{current}"));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(format!("{indent_str}{current}"));
    }

    lines.join("\n")
}
