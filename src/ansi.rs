//! ANSI escape sequence primitives for terminal styling.
//!
//! Everything here operates on SGR (Select Graphic Rendition) sequences of
//! the form `ESC [ <codes> m`. The module builds sequences from numeric
//! attribute codes, wraps text in them, and measures/strips styled text so
//! layout code can reason about what a terminal will actually display.
//!
//! # Example
//!
//! ```rust
//! use inkdown::ansi::{self, sgr};
//!
//! let styled = ansi::apply("hello", &[sgr::BOLD, sgr::FG_RED]);
//! assert_eq!(ansi::visible_length(&styled), 5);
//! assert_eq!(ansi::strip(&styled), "hello");
//! ```

use std::fmt::Write as _;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Reset-all sequence appended after every styled span.
pub const RESET: &str = "\x1b[0m";

/// Numeric SGR attribute codes.
pub mod sgr {
    pub const RESET: u8 = 0;

    pub const BOLD: u8 = 1;
    pub const DIM: u8 = 2;
    pub const ITALIC: u8 = 3;
    pub const UNDERLINE: u8 = 4;
    pub const BLINK: u8 = 5;
    pub const INVERSE: u8 = 7;
    pub const HIDDEN: u8 = 8;
    pub const STRIKETHROUGH: u8 = 9;

    pub const FG_BLACK: u8 = 30;
    pub const FG_RED: u8 = 31;
    pub const FG_GREEN: u8 = 32;
    pub const FG_YELLOW: u8 = 33;
    pub const FG_BLUE: u8 = 34;
    pub const FG_MAGENTA: u8 = 35;
    pub const FG_CYAN: u8 = 36;
    pub const FG_WHITE: u8 = 37;
    pub const FG_DEFAULT: u8 = 39;

    pub const BG_BLACK: u8 = 40;
    pub const BG_RED: u8 = 41;
    pub const BG_GREEN: u8 = 42;
    pub const BG_YELLOW: u8 = 43;
    pub const BG_BLUE: u8 = 44;
    pub const BG_MAGENTA: u8 = 45;
    pub const BG_CYAN: u8 = 46;
    pub const BG_WHITE: u8 = 47;
    pub const BG_DEFAULT: u8 = 49;

    pub const FG_BRIGHT_BLACK: u8 = 90;
    pub const FG_BRIGHT_RED: u8 = 91;
    pub const FG_BRIGHT_GREEN: u8 = 92;
    pub const FG_BRIGHT_YELLOW: u8 = 93;
    pub const FG_BRIGHT_BLUE: u8 = 94;
    pub const FG_BRIGHT_MAGENTA: u8 = 95;
    pub const FG_BRIGHT_CYAN: u8 = 96;
    pub const FG_BRIGHT_WHITE: u8 = 97;

    pub const BG_BRIGHT_BLACK: u8 = 100;
    pub const BG_BRIGHT_RED: u8 = 101;
    pub const BG_BRIGHT_GREEN: u8 = 102;
    pub const BG_BRIGHT_YELLOW: u8 = 103;
    pub const BG_BRIGHT_BLUE: u8 = 104;
    pub const BG_BRIGHT_MAGENTA: u8 = 105;
    pub const BG_BRIGHT_CYAN: u8 = 106;
    pub const BG_BRIGHT_WHITE: u8 = 107;
}

/// Builds a single combined SGR sequence from the given codes.
///
/// An empty code list is legal and produces `ESC [ m`, which terminals
/// treat as a reset.
pub fn sequence(codes: &[u8]) -> String {
    let mut seq = String::from(CSI);
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            seq.push(';');
        }
        let _ = write!(seq, "{code}");
    }
    seq.push('m');
    seq
}

/// Wraps `text` in the combined sequence for `codes` plus a trailing reset.
///
/// With no codes the text is returned unchanged, without any escape
/// wrapping. This distinguishes "no style" from an explicit reset.
pub fn apply(text: &str, codes: &[u8]) -> String {
    if codes.is_empty() {
        return text.to_string();
    }
    format!("{}{text}{RESET}", sequence(codes))
}

/// Wraps `text` in a 256-color indexed foreground sequence.
pub fn fg_indexed(text: &str, color: u8) -> String {
    format!("{CSI}38;5;{color}m{text}{RESET}")
}

/// Wraps `text` in a 256-color indexed background sequence.
pub fn bg_indexed(text: &str, color: u8) -> String {
    format!("{CSI}48;5;{color}m{text}{RESET}")
}

/// Wraps `text` in a true-color foreground sequence.
pub fn fg_rgb(text: &str, r: u8, g: u8, b: u8) -> String {
    format!("{CSI}38;2;{r};{g};{b}m{text}{RESET}")
}

/// Wraps `text` in a true-color background sequence.
pub fn bg_rgb(text: &str, r: u8, g: u8, b: u8) -> String {
    format!("{CSI}48;2;{r};{g};{b}m{text}{RESET}")
}

/// Removes every complete SGR sequence (`ESC [ digits/semicolons m`) from
/// `text`. Malformed or unterminated sequences are left untouched.
/// Idempotent: stripping twice equals stripping once.
pub fn strip(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == 0x1b && bytes.get(i + 1) == Some(&b'[') {
            let mut j = i + 2;
            while matches!(bytes.get(j), Some(b) if b.is_ascii_digit() || *b == b';') {
                j += 1;
            }
            if bytes.get(j) == Some(&b'm') {
                // Sequence boundaries are ASCII, so slicing here is safe.
                out.push_str(&text[start..i]);
                i = j + 1;
                start = i;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&text[start..]);
    out
}

/// The number of characters a terminal will display for `text`, i.e. the
/// character count after stripping escape sequences.
pub fn visible_length(text: &str) -> usize {
    strip(text).chars().count()
}
