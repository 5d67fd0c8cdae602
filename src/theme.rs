//! Theme model: per-element style descriptors, named presets, and merging.
//!
//! A [`Theme`] maps every markdown element kind to an optional
//! [`ElementStyle`] and carries a handful of literal presentation glyphs
//! (bullet, checkboxes, rule fill, table border set). Themes are plain
//! values: the built-in presets are constructed fresh by [`Theme::dark`]
//! and friends, never mutated in place. Variants are produced with
//! [`Theme::merge`].
//!
//! # Example
//!
//! ```rust
//! use inkdown::theme::{Color, ElementStyle, Theme};
//!
//! let overrides = Theme {
//!     h1: Some(ElementStyle::new().color(Color::Rgb(255, 105, 180))),
//!     ..Theme::default()
//! };
//! let custom = Theme::dark().merge(&overrides);
//! assert_eq!(custom.bullet.as_deref(), Some("•"));
//! ```

use crate::ansi::{self, sgr};

/// A terminal color: either a raw SGR attribute code or a true-color triple.
///
/// The two representations are mutually exclusive by construction, which
/// keeps color application exhaustive at the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// A numeric SGR code (e.g. 96 for bright cyan foreground).
    Indexed(u8),
    /// An explicit 24-bit RGB triple.
    Rgb(u8, u8, u8),
}

/// Optional visual attributes for one markdown element kind.
///
/// Every field is optional; an absent field means "no effect", never
/// "use a default". Defaults come only from which preset [`Theme`] is
/// chosen. Boolean flags are `Option<bool>` so that [`ElementStyle::merge`]
/// can distinguish "unset" from "explicitly disabled".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementStyle {
    /// Foreground color.
    pub color: Option<Color>,
    /// Background color.
    pub background: Option<Color>,
    /// Bold text.
    pub bold: Option<bool>,
    /// Italic text.
    pub italic: Option<bool>,
    /// Underlined text.
    pub underline: Option<bool>,
    /// Struck-through text.
    pub strikethrough: Option<bool>,
    /// Faint text.
    pub dim: Option<bool>,
    /// Swapped foreground/background.
    pub inverse: Option<bool>,
    /// Literal text prepended to the element.
    pub prefix: Option<String>,
    /// Literal text appended to the element.
    pub suffix: Option<String>,
    /// Left indent accumulated by nested constructs.
    pub indent: Option<usize>,
    /// Blank lines emitted before and after the block.
    pub margin: Option<usize>,
    /// Spaces inserted inside the block's content area.
    pub padding: Option<usize>,
    /// Border glyph. Declared for completeness; tables draw their borders
    /// from [`Theme::table_border`] instead.
    pub border: Option<String>,
    /// Border color. Same caveat as `border`.
    pub border_color: Option<Color>,
}

impl ElementStyle {
    /// Creates a new empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn background(mut self, c: Color) -> Self {
        self.background = Some(c);
        self
    }

    /// Sets bold.
    #[must_use]
    pub fn bold(mut self, b: bool) -> Self {
        self.bold = Some(b);
        self
    }

    /// Sets italic.
    #[must_use]
    pub fn italic(mut self, i: bool) -> Self {
        self.italic = Some(i);
        self
    }

    /// Sets underline.
    #[must_use]
    pub fn underline(mut self, u: bool) -> Self {
        self.underline = Some(u);
        self
    }

    /// Sets strikethrough.
    #[must_use]
    pub fn strikethrough(mut self, s: bool) -> Self {
        self.strikethrough = Some(s);
        self
    }

    /// Sets faint.
    #[must_use]
    pub fn dim(mut self, d: bool) -> Self {
        self.dim = Some(d);
        self
    }

    /// Sets inverse.
    #[must_use]
    pub fn inverse(mut self, i: bool) -> Self {
        self.inverse = Some(i);
        self
    }

    /// Sets the prefix.
    #[must_use]
    pub fn prefix(mut self, p: impl Into<String>) -> Self {
        self.prefix = Some(p.into());
        self
    }

    /// Sets the suffix.
    #[must_use]
    pub fn suffix(mut self, s: impl Into<String>) -> Self {
        self.suffix = Some(s.into());
        self
    }

    /// Sets the indent.
    #[must_use]
    pub fn indent(mut self, i: usize) -> Self {
        self.indent = Some(i);
        self
    }

    /// Sets the margin.
    #[must_use]
    pub fn margin(mut self, m: usize) -> Self {
        self.margin = Some(m);
        self
    }

    /// Sets the padding.
    #[must_use]
    pub fn padding(mut self, p: usize) -> Self {
        self.padding = Some(p);
        self
    }

    /// Shallow-merges `overrides` over this style: fields present in the
    /// override win, absent fields are inherited from `self`.
    #[must_use]
    pub fn merge(&self, overrides: &ElementStyle) -> ElementStyle {
        ElementStyle {
            color: overrides.color.or(self.color),
            background: overrides.background.or(self.background),
            bold: overrides.bold.or(self.bold),
            italic: overrides.italic.or(self.italic),
            underline: overrides.underline.or(self.underline),
            strikethrough: overrides.strikethrough.or(self.strikethrough),
            dim: overrides.dim.or(self.dim),
            inverse: overrides.inverse.or(self.inverse),
            prefix: overrides.prefix.clone().or_else(|| self.prefix.clone()),
            suffix: overrides.suffix.clone().or_else(|| self.suffix.clone()),
            indent: overrides.indent.or(self.indent),
            margin: overrides.margin.or(self.margin),
            padding: overrides.padding.or(self.padding),
            border: overrides.border.clone().or_else(|| self.border.clone()),
            border_color: overrides.border_color.or(self.border_color),
        }
    }

    /// Applies this style to `text`: attribute codes and indexed colors are
    /// combined into a single SGR wrap; RGB colors are applied as inner
    /// wraps first; prefix and suffix are included in the styled region.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut codes: Vec<u8> = Vec::new();
        if self.bold == Some(true) {
            codes.push(sgr::BOLD);
        }
        if self.dim == Some(true) {
            codes.push(sgr::DIM);
        }
        if self.italic == Some(true) {
            codes.push(sgr::ITALIC);
        }
        if self.underline == Some(true) {
            codes.push(sgr::UNDERLINE);
        }
        if self.strikethrough == Some(true) {
            codes.push(sgr::STRIKETHROUGH);
        }
        if self.inverse == Some(true) {
            codes.push(sgr::INVERSE);
        }

        let mut text = text.to_string();
        match self.color {
            Some(Color::Indexed(code)) => codes.push(code),
            Some(Color::Rgb(r, g, b)) => text = ansi::fg_rgb(&text, r, g, b),
            None => {}
        }
        match self.background {
            Some(Color::Indexed(code)) => codes.push(code),
            Some(Color::Rgb(r, g, b)) => text = ansi::bg_rgb(&text, r, g, b),
            None => {}
        }

        if let Some(prefix) = &self.prefix {
            text = format!("{prefix}{text}");
        }
        if let Some(suffix) = &self.suffix {
            text = format!("{text}{suffix}");
        }

        if codes.is_empty() {
            text
        } else {
            ansi::apply(&text, &codes)
        }
    }
}

/// Checkbox glyphs for task list items.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Checkbox {
    /// Marker for checked items.
    pub checked: String,
    /// Marker for unchecked items.
    pub unchecked: String,
}

impl Checkbox {
    /// Creates a checkbox glyph pair.
    #[must_use]
    pub fn new(checked: impl Into<String>, unchecked: impl Into<String>) -> Self {
        Self {
            checked: checked.into(),
            unchecked: unchecked.into(),
        }
    }
}

/// Box-drawing glyph set used for table borders.
///
/// `middle_*` glyphs are the junctions: `middle_top` joins columns in the
/// top border, `middle` joins them in the header separator, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableBorder {
    /// Horizontal edge character.
    pub horizontal: String,
    /// Vertical edge character.
    pub vertical: String,
    /// Top-left corner.
    pub top_left: String,
    /// Top-right corner.
    pub top_right: String,
    /// Bottom-left corner.
    pub bottom_left: String,
    /// Bottom-right corner.
    pub bottom_right: String,
    /// Left junction in the header separator.
    pub middle_left: String,
    /// Right junction in the header separator.
    pub middle_right: String,
    /// Column junction in the header separator.
    pub middle: String,
    /// Column junction in the top border.
    pub middle_top: String,
    /// Column junction in the bottom border.
    pub middle_bottom: String,
}

impl TableBorder {
    /// Standard Unicode box-drawing border.
    ///
    /// ```text
    /// ┌───┬───┐
    /// │   │   │
    /// ├───┼───┤
    /// └───┴───┘
    /// ```
    #[must_use]
    pub fn normal() -> Self {
        Self {
            horizontal: "─".into(),
            vertical: "│".into(),
            top_left: "┌".into(),
            top_right: "┐".into(),
            bottom_left: "└".into(),
            bottom_right: "┘".into(),
            middle_left: "├".into(),
            middle_right: "┤".into(),
            middle: "┼".into(),
            middle_top: "┬".into(),
            middle_bottom: "┴".into(),
        }
    }

    /// ASCII-only border.
    ///
    /// ```text
    /// +---+---+
    /// |   |   |
    /// +---+---+
    /// ```
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            horizontal: "-".into(),
            vertical: "|".into(),
            top_left: "+".into(),
            top_right: "+".into(),
            bottom_left: "+".into(),
            bottom_right: "+".into(),
            middle_left: "+".into(),
            middle_right: "+".into(),
            middle: "+".into(),
            middle_top: "+".into(),
            middle_bottom: "+".into(),
        }
    }
}

impl Default for TableBorder {
    fn default() -> Self {
        Self::normal()
    }
}

/// A complete style configuration mapping every markdown element kind to
/// optional visual attributes plus a few literal glyphs.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    // Block elements
    pub document: Option<ElementStyle>,
    pub paragraph: Option<ElementStyle>,
    pub heading: Option<ElementStyle>,
    pub h1: Option<ElementStyle>,
    pub h2: Option<ElementStyle>,
    pub h3: Option<ElementStyle>,
    pub h4: Option<ElementStyle>,
    pub h5: Option<ElementStyle>,
    pub h6: Option<ElementStyle>,
    pub blockquote: Option<ElementStyle>,
    pub code_block: Option<ElementStyle>,
    pub list: Option<ElementStyle>,
    pub list_item: Option<ElementStyle>,
    pub table: Option<ElementStyle>,
    pub table_header: Option<ElementStyle>,
    pub table_cell: Option<ElementStyle>,
    pub horizontal_rule: Option<ElementStyle>,

    // Inline elements
    pub text: Option<ElementStyle>,
    pub strong: Option<ElementStyle>,
    pub emphasis: Option<ElementStyle>,
    pub code: Option<ElementStyle>,
    pub link: Option<ElementStyle>,
    pub image: Option<ElementStyle>,
    pub strikethrough: Option<ElementStyle>,

    // Presentation glyphs
    /// Unordered list bullet.
    pub bullet: Option<String>,
    /// SGR code applied to the bullet.
    pub bullet_color: Option<u8>,
    /// Task list checkbox glyphs.
    pub checkbox: Option<Checkbox>,
    /// Fill character for horizontal rules.
    pub rule_char: Option<String>,
    /// Table border glyph set. Absent falls back to
    /// [`TableBorder::normal`].
    pub table_border: Option<TableBorder>,
}

impl Theme {
    /// Resolves the style for a heading level, falling back to the generic
    /// `heading` entry when no per-level style exists. This is the only
    /// lookup fallback in the theme model.
    #[must_use]
    pub fn heading_style(&self, level: u8) -> Option<&ElementStyle> {
        let specific = match level {
            1 => self.h1.as_ref(),
            2 => self.h2.as_ref(),
            3 => self.h3.as_ref(),
            4 => self.h4.as_ref(),
            5 => self.h5.as_ref(),
            6 => self.h6.as_ref(),
            _ => None,
        };
        specific.or(self.heading.as_ref())
    }

    /// Produces a new theme by layering `overrides` over `self`.
    ///
    /// Style descriptors present in the override are shallow-merged over
    /// the base descriptor at that key; glyph fields replace wholesale;
    /// keys absent from the override are untouched. Neither input is
    /// modified.
    #[must_use]
    pub fn merge(&self, overrides: &Theme) -> Theme {
        fn style(
            base: &Option<ElementStyle>,
            over: &Option<ElementStyle>,
        ) -> Option<ElementStyle> {
            match (base, over) {
                (_, None) => base.clone(),
                (None, Some(o)) => Some(o.clone()),
                (Some(b), Some(o)) => Some(b.merge(o)),
            }
        }

        Theme {
            document: style(&self.document, &overrides.document),
            paragraph: style(&self.paragraph, &overrides.paragraph),
            heading: style(&self.heading, &overrides.heading),
            h1: style(&self.h1, &overrides.h1),
            h2: style(&self.h2, &overrides.h2),
            h3: style(&self.h3, &overrides.h3),
            h4: style(&self.h4, &overrides.h4),
            h5: style(&self.h5, &overrides.h5),
            h6: style(&self.h6, &overrides.h6),
            blockquote: style(&self.blockquote, &overrides.blockquote),
            code_block: style(&self.code_block, &overrides.code_block),
            list: style(&self.list, &overrides.list),
            list_item: style(&self.list_item, &overrides.list_item),
            table: style(&self.table, &overrides.table),
            table_header: style(&self.table_header, &overrides.table_header),
            table_cell: style(&self.table_cell, &overrides.table_cell),
            horizontal_rule: style(&self.horizontal_rule, &overrides.horizontal_rule),
            text: style(&self.text, &overrides.text),
            strong: style(&self.strong, &overrides.strong),
            emphasis: style(&self.emphasis, &overrides.emphasis),
            code: style(&self.code, &overrides.code),
            link: style(&self.link, &overrides.link),
            image: style(&self.image, &overrides.image),
            strikethrough: style(&self.strikethrough, &overrides.strikethrough),
            bullet: overrides.bullet.clone().or_else(|| self.bullet.clone()),
            bullet_color: overrides.bullet_color.or(self.bullet_color),
            checkbox: overrides.checkbox.clone().or_else(|| self.checkbox.clone()),
            rule_char: overrides.rule_char.clone().or_else(|| self.rule_char.clone()),
            table_border: overrides
                .table_border
                .clone()
                .or_else(|| self.table_border.clone()),
        }
    }

    /// Dark terminal theme (the default).
    #[must_use]
    pub fn dark() -> Self {
        Theme {
            document: Some(ElementStyle::new()),
            paragraph: Some(ElementStyle::new().margin(1)),

            heading: Some(ElementStyle::new().bold(true).margin(1)),
            h1: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_CYAN))
                    .bold(true)
                    .prefix("# "),
            ),
            h2: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_GREEN))
                    .bold(true)
                    .prefix("## "),
            ),
            h3: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_YELLOW))
                    .bold(true)
                    .prefix("### "),
            ),
            h4: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_MAGENTA))
                    .bold(true)
                    .prefix("#### "),
            ),
            h5: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_BLUE))
                    .bold(true)
                    .prefix("##### "),
            ),
            h6: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_WHITE))
                    .bold(true)
                    .prefix("###### "),
            ),

            blockquote: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_BLACK))
                    .italic(true)
                    .prefix("│ ")
                    .indent(2)
                    .margin(1),
            ),

            code_block: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_WHITE))
                    .background(Color::Indexed(sgr::BG_BRIGHT_BLACK))
                    .padding(1)
                    .margin(1),
            ),

            list: Some(ElementStyle::new().margin(1)),
            list_item: Some(ElementStyle::new().indent(2)),

            table: Some(ElementStyle::new().margin(1)),
            table_header: Some(
                ElementStyle::new()
                    .bold(true)
                    .color(Color::Indexed(sgr::FG_BRIGHT_CYAN)),
            ),
            table_cell: Some(ElementStyle::new()),

            horizontal_rule: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_BLACK))
                    .margin(1),
            ),

            text: Some(ElementStyle::new()),
            strong: Some(
                ElementStyle::new()
                    .bold(true)
                    .color(Color::Indexed(sgr::FG_BRIGHT_WHITE)),
            ),
            emphasis: Some(ElementStyle::new().italic(true)),
            code: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_YELLOW))
                    .background(Color::Indexed(sgr::BG_BRIGHT_BLACK)),
            ),
            link: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_BLUE))
                    .underline(true),
            ),
            image: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_MAGENTA))
                    .prefix("🖼 "),
            ),
            strikethrough: Some(ElementStyle::new().strikethrough(true).dim(true)),

            bullet: Some("•".into()),
            bullet_color: Some(sgr::FG_BRIGHT_CYAN),
            checkbox: Some(Checkbox::new("✓", "○")),
            rule_char: Some("─".into()),
            table_border: Some(TableBorder::normal()),
        }
    }

    /// Light terminal theme.
    #[must_use]
    pub fn light() -> Self {
        Theme {
            document: Some(ElementStyle::new()),
            paragraph: Some(ElementStyle::new().margin(1)),

            heading: Some(ElementStyle::new().bold(true).margin(1)),
            h1: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BLUE))
                    .bold(true)
                    .prefix("# "),
            ),
            h2: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_GREEN))
                    .bold(true)
                    .prefix("## "),
            ),
            h3: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_YELLOW))
                    .bold(true)
                    .prefix("### "),
            ),
            h4: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_MAGENTA))
                    .bold(true)
                    .prefix("#### "),
            ),
            h5: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_CYAN))
                    .bold(true)
                    .prefix("##### "),
            ),
            h6: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BLACK))
                    .bold(true)
                    .prefix("###### "),
            ),

            blockquote: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_BLACK))
                    .italic(true)
                    .prefix("│ ")
                    .indent(2)
                    .margin(1),
            ),

            code_block: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BLACK))
                    .background(Color::Indexed(sgr::BG_WHITE))
                    .padding(1)
                    .margin(1),
            ),

            list: Some(ElementStyle::new().margin(1)),
            list_item: Some(ElementStyle::new().indent(2)),

            table: Some(ElementStyle::new().margin(1)),
            table_header: Some(
                ElementStyle::new()
                    .bold(true)
                    .color(Color::Indexed(sgr::FG_BLUE)),
            ),
            table_cell: Some(ElementStyle::new()),

            horizontal_rule: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_BLACK))
                    .margin(1),
            ),

            text: Some(ElementStyle::new()),
            strong: Some(ElementStyle::new().bold(true)),
            emphasis: Some(ElementStyle::new().italic(true)),
            code: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_RED))
                    .background(Color::Indexed(sgr::BG_WHITE)),
            ),
            link: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BLUE))
                    .underline(true),
            ),
            image: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_MAGENTA))
                    .prefix("🖼 "),
            ),
            strikethrough: Some(ElementStyle::new().strikethrough(true).dim(true)),

            bullet: Some("•".into()),
            bullet_color: Some(sgr::FG_BLUE),
            checkbox: Some(Checkbox::new("✓", "○")),
            rule_char: Some("─".into()),
            table_border: Some(TableBorder::normal()),
        }
    }

    /// ASCII-only theme: keeps colors but swaps every glyph for a plain
    /// ASCII equivalent, including the table border set.
    #[must_use]
    pub fn ascii() -> Self {
        Theme {
            document: Some(ElementStyle::new()),
            paragraph: Some(ElementStyle::new().margin(1)),

            heading: Some(ElementStyle::new().bold(true).margin(1)),
            h1: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_CYAN))
                    .bold(true)
                    .prefix("# "),
            ),
            h2: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_GREEN))
                    .bold(true)
                    .prefix("## "),
            ),
            h3: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_YELLOW))
                    .bold(true)
                    .prefix("### "),
            ),
            h4: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_MAGENTA))
                    .bold(true)
                    .prefix("#### "),
            ),
            h5: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_BLUE))
                    .bold(true)
                    .prefix("##### "),
            ),
            h6: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_WHITE))
                    .bold(true)
                    .prefix("###### "),
            ),

            blockquote: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_BLACK))
                    .italic(true)
                    .prefix("| ")
                    .indent(2)
                    .margin(1),
            ),

            code_block: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_WHITE))
                    .padding(1)
                    .margin(1),
            ),

            list: Some(ElementStyle::new().margin(1)),
            list_item: Some(ElementStyle::new().indent(2)),

            table: Some(ElementStyle::new().margin(1)),
            table_header: Some(ElementStyle::new().bold(true)),
            table_cell: Some(ElementStyle::new()),

            horizontal_rule: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_BLACK))
                    .margin(1),
            ),

            text: Some(ElementStyle::new()),
            strong: Some(ElementStyle::new().bold(true)),
            emphasis: Some(ElementStyle::new().italic(true)),
            code: Some(ElementStyle::new().color(Color::Indexed(sgr::FG_BRIGHT_YELLOW))),
            link: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_BLUE))
                    .underline(true),
            ),
            image: Some(
                ElementStyle::new()
                    .color(Color::Indexed(sgr::FG_BRIGHT_MAGENTA))
                    .prefix("[IMG] "),
            ),
            strikethrough: Some(ElementStyle::new().strikethrough(true).dim(true)),

            bullet: Some("*".into()),
            bullet_color: Some(sgr::FG_BRIGHT_CYAN),
            checkbox: Some(Checkbox::new("[x]", "[ ]")),
            rule_char: Some("-".into()),
            table_border: Some(TableBorder::ascii()),
        }
    }

    /// No-color theme: structural glyphs only, zero escape sequences.
    #[must_use]
    pub fn no_color() -> Self {
        Theme {
            document: Some(ElementStyle::new()),
            paragraph: Some(ElementStyle::new().margin(1)),

            heading: Some(ElementStyle::new().margin(1)),
            h1: Some(ElementStyle::new().prefix("# ")),
            h2: Some(ElementStyle::new().prefix("## ")),
            h3: Some(ElementStyle::new().prefix("### ")),
            h4: Some(ElementStyle::new().prefix("#### ")),
            h5: Some(ElementStyle::new().prefix("##### ")),
            h6: Some(ElementStyle::new().prefix("###### ")),

            blockquote: Some(ElementStyle::new().prefix("> ").indent(2).margin(1)),
            code_block: Some(ElementStyle::new().padding(1).margin(1)),
            list: Some(ElementStyle::new().margin(1)),
            list_item: Some(ElementStyle::new().indent(2)),

            table: Some(ElementStyle::new().margin(1)),
            table_header: Some(ElementStyle::new()),
            table_cell: Some(ElementStyle::new()),

            horizontal_rule: Some(ElementStyle::new().margin(1)),

            text: Some(ElementStyle::new()),
            strong: Some(ElementStyle::new()),
            emphasis: Some(ElementStyle::new()),
            code: Some(ElementStyle::new()),
            link: Some(ElementStyle::new()),
            image: Some(ElementStyle::new().prefix("[IMG] ")),
            strikethrough: Some(ElementStyle::new()),

            bullet: Some("-".into()),
            bullet_color: None,
            checkbox: Some(Checkbox::new("[x]", "[ ]")),
            rule_char: Some("-".into()),
            table_border: Some(TableBorder::ascii()),
        }
    }
}
