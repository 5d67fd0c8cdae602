#![forbid(unsafe_code)]

//! # Inkdown
//!
//! Theme-driven markdown rendering for terminal output.
//!
//! Inkdown transforms a markdown document into a single styled string
//! with embedded ANSI escape sequences: styled headings and inline
//! emphasis, word-wrapped paragraphs, prefixed blockquotes, and
//! box-drawn tables. Four built-in themes are provided (dark, light,
//! ascii, no-color), and custom themes are produced by merging partial
//! overrides over a preset.
//!
//! ## Example
//!
//! ```rust
//! use inkdown::{render, Renderer, ThemePreset};
//!
//! // Quick render with a preset
//! let out = render("# Hello\n\nThis is **bold** text.", ThemePreset::Dark);
//! assert!(inkdown::ansi::strip(&out).contains("# Hello"));
//!
//! // Custom renderer with word wrap
//! let renderer = Renderer::new()
//!     .with_preset(ThemePreset::Light)
//!     .with_width(80)
//!     .with_show_urls(true);
//! let out = renderer.render("See [docs](https://example.com).");
//! ```
//!
//! Callers needing plain text can recover it with [`ansi::strip`].

use std::collections::HashMap;
use std::str::FromStr;

pub mod ansi;
mod render;
pub mod theme;
pub mod tree;
pub mod wrap;

mod table;

pub use theme::{Checkbox, Color, ElementStyle, TableBorder, Theme};
pub use tree::{Block, Inline, ListItem};

/// Errors surfaced at the API boundary.
///
/// Rendering itself never fails: unknown constructs and missing style
/// entries degrade instead of erroring.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bytes handed to [`Renderer::render_bytes`] were not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    /// A theme name did not match any built-in preset.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
}

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThemePreset {
    /// Dark terminal theme (the default).
    #[default]
    Dark,
    /// Light terminal theme.
    Light,
    /// ASCII-only glyphs, colors kept.
    Ascii,
    /// No styling at all, structural glyphs only.
    NoColor,
}

impl ThemePreset {
    /// Builds the theme value for this preset.
    #[must_use]
    pub fn config(&self) -> Theme {
        match self {
            ThemePreset::Dark => Theme::dark(),
            ThemePreset::Light => Theme::light(),
            ThemePreset::Ascii => Theme::ascii(),
            ThemePreset::NoColor => Theme::no_color(),
        }
    }

    /// The canonical name of this preset.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Dark => "dark",
            ThemePreset::Light => "light",
            ThemePreset::Ascii => "ascii",
            ThemePreset::NoColor => "nocolor",
        }
    }
}

impl FromStr for ThemePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemePreset::Dark),
            "light" => Ok(ThemePreset::Light),
            "ascii" => Ok(ThemePreset::Ascii),
            "nocolor" | "no-color" => Ok(ThemePreset::NoColor),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

/// Available preset names for configuration surfaces.
#[must_use]
pub fn available_themes() -> HashMap<&'static str, ThemePreset> {
    let mut themes = HashMap::new();
    themes.insert("dark", ThemePreset::Dark);
    themes.insert("light", ThemePreset::Light);
    themes.insert("ascii", ThemePreset::Ascii);
    themes.insert("nocolor", ThemePreset::NoColor);
    themes
}

/// Options for the markdown renderer.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Theme to render with.
    pub theme: Theme,
    /// Wrap width in columns. 0 disables wrapping.
    pub width: usize,
    /// Whether to append link URLs after link text.
    pub show_urls: bool,
    /// Reserved for inline reflow; only paragraph-level wrapping consults
    /// the width today.
    pub soft_wrap: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::dark(),
            width: 0,
            show_urls: false,
            soft_wrap: true,
        }
    }
}

/// Markdown renderer for terminal output.
///
/// A renderer is a plain value holding [`RenderOptions`]; each render
/// call is an independent pure function of its input, so one renderer
/// can serve any number of unsynchronized concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Creates a renderer with default options (dark theme, no wrap).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.options.theme = theme;
        self
    }

    /// Sets the theme from a built-in preset.
    #[must_use]
    pub fn with_preset(mut self, preset: ThemePreset) -> Self {
        self.options.theme = preset.config();
        self
    }

    /// Sets the wrap width. 0 disables wrapping.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.options.width = width;
        self
    }

    /// Sets whether link URLs are appended after link text.
    #[must_use]
    pub fn with_show_urls(mut self, show: bool) -> Self {
        self.options.show_urls = show;
        self
    }

    /// Sets the soft-wrap flag (reserved).
    #[must_use]
    pub fn with_soft_wrap(mut self, soft: bool) -> Self {
        self.options.soft_wrap = soft;
        self
    }

    /// The current options.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders markdown text to styled terminal output.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        self.render_blocks(&tree::parse(markdown))
    }

    /// Renders an already-built document tree.
    #[must_use]
    pub fn render_blocks(&self, blocks: &[Block]) -> String {
        render::document(blocks, &self.options)
    }

    /// Renders markdown bytes, failing on invalid UTF-8.
    pub fn render_bytes(&self, markdown: &[u8]) -> Result<String, Error> {
        let text = std::str::from_utf8(markdown)?;
        Ok(self.render(text))
    }
}

/// Renders markdown with a built-in preset theme.
#[must_use]
pub fn render(markdown: &str, preset: ThemePreset) -> String {
    Renderer::new().with_preset(preset).render(markdown)
}

/// Renders markdown with explicit options.
#[must_use]
pub fn render_with_options(markdown: &str, options: RenderOptions) -> String {
    Renderer { options }.render(markdown)
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::theme::{Checkbox, Color, ElementStyle, TableBorder, Theme};
    pub use crate::tree::{Block, Inline, ListItem};
    pub use crate::{
        available_themes, render, render_with_options, RenderOptions, Renderer, ThemePreset,
    };
}
