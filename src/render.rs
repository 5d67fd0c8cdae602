//! Recursive transform from document tree to styled terminal text.
//!
//! Rendering threads a mutable [`RenderContext`] through the descent.
//! Handlers for nested constructs (blockquotes, lists) save, modify, and
//! restore the relevant fields around their recursive calls so that
//! sibling subtrees never observe each other's state.

use crate::ansi;
use crate::table;
use crate::theme::ElementStyle;
use crate::tree::{Block, Inline, ListItem};
use crate::wrap::wrap;
use crate::RenderOptions;
use std::fmt::Write as _;

/// Mutable state threaded through one render call.
struct RenderContext<'a> {
    options: &'a RenderOptions,
    /// Accumulated left indent from enclosing constructs.
    indent: usize,
    /// Current list nesting depth.
    list_depth: usize,
    /// 1-based item counter per list depth, for ordered numbering.
    list_index: Vec<usize>,
    in_blockquote: bool,
}

/// Renders a document tree to a single styled string.
pub(crate) fn document(blocks: &[Block], options: &RenderOptions) -> String {
    tracing::trace!(
        blocks = blocks.len(),
        width = options.width,
        "rendering document"
    );
    let mut ctx = RenderContext {
        options,
        indent: 0,
        list_depth: 0,
        list_index: Vec::new(),
        in_blockquote: false,
    };
    let rendered: Vec<String> = blocks.iter().map(|b| render_block(b, &mut ctx)).collect();
    collapse_blank_lines(&rendered.join("\n")).trim().to_string()
}

/// Collapses every run of 3+ newlines to exactly 2.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    for c in text.chars() {
        if c == '\n' {
            run += 1;
            if run <= 2 {
                out.push(c);
            }
        } else {
            run = 0;
            out.push(c);
        }
    }
    out
}

fn apply(text: &str, style: Option<&ElementStyle>) -> String {
    match style {
        Some(style) => style.apply(text),
        None => text.to_string(),
    }
}

/// Surrounds `text` with `margin` blank lines on each side.
fn add_margin(text: String, margin: Option<usize>) -> String {
    match margin {
        None | Some(0) => text,
        Some(m) => {
            let pad = "\n".repeat(m);
            format!("{pad}{text}{pad}")
        }
    }
}

/// Whether a style sets anything that produces escape sequences.
fn is_visually_styled(style: &ElementStyle) -> bool {
    style.color.is_some()
        || style.background.is_some()
        || style.bold == Some(true)
        || style.italic == Some(true)
        || style.underline == Some(true)
        || style.strikethrough == Some(true)
        || style.dim == Some(true)
        || style.inverse == Some(true)
}

fn render_block(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let options = ctx.options;
    let theme = &options.theme;
    match block {
        Block::Heading { level, content } => {
            let style = theme.heading_style(*level);
            let text = render_inlines(content, ctx);
            add_margin(apply(&text, style), style.and_then(|s| s.margin))
        }

        Block::Paragraph(content) => {
            let mut text = render_inlines(content, ctx);
            if options.width > 0 {
                text = wrap(&text, options.width, ctx.indent);
            }
            let style = theme.paragraph.as_ref();
            add_margin(apply(&text, style), style.and_then(|s| s.margin))
        }

        Block::BlockQuote(children) => {
            let style = theme.blockquote.as_ref();
            let indent = style.and_then(|s| s.indent).unwrap_or(0);
            let was_quoted = ctx.in_blockquote;
            ctx.in_blockquote = true;
            ctx.indent += indent;

            let content: Vec<String> = children.iter().map(|b| render_block(b, ctx)).collect();

            ctx.indent -= indent;
            ctx.in_blockquote = was_quoted;

            let prefix = style.and_then(|s| s.prefix.as_deref()).unwrap_or("│ ");
            let prefixed: Vec<String> = content
                .join("\n")
                .split('\n')
                .map(|line| format!("{prefix}{line}"))
                .collect();

            // The prefix is consumed by the per-line pass above; strip it
            // from the style before applying the whole-block attributes so
            // the first line is not prefixed twice.
            let block_style = style.map(|s| ElementStyle {
                prefix: None,
                ..s.clone()
            });
            add_margin(
                apply(&prefixed.join("\n"), block_style.as_ref()),
                style.and_then(|s| s.margin),
            )
        }

        Block::CodeBlock { text, language } => {
            let style = theme.code_block.as_ref();
            let padding = style.and_then(|s| s.padding).unwrap_or(0);
            let pad = " ".repeat(padding);
            let body: Vec<String> = text
                .split('\n')
                .map(|line| format!("{pad}{line}{pad}"))
                .collect();
            let mut content = body.join("\n");
            if let Some(lang) = language {
                // Label is dimmed only for themes that style code blocks,
                // so colorless themes stay escape-free.
                let label = if style.is_some_and(is_visually_styled) {
                    ElementStyle::new().dim(true).apply(lang)
                } else {
                    lang.clone()
                };
                content = format!("{label}\n{content}");
            }
            add_margin(apply(&content, style), style.and_then(|s| s.margin))
        }

        Block::List { ordered, items } => {
            ctx.list_depth += 1;
            ctx.list_index.push(0);
            let rendered: Vec<String> = items
                .iter()
                .enumerate()
                .map(|(idx, item)| {
                    ctx.list_index[ctx.list_depth - 1] = idx + 1;
                    render_list_item(item, *ordered, ctx)
                })
                .collect();
            ctx.list_index.pop();
            ctx.list_depth -= 1;

            add_margin(
                rendered.join("\n"),
                theme.list.as_ref().and_then(|s| s.margin),
            )
        }

        Block::HorizontalRule => {
            let style = theme.horizontal_rule.as_ref();
            let fill = theme.rule_char.as_deref().unwrap_or("─");
            let width = if options.width > 0 { options.width } else { 40 };
            let line = fill.repeat(width);
            add_margin(apply(&line, style), style.and_then(|s| s.margin))
        }

        Block::Table { header, rows } => {
            let header: Vec<String> = header.iter().map(|c| render_inlines(c, ctx)).collect();
            let rows: Vec<Vec<String>> = rows
                .iter()
                .map(|row| row.iter().map(|c| render_inlines(c, ctx)).collect())
                .collect();
            add_margin(
                table::layout(&header, &rows, theme),
                theme.table.as_ref().and_then(|s| s.margin),
            )
        }

        Block::Html(text) => strip_tags(text),

        Block::Blank => String::new(),
    }
}

fn render_list_item(item: &ListItem, ordered: bool, ctx: &mut RenderContext<'_>) -> String {
    let options = ctx.options;
    let theme = &options.theme;
    let per_level = theme
        .list_item
        .as_ref()
        .and_then(|s| s.indent)
        .unwrap_or(2);
    let indent = " ".repeat((ctx.list_depth - 1) * per_level);

    let marker = if item.task {
        let glyph = match &theme.checkbox {
            Some(boxes) if item.checked => boxes.checked.as_str(),
            Some(boxes) => boxes.unchecked.as_str(),
            None if item.checked => "✓",
            None => "○",
        };
        format!("{glyph} ")
    } else if ordered {
        format!("{}. ", ctx.list_index[ctx.list_depth - 1])
    } else {
        let bullet = theme.bullet.as_deref().unwrap_or("•");
        match theme.bullet_color {
            Some(code) => format!("{} ", ansi::apply(bullet, &[code])),
            None => format!("{bullet} "),
        }
    };

    // A leading paragraph child is the item's first-line prose; render it
    // inline rather than as a margined block.
    let content = match item.children.as_slice() {
        [Block::Paragraph(inlines), rest @ ..] => {
            let mut out = render_inlines(inlines, ctx);
            for child in rest {
                out.push_str(&render_block(child, ctx));
            }
            out
        }
        children => children
            .iter()
            .map(|b| render_block(b, ctx))
            .collect::<Vec<_>>()
            .join(""),
    };

    format!("{indent}{marker}{content}")
}

fn render_inlines(inlines: &[Inline], ctx: &RenderContext<'_>) -> String {
    let theme = &ctx.options.theme;
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(text) | Inline::Escaped(text) => out.push_str(text),
            Inline::Strong(children) => {
                let text = render_inlines(children, ctx);
                out.push_str(&apply(&text, theme.strong.as_ref()));
            }
            Inline::Emphasis(children) => {
                let text = render_inlines(children, ctx);
                out.push_str(&apply(&text, theme.emphasis.as_ref()));
            }
            Inline::Strikethrough(children) => {
                let text = render_inlines(children, ctx);
                out.push_str(&apply(&text, theme.strikethrough.as_ref()));
            }
            Inline::Code(code) => out.push_str(&apply(code, theme.code.as_ref())),
            Inline::Link { href, content } => {
                let mut text = render_inlines(content, ctx);
                if ctx.options.show_urls && !href.is_empty() {
                    let _ = write!(text, " ({href})");
                }
                out.push_str(&apply(&text, theme.link.as_ref()));
            }
            Inline::Image { href, alt } => {
                let text = if alt.is_empty() { href } else { alt };
                out.push_str(&apply(text, theme.image.as_ref()));
            }
            Inline::LineBreak => out.push('\n'),
        }
    }
    out
}

/// Removes `<...>` tag spans textually; content between tags passes
/// through unchanged. No HTML semantics.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(offset) => rest = &rest[start + offset + 1..],
            None => {
                // unterminated tag, keep verbatim
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn options(theme: Theme) -> RenderOptions {
        RenderOptions {
            theme,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn collapse_caps_newline_runs_at_two() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("ab"), "ab");
    }

    #[test]
    fn strip_tags_removes_markup_keeps_text() {
        assert_eq!(strip_tags("<div>hello <b>world</b></div>"), "hello world");
        assert_eq!(strip_tags("no tags"), "no tags");
        assert_eq!(strip_tags("a < b and c > d"), "a  d");
    }

    #[test]
    fn strip_tags_keeps_unterminated_bracket() {
        assert_eq!(strip_tags("before <unclosed"), "before <unclosed");
    }

    #[test]
    fn blank_nodes_render_to_nothing() {
        let opts = options(Theme::no_color());
        let out = document(
            &[
                Block::Paragraph(vec![Inline::Text("a".into())]),
                Block::Blank,
                Block::Paragraph(vec![Inline::Text("b".into())]),
            ],
            &opts,
        );
        assert_eq!(out, "a\n\nb");
    }

    #[test]
    fn margins_become_blank_lines() {
        let opts = options(Theme::no_color());
        let out = document(
            &[
                Block::Heading {
                    level: 1,
                    content: vec![Inline::Text("T".into())],
                },
                Block::Paragraph(vec![Inline::Text("body".into())]),
            ],
            &opts,
        );
        // paragraph margin 1 separates the blocks with one blank line
        assert_eq!(out, "# T\n\nbody");
    }

    #[test]
    fn unordered_items_use_theme_bullet() {
        let opts = options(Theme::no_color());
        let items = vec![
            ListItem {
                children: vec![Block::Paragraph(vec![Inline::Text("one".into())])],
                ..ListItem::default()
            },
            ListItem {
                children: vec![Block::Paragraph(vec![Inline::Text("two".into())])],
                ..ListItem::default()
            },
        ];
        let out = document(
            &[Block::List {
                ordered: false,
                items,
            }],
            &opts,
        );
        assert_eq!(out, "- one\n- two");
    }

    #[test]
    fn ordered_items_number_from_one_per_depth() {
        let opts = options(Theme::no_color());
        let inner = Block::List {
            ordered: true,
            items: vec![ListItem {
                children: vec![Block::Paragraph(vec![Inline::Text("nested".into())])],
                ..ListItem::default()
            }],
        };
        let items = vec![
            ListItem {
                children: vec![
                    Block::Paragraph(vec![Inline::Text("first".into())]),
                    inner,
                ],
                ..ListItem::default()
            },
            ListItem {
                children: vec![Block::Paragraph(vec![Inline::Text("second".into())])],
                ..ListItem::default()
            },
        ];
        let out = document(
            &[Block::List {
                ordered: true,
                items,
            }],
            &opts,
        );
        assert!(out.contains("1. first"));
        assert!(out.contains("  1. nested"));
        assert!(out.contains("2. second"));
    }

    #[test]
    fn link_href_shown_only_when_enabled() {
        let theme = Theme::no_color();
        let link = Block::Paragraph(vec![Inline::Link {
            href: "https://example.com".into(),
            content: vec![Inline::Text("site".into())],
        }]);
        let hidden = document(&[link.clone()], &options(theme.clone()));
        assert_eq!(hidden, "site");
        let opts = RenderOptions {
            theme,
            show_urls: true,
            ..RenderOptions::default()
        };
        let shown = document(&[link], &opts);
        assert_eq!(shown, "site (https://example.com)");
    }

    #[test]
    fn image_alt_falls_back_to_href() {
        let opts = options(Theme::no_color());
        let out = document(
            &[Block::Paragraph(vec![Inline::Image {
                href: "pic.png".into(),
                alt: String::new(),
            }])],
            &opts,
        );
        assert_eq!(out, "[IMG] pic.png");
    }

    #[test]
    fn code_label_is_plain_for_unstyled_themes() {
        let opts = options(Theme::no_color());
        let out = document(
            &[Block::CodeBlock {
                text: "x = 1".into(),
                language: Some("py".into()),
            }],
            &opts,
        );
        // the final trim removes the last line's trailing pad
        assert_eq!(out, "py\n x = 1");
    }
}
