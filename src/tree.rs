//! Document tree node types and the markdown front-end that builds them.
//!
//! The renderer consumes an ordered tree of typed [`Block`] and [`Inline`]
//! nodes. Trees normally come from [`parse`], which drives pulldown-cmark
//! with the GFM extensions the renderer understands (tables,
//! strikethrough, task lists), but callers are free to construct nodes
//! directly and hand them to
//! [`Renderer::render_blocks`](crate::Renderer::render_blocks).
//!
//! Markdown constructs outside this node set (footnote definitions and
//! similar containers) are degraded permissively while building: container
//! constructs contribute their children as sibling blocks, leaf constructs
//! with text contribute their text, and everything else is dropped.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// A block-level document node.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A heading with level 1–6.
    Heading { level: u8, content: Vec<Inline> },
    /// A paragraph of inline content.
    Paragraph(Vec<Inline>),
    /// A quoted group of blocks.
    BlockQuote(Vec<Block>),
    /// A fenced or indented code block with an optional language tag.
    CodeBlock {
        text: String,
        language: Option<String>,
    },
    /// An ordered or unordered list.
    List { ordered: bool, items: Vec<ListItem> },
    /// A thematic break.
    HorizontalRule,
    /// A table: one header row plus body rows, each cell holding inline
    /// content.
    Table {
        header: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
    /// A raw HTML block, rendered with tags stripped.
    Html(String),
    /// Vertical blank space. Renders as nothing; spacing comes from
    /// margins.
    Blank,
}

/// One item of a [`Block::List`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    /// Whether this is a task list item.
    pub task: bool,
    /// Checked state, meaningful only when `task` is set.
    pub checked: bool,
    /// The item's block children.
    pub children: Vec<Block>,
}

/// An inline node.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Plain text, emitted verbatim.
    Text(String),
    /// Strong emphasis.
    Strong(Vec<Inline>),
    /// Emphasis.
    Emphasis(Vec<Inline>),
    /// An inline code span. Leaf content, never nested.
    Code(String),
    /// Struck-through content.
    Strikethrough(Vec<Inline>),
    /// A hyperlink.
    Link { href: String, content: Vec<Inline> },
    /// An image reference, rendered via its alt text.
    Image { href: String, alt: String },
    /// A hard line break.
    LineBreak,
    /// A backslash-escaped character, emitted verbatim.
    Escaped(String),
}

/// Parses markdown text into a document tree.
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    let builder = TreeBuilder::default();
    builder.build(Parser::new_ext(markdown, options))
}

/// An open block container on the builder's scope stack.
enum Scope {
    Quote(Vec<Block>),
    List { ordered: bool, items: Vec<ListItem> },
    Item { task: bool, checked: bool, children: Vec<Block> },
}

/// The leaf block currently collecting content, if any.
#[derive(Default)]
enum Leaf {
    #[default]
    None,
    Paragraph,
    Heading(u8),
    Code {
        language: Option<String>,
        text: String,
    },
    Html(String),
    Table(TableScope),
}

#[derive(Default)]
struct TableScope {
    header: Vec<Vec<Inline>>,
    rows: Vec<Vec<Vec<Inline>>>,
    current: Vec<Vec<Inline>>,
    in_head: bool,
}

/// An open inline span; `outer` holds the content collected before the
/// span opened.
struct Span {
    kind: SpanKind,
    outer: Vec<Inline>,
}

enum SpanKind {
    Strong,
    Emphasis,
    Strikethrough,
    Link { href: String },
    Image { href: String },
}

#[derive(Default)]
struct TreeBuilder {
    document: Vec<Block>,
    scopes: Vec<Scope>,
    spans: Vec<Span>,
    inline: Vec<Inline>,
    leaf: Leaf,
}

impl TreeBuilder {
    fn build(mut self, parser: Parser<'_>) -> Vec<Block> {
        for event in parser {
            self.handle(event);
        }
        self.finish()
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),

            Event::Text(text) => match &mut self.leaf {
                Leaf::Code { text: body, .. } => body.push_str(&text),
                Leaf::Html(body) => body.push_str(&text),
                _ => self.inline.push(Inline::Text(text.into_string())),
            },
            Event::Code(code) => self.inline.push(Inline::Code(code.into_string())),

            Event::Html(html) => match &mut self.leaf {
                Leaf::Html(body) => body.push_str(&html),
                _ => self.push_block(Block::Html(html.into_string())),
            },
            Event::InlineHtml(html) => self.inline.push(Inline::Text(html.into_string())),

            Event::SoftBreak => self.inline.push(Inline::Text("\n".into())),
            Event::HardBreak => self.inline.push(Inline::LineBreak),
            Event::Rule => {
                self.flush_dangling();
                self.push_block(Block::HorizontalRule);
            }

            Event::TaskListMarker(done) => {
                if let Some(Scope::Item { task, checked, .. }) = self.scopes.last_mut() {
                    *task = true;
                    *checked = done;
                }
            }

            // Leaf constructs outside the node set contribute their text.
            Event::FootnoteReference(name) => {
                self.inline.push(Inline::Text(format!("[^{name}]")));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.flush_dangling();
                self.leaf = Leaf::Paragraph;
            }
            Tag::Heading { level, .. } => {
                self.flush_dangling();
                self.leaf = Leaf::Heading(heading_level(level));
            }
            Tag::BlockQuote(_) => {
                self.flush_dangling();
                self.scopes.push(Scope::Quote(Vec::new()));
            }
            Tag::CodeBlock(kind) => {
                self.flush_dangling();
                let language = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.into_string()),
                    _ => None,
                };
                self.leaf = Leaf::Code {
                    language,
                    text: String::new(),
                };
            }
            Tag::HtmlBlock => {
                self.flush_dangling();
                self.leaf = Leaf::Html(String::new());
            }
            Tag::List(start) => {
                self.flush_dangling();
                self.scopes.push(Scope::List {
                    ordered: start.is_some(),
                    items: Vec::new(),
                });
            }
            Tag::Item => {
                self.scopes.push(Scope::Item {
                    task: false,
                    checked: false,
                    children: Vec::new(),
                });
            }
            Tag::Table(_) => {
                self.flush_dangling();
                self.leaf = Leaf::Table(TableScope::default());
            }
            Tag::TableHead => {
                if let Leaf::Table(table) = &mut self.leaf {
                    table.in_head = true;
                }
            }
            Tag::TableRow | Tag::TableCell => {}

            Tag::Emphasis => self.open_span(SpanKind::Emphasis),
            Tag::Strong => self.open_span(SpanKind::Strong),
            Tag::Strikethrough => self.open_span(SpanKind::Strikethrough),
            Tag::Link { dest_url, .. } => self.open_span(SpanKind::Link {
                href: dest_url.into_string(),
            }),
            Tag::Image { dest_url, .. } => self.open_span(SpanKind::Image {
                href: dest_url.into_string(),
            }),

            // Containers outside the node set pass their children through
            // as sibling blocks at this level.
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if matches!(self.leaf, Leaf::Paragraph) {
                    self.leaf = Leaf::None;
                    let content = std::mem::take(&mut self.inline);
                    self.push_block(Block::Paragraph(content));
                }
            }
            TagEnd::Heading(_) => {
                if let Leaf::Heading(level) = std::mem::take(&mut self.leaf) {
                    let content = std::mem::take(&mut self.inline);
                    self.push_block(Block::Heading { level, content });
                }
            }
            TagEnd::BlockQuote(_) => {
                self.flush_dangling();
                if let Some(Scope::Quote(children)) = self.scopes.pop() {
                    self.push_block(Block::BlockQuote(children));
                }
            }
            TagEnd::CodeBlock => {
                if let Leaf::Code { language, mut text } = std::mem::take(&mut self.leaf) {
                    if text.ends_with('\n') {
                        text.pop();
                    }
                    self.push_block(Block::CodeBlock { text, language });
                }
            }
            TagEnd::HtmlBlock => {
                if let Leaf::Html(mut text) = std::mem::take(&mut self.leaf) {
                    if text.ends_with('\n') {
                        text.pop();
                    }
                    self.push_block(Block::Html(text));
                }
            }
            TagEnd::List(_) => {
                if let Some(Scope::List { ordered, items }) = self.scopes.pop() {
                    self.push_block(Block::List { ordered, items });
                }
            }
            TagEnd::Item => {
                self.flush_dangling();
                if let Some(Scope::Item {
                    task,
                    checked,
                    children,
                }) = self.scopes.pop()
                {
                    if let Some(Scope::List { items, .. }) = self.scopes.last_mut() {
                        items.push(ListItem {
                            task,
                            checked,
                            children,
                        });
                    }
                }
            }
            TagEnd::Table => {
                if let Leaf::Table(table) = std::mem::take(&mut self.leaf) {
                    self.push_block(Block::Table {
                        header: table.header,
                        rows: table.rows,
                    });
                }
            }
            TagEnd::TableHead => {
                if let Leaf::Table(table) = &mut self.leaf {
                    table.in_head = false;
                    table.header = std::mem::take(&mut table.current);
                }
            }
            TagEnd::TableRow => {
                if let Leaf::Table(table) = &mut self.leaf {
                    let row = std::mem::take(&mut table.current);
                    table.rows.push(row);
                }
            }
            TagEnd::TableCell => {
                let cell = std::mem::take(&mut self.inline);
                if let Leaf::Table(table) = &mut self.leaf {
                    table.current.push(cell);
                }
            }

            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link
            | TagEnd::Image => self.close_span(),

            _ => {}
        }
    }

    fn open_span(&mut self, kind: SpanKind) {
        let outer = std::mem::take(&mut self.inline);
        self.spans.push(Span { kind, outer });
    }

    fn close_span(&mut self) {
        if let Some(Span { kind, outer }) = self.spans.pop() {
            let content = std::mem::replace(&mut self.inline, outer);
            let node = match kind {
                SpanKind::Strong => Inline::Strong(content),
                SpanKind::Emphasis => Inline::Emphasis(content),
                SpanKind::Strikethrough => Inline::Strikethrough(content),
                SpanKind::Link { href } => Inline::Link { href, content },
                SpanKind::Image { href } => Inline::Image {
                    href,
                    alt: collect_text(&content),
                },
            };
            self.inline.push(node);
        }
    }

    /// Appends a finished block to the innermost open container.
    fn push_block(&mut self, block: Block) {
        match self.scopes.last_mut() {
            Some(Scope::Quote(children) | Scope::Item { children, .. }) => children.push(block),
            Some(Scope::List { items, .. }) => {
                // Unreachable from the parser; keep the child on the last
                // item rather than losing it.
                if let Some(item) = items.last_mut() {
                    item.children.push(block);
                }
            }
            None => self.document.push(block),
        }
    }

    /// Wraps any pending bare inline content (tight list items, stray
    /// text) into a paragraph before a block boundary.
    fn flush_dangling(&mut self) {
        while !self.spans.is_empty() {
            self.close_span();
        }
        if !self.inline.is_empty() {
            let content = std::mem::take(&mut self.inline);
            self.push_block(Block::Paragraph(content));
        }
    }

    fn finish(mut self) -> Vec<Block> {
        // Drain any leaf left open by malformed input.
        match std::mem::take(&mut self.leaf) {
            Leaf::None | Leaf::Paragraph => {}
            Leaf::Heading(level) => {
                let content = std::mem::take(&mut self.inline);
                self.push_block(Block::Heading { level, content });
            }
            Leaf::Code { language, text } => {
                self.push_block(Block::CodeBlock { text, language });
            }
            Leaf::Html(text) => self.push_block(Block::Html(text)),
            Leaf::Table(table) => self.push_block(Block::Table {
                header: table.header,
                rows: table.rows,
            }),
        }
        self.flush_dangling();
        while let Some(scope) = self.scopes.pop() {
            match scope {
                Scope::Quote(children) => self.push_block(Block::BlockQuote(children)),
                Scope::List { ordered, items } => self.push_block(Block::List { ordered, items }),
                Scope::Item {
                    task,
                    checked,
                    children,
                } => {
                    let item = ListItem {
                        task,
                        checked,
                        children,
                    };
                    if let Some(Scope::List { items, .. }) = self.scopes.last_mut() {
                        items.push(item);
                    } else {
                        self.push_block(Block::List {
                            ordered: false,
                            items: vec![item],
                        });
                    }
                }
            }
        }
        self.document
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Flattens inline content to its plain text, used for image alt text.
fn collect_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) | Inline::Code(t) | Inline::Escaped(t) => out.push_str(t),
            Inline::Strong(c) | Inline::Emphasis(c) | Inline::Strikethrough(c) => {
                out.push_str(&collect_text(c));
            }
            Inline::Link { content, .. } => out.push_str(&collect_text(content)),
            Inline::Image { alt, .. } => out.push_str(alt),
            Inline::LineBreak => out.push(' '),
        }
    }
    out
}
