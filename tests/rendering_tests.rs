//! End-to-end rendering scenarios across themes and markdown features.

use inkdown::{ansi, render, Renderer, Theme, ThemePreset};

// =============================================================================
// Headings
// =============================================================================

#[test]
fn heading_keeps_hash_prefix() {
    let out = render("# Hello", ThemePreset::Dark);
    assert!(ansi::strip(&out).contains("# Hello"));
}

#[test]
fn all_heading_levels_render_their_prefix() {
    let md = "# H1\n## H2\n### H3\n#### H4\n##### H5\n###### H6";
    let plain = ansi::strip(&render(md, ThemePreset::NoColor));
    for level in 1..=6 {
        let prefix = "#".repeat(level);
        assert!(
            plain.contains(&format!("{prefix} H{level}")),
            "missing level {level} in {plain:?}"
        );
    }
}

#[test]
fn heading_level_without_specific_style_uses_generic_margin() {
    // h4 removed: the generic heading style (margin 1) applies instead
    let theme = Theme {
        h4: None,
        ..Theme::no_color()
    };
    let out = Renderer::new()
        .with_theme(theme)
        .render("intro\n\n#### Deep\n\noutro");
    assert!(out.contains("\n\nDeep\n\n"));
}

// =============================================================================
// Paragraphs and wrapping
// =============================================================================

#[test]
fn paragraph_wraps_to_width() {
    let out = Renderer::new()
        .with_preset(ThemePreset::NoColor)
        .with_width(20)
        .render("one two three four five six seven eight nine ten");
    for line in out.lines() {
        assert!(
            ansi::visible_length(line) <= 20,
            "line exceeds width: {line:?}"
        );
    }
    assert!(out.lines().count() > 1);
}

#[test]
fn zero_width_never_wraps() {
    let text = "a considerably long paragraph that would definitely wrap at eighty columns if wrapping were enabled here";
    let out = Renderer::new()
        .with_preset(ThemePreset::NoColor)
        .render(text);
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn styled_paragraph_wraps_by_visible_length() {
    let out = Renderer::new()
        .with_preset(ThemePreset::Dark)
        .with_width(24)
        .render("plain **bold bold bold** plain *italic italic* end");
    for line in out.lines() {
        assert!(
            ansi::visible_length(line) <= 24,
            "line exceeds width: {:?}",
            ansi::strip(line)
        );
    }
}

// =============================================================================
// Tables
// =============================================================================

#[test]
fn table_draws_bordered_grid() {
    let out = render("| A | B |\n|---|---|\n| 1 | 2 |", ThemePreset::Dark);
    let plain = ansi::strip(&out);
    let lines: Vec<&str> = plain.lines().collect();
    assert_eq!(lines[0], "┌───┬───┐");
    assert_eq!(lines[1], "│ A │ B │");
    assert_eq!(lines[2], "├───┼───┤");
    assert_eq!(lines[3], "│ 1 │ 2 │");
    assert_eq!(lines[4], "└───┴───┘");
}

#[test]
fn ascii_theme_tables_use_ascii_borders() {
    let out = render("| A | B |\n|---|---|\n| 1 | 2 |", ThemePreset::Ascii);
    let plain = ansi::strip(&out);
    assert!(plain.contains("+---+---+"));
    assert!(plain.contains("| A | B |"));
    assert!(!plain.contains('┌'));
}

#[test]
fn table_columns_align_with_styled_cells() {
    let md = "| Name | Role |\n|---|---|\n| **Ada** | engineer |\n| Bo | `ops` |";
    let out = render(md, ThemePreset::Dark);
    let widths: Vec<usize> = out.lines().map(|l| ansi::visible_length(l)).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged table: {widths:?}");
}

// =============================================================================
// Blockquotes
// =============================================================================

#[test]
fn nested_blockquote_prefix_compounds() {
    let out = render("> L1\n>> L2", ThemePreset::NoColor);
    let l1 = out.lines().find(|l| l.contains("L1")).unwrap();
    let l2 = out.lines().find(|l| l.contains("L2")).unwrap();
    assert_eq!(l1.matches("> ").count(), 1, "outer line: {l1:?}");
    assert_eq!(l2.matches("> ").count(), 2, "inner line: {l2:?}");
}

#[test]
fn blockquote_prefixes_every_line() {
    let out = render("> first\n>\n> second", ThemePreset::NoColor);
    for line in out.lines() {
        assert!(line.starts_with('>'), "unprefixed line: {line:?}");
    }
}

// =============================================================================
// Lists
// =============================================================================

#[test]
fn ordered_list_numbers_sequentially() {
    let out = render("1. alpha\n1. beta\n1. gamma", ThemePreset::NoColor);
    assert!(out.contains("1. alpha"));
    assert!(out.contains("2. beta"));
    assert!(out.contains("3. gamma"));
}

#[test]
fn nested_list_indents_per_depth() {
    let out = render("- top\n  - mid\n    - deep", ThemePreset::NoColor);
    assert!(out.contains("- top"));
    assert!(out.contains("\n  - mid"));
    assert!(out.contains("\n    - deep"));
}

#[test]
fn task_list_uses_checkbox_glyphs() {
    let out = render("- [x] done\n- [ ] todo", ThemePreset::Ascii);
    let plain = ansi::strip(&out);
    assert!(plain.contains("[x] done"));
    assert!(plain.contains("[ ] todo"));
}

#[test]
fn dark_theme_bullet_is_colored() {
    let out = render("- item", ThemePreset::Dark);
    assert!(out.contains("\x1b[96m•\x1b[0m"));
}

// =============================================================================
// Code
// =============================================================================

#[test]
fn code_block_pads_and_labels_language() {
    let out = render("```rust\nfn main() {}\n```", ThemePreset::Dark);
    let plain = ansi::strip(&out);
    assert!(plain.contains("rust"));
    assert!(plain.contains(" fn main() {} "));
    // the language label is dimmed
    assert!(out.contains("\x1b[2mrust\x1b[0m"));
}

#[test]
fn inline_code_is_styled_verbatim() {
    let out = render("run `cargo check` now", ThemePreset::Dark);
    assert!(ansi::strip(&out).contains("cargo check"));
}

// =============================================================================
// Links and images
// =============================================================================

#[test]
fn link_urls_appended_when_requested() {
    let md = "[docs](https://example.com/docs)";
    let without = Renderer::new().with_preset(ThemePreset::NoColor).render(md);
    assert!(!without.contains("example.com"));
    let with = Renderer::new()
        .with_preset(ThemePreset::NoColor)
        .with_show_urls(true)
        .render(md);
    assert!(with.contains("docs (https://example.com/docs)"));
}

#[test]
fn image_renders_alt_text_with_prefix() {
    let out = render("![a chart](chart.png)", ThemePreset::Ascii);
    assert!(ansi::strip(&out).contains("[IMG] a chart"));
}

// =============================================================================
// Rules, HTML, escapes
// =============================================================================

#[test]
fn horizontal_rule_fills_width() {
    let out = Renderer::new()
        .with_preset(ThemePreset::NoColor)
        .with_width(12)
        .render("---");
    assert!(out.lines().any(|l| l == "-".repeat(12)));
}

#[test]
fn horizontal_rule_falls_back_to_forty_columns() {
    let out = render("---", ThemePreset::NoColor);
    assert!(out.lines().any(|l| l == "-".repeat(40)));
}

#[test]
fn html_blocks_lose_their_tags() {
    let out = render("<div class=\"x\">kept text</div>", ThemePreset::NoColor);
    assert!(out.contains("kept text"));
    assert!(!out.contains("div"));
    assert!(!out.contains('<'));
}

#[test]
fn strikethrough_and_hard_breaks_survive() {
    let out = render("~~gone~~ stays  \nnext line", ThemePreset::NoColor);
    assert!(out.contains("gone"));
    assert!(out.contains("stays\nnext line"));
}

// =============================================================================
// Whole-document normalization
// =============================================================================

#[test]
fn blank_runs_collapse_to_one_blank_line() {
    let md = "first\n\n\n\n\nsecond\n\n\n\nthird";
    let out = render(md, ThemePreset::NoColor);
    assert!(!out.contains("\n\n\n"));
    assert_eq!(out, "first\n\nsecond\n\nthird");
}

#[test]
fn output_has_no_leading_or_trailing_blank_lines() {
    let out = render("\n\n# Title\n\n", ThemePreset::Dark);
    assert!(!out.starts_with('\n'));
    assert!(!out.ends_with('\n'));
}

#[test]
fn no_color_theme_emits_zero_escapes() {
    let md = "# H\n\npara **bold** *em* `code` ~~del~~ [l](http://x)\n\n\
              > quote\n\n- [x] task\n- item\n\n1. one\n\n```rust\nfn x() {}\n```\n\n\
              | A | B |\n|---|---|\n| 1 | 2 |\n\n---\n";
    let out = render(md, ThemePreset::NoColor);
    assert!(!out.contains('\x1b'), "escape found in {out:?}");
}

#[test]
fn stripping_dark_output_equals_structure() {
    let md = "# T\n\nbody text";
    let dark = ansi::strip(&render(md, ThemePreset::Dark));
    assert!(dark.contains("# T"));
    assert!(dark.contains("body text"));
}

// =============================================================================
// Custom themes
// =============================================================================

#[test]
fn merged_theme_overrides_apply_to_output() {
    use inkdown::{Color, ElementStyle};

    let overrides = Theme {
        h1: Some(ElementStyle::new().prefix(">> ").color(Color::Indexed(35))),
        bullet: Some("→".into()),
        ..Theme::default()
    };
    let theme = Theme::no_color().merge(&overrides);
    let out = Renderer::new().with_theme(theme).render("# Top\n\n- item");
    let plain = ansi::strip(&out);
    assert!(plain.contains(">> Top"));
    assert!(plain.contains("→ item"));
}
