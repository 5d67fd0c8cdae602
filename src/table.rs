//! Fixed-width table layout with box-drawing borders.

use crate::ansi::visible_length;
use crate::theme::{ElementStyle, TableBorder, Theme};

/// Lays out a table from already-rendered cell strings.
///
/// Column widths are the maximum visible length over the header cell and
/// every body cell in that column. Rows shorter than the header are
/// treated as having empty trailing cells; extra cells are ignored.
/// Border glyphs come from the theme's `table_border`, falling back to
/// the Unicode box set.
pub(crate) fn layout(header: &[String], rows: &[Vec<String>], theme: &Theme) -> String {
    let border = theme
        .table_border
        .clone()
        .unwrap_or_else(TableBorder::normal);
    let columns = header.len();

    let mut widths: Vec<usize> = header.iter().map(|cell| visible_length(cell)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(visible_length(cell));
        }
    }
    tracing::trace!(?widths, rows = rows.len(), "table layout");

    let rule = |left: &str, junction: &str, right: &str| -> String {
        let spans: Vec<String> = widths
            .iter()
            .map(|w| border.horizontal.repeat(w + 2))
            .collect();
        format!("{left}{}{right}", spans.join(junction))
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule(&border.top_left, &border.middle_top, &border.top_right));
    lines.push(format_row(
        header,
        &widths,
        &border,
        theme.table_header.as_ref(),
    ));
    lines.push(rule(
        &border.middle_left,
        &border.middle,
        &border.middle_right,
    ));
    for row in rows {
        lines.push(format_row(row, &widths, &border, theme.table_cell.as_ref()));
    }
    lines.push(rule(
        &border.bottom_left,
        &border.middle_bottom,
        &border.bottom_right,
    ));
    lines.join("\n")
}

fn format_row(
    cells: &[String],
    widths: &[usize],
    border: &TableBorder,
    style: Option<&ElementStyle>,
) -> String {
    let mut parts = Vec::with_capacity(widths.len());
    for (i, width) in widths.iter().enumerate() {
        let content = cells.get(i).map_or("", String::as_str);
        let padded = pad_end(content, *width);
        parts.push(match style {
            Some(style) => style.apply(&padded),
            None => padded,
        });
    }
    let vertical = &border.vertical;
    let separator = format!(" {vertical} ");
    format!("{vertical} {} {vertical}", parts.join(&separator))
}

/// Right-pads `text` with spaces to `width` visible columns.
fn pad_end(text: &str, width: usize) -> String {
    let len = visible_length(text);
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::{self, sgr};

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn draws_bordered_grid() {
        let theme = Theme::no_color();
        let out = layout(
            &cells(&["A", "B"]),
            &[cells(&["1", "2"])],
            &theme,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "+---+---+");
        assert_eq!(lines[1], "| A | B |");
        assert_eq!(lines[2], "+---+---+");
        assert_eq!(lines[3], "| 1 | 2 |");
        assert_eq!(lines[4], "+---+---+");
    }

    #[test]
    fn column_width_tracks_widest_cell() {
        let theme = Theme::no_color();
        let out = layout(
            &cells(&["id", "name"]),
            &[cells(&["1", "Alexandria"])],
            &theme,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "| id | name       |");
        assert_eq!(lines[3], "| 1  | Alexandria |");
    }

    #[test]
    fn unicode_border_set_by_default() {
        let theme = Theme {
            table_border: None,
            ..Theme::no_color()
        };
        let out = layout(&cells(&["A"]), &[], &theme);
        assert!(out.starts_with('┌'));
        assert!(out.contains('│'));
        assert!(out.ends_with('┘'));
    }

    #[test]
    fn styled_cells_pad_by_visible_length() {
        let styled = ansi::apply("ab", &[sgr::BOLD]);
        let theme = Theme::no_color();
        let out = layout(
            &cells(&["head"]),
            &[vec![styled]],
            &theme,
        );
        for line in out.lines() {
            assert_eq!(ansi::visible_length(line), 8, "misaligned line: {line:?}");
        }
    }

    #[test]
    fn short_and_long_rows_do_not_panic() {
        let theme = Theme::no_color();
        let out = layout(
            &cells(&["A", "B"]),
            &[cells(&["only"]), cells(&["1", "2", "extra"])],
            &theme,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[3], "| only |   |");
        assert!(!out.contains("extra"));
    }
}
