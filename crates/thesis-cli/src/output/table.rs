//! Plain aligned tables for `--format table`.

/// Columns never shrink below this many characters.
const MIN_COLUMN_WIDTH: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table. Status-like cells are colored when
/// `options.color` is set.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push("-".repeat(display_width(&header_line)));

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(value, *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                if options.color {
                    colorize_status(&text, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Shrink the widest columns one character at a time until the table
/// fits, never below a column's header width.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_width(headers[*idx]).max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap an already padded cell in an ANSI color chosen from its plain text.
fn colorize_status(plain: &str, padded: String) -> String {
    let code = match plain.to_ascii_lowercase().as_str() {
        "approved" | "completed" | "accepted" | "approve" | "final_submitted" | "true" => {
            Some("32")
        }
        "submitted" | "under_review" | "in_progress" | "revision_requested" | "minor_revision" => {
            Some("33")
        }
        "reject" | "false" => Some("31"),
        _ => None,
    };
    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn sample_rows() -> Vec<Vec<String>> {
        vec![
            vec!["ths-1".into(), "draft".into(), "Short".into()],
            vec![
                "ths-200".into(),
                "revision_requested".into(),
                "A much longer thesis title".into(),
            ],
        ]
    }

    #[test]
    fn aligns_mixed_widths() {
        let table = render_entity_table(&["id", "status", "title"], &sample_rows(), PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        let status_col = lines[0].find("status").expect("status header");
        assert_eq!(lines[3].find("revision_requested"), Some(status_col));
    }

    #[test]
    fn shrinks_to_terminal_width() {
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render_entity_table(&["id", "status", "title"], &sample_rows(), options);
        for line in table.lines() {
            assert!(display_width(line) <= 40, "line too wide: {line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn colors_status_cells_only_when_enabled() {
        let colored = render_entity_table(
            &["status"],
            &[vec!["approved".into()]],
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(colored.contains("\u{1b}[32m"));

        let plain = render_entity_table(&["status"], &[vec!["approved".into()]], PLAIN);
        assert!(!plain.contains('\u{1b}'));
    }

    #[test]
    fn numbers_align_right() {
        assert_eq!(pad("7", 4, true), "   7");
        assert!(looks_numeric("12"));
        assert!(!looks_numeric("2026-10-19"));
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_text("Überprüfung", 5), "Über…");
        assert_eq!(truncate_text("x", 1), "x");
    }
}
