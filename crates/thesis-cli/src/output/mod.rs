use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns shown first, in this order, when present. Remaining columns
/// follow alphabetically.
const LEADING_COLUMNS: &[&str] = &["id", "thesis_id", "title", "name", "status", "kind"];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) => render_array_table(items),
        Value::Object(map) => {
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| column_rank(a.0).cmp(&column_rank(b.0)));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            table::render_entity_table(&["field", "value"], &rows, table_options())
        }
        scalar => table::render_entity_table(
            &["value"],
            &[vec![value_to_cell(scalar)]],
            table_options(),
        ),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, table_options());
    }

    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }
    headers.sort_by(|a, b| column_rank(a).cmp(&column_rank(b)));

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&headers, &rows, table_options())
}

/// Sort key: leading columns by position, then everything else by name.
fn column_rank(name: &str) -> (usize, &str) {
    let position = LEADING_COLUMNS
        .iter()
        .position(|leading| *leading == name)
        .unwrap_or(LEADING_COLUMNS.len());
    (position, name)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        // Nested lists (a thesis's milestones, a committee) summarize in a table cell.
        Value::Array(items) => format!("[{} item(s)]", items.len()),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{column_rank, render, value_to_cell};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        title: &'static str,
        id: &'static str,
        deadline: Option<&'static str>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Row {
            title: "Parsing at scale",
            id: "ths-1",
            deadline: None,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "ths-1");
        assert!(parsed["deadline"].is_null());
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = vec![json!({"id": "ths-1"}), json!({"id": "ths-2"})];
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.starts_with('['));
    }

    #[test]
    fn table_puts_identity_columns_first() {
        let value = vec![Row {
            title: "Parsing at scale",
            id: "ths-1",
            deadline: Some("2026-12-01"),
        }];
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        let id_at = header.find("id").expect("id column");
        let title_at = header.find("title").expect("title column");
        let deadline_at = header.find("deadline").expect("deadline column");
        assert!(id_at < title_at);
        assert!(title_at < deadline_at);
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let value: Vec<Row> = Vec::new();
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn nested_lists_are_summarized() {
        assert_eq!(value_to_cell(&json!([1, 2, 3])), "[3 item(s)]");
        assert_eq!(value_to_cell(&json!(null)), "-");
    }

    #[test]
    fn unknown_columns_sort_after_leading_ones() {
        assert!(column_rank("status") < column_rank("abstract"));
        assert!(column_rank("abstract") < column_rank("updated_at"));
    }
}
