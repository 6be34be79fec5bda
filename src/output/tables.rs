//! Table rendering using comfy-table

use super::{format_instant, ExtraField, ExtraFields};
use crate::models::DiffResult;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};
use console::style;

/// Format a table to a string, indented by four spaces
pub fn format_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    // Constrain table width to terminal width minus indent, default to 120 if detection fails
    let width = console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols)
        .unwrap_or(120)
        .saturating_sub(4);
    table.set_width(width);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }

    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(&format!("    {}\n", line));
    }
    out
}

/// Render each category of a diff as its own table
pub fn render_diff_tables(result: &DiffResult, fields: &ExtraFields) -> String {
    let mut headers = vec!["Alias".to_string()];
    headers.extend(fields.iter().map(|field| {
        match field {
            ExtraField::CommonName => "Common Name",
            ExtraField::NotBefore => "Not Before",
            ExtraField::NotAfter => "Not After",
        }
        .to_string()
    }));

    let mut out = String::new();
    for (category, entries) in result.iter() {
        out.push_str(&format!(
            "{} ({})\n",
            style(category.as_str().to_uppercase()).cyan().bold(),
            entries.len()
        ));

        let rows: Vec<Vec<String>> = if entries.is_empty() {
            let mut row = vec!["<empty>".to_string()];
            row.resize(headers.len(), String::new());
            vec![row]
        } else {
            entries
                .iter()
                .map(|entry| {
                    let mut row = vec![entry.alias.clone()];
                    row.extend(fields.iter().map(|field| match field {
                        ExtraField::CommonName => entry.common_name.clone(),
                        ExtraField::NotBefore => format_instant(&entry.not_before),
                        ExtraField::NotAfter => format_instant(&entry.not_after),
                    }));
                    row
                })
                .collect()
        };

        out.push_str(&format_table(&headers, &rows));
        out.push('\n');
    }
    out
}
