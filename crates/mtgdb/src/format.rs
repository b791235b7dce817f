//! Text rendering of query results.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use mtgdb_core::{Row, RowDetail, Value};

use crate::session::ColumnListing;

/// Text cells longer than this are clamped
pub const MAX_COLUMN_WIDTH: usize = 80;

/// Clamp a cell's text to `max_width` characters followed by `...`
pub fn clamp(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_width).collect::<String>())
    }
}

fn cell(value: Option<&Value>) -> Cell {
    match value {
        Some(number @ (Value::Integer(_) | Value::Float(_))) => {
            Cell::new(number).set_alignment(CellAlignment::Right)
        }
        Some(Value::Text(text)) => Cell::new(clamp(text, MAX_COLUMN_WIDTH)),
        Some(other) => Cell::new(other.to_string()),
        None => Cell::new(""),
    }
}

/// Render rows as a table with a leading `#` row-number column
pub fn render_rows(columns: &[String], rows: &[Row]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Disabled);

    let mut header = vec![Cell::new("#")];
    header.extend(columns.iter().map(Cell::new));
    table.set_header(header);

    for (i, row) in rows.iter().enumerate() {
        let mut cells = vec![Cell::new(i).set_alignment(CellAlignment::Right)];
        cells.extend(columns.iter().map(|c| cell(row.get(c))));
        table.add_row(cells);
    }

    format!("{table}\n({} rows)", rows.len())
}

/// Render one inspected row as `column: value` lines
pub fn render_detail(detail: &RowDetail) -> String {
    let width = detail.columns().map(|c| c.chars().count()).max().unwrap_or(0);
    detail
        .entries
        .iter()
        .map(|(column, value)| format!("{:>width$}: {}", column, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the available and shown columns of an entity
pub fn render_columns(listing: &ColumnListing) -> String {
    let shown = match &listing.shown {
        Some(cols) => cols.join(", "),
        None => "(all)".to_string(),
    };
    format!(
        "Available: [{}]\nShown: [{}]",
        listing.available.join(", "),
        shown
    )
}
