//! Console table rendering for report output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use csvrep_model::{ReportRow, Value};

/// Render report rows as a bordered console table.
///
/// Columns come from the first row's keys (report rows share a key set) and
/// appear in the map's sorted key order, consistently across rows. Numeric
/// columns are right-aligned; `Value`'s `Display` already fixes floats at two
/// decimals. Empty input renders a plain placeholder line instead of a table.
pub fn render_table(rows: &[ReportRow]) -> String {
    let Some(first) = rows.first() else {
        return "No data to display.".to_string();
    };
    let columns: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(columns.iter().map(|name| header_cell(name)).collect::<Vec<_>>());

    for row in rows {
        table.add_row(
            columns
                .iter()
                .map(|name| value_cell(row.get(*name)))
                .collect::<Vec<_>>(),
        );
    }

    for (index, name) in columns.iter().enumerate() {
        if first.get(*name).is_some_and(Value::is_numeric) {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }

    table.to_string()
}

fn header_cell(name: &str) -> Cell {
    Cell::new(name).add_attribute(Attribute::Bold)
}

fn value_cell(value: Option<&Value>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => Cell::new("-"),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_row(country: &str, average: f64) -> ReportRow {
        ReportRow::from([
            ("country".to_string(), Value::Text(country.to_string())),
            ("average_gdp".to_string(), Value::Float(average)),
        ])
    }

    #[test]
    fn empty_rows_render_placeholder() {
        assert_eq!(render_table(&[]), "No data to display.");
    }

    #[test]
    fn renders_headers_and_formatted_values() {
        let rows = vec![report_row("Germany", 4257.0), report_row("China", 17810.33)];

        let rendered = render_table(&rows);

        assert!(rendered.contains("country"));
        assert!(rendered.contains("average_gdp"));
        assert!(rendered.contains("Germany"));
        assert!(rendered.contains("4257.00"));
        assert!(rendered.contains("17810.33"));
    }

    #[test]
    fn row_order_is_preserved() {
        let rows = vec![report_row("Zeta", 1.0), report_row("Alpha", 2.0)];

        let rendered = render_table(&rows);
        let zeta = rendered.find("Zeta").unwrap();
        let alpha = rendered.find("Alpha").unwrap();

        assert!(zeta < alpha);
    }
}
