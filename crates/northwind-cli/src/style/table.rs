//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use super::colors::SemanticStyle;

/// Creates a styled listing table.
pub fn list_table(columns: &[&str], rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|col| {
            if super::no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    table
}

/// Prints a listing table followed by a count footer.
pub fn print_list_table(columns: &[&str], rows: &[Vec<String>], noun: &str) {
    let table = list_table(columns, rows);
    println!("{table}");

    let count = rows.len();
    let plural = if count == 1 { "" } else { "s" };
    println!("{}", format!("({count} {noun}{plural})").muted());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_table_contains_cells() {
        let rows = vec![vec!["price-tiers".to_string(), "Grouping".to_string()]];
        let rendered = list_table(&["Name", "Category"], &rows).to_string();

        assert!(rendered.contains("Name"));
        assert!(rendered.contains("price-tiers"));
        assert!(rendered.contains("Grouping"));
    }
}
