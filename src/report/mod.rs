//! Text reports: pretty tables and CSV.

use tabled::{Table, Tabled, settings::Style};

pub mod rows;

pub use self::rows::{
    ColorRow, DirectedDegreeRow, UndirectedDegreeRow, degree_table, edge_color_rows,
    path_summary, vertex_color_rows,
};

/// Rows that can be rendered both as a table and as CSV.
pub trait Formattable: Tabled {
    /// Convert the row to a list of strings for CSV output
    fn to_csv_row(&self) -> Vec<String>;

    /// Get CSV headers for this type
    fn csv_headers() -> Vec<&'static str>;
}

/// Pretty table formatter using the tabled library
pub struct PrettyFormatter;

impl PrettyFormatter {
    pub fn format<T: Formattable>(items: &[T]) -> String {
        if items.is_empty() {
            return String::new();
        }

        let mut table = Table::new(items);
        table.with(Style::rounded());

        table.to_string()
    }
}

pub struct CsvFormatter;

impl CsvFormatter {
    pub fn format<T: Formattable>(items: &[T]) -> String {
        let mut csv = String::new();

        csv.push_str(&T::csv_headers().join(","));
        csv.push('\n');

        for item in items {
            let row: Vec<String> = item.to_csv_row().iter().map(|f| csv_field(f)).collect();
            csv.push_str(&row.join(","));
            csv.push('\n');
        }

        csv
    }
}

/// Quotes a field containing a delimiter, quote or newline.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quoting() {
        assert_eq!(csv_field("A"), "A");
        assert_eq!(csv_field("A, B"), "\"A, B\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn empty_table_is_empty() {
        assert_eq!(PrettyFormatter::format::<ColorRow>(&[]), "");
        assert_eq!(CsvFormatter::format::<ColorRow>(&[]), "Element,Color\n");
    }
}
