// crates/vouch-cli/src/output.rs
//
// Output formatting utilities for the Vouch CLI.
// Supports table and JSON output modes.

use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    #[default]
    Table,
    /// JSON output for machine consumption.
    Json,
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// Format a fraction in [0, 1] with three decimals.
pub fn format_fraction(value: f64) -> String {
    format!("{:.3}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled, Serialize)]
    struct Row {
        name: String,
        score: u8,
    }

    #[test]
    fn test_table_contains_headers_and_values() {
        let rows = vec![Row { name: "0xabc".to_string(), score: 72 }];
        let table = format_table(&rows);
        assert!(table.contains("name"));
        assert!(table.contains("0xabc"));
        assert!(table.contains("72"));
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let row = Row { name: "x".to_string(), score: 1 };
        let json = format_json(&row);
        assert!(json.contains("\n"));
        assert!(json.contains("\"score\": 1"));
    }

    #[test]
    fn test_fractions_have_three_decimals() {
        assert_eq!(format_fraction(0.5), "0.500");
        assert_eq!(format_fraction(1.0 / 3.0), "0.333");
    }
}
