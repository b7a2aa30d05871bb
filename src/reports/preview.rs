//! Data Preview: latest rows, shape and missing-value message.

use serde::Serialize;

use crate::constants::TAIL_ROWS;
use crate::models::{TickerRecord, TickerTable};

#[derive(Debug, Clone, Serialize)]
pub struct PreviewReport {
    pub symbol: String,
    /// Latest rows, in date order
    pub tail: Vec<TickerRecord>,
    pub row_count: usize,
    pub column_count: usize,
    /// Null entries the provider emitted for this range
    pub missing_values: usize,
    pub missing_message: String,
}

pub fn render(symbol: &str, table: &TickerTable) -> PreviewReport {
    let missing_values = table.null_cells();
    let missing_message = if missing_values == 0 {
        "There are no missing values in this dataset.".to_string()
    } else {
        format!("There are {} missing values in total.", missing_values)
    };

    PreviewReport {
        symbol: symbol.to_string(),
        tail: table.tail(TAIL_ROWS).to_vec(),
        row_count: table.len(),
        column_count: table.column_count(),
        missing_values,
        missing_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn table_of(days: u32) -> TickerTable {
        let records = (1..=days)
            .map(|d| {
                let date = NaiveDate::from_ymd_opt(2020, 3, d).unwrap();
                TickerRecord::new(date, 1.0, 1.0, 1.0, d as f64, 10)
            })
            .collect();
        TickerTable::new(records)
    }

    #[test]
    fn test_preview_shape_and_tail() {
        let report = render("AAPL", &table_of(8));

        assert_eq!(report.row_count, 8);
        assert_eq!(report.column_count, 8);
        assert_eq!(report.tail.len(), 5);
        // Tail holds the 5 latest rows in date order
        assert_eq!(report.tail[0].close, 4.0);
        assert_eq!(report.tail[4].close, 8.0);
    }

    #[test]
    fn test_missing_value_messages() {
        let clean = render("AAPL", &table_of(3));
        assert_eq!(clean.missing_values, 0);
        assert_eq!(clean.missing_message, "There are no missing values in this dataset.");

        let records = table_of(3).records().to_vec();
        let gappy = TickerTable::with_null_cells(records, 4);
        let report = render("AAPL", &gappy);
        assert_eq!(report.missing_values, 4);
        assert_eq!(report.missing_message, "There are 4 missing values in total.");
    }
}
