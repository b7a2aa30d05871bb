//! CSV export of the held table, and the parse side of the round trip.

use std::path::{Path, PathBuf};

use crate::constants::TABLE_COLUMNS;
use crate::error::{AppError, Result};
use crate::models::{TickerRecord, TickerTable};
use crate::utils::{format_date, parse_date};

/// Download filename for a symbol's export
pub fn download_filename(symbol: &str) -> String {
    format!("{}_stock_data.csv", symbol)
}

/// Serialize the table to CSV text: header row first, then one row per
/// trading day in held order.
pub fn to_csv(table: &TickerTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(TABLE_COLUMNS)?;

    for record in table.records() {
        writer.write_record(&[
            format_date(&record.date),
            record.open.to_string(),
            record.high.to_string(),
            record.low.to_string(),
            record.close.to_string(),
            record.volume.to_string(),
            record.dividends.to_string(),
            record.stock_splits.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Parse(format!("CSV error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Parse(format!("CSV encoding error: {}", e)))
}

/// Parse CSV text produced by `to_csv` back into a table
pub fn parse_csv(text: &str) -> Result<TickerTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut rows = reader.records();
    let header = rows
        .next()
        .ok_or_else(|| AppError::Parse("Empty CSV input".to_string()))??;

    if header.iter().ne(TABLE_COLUMNS.iter().copied()) {
        return Err(AppError::Parse(format!(
            "Unexpected CSV header: {}",
            header.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut records = Vec::new();
    for row in rows {
        records.push(parse_row(&row?)?);
    }

    Ok(TickerTable::new(records))
}

/// Write the export into `dir`, returning the file path
pub fn write_csv_file(table: &TickerTable, symbol: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(download_filename(symbol));
    std::fs::write(&path, to_csv(table)?)?;
    Ok(path)
}

fn parse_row(row: &csv::StringRecord) -> Result<TickerRecord> {
    if row.len() != TABLE_COLUMNS.len() {
        return Err(AppError::Parse(format!(
            "Expected {} columns, found {}",
            TABLE_COLUMNS.len(),
            row.len()
        )));
    }

    Ok(TickerRecord {
        date: parse_date(row.get(0).unwrap_or(""))?,
        open: parse_f64(row.get(1).unwrap_or(""), "Open")?,
        high: parse_f64(row.get(2).unwrap_or(""), "High")?,
        low: parse_f64(row.get(3).unwrap_or(""), "Low")?,
        close: parse_f64(row.get(4).unwrap_or(""), "Close")?,
        volume: row
            .get(5)
            .unwrap_or("")
            .parse()
            .map_err(|_| AppError::Parse(format!("Invalid Volume '{}'", row.get(5).unwrap_or(""))))?,
        dividends: parse_f64(row.get(6).unwrap_or(""), "Dividends")?,
        stock_splits: parse_f64(row.get(7).unwrap_or(""), "Stock Splits")?,
    })
}

fn parse_f64(raw: &str, column: &str) -> Result<f64> {
    raw.parse()
        .map_err(|_| AppError::Parse(format!("Invalid {} value '{}'", column, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_table() -> TickerTable {
        let day = |d: u32| NaiveDate::from_ymd_opt(2020, 1, d).unwrap();
        TickerTable::new(vec![
            TickerRecord {
                date: day(2),
                open: 74.06,
                high: 75.15,
                low: 73.8,
                close: 75.09,
                volume: 135_480_400,
                dividends: 0.0,
                stock_splits: 0.0,
            },
            TickerRecord {
                date: day(3),
                open: 74.29,
                high: 75.14,
                low: 74.13,
                close: 74.36,
                volume: 146_322_800,
                dividends: 0.25,
                stock_splits: 0.0,
            },
        ])
    }

    #[test]
    fn test_download_filename() {
        assert_eq!(download_filename("AAPL"), "AAPL_stock_data.csv");
    }

    #[test]
    fn test_header_row_matches_table_columns() {
        let csv_text = to_csv(&sample_table()).unwrap();
        let header = csv_text.lines().next().unwrap();
        assert_eq!(header, "Date,Open,High,Low,Close,Volume,Dividends,Stock Splits");
    }

    #[test]
    fn test_round_trip_preserves_rows_and_closes() {
        let table = sample_table();
        let csv_text = to_csv(&table).unwrap();
        let parsed = parse_csv(&csv_text).unwrap();

        assert_eq!(parsed.len(), table.len());
        assert_eq!(parsed.closes(), table.closes());
        assert_eq!(parsed.records(), table.records());
    }

    #[test]
    fn test_row_order_is_preserved() {
        let csv_text = to_csv(&sample_table()).unwrap();
        let lines: Vec<&str> = csv_text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2020-01-02,"));
        assert!(lines[2].starts_with("2020-01-03,"));
    }

    #[test]
    fn test_parse_rejects_wrong_header() {
        let err = parse_csv("a,b,c\n1,2,3\n").unwrap_err();
        assert!(err.to_string().contains("Unexpected CSV header"));
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let csv_text = "Date,Open,High,Low,Close,Volume,Dividends,Stock Splits\n2020-01-02,1.0\n";
        assert!(parse_csv(csv_text).is_err());
    }
}
