use chrono::NaiveDate;

use crate::constants::TABLE_COLUMNS;
use crate::models::TickerRecord;

/// The fetched table: daily records sorted ascending by date.
///
/// `null_cells` counts the null entries the provider emitted for the
/// requested range; the rows holding them are dropped at parse time, so the
/// held records themselves are always complete.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerTable {
    records: Vec<TickerRecord>,
    null_cells: usize,
}

impl TickerTable {
    /// Build a table from records, sorting ascending by date
    pub fn new(records: Vec<TickerRecord>) -> Self {
        Self::with_null_cells(records, 0)
    }

    /// Build a table and remember how many null cells the provider emitted
    pub fn with_null_cells(mut records: Vec<TickerRecord>, null_cells: usize) -> Self {
        records.sort_by_key(|r| r.date);
        Self {
            records,
            null_cells,
        }
    }

    pub fn records(&self) -> &[TickerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of columns in the table (fixed by the provider schema)
    pub fn column_count(&self) -> usize {
        TABLE_COLUMNS.len()
    }

    /// Null entries observed in the provider payload for this range
    pub fn null_cells(&self) -> usize {
        self.null_cells
    }

    /// The last `n` rows, in date order
    pub fn tail(&self, n: usize) -> &[TickerRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    pub fn first(&self) -> Option<&TickerRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&TickerRecord> {
        self.records.last()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.close).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    #[test]
    fn test_records_sorted_ascending_by_date() {
        let table = TickerTable::new(vec![
            TickerRecord::new(day(6), 3.0, 3.0, 3.0, 3.0, 30),
            TickerRecord::new(day(2), 1.0, 1.0, 1.0, 1.0, 10),
            TickerRecord::new(day(3), 2.0, 2.0, 2.0, 2.0, 20),
        ]);

        let dates = table.dates();
        assert_eq!(dates, vec![day(2), day(3), day(6)]);
        assert_eq!(table.first().unwrap().close, 1.0);
        assert_eq!(table.last().unwrap().close, 3.0);
    }

    #[test]
    fn test_tail_clamps_to_available_rows() {
        let table = TickerTable::new(vec![
            TickerRecord::new(day(2), 1.0, 1.0, 1.0, 1.0, 10),
            TickerRecord::new(day(3), 2.0, 2.0, 2.0, 2.0, 20),
        ]);

        assert_eq!(table.tail(5).len(), 2);
        assert_eq!(table.tail(1)[0].date, day(3));
    }

    #[test]
    fn test_column_count_matches_schema() {
        let table = TickerTable::new(Vec::new());
        assert_eq!(table.column_count(), 8);
        assert!(table.is_empty());
    }
}
