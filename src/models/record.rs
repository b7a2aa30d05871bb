use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of provider data
///
/// Every field comes straight from the provider; the only normalization is
/// turning the payload's timestamp index into a date column. Days without a
/// dividend or split event carry 0.0 in those columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerRecord {
    /// Trading day
    pub date: NaiveDate,

    /// Opening price
    pub open: f64,

    /// Highest price
    pub high: f64,

    /// Lowest price
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Trading volume (number of shares)
    pub volume: u64,

    /// Cash dividend paid that day, 0.0 when none
    pub dividends: f64,

    /// Split ratio applied that day (e.g. 4.0 for a 4:1 split), 0.0 when none
    pub stock_splits: f64,
}

impl TickerRecord {
    /// Create a record with no dividend or split event
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            dividends: 0.0,
            stock_splits: 0.0,
        }
    }
}
