//! Data Summary: descriptive statistics, best/worst days and the
//! daily-return distribution.

use chrono::NaiveDate;
use serde::Serialize;

use crate::constants::{NUMERIC_COLUMNS, RETURN_HISTOGRAM_BINS};
use crate::models::{indicators, TickerTable};
use crate::reports::stats::{self, ColumnSummary, HistogramBin};

/// Best or worst single trading day by daily return
#[derive(Debug, Clone, Serialize)]
pub struct ExtremeDay {
    pub date: NaiveDate,
    pub return_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub symbol: String,
    /// One `describe()` row per numeric column
    pub statistics: Vec<ColumnSummary>,
    pub best_day: Option<ExtremeDay>,
    pub worst_day: Option<ExtremeDay>,
    /// Distribution of the observed daily returns
    pub return_histogram: Vec<HistogramBin>,
}

pub fn render(symbol: &str, table: &TickerTable) -> SummaryReport {
    let statistics = NUMERIC_COLUMNS
        .iter()
        .filter_map(|&column| stats::describe(column, &column_values(table, column)))
        .collect();

    let returns = indicators::daily_returns(&table.closes());
    let (best_day, worst_day) = extreme_days(table, &returns);

    let observed: Vec<f64> = returns.iter().flatten().copied().collect();
    let return_histogram = stats::histogram(&observed, RETURN_HISTOGRAM_BINS);

    SummaryReport {
        symbol: symbol.to_string(),
        statistics,
        best_day,
        worst_day,
        return_histogram,
    }
}

fn column_values(table: &TickerTable, column: &str) -> Vec<f64> {
    table
        .records()
        .iter()
        .map(|r| match column {
            "Open" => r.open,
            "High" => r.high,
            "Low" => r.low,
            "Close" => r.close,
            "Volume" => r.volume as f64,
            "Dividends" => r.dividends,
            "Stock Splits" => r.stock_splits,
            _ => f64::NAN,
        })
        .collect()
}

/// Highest and lowest daily return with their dates
fn extreme_days(
    table: &TickerTable,
    returns: &[Option<f64>],
) -> (Option<ExtremeDay>, Option<ExtremeDay>) {
    let mut best: Option<(usize, f64)> = None;
    let mut worst: Option<(usize, f64)> = None;

    for (i, value) in returns.iter().enumerate() {
        let Some(value) = value else { continue };
        if best.map_or(true, |(_, b)| *value > b) {
            best = Some((i, *value));
        }
        if worst.map_or(true, |(_, w)| *value < w) {
            worst = Some((i, *value));
        }
    }

    let to_day = |slot: Option<(usize, f64)>| {
        slot.map(|(i, value)| ExtremeDay {
            date: table.records()[i].date,
            return_pct: value * 100.0,
        })
    };

    (to_day(best), to_day(worst))
}
