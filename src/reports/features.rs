//! Feature Engineering: moving average, correlations and performance
//! metrics.

use chrono::NaiveDate;
use serde::Serialize;

use crate::constants::{MOVING_AVERAGE_WINDOW, TAIL_ROWS};
use crate::models::{indicators, TickerTable};
use crate::reports::stats;

/// One row of the close / moving-average overlay
#[derive(Debug, Clone, Serialize)]
pub struct MovingAverageRow {
    pub date: NaiveDate,
    pub close: f64,
    /// Absent until a full window of closes exists
    pub moving_average: Option<f64>,
}

/// Pearson correlations across the numeric columns, pairwise-complete.
/// `values[i][j]` correlates `columns[i]` with `columns[j]`; an undefined
/// pair (constant column) is absent.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturesReport {
    pub symbol: String,
    /// Latest rows of the moving-average table
    pub moving_average_tail: Vec<MovingAverageRow>,
    /// Full overlay series for the chart
    pub overlay: Vec<MovingAverageRow>,
    pub correlation: CorrelationMatrix,
    /// Return on investment over the held period, in percent
    pub roi_pct: Option<f64>,
    /// Sample stddev of daily returns scaled by sqrt(252)
    pub annualized_volatility: Option<f64>,
}

pub fn render(symbol: &str, table: &TickerTable) -> FeaturesReport {
    let closes = table.closes();
    let averages = indicators::moving_average(&closes, MOVING_AVERAGE_WINDOW);

    let overlay: Vec<MovingAverageRow> = table
        .records()
        .iter()
        .zip(&averages)
        .map(|(record, average)| MovingAverageRow {
            date: record.date,
            close: record.close,
            moving_average: *average,
        })
        .collect();

    let tail_start = overlay.len().saturating_sub(TAIL_ROWS);
    let moving_average_tail = overlay[tail_start..].to_vec();

    let returns = indicators::daily_returns(&closes);

    FeaturesReport {
        symbol: symbol.to_string(),
        moving_average_tail,
        correlation: correlation_matrix(table, &averages),
        roi_pct: indicators::roi(&closes).map(|r| r * 100.0),
        annualized_volatility: indicators::annualized_volatility(&returns),
        overlay,
    }
}

/// Correlations across OHLCV plus the moving-average feature
fn correlation_matrix(table: &TickerTable, averages: &[Option<f64>]) -> CorrelationMatrix {
    let series: Vec<(&str, Vec<Option<f64>>)> = vec![
        ("Open", table.records().iter().map(|r| Some(r.open)).collect()),
        ("High", table.records().iter().map(|r| Some(r.high)).collect()),
        ("Low", table.records().iter().map(|r| Some(r.low)).collect()),
        ("Close", table.records().iter().map(|r| Some(r.close)).collect()),
        (
            "Volume",
            table.records().iter().map(|r| Some(r.volume as f64)).collect(),
        ),
        ("Moving Average (30 days)", averages.to_vec()),
    ];

    let values = series
        .iter()
        .map(|(_, xs)| {
            series
                .iter()
                .map(|(_, ys)| stats::pearson(xs, ys))
                .collect()
        })
        .collect();

    CorrelationMatrix {
        columns: series.iter().map(|(name, _)| name.to_string()).collect(),
        values,
    }
}
