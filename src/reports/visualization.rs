//! Data Visualization: chart-ready series for the plotting frontend.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::TickerTable;

#[derive(Debug, Clone, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandlePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VolumePoint {
    pub date: NaiveDate,
    pub volume: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisualizationReport {
    pub symbol: String,
    /// Line chart of closing prices
    pub close_line: Vec<PricePoint>,
    /// Candlestick chart of OHLC
    pub candlesticks: Vec<CandlePoint>,
    /// Bar chart of trading volume
    pub volume_bars: Vec<VolumePoint>,
}

pub fn render(symbol: &str, table: &TickerTable) -> VisualizationReport {
    let close_line = table
        .records()
        .iter()
        .map(|r| PricePoint {
            date: r.date,
            close: r.close,
        })
        .collect();

    let candlesticks = table
        .records()
        .iter()
        .map(|r| CandlePoint {
            date: r.date,
            open: r.open,
            high: r.high,
            low: r.low,
            close: r.close,
        })
        .collect();

    let volume_bars = table
        .records()
        .iter()
        .map(|r| VolumePoint {
            date: r.date,
            volume: r.volume,
        })
        .collect();

    VisualizationReport {
        symbol: symbol.to_string(),
        close_line,
        candlesticks,
        volume_bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TickerRecord;

    #[test]
    fn test_series_align_with_table_rows() {
        let day = |d: u32| NaiveDate::from_ymd_opt(2020, 1, d).unwrap();
        let table = TickerTable::new(vec![
            TickerRecord::new(day(2), 10.0, 12.0, 9.0, 11.0, 500),
            TickerRecord::new(day(3), 11.0, 13.0, 10.5, 12.5, 700),
        ]);

        let report = render("AAPL", &table);

        assert_eq!(report.close_line.len(), 2);
        assert_eq!(report.candlesticks.len(), 2);
        assert_eq!(report.volume_bars.len(), 2);

        assert_eq!(report.close_line[1].close, 12.5);
        assert_eq!(report.candlesticks[0].high, 12.0);
        assert_eq!(report.volume_bars[1].volume, 700);
        assert_eq!(report.candlesticks[0].date, day(2));
    }
}
