//! Client for the market-data provider's daily chart endpoint.
//!
//! One request per fetch: no retry, no backoff, no rate limiting. Provider
//! failures surface to the caller unretried; the only resilience carried
//! here is a request timeout.

use chrono::{DateTime, NaiveDate};
use isahc::{config::Configurable, AsyncReadResponseExt, HttpClient, Request};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error as ThisError;
use tracing::{debug, info};

use crate::models::{TickerRecord, TickerTable};
use crate::utils::get_provider_base_url;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// The provider rejects requests without a browser User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(ThisError, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("No data available for the requested range")]
    NoData,
}

impl From<isahc::Error> for ProviderError {
    fn from(err: isahc::Error) -> Self {
        ProviderError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::InvalidResponse(err.to_string())
    }
}

// Chart payload shape: result[0].timestamp pairs index-wise with the
// indicators.quote[0] arrays; dividend and split events key on the event
// timestamp.

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    events: Option<ChartEvents>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartEvents {
    #[serde(default)]
    dividends: HashMap<String, DividendEvent>,
    #[serde(default)]
    splits: HashMap<String, SplitEvent>,
}

#[derive(Debug, Deserialize)]
struct DividendEvent {
    amount: f64,
    date: i64,
}

#[derive(Debug, Deserialize)]
struct SplitEvent {
    numerator: f64,
    denominator: f64,
    date: i64,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

pub struct ProviderClient {
    client: HttpClient,
    base_url: String,
}

impl ProviderClient {
    /// Create a client against the configured base URL
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_base_url(get_provider_base_url())
    }

    /// Create a client against a specific base URL
    pub fn with_base_url(base_url: String) -> Result<Self, ProviderError> {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch daily history for one symbol over an inclusive date range.
    ///
    /// Returns rows sorted ascending by date; only days the market traded
    /// appear. Fails with `UnknownSymbol` when the provider rejects the
    /// symbol and `NoData` when the range holds no trading days.
    pub async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TickerTable, ProviderError> {
        let period1 = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let period2 = end.and_hms_opt(23, 59, 59).unwrap().and_utc().timestamp();

        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d&events=div%7Csplit",
            self.base_url, symbol, period1, period2
        );
        debug!(%url, "Requesting daily history");

        let request = Request::builder()
            .uri(&url)
            .method("GET")
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .body(())
            .map_err(|e| ProviderError::InvalidResponse(format!("Request build error: {}", e)))?;

        let mut response = self.client.send_async(request).await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if status == 404 {
            return Err(ProviderError::UnknownSymbol(symbol.to_string()));
        }
        if !status.is_success() {
            return Err(ProviderError::Http(format!(
                "{} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let envelope: ChartEnvelope = serde_json::from_str(&text)?;
        let table = parse_chart(symbol, envelope)?;
        info!(symbol, rows = table.len(), "Fetched daily history");
        Ok(table)
    }
}

/// Turn a chart payload into a ticker table.
///
/// Rows with a null OHLCV entry are dropped; every dropped null entry
/// counts toward the table's null-cell total.
fn parse_chart(symbol: &str, envelope: ChartEnvelope) -> Result<TickerTable, ProviderError> {
    if let Some(err) = envelope.chart.error {
        return Err(ProviderError::UnknownSymbol(format!(
            "{} ({}: {})",
            symbol, err.code, err.description
        )));
    }

    let result = envelope
        .chart
        .result
        .and_then(|mut results| {
            if results.is_empty() {
                None
            } else {
                Some(results.remove(0))
            }
        })
        .ok_or(ProviderError::NoData)?;

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or(ProviderError::NoData)?;

    let mut dividends: HashMap<NaiveDate, f64> = HashMap::new();
    let mut splits: HashMap<NaiveDate, f64> = HashMap::new();
    if let Some(events) = result.events {
        for event in events.dividends.into_values() {
            dividends.insert(timestamp_date(event.date), event.amount);
        }
        for event in events.splits.into_values() {
            if event.denominator != 0.0 {
                splits.insert(timestamp_date(event.date), event.numerator / event.denominator);
            }
        }
    }

    let mut records = Vec::with_capacity(result.timestamp.len());
    let mut null_cells = 0usize;

    for (i, &ts) in result.timestamp.iter().enumerate() {
        let open = quote.open.get(i).copied().flatten();
        let high = quote.high.get(i).copied().flatten();
        let low = quote.low.get(i).copied().flatten();
        let close = quote.close.get(i).copied().flatten();
        let volume = quote.volume.get(i).copied().flatten();

        let date = timestamp_date(ts);
        match (open, high, low, close, volume) {
            (Some(open), Some(high), Some(low), Some(close), Some(volume)) => {
                records.push(TickerRecord {
                    date,
                    open,
                    high,
                    low,
                    close,
                    volume,
                    dividends: dividends.get(&date).copied().unwrap_or(0.0),
                    stock_splits: splits.get(&date).copied().unwrap_or(0.0),
                });
            }
            _ => {
                null_cells += [
                    open.is_none(),
                    high.is_none(),
                    low.is_none(),
                    close.is_none(),
                    volume.is_none(),
                ]
                .iter()
                .filter(|missing| **missing)
                .count();
            }
        }
    }

    if records.is_empty() {
        return Err(ProviderError::NoData);
    }

    Ok(TickerTable::with_null_cells(records, null_cells))
}

/// Trading date of an event or bar timestamp (provider timestamps are UTC)
fn timestamp_date(ts: i64) -> NaiveDate {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2020-01-02, 2020-01-03 and 2020-01-06 at 00:00 UTC
    const JAN_02: i64 = 1577923200;
    const JAN_03: i64 = 1578009600;
    const JAN_06: i64 = 1578268800;

    fn envelope(json: &str) -> ChartEnvelope {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_chart_maps_rows_and_events() {
        let payload = format!(
            r#"{{"chart":{{"result":[{{
                "timestamp":[{JAN_02},{JAN_03},{JAN_06}],
                "events":{{
                    "dividends":{{"{JAN_03}":{{"amount":0.25,"date":{JAN_03}}}}},
                    "splits":{{"{JAN_06}":{{"numerator":4,"denominator":1,"date":{JAN_06}}}}}
                }},
                "indicators":{{"quote":[{{
                    "open":[100.0,101.0,102.0],
                    "high":[101.5,102.5,103.5],
                    "low":[99.5,100.5,101.5],
                    "close":[101.0,102.0,103.0],
                    "volume":[1000,2000,3000]
                }}]}}
            }}],"error":null}}}}"#
        );

        let table = parse_chart("AAPL", envelope(&payload)).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.null_cells(), 0);

        let records = table.records();
        assert_eq!(records[0].date.to_string(), "2020-01-02");
        assert_eq!(records[0].close, 101.0);
        assert_eq!(records[0].dividends, 0.0);
        assert_eq!(records[1].dividends, 0.25);
        assert_eq!(records[2].stock_splits, 4.0);
    }

    #[test]
    fn test_parse_chart_sorts_ascending_by_date() {
        let payload = format!(
            r#"{{"chart":{{"result":[{{
                "timestamp":[{JAN_06},{JAN_02}],
                "indicators":{{"quote":[{{
                    "open":[3.0,1.0],"high":[3.0,1.0],"low":[3.0,1.0],
                    "close":[3.0,1.0],"volume":[30,10]
                }}]}}
            }}],"error":null}}}}"#
        );

        let table = parse_chart("AAPL", envelope(&payload)).unwrap();
        assert_eq!(table.closes(), vec![1.0, 3.0]);
        assert!(table.records()[0].date < table.records()[1].date);
    }

    #[test]
    fn test_parse_chart_skips_and_counts_null_rows() {
        let payload = format!(
            r#"{{"chart":{{"result":[{{
                "timestamp":[{JAN_02},{JAN_03},{JAN_06}],
                "indicators":{{"quote":[{{
                    "open":[100.0,null,102.0],
                    "high":[101.5,null,103.5],
                    "low":[99.5,100.5,101.5],
                    "close":[101.0,102.0,null],
                    "volume":[1000,2000,3000]
                }}]}}
            }}],"error":null}}}}"#
        );

        let table = parse_chart("AAPL", envelope(&payload)).unwrap();
        // Jan 3 drops two null cells, Jan 6 drops one
        assert_eq!(table.len(), 1);
        assert_eq!(table.null_cells(), 3);
        assert_eq!(table.records()[0].close, 101.0);
    }

    #[test]
    fn test_parse_chart_error_payload_is_unknown_symbol() {
        let payload = r#"{"chart":{"result":null,"error":{
            "code":"Not Found",
            "description":"No data found, symbol may be delisted"
        }}}"#;

        let err = parse_chart("ZZZZ", envelope(payload)).unwrap_err();
        match err {
            ProviderError::UnknownSymbol(msg) => assert!(msg.contains("ZZZZ")),
            other => panic!("expected UnknownSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_chart_empty_result_is_no_data() {
        let payload = r#"{"chart":{"result":[],"error":null}}"#;
        assert!(matches!(
            parse_chart("AAPL", envelope(payload)),
            Err(ProviderError::NoData)
        ));
    }

    #[test]
    fn test_timestamp_date() {
        assert_eq!(timestamp_date(JAN_02).to_string(), "2020-01-02");
        // Intraday bar timestamps land on the same trading date
        assert_eq!(timestamp_date(JAN_02 + 52_200).to_string(), "2020-01-02");
    }
}
