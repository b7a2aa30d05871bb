use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::models::{catalog, Page};
use crate::reports::{self, PageView};
use crate::server::AppState;
use crate::services::{export, ProviderClient, ProviderError};
use crate::utils::parse_date;

/// Request body for POST /fetch
#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    /// Ticker symbol (e.g. AAPL)
    pub symbol: String,

    /// Inclusive range start (YYYY-MM-DD)
    pub start_date: String,

    /// Inclusive range end (YYYY-MM-DD)
    pub end_date: String,
}

#[derive(Debug, Serialize)]
pub struct FetchResponse {
    pub symbol: String,
    pub rows: usize,
    pub start_date: String,
    pub end_date: String,
    pub message: String,
}

/// GET /catalog - the company/ticker table
#[instrument]
pub async fn catalog_handler() -> impl IntoResponse {
    debug!("Received request for the symbol catalog");
    Json(catalog::entries())
}

/// POST /fetch - fetch daily history and replace the held session
///
/// The single NoDataLoaded -> DataLoaded transition: a later fetch
/// overwrites the held table, nothing transitions back.
#[instrument(skip(state))]
pub async fn fetch_handler(
    State(state): State<AppState>,
    Json(request): Json<FetchRequest>,
) -> Response {
    let symbol = request.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return bad_request("symbol must not be empty".to_string());
    }

    let start = match parse_date(&request.start_date) {
        Ok(date) => date,
        Err(e) => return bad_request(e.to_string()),
    };
    let end = match parse_date(&request.end_date) {
        Ok(date) => date,
        Err(e) => return bad_request(e.to_string()),
    };
    if start > end {
        return bad_request("start_date must not be after end_date".to_string());
    }

    let client = match ProviderClient::new() {
        Ok(client) => client,
        Err(e) => return provider_error_response(&e),
    };

    match client.fetch_history(&symbol, start, end).await {
        Ok(table) => {
            let rows = table.len();
            state.session.replace(symbol.clone(), table).await;
            info!(%symbol, rows, "Stored fetched table in session");

            let response = FetchResponse {
                message: format!("{} stock data has been successfully extracted.", symbol),
                symbol,
                rows,
                start_date: request.start_date,
                end_date: request.end_date,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => provider_error_response(&e),
    }
}

/// GET /page/{page} - render one dashboard page
///
/// Examples:
/// - /page/data-preview
/// - /page/feature-engineering
#[instrument(skip(state))]
pub async fn page_handler(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let page: Page = match slug.parse() {
        Ok(page) => page,
        Err(e) => return bad_request(e.to_string()),
    };

    let session = state.session.snapshot().await;
    let view = reports::render(page, session.as_ref());
    debug!(%page, loaded = session.is_some(), "Rendered page");

    (StatusCode::OK, Json(view)).into_response()
}

/// GET /export - download the held table as CSV
///
/// Answers with the load-first prompt instead of failing when no table is
/// held.
#[instrument(skip(state))]
pub async fn export_handler(State(state): State<AppState>) -> Response {
    let Some(session) = state.session.snapshot().await else {
        info!("Export requested with no data loaded");
        let view = PageView::Prompt {
            message: reports::LOAD_DATA_PROMPT.to_string(),
        };
        return (StatusCode::OK, Json(view)).into_response();
    };

    match export::to_csv(&session.table) {
        Ok(csv_text) => {
            let mut headers = HeaderMap::new();
            headers.insert(CONTENT_TYPE, "text/csv; charset=utf-8".parse().unwrap());
            headers.insert(
                CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    export::download_filename(&session.symbol)
                )
                .parse()
                .unwrap(),
            );

            info!(symbol = %session.symbol, rows = session.table.len(), "Serving CSV export");
            (StatusCode::OK, headers, csv_text).into_response()
        }
        Err(e) => {
            warn!(error = %e, "CSV export failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
    pub data_loaded: bool,
    pub symbol: Option<String>,
    pub rows: usize,
    pub fetched_at: Option<String>,
    pub current_system_time: String,
}

/// GET /health - liveness and session state
#[instrument(skip(state))]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.snapshot().await;

    let response = HealthResponse {
        status: "ok",
        uptime_secs: state.started_at.elapsed().as_secs(),
        data_loaded: session.is_some(),
        symbol: session.as_ref().map(|s| s.symbol.clone()),
        rows: session.as_ref().map(|s| s.table.len()).unwrap_or(0),
        fetched_at: session.as_ref().map(|s| s.fetched_at.to_rfc3339()),
        current_system_time: Utc::now().to_rfc3339(),
    };

    Json(response)
}

fn bad_request(message: String) -> Response {
    warn!(%message, "Rejecting request");
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

fn provider_error_response(error: &ProviderError) -> Response {
    warn!(%error, "Provider request failed");
    let status = match error {
        ProviderError::UnknownSymbol(_) | ProviderError::NoData => StatusCode::NOT_FOUND,
        ProviderError::Http(_) | ProviderError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(serde_json::json!({ "error": error.to_string() })),
    )
        .into_response()
}
