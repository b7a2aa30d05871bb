use chrono::NaiveDate;
use std::path::PathBuf;

use crate::error::AppError;

/// Get the provider base URL from the environment or use the public default
pub fn get_provider_base_url() -> String {
    std::env::var("PROVIDER_BASE_URL")
        .unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string())
}

/// Get the CSV export directory from the environment or use the working directory
pub fn get_export_dir() -> PathBuf {
    std::env::var("EXPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Format a trading day as YYYY-MM-DD
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a YYYY-MM-DD date string
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::InvalidInput(format!("Invalid date '{}'. Expected YYYY-MM-DD", raw))
    })
}
