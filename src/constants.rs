//! Table layout and dashboard constants.

/// Column names of the fetched table, in export order. The CSV header row
/// uses exactly these names.
pub const TABLE_COLUMNS: &[&str] = &[
    "Date",
    "Open",
    "High",
    "Low",
    "Close",
    "Volume",
    "Dividends",
    "Stock Splits",
];

/// Numeric columns covered by the summary statistics table.
pub const NUMERIC_COLUMNS: &[&str] = &[
    "Open",
    "High",
    "Low",
    "Close",
    "Volume",
    "Dividends",
    "Stock Splits",
];

/// Trading days per year, used to annualize daily-return volatility.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Window length of the moving-average feature, in trading days.
pub const MOVING_AVERAGE_WINDOW: usize = 30;

/// Bin count of the daily-return histogram on the summary page.
pub const RETURN_HISTOGRAM_BINS: usize = 20;

/// Rows shown by the preview and moving-average tail tables.
pub const TAIL_ROWS: usize = 5;

/// Selectable companies on the Data Extraction page: (company, ticker).
pub const COMPANY_CATALOG: &[(&str, &str)] = &[
    ("Apple Inc", "AAPL"),
    ("Tesla, Inc", "TSLA"),
    ("Microsoft Corporation", "MSFT"),
    ("Amazon.com, Inc", "AMZN"),
    ("Alphabet Inc. (Google)", "GOOGL"),
    ("Meta Platforms, Inc.", "META"),
    ("Netflix, Inc.", "NFLX"),
    ("NVIDIA Corporation", "NVDA"),
    ("Berkshire Hathaway Inc. (Class A)", "BRK-A"),
    ("JP Morgan Chase & Co.", "JPM"),
];
