use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::{catalog, Page};
use crate::reports;
use crate::services::session::Session;
use crate::services::{export, ProviderClient};
use crate::utils::{get_export_dir, parse_date};

use super::display;

pub async fn run(symbol: String, start: String, end: Option<String>, export: bool) {
    match execute(symbol, start, end, export).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn execute(symbol: String, start: String, end: Option<String>, export_csv: bool) -> Result<()> {
    let symbol = symbol.trim().to_uppercase();
    let start = parse_date(&start)?;
    let end = match &end {
        Some(raw) => parse_date(raw)?,
        None => Utc::now().date_naive(),
    };
    if start > end {
        return Err(AppError::InvalidInput(
            "start date must not be after end date".to_string(),
        ));
    }

    match catalog::company_for(&symbol) {
        Some(company) => println!("📈 Fetching {} ({}) from {} to {}...", symbol, company, start, end),
        None => println!("📈 Fetching {} from {} to {}...", symbol, start, end),
    }

    let client = ProviderClient::new()?;
    let table = client.fetch_history(&symbol, start, end).await?;
    println!("✅ {} stock data has been successfully extracted.", symbol);
    println!("   Rows: {}   Columns: {}\n", table.len(), table.column_count());

    if export_csv {
        let path = export::write_csv_file(&table, &symbol, &get_export_dir())?;
        println!("💾 Saved {}\n", path.display());
    }

    let session = Session {
        symbol,
        table,
        fetched_at: Utc::now(),
    };
    display::print_page(&reports::render(Page::DataPreview, Some(&session)));

    Ok(())
}
