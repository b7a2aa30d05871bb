use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::Page;
use crate::reports;
use crate::services::session::Session;
use crate::services::ProviderClient;
use crate::utils::parse_date;

use super::display;

pub async fn run(symbol: String, page: String, start: String, end: Option<String>) {
    match execute(symbol, page, start, end).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn execute(symbol: String, page: String, start: String, end: Option<String>) -> Result<()> {
    let page: Page = page.parse()?;

    // Static sections render without a fetch
    if !page.requires_data() {
        display::print_page(&reports::render(page, None));
        return Ok(());
    }

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

    println!("📈 Fetching {} from {} to {}...\n", symbol, start, end);
    let client = ProviderClient::new()?;
    let table = client.fetch_history(&symbol, start, end).await?;

    let session = Session {
        symbol,
        table,
        fetched_at: Utc::now(),
    };
    display::print_page(&reports::render(page, Some(&session)));

    Ok(())
}
