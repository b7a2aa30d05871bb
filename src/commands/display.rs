//! Terminal rendering of page views.

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use crate::reports::PageView;

const HISTOGRAM_BAR_WIDTH: usize = 40;

/// Print one rendered page to stdout
pub fn print_page(view: &PageView) {
    match view {
        PageView::Text { title, paragraphs } => {
            println!("📖 {}\n", title);
            for paragraph in paragraphs {
                println!("{}\n", paragraph);
            }
        }

        PageView::Extraction {
            title,
            companies,
            instructions,
        } => {
            println!("🏷️  {}\n", title);
            let mut table = new_table(vec!["Company", "Ticker Symbol"]);
            for entry in companies {
                table.add_row(vec![entry.company, entry.symbol]);
            }
            println!("{table}");
            println!("\n💡 {}", instructions);
        }

        PageView::Preview(report) => {
            println!("🔍 {} latest rows for {}:\n", report.tail.len(), report.symbol);
            let mut table = new_table(vec![
                "Date", "Open", "High", "Low", "Close", "Volume", "Dividends", "Stock Splits",
            ]);
            for record in &report.tail {
                table.add_row(vec![
                    record.date.to_string(),
                    format!("{:.2}", record.open),
                    format!("{:.2}", record.high),
                    format!("{:.2}", record.low),
                    format!("{:.2}", record.close),
                    record.volume.to_string(),
                    format!("{:.2}", record.dividends),
                    format!("{:.2}", record.stock_splits),
                ]);
            }
            println!("{table}");
            println!("\n   Number of rows:    {}", report.row_count);
            println!("   Number of columns: {}", report.column_count);
            println!("   {}", report.missing_message);
        }

        PageView::Summary(report) => {
            println!("📊 Data Summary for {}:\n", report.symbol);
            let mut table = new_table(vec![
                "Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max",
            ]);
            for summary in &report.statistics {
                table.add_row(vec![
                    summary.column.clone(),
                    summary.count.to_string(),
                    format!("{:.2}", summary.mean),
                    format!("{:.2}", summary.std),
                    format!("{:.2}", summary.min),
                    format!("{:.2}", summary.q25),
                    format!("{:.2}", summary.median),
                    format!("{:.2}", summary.q75),
                    format!("{:.2}", summary.max),
                ]);
            }
            println!("{table}\n");

            if let Some(day) = &report.best_day {
                println!("🏆 Best day:  {} with a return of {:+.2}%", day.date, day.return_pct);
            }
            if let Some(day) = &report.worst_day {
                println!("📉 Worst day: {} with a return of {:+.2}%", day.date, day.return_pct);
            }

            if !report.return_histogram.is_empty() {
                println!("\nDaily return distribution:");
                let max_count = report
                    .return_histogram
                    .iter()
                    .map(|b| b.count)
                    .max()
                    .unwrap_or(0);
                for bin in &report.return_histogram {
                    let bar = if max_count == 0 {
                        0
                    } else {
                        bin.count * HISTOGRAM_BAR_WIDTH / max_count
                    };
                    println!(
                        "  {:>8.4} .. {:>8.4}  {:<width$} {}",
                        bin.start,
                        bin.end,
                        "█".repeat(bar),
                        bin.count,
                        width = HISTOGRAM_BAR_WIDTH
                    );
                }
            }
        }

        PageView::Visualization(report) => {
            println!("📈 Data Visualization for {}:\n", report.symbol);
            let range = match (report.close_line.first(), report.close_line.last()) {
                (Some(first), Some(last)) => format!("{} → {}", first.date, last.date),
                _ => "empty".to_string(),
            };
            println!("   Close price line: {:>6} points  ({})", report.close_line.len(), range);
            println!("   Candlesticks:     {:>6} bars", report.candlesticks.len());
            println!("   Volume bars:      {:>6} bars", report.volume_bars.len());
            println!("\n💡 Chart-ready series are served as JSON at /page/data-visualization");
        }

        PageView::Features(report) => {
            println!("🧮 Feature Engineering for {}:\n", report.symbol);
            let mut table = new_table(vec!["Date", "Close", "Moving Average (30 days)"]);
            for row in &report.moving_average_tail {
                table.add_row(vec![
                    row.date.to_string(),
                    format!("{:.2}", row.close),
                    row.moving_average
                        .map(|v| format!("{:.2}", v))
                        .unwrap_or_else(|| "-".to_string()),
                ]);
            }
            println!("{table}\n");

            let mut matrix = new_table(
                std::iter::once("".to_string())
                    .chain(report.correlation.columns.iter().cloned())
                    .collect(),
            );
            for (name, row) in report
                .correlation
                .columns
                .iter()
                .zip(&report.correlation.values)
            {
                let mut cells = vec![name.clone()];
                cells.extend(row.iter().map(|value| {
                    value
                        .map(|v| format!("{:.3}", v))
                        .unwrap_or_else(|| "-".to_string())
                }));
                matrix.add_row(cells);
            }
            println!("Correlations between attributes:");
            println!("{matrix}\n");

            match report.roi_pct {
                Some(roi) => println!("💰 Return on Investment (ROI): {:.2}%", roi),
                None => println!("💰 Return on Investment (ROI): n/a"),
            }
            match report.annualized_volatility {
                Some(vol) => println!("🌪️  Annualized volatility:      {:.4}", vol),
                None => println!("🌪️  Annualized volatility:      n/a"),
            }
        }

        PageView::Downloads {
            available,
            filename,
            row_count,
        } => {
            if *available {
                println!(
                    "💾 Export available: {} ({} rows)",
                    filename.as_deref().unwrap_or("-"),
                    row_count
                );
                println!("   Run `stockdash fetch <SYMBOL> --start <DATE> --export` to write it.");
            } else {
                println!("💾 No export available.");
            }
        }

        PageView::Prompt { message } => {
            println!("ℹ️  {}", message);
        }
    }
}

fn new_table<T: Into<comfy_table::Cell>>(header: Vec<T>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header);
    table
}
