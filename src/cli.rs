use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "stockdash")]
#[command(about = "Stock prices dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the selectable companies and their ticker symbols
    Catalog,
    /// Fetch daily history for a symbol and preview it
    Fetch {
        /// Ticker symbol (e.g. AAPL)
        symbol: String,

        /// Range start, YYYY-MM-DD
        #[arg(short, long)]
        start: String,

        /// Range end, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        end: Option<String>,

        /// Also write {SYMBOL}_stock_data.csv into the export directory
        #[arg(short = 'x', long)]
        export: bool,
    },
    /// Fetch and render one dashboard page in the terminal
    Report {
        /// Ticker symbol (e.g. AAPL)
        symbol: String,

        /// Page slug (e.g. data-summary, feature-engineering)
        page: String,

        /// Range start, YYYY-MM-DD
        #[arg(short, long)]
        start: String,

        /// Range end, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        end: Option<String>,
    },
    /// Start the dashboard server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8501)]
        port: u16,
    },
}

pub async fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog => {
            commands::catalog::run();
        }
        Commands::Fetch {
            symbol,
            start,
            end,
            export,
        } => {
            commands::fetch::run(symbol, start, end, export).await;
        }
        Commands::Report {
            symbol,
            page,
            start,
            end,
        } => {
            commands::report::run(symbol, page, start, end).await;
        }
        Commands::Serve { port } => {
            commands::serve::run(port).await;
        }
    }
}
