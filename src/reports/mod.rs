//! Report pages: pure functions of the held session.

pub mod features;
pub mod preview;
pub mod stats;
pub mod summary;
pub mod visualization;

use serde::Serialize;

use crate::models::{catalog, Page};
use crate::services::export;
use crate::services::session::Session;

/// Prompt shown when a data-bearing page is requested before any fetch
pub const LOAD_DATA_PROMPT: &str = "Load stock data first in the Data Extraction page!";

/// Rendered content of one dashboard page
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageView {
    /// Static text sections (Domain Knowledge, Conclusion)
    Text {
        title: String,
        paragraphs: Vec<String>,
    },
    /// Data Extraction: the selectable catalog and the fetch contract
    Extraction {
        title: String,
        companies: Vec<catalog::CatalogEntry>,
        instructions: String,
    },
    Preview(preview::PreviewReport),
    Summary(summary::SummaryReport),
    Visualization(visualization::VisualizationReport),
    Features(features::FeaturesReport),
    /// Downloads: whether an export is available and under what name
    Downloads {
        available: bool,
        filename: Option<String>,
        row_count: usize,
    },
    /// Fallback for data-bearing pages requested before any fetch
    Prompt { message: String },
}

/// Render one page against the current session, if any.
///
/// Pages that read the held table fall back to the load-first prompt when
/// no session exists; static pages render regardless. Dispatch is
/// exhaustive over `Page`.
pub fn render(page: Page, session: Option<&Session>) -> PageView {
    match page {
        Page::DomainKnowledge => PageView::Text {
            title: page.title().to_string(),
            paragraphs: domain_knowledge_paragraphs(),
        },
        Page::DataExtraction => PageView::Extraction {
            title: page.title().to_string(),
            companies: catalog::entries(),
            instructions: "Select a company and a date range, then fetch its daily stock data."
                .to_string(),
        },
        Page::Conclusion => PageView::Text {
            title: page.title().to_string(),
            paragraphs: conclusion_paragraphs(),
        },
        Page::DataPreview => {
            data_page(session, |s| PageView::Preview(preview::render(&s.symbol, &s.table)))
        }
        Page::DataSummary => {
            data_page(session, |s| PageView::Summary(summary::render(&s.symbol, &s.table)))
        }
        Page::DataVisualization => data_page(session, |s| {
            PageView::Visualization(visualization::render(&s.symbol, &s.table))
        }),
        Page::FeatureEngineering => {
            data_page(session, |s| PageView::Features(features::render(&s.symbol, &s.table)))
        }
        Page::Downloads => data_page(session, |s| PageView::Downloads {
            available: !s.table.is_empty(),
            filename: Some(export::download_filename(&s.symbol)),
            row_count: s.table.len(),
        }),
    }
}

fn data_page<F>(session: Option<&Session>, render: F) -> PageView
where
    F: FnOnce(&Session) -> PageView,
{
    match session {
        Some(session) => render(session),
        None => PageView::Prompt {
            message: LOAD_DATA_PROMPT.to_string(),
        },
    }
}

fn domain_knowledge_paragraphs() -> Vec<String> {
    vec![
        "A company's stock represents partial ownership in the company: a share is a \
         security granting its holder a claim on the corporation's assets and profits \
         proportional to the number of shares owned."
            .to_string(),
        "Investors buy stocks and later sell them, profiting when the price rises and \
         losing when it falls. Prices move with many factors, from outstanding share \
         counts to projected future profits, and the ticker reports them continuously \
         throughout the trading day."
            .to_string(),
    ]
}

fn conclusion_paragraphs() -> Vec<String> {
    vec![
        "The dashboard walks one symbol from raw provider data to descriptive \
         statistics, charts and derived features, so trends and risk measures can be \
         read off a single fetched table."
            .to_string(),
        "Summaries, moving averages and correlation views build on the same held data, \
         making it easy to compare what each lens reveals about the stock's behavior."
            .to_string(),
    ]
}
