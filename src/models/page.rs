use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AppError;

/// Dashboard sections, in sidebar order.
///
/// Dispatch on this enum is exhaustive: adding a section without wiring a
/// renderer is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    DomainKnowledge,
    DataExtraction,
    DataPreview,
    DataSummary,
    DataVisualization,
    FeatureEngineering,
    Conclusion,
    Downloads,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::DomainKnowledge,
        Page::DataExtraction,
        Page::DataPreview,
        Page::DataSummary,
        Page::DataVisualization,
        Page::FeatureEngineering,
        Page::Conclusion,
        Page::Downloads,
    ];

    /// URL slug of the section
    pub fn slug(&self) -> &'static str {
        match self {
            Page::DomainKnowledge => "domain-knowledge",
            Page::DataExtraction => "data-extraction",
            Page::DataPreview => "data-preview",
            Page::DataSummary => "data-summary",
            Page::DataVisualization => "data-visualization",
            Page::FeatureEngineering => "feature-engineering",
            Page::Conclusion => "conclusion",
            Page::Downloads => "downloads",
        }
    }

    /// Display title of the section
    pub fn title(&self) -> &'static str {
        match self {
            Page::DomainKnowledge => "Domain Knowledge",
            Page::DataExtraction => "Data Extraction",
            Page::DataPreview => "Data Preview",
            Page::DataSummary => "Data Summary",
            Page::DataVisualization => "Data Visualization",
            Page::FeatureEngineering => "Feature Engineering",
            Page::Conclusion => "Conclusion",
            Page::Downloads => "Downloads",
        }
    }

    /// Whether the section reads the held table
    pub fn requires_data(&self) -> bool {
        matches!(
            self,
            Page::DataPreview
                | Page::DataSummary
                | Page::DataVisualization
                | Page::FeatureEngineering
                | Page::Downloads
        )
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_lowercase();
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == slug)
            .ok_or_else(|| {
                let valid: Vec<&str> = Page::ALL.iter().map(|p| p.slug()).collect();
                AppError::InvalidInput(format!(
                    "Unknown page '{}'. Valid pages: {}",
                    s,
                    valid.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.slug().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Data-Summary".parse::<Page>().unwrap(), Page::DataSummary);
    }

    #[test]
    fn test_unknown_slug_rejected() {
        let err = "settings".parse::<Page>().unwrap_err();
        assert!(err.to_string().contains("Valid pages"));
    }

    #[test]
    fn test_data_requirements() {
        assert!(Page::DataPreview.requires_data());
        assert!(Page::Downloads.requires_data());
        assert!(!Page::DomainKnowledge.requires_data());
        assert!(!Page::DataExtraction.requires_data());
        assert!(!Page::Conclusion.requires_data());
    }
}
