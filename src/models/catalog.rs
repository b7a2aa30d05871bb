//! The static company/ticker catalog shown on the Data Extraction page.

use serde::Serialize;

use crate::constants::COMPANY_CATALOG;

/// One selectable company
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub company: &'static str,
    pub symbol: &'static str,
}

/// All catalog entries, in display order
pub fn entries() -> Vec<CatalogEntry> {
    COMPANY_CATALOG
        .iter()
        .map(|&(company, symbol)| CatalogEntry { company, symbol })
        .collect()
}

/// All ticker symbols, in display order
pub fn symbols() -> Vec<&'static str> {
    COMPANY_CATALOG.iter().map(|&(_, symbol)| symbol).collect()
}

/// Company name for a symbol, case-insensitive
pub fn company_for(symbol: &str) -> Option<&'static str> {
    COMPANY_CATALOG
        .iter()
        .find(|(_, s)| s.eq_ignore_ascii_case(symbol))
        .map(|&(company, _)| company)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_companies() {
        assert_eq!(entries().len(), 10);
        assert_eq!(symbols().len(), 10);
    }

    #[test]
    fn test_lookup_by_symbol() {
        assert_eq!(company_for("AAPL"), Some("Apple Inc"));
        assert_eq!(company_for("aapl"), Some("Apple Inc"));
        assert_eq!(company_for("BRK-A"), Some("Berkshire Hathaway Inc. (Class A)"));
        assert_eq!(company_for("ZZZZ"), None);
    }
}
