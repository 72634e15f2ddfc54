use crate::error::CarbonError;
use crate::model::Alternative;
use crate::product::schema::{AlternativeCatalog, CategoryEntry};
use rust_decimal::Decimal;
use std::path::Path;

const BUILTIN_CATALOG_JSON: &str = include_str!("../../catalog/alternatives.json");

/// Load the catalog shipped with the crate.
pub fn builtin_catalog() -> Result<AlternativeCatalog, CarbonError> {
    parse_catalog_str(BUILTIN_CATALOG_JSON)
}

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<AlternativeCatalog, CarbonError> {
    let content = std::fs::read_to_string(path)?;
    parse_catalog_str(&content)
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog_str(json: &str) -> Result<AlternativeCatalog, CarbonError> {
    let catalog: AlternativeCatalog = serde_json::from_str(json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed.
pub fn validate_catalog(catalog: &AlternativeCatalog) -> Result<(), CarbonError> {
    for entry in &catalog.categories {
        if entry.keyword.trim().is_empty() {
            return Err(CarbonError::CatalogInvalid(
                "category keyword must not be empty".into(),
            ));
        }
        if entry.keyword != entry.keyword.to_lowercase() {
            return Err(CarbonError::CatalogInvalid(format!(
                "category keyword '{}' must be lowercase",
                entry.keyword
            )));
        }
        for alt in &entry.alternatives {
            if alt.name.trim().is_empty() {
                return Err(CarbonError::CatalogInvalid(format!(
                    "category '{}' has an alternative without a name",
                    entry.keyword
                )));
            }
            if alt.carbon_score < Decimal::ZERO {
                return Err(CarbonError::CatalogInvalid(format!(
                    "alternative '{}' has a negative carbon score",
                    alt.name
                )));
            }
        }
    }
    Ok(())
}

impl AlternativeCatalog {
    /// First entry whose keyword occurs in the (case-insensitive) category text.
    pub fn find(&self, category: &str) -> Option<&CategoryEntry> {
        let category = category.to_lowercase();
        self.categories
            .iter()
            .find(|entry| category.contains(entry.keyword.as_str()))
    }

    /// Alternatives for a category, with savings relative to `current_score`.
    pub fn suggest(&self, category: &str, current_score: Decimal) -> Vec<Alternative> {
        let Some(entry) = self.find(category) else {
            return Vec::new();
        };
        entry
            .alternatives
            .iter()
            .map(|alt| Alternative {
                name: alt.name.clone(),
                carbon_score: alt.carbon_score,
                savings: (current_score - alt.carbon_score).normalize(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = builtin_catalog().unwrap();
        let keywords: Vec<&str> = catalog
            .categories
            .iter()
            .map(|c| c.keyword.as_str())
            .collect();
        assert_eq!(keywords, vec!["beverages", "snacks", "dairy"]);
    }

    #[test]
    fn test_suggest_for_beverages() {
        let catalog = builtin_catalog().unwrap();
        let alts = catalog.suggest("Plant-based foods, Beverages, Waters", dec!(1.25));
        assert_eq!(alts.len(), 3);
        assert_eq!(alts[0].name, "Reusable Steel Water Bottle");
        assert_eq!(alts[0].savings, dec!(0.95));
    }

    #[test]
    fn test_negative_savings_kept() {
        let catalog = builtin_catalog().unwrap();
        let alts = catalog.suggest("dairy", dec!(0.5));
        assert_eq!(alts[0].savings, dec!(-1.0));
    }

    #[test]
    fn test_unknown_category_has_no_suggestions() {
        let catalog = builtin_catalog().unwrap();
        assert!(catalog.suggest("Spreads", dec!(1)).is_empty());
        assert!(catalog.suggest("", dec!(1)).is_empty());
    }

    #[test]
    fn test_first_keyword_wins() {
        let catalog = builtin_catalog().unwrap();
        let entry = catalog.find("Dairy snacks").unwrap();
        assert_eq!(entry.keyword, "snacks");
    }

    #[test]
    fn test_uppercase_keyword_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "categories": [ { "keyword": "Dairy" } ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_negative_score_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "categories": [
                { "keyword": "dairy", "alternatives": [ { "name": "Oat", "carbon_score": "-1" } ] }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }
}
