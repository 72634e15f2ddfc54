use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Open Food Facts v0 product response (`/api/v0/product/<barcode>.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffResponse {
    /// 1 when the product was found, 0 otherwise.
    pub status: i64,
    #[serde(default)]
    pub product: Option<OffProduct>,
}

/// The subset of Open Food Facts product fields the scanner reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OffProduct {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub ecoscore_grade: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels_tags: Vec<String>,
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(default)]
    pub ingredients_text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Open Food Facts sends `null` for some list fields.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Category-keyed catalog of impact figures and lower-impact alternatives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeCatalog {
    pub name: String,
    pub version: String,
    /// Checked in order; the first keyword found in a product's categories wins.
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub keyword: String,
    #[serde(default)]
    pub impact: Option<CategoryImpact>,
    #[serde(default)]
    pub alternatives: Vec<AlternativeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryImpact {
    pub water_usage: String,
    pub energy_consumption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeDef {
    pub name: String,
    pub carbon_score: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_found_response() {
        let json = r#"{
            "code": "3017620422003",
            "status": 1,
            "status_verbose": "product found",
            "product": {
                "product_name": "Nutella",
                "brands": "Ferrero",
                "quantity": "400 g",
                "ecoscore_grade": "e",
                "labels_tags": ["en:no-gluten"],
                "nutriments": { "energy": 2252 }
            }
        }"#;
        let resp: OffResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, 1);
        let product = resp.product.unwrap();
        assert_eq!(product.product_name.as_deref(), Some("Nutella"));
        assert_eq!(product.labels_tags, vec!["en:no-gluten"]);
        assert!(product.packaging.is_none());
    }

    #[test]
    fn test_parse_not_found_response() {
        let json = r#"{ "code": "0000", "status": 0, "status_verbose": "product not found" }"#;
        let resp: OffResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, 0);
        assert!(resp.product.is_none());
    }

    #[test]
    fn test_null_fields() {
        let json = r#"{ "status": 1, "product": { "labels_tags": null, "brands": null } }"#;
        let resp: OffResponse = serde_json::from_str(json).unwrap();
        let product = resp.product.unwrap();
        assert!(product.labels_tags.is_empty());
        assert!(product.brands.is_none());
    }
}
