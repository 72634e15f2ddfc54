use crate::model::{ImpactDetails, ProductSustainability};
use crate::parsing::labels::{certifications, strip_language_prefix};
use crate::product::schema::{AlternativeCatalog, OffProduct};
use crate::scoring::carbon::score_text;

pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";
pub const DEFAULT_QUANTITY_TEXT: &str = "100 g";
pub const PLASTIC_WARNING: &str = "Contains Plastic Packaging";
const UNKNOWN: &str = "Unknown";

/// Derive the sustainability view of an Open Food Facts product.
pub fn analyze_product(
    barcode: &str,
    product: &OffProduct,
    catalog: &AlternativeCatalog,
) -> ProductSustainability {
    let quantity = non_blank(product.quantity.as_deref())
        .unwrap_or(DEFAULT_QUANTITY_TEXT)
        .to_string();
    let carbon_score = score_text(product.ecoscore_grade.as_deref(), &quantity);

    let packaging = product
        .packaging
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let recyclable = packaging.contains("recyclable");
    let packaging_warning = packaging
        .contains("plastic")
        .then(|| PLASTIC_WARNING.to_string());

    let category_text = product.categories.as_deref().unwrap_or_default();
    let alternatives = catalog.suggest(category_text, carbon_score.value);

    tracing::debug!(
        barcode,
        score = %carbon_score.value,
        rating = %carbon_score.rating,
        "analyzed product"
    );

    ProductSustainability {
        id: barcode.to_string(),
        name: non_blank(product.product_name.as_deref())
            .unwrap_or(UNKNOWN_PRODUCT_NAME)
            .to_string(),
        brand: product.brands.clone(),
        category: product.categories.clone(),
        carbon_score,
        certifications: certifications(&product.labels_tags),
        recyclable,
        packaging_warning,
        ingredients: split_ingredients(product.ingredients_text.as_deref()),
        image_url: product.image_url.clone(),
        sustainability_badges: sustainability_badges(product, recyclable),
        impact_details: impact_details(product, catalog),
        alternatives,
        quantity,
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

fn has_label(product: &OffProduct, keyword: &str) -> bool {
    product
        .labels_tags
        .iter()
        .any(|tag| strip_language_prefix(tag).contains(keyword))
}

/// Badges in display order: organic, fair-trade, recyclable, local-production.
fn sustainability_badges(product: &OffProduct, recyclable: bool) -> Vec<String> {
    let mut badges = Vec::new();
    if has_label(product, "organic") {
        badges.push("organic".to_string());
    }
    if has_label(product, "fair-trade") {
        badges.push("fair-trade".to_string());
    }
    if recyclable {
        badges.push("recyclable".to_string());
    }
    if has_label(product, "local") {
        badges.push("local-production".to_string());
    }
    badges
}

fn impact_details(product: &OffProduct, catalog: &AlternativeCatalog) -> ImpactDetails {
    let impact = product
        .categories
        .as_deref()
        .and_then(|c| catalog.find(c))
        .and_then(|entry| entry.impact.as_ref());

    ImpactDetails {
        water_usage: impact
            .map(|i| i.water_usage.clone())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        energy_consumption: impact
            .map(|i| i.energy_consumption.clone())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        material_type: non_blank(product.packaging.as_deref())
            .unwrap_or(UNKNOWN)
            .to_string(),
    }
}

fn split_ingredients(text: Option<&str>) -> Vec<String> {
    text.map(|t| {
        t.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rating;
    use crate::product::catalog::builtin_catalog;
    use rust_decimal_macros::dec;

    fn water() -> OffProduct {
        OffProduct {
            product_name: Some("Spring Water".into()),
            brands: Some("Clearly".into()),
            categories: Some("Beverages, Waters".into()),
            quantity: Some("1.5 l".into()),
            ecoscore_grade: Some("b".into()),
            labels_tags: vec!["en:organic".into(), "en:made-locally".into()],
            packaging: Some("Plastic bottle, recyclable".into()),
            ingredients_text: Some("water, minerals, ".into()),
            image_url: Some("https://images.example/water.jpg".into()),
        }
    }

    #[test]
    fn test_full_product() {
        let catalog = builtin_catalog().unwrap();
        let p = analyze_product("5000000000001", &water(), &catalog);

        assert_eq!(p.id, "5000000000001");
        assert_eq!(p.name, "Spring Water");
        // 0.0025 * 0.75 * 1500
        assert_eq!(p.carbon_score.value, dec!(2.8125));
        assert_eq!(p.carbon_score.rating, Rating::High);
        assert_eq!(p.certifications, vec!["Organic"]);
        assert!(p.recyclable);
        assert_eq!(p.packaging_warning.as_deref(), Some(PLASTIC_WARNING));
        assert_eq!(p.ingredients, vec!["water", "minerals"]);
        assert_eq!(
            p.sustainability_badges,
            vec!["organic", "recyclable", "local-production"]
        );
        assert_eq!(p.impact_details.water_usage, "4.5L per unit (including production)");
        assert_eq!(p.impact_details.material_type, "Plastic bottle, recyclable");
        assert_eq!(p.alternatives.len(), 3);
        assert_eq!(p.alternatives[2].savings, dec!(2.3125));
        assert_eq!(p.quantity, "1.5 l");
    }

    #[test]
    fn test_empty_product_defaults() {
        let catalog = builtin_catalog().unwrap();
        let p = analyze_product("123", &OffProduct::default(), &catalog);

        assert_eq!(p.name, UNKNOWN_PRODUCT_NAME);
        assert_eq!(p.quantity, DEFAULT_QUANTITY_TEXT);
        assert_eq!(p.carbon_score.value, dec!(0.25));
        assert_eq!(p.carbon_score.rating, Rating::Low);
        assert!(!p.recyclable);
        assert!(p.packaging_warning.is_none());
        assert!(p.certifications.is_empty());
        assert!(p.sustainability_badges.is_empty());
        assert!(p.alternatives.is_empty());
        assert!(p.ingredients.is_empty());
        assert_eq!(
            p.impact_details,
            ImpactDetails {
                water_usage: "Unknown".into(),
                energy_consumption: "Unknown".into(),
                material_type: "Unknown".into(),
            }
        );
    }

    #[test]
    fn test_blank_name_and_quantity_use_defaults() {
        let catalog = builtin_catalog().unwrap();
        let product = OffProduct {
            product_name: Some("  ".into()),
            quantity: Some("".into()),
            ..OffProduct::default()
        };
        let p = analyze_product("123", &product, &catalog);
        assert_eq!(p.name, UNKNOWN_PRODUCT_NAME);
        assert_eq!(p.quantity, DEFAULT_QUANTITY_TEXT);
    }

    #[test]
    fn test_fair_trade_badge() {
        let catalog = builtin_catalog().unwrap();
        let product = OffProduct {
            labels_tags: vec!["en:fair-trade".into()],
            categories: Some("Snacks".into()),
            ..OffProduct::default()
        };
        let p = analyze_product("123", &product, &catalog);
        assert_eq!(p.sustainability_badges, vec!["fair-trade"]);
        assert_eq!(p.certifications, vec!["Fair Trade"]);
        assert_eq!(p.impact_details.energy_consumption, "1.2 kWh per unit");
    }
}
