use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scoring::outcome::CarbonScore;

/// Sustainability grade as published by Open Food Facts (`ecoscore_grade`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// Parse a raw grade tag. Only the exact lowercase tags `a`-`e` match;
    /// anything else ("A", " e ", "unknown", "a-plus") is treated as absent.
    pub fn from_tag(s: &str) -> Option<Grade> {
        match s {
            "a" => Some(Grade::A),
            "b" => Some(Grade::B),
            "c" => Some(Grade::C),
            "d" => Some(Grade::D),
            "e" => Some(Grade::E),
            _ => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Grade::A => "a",
            Grade::B => "b",
            Grade::C => "c",
            Grade::D => "d",
            Grade::E => "e",
        };
        write!(f, "{tag}")
    }
}

/// Qualitative bucket of a carbon score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    /// Scores strictly below this are rated low.
    pub const LOW_BELOW: Decimal = Decimal::from_parts(3, 0, 0, false, 1);
    /// Scores at or above this are rated high.
    pub const HIGH_FROM: Decimal = Decimal::ONE;

    /// Classify a score value: `[0, 0.3)` low, `[0.3, 1)` medium, `[1, ..)` high.
    pub fn from_value(value: Decimal) -> Rating {
        if value < Self::LOW_BELOW {
            Rating::Low
        } else if value < Self::HIGH_FROM {
            Rating::Medium
        } else {
            Rating::High
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Low => write!(f, "low"),
            Rating::Medium => write!(f, "medium"),
            Rating::High => write!(f, "high"),
        }
    }
}

/// A lower-impact product suggested in place of the scanned one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub name: String,
    pub carbon_score: Decimal,
    /// Scanned score minus the alternative's score. Negative when the
    /// alternative is worse.
    pub savings: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactDetails {
    pub water_usage: String,
    pub energy_consumption: String,
    pub material_type: String,
}

/// Everything the scanner shows about one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSustainability {
    /// The barcode the product was looked up by.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub carbon_score: CarbonScore,
    pub certifications: Vec<String>,
    pub recyclable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_warning: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub sustainability_badges: Vec<String>,
    pub impact_details: ImpactDetails,
    pub alternatives: Vec<Alternative>,
    /// Quantity text the score was computed from.
    pub quantity: String,
}

/// One logged barcode scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub id: String,
    pub barcode: String,
    pub product_name: String,
    pub timestamp: DateTime<Utc>,
    pub carbon_score: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sustainability_badges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recyclable: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Alternative>,
}

impl ScanRecord {
    /// Build the record logged for a successful product lookup.
    pub fn from_product(product: &ProductSustainability, timestamp: DateTime<Utc>) -> ScanRecord {
        ScanRecord {
            id: new_record_id(),
            barcode: product.id.clone(),
            product_name: product.name.clone(),
            timestamp,
            carbon_score: product.carbon_score.value,
            brand: product.brand.clone(),
            category: product.category.clone(),
            sustainability_badges: product.sustainability_badges.clone(),
            recyclable: Some(product.recyclable),
            alternatives: product.alternatives.clone(),
        }
    }

    /// Rating of the stored score value.
    pub fn rating(&self) -> Rating {
        Rating::from_value(self.carbon_score)
    }
}

pub(crate) fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
