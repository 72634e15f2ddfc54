use crate::error::CarbonError;
use crate::model::{new_record_id, Alternative, ScanRecord};
use crate::parsing::validate_barcode;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A scan submitted from outside the library (e.g. a JSON request body).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScanRequest {
    pub barcode: String,
    pub product_name: String,
    pub carbon_score: Decimal,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sustainability_badges: Vec<String>,
    #[serde(default)]
    pub recyclable: Option<bool>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

impl ScanRequest {
    /// Parse and validate a JSON request body.
    pub fn from_json(json: &str) -> Result<ScanRequest, CarbonError> {
        serde_json::from_str(json).map_err(|e| CarbonError::InvalidScan(e.to_string()))
    }

    /// Validate the request and turn it into a record, stamped `now` unless
    /// the request carries its own timestamp.
    pub fn into_record(self, now: DateTime<Utc>) -> Result<ScanRecord, CarbonError> {
        let barcode = validate_barcode(&self.barcode)?.to_string();

        let product_name = self.product_name.trim();
        if product_name.is_empty() {
            return Err(CarbonError::InvalidScan(
                "productName must not be empty".into(),
            ));
        }

        if self.carbon_score < Decimal::ZERO {
            return Err(CarbonError::InvalidScan(format!(
                "carbonScore must not be negative, got {}",
                self.carbon_score
            )));
        }

        Ok(ScanRecord {
            id: new_record_id(),
            barcode,
            product_name: product_name.to_string(),
            timestamp: self.timestamp.unwrap_or(now),
            carbon_score: self.carbon_score,
            brand: self.brand,
            category: self.category,
            sustainability_badges: self.sustainability_badges,
            recyclable: self.recyclable,
            alternatives: self.alternatives,
        })
    }
}
