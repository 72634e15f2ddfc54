pub mod labels;
pub mod quantity;

pub use labels::certifications;
pub use quantity::{normalize_quantity, parse_quantity, Quantity, QuantityUnit, DEFAULT_QUANTITY};

use crate::error::CarbonError;

/// Longest barcode accepted (GTIN-14 plus room for vendor-specific codes).
pub const MAX_BARCODE_LEN: usize = 32;

/// Check that a barcode is 1-32 ASCII digits and return it trimmed.
pub fn validate_barcode(raw: &str) -> Result<&str, CarbonError> {
    let barcode = raw.trim();
    if barcode.is_empty() {
        return Err(CarbonError::InvalidScan("barcode must not be empty".into()));
    }
    if barcode.len() > MAX_BARCODE_LEN {
        return Err(CarbonError::InvalidScan(format!(
            "barcode '{}' is longer than {} digits",
            barcode, MAX_BARCODE_LEN
        )));
    }
    if !barcode.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CarbonError::InvalidScan(format!(
            "barcode '{}' must contain only digits",
            barcode
        )));
    }
    Ok(barcode)
}
