use crate::model::Rating;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle split of a carbon score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarbonBreakdown {
    pub production: Decimal,
    pub transportation: Decimal,
    pub disposal: Decimal,
}

impl CarbonBreakdown {
    pub const PRODUCTION_SHARE: Decimal = Decimal::from_parts(6, 0, 0, false, 1);
    pub const TRANSPORTATION_SHARE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
    pub const DISPOSAL_SHARE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

    /// Split a total into the fixed 60/25/15 shares.
    pub fn split(value: Decimal) -> CarbonBreakdown {
        CarbonBreakdown {
            production: (value * Self::PRODUCTION_SHARE).normalize(),
            transportation: (value * Self::TRANSPORTATION_SHARE).normalize(),
            disposal: (value * Self::DISPOSAL_SHARE).normalize(),
        }
    }

    pub fn total(&self) -> Decimal {
        self.production + self.transportation + self.disposal
    }
}

/// Estimated emissions (kg CO2-eq) of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarbonScore {
    pub value: Decimal,
    pub rating: Rating,
    pub details: CarbonBreakdown,
}

/// Statistics derived from a scan history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_scans: u64,
    pub eco_points: i64,
    /// Scans rated low.
    pub total_eco_choices: u64,
    /// Heuristic kg CO2-eq credited for low-rated scans.
    pub carbon_saved: Decimal,
}
