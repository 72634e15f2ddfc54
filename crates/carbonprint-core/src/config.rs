use crate::error::CarbonError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// kg CO2-eq credited for every low-rated scan.
pub const CARBON_SAVED_PER_ECO_CHOICE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Scans kept per user, newest first.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Upper bound accepted for `history_limit`.
pub const MAX_HISTORY_LIMIT: usize = 500;

/// Tunables for history retention and statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsConfig {
    pub carbon_saved_per_eco_choice: Decimal,
    pub history_limit: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            carbon_saved_per_eco_choice: CARBON_SAVED_PER_ECO_CHOICE,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Load a config from a JSON file.
pub fn load_config(path: &Path) -> Result<StatsConfig, CarbonError> {
    let content = std::fs::read_to_string(path).map_err(|e| CarbonError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: StatsConfig =
        serde_json::from_str(&content).map_err(|e| CarbonError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a config from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<StatsConfig, CarbonError> {
    let config: StatsConfig = serde_json::from_str(json)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &StatsConfig) -> Result<(), CarbonError> {
    if config.history_limit == 0 || config.history_limit > MAX_HISTORY_LIMIT {
        return Err(CarbonError::ConfigInvalid(format!(
            "history_limit must be between 1 and {}, got {}",
            MAX_HISTORY_LIMIT, config.history_limit
        )));
    }

    if config.carbon_saved_per_eco_choice < Decimal::ZERO {
        return Err(CarbonError::ConfigInvalid(format!(
            "carbon_saved_per_eco_choice must not be negative, got {}",
            config.carbon_saved_per_eco_choice
        )));
    }

    Ok(())
}
