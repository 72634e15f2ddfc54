pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod parsing;
pub mod product;
pub mod scoring;
pub mod store;

use chrono::{DateTime, Utc};
use error::CarbonError;
use history::{HistoryRepository, ScanHistory};
use model::{ProductSustainability, ScanRecord};
use product::schema::AlternativeCatalog;
use product::ProductSource;
use scoring::outcome::UserStats;
use scoring::points::points_delta;
use store::KeyValueStore;

pub use parsing::normalize_quantity;
pub use scoring::{award_points, score, summarize};

/// Main API entry point: look up a barcode and compute its sustainability data.
///
/// The barcode is validated before it reaches the source. A response with
/// `status != 1` or without a product counts as not found.
pub fn lookup_product(
    barcode: &str,
    source: &dyn ProductSource,
    catalog: &AlternativeCatalog,
) -> Result<ProductSustainability, CarbonError> {
    let barcode = parsing::validate_barcode(barcode)?;

    tracing::debug!(barcode, backend = source.backend_name(), "looking up product");
    let response = source.lookup(barcode)?;

    let product = match response.product {
        Some(product) if response.status == 1 => product,
        _ => {
            return Err(CarbonError::ProductNotFound {
                barcode: barcode.to_string(),
            })
        }
    };

    Ok(product::analyze_product(barcode, &product, catalog))
}

/// What a recorded scan changed for the user.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub record: ScanRecord,
    /// Eco-points earned (or lost) by this scan.
    pub points_delta: i64,
    pub history: ScanHistory,
    pub stats: UserStats,
}

/// Log a looked-up product in the user's history and return the new stats.
pub fn record_scan<S: KeyValueStore>(
    repo: &mut HistoryRepository<S>,
    user: &str,
    product: &ProductSustainability,
    now: DateTime<Utc>,
) -> Result<ScanOutcome, CarbonError> {
    let record = ScanRecord::from_product(product, now);
    append_record(repo, user, record)
}

/// Log an already-built record (e.g. from a validated `ScanRequest`).
pub fn append_record<S: KeyValueStore>(
    repo: &mut HistoryRepository<S>,
    user: &str,
    record: ScanRecord,
) -> Result<ScanOutcome, CarbonError> {
    let delta = points_delta(record.carbon_score);
    let history = repo.append(user, record.clone())?;
    let stats = history.stats(repo.config());
    Ok(ScanOutcome {
        record,
        points_delta: delta,
        history,
        stats,
    })
}

/// Statistics for a user's stored history.
pub fn user_stats<S: KeyValueStore>(
    repo: &HistoryRepository<S>,
    user: &str,
) -> Result<UserStats, CarbonError> {
    Ok(repo.load(user)?.stats(repo.config()))
}
