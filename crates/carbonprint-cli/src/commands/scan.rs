use carbonprint_core::config::StatsConfig;
use carbonprint_core::error::CarbonError;
use carbonprint_core::history::HistoryRepository;
use carbonprint_core::product::{builtin_catalog, JsonDirSource};
use carbonprint_core::store::FileStore;
use serde_json::json;
use std::path::PathBuf;

use crate::output;

pub fn run(
    barcode: &str,
    products_dir: PathBuf,
    store_dir: PathBuf,
    user: &str,
    config: StatsConfig,
    output_format: &str,
) -> Result<(), CarbonError> {
    let catalog = builtin_catalog()?;
    let source = JsonDirSource::new(products_dir);
    let product = carbonprint_core::lookup_product(barcode, &source, &catalog)?;

    let mut repo = HistoryRepository::new(FileStore::open(store_dir)?, config);
    let outcome = carbonprint_core::record_scan(&mut repo, user, &product, chrono::Utc::now())?;

    match output_format {
        "json" => output::json::print(&json!({
            "product": product,
            "pointsDelta": outcome.points_delta,
            "stats": outcome.stats,
        }))?,
        _ => {
            output::table::print_product(&product);
            output::table::print_points_delta(outcome.points_delta);
            output::table::print_stats(user, &outcome.stats);
        }
    }

    Ok(())
}
