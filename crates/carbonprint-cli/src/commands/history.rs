use carbonprint_core::config::StatsConfig;
use carbonprint_core::error::CarbonError;
use carbonprint_core::history::{HistoryRepository, ScanRequest};
use carbonprint_core::store::FileStore;
use std::path::{Path, PathBuf};

use crate::output;

fn open(
    store_dir: PathBuf,
    config: StatsConfig,
) -> Result<HistoryRepository<FileStore>, CarbonError> {
    Ok(HistoryRepository::new(FileStore::open(store_dir)?, config))
}

pub fn list(
    store_dir: PathBuf,
    user: &str,
    config: StatsConfig,
    output_format: &str,
) -> Result<(), CarbonError> {
    let repo = open(store_dir, config)?;
    let history = repo.load(user)?;

    match output_format {
        "json" => output::json::print(history.records())?,
        _ => output::table::print_history(user, history.records()),
    }

    Ok(())
}

pub fn stats(
    store_dir: PathBuf,
    user: &str,
    config: StatsConfig,
    output_format: &str,
) -> Result<(), CarbonError> {
    let repo = open(store_dir, config)?;
    let stats = carbonprint_core::user_stats(&repo, user)?;

    match output_format {
        "json" => output::json::print(&stats)?,
        _ => output::table::print_stats(user, &stats),
    }

    Ok(())
}

pub fn add(
    store_dir: PathBuf,
    user: &str,
    config: StatsConfig,
    request_file: &Path,
) -> Result<(), CarbonError> {
    let body = std::fs::read_to_string(request_file)?;
    let record = ScanRequest::from_json(&body)?.into_record(chrono::Utc::now())?;

    let mut repo = open(store_dir, config)?;
    let outcome = carbonprint_core::append_record(&mut repo, user, record)?;

    eprintln!(
        "Recorded {} ({}), {} scan(s) in history",
        outcome.record.product_name,
        outcome.record.barcode,
        outcome.history.len()
    );
    output::table::print_points_delta(outcome.points_delta);
    output::table::print_stats(user, &outcome.stats);

    Ok(())
}

pub fn reset(store_dir: PathBuf, user: &str, config: StatsConfig) -> Result<(), CarbonError> {
    let mut repo = open(store_dir, config)?;
    if repo.reset(user)? {
        eprintln!("History for '{user}' cleared");
    } else {
        eprintln!("No history stored for '{user}'");
    }
    Ok(())
}
