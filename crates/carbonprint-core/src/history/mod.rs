pub mod repository;
pub mod request;

pub use repository::HistoryRepository;
pub use request::ScanRequest;

use crate::config::{StatsConfig, DEFAULT_HISTORY_LIMIT};
use crate::model::ScanRecord;
use crate::scoring::outcome::UserStats;
use crate::scoring::points::summarize;
use serde::{Deserialize, Serialize};

/// Bounded list of scans, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanHistory {
    limit: usize,
    records: Vec<ScanRecord>,
}

impl Default for ScanHistory {
    fn default() -> Self {
        ScanHistory::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl ScanHistory {
    /// An empty history keeping at most `limit` scans (at least one).
    pub fn with_limit(limit: usize) -> Self {
        ScanHistory {
            limit: limit.max(1),
            records: Vec::new(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the capacity, dropping the oldest scans if needed.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.records.truncate(self.limit);
    }

    /// Prepend a scan, dropping the oldest one when over capacity.
    pub fn push(&mut self, record: ScanRecord) {
        self.records.insert(0, record);
        self.records.truncate(self.limit);
    }

    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Scans, newest first.
    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&ScanRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Statistics over the retained scans.
    pub fn stats(&self, config: &StatsConfig) -> UserStats {
        summarize(&self.records, config)
    }
}
