use crate::config::StatsConfig;
use crate::error::CarbonError;
use crate::history::ScanHistory;
use crate::model::ScanRecord;
use crate::store::KeyValueStore;

/// Per-user scan histories persisted in a [`KeyValueStore`].
pub struct HistoryRepository<S> {
    store: S,
    config: StatsConfig,
}

impl<S: KeyValueStore> HistoryRepository<S> {
    pub fn new(store: S, config: StatsConfig) -> Self {
        HistoryRepository { store, config }
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    fn key(user: &str) -> String {
        format!("history-{user}")
    }

    /// The user's history; empty when nothing was stored yet.
    pub fn load(&self, user: &str) -> Result<ScanHistory, CarbonError> {
        let mut history = match self.store.get(&Self::key(user))? {
            Some(json) => serde_json::from_str::<ScanHistory>(&json)?,
            None => ScanHistory::with_limit(self.config.history_limit),
        };
        history.set_limit(self.config.history_limit);
        Ok(history)
    }

    pub fn save(&mut self, user: &str, history: &ScanHistory) -> Result<(), CarbonError> {
        let json = serde_json::to_string_pretty(history)?;
        self.store.put(&Self::key(user), json)
    }

    /// Append a scan to the user's history and return the updated history.
    pub fn append(&mut self, user: &str, record: ScanRecord) -> Result<ScanHistory, CarbonError> {
        let mut history = self.load(user)?;
        tracing::info!(
            user,
            barcode = %record.barcode,
            score = %record.carbon_score,
            "recording scan"
        );
        history.push(record);
        self.save(user, &history)?;
        Ok(history)
    }

    /// Delete the user's history. Returns whether one existed.
    pub fn reset(&mut self, user: &str) -> Result<bool, CarbonError> {
        let existed = self.store.delete(&Self::key(user))?;
        tracing::info!(user, existed, "history reset");
        Ok(existed)
    }
}
