pub mod file;

pub use file::FileStore;

use crate::error::CarbonError;
use std::collections::HashMap;

/// Minimal string key-value storage used for persisted scan histories.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, CarbonError>;

    fn put(&mut self, key: &str, value: String) -> Result<(), CarbonError>;

    /// Remove a key. Returns whether it existed.
    fn delete(&mut self, key: &str) -> Result<bool, CarbonError>;
}

/// Keys are 1-64 characters from `[A-Za-z0-9_-]`, so they are safe as file names.
pub fn validate_key(key: &str) -> Result<(), CarbonError> {
    let valid = !key.is_empty()
        && key.len() <= 64
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(CarbonError::InvalidKey(key.to_string()))
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CarbonError> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), CarbonError> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool, CarbonError> {
        validate_key(key)?;
        Ok(self.entries.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);
        store.put("a", "1".into()).unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        store.put("a", "2".into()).unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_delete() {
        let mut store = MemoryStore::new();
        store.put("a", "1".into()).unwrap();
        assert!(store.delete("a").unwrap());
        assert!(!store.delete("a").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_key_validation() {
        assert!(validate_key("history-alice_01").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../secret").is_err());
        assert!(validate_key("a b").is_err());
        assert!(validate_key(&"k".repeat(65)).is_err());
    }
}
