use crate::error::CarbonError;
use crate::store::{validate_key, KeyValueStore};
use std::io::Write;
use std::path::PathBuf;

/// Store keeping one `<key>.json` file per key in a directory.
///
/// Writes go to a temp file in the same directory that is then renamed over
/// the target, so readers never see a half-written value.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CarbonError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CarbonError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CarbonError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), CarbonError> {
        let path = self.path_for(key)?;
        let mut tmpfile = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmpfile.write_all(value.as_bytes())?;
        tmpfile.as_file().sync_all()?;
        tmpfile.persist(&path).map_err(|e| CarbonError::Io(e.error))?;
        tracing::trace!(path = %path.display(), "stored value");
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool, CarbonError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("history-bob").unwrap(), None);

        store.put("history-bob", "{}".into()).unwrap();
        assert_eq!(store.get("history-bob").unwrap().as_deref(), Some("{}"));
        assert!(dir.path().join("history-bob.json").exists());

        store.put("history-bob", "[1]".into()).unwrap();
        assert_eq!(store.get("history-bob").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_delete() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.put("k", "v".into()).unwrap();
        assert!(store.delete("k").unwrap());
        assert!(!store.delete("k").unwrap());
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        FileStore::open(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_invalid_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.put("../escape", "x".into()),
            Err(CarbonError::InvalidKey(_))
        ));
    }
}
