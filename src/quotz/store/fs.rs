use super::DurableStore;
use crate::error::{QuotzError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const DEFAULT_DATA_FILE: &str = "quotes.json";

/// File-backed store: the whole collection as one JSON file in `root`.
pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(QuotzError::Io)?;
        }
        Ok(())
    }
}

impl DurableStore for FileStore {
    fn read(&self) -> Result<Option<String>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(QuotzError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        self.ensure_dir(&self.root)?;

        // Write to a sibling temp file and rename over the data file, so the
        // previous snapshot stays readable if anything fails mid-write.
        let mut tmp = NamedTempFile::new_in(&self.root).map_err(QuotzError::Io)?;
        tmp.write_all(payload.as_bytes()).map_err(QuotzError::Io)?;
        tmp.persist(self.data_path())
            .map_err(|e| QuotzError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.write("[{\"id\":\"O1\"}]").unwrap();
        assert_eq!(store.read().unwrap().unwrap(), "[{\"id\":\"O1\"}]");
    }

    #[test]
    fn write_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("quotz");
        let mut store = FileStore::new(&nested);
        store.write("[]").unwrap();
        assert!(nested.join("quotes.json").exists());
    }

    #[test]
    fn write_replaces_previous_payload() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path()).with_data_file("history.json");
        store.write("[1]").unwrap();
        store.write("[1,2]").unwrap();
        assert_eq!(store.read().unwrap().unwrap(), "[1,2]");

        // No stray temp files left behind.
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
