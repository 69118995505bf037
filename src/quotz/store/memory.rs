use super::DurableStore;
use crate::error::{QuotzError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory storage for testing and development.
///
/// Clones share the same contents, so a test can hand one handle to the
/// cache (whose writer thread takes ownership) and keep another to inspect
/// what was persisted.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    contents: Arc<Mutex<Option<String>>>,
    reads: Arc<AtomicUsize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with a serialized payload.
    pub fn seeded(payload: &str) -> Self {
        let store = Self::new();
        *store.contents.lock().expect("store lock") = Some(payload.to_string());
        store
    }

    /// The currently persisted payload, if any.
    pub fn snapshot(&self) -> Option<String> {
        self.contents.lock().expect("store lock").clone()
    }

    /// How many times `read` has been called on this store.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DurableStore for InMemoryStore {
    fn read(&self) -> Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .contents
            .lock()
            .map_err(|_| QuotzError::Store("store contents poisoned".to_string()))?
            .clone())
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        *self
            .contents
            .lock()
            .map_err(|_| QuotzError::Store("store contents poisoned".to_string()))? =
            Some(payload.to_string());
        Ok(())
    }
}

/// A store whose every operation fails, for exercising defensive fallbacks.
#[derive(Clone, Copy, Default)]
pub struct BrokenStore;

impl DurableStore for BrokenStore {
    fn read(&self) -> Result<Option<String>> {
        Err(QuotzError::Store("backing medium unavailable".to_string()))
    }

    fn write(&mut self, _payload: &str) -> Result<()> {
        Err(QuotzError::Store("backing medium unavailable".to_string()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ClientInfo, CompanyInfo, Quote, QuoteStatus};

    /// A saved record with the given ids and timestamp.
    pub fn saved_quote(id: &str, number: &str, last_updated: i64) -> Quote {
        Quote {
            id: Some(id.to_string()),
            number: Some(number.to_string()),
            client: ClientInfo {
                name: format!("Client {}", id),
                document: "00011122233".to_string(),
            },
            company: CompanyInfo {
                trade_name: "Oficina Central".to_string(),
            },
            date: "2024-03-10".to_string(),
            status: Some(QuoteStatus::Pending),
            last_updated: Some(last_updated),
            extra: Default::default(),
        }
    }

    /// A store seeded with `count` saved records `O1..=Ocount`.
    pub fn seeded_store(count: usize) -> InMemoryStore {
        let quotes: Vec<Quote> = (1..=count)
            .map(|i| saved_quote(&format!("O{}", i), &format!("ORC{}", i), i as i64))
            .collect();
        InMemoryStore::seeded(&serde_json::to_string(&quotes).expect("serialize fixture"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_contents() {
        let store = InMemoryStore::new();
        let mut handle = store.clone();
        handle.write("[]").unwrap();
        assert_eq!(store.snapshot().as_deref(), Some("[]"));
    }

    #[test]
    fn counts_reads() {
        let store = InMemoryStore::seeded("[]");
        store.read().unwrap();
        store.read().unwrap();
        assert_eq!(store.read_count(), 2);
    }
}
