//! # API Facade
//!
//! [`QuotzApi`] is the single entry point for everything the form and
//! history UIs need from the persistence layer. It is a thin dispatch layer
//! over the command modules: no business logic, no I/O of its own.
//!
//! ## Generic Over DurableStore
//!
//! `QuotzApi<S: DurableStore>` is generic over the storage backend:
//! - Production: `QuotzApi<FileStore>` (see [`crate::init`])
//! - Testing: `QuotzApi<InMemoryStore>`
//!
//! Read operations take `&mut self` because the first of them hydrates the
//! cache; after that they only touch memory.
//!
//! ## Durability
//!
//! Mutations return as soon as the in-memory collection is updated; the
//! durable write happens on a background writer (see [`crate::cache`]).
//! [`QuotzApi::wait_idle`] blocks until scheduled writes have been
//! attempted, and dropping the api drains them too.

use crate::cache::{FlushMode, FlushObserver, QuoteCache};
use crate::commands;
use crate::model::{Quote, QuoteStatus};
use crate::query::PaginatedQuotes;
use crate::store::DurableStore;

pub struct QuotzApi<S: DurableStore + Send + 'static> {
    cache: QuoteCache<S>,
}

impl<S: DurableStore + Send + 'static> QuotzApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            cache: QuoteCache::new(store),
        }
    }

    pub fn with_mode(store: S, mode: FlushMode) -> Self {
        Self {
            cache: QuoteCache::with_mode(store, mode),
        }
    }

    pub fn with_flush_observer(store: S, mode: FlushMode, observer: FlushObserver) -> Self {
        Self {
            cache: QuoteCache::with_flush_observer(store, mode, observer),
        }
    }

    /// Every quote, newest first.
    pub fn all(&mut self) -> Vec<Quote> {
        commands::list::run(&mut self.cache)
    }

    /// One page of quotes matching `query` (empty query matches all).
    pub fn paginated(&mut self, page: usize, limit: usize, query: &str) -> PaginatedQuotes {
        commands::search::run(&mut self.cache, page, limit, query)
    }

    /// The next display number; not reserved until saved.
    pub fn next_quote_number(&mut self) -> String {
        commands::numbering::run(&mut self.cache)
    }

    /// Create or update a record; returns it with id and timestamp set.
    pub fn save(&mut self, quote: Quote) -> Quote {
        commands::save::run(&mut self.cache, quote)
    }

    /// Set a record's status. Returns `false` for an unknown id.
    pub fn update_status(&mut self, id: &str, status: QuoteStatus) -> bool {
        commands::status::run(&mut self.cache, id, status)
    }

    /// Remove a record. Returns `false` for an unknown id.
    pub fn delete(&mut self, id: &str) -> bool {
        commands::delete::run(&mut self.cache, id)
    }

    /// Block until every scheduled durable write has been attempted.
    pub fn wait_idle(&self) {
        self.cache.wait_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::seeded_store;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn full_cycle_through_the_facade() {
        let mut api = QuotzApi::new(InMemoryStore::new());

        assert_eq!(api.next_quote_number(), "ORC1");

        let draft = Quote {
            number: Some(api.next_quote_number()),
            client: crate::model::ClientInfo {
                name: "Acme Corp".to_string(),
                document: String::new(),
            },
            ..Quote::default()
        };
        let saved = api.save(draft);
        let id = saved.id.clone().unwrap();

        assert!(api.update_status(&id, QuoteStatus::Approved));
        assert_eq!(api.all().len(), 1);
        assert_eq!(api.paginated(1, 10, "acme").total, 1);

        assert!(api.delete(&id));
        assert!(api.all().is_empty());
    }

    #[test]
    fn delete_then_list_drops_the_count_by_one() {
        let mut api = QuotzApi::new(seeded_store(5));
        assert!(api.delete("O3"));
        let listed = api.all();
        assert_eq!(listed.len(), 4);
        assert!(listed.iter().all(|q| q.id.as_deref() != Some("O3")));

        // Unknown id leaves the count alone.
        assert!(!api.delete("O3"));
        assert_eq!(api.all().len(), 4);
    }
}
