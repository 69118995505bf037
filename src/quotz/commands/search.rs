use crate::cache::QuoteCache;
use crate::query::{self, PaginatedQuotes};
use crate::store::DurableStore;

/// One page of quotes matching `query`, newest first.
pub fn run<S: DurableStore + Send + 'static>(
    cache: &mut QuoteCache<S>,
    page: usize,
    limit: usize,
    query: &str,
) -> PaginatedQuotes {
    query::paginate(cache.ensure(), page, limit, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::seeded_store;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn pages_through_the_collection() {
        let mut cache = QuoteCache::new(seeded_store(25));

        let page1 = run(&mut cache, 1, 10, "");
        assert_eq!(page1.data.len(), 10);
        assert_eq!(page1.page, 1);
        // Newest (highest timestamp) first.
        assert_eq!(page1.data[0].id.as_deref(), Some("O25"));

        let page3 = run(&mut cache, 3, 10, "");
        assert_eq!(page3.data.len(), 5);
        assert_eq!(page3.total_pages, 3);
    }

    #[test]
    fn filters_by_display_number() {
        let mut cache = QuoteCache::new(seeded_store(25));
        let result = run(&mut cache, 1, 10, "orc21");
        assert_eq!(result.total, 1);
        assert_eq!(result.data[0].number.as_deref(), Some("ORC21"));
    }

    #[test]
    fn empty_store_yields_an_empty_page() {
        let mut cache = QuoteCache::new(InMemoryStore::new());
        let result = run(&mut cache, 1, 10, "");
        assert!(result.data.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }
}
