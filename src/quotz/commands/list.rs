use crate::cache::QuoteCache;
use crate::model::Quote;
use crate::query;
use crate::store::DurableStore;

/// Every quote, newest first, as copies detached from the cache.
pub fn run<S: DurableStore + Send + 'static>(cache: &mut QuoteCache<S>) -> Vec<Quote> {
    query::sorted_recent_first(cache.ensure())
}
