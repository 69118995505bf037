use crate::cache::QuoteCache;
use crate::model::Quote;
use crate::store::DurableStore;

/// Remove the record with `id` and schedule a durable write.
///
/// The collection handle is replaced with a rebuilt one rather than edited
/// in place. Returns whether a record was actually removed; the write is
/// scheduled either way.
pub fn run<S: DurableStore + Send + 'static>(cache: &mut QuoteCache<S>, id: &str) -> bool {
    let quotes = cache.ensure();
    let before = quotes.len();
    let remaining: Vec<Quote> = quotes
        .iter()
        .filter(|q| q.id.as_deref() != Some(id))
        .cloned()
        .collect();
    let removed = remaining.len() < before;

    cache.replace(remaining);
    removed
}
