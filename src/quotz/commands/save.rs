use crate::cache::QuoteCache;
use crate::ident;
use crate::model::{Quote, QuoteStatus};
use crate::store::DurableStore;
use chrono::Utc;

/// Create or update a record and schedule a durable write.
///
/// A record without an id gets the next internal id and is appended. A
/// record with an id replaces the stored record at its position; if the id
/// matches nothing, the record is inserted rather than dropped. Either way
/// `last_updated` is stamped and a missing status defaults to pending.
/// Returns the finalized record.
pub fn run<S: DurableStore + Send + 'static>(cache: &mut QuoteCache<S>, mut quote: Quote) -> Quote {
    quote.last_updated = Some(Utc::now().timestamp_millis());
    quote.status.get_or_insert(QuoteStatus::Pending);

    let quotes = cache.ensure();
    match quote.id {
        Some(ref id) => {
            match quotes.iter_mut().find(|q| q.id.as_deref() == Some(id.as_str())) {
                Some(slot) => *slot = quote.clone(),
                None => quotes.push(quote.clone()),
            }
        }
        None => {
            quote.id = Some(ident::next_internal_id(quotes));
            quotes.push(quote.clone());
        }
    }

    cache.schedule_flush();
    quote
}
