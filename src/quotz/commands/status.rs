use crate::cache::QuoteCache;
use crate::model::QuoteStatus;
use crate::store::DurableStore;
use chrono::Utc;

/// Set the status of the record with `id`, stamping `last_updated`.
///
/// Returns whether a record was found; an unknown id changes nothing and
/// schedules no write.
pub fn run<S: DurableStore + Send + 'static>(
    cache: &mut QuoteCache<S>,
    id: &str,
    status: QuoteStatus,
) -> bool {
    let quotes = cache.ensure();
    let Some(quote) = quotes.iter_mut().find(|q| q.id.as_deref() == Some(id)) else {
        return false;
    };

    quote.status = Some(status);
    quote.last_updated = Some(Utc::now().timestamp_millis());
    cache.schedule_flush();
    true
}
