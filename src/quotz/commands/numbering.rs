use crate::cache::QuoteCache;
use crate::ident;
use crate::store::DurableStore;

/// The next display number, `ORC<n>`.
///
/// Purely computed from the current collection; the number is not reserved,
/// so it becomes real only once a record carrying it is saved.
pub fn run<S: DurableStore + Send + 'static>(cache: &mut QuoteCache<S>) -> String {
    ident::next_display_number(cache.ensure())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::seeded_store;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_history_starts_at_one() {
        let mut cache = QuoteCache::new(InMemoryStore::new());
        assert_eq!(run(&mut cache), "ORC1");
    }

    #[test]
    fn exceeds_every_existing_number() {
        let mut cache = QuoteCache::new(seeded_store(7));
        assert_eq!(run(&mut cache), "ORC8");
    }

    #[test]
    fn does_not_reserve_the_number() {
        let mut cache = QuoteCache::new(seeded_store(7));
        assert_eq!(run(&mut cache), "ORC8");
        assert_eq!(run(&mut cache), "ORC8");
    }
}
