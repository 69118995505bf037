//! Filtering, ordering and pagination over the quote collection.
//!
//! Everything here is pure: callers pass a slice and get owned copies back,
//! so nothing handed out can reach into the cache.

use crate::model::Quote;

/// One page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedQuotes {
    pub data: Vec<Quote>,
    /// Count of records matching the query, across all pages.
    pub total: usize,
    /// The 1-based page that was requested.
    pub page: usize,
    pub total_pages: usize,
}

/// Owned copies of `quotes`, most recently updated first.
///
/// Records never saved (`last_updated` absent) order as timestamp 0, i.e.
/// at the end.
pub fn sorted_recent_first(quotes: &[Quote]) -> Vec<Quote> {
    let mut sorted = quotes.to_vec();
    sort_recent_first(&mut sorted);
    sorted
}

fn sort_recent_first(quotes: &mut [Quote]) {
    quotes.sort_by(|a, b| {
        b.last_updated
            .unwrap_or(0)
            .cmp(&a.last_updated.unwrap_or(0))
    });
}

/// Whether `quote` matches the already-lowercased search term.
///
/// `id`, `client.name`, `number` and the company trade name are compared
/// case-insensitively; `client.document` and `date` by plain containment,
/// since both are effectively numeric. An empty term matches everything.
pub fn matches(quote: &Quote, term: &str) -> bool {
    let contains_ci = |field: &str| field.to_lowercase().contains(term);

    quote.id.as_deref().is_some_and(contains_ci)
        || contains_ci(&quote.client.name)
        || quote.number.as_deref().is_some_and(contains_ci)
        || quote.client.document.contains(term)
        || quote.date.contains(term)
        || contains_ci(&quote.company.trade_name)
}

/// Filter by `query`, sort newest-first, and slice out the requested page.
///
/// `page` is 1-based. A `limit` below 1 is treated as 1. Pages past the end
/// yield an empty `data` slice while `total`/`total_pages` still describe
/// the whole filtered set.
pub fn paginate(quotes: &[Quote], page: usize, limit: usize, query: &str) -> PaginatedQuotes {
    let limit = limit.max(1);

    let filtered: Vec<&Quote> = if query.is_empty() {
        quotes.iter().collect()
    } else {
        let term = query.to_lowercase();
        quotes.iter().filter(|q| matches(q, &term)).collect()
    };

    let mut sorted: Vec<Quote> = filtered.into_iter().cloned().collect();
    sort_recent_first(&mut sorted);

    let total = sorted.len();
    let total_pages = total.div_ceil(limit);
    let start = page.saturating_sub(1).saturating_mul(limit);
    let data: Vec<Quote> = sorted.into_iter().skip(start).take(limit).collect();

    PaginatedQuotes {
        data,
        total,
        page,
        total_pages,
    }
}
