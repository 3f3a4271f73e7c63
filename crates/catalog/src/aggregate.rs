//! Pagination and ranking for a single `(type, year)` catalog query.

use serde_json::Value;
use tracing::warn;

use annum_core::types::ContentType;

use crate::source::CatalogSource;

/// Fixed page size of the upstream feed.
pub const PAGE_SIZE: u32 = 50;

/// Upper bound on pages per query, so a feed that never returns an empty
/// page cannot keep the loop alive forever.
pub const MAX_PAGES: u32 = 100;

/// Why the pagination loop stopped. Clients receive the accumulated metas
/// either way; this only feeds diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The feed returned an empty page.
    Exhausted,
    /// A page fetch failed; the result holds whatever came before it.
    UpstreamError,
    /// [`MAX_PAGES`] was reached before an empty page.
    PageLimit,
}

/// Aggregated result of one catalog query.
#[derive(Debug)]
pub struct YearCatalog {
    /// Title records sorted by `imdbRating`, best first.
    pub metas: Vec<Value>,
    pub termination: Termination,
    pub pages_fetched: u32,
}

/// Fetch every page for `(content_type, year)` and return the merged list
/// sorted by rating, descending.
///
/// Pages are requested sequentially from offset zero until an empty page,
/// a fetch failure, or [`MAX_PAGES`]. A failure never surfaces as an error:
/// the records accumulated so far are ranked and returned as-is.
pub async fn best_by_year<S>(source: &S, content_type: ContentType, year: &str) -> YearCatalog
where
    S: CatalogSource + ?Sized,
{
    let mut metas: Vec<Value> = Vec::new();
    let mut skip = 0u32;
    let mut pages_fetched = 0u32;

    let termination = loop {
        if pages_fetched >= MAX_PAGES {
            warn!(%content_type, year, pages = pages_fetched, "page limit reached, stopping pagination");
            break Termination::PageLimit;
        }

        let page = match source.fetch_page(content_type, year, skip).await {
            Ok(page) => page,
            Err(e) => {
                warn!(%content_type, year, skip, error = %e, "page fetch failed, stopping pagination");
                break Termination::UpstreamError;
            }
        };
        pages_fetched += 1;

        if page.is_empty() {
            break Termination::Exhausted;
        }
        metas.extend(page);
        skip += PAGE_SIZE;
    };

    sort_by_rating(&mut metas);

    YearCatalog {
        metas,
        termination,
        pages_fetched,
    }
}

/// Stable sort by rating, descending. Ties keep their upstream order.
fn sort_by_rating(metas: &mut [Value]) {
    metas.sort_by(|a, b| rating_key(b).total_cmp(&rating_key(a)));
}

/// Coerce a record's `imdbRating` to the sort key. The field arrives as a
/// string or a number; anything absent, malformed, or non-finite is 0.0.
fn rating_key(meta: &Value) -> f64 {
    let rating = match &meta["imdbRating"] {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    if rating.is_finite() { rating } else { 0.0 }
}
