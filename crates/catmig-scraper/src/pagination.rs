//! Page-number pagination over the product listing endpoint.
//!
//! The endpoint takes `page` (1-based) and `limit` query parameters and
//! returns no cursor. The collector keeps requesting increasing page numbers
//! until one of these holds:
//!
//! - the envelope's `result` is not `true`,
//! - `data.items` is absent or empty,
//! - fewer than `limit` items came back (a short page is the last page).
//!
//! A malformed-but-parseable envelope is therefore the end of the listing,
//! never an error.

use crate::types::{PageResponse, SourceProduct};

/// What the collector should do with one page response.
#[derive(Debug)]
pub enum PageOutcome {
    /// Nothing to append; stop.
    Exhausted,
    /// Append these items and stop.
    Last(Vec<SourceProduct>),
    /// Append these items and request the next page.
    More(Vec<SourceProduct>),
}

impl PageOutcome {
    #[must_use]
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::More(_))
    }
}

/// Classifies a decoded page response against the requested page size.
#[must_use]
pub fn page_outcome(response: PageResponse, limit: u32) -> PageOutcome {
    if response.result != Some(true) {
        return PageOutcome::Exhausted;
    }

    let items = response.into_items();
    if items.is_empty() {
        return PageOutcome::Exhausted;
    }

    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    if items.len() < limit {
        PageOutcome::Last(items)
    } else {
        PageOutcome::More(items)
    }
}
