//! Offset/limit stepping for listing endpoints.
//!
//! The client never iterates on its own; a [`PageCursor`] only works out what
//! to ask for next from the page the caller just received.

use crate::params::CommonParams;
use crate::types::DataContainer;

/// Largest page size the API accepts.
pub const MAX_LIMIT: u32 = 100;

/// Position of the next page to request.
///
/// # Example
///
/// ```rust,no_run
/// use marvel::{Client, ComicsParams, PageCursor};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("public_key", "private_key");
///     let mut cursor = Some(PageCursor::new(100));
///
///     while let Some(page) = cursor {
///         let mut common = page.params();
///         common.order_by = Some("onsaleDate".to_string());
///         let response = client
///             .series()
///             .comics(2258, &ComicsParams::from(common))
///             .await?;
///         println!("{} issues at offset {}", response.data.results.len(), page.offset());
///         cursor = page.advance(&response.data);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    offset: u32,
    limit: u32,
}

impl PageCursor {
    /// Start at the first page. `limit` is clamped to `1..=100`.
    pub fn new(limit: u32) -> Self {
        Self::starting_at(0, limit)
    }

    /// Start at `offset`. `limit` is clamped to `1..=100`.
    pub fn starting_at(offset: u32, limit: u32) -> Self {
        Self {
            offset,
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Filters selecting this page.
    pub fn params(&self) -> CommonParams {
        CommonParams::page(self.offset, self.limit)
    }

    /// Next page by the short-page rule alone: stop once a page comes back
    /// with fewer than `limit` results.
    ///
    /// When the final page is exactly full this yields one more cursor whose
    /// page will be empty; the empty page then ends the walk.
    pub fn advance_by_limit<T>(&self, page: &DataContainer<T>) -> Option<PageCursor> {
        if page.is_last_page(self.limit) {
            return None;
        }
        Some(self.step())
    }

    /// Next page, judged by `total` when the server reported it and by the
    /// short-page rule otherwise.
    pub fn advance<T>(&self, page: &DataContainer<T>) -> Option<PageCursor> {
        match page.has_more() {
            Some(true) => Some(self.step()),
            Some(false) => None,
            None => self.advance_by_limit(page),
        }
    }

    fn step(&self) -> PageCursor {
        PageCursor {
            offset: self.offset.saturating_add(self.limit),
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(offset: u32, total: Option<u32>, len: usize) -> DataContainer<u32> {
        DataContainer {
            offset: Some(offset),
            limit: Some(100),
            total,
            count: Some(len as u32),
            results: vec![0; len],
        }
    }

    #[test]
    fn test_full_page_asks_for_more() {
        let cursor = PageCursor::new(100);
        let next = cursor.advance_by_limit(&page(0, None, 100)).unwrap();
        assert_eq!(next.offset(), 100);
        assert_eq!(next.limit(), 100);
        assert_eq!(next.params(), CommonParams::page(100, 100));
    }

    #[test]
    fn test_short_page_ends() {
        let cursor = PageCursor::new(100);
        assert!(cursor.advance_by_limit(&page(0, None, 37)).is_none());
    }

    #[test]
    fn test_exactly_full_last_page_costs_one_empty_call() {
        let cursor = PageCursor::new(100);
        let next = cursor.advance_by_limit(&page(0, None, 100)).unwrap();
        assert!(next.advance_by_limit(&page(100, None, 0)).is_none());
    }

    #[test]
    fn test_total_is_preferred() {
        let cursor = PageCursor::new(100);
        // Full page, but total says nothing remains.
        assert!(cursor.advance(&page(0, Some(100), 100)).is_none());
        // Full page with more remaining.
        assert_eq!(
            cursor.advance(&page(0, Some(237), 100)).map(|c| c.offset()),
            Some(100)
        );
    }

    #[test]
    fn test_advance_falls_back_without_total() {
        let cursor = PageCursor::new(100);
        assert!(cursor.advance(&page(0, None, 100)).is_some());
        assert!(cursor.advance(&page(0, None, 99)).is_none());
    }

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(PageCursor::new(0).limit(), 1);
        assert_eq!(PageCursor::new(500).limit(), MAX_LIMIT);
        assert_eq!(PageCursor::starting_at(40, 20).offset(), 40);
    }
}
