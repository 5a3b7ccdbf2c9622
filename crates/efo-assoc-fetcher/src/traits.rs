//! The page-fetch seam.
//!
//! [`PageSource`] abstracts whatever transport serves the paged dataset.
//! Timeouts, retries and cancellation belong to the implementation, not to
//! the downloader.

use std::future::Future;
use std::num::NonZeroUsize;

/// One page of a paged query response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    /// Rows of this page, in server order.
    pub rows: Vec<R>,
    /// Total number of rows in the whole result set, as reported by the server.
    pub total_count: usize,
}

impl<R> Page<R> {
    /// Creates a page.
    pub fn new(rows: Vec<R>, total_count: usize) -> Self {
        Self { rows, total_count }
    }

    /// Creates an empty page reporting an empty result set.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
        }
    }
}

/// A backend that serves a dataset in fixed-size pages.
///
/// # Example
///
/// ```rust
/// use std::future::Future;
/// use std::num::NonZeroUsize;
/// use efo_assoc_fetcher::{Page, PageSource};
///
/// struct Numbers(Vec<u32>);
///
/// impl PageSource for Numbers {
///     type Row = u32;
///     type Error = std::convert::Infallible;
///
///     fn fetch_page(
///         &self,
///         index: usize,
///         size: NonZeroUsize,
///     ) -> impl Future<Output = Result<Page<u32>, Self::Error>> + Send {
///         let start = (index * size.get()).min(self.0.len());
///         let end = (start + size.get()).min(self.0.len());
///         let page = Page::new(self.0[start..end].to_vec(), self.0.len());
///         async move { Ok(page) }
///     }
/// }
/// ```
pub trait PageSource: Send + Sync {
    /// Row type produced by each page.
    type Row: Send;
    /// Failure type of a single page request.
    type Error;

    /// Fetches page `index` (zero-based) of `size` rows.
    fn fetch_page(
        &self,
        index: usize,
        size: NonZeroUsize,
    ) -> impl Future<Output = Result<Page<Self::Row>, Self::Error>> + Send;
}

impl<S: PageSource> PageSource for &S {
    type Row = S::Row;
    type Error = S::Error;

    fn fetch_page(
        &self,
        index: usize,
        size: NonZeroUsize,
    ) -> impl Future<Output = Result<Page<Self::Row>, Self::Error>> + Send {
        (**self).fetch_page(index, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(vec![1, 2, 3], 10);
        assert_eq!(page.rows.len(), 3);
        assert_eq!(page.total_count, 10);
    }

    #[test]
    fn test_page_empty() {
        let page: Page<String> = Page::empty();
        assert!(page.rows.is_empty());
        assert_eq!(page.total_count, 0);
    }
}
