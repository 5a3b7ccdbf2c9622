//! Sequential whole-dataset download over a [`PageSource`].

use std::num::NonZeroUsize;
use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::{DownloaderConfig, DEFAULT_PAGE_SIZE};
use crate::json::{JsonPageSource, QueryTransport};
use crate::result::{Download, DownloadStats};
use crate::traits::PageSource;

/// Number of pages needed to cover `total_count` rows.
///
/// Zero rows need zero pages; the downloader still issues the first request
/// to learn that.
pub fn page_count(total_count: usize, page_size: NonZeroUsize) -> usize {
    total_count.div_ceil(page_size.get())
}

/// Downloads every page of a paged dataset, one request at a time.
///
/// Page 0 is fetched first to learn the total row count. The remaining
/// pages are then requested strictly in index order, each awaited before
/// the next is issued. Counts reported by later pages are ignored, so one
/// download never skips or repeats a page index.
///
/// # Example
///
/// ```ignore
/// let downloader = BatchDownloader::new(source);
/// let rows = downloader.fetch_all().await?;
/// ```
pub struct BatchDownloader<S> {
    source: S,
    page_size: NonZeroUsize,
}

impl<S: PageSource> BatchDownloader<S> {
    /// Creates a downloader with the default page size.
    pub fn new(source: S) -> Self {
        let page_size = NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN);
        Self::with_page_size(source, page_size)
    }

    /// Creates a downloader with an explicit page size.
    pub fn with_page_size(source: S, page_size: NonZeroUsize) -> Self {
        Self { source, page_size }
    }

    /// Returns the page size used for every request.
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Returns the underlying page source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches the whole dataset.
    ///
    /// # Errors
    ///
    /// Returns the page source's error from the first failing request.
    /// No rows are returned in that case.
    pub async fn fetch_all(&self) -> Result<Vec<S::Row>, S::Error> {
        Ok(self.fetch_all_with_stats().await?.rows)
    }

    /// Fetches the whole dataset and reports how it went.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_all`](Self::fetch_all).
    pub async fn fetch_all_with_stats(&self) -> Result<Download<S::Row>, S::Error> {
        let start = Instant::now();
        let size = self.page_size;

        let first = self.source.fetch_page(0, size).await?;
        let total_count = first.total_count;
        let pages = page_count(total_count, size);
        debug!(
            page = 0,
            rows = first.rows.len(),
            total_count,
            pages,
            "fetched first page"
        );

        // The reported count is untrusted; grow one page at a time
        let mut rows = first.rows;

        for index in 1..pages {
            let page = self.source.fetch_page(index, size).await?;
            debug!(page = index, rows = page.rows.len(), "fetched page");
            rows.extend(page.rows);
        }

        let stats = DownloadStats {
            pages_requested: pages.max(1),
            total_count,
            duration: start.elapsed(),
        };
        info!(
            rows = rows.len(),
            pages = stats.pages_requested,
            elapsed_ms = stats.duration.as_millis() as u64,
            "batch download complete"
        );

        Ok(Download { rows, stats })
    }
}

impl<T, R> BatchDownloader<JsonPageSource<T, R>>
where
    T: QueryTransport,
    R: DeserializeOwned + Send,
{
    /// Creates a downloader over a JSON query transport.
    ///
    /// Paths, extra variables and page size are taken from `config`.
    pub fn for_query(transport: T, config: &DownloaderConfig) -> Self {
        Self::with_page_size(JsonPageSource::from_config(transport, config), config.page_size)
    }
}
