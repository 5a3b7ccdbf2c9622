//! Download result types.

use std::time::Duration;

/// A fully materialized dataset together with download statistics.
#[derive(Debug, Clone)]
pub struct Download<R> {
    /// All rows, in page order.
    pub rows: Vec<R>,
    /// Download statistics.
    pub stats: DownloadStats,
}

impl<R> Download<R> {
    /// Returns the number of rows downloaded.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset is empty.
    ///
    /// An empty dataset is a valid outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consumes the download, returning the rows.
    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }
}

impl<R> IntoIterator for Download<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Statistics from a batch download.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadStats {
    /// Number of page requests issued.
    pub pages_requested: usize,
    /// Total row count reported by the first page.
    pub total_count: usize,
    /// Wall time spent downloading.
    pub duration: Duration,
}
