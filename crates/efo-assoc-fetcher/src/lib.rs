//! # efo-assoc-fetcher
//!
//! Batch downloader that materializes a whole paged dataset in memory.
//!
//! Association tables are only served in fixed-size pages. The
//! [`BatchDownloader`] fetches page 0 to learn the total row count, then
//! requests the remaining pages one at a time, in order, and concatenates
//! their rows.
//!
//! ## Key Features
//!
//! - **Transport agnostic** - Implement [`PageSource`] over any paged backend
//! - **Strictly sequential** - One request in flight, pages appended in index order
//! - **Failure is total** - The first failing page aborts the download with the
//!   source's own error, no partial data
//! - **GraphQL-shaped adapter** - [`JsonPageSource`] reads rows and count from a
//!   configurable dotted path in a JSON response
//!
//! ## Quick Start
//!
//! ```ignore
//! use efo_assoc_fetcher::{BatchDownloader, DownloaderConfig};
//!
//! let config = DownloaderConfig::builder()
//!     .with_data_path("target.associatedDiseases")
//!     .with_variable("ensemblId", "ENSG00000157764")
//!     .build();
//!
//! // `transport` runs the GraphQL document with the given variables
//! let downloader = BatchDownloader::for_query(transport, &config);
//! let rows: Vec<serde_json::Value> = downloader.fetch_all().await?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    efo-assoc-fetcher                         │
//! │                                                              │
//! │  BatchDownloader                                             │
//! │  ├── fetch page 0 → learn total count                       │
//! │  ├── page count = ceil(total / page size)                   │
//! │  ├── fetch pages 1..count sequentially (via PageSource)     │
//! │  └── return rows in page order                              │
//! │                                                              │
//! │  JsonPageSource (PageSource over QueryTransport)            │
//! │  ├── variables = { index, size, ...extra }                  │
//! │  └── rows / count read at "{dataPath}.{field}"              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod downloader;
mod error;
mod json;
pub mod json_path;
mod result;
mod traits;

// Public re-exports
pub use config::{DownloaderConfig, DownloaderConfigBuilder, DEFAULT_PAGE_SIZE};
pub use downloader::{page_count, BatchDownloader};
pub use error::{FetchError, FetchResult};
pub use json::{JsonPageSource, QueryTransport};
pub use result::{Download, DownloadStats};
pub use traits::{Page, PageSource};
