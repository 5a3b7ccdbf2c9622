//! Configuration types for the batch downloader.

use std::num::NonZeroUsize;

use serde_json::{Map, Value};

/// Rows requested per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 300;

const DEFAULT_ROW_FIELD: &str = "rows";
const DEFAULT_COUNT_FIELD: &str = "count";

fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN)
}

/// Configuration for a batch download.
///
/// # Example
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use efo_assoc_fetcher::DownloaderConfig;
///
/// let config = DownloaderConfig::builder()
///     .with_page_size(NonZeroUsize::new(500).unwrap())
///     .with_data_path("disease.associatedTargets")
///     .with_variable("efoId", "EFO_0000270")
///     .build();
///
/// assert_eq!(config.rows_path(), "disease.associatedTargets.rows");
/// assert_eq!(config.count_path(), "disease.associatedTargets.count");
/// ```
#[derive(Debug, Clone)]
pub struct DownloaderConfig {
    /// Rows requested per page.
    pub page_size: NonZeroUsize,
    /// Dotted path to the object holding rows and count in each response.
    pub data_path: String,
    /// Field under `data_path` that holds the row array.
    pub row_field: String,
    /// Field under `data_path` that holds the total row count.
    pub count_field: String,
    /// Extra query variables sent with every page request.
    pub variables: Map<String, Value>,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            data_path: String::new(),
            row_field: DEFAULT_ROW_FIELD.to_string(),
            count_field: DEFAULT_COUNT_FIELD.to_string(),
            variables: Map::new(),
        }
    }
}

impl DownloaderConfig {
    /// Creates a new builder for DownloaderConfig.
    pub fn builder() -> DownloaderConfigBuilder {
        DownloaderConfigBuilder::default()
    }

    /// Full dotted path of the row array.
    pub fn rows_path(&self) -> String {
        join_path(&self.data_path, &self.row_field)
    }

    /// Full dotted path of the total row count.
    pub fn count_path(&self) -> String {
        join_path(&self.data_path, &self.count_field)
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

/// Builder for DownloaderConfig.
#[derive(Debug, Clone, Default)]
pub struct DownloaderConfigBuilder {
    config: DownloaderConfig,
}

impl DownloaderConfigBuilder {
    /// Sets the number of rows per page.
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Sets the dotted path of the paged object inside each response.
    pub fn with_data_path(mut self, data_path: impl Into<String>) -> Self {
        self.config.data_path = data_path.into();
        self
    }

    /// Sets the field holding the row array.
    pub fn with_row_field(mut self, row_field: impl Into<String>) -> Self {
        self.config.row_field = row_field.into();
        self
    }

    /// Sets the field holding the total row count.
    pub fn with_count_field(mut self, count_field: impl Into<String>) -> Self {
        self.config.count_field = count_field.into();
        self
    }

    /// Adds one extra query variable.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.variables.insert(name.into(), value.into());
        self
    }

    /// Replaces the extra query variables.
    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.config.variables = variables;
        self
    }

    /// Builds the DownloaderConfig.
    pub fn build(self) -> DownloaderConfig {
        self.config
    }
}
