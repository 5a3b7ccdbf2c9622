//! [`PageSource`] adapter for GraphQL-style JSON query transports.

use std::future::Future;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::DownloaderConfig;
use crate::error::{FetchError, FetchResult};
use crate::json_path::lookup;
use crate::traits::{Page, PageSource};

/// Runs one query with a JSON variables object and returns the JSON response.
///
/// Implemented for any `Fn(Value) -> impl Future<Output = FetchResult<Value>>`,
/// so a closure over an HTTP client is enough.
pub trait QueryTransport: Send + Sync {
    /// Executes the query with the given variables.
    fn execute(&self, variables: Value) -> impl Future<Output = FetchResult<Value>> + Send;
}

impl<F, Fut> QueryTransport for F
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = FetchResult<Value>> + Send,
{
    fn execute(&self, variables: Value) -> impl Future<Output = FetchResult<Value>> + Send {
        self(variables)
    }
}

/// Pages a JSON query by sending `index` and `size` variables.
///
/// Each request's variables are `{ "index": i, "size": n }` merged with the
/// configured extra variables; an extra variable with the same name wins.
/// Rows are read from `rows_path` and the total count from `count_path`.
/// A missing rows field is an empty page. Rows are decoded into `R`.
pub struct JsonPageSource<T, R = Value> {
    transport: T,
    rows_path: String,
    count_path: String,
    variables: Map<String, Value>,
    _row: PhantomData<fn() -> R>,
}

impl<T: QueryTransport, R: DeserializeOwned + Send> JsonPageSource<T, R> {
    /// Creates a page source reading rows and count at the given paths.
    pub fn new(transport: T, rows_path: impl Into<String>, count_path: impl Into<String>) -> Self {
        Self {
            transport,
            rows_path: rows_path.into(),
            count_path: count_path.into(),
            variables: Map::new(),
            _row: PhantomData,
        }
    }

    /// Creates a page source from a downloader configuration.
    pub fn from_config(transport: T, config: &DownloaderConfig) -> Self {
        Self {
            transport,
            rows_path: config.rows_path(),
            count_path: config.count_path(),
            variables: config.variables.clone(),
            _row: PhantomData,
        }
    }

    /// Sets the extra variables sent with every page.
    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = variables;
        self
    }

    /// Builds the variables object for one page request.
    pub fn page_variables(&self, index: usize, size: NonZeroUsize) -> Value {
        let mut vars = Map::with_capacity(self.variables.len() + 2);
        vars.insert("index".to_string(), Value::from(index));
        vars.insert("size".to_string(), Value::from(size.get()));
        for (name, value) in &self.variables {
            vars.insert(name.clone(), value.clone());
        }
        Value::Object(vars)
    }

    /// Extracts rows and total count from a query response.
    pub fn decode_page(&self, response: &Value) -> FetchResult<Page<R>> {
        let rows = match lookup(response, &self.rows_path) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| R::deserialize(item))
                .collect::<Result<Vec<R>, _>>()?,
            Some(other) => {
                return Err(FetchError::InvalidRows {
                    path: self.rows_path.clone(),
                    value: other.to_string(),
                })
            }
        };

        let total_count = lookup(response, &self.count_path)
            .and_then(row_count)
            .ok_or_else(|| FetchError::InvalidCount {
                path: self.count_path.clone(),
                value: lookup(response, &self.count_path)
                    .map_or_else(|| "missing".to_string(), Value::to_string),
            })?;

        Ok(Page::new(rows, total_count))
    }
}

/// Reads a row count, accepting whole-number floats such as `620.0`.
fn row_count(value: &Value) -> Option<usize> {
    let count = match value.as_u64() {
        Some(count) => count,
        None => {
            let float = value.as_f64()?;
            // Beyond 2^53 a float no longer identifies a single integer
            if float < 0.0 || float.fract() != 0.0 || float > 9_007_199_254_740_992.0 {
                return None;
            }
            float as u64
        }
    };
    usize::try_from(count).ok()
}

impl<T, R> PageSource for JsonPageSource<T, R>
where
    T: QueryTransport,
    R: DeserializeOwned + Send,
{
    type Row = R;
    type Error = FetchError;

    fn fetch_page(
        &self,
        index: usize,
        size: NonZeroUsize,
    ) -> impl Future<Output = FetchResult<Page<R>>> + Send {
        let variables = self.page_variables(index, size);
        async move {
            let response = self.transport.execute(variables).await?;
            self.decode_page(&response)
        }
    }
}
