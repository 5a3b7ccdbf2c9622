//! Memoized DAG views keyed by input identity.
//!
//! A DAG view is a derived value of three inputs: the association list, the
//! ontology and the score threshold. [`DagCache`] keeps recent views in an
//! LRU and recomputes whenever any input changes *identity*. Lists and
//! ontologies are compared by `Arc` pointer, not by content; thresholds by
//! bit pattern.

use std::num::NonZeroUsize;
use std::sync::Arc;

use efo_assoc::AssociationRecord;
use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

use crate::builder::{DagBuilder, DagView};
use crate::config::ProjectorConfig;
use crate::error::DagResult;
use crate::traits::OntologyLookup;

/// Number of cached views unless configured otherwise.
pub const DEFAULT_CACHE_ENTRIES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    associations: usize,
    ontology: usize,
    threshold: u64,
}

impl CacheKey {
    fn new<L>(associations: &Arc<Vec<AssociationRecord>>, ontology: &Arc<L>, threshold: f64) -> Self {
        Self {
            associations: Arc::as_ptr(associations) as usize,
            ontology: Arc::as_ptr(ontology) as *const () as usize,
            threshold: threshold.to_bits(),
        }
    }
}

struct CacheEntry<L> {
    // Keeps the keyed allocations alive so their addresses cannot be reused
    _associations: Arc<Vec<AssociationRecord>>,
    _ontology: Arc<L>,
    view: Arc<DagView>,
}

struct CacheState<L> {
    entries: LruCache<CacheKey, CacheEntry<L>>,
    hits: usize,
    misses: usize,
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DagCacheStats {
    /// Lookups served from the cache.
    pub hits: usize,
    /// Lookups that had to project.
    pub misses: usize,
    /// Views currently cached.
    pub entries: usize,
}

impl DagCacheStats {
    /// Returns the cache hit rate as a percentage.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Thread-safe LRU of DAG views.
///
/// # Example
///
/// ```ignore
/// let cache = DagCache::new();
/// let associations = Arc::new(downloaded_rows);
/// let ontology = Arc::new(ontology);
///
/// let view = cache.get_or_build_with_threshold(&associations, &ontology, 0.3)?;
/// // Same inputs: served from cache
/// let again = cache.get_or_build_with_threshold(&associations, &ontology, 0.3)?;
/// assert!(Arc::ptr_eq(&view, &again));
/// ```
pub struct DagCache<L> {
    state: Mutex<CacheState<L>>,
    config: ProjectorConfig,
}

impl<L: OntologyLookup> DagCache<L> {
    /// Creates a cache with default capacity and configuration.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_ENTRIES, ProjectorConfig::default())
    }

    /// Creates a cache holding at most `capacity` views (at least one).
    pub fn with_capacity(capacity: usize, config: ProjectorConfig) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            state: Mutex::new(CacheState {
                entries: LruCache::new(capacity),
                hits: 0,
                misses: 0,
            }),
            config,
        }
    }

    /// Returns the view for the configured default threshold.
    pub fn get_or_build(
        &self,
        associations: &Arc<Vec<AssociationRecord>>,
        ontology: &Arc<L>,
    ) -> DagResult<Arc<DagView>> {
        self.get_or_build_with_threshold(associations, ontology, self.config.min_score)
    }

    /// Returns the cached view for these inputs, building it on a miss.
    ///
    /// The lock is not held while projecting; two threads missing on the
    /// same key both project and the later result is kept.
    ///
    /// # Errors
    ///
    /// Propagates projection errors. Failed builds are not cached.
    pub fn get_or_build_with_threshold(
        &self,
        associations: &Arc<Vec<AssociationRecord>>,
        ontology: &Arc<L>,
        min_score: f64,
    ) -> DagResult<Arc<DagView>> {
        let key = CacheKey::new(associations, ontology, min_score);

        {
            let mut state = self.state.lock();
            let cached = state.entries.get(&key).map(|entry| Arc::clone(&entry.view));
            if let Some(view) = cached {
                state.hits += 1;
                return Ok(view);
            }
            state.misses += 1;
        }

        debug!(
            associations = associations.len(),
            min_score, "DAG cache miss, projecting"
        );
        let lookup: &L = ontology;
        let builder = DagBuilder::with_config(lookup, self.config);
        let view = Arc::new(builder.build_with_threshold(associations, min_score)?);

        self.state.lock().entries.put(
            key,
            CacheEntry {
                _associations: Arc::clone(associations),
                _ontology: Arc::clone(ontology),
                view: Arc::clone(&view),
            },
        );
        Ok(view)
    }

    /// Returns usage statistics.
    pub fn stats(&self) -> DagCacheStats {
        let state = self.state.lock();
        DagCacheStats {
            hits: state.hits,
            misses: state.misses,
            entries: state.entries.len(),
        }
    }

    /// Returns the number of cached views.
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all cached views. Statistics are kept.
    pub fn clear(&self) {
        self.state.lock().entries.clear();
    }
}

impl<L: OntologyLookup> Default for DagCache<L> {
    fn default() -> Self {
        Self::new()
    }
}
