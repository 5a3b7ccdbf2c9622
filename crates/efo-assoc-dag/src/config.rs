//! Configuration types for DAG projection.

use efo_assoc::DEFAULT_MIN_SCORE;

/// Configuration for projecting associations onto the ontology.
///
/// # Example
///
/// ```rust
/// use efo_assoc_dag::ProjectorConfig;
///
/// let config = ProjectorConfig::builder()
///     .with_min_score(0.25)
///     .with_parallel(true)
///     .build();
///
/// assert_eq!(config.min_score, 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectorConfig {
    /// Score threshold applied by [`DagBuilder`](crate::DagBuilder) and
    /// [`DagCache`](crate::DagCache) when none is given explicitly.
    pub min_score: f64,
    /// Project associations in parallel (requires `parallel` feature).
    pub parallel: bool,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            parallel: false,
        }
    }
}

impl ProjectorConfig {
    /// Creates a new builder for ProjectorConfig.
    pub fn builder() -> ProjectorConfigBuilder {
        ProjectorConfigBuilder::default()
    }
}

/// Builder for ProjectorConfig.
#[derive(Debug, Clone, Default)]
pub struct ProjectorConfigBuilder {
    config: ProjectorConfig,
}

impl ProjectorConfigBuilder {
    /// Sets the default score threshold.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.config.min_score = min_score;
        self
    }

    /// Enables or disables parallel projection.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Builds the ProjectorConfig.
    pub fn build(self) -> ProjectorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projector_config_default() {
        let config = ProjectorConfig::default();
        assert_eq!(config.min_score, 0.1);
        assert!(!config.parallel);
    }

    #[test]
    fn test_projector_config_builder() {
        let config = ProjectorConfig::builder()
            .with_min_score(0.5)
            .with_parallel(true)
            .build();

        assert_eq!(config.min_score, 0.5);
        assert!(config.parallel);
    }
}
