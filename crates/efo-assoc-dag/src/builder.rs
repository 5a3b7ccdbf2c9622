//! Score-threshold filtering followed by projection.

use efo_assoc::{filter_by_score, AssociationRecord};

use crate::config::ProjectorConfig;
use crate::error::DagResult;
use crate::projector::AncestorProjector;
use crate::result::DagBuildResult;
use crate::traits::OntologyLookup;

/// Associations that passed the threshold and the DAG built from them.
#[derive(Debug, Clone, PartialEq)]
pub struct DagView {
    /// Threshold the associations were filtered with, for display.
    pub threshold: f64,
    /// Associations with `score >= threshold`, in input order.
    pub associations: Vec<AssociationRecord>,
    /// The projected DAG.
    pub dag: DagBuildResult,
}

impl DagView {
    /// Returns true if no association reached the threshold.
    ///
    /// This is the normal "nothing to display" state.
    pub fn is_empty(&self) -> bool {
        self.associations.is_empty()
    }
}

/// Filters associations by score and projects the survivors.
///
/// # Example
///
/// ```ignore
/// let builder = DagBuilder::new(&ontology);
/// let view = builder.build(&associations)?;           // default threshold 0.1
/// let strict = builder.build_with_threshold(&associations, 0.5)?;
/// if strict.is_empty() {
///     println!("No associations with score >= {}", strict.threshold);
/// }
/// ```
pub struct DagBuilder<'a> {
    projector: AncestorProjector<'a>,
}

impl<'a> DagBuilder<'a> {
    /// Creates a builder with default configuration.
    pub fn new(lookup: &'a dyn OntologyLookup) -> Self {
        Self::with_config(lookup, ProjectorConfig::default())
    }

    /// Creates a builder with custom configuration.
    pub fn with_config(lookup: &'a dyn OntologyLookup, config: ProjectorConfig) -> Self {
        Self {
            projector: AncestorProjector::with_config(lookup, config),
        }
    }

    /// Builds the view using the configured default threshold.
    pub fn build(&self, associations: &[AssociationRecord]) -> DagResult<DagView> {
        self.build_with_threshold(associations, self.projector.config().min_score)
    }

    /// Builds the view for an explicit threshold.
    ///
    /// # Errors
    ///
    /// Propagates [`DagError::MissingNode`](crate::DagError::MissingNode)
    /// from the projection.
    pub fn build_with_threshold(
        &self,
        associations: &[AssociationRecord],
        min_score: f64,
    ) -> DagResult<DagView> {
        let filtered = filter_by_score(associations, min_score);
        let dag = self.projector.project(&filtered)?;

        Ok(DagView {
            threshold: min_score,
            associations: filtered,
            dag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use efo_assoc::{Ontology, OntologyNode};

    fn ontology() -> Ontology {
        Ontology::from_nodes([
            OntologyNode::root("A", "root"),
            OntologyNode::new("B", "left", ["A"]),
            OntologyNode::new("C", "right", ["A"]),
            OntologyNode::new("D", "leaf", ["B", "C"]),
        ])
        .unwrap()
    }

    fn associations() -> Vec<AssociationRecord> {
        vec![
            AssociationRecord::new("D", "leaf", 0.9),
            AssociationRecord::new("B", "left", 0.05),
        ]
    }

    #[test]
    fn test_build_default_threshold() {
        let ontology = ontology();
        let view = DagBuilder::new(&ontology).build(&associations()).unwrap();

        assert_eq!(view.threshold, 0.1);
        assert_eq!(view.associations.len(), 1);
        // B falls under the threshold, so D attaches straight to the root
        assert_eq!(view.dag.ids(), vec!["D", "A"]);
        assert_eq!(view.dag.nodes[0].parent_ids, vec!["A"]);
    }

    #[test]
    fn test_build_lower_threshold_keeps_intermediate() {
        let ontology = ontology();
        let view = DagBuilder::new(&ontology)
            .build_with_threshold(&associations(), 0.0)
            .unwrap();

        assert_eq!(view.dag.ids(), vec!["D", "B", "A"]);
        assert_eq!(view.dag.nodes[0].parent_ids, vec!["B", "A"]);
    }

    #[test]
    fn test_explicit_threshold_recorded_on_view() {
        let ontology = ontology();
        let view = DagBuilder::new(&ontology)
            .build_with_threshold(&associations(), 0.5)
            .unwrap();

        assert_eq!(view.threshold, 0.5);
        // The projected DAG is independent of the threshold it was filtered with
        let direct = AncestorProjector::new(&ontology)
            .project(&view.associations)
            .unwrap();
        assert_eq!(view.dag, direct);
    }

    #[test]
    fn test_build_nothing_passes() {
        let ontology = ontology();
        let view = DagBuilder::new(&ontology)
            .build_with_threshold(&associations(), 0.95)
            .unwrap();

        assert!(view.is_empty());
        assert!(view.dag.is_empty());
    }

    #[test]
    fn test_configured_threshold() {
        let ontology = ontology();
        let config = ProjectorConfig::builder().with_min_score(0.0).build();
        let view = DagBuilder::with_config(&ontology, config)
            .build(&associations())
            .unwrap();

        assert_eq!(view.associations.len(), 2);
    }
}
