//! Ancestor projection of associations onto the ontology.
//!
//! This module provides the [`AncestorProjector`], which turns a flat list of
//! associations into a shallow DAG by walking the ontology upwards with BFS.

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use efo_assoc::{AssociationRecord, AssociationSet, DiseaseId, OntologyNode};
use tracing::{debug, warn};

use crate::config::ProjectorConfig;
use crate::error::{DagError, DagResult};
use crate::result::{DagBuildResult, DagNode, ProjectionStats};
use crate::traits::OntologyLookup;

/// Closest qualifying ancestors of one association plus the walk size.
struct Ancestry {
    parent_ids: Vec<DiseaseId>,
    visited: usize,
}

/// Projects associated diseases onto their closest qualifying ancestors.
///
/// A *closest qualifying ancestor* of a disease is the nearest ancestor, by
/// parent-walk distance, that is either associated itself or has no parents.
/// Unassociated intermediate diseases are walked through but never emitted.
///
/// Each association gets its own breadth-first walk with its own visited
/// set, so shared ancestors in diamond-shaped hierarchies are reached once
/// per walk and the walk always terminates. The work queue is explicit;
/// deep ontologies never recurse.
///
/// # Example
///
/// ```ignore
/// let projector = AncestorProjector::new(&ontology);
/// let dag = projector.project(&filtered_associations)?;
/// for node in &dag.nodes {
///     println!("{} <- {:?}", node.id, node.parent_ids);
/// }
/// ```
pub struct AncestorProjector<'a> {
    lookup: &'a dyn OntologyLookup,
    config: ProjectorConfig,
}

impl<'a> AncestorProjector<'a> {
    /// Creates a projector over the given ontology with default configuration.
    pub fn new(lookup: &'a dyn OntologyLookup) -> Self {
        Self::with_config(lookup, ProjectorConfig::default())
    }

    /// Creates a projector with custom configuration.
    pub fn with_config(lookup: &'a dyn OntologyLookup, config: ProjectorConfig) -> Self {
        Self { lookup, config }
    }

    /// Returns the projector configuration.
    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Builds the DAG for the given (already score-filtered) associations.
    ///
    /// Nodes are emitted in association order, one per distinct disease;
    /// a disease listed twice is emitted once. Synthetic roots follow, in
    /// the order they were first reached.
    ///
    /// # Errors
    ///
    /// Returns [`DagError::MissingNode`] if an association or any parent id
    /// reached during the walk is absent from the ontology.
    pub fn project(&self, associations: &[AssociationRecord]) -> DagResult<DagBuildResult> {
        self.project_with_stats(associations).map(|(dag, _)| dag)
    }

    /// Builds the DAG and reports projection statistics.
    ///
    /// # Errors
    ///
    /// Same as [`project`](Self::project).
    pub fn project_with_stats(
        &self,
        associations: &[AssociationRecord],
    ) -> DagResult<(DagBuildResult, ProjectionStats)> {
        let start = Instant::now();
        let assoc_set = AssociationSet::from_records(associations);

        let mut seen = HashSet::with_capacity(associations.len());
        let records: Vec<&AssociationRecord> = associations
            .iter()
            .filter(|record| {
                let first = seen.insert(record.disease_id.as_str());
                if !first {
                    warn!(disease_id = %record.disease_id, "skipping repeated association");
                }
                first
            })
            .collect();

        let ancestries = self.walk_all(&records, &assoc_set)?;

        let mut nodes = Vec::with_capacity(records.len());
        let mut root_ids: Vec<DiseaseId> = Vec::new();
        let mut root_seen: HashSet<DiseaseId> = HashSet::new();
        let mut nodes_visited = 0;

        for (record, ancestry) in records.iter().zip(ancestries) {
            nodes_visited += ancestry.visited;
            for parent_id in &ancestry.parent_ids {
                // Qualifying ancestors are either associated or roots
                if !assoc_set.contains(parent_id) && root_seen.insert(parent_id.clone()) {
                    root_ids.push(parent_id.clone());
                }
            }
            nodes.push(DagNode {
                id: record.disease_id.clone(),
                name: record.disease_name.clone(),
                score: Some(record.score),
                parent_ids: ancestry.parent_ids,
            });
        }

        for root_id in &root_ids {
            let root = self.require(root_id, None)?;
            nodes.push(DagNode {
                id: root.id.clone(),
                name: root.name.clone(),
                score: None,
                parent_ids: Vec::new(),
            });
        }

        let stats = ProjectionStats {
            associations: records.len(),
            synthetic_roots: root_ids.len(),
            nodes_visited,
            duration: start.elapsed(),
        };
        debug!(
            associations = stats.associations,
            synthetic_roots = stats.synthetic_roots,
            nodes_visited = stats.nodes_visited,
            "projected associations onto ontology"
        );

        let dag = DagBuildResult { nodes, root_ids };
        Ok((dag, stats))
    }

    /// Finds the closest qualifying ancestors of one disease.
    ///
    /// Parents are examined in each node's own `parent_ids` order, so the
    /// result order is deterministic. A root disease has no ancestors.
    ///
    /// # Errors
    ///
    /// Returns [`DagError::MissingNode`] if `disease_id` or any parent id
    /// reached is absent from the ontology.
    pub fn closest_qualifying_ancestors(
        &self,
        disease_id: &str,
        associated: &AssociationSet<'_>,
    ) -> DagResult<Vec<DiseaseId>> {
        self.walk(disease_id, associated)
            .map(|ancestry| ancestry.parent_ids)
    }

    fn walk_all(
        &self,
        records: &[&AssociationRecord],
        associated: &AssociationSet<'_>,
    ) -> DagResult<Vec<Ancestry>> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            use rayon::prelude::*;

            // Collected in input order so the first error matches the sequential path
            return records
                .par_iter()
                .map(|record| self.walk(&record.disease_id, associated))
                .collect::<Vec<_>>()
                .into_iter()
                .collect();
        }

        records
            .iter()
            .map(|record| self.walk(&record.disease_id, associated))
            .collect()
    }

    fn walk(&self, disease_id: &str, associated: &AssociationSet<'_>) -> DagResult<Ancestry> {
        let start = self.require(disease_id, None)?;

        let mut parent_ids = Vec::new();
        let mut visited: HashSet<&str> = HashSet::with_capacity(16);
        let mut queue: VecDeque<&OntologyNode> = VecDeque::with_capacity(8);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for parent_id in &current.parent_ids {
                if !visited.insert(parent_id.as_str()) {
                    continue;
                }
                let parent = self.require(parent_id, Some(current.id.as_str()))?;
                if associated.contains(parent_id) || parent.is_root() {
                    parent_ids.push(parent_id.clone());
                } else {
                    queue.push_back(parent);
                }
            }
        }

        Ok(Ancestry {
            parent_ids,
            visited: visited.len(),
        })
    }

    fn require(&self, id: &str, referenced_by: Option<&str>) -> DagResult<&'a OntologyNode> {
        self.lookup.node(id).ok_or_else(|| DagError::MissingNode {
            id: id.to_string(),
            referenced_by: referenced_by.map(str::to_string),
        })
    }
}
