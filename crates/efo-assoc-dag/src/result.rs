//! DAG build result types.

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Duration;

use efo_assoc::DiseaseId;

use crate::error::{DagError, DagResult};

/// One node of the projected DAG.
///
/// Association nodes carry a score; synthetic root nodes do not.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DagNode {
    /// Disease identifier.
    pub id: DiseaseId,
    /// Display name.
    pub name: String,
    /// Association score, `None` for synthetic roots.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub score: Option<f64>,
    /// Closest qualifying ancestors, in traversal order.
    pub parent_ids: Vec<DiseaseId>,
}

impl DagNode {
    /// Returns true if this node has no parents in the DAG.
    pub fn is_top_level(&self) -> bool {
        self.parent_ids.is_empty()
    }
}

/// The reduced node list handed to a layered DAG layout.
///
/// Nodes appear in association order, followed by the synthetic roots in
/// the order they were first reached. A well-formed result has unique ids,
/// parent references that all resolve to nodes, and no cycles; see
/// [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DagBuildResult {
    /// All DAG nodes.
    pub nodes: Vec<DagNode>,
    /// Ids of synthetic roots: unassociated ontology roots that anchor the drawing.
    pub root_ids: Vec<DiseaseId>,
}

impl DagBuildResult {
    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finds a node by id.
    pub fn node(&self, id: &str) -> Option<&DagNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Returns the node ids in order.
    pub fn ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.id.as_str()).collect()
    }

    /// Iterates `(parent, child)` edges in node order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes.iter().flat_map(|node| {
            node.parent_ids
                .iter()
                .map(move |parent| (parent.as_str(), node.id.as_str()))
        })
    }

    /// Checks the invariants a layered layout relies on.
    ///
    /// # Errors
    ///
    /// - [`DagError::DuplicateNode`] if an id occurs twice
    /// - [`DagError::DanglingParent`] if a parent id is not a node
    /// - [`DagError::Cycle`] if following parent links loops
    pub fn validate(&self) -> DagResult<()> {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            if index.insert(node.id.as_str(), i).is_some() {
                return Err(DagError::DuplicateNode(node.id.clone()));
            }
        }

        // Kahn's algorithm over child -> parent edges
        let mut pending_parents = vec![0usize; self.nodes.len()];
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); self.nodes.len()];
        for (i, node) in self.nodes.iter().enumerate() {
            let mut seen = HashSet::with_capacity(node.parent_ids.len());
            for parent_id in &node.parent_ids {
                let parent = *index.get(parent_id.as_str()).ok_or_else(|| {
                    DagError::DanglingParent {
                        id: node.id.clone(),
                        parent_id: parent_id.clone(),
                    }
                })?;
                if seen.insert(parent) {
                    pending_parents[i] += 1;
                    children[parent].push(i);
                }
            }
        }

        let mut queue: VecDeque<usize> = (0..self.nodes.len())
            .filter(|&i| pending_parents[i] == 0)
            .collect();
        let mut resolved = 0;
        while let Some(current) = queue.pop_front() {
            resolved += 1;
            for &child in &children[current] {
                pending_parents[child] -= 1;
                if pending_parents[child] == 0 {
                    queue.push_back(child);
                }
            }
        }

        if resolved < self.nodes.len() {
            let stuck = pending_parents
                .iter()
                .position(|&pending| pending > 0)
                .unwrap_or_default();
            return Err(DagError::Cycle {
                id: self.nodes[stuck].id.clone(),
            });
        }

        Ok(())
    }
}

/// Statistics from one projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionStats {
    /// Distinct associations projected.
    pub associations: usize,
    /// Synthetic root nodes appended.
    pub synthetic_roots: usize,
    /// Ontology nodes reached across all ancestor walks.
    pub nodes_visited: usize,
    /// Total projection time.
    pub duration: Duration,
}

impl std::fmt::Display for ProjectionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Projection Statistics:")?;
        writeln!(f, "  Associations:    {}", self.associations)?;
        writeln!(f, "  Synthetic roots: {}", self.synthetic_roots)?;
        writeln!(f, "  Nodes visited:   {}", self.nodes_visited)?;
        writeln!(f, "  Duration:        {:?}", self.duration)?;
        Ok(())
    }
}
