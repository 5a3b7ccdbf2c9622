//! Error types for DAG projection.

use efo_assoc::DiseaseId;
use thiserror::Error;

/// Errors that can occur while projecting or validating an association DAG.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DagError {
    /// A disease id is absent from the ontology snapshot.
    #[error("{}", missing_node_message(.id, .referenced_by.as_deref()))]
    MissingNode {
        /// The id that could not be resolved.
        id: DiseaseId,
        /// The node whose parent list referenced it, if any.
        referenced_by: Option<DiseaseId>,
    },

    /// A node id occurs more than once in a DAG.
    #[error("Duplicate DAG node: {0}")]
    DuplicateNode(DiseaseId),

    /// A node lists a parent that is not part of the DAG.
    #[error("DAG node {id} references missing parent {parent_id}")]
    DanglingParent {
        /// The child node.
        id: DiseaseId,
        /// The unresolved parent id.
        parent_id: DiseaseId,
    },

    /// The DAG contains a cycle through this node.
    #[error("DAG contains a cycle through {id}")]
    Cycle {
        /// A node on the cycle.
        id: DiseaseId,
    },
}

fn missing_node_message(id: &str, referenced_by: Option<&str>) -> String {
    match referenced_by {
        Some(child) => format!("Ontology node not found: {id} (parent of {child})"),
        None => format!("Ontology node not found: {id}"),
    }
}

/// Result type for DAG operations.
pub type DagResult<T> = std::result::Result<T, DagError>;
