//! Disease ontology nodes and the in-memory id → node table.

use std::collections::HashMap;

use crate::error::{AssocError, AssocResult};
use crate::DiseaseId;

/// An entry in the disease classification hierarchy.
///
/// A node with no parents is a root (a therapeutic area in EFO terms).
/// Diseases may have several parents, so the hierarchy is a DAG rather
/// than a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OntologyNode {
    /// Disease identifier.
    pub id: DiseaseId,
    /// Display name.
    pub name: String,
    /// Direct parents, in ontology order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parent_ids: Vec<DiseaseId>,
}

impl OntologyNode {
    /// Creates a node with the given parents.
    pub fn new<I, S>(id: impl Into<DiseaseId>, name: impl Into<String>, parent_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<DiseaseId>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            parent_ids: parent_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a root node (no parents).
    pub fn root(id: impl Into<DiseaseId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_ids: Vec::new(),
        }
    }

    /// Returns true if this node has no parents.
    pub fn is_root(&self) -> bool {
        self.parent_ids.is_empty()
    }
}

/// The full disease ontology, loaded in memory and keyed by id.
///
/// Read-only once built. Insertion order is remembered so that
/// [`roots`](Self::roots) and [`iter`](Self::iter) are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    nodes: HashMap<DiseaseId, OntologyNode>,
    order: Vec<DiseaseId>,
}

impl Ontology {
    /// Creates an empty ontology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the id → node table from a flat list of nodes.
    ///
    /// Parent references are not checked here; a dangling parent id is
    /// reported by whoever walks the hierarchy.
    ///
    /// # Errors
    ///
    /// Returns [`AssocError::DuplicateNode`] if two nodes share an id.
    pub fn from_nodes<I>(nodes: I) -> AssocResult<Self>
    where
        I: IntoIterator<Item = OntologyNode>,
    {
        let mut ontology = Self::new();
        for node in nodes {
            ontology.insert(node)?;
        }
        Ok(ontology)
    }

    /// Adds a node to the table.
    ///
    /// # Errors
    ///
    /// Returns [`AssocError::DuplicateNode`] if the id is already present.
    pub fn insert(&mut self, node: OntologyNode) -> AssocResult<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(AssocError::DuplicateNode(node.id));
        }
        self.order.push(node.id.clone());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Looks up a node by id.
    pub fn get(&self, id: &str) -> Option<&OntologyNode> {
        self.nodes.get(id)
    }

    /// Checks if a node exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the ontology has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates root nodes in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = &OntologyNode> {
        self.iter().filter(|node| node.is_root())
    }

    /// Iterates all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OntologyNode> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }
}
