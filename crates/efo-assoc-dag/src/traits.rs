//! The ontology lookup seam.
//!
//! [`OntologyLookup`] abstracts the id → node table the projector walks.
//! The table is expected to be fully loaded before projection starts.
//!
//! # Example: implementing OntologyLookup for your own store
//!
//! ```ignore
//! use efo_assoc_dag::{OntologyLookup, OntologyNode};
//!
//! impl OntologyLookup for DiseaseIndex {
//!     fn node(&self, id: &str) -> Option<&OntologyNode> {
//!         self.by_id.get(id)
//!     }
//! }
//! ```

use std::collections::HashMap;

use efo_assoc::{DiseaseId, Ontology, OntologyNode};

/// Read-only access to ontology nodes by id.
pub trait OntologyLookup: Send + Sync {
    /// Gets a node by id.
    ///
    /// Returns `None` if the id is not part of the ontology.
    fn node(&self, id: &str) -> Option<&OntologyNode>;

    /// Checks if a node exists.
    fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }
}

impl OntologyLookup for Ontology {
    fn node(&self, id: &str) -> Option<&OntologyNode> {
        self.get(id)
    }
}

impl OntologyLookup for HashMap<DiseaseId, OntologyNode> {
    fn node(&self, id: &str) -> Option<&OntologyNode> {
        self.get(id)
    }
}

impl<T: OntologyLookup + ?Sized> OntologyLookup for &T {
    fn node(&self, id: &str) -> Option<&OntologyNode> {
        (**self).node(id)
    }
}

impl<T: OntologyLookup + ?Sized> OntologyLookup for std::sync::Arc<T> {
    fn node(&self, id: &str) -> Option<&OntologyNode> {
        (**self).node(id)
    }
}
