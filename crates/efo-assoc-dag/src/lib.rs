//! # efo-assoc-dag
//!
//! Reduces a full-depth disease ontology to a shallow DAG spanning only the
//! diseases associated with a target, ready for a layered DAG layout.
//!
//! For every associated disease the [`AncestorProjector`] walks up the
//! ontology breadth-first and keeps only its *closest qualifying ancestors*:
//! the nearest ancestors that are themselves associated, or that are roots.
//! Unassociated intermediate diseases are skipped. Roots reached this way
//! that are not associated become synthetic top-level nodes.
//!
//! ## Quick Start
//!
//! ```rust
//! use efo_assoc::{AssociationRecord, Ontology, OntologyNode};
//! use efo_assoc_dag::AncestorProjector;
//!
//! let ontology = Ontology::from_nodes([
//!     OntologyNode::root("A", "therapeutic area"),
//!     OntologyNode::new("B", "left", ["A"]),
//!     OntologyNode::new("C", "right", ["A"]),
//!     OntologyNode::new("D", "disease", ["B", "C"]),
//! ])
//! .unwrap();
//!
//! let associations = vec![AssociationRecord::new("D", "disease", 0.7)];
//! let dag = AncestorProjector::new(&ontology).project(&associations).unwrap();
//!
//! assert_eq!(dag.nodes[0].parent_ids, vec!["A"]);
//! assert_eq!(dag.root_ids, vec!["A"]);
//! assert!(dag.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Projects associations on the rayon thread pool
//! - `serde` - Serializes DAG nodes as `{ id, name, score?, parentIds }`
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      efo-assoc-dag                           │
//! │                                                              │
//! │  DagBuilder / DagCache                                       │
//! │  ├── filter associations by score threshold                 │
//! │  └── AncestorProjector                                       │
//! │      ├── index associations (AssociationSet)                │
//! │      ├── BFS up the ontology (via OntologyLookup trait)     │
//! │      ├── one DagNode per association                        │
//! │      └── append synthetic roots once each                   │
//! │                                                              │
//! │  DagBuildResult → external layered layout                    │
//! │  (unique ids, closed parent references, acyclic)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod builder;
mod cache;
mod config;
mod error;
mod projector;
mod result;
mod traits;

// Public re-exports
pub use builder::{DagBuilder, DagView};
pub use cache::{DagCache, DagCacheStats, DEFAULT_CACHE_ENTRIES};
pub use config::{ProjectorConfig, ProjectorConfigBuilder};
pub use error::{DagError, DagResult};
pub use projector::AncestorProjector;
pub use result::{DagBuildResult, DagNode, ProjectionStats};
pub use traits::OntologyLookup;

// Re-export commonly used types from dependencies for convenience
pub use efo_assoc::{AssociationRecord, DiseaseId, Ontology, OntologyNode};
