//! # efo-assoc
//!
//! Core data model for browsing target–disease associations against a disease
//! ontology such as EFO.
//!
//! This crate provides:
//! - **Association records**: a disease plus its relevance score for a target
//! - **Ontology nodes**: entries of the disease hierarchy with their parent links
//! - **Ontology table**: the in-memory id → node lookup used by the DAG builder
//! - **Association set**: a per-call membership index over association records
//!
//! ## Usage
//!
//! ```rust
//! use efo_assoc::{filter_by_score, AssociationRecord, AssociationSet, Ontology, OntologyNode};
//!
//! let ontology = Ontology::from_nodes([
//!     OntologyNode::root("EFO_0000408", "disease"),
//!     OntologyNode::new("MONDO_0005015", "diabetes mellitus", ["EFO_0000408"]),
//! ])
//! .unwrap();
//! assert_eq!(ontology.len(), 2);
//!
//! let records = vec![
//!     AssociationRecord::new("MONDO_0005015", "diabetes mellitus", 0.62),
//!     AssociationRecord::new("EFO_0000408", "disease", 0.04),
//! ];
//! let kept = filter_by_score(&records, 0.1);
//! let index = AssociationSet::from_records(&kept);
//! assert!(index.contains("MONDO_0005015"));
//! assert!(!index.contains("EFO_0000408"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Derives `Serialize`/`Deserialize` for the data types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod ontology;
mod record;

pub use error::{AssocError, AssocResult};
pub use ontology::{Ontology, OntologyNode};
pub use record::{filter_by_score, AssociationRecord, AssociationSet, DEFAULT_MIN_SCORE};

/// Disease identifier (ontology CURIE such as `EFO_0000408` or `MONDO_0005015`).
pub type DiseaseId = String;
