//! Error types for the association data model.

use thiserror::Error;

use crate::DiseaseId;

/// Errors that can occur while building the ontology table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssocError {
    /// The same disease id was supplied twice when building the ontology.
    #[error("duplicate ontology node: {0}")]
    DuplicateNode(DiseaseId),
}

/// Result type for association data model operations.
pub type AssocResult<T> = std::result::Result<T, AssocError>;
