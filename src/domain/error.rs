//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::NodeId;

/// Domain errors represent violations of the hierarchy rules.
/// All of them are local to the call that caused them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid operation: cannot {operation} on leaf '{name}'")]
    InvalidOperation {
        name: String,
        operation: &'static str,
    },

    #[error("'{child}' is not a child of '{parent}'")]
    NotFound { parent: String, child: String },

    #[error("cycle detected in hierarchy at: {0}")]
    CyclicStructure(String),

    #[error("'{child}' is already attached to '{parent}'")]
    AlreadyAttached { parent: String, child: String },

    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("builder: {0}")]
    Builder(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
