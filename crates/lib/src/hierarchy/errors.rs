//! Error types for hierarchy operations.
//!
//! Every precondition violation of a node store, structural edit or alias
//! operation is reported through [`HierarchyError`]. Lookups never error:
//! absence is reported as `None` by [`Hierarchy::get_node`](super::Hierarchy::get_node).

use thiserror::Error;

use super::path::PathError;

/// Structured error types for hierarchy operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// A required node (or alias) does not exist at the path
    #[error("Node not found: {path}")]
    NodeNotFound { path: String },

    /// A node already exists where none was expected
    #[error("Path already exists: {path}")]
    PathAlreadyExists { path: String },

    /// A mutating operation was given a payload that is not a map
    #[error("Invalid payload at '{path}': expected map, found {actual}")]
    InvalidPayloadType { path: String, actual: &'static str },

    /// The path string was malformed
    #[error(transparent)]
    InvalidPath(#[from] PathError),

    /// An intermediate component holds a value that cannot contain children
    #[error("Cannot create children under non-map value at '{path}'")]
    NotAContainer { path: String },

    /// A node cannot be moved into its own subtree
    #[error("Cannot move '{from}' into its own subtree at '{to}'")]
    InvalidMove { from: String, to: String },

    /// Merge source and target overlap, so the source could not stay intact
    #[error("Cannot merge '{from}' into '{to}': one is inside the other")]
    InvalidMerge { from: String, to: String },
}

impl HierarchyError {
    /// Check if this error indicates a missing node or alias
    pub fn is_not_found(&self) -> bool {
        matches!(self, HierarchyError::NodeNotFound { .. })
    }

    /// Check if this error indicates an occupied target path
    pub fn is_already_exists(&self) -> bool {
        matches!(self, HierarchyError::PathAlreadyExists { .. })
    }

    /// Check if this error is caused by a value of the wrong shape
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            HierarchyError::InvalidPayloadType { .. } | HierarchyError::NotAContainer { .. }
        )
    }

    /// Check if this error comes from path validation
    pub fn is_path_error(&self) -> bool {
        matches!(self, HierarchyError::InvalidPath(_))
    }

    /// Check if this error rejects the requested structural edit itself
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            HierarchyError::InvalidMove { .. } | HierarchyError::InvalidMerge { .. }
        )
    }

    /// Get the path the error refers to, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            HierarchyError::NodeNotFound { path }
            | HierarchyError::PathAlreadyExists { path }
            | HierarchyError::InvalidPayloadType { path, .. }
            | HierarchyError::NotAContainer { path } => Some(path),
            HierarchyError::InvalidPath(err) => Some(err.input()),
            HierarchyError::InvalidMove { to, .. } | HierarchyError::InvalidMerge { to, .. } => {
                Some(to)
            }
        }
    }
}

// Conversion from HierarchyError to the main Error type
impl From<HierarchyError> for crate::Error {
    fn from(err: HierarchyError) -> Self {
        crate::Error::Hierarchy(err)
    }
}
