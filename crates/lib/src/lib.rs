//!
//! ADH: the Application/Aircraft Data Hierarchy.
//! This library provides a path-addressable tree store that engineering records embed to carry
//! free-form, structurally editable data alongside their validated fields.
//!
//! ## Core Concepts
//!
//! * **Hierarchy (`hierarchy::Hierarchy`)**: Owns a root container and exposes node operations keyed by dotted paths.
//! * **Paths (`hierarchy::Path`, `hierarchy::PathBuf`)**: Validated, dot-delimited component sequences resolved from the root.
//! * **Values (`hierarchy::Value`)**: Node payloads. A `Value::Map` doubles as an interior node whose children share its namespace.
//! * **Structural edits**: Move, copy and source-wins recursive merge, built on the node store primitives.
//! * **Aliases (`hierarchy::AliasRegistry`)**: Advisory source-to-target path records owned by each hierarchy.
//! * **Search**: Pre-order, whole-tree field matching that annotates each hit with its path.
//! * **Records (`hierarchy::Hierarchical`)**: Any type embedding a `Hierarchy` gains the full node API.

pub mod config;
pub mod constants;
pub mod hierarchy;
pub mod metadata;

/// Re-export the `Hierarchy` struct for easier access.
pub use hierarchy::Hierarchy;

/// Result type used throughout the ADH library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the ADH library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured hierarchy errors from the hierarchy module
    #[error(transparent)]
    Hierarchy(hierarchy::HierarchyError),

    /// Structured record validation errors from the metadata module
    #[error(transparent)]
    Metadata(metadata::MetadataError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Hierarchy(_) => "hierarchy",
            Error::Metadata(_) => "metadata",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a node or alias was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Hierarchy(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Hierarchy(err) => err.is_already_exists(),
            _ => false,
        }
    }

    /// Check if this error is caused by a value of the wrong shape.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Hierarchy(err) => err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is validation-related (malformed paths or record fields).
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Hierarchy(err) => err.is_path_error(),
            Error::Metadata(_) => true,
            _ => false,
        }
    }

    /// Check if this error is hierarchy-related.
    pub fn is_hierarchy_error(&self) -> bool {
        matches!(self, Error::Hierarchy(_))
    }

    /// Check if this error is a serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
