//! Alias bookkeeping for a hierarchy.
//!
//! An alias records that one path is a named reference to another. Aliases
//! are advisory: no node store or structural edit operation follows them, and
//! they are not revalidated when the referenced nodes are later moved or
//! deleted. Each [`Hierarchy`] owns its own [`AliasRegistry`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Hierarchy, HierarchyError, Path, PathBuf, not_found};
use crate::Result;

/// Flat mapping from alias source path to target path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasRegistry {
    links: IndexMap<PathBuf, PathBuf>,
}

impl AliasRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `source -> target`, returning the previous target if any.
    pub fn insert(&mut self, source: PathBuf, target: PathBuf) -> Option<PathBuf> {
        self.links.insert(source, target)
    }

    /// Removes the alias recorded for `source`.
    pub fn remove(&mut self, source: &Path) -> Option<PathBuf> {
        self.links.shift_remove(source)
    }

    /// Returns the target recorded for `source`.
    pub fn get(&self, source: &Path) -> Option<&Path> {
        self.links.get(source).map(|target| &**target)
    }

    /// Returns every source that aliases `target`.
    pub fn sources_for<'a>(&'a self, target: &'a Path) -> impl Iterator<Item = &'a Path> + 'a {
        self.links
            .iter()
            .filter(move |(_, t)| t.as_str() == target.as_str())
            .map(|(source, _)| &**source)
    }

    /// Iterates over `(source, target)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Path)> {
        self.links
            .iter()
            .map(|(source, target)| (&**source, &**target))
    }

    /// Number of recorded aliases.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns true if no aliases are recorded.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Hierarchy {
    /// Records `source` as an alias of `target`.
    ///
    /// Both paths must currently exist. An existing alias for `source` is
    /// overwritten. Cycles are not detected.
    pub fn link_nodes(&mut self, source: impl AsRef<str>, target: impl AsRef<str>) -> Result<()> {
        let source = Path::new(source.as_ref())?;
        let target = Path::new(target.as_ref())?;

        if !self.contains_node(source) {
            return Err(not_found(source));
        }
        if !self.contains_node(target) {
            return Err(not_found(target));
        }

        let previous = self.aliases.insert(source.to_path_buf(), target.to_path_buf());
        debug!(
            source = %source,
            target = %target,
            replaced = previous.is_some(),
            "Linked nodes"
        );
        Ok(())
    }

    /// Removes the alias recorded for `source` and returns its target.
    ///
    /// # Errors
    ///
    /// [`HierarchyError::NodeNotFound`] if no alias is recorded for `source`.
    pub fn unlink_nodes(&mut self, source: impl AsRef<str>) -> Result<PathBuf> {
        let source = Path::new(source.as_ref())?;

        let target = self
            .aliases
            .remove(source)
            .ok_or_else(|| HierarchyError::NodeNotFound {
                path: source.to_string(),
            })?;

        debug!(source = %source, target = %target, "Unlinked nodes");
        Ok(target)
    }

    /// Returns the recorded alias target for `source`, without following it.
    pub fn alias_target(&self, source: impl AsRef<str>) -> Option<&Path> {
        let source = Path::new(source.as_ref()).ok()?;
        self.aliases.get(source)
    }

    /// Returns the alias registry owned by this hierarchy.
    pub fn aliases(&self) -> &AliasRegistry {
        &self.aliases
    }
}
