//! Structural edits: move, copy and merge.
//!
//! These are composed from the node store primitives on [`Hierarchy`] rather
//! than manipulating the tree directly, so path resolution has a single
//! implementation.

use tracing::debug;

use super::{Hierarchy, HierarchyError, Map, Path, Value, not_found};
use crate::Result;

impl Hierarchy {
    /// Moves the node at `source` to `target`.
    ///
    /// This is a two-phase operation: the target is created with the source's
    /// current value, then the source is deleted. It is not atomic; a caller
    /// sharing the hierarchy without a lock may observe both paths populated.
    /// With the preconditions below checked up front, the delete phase cannot
    /// fail in single-threaded use.
    ///
    /// # Errors
    ///
    /// - [`HierarchyError::NodeNotFound`] if `source` does not exist
    /// - [`HierarchyError::PathAlreadyExists`] if `target` already exists
    /// - [`HierarchyError::InvalidMove`] if `target` lies inside the source subtree
    /// - [`HierarchyError::InvalidPayloadType`] if the source value is not a map
    pub fn move_node(&mut self, source: impl AsRef<str>, target: impl AsRef<str>) -> Result<()> {
        let source = Path::new(source.as_ref())?;
        let target = Path::new(target.as_ref())?;

        let value = self.get_node(source).ok_or_else(|| not_found(source))?.clone();
        self.ensure_vacant(target)?;

        if target.starts_with(source) {
            return Err(HierarchyError::InvalidMove {
                from: source.to_string(),
                to: target.to_string(),
            }
            .into());
        }

        self.create_node(target, value)?;
        self.delete_node(source)?;

        debug!(source = %source, target = %target, "Moved node");
        Ok(())
    }

    /// Copies the node at `source` to `target`.
    ///
    /// The copy is deep: later changes to either node never affect the other.
    /// Copying into the source's own subtree is allowed since the value is
    /// captured before the target is created.
    ///
    /// # Errors
    ///
    /// Same as [`move_node`](Self::move_node), except that copying into the
    /// source subtree is permitted.
    pub fn copy_node(&mut self, source: impl AsRef<str>, target: impl AsRef<str>) -> Result<()> {
        let source = Path::new(source.as_ref())?;
        let target = Path::new(target.as_ref())?;

        let value = self.get_node(source).ok_or_else(|| not_found(source))?.clone();
        self.ensure_vacant(target)?;

        self.create_node(target, value)?;

        debug!(source = %source, target = %target, "Copied node");
        Ok(())
    }

    /// Merges the map at `source` into the map at `target` in place.
    ///
    /// For each key in the source: if both sides hold a map, they are merged
    /// recursively; otherwise the source value overwrites the target's. Keys
    /// only present in the target are kept. The source node is not modified,
    /// which is why the two nodes may not overlap.
    ///
    /// # Errors
    ///
    /// - [`HierarchyError::NodeNotFound`] if either path does not exist
    /// - [`HierarchyError::InvalidMerge`] if the paths are equal or one lies
    ///   inside the other
    /// - [`HierarchyError::InvalidPayloadType`] if either node is not a map
    pub fn merge_nodes(&mut self, source: impl AsRef<str>, target: impl AsRef<str>) -> Result<()> {
        let source = Path::new(source.as_ref())?;
        let target = Path::new(target.as_ref())?;

        let source_value = self.get_node(source).ok_or_else(|| not_found(source))?;
        if !self.contains_node(target) {
            return Err(not_found(target));
        }

        if target.starts_with(source) || source.starts_with(target) {
            return Err(HierarchyError::InvalidMerge {
                from: source.to_string(),
                to: target.to_string(),
            }
            .into());
        }

        let source_map = expect_map(source, source_value)?.clone();
        let target_value = self.get_node_mut(target).ok_or_else(|| not_found(target))?;
        let target_map = match target_value {
            Value::Map(map) => map,
            other => {
                return Err(HierarchyError::InvalidPayloadType {
                    path: target.to_string(),
                    actual: other.type_name(),
                }
                .into());
            }
        };

        merge_maps(target_map, &source_map);

        debug!(source = %source, target = %target, keys = source_map.len(), "Merged nodes");
        Ok(())
    }

    fn ensure_vacant(&self, path: &Path) -> Result<()> {
        if self.contains_node(path) {
            return Err(HierarchyError::PathAlreadyExists {
                path: path.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

fn expect_map<'a>(path: &Path, value: &'a Value) -> Result<&'a Map> {
    value.as_map().ok_or_else(|| {
        HierarchyError::InvalidPayloadType {
            path: path.to_string(),
            actual: value.type_name(),
        }
        .into()
    })
}

/// Source-wins recursive merge of `source` into `target`.
pub(crate) fn merge_maps(target: &mut Map, source: &Map) {
    for (key, value) in source {
        if let (Some(Value::Map(existing)), Value::Map(incoming)) = (target.get_mut(key), value) {
            merge_maps(existing, incoming);
            continue;
        }
        target.insert(key.clone(), value.clone());
    }
}
