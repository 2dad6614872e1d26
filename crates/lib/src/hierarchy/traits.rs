//! Embedding trait for records that carry their own hierarchy.
//!
//! Engineering records (requirements, geometry, work-breakdown entries) each
//! hold an internal hierarchy of free-form nodes. A record embeds a
//! [`Hierarchy`] field and implements the two accessors of [`Hierarchical`];
//! every node operation then comes for free.
//!
//! ```
//! use adh::hierarchy::{Hierarchical, Hierarchy, value::map_from};
//!
//! #[derive(Default)]
//! struct Requirement {
//!     name: String,
//!     adh: Hierarchy,
//! }
//!
//! impl Hierarchical for Requirement {
//!     fn hierarchy(&self) -> &Hierarchy {
//!         &self.adh
//!     }
//!
//!     fn hierarchy_mut(&mut self) -> &mut Hierarchy {
//!         &mut self.adh
//!     }
//! }
//!
//! let mut req = Requirement { name: "max_takeoff_weight".into(), ..Default::default() };
//! req.create_node("sources.faa", map_from([("part", "25")]))?;
//! assert!(req.get_node("sources.faa").is_some());
//! # Ok::<(), adh::Error>(())
//! ```

use super::{Hierarchy, Map, PathBuf, Value};
use crate::Result;

/// A type that embeds a [`Hierarchy`] and exposes its node operations.
pub trait Hierarchical {
    fn hierarchy(&self) -> &Hierarchy;

    fn hierarchy_mut(&mut self) -> &mut Hierarchy;

    /// See [`Hierarchy::create_node`].
    fn create_node(&mut self, path: impl AsRef<str>, payload: impl Into<Value>) -> Result<()> {
        self.hierarchy_mut().create_node(path, payload)
    }

    /// See [`Hierarchy::get_node`].
    fn get_node(&self, path: impl AsRef<str>) -> Option<&Value> {
        self.hierarchy().get_node(path)
    }

    /// See [`Hierarchy::update_node`].
    fn update_node(&mut self, path: impl AsRef<str>, payload: impl Into<Value>) -> Result<()> {
        self.hierarchy_mut().update_node(path, payload)
    }

    /// See [`Hierarchy::delete_node`].
    fn delete_node(&mut self, path: impl AsRef<str>) -> Result<Value> {
        self.hierarchy_mut().delete_node(path)
    }

    /// See [`Hierarchy::move_node`].
    fn move_node(&mut self, source: impl AsRef<str>, target: impl AsRef<str>) -> Result<()> {
        self.hierarchy_mut().move_node(source, target)
    }

    /// See [`Hierarchy::copy_node`].
    fn copy_node(&mut self, source: impl AsRef<str>, target: impl AsRef<str>) -> Result<()> {
        self.hierarchy_mut().copy_node(source, target)
    }

    /// See [`Hierarchy::merge_nodes`].
    fn merge_nodes(&mut self, source: impl AsRef<str>, target: impl AsRef<str>) -> Result<()> {
        self.hierarchy_mut().merge_nodes(source, target)
    }

    /// See [`Hierarchy::link_nodes`].
    fn link_nodes(&mut self, source: impl AsRef<str>, target: impl AsRef<str>) -> Result<()> {
        self.hierarchy_mut().link_nodes(source, target)
    }

    /// See [`Hierarchy::unlink_nodes`].
    fn unlink_nodes(&mut self, source: impl AsRef<str>) -> Result<PathBuf> {
        self.hierarchy_mut().unlink_nodes(source)
    }

    /// See [`Hierarchy::search_nodes`].
    fn search_nodes(&self, criteria: &Map) -> Vec<Map> {
        self.hierarchy().search_nodes(criteria)
    }
}
