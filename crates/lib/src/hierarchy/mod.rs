//! The Application/Aircraft Data Hierarchy (ADH) tree store.
//!
//! A [`Hierarchy`] owns a single root container and exposes path-addressed
//! node operations on top of it:
//!
//! - **Node store**: [`create_node`](Hierarchy::create_node),
//!   [`get_node`](Hierarchy::get_node), [`update_node`](Hierarchy::update_node),
//!   [`delete_node`](Hierarchy::delete_node)
//! - **Structural edits**: [`move_node`](Hierarchy::move_node),
//!   [`copy_node`](Hierarchy::copy_node), [`merge_nodes`](Hierarchy::merge_nodes)
//! - **Aliases**: [`link_nodes`](Hierarchy::link_nodes),
//!   [`unlink_nodes`](Hierarchy::unlink_nodes)
//! - **Search**: [`search_nodes`](Hierarchy::search_nodes)
//!
//! Payloads and child nodes share one namespace at each level: a
//! [`Value::Map`] can be a leaf payload and, once a path is created beneath
//! it, an interior node at the same time.
//!
//! # Usage
//!
//! ```
//! use adh::hierarchy::{Hierarchy, Map, value::map_from};
//!
//! let mut adh = Hierarchy::new();
//! adh.create_node("wing.spar", map_from([("material", "aluminum")]))?;
//!
//! let spar = adh.get_node("wing.spar").and_then(|v| v.as_map()).unwrap();
//! assert_eq!(spar["material"], "aluminum");
//!
//! // Paths must exist before they can be aliased
//! assert!(adh.link_nodes("wing.primary_spar", "wing.spar").is_err());
//! adh.create_node("wing.primary_spar", Map::new())?;
//! adh.link_nodes("wing.primary_spar", "wing.spar")?;
//! # Ok::<(), adh::Error>(())
//! ```
//!
//! The store is synchronous and in-memory. Mutations take `&mut self`, so
//! sharing a hierarchy across threads requires an external lock.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, config::HierarchyConfig};

pub mod alias;
mod edit;
pub mod errors;
pub mod path;
mod resolve;
mod search;
pub mod traits;
pub mod value;

pub use alias::AliasRegistry;
pub use errors::HierarchyError;
pub use path::{Component, Path, PathBuf, PathError};
pub use traits::Hierarchical;
pub use value::{Map, Value};

/// A path-addressable tree of named nodes with an alias registry.
///
/// Equality compares the nodes and aliases only. The configuration is not
/// serialized, so a hierarchy loaded from storage starts with the default
/// configuration; use [`Hierarchy::set_config`] to restore a custom one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hierarchy {
    /// Root container; never removed, only mutated.
    #[serde(default)]
    root: Map,
    #[serde(default)]
    aliases: AliasRegistry,
    #[serde(skip)]
    config: HierarchyConfig,
}

impl Hierarchy {
    /// Creates an empty hierarchy with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty hierarchy with the given configuration.
    pub fn with_config(config: HierarchyConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    /// Replaces the configuration, keeping all nodes and aliases.
    pub fn set_config(&mut self, config: HierarchyConfig) {
        self.config = config;
    }

    /// Returns the root container.
    pub fn root(&self) -> &Map {
        &self.root
    }

    /// Returns true if the root holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Creates a node at `path` holding `payload`.
    ///
    /// Missing intermediate components are created as empty maps. The final
    /// component must not already exist.
    ///
    /// # Errors
    ///
    /// - [`HierarchyError::InvalidPayloadType`] if the payload is not a map
    ///   (checked before anything is touched)
    /// - [`HierarchyError::PathAlreadyExists`] if a node already exists at `path`
    /// - [`HierarchyError::NotAContainer`] if an existing intermediate component
    ///   holds a non-map value. Such a component is always reached before any
    ///   missing one, so a failed create leaves the tree untouched.
    pub fn create_node(&mut self, path: impl AsRef<str>, payload: impl Into<Value>) -> Result<()> {
        let path = Path::new(path.as_ref())?;
        let payload = ensure_map(path, payload.into())?;

        if resolve::resolve(&self.root, path).is_some() {
            return Err(HierarchyError::PathAlreadyExists {
                path: path.to_string(),
            }
            .into());
        }

        let (parent, name) = path.split_last();
        let mut created = 0usize;
        let mut current = &mut self.root;

        let components = parent.into_iter().flat_map(|p| p.components());
        for (depth, component) in components.enumerate() {
            let entry = current.entry(component.to_string()).or_insert_with(|| {
                created += 1;
                Value::Map(Map::new())
            });
            current = match entry {
                Value::Map(map) => map,
                _ => {
                    return Err(HierarchyError::NotAContainer {
                        path: path.prefix(depth + 1).to_string(),
                    }
                    .into());
                }
            };
        }

        current.insert(name.to_string(), payload);
        debug!(path = %path, intermediates = created, "Created node");
        Ok(())
    }

    /// Returns the node at `path`, or `None` if any component is missing.
    ///
    /// Malformed paths resolve to `None` as well; this never errors.
    pub fn get_node(&self, path: impl AsRef<str>) -> Option<&Value> {
        let path = Path::new(path.as_ref()).ok()?;
        resolve::resolve(&self.root, path)
    }

    /// Returns a mutable reference to the node at `path`.
    pub fn get_node_mut(&mut self, path: impl AsRef<str>) -> Option<&mut Value> {
        let path = Path::new(path.as_ref()).ok()?;
        resolve::resolve_mut(&mut self.root, path)
    }

    /// Returns true if a node exists at `path`.
    pub fn contains_node(&self, path: impl AsRef<str>) -> bool {
        self.get_node(path).is_some()
    }

    /// Replaces the node at `path` with `payload` wholesale.
    ///
    /// # Errors
    ///
    /// - [`HierarchyError::InvalidPayloadType`] if the payload is not a map
    /// - [`HierarchyError::NodeNotFound`] if any component of `path` is missing
    pub fn update_node(&mut self, path: impl AsRef<str>, payload: impl Into<Value>) -> Result<()> {
        let path = Path::new(path.as_ref())?;
        let payload = ensure_map(path, payload.into())?;

        let slot = resolve::resolve_mut(&mut self.root, path).ok_or_else(|| not_found(path))?;
        *slot = payload;

        debug!(path = %path, "Updated node");
        Ok(())
    }

    /// Removes the node at `path` from its parent and returns it.
    ///
    /// Sibling order is preserved.
    pub fn delete_node(&mut self, path: impl AsRef<str>) -> Result<Value> {
        let path = Path::new(path.as_ref())?;

        let removed = resolve::parent_mut(&mut self.root, path)
            .and_then(|parent| parent.shift_remove(path.last()))
            .ok_or_else(|| not_found(path))?;

        debug!(path = %path, "Deleted node");
        Ok(removed)
    }
}

impl PartialEq for Hierarchy {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.aliases == other.aliases
    }
}

impl Hierarchical for Hierarchy {
    fn hierarchy(&self) -> &Hierarchy {
        self
    }

    fn hierarchy_mut(&mut self) -> &mut Hierarchy {
        self
    }
}

fn ensure_map(path: &Path, payload: Value) -> Result<Value> {
    if payload.is_map() {
        Ok(payload)
    } else {
        Err(HierarchyError::InvalidPayloadType {
            path: path.to_string(),
            actual: payload.type_name(),
        }
        .into())
    }
}

fn not_found(path: &Path) -> crate::Error {
    HierarchyError::NodeNotFound {
        path: path.to_string(),
    }
    .into()
}
