//! Configuration for hierarchy instances.

use serde::{Deserialize, Serialize};

use crate::constants::PATH_KEY;

/// Settings for a [`Hierarchy`](crate::hierarchy::Hierarchy).
///
/// Missing fields fall back to their defaults when deserialized, so an empty
/// document is a valid configuration.
///
/// ```
/// use adh::config::HierarchyConfig;
///
/// let config = HierarchyConfig::default();
/// assert_eq!(config.path_key, "_path");
///
/// let config = HierarchyConfig {
///     path_key: "@path".to_string(),
/// };
/// # assert_eq!(config.path_key, "@path");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Key under which `search_nodes` records the dotted path of each hit.
    pub path_key: String,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            path_key: PATH_KEY.to_string(),
        }
    }
}
