//! Path resolution against a tree of maps.
//!
//! Resolution walks components left to right from a starting map. A missing
//! component, or an intermediate value that is not a map, resolves to `None`.
//! Nothing here creates nodes.

use super::{Map, Path, Value};

pub(crate) fn resolve<'a>(root: &'a Map, path: &Path) -> Option<&'a Value> {
    let mut components = path.components();
    let mut current = root.get(components.next()?)?;
    for component in components {
        current = current.as_map()?.get(component)?;
    }
    Some(current)
}

pub(crate) fn resolve_mut<'a>(root: &'a mut Map, path: &Path) -> Option<&'a mut Value> {
    let mut components = path.components();
    let mut current = root.get_mut(components.next()?)?;
    for component in components {
        current = current.as_map_mut()?.get_mut(component)?;
    }
    Some(current)
}

/// Returns the map that holds the final component of `path`.
pub(crate) fn parent_mut<'a>(root: &'a mut Map, path: &Path) -> Option<&'a mut Map> {
    match path.parent() {
        Some(parent) => resolve_mut(root, parent)?.as_map_mut(),
        None => Some(root),
    }
}
