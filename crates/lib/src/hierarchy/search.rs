//! Recursive, whole-tree search over node maps.

use tracing::trace;

use super::{Hierarchy, Map, Value};
use crate::constants::DELIMITER;

impl Hierarchy {
    /// Finds every map in the tree whose fields satisfy `criteria`.
    ///
    /// A map matches when it holds every criteria key with an equal value;
    /// extra keys are ignored and an empty `criteria` matches every map.
    /// Numbers compare by value, so `1` matches `1.0`, including inside
    /// lists and nested maps. Each
    /// hit is a copy of the matching map with its dotted path added under the
    /// configured path key (`"_path"` by default).
    ///
    /// Results are in pre-order: ancestors before descendants, siblings in
    /// insertion order. A match does not stop the search from descending into
    /// the matching map. The root itself is not a node and is never returned,
    /// and values inside lists are not searched.
    ///
    /// ```
    /// use adh::hierarchy::{Hierarchy, value::map_from};
    ///
    /// let mut adh = Hierarchy::new();
    /// adh.create_node("a.b", map_from([("k", 1)]))?;
    /// adh.create_node("a.b.c", map_from([("k", 1)]))?;
    ///
    /// let hits = adh.search_nodes(&map_from([("k", 1)]));
    /// let paths: Vec<_> = hits.iter().map(|hit| hit["_path"].to_string()).collect();
    /// assert_eq!(paths, vec!["a.b", "a.b.c"]);
    /// # Ok::<(), adh::Error>(())
    /// ```
    pub fn search_nodes(&self, criteria: &Map) -> Vec<Map> {
        let path_key = &self.config().path_key;
        self.matching(criteria)
            .into_iter()
            .map(|(path, node)| {
                let mut hit = node.clone();
                hit.insert(path_key.clone(), Value::Text(path));
                hit
            })
            .collect()
    }

    /// Like [`search_nodes`](Self::search_nodes) but returns only the paths.
    ///
    /// Paths are plain strings since payload field names are not required to
    /// be valid path components.
    pub fn search_paths(&self, criteria: &Map) -> Vec<String> {
        self.matching(criteria)
            .into_iter()
            .map(|(path, _)| path)
            .collect()
    }

    fn matching<'a>(&'a self, criteria: &Map) -> Vec<(String, &'a Map)> {
        let mut hits = Vec::new();
        let mut visited = 0usize;
        walk(self.root(), "", criteria, &mut hits, &mut visited);
        trace!(visited, hits = hits.len(), "Searched hierarchy");
        hits
    }
}

fn walk<'a>(
    map: &'a Map,
    prefix: &str,
    criteria: &Map,
    hits: &mut Vec<(String, &'a Map)>,
    visited: &mut usize,
) {
    for (key, value) in map {
        let Value::Map(child) = value else {
            continue;
        };
        *visited += 1;

        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{DELIMITER}{key}")
        };

        if matches(child, criteria) {
            hits.push((path.clone(), child));
        }
        walk(child, &path, criteria, hits, visited);
    }
}

fn matches(node: &Map, criteria: &Map) -> bool {
    criteria
        .iter()
        .all(|(key, expected)| node.get(key).is_some_and(|actual| field_eq(actual, expected)))
}

fn field_eq(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Int(int), Value::Float(float)) | (Value::Float(float), Value::Int(int)) => {
            *int as f64 == *float
        }
        (Value::List(a), Value::List(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| field_eq(x, y))
        }
        (Value::Map(a), Value::Map(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| field_eq(x, y)))
        }
        _ => actual == expected,
    }
}
