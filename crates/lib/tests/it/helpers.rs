use adh::{
    Hierarchy,
    hierarchy::{Map, Value, value::map_from},
};

/// Builds a single-field payload.
pub fn payload(key: &str, value: impl Into<Value>) -> Map {
    map_from([(key, value.into())])
}

/// Creates a hierarchy with a small wing assembly:
///
/// ```text
/// wing            {"span_m": 10}
/// wing.spar       {"material": "aluminum"}
/// wing.rib        {"material": "composite", "count": 12}
/// tail.fin        {"material": "aluminum"}
/// ```
pub fn setup_wing() -> Hierarchy {
    let mut adh = Hierarchy::new();
    adh.create_node("wing", payload("span_m", 10)).unwrap();
    adh.create_node("wing.spar", payload("material", "aluminum")).unwrap();
    adh.create_node(
        "wing.rib",
        map_from([("material", Value::from("composite")), ("count", Value::from(12))]),
    )
    .unwrap();
    adh.create_node("tail.fin", payload("material", "aluminum")).unwrap();
    adh
}

/// Returns the map stored at `path`, panicking with context otherwise.
pub fn node_map<'a>(adh: &'a Hierarchy, path: &str) -> &'a Map {
    match adh.get_node(path) {
        Some(Value::Map(map)) => map,
        Some(other) => panic!("Expected map at '{path}', got: {other:?}"),
        None => panic!("No node at '{path}'"),
    }
}

/// Asserts that the node at `path` is exactly `expected`.
pub fn assert_node(adh: &Hierarchy, path: &str, expected: &Map) {
    assert_eq!(node_map(adh, path), expected, "Node mismatch at '{path}'");
}
