use adh::{
    Hierarchy,
    config::HierarchyConfig,
    hierarchy::{Map, Value, value::map_from},
};

use crate::helpers::*;

#[test]
fn test_search_finds_all_depths() {
    let mut adh = Hierarchy::new();
    adh.create_node("a.b", payload("k", 1)).unwrap();
    adh.create_node("a.b.c", payload("k", 1)).unwrap();

    let hits = adh.search_nodes(&payload("k", 1));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["_path"], "a.b");
    assert_eq!(hits[1]["_path"], "a.b.c");
}

#[test]
fn test_search_hits_are_annotated_copies() {
    let adh = setup_wing();
    let hits = adh.search_nodes(&payload("material", "composite"));

    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0],
        map_from([
            ("material", Value::from("composite")),
            ("count", Value::from(12)),
            ("_path", Value::from("wing.rib")),
        ])
    );
    // The stored node is not annotated
    assert!(!node_map(&adh, "wing.rib").contains_key("_path"));
}

#[test]
fn test_search_requires_every_criterion() {
    let adh = setup_wing();

    let hits = adh.search_paths(&map_from([
        ("material", Value::from("composite")),
        ("count", Value::from(12)),
    ]));
    assert_eq!(hits, vec!["wing.rib"]);

    let mismatched_type = map_from([("material", "composite"), ("count", "12")]);
    assert!(adh.search_paths(&mismatched_type).is_empty());
    assert!(adh.search_paths(&payload("color", "red")).is_empty());
}

#[test]
fn test_search_compares_numbers_by_value() {
    let mut adh = Hierarchy::new();
    let section = Value::from_json_str(r#"{"chord_m": 1.0, "twist_deg": -2}"#).unwrap();
    adh.create_node("wing.section", section).unwrap();

    assert_eq!(adh.search_paths(&payload("chord_m", 1)), vec!["wing.section"]);
    assert_eq!(adh.search_paths(&payload("twist_deg", -2.0)), vec!["wing.section"]);
    assert!(adh.search_paths(&payload("chord_m", 1.5)).is_empty());
}

#[test]
fn test_search_order_is_preorder() {
    let adh = setup_wing();
    let hits = adh.search_paths(&payload("material", "aluminum"));
    assert_eq!(hits, vec!["wing.spar", "tail.fin"]);
}

#[test]
fn test_empty_criteria_matches_every_map() {
    let adh = setup_wing();
    let hits = adh.search_paths(&Map::new());
    assert_eq!(hits, vec!["wing", "wing.spar", "wing.rib", "tail", "tail.fin"]);
}

#[test]
fn test_search_includes_nested_payload_maps() {
    let mut adh = Hierarchy::new();
    adh.create_node(
        "wing",
        map_from([("loads", Value::Map(payload("kind", "limit")))]),
    )
    .unwrap();

    assert_eq!(adh.search_paths(&payload("kind", "limit")), vec!["wing.loads"]);
}

#[test]
fn test_search_uses_configured_path_key() {
    let mut adh = Hierarchy::with_config(HierarchyConfig {
        path_key: "location".to_string(),
    });
    adh.create_node("wing.spar", payload("k", 1)).unwrap();

    let hits = adh.search_nodes(&payload("k", 1));
    assert_eq!(hits[0]["location"], "wing.spar");
}

#[test]
fn test_search_empty_hierarchy() {
    let adh = Hierarchy::new();
    assert!(adh.search_nodes(&Map::new()).is_empty());
}
