//! Tests for serde support.
//!
//! No storage format is mandated; these check that hierarchies and records
//! survive a JSON round trip so collaborators can embed them.

use adh::{
    Hierarchy,
    config::HierarchyConfig,
    hierarchy::{Hierarchical, Map, Value},
    metadata::Metadata,
};

use crate::helpers::*;

#[test]
fn test_hierarchy_json_round_trip() {
    let mut adh = setup_wing();
    adh.link_nodes("wing.rib", "wing.spar").unwrap();

    let json = serde_json::to_string(&adh).unwrap();
    let restored: Hierarchy = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, adh);
    assert_eq!(restored.alias_target("wing.rib").unwrap(), "wing.spar");
    assert_eq!(
        restored.search_paths(&payload("material", "aluminum")),
        vec!["wing.spar", "tail.fin"]
    );
}

#[test]
fn test_hierarchy_json_shape() {
    let mut adh = Hierarchy::new();
    adh.create_node("wing.spar", payload("material", "aluminum")).unwrap();
    adh.create_node("fin", payload("k", 1)).unwrap();
    adh.link_nodes("fin", "wing.spar").unwrap();

    assert_eq!(
        serde_json::to_value(&adh).unwrap(),
        serde_json::json!({
            "root": {"wing": {"spar": {"material": "aluminum"}}, "fin": {"k": 1}},
            "aliases": {"fin": "wing.spar"},
        })
    );
}

#[test]
fn test_json_payloads_can_be_stored() {
    let mut adh = Hierarchy::new();
    let json = r#"{"airfoil": "NACA 2412", "chord_m": 1.6, "twist_deg": -2}"#;
    let payload = Value::from_json_str(json).unwrap();
    adh.create_node("wing.section", payload).unwrap();

    let section = node_map(&adh, "wing.section");
    assert_eq!(section["airfoil"], "NACA 2412");
    assert_eq!(section["chord_m"], 1.6);
    assert_eq!(section["twist_deg"], -2);
}

#[test]
fn test_invalid_json_is_a_serialization_error() {
    let err = Value::from_json_str("{not json").unwrap_err();
    assert!(err.is_serialization_error());
}

#[test]
fn test_metadata_round_trip_keeps_hierarchy() {
    let mut meta = Metadata::new("owner", "structures").unwrap();
    meta.create_node("contacts.lead", payload("name", "R. Lee")).unwrap();

    let json = serde_json::to_string(&meta).unwrap();
    let restored: Metadata = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, meta);
    assert!(restored.get_node("contacts.lead").is_some());
}

#[test]
fn test_malformed_alias_path_rejected_on_load() {
    let json = r#"{"root": {}, "aliases": {"a..b": "c"}}"#;
    assert!(serde_json::from_str::<Hierarchy>(json).is_err());
}

#[test]
fn test_custom_config_is_not_serialized() {
    let config = HierarchyConfig {
        path_key: "@at".to_string(),
    };
    let mut adh = Hierarchy::with_config(config.clone());
    adh.create_node("wing.spar", payload("material", "aluminum")).unwrap();

    let json = serde_json::to_string(&adh).unwrap();
    let mut restored: Hierarchy = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, adh);
    assert_eq!(restored.config(), &HierarchyConfig::default());
    assert_eq!(restored.search_nodes(&Map::new())[0]["_path"], "wing");

    restored.set_config(config);
    assert_eq!(restored.search_nodes(&Map::new())[0]["@at"], "wing");
}
