use adh::{
    Error, Hierarchy,
    hierarchy::{HierarchyError, Map, Value, value::map_from},
};

use crate::helpers::*;

#[test]
fn test_move_relocates_value() {
    let mut adh = setup_wing();
    let spar = node_map(&adh, "wing.spar").clone();

    adh.move_node("wing.spar", "tail.spar").unwrap();

    assert!(adh.get_node("wing.spar").is_none());
    assert_node(&adh, "tail.spar", &spar);
}

#[test]
fn test_move_creates_missing_target_parents() {
    let mut adh = setup_wing();
    adh.move_node("tail.fin", "empennage.vertical.fin").unwrap();

    assert!(adh.get_node("tail.fin").is_none());
    assert_node(
        &adh,
        "empennage.vertical.fin",
        &payload("material", "aluminum"),
    );
    // The emptied parent stays behind
    assert_node(&adh, "tail", &Map::new());
}

#[test]
fn test_move_preconditions() {
    let mut adh = setup_wing();
    let before = adh.clone();

    assert!(adh.move_node("wing.flap", "tail.flap").unwrap_err().is_not_found());
    assert!(adh.move_node("wing.spar", "wing.rib").unwrap_err().is_conflict());
    assert!(adh.move_node("wing.spar", "wing.spar").unwrap_err().is_conflict());
    assert!(adh.move_node("wing", "wing.spar").unwrap_err().is_conflict());

    let err = adh.move_node("wing", "wing.spar.inner").unwrap_err();
    assert!(matches!(
        err,
        Error::Hierarchy(HierarchyError::InvalidMove { ref from, ref to })
            if from == "wing" && to == "wing.spar.inner"
    ));

    assert_eq!(adh, before);
}

#[test]
fn test_copy_is_independent() {
    let mut adh = setup_wing();
    adh.copy_node("wing", "wing_copy").unwrap();

    assert_eq!(node_map(&adh, "wing_copy"), node_map(&adh, "wing"));

    adh.update_node("wing_copy.spar", payload("material", "titanium")).unwrap();
    assert_node(&adh, "wing.spar", &payload("material", "aluminum"));

    adh.update_node("wing.rib", payload("count", 1)).unwrap();
    assert_eq!(node_map(&adh, "wing_copy.rib")["count"], 12);
}

#[test]
fn test_copy_preconditions() {
    let mut adh = setup_wing();

    assert!(adh.copy_node("wing.flap", "tail.flap").unwrap_err().is_not_found());
    assert!(adh.copy_node("wing.spar", "tail.fin").unwrap_err().is_conflict());
}

#[test]
fn test_merge_source_wins_and_preserves_target_keys() {
    let mut adh = Hierarchy::new();
    adh.create_node("source", payload("x", 1)).unwrap();
    adh.create_node("target", payload("y", 2)).unwrap();

    adh.merge_nodes("source", "target").unwrap();

    assert_node(&adh, "target", &map_from([("y", 2), ("x", 1)]));
    assert_node(&adh, "source", &payload("x", 1));
}

#[test]
fn test_merge_is_recursive() {
    let mut adh = Hierarchy::new();
    adh.create_node(
        "rev_b",
        map_from([
            ("material", Value::from("titanium")),
            ("loads", Value::Map(map_from([("ultimate", 3.75)]))),
        ]),
    )
    .unwrap();
    adh.create_node(
        "rev_a",
        map_from([
            ("material", Value::from("aluminum")),
            ("loads", Value::Map(map_from([("limit", 2.5), ("ultimate", 3.0)]))),
            ("owner", Value::from("structures")),
        ]),
    )
    .unwrap();

    adh.merge_nodes("rev_b", "rev_a").unwrap();

    let merged = node_map(&adh, "rev_a");
    assert_eq!(merged["material"], "titanium");
    assert_eq!(merged["owner"], "structures");
    assert_eq!(
        merged["loads"],
        Value::Map(map_from([("limit", 2.5), ("ultimate", 3.75)]))
    );
}

#[test]
fn test_merge_rejects_overlapping_nodes() {
    let mut adh = Hierarchy::new();
    adh.create_node("wing", payload("span_m", 10)).unwrap();
    adh.create_node("wing.left", payload("wing", 1)).unwrap();
    let before = adh.clone();

    // Target is an ancestor: the source-wins overwrite would replace the source itself
    let err = adh.merge_nodes("wing.left", "wing").unwrap_err();
    assert!(matches!(
        err,
        Error::Hierarchy(HierarchyError::InvalidMerge { ref from, ref to })
            if from == "wing.left" && to == "wing"
    ));

    // Target is a descendant: the source subtree would change
    let err = adh.merge_nodes("wing", "wing.left").unwrap_err();
    assert!(matches!(err, Error::Hierarchy(HierarchyError::InvalidMerge { .. })));

    assert!(adh.merge_nodes("wing", "wing").unwrap_err().is_hierarchy_error());
    assert_eq!(adh, before);
}

#[test]
fn test_merge_preconditions() {
    let mut adh = setup_wing();

    assert!(adh.merge_nodes("wing.flap", "wing.spar").unwrap_err().is_not_found());
    assert!(adh.merge_nodes("wing.spar", "wing.flap").unwrap_err().is_not_found());
    assert!(adh.merge_nodes("wing.rib.count", "wing.spar").unwrap_err().is_type_error());
    assert!(adh.merge_nodes("wing.spar", "wing.rib.count").unwrap_err().is_type_error());
}
