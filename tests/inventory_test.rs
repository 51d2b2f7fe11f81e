//! Tests for Inventory: add/remove/sum rules of the composite hierarchy

use rstest::{fixture, rstest};

use furnish::domain::{DomainError, Inventory, NodeId};
use furnish::util::testing;

/// A composite "Room" with two leaves worth 100 and 250.
#[fixture]
fn room() -> (Inventory, NodeId) {
    testing::init_test_setup();
    let mut inv = Inventory::new();
    let room = inv.composite("Room");
    let desk = inv.leaf("Desk", 100.0);
    let lamp = inv.leaf("Lamp", 250.0);
    inv.add(room, desk).unwrap();
    inv.add(room, lamp).unwrap();
    (inv, room)
}

// ============================================================
// Aggregation
// ============================================================

#[rstest]
#[case(0.0)]
#[case(900.0)]
#[case(-12.5)]
#[case(14000.0)]
fn given_leaf_with_value_when_summing_then_returns_value_repeatably(#[case] value: f64) {
    let mut inv = Inventory::new();
    let item = inv.leaf("Item", value);
    for _ in 0..5 {
        assert_eq!(inv.sum(item).unwrap(), value);
    }
}

#[rstest]
fn given_composite_when_summing_twice_then_result_is_identical(room: (Inventory, NodeId)) {
    let (inv, room) = room;
    let first = inv.sum(room).unwrap();
    let second = inv.sum(room).unwrap();
    assert_eq!(first, 350.0);
    assert_eq!(second, first);
}

#[rstest]
fn given_nested_composites_when_summing_then_totals_all_reachable_leaves(
    room: (Inventory, NodeId),
) {
    let (mut inv, room) = room;
    let floor = inv.composite("Floor");
    let closet = inv.composite("Closet");
    let coat = inv.leaf("Coat hanger", 15.0);
    inv.add(closet, coat).unwrap();
    inv.add(room, closet).unwrap();
    inv.add(floor, room).unwrap();

    assert_eq!(inv.sum(floor).unwrap(), 365.0);
    assert_eq!(inv.sum(room).unwrap(), 365.0);
    assert_eq!(inv.leaves(floor).len(), 3);
}

// ============================================================
// Add / remove
// ============================================================

#[rstest]
fn given_child_added_then_removed_when_summing_then_restores_previous_total(
    room: (Inventory, NodeId),
) {
    let (mut inv, room) = room;
    let before = inv.sum(room).unwrap();

    let sofa = inv.leaf("Sofa", 2000.0);
    inv.add(room, sofa).unwrap();
    assert_eq!(inv.sum(room).unwrap(), before + 2000.0);

    inv.remove(room, sofa).unwrap();
    assert_eq!(inv.sum(room).unwrap(), before);
    assert_eq!(inv.parent(sofa).unwrap(), None);
    assert!(inv.contains(sofa), "detached nodes stay alive");
}

#[rstest]
fn given_child_order_when_adding_then_keeps_insertion_order(room: (Inventory, NodeId)) {
    let (inv, room) = room;
    let names: Vec<&str> = inv
        .children(room)
        .unwrap()
        .iter()
        .map(|&c| inv.name(c).unwrap())
        .collect();
    assert_eq!(names, vec!["Desk", "Lamp"]);
}

#[rstest]
fn given_absent_child_when_removing_then_not_found_and_state_unchanged(
    room: (Inventory, NodeId),
) {
    let (mut inv, room) = room;
    let stranger = inv.leaf("Stranger", 1.0);

    let err = inv.remove(room, stranger).unwrap_err();
    assert_eq!(
        err,
        DomainError::NotFound {
            parent: "Room".into(),
            child: "Stranger".into()
        }
    );
    assert_eq!(inv.children(room).unwrap().len(), 2);
    assert_eq!(inv.sum(room).unwrap(), 350.0);
}

#[rstest]
fn given_leaf_parent_when_adding_or_removing_then_invalid_operation() {
    let mut inv = Inventory::new();
    let lamp = inv.leaf("Lamp", 250.0);
    let bulb = inv.leaf("Bulb", 5.0);

    assert!(matches!(
        inv.add(lamp, bulb),
        Err(DomainError::InvalidOperation { operation: "add", .. })
    ));
    assert!(matches!(
        inv.remove(lamp, bulb),
        Err(DomainError::InvalidOperation { operation: "remove", .. })
    ));
}

#[rstest]
fn given_attached_child_when_adding_again_then_already_attached(room: (Inventory, NodeId)) {
    let (mut inv, room) = room;
    let desk = inv.children(room).unwrap()[0];
    let other = inv.composite("Other");

    // same parent twice
    assert!(matches!(
        inv.add(room, desk),
        Err(DomainError::AlreadyAttached { .. })
    ));
    // second parent
    assert!(matches!(
        inv.add(other, desk),
        Err(DomainError::AlreadyAttached { .. })
    ));
    assert_eq!(inv.sum(room).unwrap(), 350.0);
    assert_eq!(inv.sum(other).unwrap(), 0.0);
}

#[rstest]
fn given_composite_when_adding_to_itself_then_cyclic_structure() {
    let mut inv = Inventory::new();
    let hall = inv.composite("Hall");
    assert_eq!(
        inv.add(hall, hall),
        Err(DomainError::CyclicStructure("Hall".into()))
    );
}

#[rstest]
fn given_ancestor_when_adding_under_descendant_then_cyclic_structure() {
    let mut inv = Inventory::new();
    let building = inv.composite("Building");
    let floor = inv.composite("Floor");
    let room = inv.composite("Room");
    inv.add(building, floor).unwrap();
    inv.add(floor, room).unwrap();

    assert!(matches!(
        inv.add(room, building),
        Err(DomainError::CyclicStructure(_))
    ));
    assert_eq!(inv.parent(building).unwrap(), None);
}

// ============================================================
// Discard / stale handles
// ============================================================

#[rstest]
fn given_attached_subtree_when_discarding_then_frees_nodes_and_detaches(
    room: (Inventory, NodeId),
) {
    let (mut inv, room) = room;
    let floor = inv.composite("Floor");
    inv.add(floor, room).unwrap();
    assert_eq!(inv.len(), 4);

    let freed = inv.discard(room).unwrap();

    assert_eq!(freed, 3);
    assert_eq!(inv.len(), 1);
    assert!(inv.children(floor).unwrap().is_empty());
    assert_eq!(inv.sum(floor).unwrap(), 0.0);
}

#[rstest]
fn given_discarded_handle_when_used_then_unknown_node(room: (Inventory, NodeId)) {
    let (mut inv, room) = room;
    inv.discard(room).unwrap();

    assert_eq!(inv.sum(room), Err(DomainError::UnknownNode(room)));
    assert!(inv.get(room).is_none());
    assert!(inv.is_empty());
}
