//! Tests for InventoryBuilder

use furnish::domain::{DomainError, InventoryBuilder, NodeKind};

#[test]
fn given_repeated_items_when_building_then_each_is_a_separate_leaf() {
    let (inv, root) = InventoryBuilder::new("Classroom")
        .items("Table", 3000.0, 10)
        .build()
        .unwrap();

    let children = inv.children(root).unwrap();
    assert_eq!(children.len(), 10);
    for &child in children {
        let node = inv.get(child).unwrap();
        assert_eq!(node.kind, NodeKind::Leaf { price: 3000.0 });
        assert_eq!(node.parent, Some(root));
    }
    assert_eq!(inv.sum(root).unwrap(), 30000.0);
}

#[test]
fn given_zero_count_when_adding_items_then_adds_nothing() {
    let (inv, root) = InventoryBuilder::new("Empty")
        .items("Chair", 900.0, 0)
        .build()
        .unwrap();
    assert!(inv.children(root).unwrap().is_empty());
    assert_eq!(inv.sum(root).unwrap(), 0.0);
}

#[test]
fn given_several_errors_when_building_then_reports_first() {
    let result = InventoryBuilder::new("House")
        .close()
        .room("Attic")
        .build();
    assert_eq!(
        result.err(),
        Some(DomainError::Builder("close without an open room".into()))
    );
}

#[test]
fn given_rooms_with_same_name_when_building_then_both_exist() {
    let (inv, root) = InventoryBuilder::new("Office")
        .room("Storage")
        .item("Box", 10.0)
        .close()
        .room("Storage")
        .item("Box", 20.0)
        .close()
        .build()
        .unwrap();

    let rooms = inv.children(root).unwrap();
    assert_eq!(rooms.len(), 2);
    assert_ne!(rooms[0], rooms[1]);
    assert_eq!(inv.sum(rooms[0]).unwrap(), 10.0);
    assert_eq!(inv.sum(rooms[1]).unwrap(), 20.0);
}
