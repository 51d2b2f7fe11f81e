//! The sample office: five furnished rooms under one root.

use crate::domain::{DomainResult, Inventory, InventoryBuilder, NodeId};

pub const OFFICE: &str = "Office";
pub const RECEPTION: &str = "Reception";
pub const AUDIENCE_1: &str = "Audience 1";
pub const AUDIENCE_2: &str = "Audience 2";
pub const COMPUTER_AUDIENCE: &str = "Computer audience";
pub const DINING_ROOM: &str = "Dining room";

/// Build the office inventory. Returns the inventory and the office root.
pub fn office() -> DomainResult<(Inventory, NodeId)> {
    InventoryBuilder::new(OFFICE)
        .room(RECEPTION)
        .item("JournalTable", 2500.0)
        .item("SecretaryTable", 4000.0)
        .item("Sofa", 2000.0)
        .item("Computer", 4000.0)
        .item("WaterCooler", 3500.0)
        .close()
        .room(AUDIENCE_1)
        .items("Table", 3000.0, 10)
        .item("Blackboard", 2000.0)
        .item("Teacher's table", 4000.0)
        .item("Computer", 4000.0)
        .close()
        .room(AUDIENCE_2)
        .items("Table", 3000.0, 20)
        .item("Blackboard", 2000.0)
        .item("Sofa", 2000.0)
        .close()
        .room(COMPUTER_AUDIENCE)
        .items("Computer table", 4000.0, 10)
        .item("Socket", 100.0)
        .item("Blackboard", 2000.0)
        .close()
        .room(DINING_ROOM)
        .item("CoffeeAutomat", 14000.0)
        .item("Table", 3000.0)
        .items("Chair", 900.0, 4)
        .item("Fridge", 6000.0)
        .item("Sink", 3400.0)
        .close()
        .build()
}
