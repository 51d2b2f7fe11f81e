//! Tally service: totals for the whole inventory and for individual rooms

use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{Inventory, NodeId};

/// Total of one room directly under the root.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomTotal {
    pub name: String,
    /// Number of leaf items in the room, nested ones included
    pub items: usize,
    pub total: f64,
}

/// Computes totals over an owned inventory.
#[derive(Debug)]
pub struct TallyService {
    inventory: Inventory,
    root: NodeId,
}

impl TallyService {
    pub fn new(inventory: Inventory, root: NodeId) -> Self {
        Self { inventory, root }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Sum over the whole inventory.
    #[instrument(level = "debug", skip(self))]
    pub fn total(&self) -> ApplicationResult<f64> {
        let total = self.inventory.sum(self.root)?;
        debug!(total, "root total");
        Ok(total)
    }

    /// Sum of the first room under the root named `name`.
    #[instrument(level = "debug", skip(self))]
    pub fn room_total(&self, name: &str) -> ApplicationResult<f64> {
        let room = self.find_room(name)?;
        Ok(self.inventory.sum(room)?)
    }

    /// Totals of all rooms under the root, in insertion order.
    ///
    /// Items lying directly under the root are not rooms and are skipped,
    /// though they still count towards [`total`](Self::total).
    #[instrument(level = "debug", skip(self))]
    pub fn rooms(&self) -> ApplicationResult<Vec<RoomTotal>> {
        self.room_ids()?
            .map(|room| {
                Ok::<_, ApplicationError>(RoomTotal {
                    name: self.inventory.name(room)?.to_string(),
                    items: self.inventory.leaves(room).len(),
                    total: self.inventory.sum(room)?,
                })
            })
            .collect()
    }

    /// Composite children of the root.
    fn room_ids(&self) -> ApplicationResult<impl Iterator<Item = NodeId> + '_> {
        Ok(self
            .inventory
            .children(self.root)?
            .iter()
            .copied()
            .filter(move |&id| self.inventory.get(id).is_some_and(|node| node.is_composite())))
    }

    fn find_room(&self, name: &str) -> ApplicationResult<NodeId> {
        self.room_ids()?
            .find(|&room| self.inventory.get(room).is_some_and(|node| node.name == name))
            .ok_or_else(|| ApplicationError::UnknownRoom(name.to_string()))
    }
}

/// Format an amount with a fixed number of decimals.
pub fn format_amount(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_zero_precision_when_formatting_then_prints_integer() {
        assert_eq!(format_amount(4250.0, 0), "4250");
    }

    #[test]
    fn given_precision_when_formatting_then_pads_decimals() {
        assert_eq!(format_amount(100.5, 2), "100.50");
    }
}
