//! Fluent builder for room hierarchies.

use tracing::{debug, instrument};

use crate::domain::arena::Inventory;
use crate::domain::entities::NodeId;
use crate::domain::error::{DomainError, DomainResult};

/// Constructs a hierarchy top-down with an explicit stack of open rooms.
///
/// ```
/// use furnish::domain::InventoryBuilder;
///
/// let (inventory, office) = InventoryBuilder::new("Office")
///     .room("Reception")
///     .item("Sofa", 2000.0)
///     .items("Chair", 500.0, 4)
///     .close()
///     .build()
///     .unwrap();
/// assert_eq!(inventory.sum(office).unwrap(), 4000.0);
/// ```
pub struct InventoryBuilder {
    inventory: Inventory,
    root: NodeId,
    open: Vec<NodeId>,
    error: Option<DomainError>,
    built: bool,
}

impl InventoryBuilder {
    pub fn new(root_name: &str) -> Self {
        let mut inventory = Inventory::new();
        let root = inventory.composite(root_name);
        Self {
            inventory,
            root,
            open: vec![root],
            error: None,
            built: false,
        }
    }

    fn current(&self) -> NodeId {
        self.open.last().copied().unwrap_or(self.root)
    }

    fn attach(&mut self, child: NodeId) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.inventory.add(self.current(), child) {
            self.error = Some(e);
        }
    }

    /// Open a new room under the currently open one.
    pub fn room(&mut self, name: &str) -> &mut Self {
        let room = self.inventory.composite(name);
        self.attach(room);
        self.open.push(room);
        self
    }

    pub fn item(&mut self, name: &str, price: f64) -> &mut Self {
        let item = self.inventory.leaf(name, price);
        self.attach(item);
        self
    }

    /// Add `count` separate items sharing a name and price.
    pub fn items(&mut self, name: &str, price: f64, count: usize) -> &mut Self {
        for _ in 0..count {
            self.item(name, price);
        }
        self
    }

    /// Close the currently open room.
    pub fn close(&mut self) -> &mut Self {
        if self.open.len() <= 1 {
            if self.error.is_none() {
                self.error = Some(DomainError::Builder("close without an open room".into()));
            }
        } else {
            self.open.pop();
        }
        self
    }

    /// Finish construction, returning the inventory and its root.
    ///
    /// The inventory is handed out once; later calls fail.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&mut self) -> DomainResult<(Inventory, NodeId)> {
        if self.built {
            return Err(DomainError::Builder("inventory already built".into()));
        }
        if let Some(e) = &self.error {
            return Err(e.clone());
        }
        if self.open.len() > 1 {
            let name = self.inventory.name(self.current())?.to_string();
            return Err(DomainError::Builder(format!("room '{name}' was never closed")));
        }
        let inventory = std::mem::take(&mut self.inventory);
        self.built = true;
        debug!("built inventory with {} nodes", inventory.len());
        Ok((inventory, self.root))
    }
}
