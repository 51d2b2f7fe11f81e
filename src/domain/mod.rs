//! Domain layer: the composite hierarchy and its rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;

pub use arena::{Inventory, SubtreeIterator};
pub use builder::InventoryBuilder;
pub use entities::{Node, NodeId, NodeKind};
pub use error::{DomainError, DomainResult};
