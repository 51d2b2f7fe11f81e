//! furnish: a composite hierarchy of rooms and priced items.
//!
//! Rooms ([`NodeKind::Composite`](domain::NodeKind)) hold items and other
//! rooms; items ([`NodeKind::Leaf`](domain::NodeKind)) carry a fixed price.
//! [`Inventory::sum`](domain::Inventory::sum) totals any subtree.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
