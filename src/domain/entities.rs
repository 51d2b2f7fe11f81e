//! Domain entities: node handles and node payloads

use std::fmt;

use generational_arena::Index;

/// Handle to a node stored in an [`Inventory`](crate::domain::Inventory).
///
/// Identity of a node is its handle, not its name: two items called "Table"
/// are different nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) Index);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{slot}.{generation}")
    }
}

/// The two node variants of the hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Priced item; the price never changes after construction
    Leaf { price: f64 },
    /// Room holding an ordered sequence of children
    Composite,
}

/// A member of the hierarchy.
#[derive(Debug, Clone)]
pub struct Node {
    /// Label only, not unique
    pub name: String,
    pub kind: NodeKind,
    /// Owning composite, None while detached
    pub parent: Option<NodeId>,
    /// Children in insertion order, always empty for leaves
    pub children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn leaf(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Leaf { price },
            parent: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn composite(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Composite,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.kind, NodeKind::Composite)
    }

    /// Price of a leaf, None for composites.
    pub fn price(&self) -> Option<f64> {
        match self.kind {
            NodeKind::Leaf { price } => Some(price),
            NodeKind::Composite => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
