//! Arena-backed composite hierarchy.
//!
//! The [`Inventory`] owns every node. Composites refer to their children by
//! [`NodeId`] handles, and every node has at most one parent. Detached nodes
//! stay in the arena until [`Inventory::discard`] frees them or the
//! inventory itself is dropped.

use std::collections::HashSet;

use generational_arena::Arena;
use tracing::{debug, instrument, warn};

use crate::domain::entities::{Node, NodeId};
use crate::domain::error::{DomainError, DomainResult};

/// Arena storage for a forest of leaf and composite nodes.
#[derive(Debug)]
pub struct Inventory {
    arena: Arena<Node>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Create a detached leaf with a fixed price.
    #[instrument(level = "trace", skip(self))]
    pub fn leaf(&mut self, name: &str, price: f64) -> NodeId {
        NodeId(self.arena.insert(Node::leaf(name, price)))
    }

    /// Create a detached, empty composite.
    #[instrument(level = "trace", skip(self))]
    pub fn composite(&mut self, name: &str) -> NodeId {
        NodeId(self.arena.insert(Node::composite(name)))
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id.0)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id.0)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    fn node(&self, id: NodeId) -> DomainResult<&Node> {
        self.arena.get(id.0).ok_or(DomainError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> DomainResult<&mut Node> {
        self.arena.get_mut(id.0).ok_or(DomainError::UnknownNode(id))
    }

    pub fn name(&self, id: NodeId) -> DomainResult<&str> {
        Ok(&self.node(id)?.name)
    }

    pub fn parent(&self, id: NodeId) -> DomainResult<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> DomainResult<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// Rejects leaves as parents, children that already have a parent, and
    /// any attachment that would make a node its own ancestor.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> DomainResult<()> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;

        if parent_node.is_leaf() {
            warn!(parent = %parent_node.name, "add rejected: parent is a leaf");
            return Err(DomainError::InvalidOperation {
                name: parent_node.name.clone(),
                operation: "add",
            });
        }
        if let Some(owner) = child_node.parent {
            warn!(child = %child_node.name, "add rejected: child already attached");
            return Err(DomainError::AlreadyAttached {
                parent: self.node(owner)?.name.clone(),
                child: child_node.name.clone(),
            });
        }
        if self.is_ancestor_or_self(child, parent)? {
            warn!(child = %child_node.name, "add rejected: would create a cycle");
            return Err(DomainError::CyclicStructure(child_node.name.clone()));
        }

        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        debug!("attached {} to {}", child, parent);
        Ok(())
    }

    /// Detach `child` from `parent`. The child stays alive and can be
    /// attached again.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, parent: NodeId, child: NodeId) -> DomainResult<()> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;

        if parent_node.is_leaf() {
            warn!(parent = %parent_node.name, "remove rejected: parent is a leaf");
            return Err(DomainError::InvalidOperation {
                name: parent_node.name.clone(),
                operation: "remove",
            });
        }
        let Some(pos) = parent_node.children.iter().position(|&c| c == child) else {
            return Err(DomainError::NotFound {
                parent: parent_node.name.clone(),
                child: child_node.name.clone(),
            });
        };

        self.node_mut(parent)?.children.remove(pos);
        self.node_mut(child)?.parent = None;
        debug!("detached {} from {}", child, parent);
        Ok(())
    }

    /// Total price of the subtree rooted at `id`.
    ///
    /// Recomputed from zero on every call, so repeated calls return the same
    /// value as long as the subtree is unchanged. Walks the subtree with an
    /// explicit stack, so nesting depth is bounded only by memory.
    #[instrument(level = "debug", skip(self))]
    pub fn sum(&self, id: NodeId) -> DomainResult<f64> {
        let mut total = 0.0;
        let mut entered: HashSet<NodeId> = HashSet::new();
        // (node, children already pushed)
        let mut stack = vec![(id, false)];

        while let Some((current, expanded)) = stack.pop() {
            if expanded {
                entered.remove(&current);
                continue;
            }
            let node = self.node(current)?;
            if let Some(price) = node.price() {
                total += price;
                continue;
            }
            // a composite still on the current path is its own ancestor
            if !entered.insert(current) {
                return Err(DomainError::CyclicStructure(node.name.clone()));
            }
            stack.push((current, true));
            // Push children in reverse order for left-to-right traversal
            for &child in node.children.iter().rev() {
                stack.push((child, false));
            }
        }
        Ok(total)
    }

    /// Detach `id` from its parent and free its whole subtree.
    ///
    /// Returns the number of nodes freed.
    #[instrument(level = "debug", skip(self))]
    pub fn discard(&mut self, id: NodeId) -> DomainResult<usize> {
        if let Some(parent) = self.node(id)?.parent {
            self.remove(parent, id)?;
        }
        let doomed: Vec<NodeId> = self.iter_subtree(id).map(|(idx, _)| idx).collect();
        for idx in &doomed {
            self.arena.remove(idx.0);
        }
        debug!("discarded {} nodes", doomed.len());
        Ok(doomed.len())
    }

    /// Pre-order, left-to-right traversal of the subtree rooted at `id`.
    /// Yields nothing for an unknown handle.
    pub fn iter_subtree(&self, id: NodeId) -> SubtreeIterator<'_> {
        SubtreeIterator::new(self, id)
    }

    /// Leaves reachable from `id`, in traversal order.
    #[instrument(level = "trace", skip(self))]
    pub fn leaves(&self, id: NodeId) -> Vec<NodeId> {
        self.iter_subtree(id)
            .filter(|(_, node)| node.is_leaf())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Whether `candidate` is `id` itself or one of its ancestors.
    ///
    /// Parent chains are acyclic because `add` is the only way to set a
    /// parent, so the walk terminates at a detached node.
    fn is_ancestor_or_self(&self, candidate: NodeId, id: NodeId) -> DomainResult<bool> {
        let mut current = Some(id);
        while let Some(idx) = current {
            if idx == candidate {
                return Ok(true);
            }
            current = self.node(idx)?.parent;
        }
        Ok(false)
    }
}

pub struct SubtreeIterator<'a> {
    inventory: &'a Inventory,
    stack: Vec<NodeId>,
}

impl<'a> SubtreeIterator<'a> {
    fn new(inventory: &'a Inventory, start: NodeId) -> Self {
        let mut stack = Vec::new();
        if inventory.contains(start) {
            stack.push(start);
        }
        Self { inventory, stack }
    }
}

impl<'a> Iterator for SubtreeIterator<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.inventory.get(current) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current, node));
            }
        }
        None
    }
}
