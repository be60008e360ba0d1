//! Arena node representation
//!
//! Node = value + optional left/right links into the owning `Tree` arena.
//! Links are `NodeId`s, never back-pointers: a node knows its children
//! but not its parent.

use std::fmt;

/// Stable identity of a node inside its `Tree` arena
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Position of the node in the arena
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tree node: a value and up to two children
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// Payload
    pub value: T,

    /// Left child (if any)
    pub left: Option<NodeId>,

    /// Right child (if any)
    pub right: Option<NodeId>,
}

impl<T> Node<T> {
    /// Create a leaf
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Leaf = no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Children as a pair, left first
    #[inline]
    pub fn children(&self) -> (Option<NodeId>, Option<NodeId>) {
        (self.left, self.right)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_leaf() {
        let node = Node::new(7);
        assert!(node.is_leaf());
        assert_eq!(node.children(), (None, None));
        assert_eq!(node.to_string(), "(7)");
    }

    #[test]
    fn test_node_with_one_child_is_not_leaf() {
        let mut node = Node::new(1);
        node.right = Some(NodeId(3));
        assert!(!node.is_leaf());
        assert_eq!(NodeId(3).index(), 3);
    }
}
