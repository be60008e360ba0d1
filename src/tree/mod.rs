//! Arena-backed binary tree
//!
//! All nodes live in one `Vec` owned by the `Tree`; links are `NodeId`s.
//! Each node is reachable from at most one parent in the live structure.
//! Parents are never stored on the node: queries that need upward edges
//! compute them on demand (see `query::ParentMap`).
//!
//! Detached subtrees stay in the arena until the tree is dropped. They are
//! simply unreachable from the root.

mod node;
mod traversal;

pub use node::{Node, NodeId};
pub use traversal::Order;

use std::ops::{Index, IndexMut};

/// Binary tree (possibly empty)
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Tree<T> {
    /// Node storage, indexed by `NodeId`
    nodes: Vec<Node<T>>,

    /// Root node (`None` = empty tree)
    root: Option<NodeId>,
}

impl<T> Tree<T> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Create an empty tree with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Single-node tree
    pub fn leaf(value: T) -> Self {
        let mut tree = Self::with_capacity(1);
        let root = tree.add_node(value);
        tree.root = Some(root);
        tree
    }

    /// Allocate a detached leaf and return its id
    ///
    /// Never fails. The node is unreachable until attached with
    /// `set_root`, `set_left` or `set_right`.
    pub fn add_node(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value));
        id
    }

    /// Root id
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Replace the root, returning the previous one
    pub fn set_root(&mut self, root: Option<NodeId>) -> Option<NodeId> {
        std::mem::replace(&mut self.root, root)
    }

    /// True when there is no root
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of allocated nodes, reachable or not
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Borrow a node, `None` for ids from another arena
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    /// Value stored at `id`
    #[inline]
    pub fn value(&self, id: NodeId) -> &T {
        &self[id].value
    }

    /// Left child of `id`
    #[inline]
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self[id].left
    }

    /// Right child of `id`
    #[inline]
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self[id].right
    }

    /// True when `id` has no children
    #[inline]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self[id].is_leaf()
    }

    /// Attach `child` as the left child of `parent`, returning the old one
    ///
    /// Attaching a node that already has a parent is a caller error and
    /// is not checked here.
    pub fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) -> Option<NodeId> {
        std::mem::replace(&mut self[parent].left, child)
    }

    /// Attach `child` as the right child of `parent`, returning the old one
    pub fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) -> Option<NodeId> {
        std::mem::replace(&mut self[parent].right, child)
    }

    /// Detach and return the left child of `id`
    pub fn take_left(&mut self, id: NodeId) -> Option<NodeId> {
        self[id].left.take()
    }

    /// Detach and return the right child of `id`
    pub fn take_right(&mut self, id: NodeId) -> Option<NodeId> {
        self[id].right.take()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }
}

impl<T> IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }
}

/// Structural equality: same shape, same values at matching positions
///
/// Arena layout and unreachable nodes are ignored.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self.root, other.root)];

        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    let (lhs, rhs) = (&self[a], &other[b]);
                    if lhs.value != rhs.value {
                        return false;
                    }
                    pending.push((lhs.left, rhs.left));
                    pending.push((lhs.right, rhs.right));
                }
                _ => return false,
            }
        }

        true
    }
}

impl<T: Eq> Eq for Tree<T> {}
