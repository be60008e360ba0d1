//! Flatten to a right-leaning chain
//!
//! Post-order: both subtrees are flattened first, so the left subtree is
//! already a chain whose tail can take over the original right subtree.
//! No node is allocated; only links move.

use tracing::debug;

use crate::tree::{NodeId, Tree};

/// Rewrite `tree` so every left link is empty and following right links
/// from the root visits the nodes in their original preorder
///
/// Applying it to an already flat tree changes nothing.
pub fn flatten_to_right_chain<T>(tree: &mut Tree<T>) {
    if let Some(root) = tree.root() {
        flatten_subtree(tree, root);
        debug!(nodes = tree.len(), "tree flattened to right chain");
    }
}

/// Flatten the subtree at `id` and return the last node of its chain
fn flatten_subtree<T>(tree: &mut Tree<T>, id: NodeId) -> NodeId {
    let left_tail = tree.left(id).map(|left| flatten_subtree(tree, left));
    let right_tail = tree.right(id).map(|right| flatten_subtree(tree, right));

    if let (Some(left), Some(tail)) = (tree.take_left(id), left_tail) {
        let right = tree.take_right(id);
        tree.set_right(tail, right);
        tree.set_right(id, Some(left));
    }

    right_tail.or(left_tail).unwrap_or(id)
}

/// True when no reachable node has a left child
pub fn is_right_chain<T>(tree: &Tree<T>) -> bool {
    let mut cursor = tree.root();
    while let Some(id) = cursor {
        if tree.left(id).is_some() {
            return false;
        }
        cursor = tree.right(id);
    }
    true
}
