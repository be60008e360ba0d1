//! Morris (threaded) traversal
//!
//! O(1) extra space: instead of a stack, the empty right link of each
//! node's inorder predecessor is pointed back at the node ("thread") on the
//! way down, then cleared on the second arrival. The predecessor search
//! stops at either an empty right link (first arrival) or the thread
//! (second arrival).
//!
//! While a walk is in progress the tree holds threads and is not a valid
//! tree; `&mut Tree` keeps every other reader out until it returns. Every
//! thread is removed before return.

use tracing::trace;

use crate::tree::{NodeId, Tree};

/// Moment at which a node with a left subtree is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emit {
    /// When its thread is created (first arrival)
    OnThread,

    /// When its thread is removed (second arrival)
    OnUnthread,
}

/// Inorder values, computed without a stack
///
/// The tree's shape is identical before and after the call.
pub fn threaded_inorder<T: Clone>(tree: &mut Tree<T>) -> Vec<T> {
    walk(tree, Emit::OnUnthread)
}

/// Preorder values, computed without a stack
///
/// The tree's shape is identical before and after the call.
pub fn threaded_preorder<T: Clone>(tree: &mut Tree<T>) -> Vec<T> {
    walk(tree, Emit::OnThread)
}

fn walk<T: Clone>(tree: &mut Tree<T>, emit: Emit) -> Vec<T> {
    let mut out = Vec::new();
    let mut threads = 0usize;
    let mut current = tree.root();

    while let Some(id) = current {
        let Some(left) = tree.left(id) else {
            out.push(tree.value(id).clone());
            current = tree.right(id);
            continue;
        };

        let pred = predecessor(tree, left, id);
        if tree.right(pred).is_none() {
            tree.set_right(pred, Some(id));
            threads += 1;
            if emit == Emit::OnThread {
                out.push(tree.value(id).clone());
            }
            current = Some(left);
        } else {
            tree.set_right(pred, None);
            threads = threads.saturating_sub(1);
            if emit == Emit::OnUnthread {
                out.push(tree.value(id).clone());
            }
            current = tree.right(id);
        }
    }

    debug_assert_eq!(threads, 0, "threaded walk left threads behind");
    trace!(visited = out.len(), ?emit, "threaded walk complete");
    out
}

/// Rightmost node of `left`, stopping early at a thread back to `id`
fn predecessor<T>(tree: &Tree<T>, left: NodeId, id: NodeId) -> NodeId {
    let mut pred = left;
    while let Some(next) = tree.right(pred) {
        if next == id {
            break;
        }
        pred = next;
    }
    pred
}
