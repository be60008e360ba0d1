//! Structural invariants
//!
//! Children-sum property: every internal node's value equals the sum of its
//! children's values, an absent child counting as zero. Leaves and the
//! empty tree satisfy it trivially. A sum that overflows `T` matches no
//! value, so it counts as a violation.

use std::fmt::Debug;

use num_traits::{CheckedAdd, Zero};
use tracing::debug;

use crate::tree::{NodeId, Order, Tree};
use crate::{describe, TreeError};

/// True when every internal node equals the sum of its children
pub fn satisfies_children_sum<T>(tree: &Tree<T>) -> bool
where
    T: Copy + Zero + CheckedAdd + PartialEq,
{
    tree.root().map_or(true, |root| holds_at(tree, root))
}

fn holds_at<T>(tree: &Tree<T>, id: NodeId) -> bool
where
    T: Copy + Zero + CheckedAdd + PartialEq,
{
    let node = &tree[id];
    if node.is_leaf() {
        return true;
    }

    children_sum(tree, id) == Some(node.value)
        && node.left.map_or(true, |left| holds_at(tree, left))
        && node.right.map_or(true, |right| holds_at(tree, right))
}

/// First internal node (in preorder) that breaks the property
pub fn first_violation<T>(tree: &Tree<T>) -> Option<NodeId>
where
    T: Copy + Zero + CheckedAdd + PartialEq,
{
    tree.node_ids(Order::Pre)
        .into_iter()
        .find(|&id| !tree.is_leaf(id) && children_sum(tree, id) != Some(*tree.value(id)))
}

/// Rewrite values, keeping the shape, until the property holds
///
/// Top-down, a node whose children sum to less than its value pushes its
/// value into both children; bottom-up, every internal node then takes the
/// sum of its children. For non-negative values no value decreases.
///
/// Fails with `SumOverflow` when a sum leaves the range of `T`; the tree is
/// then partially rewritten.
pub fn enforce_children_sum<T>(tree: &mut Tree<T>) -> Result<(), TreeError>
where
    T: Copy + Zero + CheckedAdd + PartialOrd + Debug,
{
    if let Some(root) = tree.root() {
        enforce_at(tree, root)?;
        debug!(nodes = tree.len(), "children-sum property enforced");
    }
    Ok(())
}

fn enforce_at<T>(tree: &mut Tree<T>, id: NodeId) -> Result<(), TreeError>
where
    T: Copy + Zero + CheckedAdd + PartialOrd + Debug,
{
    let (left, right) = tree[id].children();
    if left.is_none() && right.is_none() {
        return Ok(());
    }

    let sum = checked_children_sum(tree, id)?;
    if sum >= tree[id].value {
        tree[id].value = sum;
    } else {
        let value = tree[id].value;
        for child in [left, right].into_iter().flatten() {
            tree[child].value = value;
        }
    }

    for child in [left, right].into_iter().flatten() {
        enforce_at(tree, child)?;
    }

    tree[id].value = checked_children_sum(tree, id)?;
    Ok(())
}

/// Sum of the children's values, absent children counting as zero;
/// `None` on overflow
fn children_sum<T>(tree: &Tree<T>, id: NodeId) -> Option<T>
where
    T: Copy + Zero + CheckedAdd,
{
    let value_of = |child: Option<NodeId>| child.map_or_else(T::zero, |c| *tree.value(c));
    let (left, right) = tree[id].children();
    value_of(left).checked_add(&value_of(right))
}

fn checked_children_sum<T>(tree: &Tree<T>, id: NodeId) -> Result<T, TreeError>
where
    T: Copy + Zero + CheckedAdd + Debug,
{
    children_sum(tree, id).ok_or_else(|| TreeError::SumOverflow {
        value: describe(tree.value(id)),
    })
}
