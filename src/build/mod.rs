//! Tree reconstruction from two traversal orders
//!
//! Preorder (or postorder) names the subtree roots; inorder splits each
//! subtree into left and right parts. A value→index map over the inorder
//! sequence is built once, so every root is located in O(1) and the whole
//! build is O(n) even for skewed trees.
//!
//! Values must be pairwise distinct. Length, duplicate and value-set
//! checks run before any node is allocated.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use bitvec::prelude::*;
use tracing::debug;

use crate::tree::{NodeId, Tree};
use crate::{describe, PairDefect, TreeError};

/// Where the subtree root sits in its segment of the non-inorder sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rooting {
    /// First element (preorder)
    Preorder,

    /// Last element (postorder)
    Postorder,
}

impl Rooting {
    fn name(self) -> &'static str {
        match self {
            Rooting::Preorder => "preorder",
            Rooting::Postorder => "postorder",
        }
    }
}

/// Rebuild the unique tree with the given preorder and inorder sequences
///
/// Empty sequences give the empty tree.
pub fn build_from_preorder_inorder<T>(preorder: &[T], inorder: &[T]) -> Result<Tree<T>, TreeError>
where
    T: Clone + Eq + Hash + Debug,
{
    Reconstruction::new(preorder, inorder, Rooting::Preorder)?.run()
}

/// Rebuild the unique tree with the given postorder and inorder sequences
///
/// Empty sequences give the empty tree.
pub fn build_from_postorder_inorder<T>(
    postorder: &[T],
    inorder: &[T],
) -> Result<Tree<T>, TreeError>
where
    T: Clone + Eq + Hash + Debug,
{
    Reconstruction::new(postorder, inorder, Rooting::Postorder)?.run()
}

/// Validated input plus the tree under construction
struct Reconstruction<'a, T> {
    /// Preorder or postorder sequence
    order: &'a [T],

    rooting: Rooting,

    /// Value → position in the inorder sequence
    positions: HashMap<&'a T, usize>,

    tree: Tree<T>,
}

impl<'a, T> Reconstruction<'a, T>
where
    T: Clone + Eq + Hash + Debug,
{
    fn new(order: &'a [T], inorder: &'a [T], rooting: Rooting) -> Result<Self, TreeError> {
        if order.len() != inorder.len() {
            return Err(PairDefect::LengthMismatch {
                order: rooting.name(),
                order_len: order.len(),
                inorder_len: inorder.len(),
            }
            .into());
        }

        let mut positions = HashMap::with_capacity(inorder.len());
        for (idx, value) in inorder.iter().enumerate() {
            if positions.insert(value, idx).is_some() {
                return Err(PairDefect::DuplicateValue {
                    value: describe(value),
                    sequence: "inorder",
                }
                .into());
            }
        }

        // Distinct inorder + injective mapping of `order` into it
        // means both sequences hold the same value set.
        let mut seen = bitvec![0; inorder.len()];
        for value in order {
            let idx = *positions.get(value).ok_or_else(|| PairDefect::MissingValue {
                value: describe(value),
            })?;
            if seen[idx] {
                return Err(PairDefect::DuplicateValue {
                    value: describe(value),
                    sequence: rooting.name(),
                }
                .into());
            }
            seen.set(idx, true);
        }

        debug!(len = order.len(), rooting = rooting.name(), "traversal pair validated");

        Ok(Self {
            order,
            rooting,
            positions,
            tree: Tree::with_capacity(order.len()),
        })
    }

    fn run(mut self) -> Result<Tree<T>, TreeError> {
        let root = self.subtree(0, 0, self.order.len())?;
        self.tree.set_root(root);
        Ok(self.tree)
    }

    /// Build the subtree covering `len` values starting at `order_start`
    /// in the rooting sequence and at `in_start` in the inorder sequence
    fn subtree(
        &mut self,
        order_start: usize,
        in_start: usize,
        len: usize,
    ) -> Result<Option<NodeId>, TreeError> {
        if len == 0 {
            return Ok(None);
        }

        // Left part of the rooting segment begins right after a preorder
        // root, or at the segment start when the root is the last element.
        let (root_at, left_at) = match self.rooting {
            Rooting::Preorder => (order_start, order_start + 1),
            Rooting::Postorder => (order_start + len - 1, order_start),
        };

        let order = self.order;
        let value = &order[root_at];
        let pos = self
            .positions
            .get(value)
            .copied()
            .filter(|&pos| pos >= in_start && pos < in_start + len)
            .ok_or_else(|| PairDefect::Inconsistent {
                value: describe(value),
            })?;

        let left_len = pos - in_start;
        let right_len = len - 1 - left_len;

        let id = self.tree.add_node(value.clone());
        let left = self.subtree(left_at, in_start, left_len)?;
        let right = self.subtree(left_at + left_len, pos + 1, right_len)?;
        self.tree.set_left(id, left);
        self.tree.set_right(id, right);

        Ok(Some(id))
    }
}
