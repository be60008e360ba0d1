//! Ancestor and distance queries
//!
//! Every query names its targets by value, resolves them to `NodeId`s
//! first (failing with `NodeNotFound`), and only then runs the algorithm.
//! Queries borrow the tree immutably and build their own scratch state,
//! so independent queries never share a parent map or visited set.

mod lca;
mod parent_map;
mod propagation;

pub use lca::{distance_between, lowest_common_ancestor, root_to_node_path};
pub use parent_map::{Ancestors, ParentMap};
pub use propagation::{minimum_burn_time, nodes_at_distance, Wave};

use std::fmt::Debug;

use crate::tree::{NodeId, Tree};
use crate::{describe, TreeError};

/// Resolve a target value to its node
fn locate<T: PartialEq + Debug>(tree: &Tree<T>, value: &T) -> Result<NodeId, TreeError> {
    tree.find(value).ok_or_else(|| TreeError::NodeNotFound {
        value: describe(value),
    })
}
