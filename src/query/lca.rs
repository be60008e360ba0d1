//! Lowest common ancestor and path queries

use std::fmt::Debug;

use tracing::trace;

use super::{locate, ParentMap};
use crate::tree::{NodeId, Tree};
use crate::{describe, TreeError};

/// Deepest node that has both `a` and `b` in its subtree
///
/// A node counts as its own ancestor, so `lca(x, descendant_of_x) == x`.
/// Both targets are checked for membership before the descent: the plain
/// recursion would otherwise return the one node it did find.
pub fn lowest_common_ancestor<T>(tree: &Tree<T>, a: &T, b: &T) -> Result<NodeId, TreeError>
where
    T: PartialEq + Debug,
{
    let first = locate(tree, a)?;
    let second = locate(tree, b)?;

    let found = descend(tree, tree.root(), first, second).ok_or_else(|| {
        TreeError::NodeNotFound {
            value: describe(a),
        }
    })?;
    trace!(lca = %found, "lowest common ancestor resolved");
    Ok(found)
}

/// Returns `a` or `b` if the subtree holds exactly one of them, their LCA
/// if it holds both, and `None` if it holds neither
fn descend<T>(tree: &Tree<T>, at: Option<NodeId>, a: NodeId, b: NodeId) -> Option<NodeId> {
    let id = at?;
    if id == a || id == b {
        return Some(id);
    }

    let left = descend(tree, tree.left(id), a, b);
    let right = descend(tree, tree.right(id), a, b);

    match (left, right) {
        (Some(_), Some(_)) => Some(id),
        (found, None) | (None, found) => found,
    }
}

/// Values on the path from the root down to `target`, root first
pub fn root_to_node_path<T>(tree: &Tree<T>, target: &T) -> Result<Vec<T>, TreeError>
where
    T: Clone + PartialEq + Debug,
{
    let id = locate(tree, target)?;
    let parents = ParentMap::build(tree);

    let mut path: Vec<T> = parents
        .ancestors(id)
        .map(|id| tree.value(id).clone())
        .collect();
    path.reverse();
    Ok(path)
}

/// Number of parent/child hops between `a` and `b`
pub fn distance_between<T>(tree: &Tree<T>, a: &T, b: &T) -> Result<usize, TreeError>
where
    T: PartialEq + Debug,
{
    let first = locate(tree, a)?;
    let second = locate(tree, b)?;

    ParentMap::build(tree)
        .hops_between(first, second)
        .ok_or_else(|| TreeError::NodeNotFound {
            value: describe(b),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::deserialize;

    fn sample() -> Tree<i32> {
        // 1(2(4, 5), 3)
        deserialize("1,2,4,N,N,5,N,N,3,N,N").unwrap()
    }

    fn lca_value(tree: &Tree<i32>, a: i32, b: i32) -> i32 {
        *tree.value(lowest_common_ancestor(tree, &a, &b).unwrap())
    }

    #[test]
    fn test_siblings_and_cousins() {
        let tree = sample();
        assert_eq!(lca_value(&tree, 4, 5), 2);
        assert_eq!(lca_value(&tree, 4, 3), 1);
        assert_eq!(lca_value(&tree, 5, 3), 1);
    }

    #[test]
    fn test_node_is_its_own_ancestor() {
        let tree = sample();
        assert_eq!(lca_value(&tree, 2, 5), 2);
        assert_eq!(lca_value(&tree, 4, 4), 4);
        assert_eq!(lca_value(&tree, 1, 3), 1);
    }

    #[test]
    fn test_missing_target() {
        let tree = sample();
        let err = lowest_common_ancestor(&tree, &4, &99).unwrap_err();
        assert_eq!(
            err,
            TreeError::NodeNotFound {
                value: "99".to_string()
            }
        );

        let empty: Tree<i32> = Tree::new();
        assert!(lowest_common_ancestor(&empty, &1, &1).is_err());
    }

    #[test]
    fn test_root_to_node_path() {
        let tree = sample();
        assert_eq!(root_to_node_path(&tree, &5).unwrap(), vec![1, 2, 5]);
        assert_eq!(root_to_node_path(&tree, &1).unwrap(), vec![1]);
        assert!(root_to_node_path(&tree, &8).is_err());
    }

    #[test]
    fn test_distance_between() {
        let tree = sample();
        assert_eq!(distance_between(&tree, &4, &5).unwrap(), 2);
        assert_eq!(distance_between(&tree, &4, &3).unwrap(), 3);
        assert_eq!(distance_between(&tree, &1, &1).unwrap(), 0);
    }
}
