//! Ephemeral reverse-edge index
//!
//! Built by one breadth-first pass; lives for a single query. Nodes stay
//! free of back-links, so upward moves always go through this map.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::tree::{NodeId, Tree};

/// Child → parent map over the nodes reachable from the root
///
/// The root maps to `None`.
#[derive(Debug, Clone, Default)]
pub struct ParentMap {
    parents: HashMap<NodeId, Option<NodeId>>,
}

impl ParentMap {
    /// Index every reachable node of `tree`
    pub fn build<T>(tree: &Tree<T>) -> Self {
        let mut parents = HashMap::with_capacity(tree.arena_len());
        let mut queue = VecDeque::new();

        if let Some(root) = tree.root() {
            parents.insert(root, None);
            queue.push_back(root);
        }

        while let Some(id) = queue.pop_front() {
            let node = &tree[id];
            for child in [node.left, node.right].into_iter().flatten() {
                parents.insert(child, Some(id));
                queue.push_back(child);
            }
        }

        Self { parents }
    }

    /// `Some(parent)` for an indexed node (`Some(None)` for the root),
    /// `None` for a node outside the tree
    pub fn get(&self, id: NodeId) -> Option<Option<NodeId>> {
        self.parents.get(&id).copied()
    }

    /// Parent of `id`; `None` for the root and for unknown nodes
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).flatten()
    }

    /// True when `id` is reachable from the root
    pub fn contains(&self, id: NodeId) -> bool {
        self.parents.contains_key(&id)
    }

    /// Number of indexed nodes
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// True for the empty tree
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// `id`, its parent, grandparent, ... up to the root
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            map: self,
            next: self.contains(id).then_some(id),
        }
    }

    /// Nodes one hop from `id`: parent, left child, right child
    pub fn neighbours<T>(&self, tree: &Tree<T>, id: NodeId) -> [Option<NodeId>; 3] {
        let node = &tree[id];
        [self.parent(id), node.left, node.right]
    }

    /// Number of edges from the root down to `id`
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.contains(id).then(|| self.ancestors(id).count() - 1)
    }

    /// Deepest node whose subtree holds both `a` and `b`, by upward walks
    pub fn common_ancestor(&self, a: NodeId, b: NodeId) -> Option<NodeId> {
        let seen: HashSet<NodeId> = self.ancestors(a).collect();
        self.ancestors(b).find(|id| seen.contains(id))
    }

    /// Edge count of the path between `a` and `b`
    pub fn hops_between(&self, a: NodeId, b: NodeId) -> Option<usize> {
        let seen: HashMap<NodeId, usize> = self
            .ancestors(a)
            .enumerate()
            .map(|(hops, id)| (id, hops))
            .collect();
        self.ancestors(b)
            .enumerate()
            .find_map(|(up_b, id)| seen.get(&id).map(|up_a| up_a + up_b))
    }
}

/// Upward walk produced by `ParentMap::ancestors`
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    map: &'a ParentMap,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.map.parent(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::deserialize;

    fn sample() -> Tree<i32> {
        // 1(2(4, 5), 3)
        deserialize("1,2,4,N,N,5,N,N,3,N,N").unwrap()
    }

    #[test]
    fn test_root_has_no_parent() {
        let tree = sample();
        let map = ParentMap::build(&tree);
        let root = tree.root().unwrap();

        assert_eq!(map.len(), 5);
        assert_eq!(map.get(root), Some(None));
        assert_eq!(map.parent(root), None);
        assert_eq!(map.depth(root), Some(0));
    }

    #[test]
    fn test_parents_and_ancestors() {
        let tree = sample();
        let map = ParentMap::build(&tree);
        let four = tree.find(&4).unwrap();
        let two = tree.find(&2).unwrap();

        assert_eq!(map.parent(four), Some(two));
        let chain: Vec<i32> = map.ancestors(four).map(|id| *tree.value(id)).collect();
        assert_eq!(chain, vec![4, 2, 1]);
        assert_eq!(map.depth(four), Some(2));
    }

    #[test]
    fn test_neighbours() {
        let tree = sample();
        let map = ParentMap::build(&tree);
        let two = tree.find(&2).unwrap();
        let values: Vec<i32> = map
            .neighbours(&tree, two)
            .into_iter()
            .flatten()
            .map(|id| *tree.value(id))
            .collect();
        assert_eq!(values, vec![1, 4, 5]);
    }

    #[test]
    fn test_common_ancestor_and_hops() {
        let tree = sample();
        let map = ParentMap::build(&tree);
        let id = |v: i32| tree.find(&v).unwrap();

        assert_eq!(map.common_ancestor(id(4), id(5)), Some(id(2)));
        assert_eq!(map.common_ancestor(id(4), id(3)), Some(id(1)));
        assert_eq!(map.common_ancestor(id(2), id(5)), Some(id(2)));
        assert_eq!(map.hops_between(id(4), id(3)), Some(3));
        assert_eq!(map.hops_between(id(5), id(5)), Some(0));
    }

    #[test]
    fn test_detached_nodes_are_unknown() {
        let mut tree = sample();
        let two = tree.find(&2).unwrap();
        let four = tree.take_left(two).unwrap();
        let map = ParentMap::build(&tree);

        assert!(!map.contains(four));
        assert_eq!(map.get(four), None);
        assert_eq!(map.ancestors(four).count(), 0);
        assert_eq!(map.depth(four), None);
    }

    #[test]
    fn test_empty_tree() {
        let tree: Tree<i32> = Tree::new();
        assert!(ParentMap::build(&tree).is_empty());
    }
}
