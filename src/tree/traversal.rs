//! Depth-first and breadth-first walks
//!
//! All walks are iterative (explicit stack or queue), so depth is bounded
//! by heap, not by the call stack. Only nodes reachable from the root are
//! visited.

use std::collections::VecDeque;

use super::{NodeId, Tree};

/// Visiting rule for a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Root, left, right
    Pre,

    /// Left, root, right
    In,

    /// Left, right, root
    Post,

    /// Breadth-first, left to right
    Level,
}

impl<T> Tree<T> {
    /// Ids of all reachable nodes in the given order
    pub fn node_ids(&self, order: Order) -> Vec<NodeId> {
        match order {
            Order::Pre => self.preorder_ids(),
            Order::In => self.inorder_ids(),
            Order::Post => self.postorder_ids(),
            Order::Level => self.levels().into_iter().flatten().collect(),
        }
    }

    fn preorder_ids(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = stack.pop() {
            out.push(id);
            let node = &self[id];
            stack.extend(node.right);
            stack.extend(node.left);
        }

        out
    }

    fn inorder_ids(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut cursor = self.root;

        loop {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = self[id].left;
            }
            match stack.pop() {
                Some(id) => {
                    out.push(id);
                    cursor = self[id].right;
                }
                None => break,
            }
        }

        out
    }

    fn postorder_ids(&self) -> Vec<NodeId> {
        // Root-right-left preorder, reversed
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = stack.pop() {
            out.push(id);
            let node = &self[id];
            stack.extend(node.left);
            stack.extend(node.right);
        }

        out.reverse();
        out
    }

    /// Reachable nodes grouped by depth, root level first
    pub fn levels(&self) -> Vec<Vec<NodeId>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<NodeId> = self.root.into_iter().collect();

        while !queue.is_empty() {
            let width = queue.len();
            let mut level = Vec::with_capacity(width);
            for _ in 0..width {
                let Some(id) = queue.pop_front() else { break };
                level.push(id);
                let node = &self[id];
                queue.extend(node.left);
                queue.extend(node.right);
            }
            levels.push(level);
        }

        levels
    }

    /// Number of reachable nodes
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = stack.pop() {
            count += 1;
            let node = &self[id];
            stack.extend(node.left);
            stack.extend(node.right);
        }

        count
    }

    /// Number of levels: 0 for the empty tree, 1 for a single node
    pub fn height(&self) -> usize {
        self.levels().len()
    }

    /// Last node on the right spine starting at `from`
    pub fn rightmost(&self, from: NodeId) -> NodeId {
        let mut id = from;
        while let Some(next) = self[id].right {
            id = next;
        }
        id
    }
}

impl<T: Clone> Tree<T> {
    /// Values of all reachable nodes in the given order
    pub fn values(&self, order: Order) -> Vec<T> {
        self.node_ids(order)
            .into_iter()
            .map(|id| self[id].value.clone())
            .collect()
    }

    /// Preorder values
    pub fn preorder(&self) -> Vec<T> {
        self.values(Order::Pre)
    }

    /// Inorder values
    pub fn inorder(&self) -> Vec<T> {
        self.values(Order::In)
    }

    /// Postorder values
    pub fn postorder(&self) -> Vec<T> {
        self.values(Order::Post)
    }

    /// Breadth-first values
    pub fn level_order(&self) -> Vec<T> {
        self.values(Order::Level)
    }
}

impl<T: PartialEq> Tree<T> {
    /// First node (in preorder) holding `value`
    pub fn find(&self, value: &T) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = stack.pop() {
            let node = &self[id];
            if node.value == *value {
                return Some(id);
            }
            stack.extend(node.right);
            stack.extend(node.left);
        }

        None
    }

    /// True when some reachable node holds `value`
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}
