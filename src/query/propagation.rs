//! Breadth-first propagation over parent and child edges
//!
//! A `Wave` starts at one node and grows one hop per step. Each step
//! visits every unvisited neighbour (parent, left, right) of the current
//! frontier; the new nodes become the next frontier. The visited set is a
//! bit per arena slot.
//!
//! - `nodes_at_distance`: the frontier after exactly k steps
//! - `minimum_burn_time`: how many steps reach at least one new node

use std::fmt::Debug;

use bitvec::prelude::*;
use tracing::debug;

use super::{locate, ParentMap};
use crate::tree::{NodeId, Tree};
use crate::{describe, TreeError};

/// Expanding frontier around a source node
#[derive(Debug)]
pub struct Wave<'a, T> {
    tree: &'a Tree<T>,
    parents: ParentMap,

    /// One bit per arena slot
    visited: BitVec,

    frontier: Vec<NodeId>,

    /// Steps taken so far
    steps: usize,
}

impl<'a, T> Wave<'a, T> {
    /// Start a wave at `source`
    ///
    /// Fails with `NodeNotFound` unless `source` is reachable from the root
    /// of `tree`.
    pub fn new(tree: &'a Tree<T>, source: NodeId) -> Result<Self, TreeError> {
        let parents = ParentMap::build(tree);
        if !parents.contains(source) {
            return Err(TreeError::NodeNotFound {
                value: describe(&source),
            });
        }

        let mut visited = bitvec![0; tree.arena_len()];
        visited.set(source.index(), true);

        Ok(Self {
            tree,
            parents,
            visited,
            frontier: vec![source],
            steps: 0,
        })
    }

    /// Nodes first reached at the current step
    pub fn frontier(&self) -> &[NodeId] {
        &self.frontier
    }

    /// Steps taken so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Grow by one hop; false once no unvisited node is adjacent
    pub fn advance(&mut self) -> bool {
        let mut next = Vec::new();

        for &id in &self.frontier {
            for neighbour in self.parents.neighbours(self.tree, id).into_iter().flatten() {
                if !self.visited[neighbour.index()] {
                    self.visited.set(neighbour.index(), true);
                    next.push(neighbour);
                }
            }
        }

        self.frontier = next;
        self.steps += 1;
        !self.frontier.is_empty()
    }
}

/// Values of all nodes exactly `k` hops from `source`
///
/// `k == 0` yields just the source; a `k` beyond the source's
/// eccentricity yields an empty list. The order of the result is not
/// specified.
pub fn nodes_at_distance<T>(tree: &Tree<T>, source: &T, k: usize) -> Result<Vec<T>, TreeError>
where
    T: Clone + PartialEq + Debug,
{
    let start = locate(tree, source)?;
    let mut wave = Wave::new(tree, start)?;

    for _ in 0..k {
        if !wave.advance() {
            debug!(steps = wave.steps(), k, "wave died out before distance k");
            return Ok(Vec::new());
        }
    }

    Ok(wave
        .frontier()
        .iter()
        .map(|&id| tree.value(id).clone())
        .collect())
}

/// Time for fire started at `source` to reach every node, one hop per unit
///
/// Equals the source's eccentricity: the largest hop count from `source`
/// to any node. A single-node tree burns in zero units.
pub fn minimum_burn_time<T>(tree: &Tree<T>, source: &T) -> Result<usize, TreeError>
where
    T: PartialEq + Debug,
{
    let start = locate(tree, source)?;
    let mut wave = Wave::new(tree, start)?;

    let mut minutes = 0;
    while wave.advance() {
        minutes += 1;
    }

    debug!(minutes, nodes = tree.len(), "burn simulation finished");
    Ok(minutes)
}
