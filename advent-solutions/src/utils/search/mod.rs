//! Graph search over caller-defined state spaces.
//!
//! The graph is never materialized: callers pass a start state, a goal
//! predicate and a closure that expands a state into its successors. Any
//! `Clone + Eq + Hash` type works as a state.
//!
//! * [`bfs`], [`bfs_path`], [`bfs_all`]: unweighted, distances count edges.
//! * [`dijkstra`], [`dijkstra_path`], [`dijkstra_all`]: non-negative `u64`
//!   edge costs, lazy-deletion priority queue.
//!
//! An unreachable goal is reported as `None`.
//!
//! # Example
//!
//! ```
//! use advent_solutions::utils::search::{bfs, dijkstra};
//!
//! // Reach 10 from 1 using "+1" and "*2"
//! let steps = bfs(1u32, |&n| n == 10, |&n| [n + 1, n * 2].into_iter().filter(|&m| m <= 10));
//! assert_eq!(steps, Some(4));
//!
//! // Same moves, but doubling costs 5
//! let cost = dijkstra(1u32, |&n| n == 10, |&n| {
//!     [(n + 1, 1u64), (n * 2, 5)].into_iter().filter(|&(m, _)| m <= 10)
//! });
//! assert_eq!(cost, Some(9));
//! ```

mod bfs;
mod dijkstra;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::hash::Hash;

pub use bfs::{bfs, bfs_all, bfs_path};
pub use dijkstra::{dijkstra, dijkstra_all, dijkstra_path};

/// A successor state and the cost of moving to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<S> {
    pub state: S,
    pub cost: u64,
}

impl<S> Edge<S> {
    pub fn new(state: S, cost: u64) -> Self {
        Self { state, cost }
    }
}

impl<S> From<(S, u64)> for Edge<S> {
    fn from((state, cost): (S, u64)) -> Self {
        Self::new(state, cost)
    }
}

/// A route from the start to a goal.
///
/// `states` runs start first, goal last. For BFS `cost` is the number of
/// edges, for Dijkstra the summed edge costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S> {
    pub states: Vec<S>,
    pub cost: u64,
}

impl<S> Path<S> {
    pub fn start(&self) -> Option<&S> {
        self.states.first()
    }

    pub fn goal(&self) -> Option<&S> {
        self.states.last()
    }

    /// Number of edges on the path.
    pub fn steps(&self) -> usize {
        self.states.len().saturating_sub(1)
    }
}

/// Follow parent links back from `goal` and return the chain start-first.
fn reconstruct<S>(parents: &HashMap<S, S>, goal: S) -> Vec<S>
where
    S: Clone + Eq + Hash,
{
    let mut states = Vec::new();
    let mut current = goal;
    while let Some(prev) = parents.get(&current) {
        let prev = prev.clone();
        states.push(std::mem::replace(&mut current, prev));
    }
    states.push(current);
    states.reverse();
    states
}
