use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use crate::heap::MinHeap;
use crate::traits::{AStarGraph, WeightedEdge};

/// Terminal classification of a single [`AStar::solve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was reached; the path is optimal for an admissible heuristic.
    Solved,
    /// Every reachable vertex was expanded without meeting the goal.
    Unsolvable,
    /// The time budget ran out before the goal was reached.
    Timeout,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Solved => "solved",
            Self::Unsolvable => "unsolvable",
            Self::Timeout => "timeout",
        };
        f.write_str(s)
    }
}

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<V> {
    pub outcome: Outcome,
    /// Vertices from start to goal inclusive. Empty unless solved.
    pub path: Vec<V>,
    /// Total weight of `path`; 0 unless solved.
    pub weight: f64,
    /// Number of fringe inspections performed.
    pub states_explored: usize,
    /// Wall-clock time from the start of the call to its termination.
    pub elapsed: Duration,
}

impl<V> Solution<V> {
    /// Whether a path was found.
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }
}

/// A* shortest-path solver.
///
/// All per-query state (distances, parents, the fringe) is created at the
/// start of [`solve`](Self::solve) and dropped when it returns; the solver
/// only keeps a scratch buffer for neighbor queries between calls.
pub struct AStar<V> {
    nbuf: Vec<WeightedEdge<V>>,
}

impl<V> Default for AStar<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AStar<V> {
    /// Create a new solver.
    pub fn new() -> Self {
        Self { nbuf: Vec::new() }
    }

    /// Find a least-weight path from `start` to `goal`.
    ///
    /// The time budget is checked once per expanded vertex, after it leaves
    /// the fringe and before its edges are relaxed, so a call may overrun
    /// `timeout` by the cost of relaxing one vertex. An unreachable goal or
    /// an exhausted budget is reported through [`Solution::outcome`].
    pub fn solve<G>(&mut self, graph: &G, start: &V, goal: &V, timeout: Duration) -> Solution<V>
    where
        G: AStarGraph<Vertex = V>,
        V: Clone + Eq + std::hash::Hash,
    {
        let clock = Instant::now();

        let mut fringe: MinHeap<V> = MinHeap::new();
        let mut dist_to: HashMap<V, f64> = HashMap::new();
        // The start vertex never gets an entry.
        let mut parent: HashMap<V, V> = HashMap::new();

        dist_to.insert(start.clone(), 0.0);
        fringe.push_or_update(start.clone(), graph.estimated_distance_to_goal(start, goal));

        let mut explored = 0usize;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            let Some(current) = fringe.peek() else {
                break 'search Outcome::Unsolvable;
            };
            explored += 1;
            if current == goal {
                break 'search Outcome::Solved;
            }

            let Some(current) = fringe.pop() else {
                break 'search Outcome::Unsolvable;
            };
            if clock.elapsed() >= timeout {
                break 'search Outcome::Timeout;
            }

            let current_dist = dist_to.get(&current).copied().unwrap_or(f64::INFINITY);

            nbuf.clear();
            graph.neighbors(&current, &mut nbuf);

            for edge in nbuf.drain(..) {
                let candidate = current_dist + edge.weight;
                let improves = dist_to.get(&edge.to).is_none_or(|&known| candidate < known);
                if !improves {
                    continue;
                }
                let priority = candidate + graph.estimated_distance_to_goal(&edge.to, goal);
                dist_to.insert(edge.to.clone(), candidate);
                parent.insert(edge.to.clone(), current.clone());
                fringe.push_or_update(edge.to, priority);
            }
        };

        self.nbuf = nbuf;

        let (path, weight) = match outcome {
            Outcome::Solved => {
                let weight = dist_to.get(goal).copied().unwrap_or(0.0);
                (trace_path(&parent, goal), weight)
            }
            Outcome::Unsolvable | Outcome::Timeout => (Vec::new(), 0.0),
        };

        let elapsed = clock.elapsed();
        if outcome == Outcome::Timeout {
            log::warn!("astar: gave up after {explored} states ({elapsed:?}, budget {timeout:?})");
        } else {
            log::debug!("astar: {outcome} after {explored} states in {elapsed:?}");
        }

        Solution {
            outcome,
            path,
            weight,
            states_explored: explored,
            elapsed,
        }
    }
}

/// Follow parent links back from `goal` and return the path start-first.
fn trace_path<V: Clone + Eq + std::hash::Hash>(parent: &HashMap<V, V>, goal: &V) -> Vec<V> {
    let mut path = vec![goal.clone()];
    let mut cur = goal;
    while let Some(prev) = parent.get(cur) {
        path.push(prev.clone());
        cur = prev;
    }
    path.reverse();
    path
}
