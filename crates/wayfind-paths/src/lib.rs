//! Shortest-path search over weighted graphs.
//!
//! - **A\*** best-first search with a caller-supplied heuristic ([`AStar::solve`])
//! - An indexed binary min-heap with decrease-key ([`MinHeap`]), which
//!   serves as the A* fringe
//! - A simple in-memory graph ([`AdjacencyGraph`]) for callers that do not
//!   bring their own
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`WeightedGraph`] | neighbor enumeration |
//! | [`AStarGraph`] : [`WeightedGraph`] | A* |
//!
//! With a heuristic that always returns 0, A* reduces to Dijkstra's
//! algorithm.

mod astar;
mod graph;
mod heap;
mod traits;

pub use astar::{AStar, Outcome, Solution};
pub use graph::AdjacencyGraph;
pub use heap::{HeapError, MinHeap};
pub use traits::{AStarGraph, WeightedEdge, WeightedGraph};
