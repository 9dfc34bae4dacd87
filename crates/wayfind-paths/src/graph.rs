//! In-memory adjacency-list graph.

use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::{AStarGraph, WeightedEdge, WeightedGraph};

fn zero_heuristic<V>(_: &V, _: &V) -> f64 {
    0.0
}

/// A weighted graph stored as per-vertex edge lists, paired with a
/// heuristic function.
///
/// With the default zero heuristic, A* over this graph behaves like
/// Dijkstra's algorithm.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, H = fn(&V, &V) -> f64> {
    adj: HashMap<V, Vec<WeightedEdge<V>>>,
    heuristic: H,
}

impl<V: Clone + Eq + Hash> AdjacencyGraph<V> {
    /// Create an empty graph whose heuristic is always 0.
    pub fn new() -> Self {
        Self::with_heuristic(zero_heuristic::<V> as fn(&V, &V) -> f64)
    }
}

impl<V: Clone + Eq + Hash> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H> AdjacencyGraph<V, H>
where
    V: Clone + Eq + Hash,
    H: Fn(&V, &V) -> f64,
{
    /// Create an empty graph using `heuristic(v, goal)` as the A* estimate.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            adj: HashMap::new(),
            heuristic,
        }
    }

    /// Add a vertex with no edges. No-op if it already exists.
    pub fn add_vertex(&mut self, v: V) {
        self.adj.entry(v).or_default();
    }

    /// Add a directed edge `from -> to`. Both endpoints become vertices.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        self.add_vertex(to.clone());
        self.adj
            .entry(from.clone())
            .or_default()
            .push(WeightedEdge::new(from, to, weight));
    }

    /// Add edges in both directions.
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: f64) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    /// Whether `v` is a vertex of the graph.
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adj.contains_key(v)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum()
    }
}

impl<V, H> WeightedGraph for AdjacencyGraph<V, H>
where
    V: Clone + Eq + Hash,
{
    type Vertex = V;

    fn neighbors(&self, v: &V, buf: &mut Vec<WeightedEdge<V>>) {
        if let Some(edges) = self.adj.get(v) {
            buf.extend(edges.iter().cloned());
        }
    }
}

impl<V, H> AStarGraph for AdjacencyGraph<V, H>
where
    V: Clone + Eq + Hash,
    H: Fn(&V, &V) -> f64,
{
    fn estimated_distance_to_goal(&self, v: &V, goal: &V) -> f64 {
        (self.heuristic)(v, goal)
    }
}
