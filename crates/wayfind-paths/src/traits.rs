use std::hash::Hash;

/// A directed edge with a non-negative weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> WeightedEdge<V> {
    /// Create an edge `from -> to` of the given weight.
    #[inline]
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

/// Graph with weighted outgoing edges.
pub trait WeightedGraph {
    /// Vertex identifier. Used as a hash-map key by the solvers.
    type Vertex: Clone + Eq + Hash;

    /// Append the outgoing edges of `v` into `buf`. The caller clears `buf`
    /// before calling. Weights must be >= 0.
    fn neighbors(&self, v: &Self::Vertex, buf: &mut Vec<WeightedEdge<Self::Vertex>>);
}

/// Weighted graph with a heuristic for goal-directed search.
pub trait AStarGraph: WeightedGraph {
    /// Estimated remaining cost from `v` to `goal`; must be >= 0.
    ///
    /// A* returns optimal paths only if this never overestimates the true
    /// cost (admissible). That is not checked.
    fn estimated_distance_to_goal(&self, v: &Self::Vertex, goal: &Self::Vertex) -> f64;
}
