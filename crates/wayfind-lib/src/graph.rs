use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::{Cost, VertexId, INFINITE_COST};
use crate::error::{Error, Result};

/// Outgoing edge as reported by [`DistanceGraph::neighbors`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub target: VertexId,
    pub cost: Cost,
}

impl Neighbor {
    pub fn new(target: VertexId, cost: Cost) -> Self {
        Self { target, cost }
    }
}

/// Ordered vertex pair identifying a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Read-only weighted graph consumed by the search engines.
///
/// Vertices are the dense range `0..vertex_count()`. Implementations decide
/// how edges are stored; the engines only ever query them through this trait.
pub trait DistanceGraph {
    /// Total number of vertices, fixed for the lifetime of the graph.
    fn vertex_count(&self) -> usize;

    /// Outgoing edges of `vertex`.
    ///
    /// Fails with [`Error::OutOfRange`] when `vertex >= vertex_count()`. A
    /// vertex without outgoing edges yields an empty list.
    fn neighbors(&self, vertex: VertexId) -> Result<Vec<Neighbor>>;

    /// Cost of the direct edge `from -> to`.
    ///
    /// Returns `0` when `from == to` and [`INFINITE_COST`] when there is no
    /// direct edge.
    fn edge_cost(&self, from: VertexId, to: VertexId) -> Cost;

    /// Lower-bound estimate of the distance from `from` to `to`.
    ///
    /// Returns [`INFINITE_COST`] only when either vertex is out of range.
    fn heuristic_estimate(&self, from: VertexId, to: VertexId) -> Cost;

    /// Whether `vertex` is a valid index for this graph.
    fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count()
    }

    /// Fail with [`Error::OutOfRange`] unless `vertex` is valid.
    fn ensure_vertex(&self, vertex: VertexId) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(Error::out_of_range(vertex, self.vertex_count()))
        }
    }
}

/// Heuristic callback attached to an [`AdjacencyGraph`]: `(from, goal) -> estimate`.
pub type HeuristicFn = Arc<dyn Fn(VertexId, VertexId) -> Cost + Send + Sync>;

/// Directed adjacency-list graph with a pluggable heuristic.
///
/// Without an explicit heuristic every estimate is zero, which turns A* into
/// Dijkstra.
#[derive(Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<Neighbor>>,
    edge_count: usize,
    heuristic: Option<HeuristicFn>,
}

impl AdjacencyGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
            heuristic: None,
        }
    }

    /// Build a graph from `(from, to, cost)` triples.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId, Cost)>,
    ) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for (from, to, cost) in edges {
            graph.add_edge(from, to, cost)?;
        }
        Ok(graph)
    }

    /// Replace the heuristic. The callback is only invoked with in-range vertices.
    pub fn with_heuristic(
        mut self,
        heuristic: impl Fn(VertexId, VertexId) -> Cost + Send + Sync + 'static,
    ) -> Self {
        self.heuristic = Some(Arc::new(heuristic));
        self
    }

    /// Add the directed edge `from -> to`.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, cost: Cost) -> Result<()> {
        self.ensure_vertex(from)?;
        self.ensure_vertex(to)?;
        if cost.is_nan() || cost < 0.0 {
            return Err(Error::InvalidCost { from, to, cost });
        }
        self.adjacency[from].push(Neighbor::new(to, cost));
        self.edge_count += 1;
        Ok(())
    }

    /// Add both `a -> b` and `b -> a` with the same cost.
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId, cost: Cost) -> Result<()> {
        self.add_edge(a, b, cost)?;
        self.add_edge(b, a, cost)
    }

    /// Number of directed edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Borrow the outgoing edges of `vertex` without allocating.
    pub fn outgoing(&self, vertex: VertexId) -> &[Neighbor] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl fmt::Debug for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyGraph")
            .field("vertices", &self.adjacency.len())
            .field("edges", &self.edge_count)
            .field("heuristic", &self.heuristic.is_some())
            .finish()
    }
}

impl DistanceGraph for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, vertex: VertexId) -> Result<Vec<Neighbor>> {
        self.ensure_vertex(vertex)?;
        Ok(self.adjacency[vertex].clone())
    }

    fn edge_cost(&self, from: VertexId, to: VertexId) -> Cost {
        cheapest_edge(self.outgoing(from), from, to)
    }

    fn heuristic_estimate(&self, from: VertexId, to: VertexId) -> Cost {
        if !self.contains(from) || !self.contains(to) {
            return INFINITE_COST;
        }
        match &self.heuristic {
            Some(heuristic) => heuristic(from, to),
            None => 0.0,
        }
    }
}

/// Cheapest direct edge `from -> to` among `edges`, following the
/// [`DistanceGraph::edge_cost`] conventions.
pub(crate) fn cheapest_edge(edges: &[Neighbor], from: VertexId, to: VertexId) -> Cost {
    if from == to {
        return 0.0;
    }
    edges
        .iter()
        .filter(|edge| edge.target == to)
        .map(|edge| edge.cost)
        .fold(INFINITE_COST, Cost::min)
}
