use serde::Serialize;

use crate::config::{Cost, VertexId};
use crate::error::{Error, Result};
use crate::graph::{DistanceGraph, Edge};

/// Vertex sequence returned by a successful point-to-point search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub cost: Cost,
}

impl Path {
    pub(crate) fn new(vertices: Vec<VertexId>, cost: Cost) -> Self {
        Self { vertices, cost }
    }

    /// Number of vertices, endpoints included.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn goal(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Consecutive edges along the path.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices
            .windows(2)
            .map(|pair| Edge::new(pair[0], pair[1]))
    }
}

/// Sum of the direct edge costs along `vertices`.
///
/// Every consecutive pair must be joined by an edge of the graph.
pub fn path_cost<G>(graph: &G, vertices: &[VertexId]) -> Result<Cost>
where
    G: DistanceGraph + ?Sized,
{
    let Some(&first) = vertices.first() else {
        return Err(Error::EmptyPath);
    };
    graph.ensure_vertex(first)?;

    let mut total = 0.0;
    for pair in vertices.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        graph.ensure_vertex(to)?;
        let cost = graph.edge_cost(from, to);
        if cost.is_infinite() {
            return Err(Error::MissingEdge { from, to });
        }
        total += cost;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;

    fn line() -> AdjacencyGraph {
        AdjacencyGraph::from_edges(4, [(0, 1, 1.5), (1, 2, 2.0), (2, 3, 0.5)]).expect("valid")
    }

    #[test]
    fn sums_edge_costs() {
        let graph = line();
        assert_eq!(path_cost(&graph, &[0, 1, 2, 3]).expect("feasible"), 4.0);
        assert_eq!(path_cost(&graph, &[2]).expect("single vertex"), 0.0);
    }

    #[test]
    fn rejects_broken_paths() {
        let graph = line();
        assert!(matches!(path_cost(&graph, &[]), Err(Error::EmptyPath)));
        assert!(matches!(
            path_cost(&graph, &[0, 2]),
            Err(Error::MissingEdge { from: 0, to: 2 })
        ));
        assert!(matches!(
            path_cost(&graph, &[0, 1, 8]),
            Err(Error::OutOfRange { vertex: 8, .. })
        ));
    }

    #[test]
    fn path_accessors() {
        let path = Path::new(vec![4, 2, 7], 3.0);
        assert_eq!(path.len(), 3);
        assert_eq!(path.hop_count(), 2);
        assert_eq!(path.source(), Some(4));
        assert_eq!(path.goal(), Some(7));
        let edges: Vec<_> = path.edges().collect();
        assert_eq!(edges, vec![Edge::new(4, 2), Edge::new(2, 7)]);
    }
}
