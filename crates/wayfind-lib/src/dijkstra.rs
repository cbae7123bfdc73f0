use serde::Serialize;
use tracing::debug;

use crate::config::{Cost, VertexId, INFINITE_COST};
use crate::error::Result;
use crate::frontier::Frontier;
use crate::graph::{DistanceGraph, Edge, Neighbor};
use crate::observer::{EdgeStatus, SearchObserver, VertexStatus};
use crate::path::Path;
use crate::search::{SearchState, SearchStats};

/// Shortest distances from one source to every vertex of a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceTable {
    source: VertexId,
    distances: Vec<Cost>,
    predecessors: Vec<Option<VertexId>>,
}

impl DistanceTable {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distances indexed by vertex; unreachable vertices hold [`INFINITE_COST`].
    pub fn distances(&self) -> &[Cost] {
        &self.distances
    }

    /// Distance to `vertex`, or [`INFINITE_COST`] if unreachable or out of range.
    pub fn distance(&self, vertex: VertexId) -> Cost {
        self.distances.get(vertex).copied().unwrap_or(INFINITE_COST)
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_finite()
    }

    /// Number of vertices reached, the source included.
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Number of vertices covered by the table.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Shortest path from the source to `target`, if one exists.
    pub fn path_to(&self, target: VertexId) -> Option<Path> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut vertices = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessor(current) {
            vertices.push(previous);
            current = previous;
        }
        vertices.reverse();
        Some(Path::new(vertices, self.distance(target)))
    }
}

/// Single-source shortest distances with Dijkstra's algorithm.
///
/// Fails with [`Error::OutOfRange`](crate::Error::OutOfRange) if `source` is
/// not a vertex of `graph`, or if the graph reports a neighbor outside its own
/// vertex range. Unreachable vertices are not an error; they keep
/// [`INFINITE_COST`].
pub fn dijkstra<G, O>(graph: &G, source: VertexId, observer: &mut O) -> Result<DistanceTable>
where
    G: DistanceGraph + ?Sized,
    O: SearchObserver + ?Sized,
{
    graph.ensure_vertex(source)?;

    let mut state = SearchState::new(graph.vertex_count());
    let mut frontier = Frontier::new();
    let mut stats = SearchStats::default();

    state.start(source, 0.0);
    frontier.push(source, 0.0);
    observer.on_vertex_status(source, VertexStatus::Enqueued);
    observer.on_vertex_metrics(source, 0.0, 0.0, None, VertexStatus::Enqueued);

    while let Some((current, _)) = frontier.pop() {
        // Skip stale entries.
        if !state.finalize(current) {
            stats.stale += 1;
            continue;
        }
        stats.finalized += 1;
        observer.on_vertex_status(current, VertexStatus::Finalized);

        let current_g = state.g_score(current);
        for Neighbor { target, cost } in graph.neighbors(current)? {
            graph.ensure_vertex(target)?;
            if state.is_finalized(target) {
                continue;
            }

            let candidate = current_g + cost;
            if candidate < state.g_score(target) {
                state.improve(target, candidate, 0.0, current);
                frontier.push(target, candidate);
                stats.relaxed += 1;

                observer.on_edge_status(Edge::new(current, target), EdgeStatus::Relaxed);
                observer.on_vertex_status(target, VertexStatus::Enqueued);
                observer.on_vertex_metrics(
                    target,
                    candidate,
                    0.0,
                    Some(current),
                    VertexStatus::Enqueued,
                );
            }
        }

        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        observer.on_frame();
    }

    debug!(
        source,
        finalized = stats.finalized,
        relaxed = stats.relaxed,
        stale = stats.stale,
        peak_frontier = stats.peak_frontier,
        "dijkstra finished"
    );

    let records = state.into_records();
    Ok(DistanceTable {
        source,
        distances: records.iter().map(|record| record.g_score).collect(),
        predecessors: records.iter().map(|record| record.predecessor()).collect(),
    })
}
