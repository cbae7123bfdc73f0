use serde::Serialize;
use tracing::debug;

use crate::config::VertexId;
use crate::error::Result;
use crate::frontier::Frontier;
use crate::graph::{DistanceGraph, Edge, Neighbor};
use crate::observer::{EdgeStatus, SearchObserver, VertexStatus};
use crate::path::Path;
use crate::search::{SearchState, SearchStats};

/// Result of a point-to-point search. An unreachable goal is a normal
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(Path),
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Find a minimum-cost path from `source` to `goal` with A*.
///
/// The frontier is ordered by `g + h` where `h` is
/// [`DistanceGraph::heuristic_estimate`] towards `goal`. Closed vertices are
/// never reopened, so the path is optimal only when the heuristic is
/// consistent (see [`check_heuristic_consistency`](crate::check_heuristic_consistency));
/// otherwise it is merely feasible.
///
/// Fails with [`Error::OutOfRange`](crate::Error::OutOfRange) for invalid
/// endpoints or out-of-range neighbors reported by the graph.
pub fn a_star<G, O>(
    graph: &G,
    source: VertexId,
    goal: VertexId,
    observer: &mut O,
) -> Result<SearchOutcome>
where
    G: DistanceGraph + ?Sized,
    O: SearchObserver + ?Sized,
{
    graph.ensure_vertex(source)?;
    graph.ensure_vertex(goal)?;

    if source == goal {
        observer.on_vertex_status(source, VertexStatus::Goal);
        return Ok(SearchOutcome::Found(Path::new(vec![source], 0.0)));
    }

    let mut state = SearchState::new(graph.vertex_count());
    let mut frontier = Frontier::new();
    let mut stats = SearchStats::default();

    let source_h = graph.heuristic_estimate(source, goal);
    state.start(source, source_h);
    frontier.push(source, state.f_score(source));
    observer.on_vertex_status(source, VertexStatus::Enqueued);
    observer.on_vertex_metrics(source, 0.0, source_h, None, VertexStatus::Enqueued);

    while let Some((current, _)) = frontier.pop() {
        // Skip stale entries.
        if state.is_finalized(current) {
            stats.stale += 1;
            continue;
        }
        observer.on_vertex_status(current, VertexStatus::Active);

        if current == goal {
            let path = Path::new(state.path_to(goal), state.g_score(goal));
            observer.on_vertex_status(goal, VertexStatus::Goal);
            for edge in path.edges() {
                observer.on_edge_status(edge, EdgeStatus::OnPath);
            }
            observer.on_frame();

            debug!(
                source,
                goal,
                cost = path.cost,
                hops = path.hop_count(),
                expanded = stats.finalized,
                relaxed = stats.relaxed,
                stale = stats.stale,
                peak_frontier = stats.peak_frontier,
                "a* reached goal"
            );
            return Ok(SearchOutcome::Found(path));
        }

        state.finalize(current);
        stats.finalized += 1;
        observer.on_vertex_status(current, VertexStatus::Finalized);

        let current_g = state.g_score(current);
        for Neighbor { target, cost } in graph.neighbors(current)? {
            graph.ensure_vertex(target)?;
            if state.is_finalized(target) {
                continue;
            }

            let tentative_g = current_g + cost;
            if tentative_g < state.g_score(target) {
                let h = graph.heuristic_estimate(target, goal);
                state.improve(target, tentative_g, h, current);
                frontier.push(target, state.f_score(target));
                stats.relaxed += 1;

                observer.on_edge_status(Edge::new(current, target), EdgeStatus::Relaxed);
                observer.on_vertex_status(target, VertexStatus::Enqueued);
                observer.on_vertex_metrics(
                    target,
                    tentative_g,
                    h,
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
        goal,
        expanded = stats.finalized,
        relaxed = stats.relaxed,
        stale = stats.stale,
        "a* exhausted frontier without reaching goal"
    );
    Ok(SearchOutcome::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Cost;
    use crate::error::Error;
    use crate::graph::AdjacencyGraph;
    use crate::observer::{NoopObserver, RecordingObserver};

    fn diamond() -> AdjacencyGraph {
        AdjacencyGraph::from_edges(
            4,
            [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0)],
        )
        .expect("valid graph")
    }

    /// Positions on a line; the distance along it is a consistent heuristic
    /// for graphs whose edges never get shorter than that distance.
    fn line_heuristic(positions: Vec<f64>) -> impl Fn(VertexId, VertexId) -> Cost {
        move |from, to| (positions[from] - positions[to]).abs()
    }

    #[test]
    fn finds_cheapest_path() {
        let outcome = a_star(&diamond(), 0, 3, &mut NoopObserver).expect("valid endpoints");
        let path = outcome.path().expect("path exists");
        assert_eq!(path.vertices, vec![0, 1, 2, 3]);
        assert_eq!(path.cost, 4.0);
    }

    #[test]
    fn source_equals_goal_skips_expansion() {
        let mut observer = RecordingObserver::new();
        let outcome = a_star(&diamond(), 2, 2, &mut observer).expect("valid endpoints");
        assert_eq!(
            outcome,
            SearchOutcome::Found(Path {
                vertices: vec![2],
                cost: 0.0
            })
        );
        assert_eq!(observer.frame_count(), 0);
        assert!(observer.edges_with(EdgeStatus::Relaxed).is_empty());
    }

    #[test]
    fn unreachable_goal_is_not_found() {
        let outcome = a_star(&diamond(), 3, 0, &mut NoopObserver).expect("valid endpoints");
        assert_eq!(outcome, SearchOutcome::NotFound);
        assert!(outcome.into_path().is_none());
    }

    #[test]
    fn rejects_out_of_range_endpoints() {
        let graph = diamond();
        assert!(matches!(
            a_star(&graph, 9, 0, &mut NoopObserver),
            Err(Error::OutOfRange { vertex: 9, .. })
        ));
        assert!(matches!(
            a_star(&graph, 0, 4, &mut NoopObserver),
            Err(Error::OutOfRange { vertex: 4, .. })
        ));
    }

    #[test]
    fn informed_heuristic_expands_fewer_vertices() {
        // A line 0-1-2-3-4 with a dead-end branch 0-5-6 pointing away.
        let edges = [
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 4, 1.0),
            (0, 5, 1.0),
            (5, 6, 1.0),
        ];
        let positions = vec![0.0, 1.0, 2.0, 3.0, 4.0, -1.0, -2.0];
        let informed = AdjacencyGraph::from_edges(7, edges)
            .expect("valid graph")
            .with_heuristic(line_heuristic(positions));
        let blind = AdjacencyGraph::from_edges(7, edges).expect("valid graph");

        let mut informed_observer = RecordingObserver::new();
        let mut blind_observer = RecordingObserver::new();
        let a = a_star(&informed, 0, 4, &mut informed_observer).expect("valid");
        let b = a_star(&blind, 0, 4, &mut blind_observer).expect("valid");

        assert_eq!(a.path().map(|p| p.cost), Some(4.0));
        assert_eq!(b.path().map(|p| p.cost), Some(4.0));
        assert!(
            informed_observer.finalized_order().len() < blind_observer.finalized_order().len()
        );
        assert!(!informed_observer.finalized_order().contains(&6));
    }

    #[test]
    fn goal_event_and_path_edges_are_reported() {
        let mut observer = RecordingObserver::new();
        a_star(&diamond(), 0, 3, &mut observer).expect("valid endpoints");

        assert_eq!(observer.statuses_of(3).last(), Some(&VertexStatus::Goal));
        assert_eq!(
            observer.edges_with(EdgeStatus::OnPath),
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]
        );
        assert!(!observer.finalized_order().contains(&3));
    }

    #[test]
    fn inconsistent_heuristic_still_returns_feasible_path() {
        // h(1) wildly overestimates, steering A* through the direct edge.
        let graph = diamond().with_heuristic(|from, _| if from == 1 { 100.0 } else { 0.0 });
        let outcome = a_star(&graph, 0, 3, &mut NoopObserver).expect("valid endpoints");
        let path = outcome.path().expect("path exists");
        assert_eq!(path.vertices, vec![0, 2, 3]);
        assert_eq!(path.cost, 6.0);
    }
}
