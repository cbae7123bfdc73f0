//! Cross-checks between the two engines.
//!
//! Dijkstra gives the reference distance for every pair; A* must agree with
//! it, and the path it returns must actually exist in the graph.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::astar::{a_star, SearchOutcome};
use crate::config::{costs_match, Cost, VertexId};
use crate::dijkstra::{dijkstra, DistanceTable};
use crate::error::Result;
use crate::graph::DistanceGraph;
use crate::observer::NoopObserver;
use crate::path::path_cost;

/// What went wrong for one `(source, goal)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// A* found a path although Dijkstra could not reach the goal.
    UnexpectedPath,
    /// A* found nothing although the goal is reachable.
    MissingPath,
    /// The path does not start at the source or end at the goal.
    WrongEndpoints,
    /// Consecutive path vertices are not joined by an edge.
    InfeasiblePath,
    /// The reported cost differs from the summed edge costs.
    CostMismatch,
    /// The path is feasible but more expensive than the Dijkstra distance.
    Suboptimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    pub source: VertexId,
    pub goal: VertexId,
    pub kind: MismatchKind,
    /// Dijkstra distance.
    pub expected: Cost,
    /// Cost reported by A*, if it found a path.
    pub actual: Option<Cost>,
}

/// Summary of a verification run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerificationReport {
    pub pairs_checked: usize,
    pub paths_found: usize,
    pub mismatches: Vec<Mismatch>,
}

impl VerificationReport {
    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare A* against Dijkstra for every ordered pair of distinct vertices.
pub fn verify_all_pairs<G>(graph: &G) -> Result<VerificationReport>
where
    G: DistanceGraph + ?Sized,
{
    let mut report = VerificationReport::default();
    for source in 0..graph.vertex_count() {
        let table = dijkstra(graph, source, &mut NoopObserver)?;
        for goal in (0..graph.vertex_count()).filter(|&goal| goal != source) {
            check_pair(graph, &table, goal, &mut report)?;
        }
    }
    finish(report)
}

/// Compare A* against Dijkstra for the given `(source, goal)` pairs.
///
/// Dijkstra runs once per distinct source.
pub fn verify_pairs<G>(graph: &G, pairs: &[(VertexId, VertexId)]) -> Result<VerificationReport>
where
    G: DistanceGraph + ?Sized,
{
    let mut tables: HashMap<VertexId, DistanceTable> = HashMap::new();
    let mut report = VerificationReport::default();
    for &(source, goal) in pairs {
        graph.ensure_vertex(goal)?;
        if !tables.contains_key(&source) {
            let table = dijkstra(graph, source, &mut NoopObserver)?;
            tables.insert(source, table);
        }
        if let Some(table) = tables.get(&source) {
            check_pair(graph, table, goal, &mut report)?;
        }
    }
    finish(report)
}

fn check_pair<G>(
    graph: &G,
    table: &DistanceTable,
    goal: VertexId,
    report: &mut VerificationReport,
) -> Result<()>
where
    G: DistanceGraph + ?Sized,
{
    let source = table.source();
    let expected = table.distance(goal);
    report.pairs_checked += 1;

    let outcome = a_star(graph, source, goal, &mut NoopObserver)?;
    let kind = match &outcome {
        SearchOutcome::NotFound if expected.is_finite() => Some(MismatchKind::MissingPath),
        SearchOutcome::NotFound => None,
        SearchOutcome::Found(path) => {
            report.paths_found += 1;
            if !expected.is_finite() {
                Some(MismatchKind::UnexpectedPath)
            } else if path.source() != Some(source) || path.goal() != Some(goal) {
                Some(MismatchKind::WrongEndpoints)
            } else {
                match path_cost(graph, &path.vertices) {
                    Err(_) => Some(MismatchKind::InfeasiblePath),
                    Ok(summed) if !costs_match(summed, path.cost) => {
                        Some(MismatchKind::CostMismatch)
                    }
                    Ok(_) if !costs_match(path.cost, expected) => Some(MismatchKind::Suboptimal),
                    Ok(_) => None,
                }
            }
        }
    };

    if let Some(kind) = kind {
        let actual = outcome.path().map(|path| path.cost);
        warn!(source, goal, ?kind, expected, ?actual, "a* disagrees with dijkstra");
        report.mismatches.push(Mismatch {
            source,
            goal,
            kind,
            expected,
            actual,
        });
    }
    Ok(())
}

fn finish(report: VerificationReport) -> Result<VerificationReport> {
    debug!(
        pairs = report.pairs_checked,
        found = report.paths_found,
        mismatches = report.mismatches.len(),
        "verification finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;

    fn diamond() -> AdjacencyGraph {
        AdjacencyGraph::from_edges(
            4,
            [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0)],
        )
        .expect("valid graph")
    }

    #[test]
    fn zero_heuristic_agrees_everywhere() {
        let report = verify_all_pairs(&diamond()).expect("valid graph");
        assert!(report.is_ok(), "{:?}", report.mismatches);
        assert_eq!(report.pairs_checked, 12);
        // 0->1, 0->2, 0->3, 1->2, 1->3, 2->3
        assert_eq!(report.paths_found, 6);
    }

    #[test]
    fn overestimating_heuristic_is_flagged_as_suboptimal() {
        let graph = diamond().with_heuristic(|from, _| if from == 1 { 100.0 } else { 0.0 });
        let report = verify_pairs(&graph, &[(0, 3), (1, 3)]).expect("valid pairs");
        assert_eq!(report.pairs_checked, 2);
        assert_eq!(
            report.mismatches,
            vec![Mismatch {
                source: 0,
                goal: 3,
                kind: MismatchKind::Suboptimal,
                expected: 4.0,
                actual: Some(6.0),
            }]
        );
    }

    #[test]
    fn verify_pairs_rejects_invalid_vertices() {
        assert!(verify_pairs(&diamond(), &[(0, 7)]).is_err());
        assert!(verify_pairs(&diamond(), &[(7, 0)]).is_err());
    }
}
