//! Consistency check for [`DistanceGraph::heuristic_estimate`].
//!
//! A* only returns optimal paths when, for the goal in use, every edge
//! `u -> v` of cost `c` satisfies `h(u) <= c + h(v)` and `h(goal) == 0`.
//! Checking every goal is quadratic, so [`check_heuristic_consistency`] checks
//! a fixed representative set of goals; [`check_heuristic_consistency_for`]
//! checks one goal exhaustively.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::{
    cost_at_most, Cost, VertexId, EXHAUSTIVE_GOAL_LIMIT, SAMPLED_GOALS,
};
use crate::error::{Error, Result};
use crate::graph::{DistanceGraph, Edge};

/// First place where a heuristic broke consistency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsistencyViolation {
    /// `h(edge.from) > edge_cost + h(edge.to)` for this goal.
    Edge {
        goal: VertexId,
        edge: Edge,
        edge_cost: Cost,
        estimate_from: Cost,
        estimate_to: Cost,
    },
    /// The heuristic does not vanish at the goal itself.
    NonZeroAtGoal { goal: VertexId, estimate: Cost },
}

impl ConsistencyViolation {
    pub fn goal(&self) -> VertexId {
        match self {
            ConsistencyViolation::Edge { goal, .. } => *goal,
            ConsistencyViolation::NonZeroAtGoal { goal, .. } => *goal,
        }
    }

    /// The offending edge, if the violation is edge-related.
    pub fn edge(&self) -> Option<Edge> {
        match self {
            ConsistencyViolation::Edge { edge, .. } => Some(*edge),
            ConsistencyViolation::NonZeroAtGoal { .. } => None,
        }
    }
}

impl fmt::Display for ConsistencyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyViolation::Edge {
                goal,
                edge,
                edge_cost,
                estimate_from,
                estimate_to,
            } => write!(
                f,
                "edge {edge} (cost {edge_cost}) towards goal {goal}: h({}) = {estimate_from} exceeds {edge_cost} + h({}) = {}",
                edge.from,
                edge.to,
                edge_cost + estimate_to
            ),
            ConsistencyViolation::NonZeroAtGoal { goal, estimate } => {
                write!(f, "h({goal}, {goal}) = {estimate}, expected 0")
            }
        }
    }
}

/// Check consistency of the heuristic towards a single `goal`.
///
/// Every edge of the graph is visited once. Comparisons allow the relative
/// slack of [`CONSISTENCY_TOLERANCE`](crate::config::CONSISTENCY_TOLERANCE).
pub fn check_heuristic_consistency_for<G>(graph: &G, goal: VertexId) -> Result<()>
where
    G: DistanceGraph + ?Sized,
{
    graph.ensure_vertex(goal)?;

    let at_goal = graph.heuristic_estimate(goal, goal);
    if at_goal != 0.0 {
        return Err(Error::HeuristicInconsistent(
            ConsistencyViolation::NonZeroAtGoal {
                goal,
                estimate: at_goal,
            },
        ));
    }

    for from in 0..graph.vertex_count() {
        let estimate_from = graph.heuristic_estimate(from, goal);
        for neighbor in graph.neighbors(from)? {
            graph.ensure_vertex(neighbor.target)?;
            let estimate_to = graph.heuristic_estimate(neighbor.target, goal);
            if !cost_at_most(estimate_from, neighbor.cost + estimate_to) {
                return Err(Error::HeuristicInconsistent(ConsistencyViolation::Edge {
                    goal,
                    edge: Edge::new(from, neighbor.target),
                    edge_cost: neighbor.cost,
                    estimate_from,
                    estimate_to,
                }));
            }
        }
    }

    Ok(())
}

/// Check consistency of the heuristic over a representative set of goals.
///
/// See [`representative_goals`] for which goals are used. An empty graph
/// passes trivially.
pub fn check_heuristic_consistency<G>(graph: &G) -> Result<()>
where
    G: DistanceGraph + ?Sized,
{
    let goals = representative_goals(graph.vertex_count());
    for &goal in &goals {
        check_heuristic_consistency_for(graph, goal)?;
    }
    debug!(goals = goals.len(), "heuristic is consistent");
    Ok(())
}

/// Goals checked by [`check_heuristic_consistency`].
///
/// Every vertex for graphs up to [`EXHAUSTIVE_GOAL_LIMIT`] vertices,
/// otherwise [`SAMPLED_GOALS`] evenly spaced vertices including the first and
/// the last one.
pub fn representative_goals(vertex_count: usize) -> Vec<VertexId> {
    if vertex_count <= EXHAUSTIVE_GOAL_LIMIT {
        return (0..vertex_count).collect();
    }
    let last = vertex_count - 1;
    let steps = SAMPLED_GOALS - 1;
    let mut goals: Vec<VertexId> = (0..SAMPLED_GOALS).map(|i| i * last / steps).collect();
    goals.dedup();
    goals
}
