//! Check command handler: heuristic consistency.

use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};

use wayfind_lib::{
    check_heuristic_consistency, check_heuristic_consistency_for, DistanceGraph, Error as LibError,
    VertexId,
};

use super::{CommandContext, LoadedGraph};
use crate::output::{write_check, write_json, CheckReport, OutputFormat};

/// Check the heuristic towards `goal`, or towards a representative set of
/// goals when none is given. An inconsistent heuristic is reported and then
/// returned as an error so the exit code reflects it.
pub fn handle_check_command(
    ctx: &CommandContext,
    graph_path: &Path,
    goal: Option<VertexId>,
) -> Result<()> {
    let graph = LoadedGraph::load(graph_path, ctx.kind)?;
    let graph = graph.as_graph();
    let result = match goal {
        Some(goal) => check_heuristic_consistency_for(graph, goal),
        None => check_heuristic_consistency(graph),
    };

    let violation = match result {
        Ok(()) => None,
        Err(LibError::HeuristicInconsistent(violation)) => Some(violation),
        Err(err) => return Err(err).context("failed to check heuristic consistency"),
    };

    let report = CheckReport {
        consistent: violation.is_none(),
        vertex_count: graph.vertex_count(),
        violation: violation.as_ref(),
    };
    let mut out = io::stdout().lock();
    match ctx.format {
        OutputFormat::Text => write_check(&mut out, &report, &ctx.palette)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
    }

    if let Some(violation) = violation {
        bail!("heuristic is inconsistent: {violation}");
    }
    Ok(())
}
