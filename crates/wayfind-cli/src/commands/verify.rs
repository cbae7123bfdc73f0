//! Verify command handler: A* against Dijkstra.

use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};

use wayfind_lib::config::EXHAUSTIVE_GOAL_LIMIT;
use wayfind_lib::heuristic::representative_goals;
use wayfind_lib::{verify_all_pairs, verify_pairs, DistanceGraph, VertexId};

use super::{CommandContext, LoadedGraph};
use crate::output::{write_json, write_verification, OutputFormat};

/// Compare both engines on every pair of a small graph, or on pairs drawn
/// from evenly spaced vertices of a large one unless `all` is set.
pub fn handle_verify_command(ctx: &CommandContext, graph_path: &Path, all: bool) -> Result<()> {
    let graph = LoadedGraph::load(graph_path, ctx.kind)?;
    let graph = graph.as_graph();

    let report = if all || graph.vertex_count() <= EXHAUSTIVE_GOAL_LIMIT {
        verify_all_pairs(graph)
    } else {
        verify_pairs(graph, &sample_pairs(graph))
    }
    .context("failed to verify search results")?;

    let mut out = io::stdout().lock();
    match ctx.format {
        OutputFormat::Text => write_verification(&mut out, &report, &ctx.palette)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
    }

    if !report.is_ok() {
        bail!(
            "{} of {} pairs disagree",
            report.mismatches.len(),
            report.pairs_checked
        );
    }
    Ok(())
}

fn sample_pairs(graph: &dyn DistanceGraph) -> Vec<(VertexId, VertexId)> {
    let vertices = representative_goals(graph.vertex_count());
    vertices
        .iter()
        .flat_map(|&source| {
            vertices
                .iter()
                .filter(move |&&goal| goal != source)
                .map(move |&goal| (source, goal))
        })
        .collect()
}
