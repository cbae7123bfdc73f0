//! Route command handler: A* between two vertices.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use wayfind_lib::{a_star, VertexId};

use super::{CommandContext, LoadedGraph};
use crate::output::{render_maze, write_json, write_route, OutputFormat, RouteReport};

pub fn handle_route_command(
    ctx: &CommandContext,
    graph_path: &Path,
    from: VertexId,
    to: VertexId,
) -> Result<()> {
    let graph = LoadedGraph::load(graph_path, ctx.kind)?;
    let mut observer = ctx.observer();
    let outcome = a_star(graph.as_graph(), from, to, &mut *observer)
        .with_context(|| format!("failed to search for a path from {from} to {to}"))?;

    let report = RouteReport {
        source: from,
        goal: to,
        found: outcome.is_found(),
        path: outcome.path(),
        maze: graph
            .maze()
            .map(|maze| render_maze(maze, outcome.path(), &ctx.output_palette())),
    };

    let mut out = io::stdout().lock();
    match ctx.format {
        OutputFormat::Text => write_route(&mut out, &report, &ctx.palette)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
    }
    Ok(())
}
