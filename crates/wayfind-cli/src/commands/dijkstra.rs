//! Dijkstra command handler: distance table from one source.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use wayfind_lib::{dijkstra, VertexId};

use super::{CommandContext, LoadedGraph};
use crate::output::{write_distance_table, write_json, OutputFormat};

pub fn handle_dijkstra_command(
    ctx: &CommandContext,
    graph_path: &Path,
    source: VertexId,
) -> Result<()> {
    let graph = LoadedGraph::load(graph_path, ctx.kind)?;
    let mut observer = ctx.observer();
    let table = dijkstra(graph.as_graph(), source, &mut *observer)
        .with_context(|| format!("failed to run dijkstra from vertex {source}"))?;

    let mut out = io::stdout().lock();
    match ctx.format {
        OutputFormat::Text => write_distance_table(&mut out, &table, &ctx.palette)?,
        OutputFormat::Json => write_json(&mut out, &table)?,
    }
    Ok(())
}
