//! Maze command handler: generate, solve and draw a random maze.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use wayfind_lib::{a_star, generate_maze_graph, verify_pairs};

use super::CommandContext;
use crate::output::{render_maze, write_json, write_route, OutputFormat, RouteReport};

#[derive(Debug, Serialize)]
struct MazeReport<'a> {
    width: usize,
    height: usize,
    seed: u64,
    #[serde(flatten)]
    route: RouteReport<'a>,
}

/// Generate a maze, solve it from start to destination with A*, cross-check
/// the result with Dijkstra and print the maze with the path drawn in.
pub fn handle_maze_command(
    ctx: &CommandContext,
    width: usize,
    height: usize,
    seed: u64,
    save: Option<&Path>,
) -> Result<()> {
    let maze = generate_maze_graph(width, height, seed)
        .with_context(|| format!("failed to generate a {width}x{height} maze"))?;
    let (Some(start), Some(destination)) = (maze.start(), maze.destination()) else {
        bail!("generated maze has no start or destination");
    };

    if let Some(path) = save {
        fs::write(path, maze.to_string())
            .with_context(|| format!("failed to save maze to {}", path.display()))?;
    }

    let mut observer = ctx.observer();
    let outcome = a_star(&maze, start, destination, &mut *observer)
        .context("failed to solve the generated maze")?;
    let verification = verify_pairs(&maze, &[(start, destination)])
        .context("failed to cross-check the maze solution")?;
    if !verification.is_ok() {
        bail!("A* and Dijkstra disagree on the generated maze");
    }

    let report = MazeReport {
        width,
        height,
        seed,
        route: RouteReport {
            source: start,
            goal: destination,
            found: outcome.is_found(),
            path: outcome.path(),
            maze: Some(render_maze(&maze, outcome.path(), &ctx.output_palette())),
        },
    };

    let mut out = io::stdout().lock();
    match ctx.format {
        OutputFormat::Text => {
            writeln!(out, "Maze {width}x{height}, seed {seed}")?;
            write_route(&mut out, &report.route, &ctx.palette)?;
            if let Some(path) = save {
                writeln!(out, "Saved maze to {}", path.display())?;
            }
        }
        OutputFormat::Json => write_json(&mut out, &report)?,
    }
    Ok(())
}
