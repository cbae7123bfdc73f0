//! Output formatting for search results.
//!
//! Every command renders either a human-friendly text view or pretty-printed
//! JSON. Writers are generic so the renderers can be tested against a buffer.

use std::collections::HashSet;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use wayfind_lib::verify::VerificationReport;
use wayfind_lib::{ConsistencyViolation, DistanceTable, MazeGraph, Path, VertexId};

use crate::terminal::{format_cost, format_with_separators, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Point-to-point search result as printed by `route` and `maze`.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport<'a> {
    pub source: VertexId,
    pub goal: VertexId,
    pub found: bool,
    pub path: Option<&'a Path>,
    /// Maze drawing with the path overlaid, when the graph is a maze.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maze: Option<Vec<String>>,
}

/// Result of `check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport<'a> {
    pub consistent: bool,
    pub vertex_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<&'a ConsistencyViolation>,
}

/// Serialize `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Render a distance table, one vertex per line.
pub fn write_distance_table<W: Write>(
    out: &mut W,
    table: &DistanceTable,
    palette: &ColorPalette,
) -> io::Result<()> {
    let ColorPalette {
        reset,
        white_bold,
        gray,
        ..
    } = *palette;

    writeln!(
        out,
        "Distances from {white_bold}{}{reset} ({} of {} reachable):",
        table.source(),
        format_with_separators(table.reachable_count()),
        format_with_separators(table.len()),
    )?;
    let width = table.len().saturating_sub(1).to_string().len();
    for (vertex, &distance) in table.distances().iter().enumerate() {
        let via = match table.predecessor(vertex) {
            Some(predecessor) => format!("via {predecessor}"),
            None if vertex == table.source() => "source".to_string(),
            None => "unreachable".to_string(),
        };
        writeln!(
            out,
            "  {vertex:>width$}  {:>10}  {gray}{via}{reset}",
            format_cost(distance),
        )?;
    }
    Ok(())
}

/// Render a route summary.
pub fn write_route<W: Write>(
    out: &mut W,
    report: &RouteReport<'_>,
    palette: &ColorPalette,
) -> io::Result<()> {
    let ColorPalette {
        reset,
        white_bold,
        red,
        ..
    } = *palette;

    if let Some(rows) = &report.maze {
        for row in rows {
            writeln!(out, "{row}")?;
        }
        writeln!(out)?;
    }

    match report.path {
        Some(path) => {
            writeln!(
                out,
                "Path {} -> {}: cost {white_bold}{}{reset} in {} hops",
                report.source,
                report.goal,
                format_cost(path.cost),
                path.hop_count(),
            )?;
            let vertices: Vec<String> = path.vertices.iter().map(ToString::to_string).collect();
            writeln!(out, "  {}", vertices.join(" -> "))
        }
        None => writeln!(
            out,
            "{red}No path{reset} from {} to {}",
            report.source, report.goal
        ),
    }
}

/// Render the outcome of a heuristic consistency check.
pub fn write_check<W: Write>(
    out: &mut W,
    report: &CheckReport<'_>,
    palette: &ColorPalette,
) -> io::Result<()> {
    let ColorPalette {
        reset, green, red, ..
    } = *palette;

    match report.violation {
        None => writeln!(
            out,
            "{green}Heuristic is consistent{reset} ({} vertices)",
            format_with_separators(report.vertex_count)
        ),
        Some(violation) => writeln!(out, "{red}Heuristic is inconsistent{reset}: {violation}"),
    }
}

/// Render a Dijkstra/A* agreement report.
pub fn write_verification<W: Write>(
    out: &mut W,
    report: &VerificationReport,
    palette: &ColorPalette,
) -> io::Result<()> {
    let ColorPalette {
        reset, green, red, ..
    } = *palette;

    let (color, verdict) = if report.is_ok() {
        (green, "A* agrees with Dijkstra")
    } else {
        (red, "A* disagrees with Dijkstra")
    };
    writeln!(
        out,
        "{color}{verdict}{reset}: {} pairs checked, {} paths found, {} mismatches",
        format_with_separators(report.pairs_checked),
        format_with_separators(report.paths_found),
        format_with_separators(report.mismatches.len()),
    )?;
    for mismatch in &report.mismatches {
        let actual = mismatch.actual.map_or_else(|| "none".to_string(), format_cost);
        writeln!(
            out,
            "  {} -> {}: {:?} (expected {}, got {})",
            mismatch.source,
            mismatch.goal,
            mismatch.kind,
            format_cost(mismatch.expected),
            actual,
        )?;
    }
    Ok(())
}

/// Draw `maze` row by row with `path` overlaid.
///
/// `#` is a wall, `.` open ground, `*` a path cell, `S` and `G` the endpoints.
/// Without a path the maze's own start and destination are marked.
pub fn render_maze(maze: &MazeGraph, path: Option<&Path>, palette: &ColorPalette) -> Vec<String> {
    let ColorPalette {
        reset,
        tag_start,
        tag_goal,
        gray,
        green,
        ..
    } = *palette;

    let on_path: HashSet<VertexId> = path
        .map(|path| path.vertices.iter().copied().collect())
        .unwrap_or_default();
    let start = path.and_then(Path::source).or(maze.start());
    let goal = path.and_then(Path::goal).or(maze.destination());

    (0..maze.height())
        .map(|row| {
            let mut line = String::new();
            for col in 0..maze.width() {
                let Some(vertex) = maze.vertex_at(row, col) else {
                    continue;
                };
                let cell = if Some(vertex) == start {
                    format!("{tag_start}S{reset}")
                } else if Some(vertex) == goal {
                    format!("{tag_goal}G{reset}")
                } else if on_path.contains(&vertex) {
                    format!("{green}*{reset}")
                } else if maze.is_passable(vertex) {
                    ".".to_string()
                } else {
                    format!("{gray}#{reset}")
                };
                line.push_str(&cell);
            }
            line
        })
        .collect()
}
