//! Subcommand handlers.
//!
//! Each module handles one CLI subcommand; `main.rs` only parses arguments and
//! dispatches here.

pub mod check;
pub mod dijkstra;
pub mod maze;
pub mod route;
pub mod verify;

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;

use wayfind_lib::{
    CoordinateGraph, DistanceGraph, MazeGraph, NoopObserver, SearchObserver, TracingObserver,
};

use crate::output::OutputFormat;
use crate::terminal::ColorPalette;
use crate::visualizer::TextVisualizer;

/// File format of `--graph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GraphKind {
    /// Weighted edge list with planar coordinates.
    #[default]
    Coordinate,
    /// Grid of '.' and '#' cells.
    Maze,
}

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub kind: GraphKind,
    pub format: OutputFormat,
    pub palette: ColorPalette,
    pub trace: bool,
    pub frame_delay: Duration,
}

impl CommandContext {
    /// Observer for the next search.
    ///
    /// `--trace` narrates the search on stderr so stdout stays parseable;
    /// otherwise events only reach `tracing` at trace level.
    pub fn observer(&self) -> Box<dyn SearchObserver> {
        if self.trace {
            Box::new(TextVisualizer::new(
                io::stderr(),
                self.palette,
                self.frame_delay,
            ))
        } else if tracing::enabled!(target: "wayfind_lib", tracing::Level::TRACE) {
            Box::new(TracingObserver::new())
        } else {
            Box::new(NoopObserver)
        }
    }

    /// Palette for output that ends up in JSON.
    pub fn output_palette(&self) -> ColorPalette {
        match self.format {
            OutputFormat::Text => self.palette,
            OutputFormat::Json => ColorPalette::plain(),
        }
    }
}

/// A graph file loaded according to `--kind`.
#[derive(Debug)]
pub enum LoadedGraph {
    Coordinate(CoordinateGraph),
    Maze(MazeGraph),
}

impl LoadedGraph {
    pub fn load(path: &Path, kind: GraphKind) -> Result<Self> {
        let graph = match kind {
            GraphKind::Coordinate => CoordinateGraph::load(path).map(LoadedGraph::Coordinate),
            GraphKind::Maze => MazeGraph::load(path).map(LoadedGraph::Maze),
        };
        graph.with_context(|| format!("failed to load graph from {}", path.display()))
    }

    pub fn as_graph(&self) -> &dyn DistanceGraph {
        match self {
            LoadedGraph::Coordinate(graph) => graph,
            LoadedGraph::Maze(maze) => maze,
        }
    }

    pub fn maze(&self) -> Option<&MazeGraph> {
        match self {
            LoadedGraph::Maze(maze) => Some(maze),
            LoadedGraph::Coordinate(_) => None,
        }
    }
}
