//! Grid mazes as graphs: 4-connected, unit step cost, Manhattan heuristic.
//!
//! Vertex ids are row-major: `row * width + col`. File format:
//!
//! ```text
//! <height> <width>
//! ..#.#          one row per line, '.' open and '#' wall
//! ```

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path as FsPath;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::config::{Cost, VertexId, INFINITE_COST};
use crate::error::{Error, Result};
use crate::graph::{DistanceGraph, Neighbor};
use crate::parse::Tokens;

/// Cost of one step between adjacent open cells.
const STEP_COST: Cost = 1.0;

/// Cell of a generated maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Ground,
    Wall,
    Start,
    Destination,
}

impl Cell {
    pub fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// Maze grid exposed through [`DistanceGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGraph {
    width: usize,
    height: usize,
    passable: Vec<bool>,
    start: Option<VertexId>,
    destination: Option<VertexId>,
}

impl MazeGraph {
    /// Build a maze from row-major cells, remembering the start and
    /// destination cells when present.
    pub fn from_cells(cells: &[Cell], width: usize, height: usize) -> Result<Self> {
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(Error::CellCountMismatch {
                expected: width.saturating_mul(height),
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            passable: cells.iter().map(|cell| cell.is_passable()).collect(),
            start: cells.iter().position(|cell| *cell == Cell::Start),
            destination: cells.iter().position(|cell| *cell == Cell::Destination),
        })
    }

    /// Parse the text format described in the module docs.
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = Tokens::new(input);
        let (line, height) = tokens.next_parsed::<usize>("maze height")?;
        let (_, width) = tokens.next_parsed::<usize>("maze width")?;
        let cell_count = width.checked_mul(height).ok_or_else(|| {
            Error::parse(line, format!("maze of {width}x{height} cells is too large"))
        })?;

        // Every cell is one character of the input.
        let mut passable = Vec::with_capacity(cell_count.min(input.len()));
        for row in 0..height {
            let (line, text) = tokens.next_token("maze row")?;
            if text.chars().count() != width {
                return Err(Error::parse(
                    line,
                    format!(
                        "row {row} has {} cells, expected {width}",
                        text.chars().count()
                    ),
                ));
            }
            for symbol in text.chars() {
                match symbol {
                    '.' => passable.push(true),
                    '#' => passable.push(false),
                    other => {
                        return Err(Error::parse(
                            line,
                            format!("unexpected maze symbol '{other}'"),
                        ))
                    }
                }
            }
        }
        tokens.finish()?;

        debug!(width, height, "parsed maze");
        Ok(Self {
            width,
            height,
            passable,
            start: None,
            destination: None,
        })
    }

    /// Read and parse a maze from any reader.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }

    /// Read and parse a maze file.
    pub fn load(path: &FsPath) -> Result<Self> {
        let input = fs::read_to_string(path)?;
        Self::parse(&input)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Start cell of a generated maze.
    pub fn start(&self) -> Option<VertexId> {
        self.start
    }

    /// Destination cell of a generated maze.
    pub fn destination(&self) -> Option<VertexId> {
        self.destination
    }

    /// Whether `vertex` is an open cell. Out-of-range vertices are not.
    pub fn is_passable(&self, vertex: VertexId) -> bool {
        self.passable.get(vertex).copied().unwrap_or(false)
    }

    /// Vertex id of the cell at `(row, col)`.
    pub fn vertex_at(&self, row: usize, col: usize) -> Option<VertexId> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// `(row, col)` of `vertex`.
    pub fn position(&self, vertex: VertexId) -> Option<(usize, usize)> {
        self.contains(vertex)
            .then(|| (vertex / self.width, vertex % self.width))
    }

    fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        match (self.position(a), self.position(b)) {
            (Some((ar, ac)), Some((br, bc))) => ar.abs_diff(br) + ac.abs_diff(bc) == 1,
            _ => false,
        }
    }
}

impl FromStr for MazeGraph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Writes the same text format [`MazeGraph::parse`] reads. Start and
/// destination markers are not part of the format.
impl fmt::Display for MazeGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.height, self.width)?;
        for row in self.passable.chunks(self.width.max(1)) {
            let line: String = row
                .iter()
                .map(|&open| if open { '.' } else { '#' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl DistanceGraph for MazeGraph {
    fn vertex_count(&self) -> usize {
        self.passable.len()
    }

    fn neighbors(&self, vertex: VertexId) -> Result<Vec<Neighbor>> {
        self.ensure_vertex(vertex)?;
        if !self.passable[vertex] {
            return Ok(Vec::new());
        }

        let row = vertex / self.width;
        let col = vertex % self.width;
        // Up, down, left, right.
        let candidates = [
            row.checked_sub(1).map(|r| (r, col)),
            Some((row + 1, col)),
            col.checked_sub(1).map(|c| (row, c)),
            Some((row, col + 1)),
        ];

        Ok(candidates
            .into_iter()
            .flatten()
            .filter_map(|(r, c)| self.vertex_at(r, c))
            .filter(|&next| self.passable[next])
            .map(|next| Neighbor::new(next, STEP_COST))
            .collect())
    }

    fn edge_cost(&self, from: VertexId, to: VertexId) -> Cost {
        if !self.contains(from) || !self.contains(to) {
            return INFINITE_COST;
        }
        if from == to {
            return 0.0;
        }
        if self.passable[from] && self.passable[to] && self.are_adjacent(from, to) {
            STEP_COST
        } else {
            INFINITE_COST
        }
    }

    fn heuristic_estimate(&self, from: VertexId, to: VertexId) -> Cost {
        match (self.position(from), self.position(to)) {
            (Some((fr, fc)), Some((tr, tc))) => (fr.abs_diff(tr) + fc.abs_diff(tc)) as Cost,
            _ => INFINITE_COST,
        }
    }
}
