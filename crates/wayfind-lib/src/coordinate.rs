//! Directed graphs whose vertices carry planar coordinates.
//!
//! File format (whitespace separated):
//!
//! ```text
//! <vertex count> <edge count>
//! <from> <to> <cost>      one line per edge
//! <x> <y>                 one line per vertex
//! ```
//!
//! The heuristic is the Euclidean distance between coordinates, which is
//! consistent as long as no edge is shorter than the straight line between its
//! endpoints.

use std::fs;
use std::io::Read;
use std::path::Path as FsPath;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{Cost, VertexId, INFINITE_COST};
use crate::error::{Error, Result};
use crate::graph::{cheapest_edge, DistanceGraph, Neighbor};
use crate::parse::Tokens;

/// Planar position of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Graph with one [`Coordinate`] per vertex and a Euclidean heuristic.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGraph {
    coordinates: Vec<Coordinate>,
    adjacency: Vec<Vec<Neighbor>>,
    edge_count: usize,
}

impl CoordinateGraph {
    /// Graph over the given vertex positions, without edges.
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        let adjacency = vec![Vec::new(); coordinates.len()];
        Self {
            coordinates,
            adjacency,
            edge_count: 0,
        }
    }

    /// Add the directed edge `from -> to`.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, cost: Cost) -> Result<()> {
        self.ensure_vertex(from)?;
        self.ensure_vertex(to)?;
        if cost.is_nan() || cost < 0.0 {
            return Err(Error::InvalidCost { from, to, cost });
        }
        if self.adjacency[from].iter().any(|edge| edge.target == to) {
            warn!(from, to, "duplicate edge; the cheapest one is used for edge_cost");
        }
        self.adjacency[from].push(Neighbor::new(to, cost));
        self.edge_count += 1;
        Ok(())
    }

    /// Parse the text format described in the module docs.
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = Tokens::new(input);
        let (_, vertex_count) = tokens.next_parsed::<usize>("vertex count")?;
        let (_, edge_count) = tokens.next_parsed::<usize>("edge count")?;

        // Header counts are untrusted; never reserve more than the input holds.
        let mut edges = Vec::with_capacity(edge_count.min(tokens.remaining() / 3));
        for _ in 0..edge_count {
            let (line, from) = tokens.next_parsed::<VertexId>("edge source")?;
            let (_, to) = tokens.next_parsed::<VertexId>("edge target")?;
            let (_, cost) = tokens.next_parsed::<Cost>("edge cost")?;
            if from >= vertex_count || to >= vertex_count {
                return Err(Error::parse(
                    line,
                    format!("edge {from} -> {to} references a vertex outside 0..{vertex_count}"),
                ));
            }
            if cost.is_nan() || cost < 0.0 {
                return Err(Error::parse(line, format!("edge {from} -> {to} has invalid cost {cost}")));
            }
            edges.push((from, to, cost));
        }

        let mut coordinates = Vec::with_capacity(vertex_count.min(tokens.remaining() / 2));
        for _ in 0..vertex_count {
            let (line, x) = tokens.next_parsed::<f64>("x coordinate")?;
            let (_, y) = tokens.next_parsed::<f64>("y coordinate")?;
            if !x.is_finite() || !y.is_finite() {
                return Err(Error::parse(line, "coordinates must be finite"));
            }
            coordinates.push(Coordinate::new(x, y));
        }
        tokens.finish()?;

        let mut graph = Self::new(coordinates);
        for (from, to, cost) in edges {
            graph.add_edge(from, to, cost)?;
        }
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count,
            "parsed coordinate graph"
        );
        Ok(graph)
    }

    /// Read and parse a graph from any reader.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }

    /// Read and parse a graph file.
    pub fn load(path: &FsPath) -> Result<Self> {
        let input = fs::read_to_string(path)?;
        Self::parse(&input)
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn coordinate(&self, vertex: VertexId) -> Option<Coordinate> {
        self.coordinates.get(vertex).copied()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl FromStr for CoordinateGraph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl DistanceGraph for CoordinateGraph {
    fn vertex_count(&self) -> usize {
        self.coordinates.len()
    }

    fn neighbors(&self, vertex: VertexId) -> Result<Vec<Neighbor>> {
        self.ensure_vertex(vertex)?;
        Ok(self.adjacency[vertex].clone())
    }

    fn edge_cost(&self, from: VertexId, to: VertexId) -> Cost {
        if !self.contains(from) || !self.contains(to) {
            return INFINITE_COST;
        }
        cheapest_edge(&self.adjacency[from], from, to)
    }

    fn heuristic_estimate(&self, from: VertexId, to: VertexId) -> Cost {
        match (self.coordinate(from), self.coordinate(to)) {
            (Some(a), Some(b)) => a.distance_to(&b),
            _ => INFINITE_COST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "3 3\n0 1 5\n1 2 4\n0 2 10\n0 0\n3 4\n3 8\n";

    #[test]
    fn parses_edges_and_coordinates() {
        let graph: CoordinateGraph = TRIANGLE.parse().expect("valid input");
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.coordinate(1), Some(Coordinate::new(3.0, 4.0)));
        assert_eq!(graph.edge_cost(0, 1), 5.0);
        assert_eq!(graph.edge_cost(1, 0), INFINITE_COST);
        assert_eq!(graph.edge_cost(2, 2), 0.0);
        assert_eq!(
            graph.neighbors(0).expect("in range"),
            vec![Neighbor::new(1, 5.0), Neighbor::new(2, 10.0)]
        );
    }

    #[test]
    fn euclidean_heuristic() {
        let graph = CoordinateGraph::parse(TRIANGLE).expect("valid input");
        assert_eq!(graph.heuristic_estimate(0, 1), 5.0);
        assert_eq!(graph.heuristic_estimate(1, 1), 0.0);
        assert_eq!(graph.heuristic_estimate(0, 3), INFINITE_COST);
    }

    #[test]
    fn rejects_edges_outside_vertex_range() {
        let err = CoordinateGraph::parse("2 1\n0 5 1\n0 0\n1 1\n").expect_err("bad edge");
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_negative_costs_and_missing_coordinates() {
        let err = CoordinateGraph::parse("2 1\n0 1 -1\n0 0\n1 1\n").expect_err("negative");
        assert!(matches!(err, Error::Parse { line: 2, .. }));

        let err = CoordinateGraph::parse("2 1\n0 1 1\n0 0\n").expect_err("short");
        assert!(err.to_string().contains("x coordinate"));
    }

    #[test]
    fn oversized_header_counts_are_parse_errors() {
        let err = CoordinateGraph::parse("1 18446744073709551615\n").expect_err("huge edge count");
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("edge source"));

        let err = CoordinateGraph::parse("18446744073709551615 0\n0 0\n")
            .expect_err("huge vertex count");
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("x coordinate"));
    }

    #[test]
    fn empty_graph_is_valid() {
        let graph = CoordinateGraph::parse("0 0\n").expect("valid input");
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn reads_from_reader() {
        let graph = CoordinateGraph::from_reader(TRIANGLE.as_bytes()).expect("valid input");
        assert_eq!(graph.edge_count(), 3);
    }
}
