use thiserror::Error;

use crate::config::{Cost, VertexId};
use crate::heuristic::ConsistencyViolation;

/// Convenient result alias for the wayfind library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A vertex index outside `[0, vertex_count)` was passed in or produced.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// The heuristic breaks the triangle inequality somewhere. A* still runs,
    /// but its paths are no longer guaranteed to be optimal.
    #[error("heuristic is inconsistent: {0}")]
    HeuristicInconsistent(ConsistencyViolation),

    /// Raised when an edge is added with a negative or NaN cost.
    #[error("edge {from} -> {to} has invalid cost {cost}")]
    InvalidCost {
        from: VertexId,
        to: VertexId,
        cost: Cost,
    },

    /// Raised when a graph file cannot be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Raised when the maze generator is asked for a degenerate or oversized grid.
    #[error("maze of {width}x{height} is out of range; both sides must be between {min} and {max}")]
    InvalidMazeSize {
        width: usize,
        height: usize,
        min: usize,
        max: usize,
    },

    /// Raised when a maze is built from a cell list of the wrong length.
    #[error("expected {expected} maze cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    /// Raised when evaluating the cost of a path without vertices.
    #[error("path is empty")]
    EmptyPath,

    /// Raised when consecutive path vertices are not joined by an edge.
    #[error("no edge between {from} and {to}")]
    MissingEdge { from: VertexId, to: VertexId },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn out_of_range(vertex: VertexId, vertex_count: usize) -> Self {
        Error::OutOfRange {
            vertex,
            vertex_count,
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}
