//! Wayfind library entry points.
//!
//! This crate exposes single-source Dijkstra and point-to-point A* over any
//! graph implementing [`DistanceGraph`], a consistency checker for graph
//! heuristics, and an observer contract that lets a visualizer follow a search
//! step by step. Two concrete graph sources are provided: coordinate graphs
//! with a Euclidean heuristic and grid mazes with a Manhattan heuristic.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing behavior.
//!
//! ```
//! use wayfind_lib::{a_star, dijkstra, AdjacencyGraph, NoopObserver};
//!
//! let graph = AdjacencyGraph::from_edges(
//!     4,
//!     [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0)],
//! )?;
//!
//! let table = dijkstra(&graph, 0, &mut NoopObserver)?;
//! assert_eq!(table.distance(3), 4.0);
//!
//! let path = a_star(&graph, 0, 3, &mut NoopObserver)?
//!     .into_path()
//!     .expect("vertex 3 is reachable");
//! assert_eq!(path.vertices, vec![0, 1, 2, 3]);
//! # Ok::<(), wayfind_lib::Error>(())
//! ```

mod astar;
mod dijkstra;
mod frontier;
mod parse;
mod search;

pub mod config;
pub mod coordinate;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod maze;
pub mod mazegen;
pub mod observer;
pub mod path;
pub mod verify;

pub use astar::{a_star, SearchOutcome};
pub use config::{Cost, VertexId, INFINITE_COST, UNDEFINED_VERTEX};
pub use coordinate::{Coordinate, CoordinateGraph};
pub use dijkstra::{dijkstra, DistanceTable};
pub use error::{Error, Result};
pub use graph::{AdjacencyGraph, DistanceGraph, Edge, HeuristicFn, Neighbor};
pub use heuristic::{
    check_heuristic_consistency, check_heuristic_consistency_for, ConsistencyViolation,
};
pub use maze::{Cell, MazeGraph};
pub use mazegen::{generate_maze, generate_maze_graph};
pub use observer::{
    EdgeStatus, NoopObserver, RecordingObserver, SearchEvent, SearchObserver, TracingObserver,
    VertexStatus,
};
pub use path::{path_cost, Path};
pub use verify::{verify_all_pairs, verify_pairs, VerificationReport};
