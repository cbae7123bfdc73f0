#![allow(dead_code)]

use std::path::PathBuf;

use wayfind_lib::{CoordinateGraph, MazeGraph};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Six towns: 0..=4 are connected, 5 is isolated.
pub fn town_graph() -> CoordinateGraph {
    CoordinateGraph::load(&fixtures_dir().join("town.graph")).expect("load fixture town.graph")
}

/// Three collinear vertices joined by edges far shorter than their distance.
pub fn shortcut_graph() -> CoordinateGraph {
    CoordinateGraph::load(&fixtures_dir().join("shortcut.graph"))
        .expect("load fixture shortcut.graph")
}

/// 5x7 maze, open along its whole border.
pub fn small_maze() -> MazeGraph {
    MazeGraph::load(&fixtures_dir().join("small.maze")).expect("load fixture small.maze")
}
