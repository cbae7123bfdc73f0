//! Procedural maze generation.
//!
//! Mazes are carved with a randomised depth-first walk over the cells at odd
//! coordinates, which yields a perfect maze: every open cell is reachable and
//! there is exactly one simple path between any two of them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{MAX_MAZE_SIDE, MIN_MAZE_SIDE};
use crate::error::{Error, Result};
use crate::maze::{Cell, MazeGraph};

/// Generate a `width` x `height` maze as row-major cells.
///
/// The same seed always produces the same maze. The start is the first open
/// cell in row-major order and the destination the last one.
pub fn generate_maze(width: usize, height: usize, seed: u64) -> Result<Vec<Cell>> {
    let side_range = MIN_MAZE_SIDE..=MAX_MAZE_SIDE;
    if !side_range.contains(&width) || !side_range.contains(&height) {
        return Err(Error::InvalidMazeSize {
            width,
            height,
            min: MIN_MAZE_SIDE,
            max: MAX_MAZE_SIDE,
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut cells = vec![Cell::Wall; width * height];
    let index = |row: usize, col: usize| row * width + col;

    cells[index(1, 1)] = Cell::Ground;
    let mut stack = vec![(1usize, 1usize)];
    let mut options = Vec::with_capacity(4);

    while let Some(&(row, col)) = stack.last() {
        options.clear();
        if row >= 3 {
            options.push((row - 2, col));
        }
        if row + 2 <= height - 2 {
            options.push((row + 2, col));
        }
        if col >= 3 {
            options.push((row, col - 2));
        }
        if col + 2 <= width - 2 {
            options.push((row, col + 2));
        }
        options.retain(|&(r, c)| cells[index(r, c)] == Cell::Wall);

        if options.is_empty() {
            stack.pop();
            continue;
        }

        let (next_row, next_col) = options[rng.random_range(0..options.len())];
        cells[index((row + next_row) / 2, (col + next_col) / 2)] = Cell::Ground;
        cells[index(next_row, next_col)] = Cell::Ground;
        stack.push((next_row, next_col));
    }

    let first = cells.iter().position(|cell| cell.is_passable());
    let last = cells.iter().rposition(|cell| cell.is_passable());
    if let (Some(first), Some(last)) = (first, last) {
        cells[first] = Cell::Start;
        cells[last] = Cell::Destination;
    }

    debug!(
        width,
        height,
        seed,
        open = cells.iter().filter(|cell| cell.is_passable()).count(),
        "generated maze"
    );
    Ok(cells)
}

/// Generate a maze and wrap it as a [`MazeGraph`] with start and destination set.
pub fn generate_maze_graph(width: usize, height: usize, seed: u64) -> Result<MazeGraph> {
    let cells = generate_maze(width, height, seed)?;
    MazeGraph::from_cells(&cells, width, height)
}
