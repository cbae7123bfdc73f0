//! Process-wide constants shared by the graph sources and search engines.
//!
//! Everything here is read-only for the lifetime of the process.

/// Dense, zero-based vertex index.
pub type VertexId = usize;

/// Non-negative edge or path cost.
pub type Cost = f64;

/// Sentinel cost meaning "no edge" or "unreachable".
pub const INFINITE_COST: Cost = f64::INFINITY;

/// Sentinel vertex meaning "no predecessor".
///
/// Never a valid [`VertexId`] for any graph that fits in memory.
pub const UNDEFINED_VERTEX: VertexId = usize::MAX;

/// Relative slack applied when comparing accumulated floating point costs.
///
/// Euclidean estimates over real coordinates routinely differ from the summed
/// edge costs in the last few bits.
pub const CONSISTENCY_TOLERANCE: f64 = 1e-9;

/// Graphs up to this many vertices are checked against every possible goal.
pub const EXHAUSTIVE_GOAL_LIMIT: usize = 256;

/// Number of evenly spaced goals checked on larger graphs.
pub const SAMPLED_GOALS: usize = 16;

/// Smallest side length accepted by the maze generator.
pub const MIN_MAZE_SIDE: usize = 5;

/// Largest side length accepted by the maze generator.
pub const MAX_MAZE_SIDE: usize = 4096;

/// Returns `true` when `a` and `b` agree within [`CONSISTENCY_TOLERANCE`].
///
/// Two infinite costs compare equal.
pub fn costs_match(a: Cost, b: Cost) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= CONSISTENCY_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Returns `true` when `a <= b` up to [`CONSISTENCY_TOLERANCE`].
pub fn cost_at_most(a: Cost, b: Cost) -> bool {
    if b.is_infinite() {
        return true;
    }
    a <= b + CONSISTENCY_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}
