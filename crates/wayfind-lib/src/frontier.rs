use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::config::{Cost, VertexId};

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    vertex: VertexId,
    priority: FloatOrd,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of pending vertices.
///
/// A vertex may be pushed several times; callers discard the stale copies
/// when they pop a vertex that is already finalized. Equal priorities pop the
/// lower vertex id first.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<QueueEntry>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, vertex: VertexId, priority: Cost) {
        self.heap.push(QueueEntry {
            vertex,
            priority: FloatOrd(priority),
        });
    }

    /// Remove the entry with the smallest priority.
    pub(crate) fn pop(&mut self) -> Option<(VertexId, Cost)> {
        self.heap
            .pop()
            .map(|entry| (entry.vertex, entry.priority.0))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
