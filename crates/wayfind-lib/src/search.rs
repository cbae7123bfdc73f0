//! Per-invocation bookkeeping shared by the Dijkstra and A* engines.

use crate::config::{Cost, VertexId, INFINITE_COST, UNDEFINED_VERTEX};

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchRecord {
    pub(crate) g_score: Cost,
    pub(crate) h_score: Cost,
    pub(crate) predecessor: VertexId,
    pub(crate) finalized: bool,
}

impl Default for SearchRecord {
    fn default() -> Self {
        Self {
            g_score: INFINITE_COST,
            h_score: 0.0,
            predecessor: UNDEFINED_VERTEX,
            finalized: false,
        }
    }
}

impl SearchRecord {
    pub(crate) fn predecessor(&self) -> Option<VertexId> {
        (self.predecessor != UNDEFINED_VERTEX).then_some(self.predecessor)
    }
}

/// Records for every vertex of one search. Built fresh for each call so no
/// state survives from a previous search.
#[derive(Debug)]
pub(crate) struct SearchState {
    records: Vec<SearchRecord>,
}

impl SearchState {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            records: vec![SearchRecord::default(); vertex_count],
        }
    }

    pub(crate) fn g_score(&self, vertex: VertexId) -> Cost {
        self.records[vertex].g_score
    }

    /// `g + h`, the A* frontier priority.
    pub(crate) fn f_score(&self, vertex: VertexId) -> Cost {
        let record = &self.records[vertex];
        record.g_score + record.h_score
    }

    pub(crate) fn is_finalized(&self, vertex: VertexId) -> bool {
        self.records[vertex].finalized
    }

    /// Mark `vertex` final. Returns `false` if it already was.
    pub(crate) fn finalize(&mut self, vertex: VertexId) -> bool {
        let record = &mut self.records[vertex];
        if record.finalized {
            return false;
        }
        record.finalized = true;
        true
    }

    /// Seed the search origin.
    pub(crate) fn start(&mut self, source: VertexId, h_score: Cost) {
        let record = &mut self.records[source];
        record.g_score = 0.0;
        record.h_score = h_score;
        record.predecessor = UNDEFINED_VERTEX;
    }

    /// Store an improved cost for `vertex`, reached through `via`.
    pub(crate) fn improve(&mut self, vertex: VertexId, g_score: Cost, h_score: Cost, via: VertexId) {
        let record = &mut self.records[vertex];
        record.g_score = g_score;
        record.h_score = h_score;
        record.predecessor = via;
    }

    /// Follow predecessor links from `target` back to the origin.
    pub(crate) fn path_to(&self, target: VertexId) -> Vec<VertexId> {
        let mut path = Vec::new();
        let mut current = target;
        while current != UNDEFINED_VERTEX {
            path.push(current);
            current = self.records[current].predecessor;
        }
        path.reverse();
        path
    }

    pub(crate) fn into_records(self) -> Vec<SearchRecord> {
        self.records
    }
}

/// Counters reported at the end of a search.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SearchStats {
    pub(crate) finalized: usize,
    pub(crate) relaxed: usize,
    pub(crate) stale: usize,
    pub(crate) peak_frontier: usize,
}
