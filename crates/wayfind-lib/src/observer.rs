//! Instrumentation seam between the search engines and whatever presents them.
//!
//! The engines report every state transition through [`SearchObserver`] and
//! call [`SearchObserver::on_frame`] once per expanded vertex. Observers never
//! feed anything back into the search, so the result of a search does not
//! depend on which observer watched it.

use serde::Serialize;
use tracing::trace;

use crate::config::{Cost, VertexId};
use crate::graph::Edge;

/// Presentation state of a vertex during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexStatus {
    Unknown,
    /// Pushed onto the frontier.
    Enqueued,
    /// Popped from the frontier and being expanded.
    Active,
    /// Cost is final and will not change again.
    Finalized,
    /// The A* goal was popped.
    Goal,
}

/// Presentation state of an edge during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStatus {
    Unknown,
    /// The edge just improved the cost of its target.
    Relaxed,
    /// The edge belongs to the returned path.
    OnPath,
}

/// Callbacks invoked by [`dijkstra`](crate::dijkstra()) and [`a_star`](crate::a_star()).
///
/// Every method defaults to a no-op. Implementations may block in
/// [`on_frame`](Self::on_frame) (pacing an animation, waiting for a key
/// press); the engines tolerate any delay there.
pub trait SearchObserver {
    fn on_vertex_status(&mut self, _vertex: VertexId, _status: VertexStatus) {}

    fn on_edge_status(&mut self, _edge: Edge, _status: EdgeStatus) {}

    /// Scores of `vertex` right after they changed.
    fn on_vertex_metrics(
        &mut self,
        _vertex: VertexId,
        _g_score: Cost,
        _h_score: Cost,
        _predecessor: Option<VertexId>,
        _status: VertexStatus,
    ) {
    }

    /// Called once per outer loop iteration that expands a vertex.
    ///
    /// Stale frontier entries (a vertex already expanded through a cheaper
    /// entry) are discarded without a frame, so the frame count equals the
    /// number of expansions. A* adds one final frame after reporting the goal
    /// and its path edges. A search whose source is its goal emits no frames.
    fn on_frame(&mut self) {}
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_vertex_status(&mut self, vertex: VertexId, status: VertexStatus) {
        (**self).on_vertex_status(vertex, status);
    }

    fn on_edge_status(&mut self, edge: Edge, status: EdgeStatus) {
        (**self).on_edge_status(edge, status);
    }

    fn on_vertex_metrics(
        &mut self,
        vertex: VertexId,
        g_score: Cost,
        h_score: Cost,
        predecessor: Option<VertexId>,
        status: VertexStatus,
    ) {
        (**self).on_vertex_metrics(vertex, g_score, h_score, predecessor, status);
    }

    fn on_frame(&mut self) {
        (**self).on_frame();
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// A single observer callback, captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SearchEvent {
    VertexStatus {
        vertex: VertexId,
        status: VertexStatus,
    },
    EdgeStatus {
        edge: Edge,
        status: EdgeStatus,
    },
    VertexMetrics {
        vertex: VertexId,
        g_score: Cost,
        h_score: Cost,
        predecessor: Option<VertexId>,
        status: VertexStatus,
    },
    Frame,
}

/// Observer that keeps every callback in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Vec<SearchEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SearchEvent> {
        self.events
    }

    /// Number of `on_frame` calls seen.
    pub fn frame_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SearchEvent::Frame))
            .count()
    }

    /// Statuses reported for `vertex` through `on_vertex_status`, in order.
    pub fn statuses_of(&self, vertex: VertexId) -> Vec<VertexStatus> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::VertexStatus { vertex: v, status } if *v == vertex => Some(*status),
                _ => None,
            })
            .collect()
    }

    /// Vertices in the order they were reported finalized.
    pub fn finalized_order(&self) -> Vec<VertexId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::VertexStatus {
                    vertex,
                    status: VertexStatus::Finalized,
                } => Some(*vertex),
                _ => None,
            })
            .collect()
    }

    /// Edges reported with `status`, in order.
    pub fn edges_with(&self, status: EdgeStatus) -> Vec<Edge> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::EdgeStatus { edge, status: s } if *s == status => Some(*edge),
                _ => None,
            })
            .collect()
    }
}

impl SearchObserver for RecordingObserver {
    fn on_vertex_status(&mut self, vertex: VertexId, status: VertexStatus) {
        self.events.push(SearchEvent::VertexStatus { vertex, status });
    }

    fn on_edge_status(&mut self, edge: Edge, status: EdgeStatus) {
        self.events.push(SearchEvent::EdgeStatus { edge, status });
    }

    fn on_vertex_metrics(
        &mut self,
        vertex: VertexId,
        g_score: Cost,
        h_score: Cost,
        predecessor: Option<VertexId>,
        status: VertexStatus,
    ) {
        self.events.push(SearchEvent::VertexMetrics {
            vertex,
            g_score,
            h_score,
            predecessor,
            status,
        });
    }

    fn on_frame(&mut self) {
        self.events.push(SearchEvent::Frame);
    }
}

/// Observer that forwards every callback to `tracing` at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    frame: u64,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames seen so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }
}

impl SearchObserver for TracingObserver {
    fn on_vertex_status(&mut self, vertex: VertexId, status: VertexStatus) {
        trace!(frame = self.frame, vertex, ?status, "vertex status");
    }

    fn on_edge_status(&mut self, edge: Edge, status: EdgeStatus) {
        trace!(frame = self.frame, from = edge.from, to = edge.to, ?status, "edge status");
    }

    fn on_vertex_metrics(
        &mut self,
        vertex: VertexId,
        g_score: Cost,
        h_score: Cost,
        predecessor: Option<VertexId>,
        status: VertexStatus,
    ) {
        trace!(
            frame = self.frame,
            vertex,
            g_score,
            h_score,
            ?predecessor,
            ?status,
            "vertex metrics"
        );
    }

    fn on_frame(&mut self) {
        self.frame += 1;
    }
}
