//! Line-oriented search visualizer.
//!
//! Prints every observer callback as one line and paces the search by
//! sleeping in [`SearchObserver::on_frame`].

use std::io::Write;
use std::thread;
use std::time::Duration;

use wayfind_lib::{Cost, Edge, EdgeStatus, SearchObserver, VertexId, VertexStatus};

use crate::terminal::{format_cost, ColorPalette};

/// [`SearchObserver`] that narrates a search to a writer.
///
/// Write errors are ignored: a closed pipe must not abort the search.
#[derive(Debug)]
pub struct TextVisualizer<W: Write> {
    out: W,
    palette: ColorPalette,
    frame_delay: Duration,
    frames: usize,
}

impl<W: Write> TextVisualizer<W> {
    pub fn new(out: W, palette: ColorPalette, frame_delay: Duration) -> Self {
        Self {
            out,
            palette,
            frame_delay,
            frames: 0,
        }
    }

    /// Number of frames seen so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn vertex_color(&self, status: VertexStatus) -> &'static str {
        match status {
            VertexStatus::Unknown => self.palette.gray,
            VertexStatus::Enqueued => self.palette.cyan,
            VertexStatus::Active => self.palette.white_bold,
            VertexStatus::Finalized => self.palette.green,
            VertexStatus::Goal => self.palette.tag_goal,
        }
    }
}

fn vertex_label(status: VertexStatus) -> &'static str {
    match status {
        VertexStatus::Unknown => "unknown",
        VertexStatus::Enqueued => "enqueued",
        VertexStatus::Active => "active",
        VertexStatus::Finalized => "finalized",
        VertexStatus::Goal => "goal",
    }
}

fn edge_label(status: EdgeStatus) -> &'static str {
    match status {
        EdgeStatus::Unknown => "unknown",
        EdgeStatus::Relaxed => "relaxed",
        EdgeStatus::OnPath => "on path",
    }
}

impl<W: Write> SearchObserver for TextVisualizer<W> {
    fn on_vertex_status(&mut self, vertex: VertexId, status: VertexStatus) {
        let color = self.vertex_color(status);
        let reset = self.palette.reset;
        let _ = writeln!(
            self.out,
            "vertex {vertex} {color}{}{reset}",
            vertex_label(status)
        );
    }

    fn on_edge_status(&mut self, edge: Edge, status: EdgeStatus) {
        let color = match status {
            EdgeStatus::OnPath => self.palette.green,
            EdgeStatus::Relaxed => self.palette.yellow,
            EdgeStatus::Unknown => self.palette.gray,
        };
        let reset = self.palette.reset;
        let _ = writeln!(self.out, "edge {edge} {color}{}{reset}", edge_label(status));
    }

    fn on_vertex_metrics(
        &mut self,
        vertex: VertexId,
        g_score: Cost,
        h_score: Cost,
        predecessor: Option<VertexId>,
        _status: VertexStatus,
    ) {
        let gray = self.palette.gray;
        let reset = self.palette.reset;
        let via = predecessor.map_or_else(|| "-".to_string(), |p| p.to_string());
        let _ = writeln!(
            self.out,
            "  {gray}{vertex}: g={} h={} f={} via {via}{reset}",
            format_cost(g_score),
            format_cost(h_score),
            format_cost(g_score + h_score),
        );
    }

    fn on_frame(&mut self) {
        self.frames += 1;
        let _ = writeln!(self.out, "-- frame {} --", self.frames);
        let _ = self.out.flush();
        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_lib::{a_star, AdjacencyGraph};

    #[test]
    fn narrates_a_search() {
        let graph = AdjacencyGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 2.0)]).expect("valid graph");
        let mut visualizer = TextVisualizer::new(Vec::new(), ColorPalette::plain(), Duration::ZERO);
        let outcome = a_star(&graph, 0, 2, &mut visualizer).expect("valid endpoints");
        assert!(outcome.is_found());

        // Expansions of 0 and 1, plus the final frame at the goal.
        assert_eq!(visualizer.frames(), 3);
        let text = String::from_utf8(visualizer.into_inner()).expect("utf-8 output");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "vertex 0 enqueued");
        assert_eq!(lines[1], "  0: g=0 h=0 f=0 via -");
        assert!(lines.contains(&"edge 1 -> 2 relaxed"));
        assert!(lines.contains(&"  2: g=3 h=0 f=3 via 1"));
        assert!(lines.contains(&"vertex 2 goal"));
        assert!(lines.contains(&"edge 0 -> 1 on path"));
        assert_eq!(lines.last(), Some(&"-- frame 3 --"));
    }
}
