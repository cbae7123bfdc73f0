mod common;

use std::collections::HashMap;

use wayfind_lib::{
    a_star, dijkstra, generate_maze_graph, AdjacencyGraph, EdgeStatus, NoopObserver,
    RecordingObserver, SearchEvent, VertexStatus,
};

use common::town_graph;

#[test]
fn dijkstra_finalizes_each_vertex_once() {
    let maze = generate_maze_graph(25, 17, 9).expect("valid size");
    let start = maze.start().expect("start placed");
    let mut observer = RecordingObserver::new();
    let table = dijkstra(&maze, start, &mut observer).expect("valid source");

    let mut seen: HashMap<usize, usize> = HashMap::new();
    for vertex in observer.finalized_order() {
        *seen.entry(vertex).or_default() += 1;
    }
    assert!(seen.values().all(|&count| count == 1));
    assert_eq!(seen.len(), table.reachable_count());
    // One frame per expanded vertex.
    assert_eq!(observer.frame_count(), table.reachable_count());
}

#[test]
fn stale_entries_do_not_emit_frames() {
    // Vertex 1 is enqueued at 5 and again at 2; the entry at 5 goes stale.
    let graph = AdjacencyGraph::from_edges(
        4,
        [(0, 1, 5.0), (0, 2, 1.0), (2, 1, 1.0), (1, 3, 10.0)],
    )
    .expect("valid graph");

    let mut observer = RecordingObserver::new();
    let table = dijkstra(&graph, 0, &mut observer).expect("valid source");
    assert_eq!(observer.finalized_order(), vec![0, 2, 1, 3]);
    assert_eq!(observer.frame_count(), table.reachable_count());

    // Three expansions (0, 2, 1), the stale pop of 1, then the goal frame.
    let mut observer = RecordingObserver::new();
    let outcome = a_star(&graph, 0, 3, &mut observer).expect("valid endpoints");
    assert_eq!(outcome.path().map(|path| path.cost), Some(12.0));
    assert_eq!(observer.frame_count(), 4);
    let active = observer
        .statuses_of(1)
        .into_iter()
        .filter(|status| *status == VertexStatus::Active)
        .count();
    assert_eq!(active, 1);
}

#[test]
fn dijkstra_finalizes_in_distance_order() {
    let graph = town_graph();
    let mut observer = RecordingObserver::new();
    let table = dijkstra(&graph, 0, &mut observer).expect("valid source");

    let order = observer.finalized_order();
    assert_eq!(order, vec![0, 1, 4, 2, 3]);
    assert!(order
        .windows(2)
        .all(|pair| table.distance(pair[0]) <= table.distance(pair[1])));
}

#[test]
fn a_star_ends_with_goal_and_path_edges() {
    let graph = town_graph();
    let mut observer = RecordingObserver::new();
    let path = a_star(&graph, 1, 3, &mut observer)
        .expect("valid endpoints")
        .into_path()
        .expect("reachable");

    let last_vertex_event = observer.events().iter().rev().find_map(|event| match event {
        SearchEvent::VertexStatus { vertex, status } => Some((*vertex, *status)),
        _ => None,
    });
    assert_eq!(last_vertex_event, Some((3, VertexStatus::Goal)));
    assert_eq!(
        observer.edges_with(EdgeStatus::OnPath),
        path.edges().collect::<Vec<_>>()
    );
    assert_eq!(observer.events().last(), Some(&SearchEvent::Frame));
    assert!(!observer.finalized_order().contains(&3));
}

#[test]
fn relaxed_edges_carry_metrics() {
    let graph = town_graph();
    let mut observer = RecordingObserver::new();
    a_star(&graph, 0, 3, &mut observer).expect("valid endpoints");

    for pair in observer.events().windows(3) {
        if let SearchEvent::EdgeStatus {
            edge,
            status: EdgeStatus::Relaxed,
        } = pair[0]
        {
            assert_eq!(
                pair[1],
                SearchEvent::VertexStatus {
                    vertex: edge.to,
                    status: VertexStatus::Enqueued
                }
            );
            assert!(matches!(
                pair[2],
                SearchEvent::VertexMetrics { vertex, predecessor: Some(from), .. }
                    if vertex == edge.to && from == edge.from
            ));
        }
    }
}

#[test]
fn observers_do_not_change_results() {
    let maze = generate_maze_graph(31, 21, 4).expect("valid size");
    let start = maze.start().expect("start placed");
    let destination = maze.destination().expect("destination placed");

    let mut recording = RecordingObserver::new();
    let watched = a_star(&maze, start, destination, &mut recording).expect("valid endpoints");
    let unwatched = a_star(&maze, start, destination, &mut NoopObserver).expect("valid endpoints");
    assert_eq!(watched, unwatched);

    let watched = dijkstra(&maze, destination, &mut recording).expect("valid source");
    let unwatched = dijkstra(&maze, destination, &mut NoopObserver).expect("valid source");
    assert_eq!(watched, unwatched);
}

#[test]
fn events_serialize_as_tagged_json() {
    let graph = town_graph();
    let mut observer = RecordingObserver::new();
    a_star(&graph, 0, 1, &mut observer).expect("valid endpoints");

    let json = serde_json::to_value(observer.events()).expect("serializable events");
    let events = json.as_array().expect("array of events");
    assert_eq!(events[0]["event"], "vertex_status");
    assert_eq!(events[0]["status"], "enqueued");
    assert!(events.iter().any(|event| event["event"] == "frame"));
}
