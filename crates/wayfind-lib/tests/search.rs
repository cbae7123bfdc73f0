mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wayfind_lib::{
    a_star, check_heuristic_consistency, dijkstra, verify_all_pairs, AdjacencyGraph,
    DistanceGraph, Error, NoopObserver, SearchOutcome, INFINITE_COST,
};

use common::town_graph;

#[test]
fn dijkstra_distances_on_fixture() {
    let graph = town_graph();
    let table = dijkstra(&graph, 0, &mut NoopObserver).expect("valid source");

    assert_eq!(table.distances(), &[0.0, 3.0, 6.0, 9.0, 4.0, INFINITE_COST]);
    // The direct 0 -> 2 edge (6) beats both two-hop detours (7).
    assert_eq!(table.predecessor(2), Some(0));
    assert_eq!(table.predecessor(3), Some(2));
    assert_eq!(table.predecessor(0), None);
    assert!(!table.is_reachable(5));
    assert_eq!(table.reachable_count(), 5);
}

#[test]
fn a_star_matches_dijkstra_on_fixture() {
    let graph = town_graph();
    let table = dijkstra(&graph, 0, &mut NoopObserver).expect("valid source");

    for goal in 1..5 {
        let path = a_star(&graph, 0, goal, &mut NoopObserver)
            .expect("valid endpoints")
            .into_path()
            .expect("goal reachable");
        assert_eq!(path.cost, table.distance(goal), "goal {goal}");
        assert_eq!(path.source(), Some(0));
        assert_eq!(path.goal(), Some(goal));
    }

    let path = a_star(&graph, 0, 3, &mut NoopObserver)
        .expect("valid endpoints")
        .into_path()
        .expect("goal reachable");
    assert_eq!(path.vertices, vec![0, 2, 3]);
    assert_eq!(path.cost, 9.0);
}

#[test]
fn isolated_vertex_is_not_found() {
    let graph = town_graph();
    let outcome = a_star(&graph, 0, 5, &mut NoopObserver).expect("valid endpoints");
    assert_eq!(outcome, SearchOutcome::NotFound);

    let outcome = a_star(&graph, 5, 0, &mut NoopObserver).expect("valid endpoints");
    assert_eq!(outcome, SearchOutcome::NotFound);
}

#[test]
fn repeated_searches_are_identical() {
    let graph = town_graph();
    let first = dijkstra(&graph, 1, &mut NoopObserver).expect("valid source");
    let second = dijkstra(&graph, 1, &mut NoopObserver).expect("valid source");
    assert_eq!(first, second);

    let first = a_star(&graph, 1, 3, &mut NoopObserver).expect("valid endpoints");
    let second = a_star(&graph, 1, 3, &mut NoopObserver).expect("valid endpoints");
    assert_eq!(first, second);
}

#[test]
fn edgeless_graph() {
    let graph = AdjacencyGraph::new(4);
    let table = dijkstra(&graph, 2, &mut NoopObserver).expect("valid source");
    assert_eq!(
        table.distances(),
        &[INFINITE_COST, INFINITE_COST, 0.0, INFINITE_COST]
    );

    for goal in [0, 1, 3] {
        let outcome = a_star(&graph, 2, goal, &mut NoopObserver).expect("valid endpoints");
        assert!(!outcome.is_found());
    }
}

#[test]
fn source_equals_goal() {
    let graph = town_graph();
    let path = a_star(&graph, 4, 4, &mut NoopObserver)
        .expect("valid endpoints")
        .into_path()
        .expect("trivial path");
    assert_eq!(path.vertices, vec![4]);
    assert_eq!(path.cost, 0.0);
    assert_eq!(path.hop_count(), 0);
}

#[test]
fn out_of_range_vertices_are_errors() {
    let graph = town_graph();
    assert!(matches!(
        dijkstra(&graph, 6, &mut NoopObserver),
        Err(Error::OutOfRange {
            vertex: 6,
            vertex_count: 6
        })
    ));
    assert!(matches!(
        a_star(&graph, 0, 99, &mut NoopObserver),
        Err(Error::OutOfRange { vertex: 99, .. })
    ));
    assert!(graph.neighbors(6).is_err());
}

#[test]
fn engines_accept_trait_objects() {
    let graph = town_graph();
    let graph: &dyn DistanceGraph = &graph;
    let mut observer = NoopObserver;
    let observer: &mut dyn wayfind_lib::SearchObserver = &mut observer;

    let table = dijkstra(graph, 0, observer).expect("valid source");
    let outcome = a_star(graph, 0, 3, observer).expect("valid endpoints");
    assert_eq!(outcome.path().map(|path| path.cost), Some(table.distance(3)));
}

/// Random sparse digraph over points in a 100x100 square. Every edge costs at
/// least the straight-line distance between its endpoints.
fn random_points_and_edges(seed: u64) -> (Vec<(f64, f64)>, Vec<(usize, usize, f64)>) {
    const VERTICES: usize = 24;
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..VERTICES)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();

    let mut edges = Vec::new();
    for from in 0..VERTICES {
        for _ in 0..3 {
            let to = rng.random_range(0..VERTICES);
            if to == from {
                continue;
            }
            let (dx, dy) = (points[from].0 - points[to].0, points[from].1 - points[to].1);
            let cost = dx.hypot(dy) * rng.random_range(1.0..2.0);
            edges.push((from, to, cost));
        }
    }
    (points, edges)
}

#[test]
fn a_star_matches_dijkstra_on_random_graphs() {
    for seed in 0..8 {
        let (points, edges) = random_points_and_edges(seed);

        // A zero heuristic is consistent on any graph.
        let plain = AdjacencyGraph::from_edges(points.len(), edges.iter().copied())
            .expect("valid graph");
        check_heuristic_consistency(&plain).expect("zero heuristic is consistent");
        let report = verify_all_pairs(&plain).expect("valid graph");
        assert!(report.is_ok(), "seed {seed}: {:?}", report.mismatches);

        let euclidean = AdjacencyGraph::from_edges(points.len(), edges)
            .expect("valid graph")
            .with_heuristic(move |from, to| {
                let (dx, dy) = (points[from].0 - points[to].0, points[from].1 - points[to].1);
                dx.hypot(dy)
            });
        check_heuristic_consistency(&euclidean).expect("euclidean heuristic is consistent");
        let report = verify_all_pairs(&euclidean).expect("valid graph");
        assert!(report.is_ok(), "seed {seed}: {:?}", report.mismatches);
        assert_eq!(report.pairs_checked, 24 * 23);
    }
}
