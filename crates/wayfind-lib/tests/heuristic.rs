mod common;

use wayfind_lib::{
    check_heuristic_consistency, check_heuristic_consistency_for, ConsistencyViolation, Edge,
    Error,
};

use common::{shortcut_graph, small_maze, town_graph};

#[test]
fn euclidean_heuristic_is_consistent_on_fixture() {
    check_heuristic_consistency(&town_graph()).expect("edges are never shorter than the crow flies");
}

#[test]
fn manhattan_heuristic_is_consistent_on_maze() {
    check_heuristic_consistency(&small_maze()).expect("unit steps on a grid");
}

#[test]
fn shortcut_edges_break_consistency() {
    let graph = shortcut_graph();
    let err = check_heuristic_consistency(&graph).expect_err("shortcut edges");
    let violation = match err {
        Error::HeuristicInconsistent(violation) => violation,
        other => panic!("unexpected error: {other}"),
    };

    assert_eq!(violation.goal(), 1);
    assert_eq!(violation.edge(), Some(Edge::new(0, 1)));
    assert!(matches!(
        violation,
        ConsistencyViolation::Edge {
            edge_cost,
            estimate_from,
            estimate_to,
            ..
        } if edge_cost == 1.0 && estimate_from == 10.0 && estimate_to == 0.0
    ));
}

#[test]
fn single_goal_check() {
    let graph = shortcut_graph();
    // Estimates towards 0 grow along every edge.
    check_heuristic_consistency_for(&graph, 0).expect("consistent towards 0");
    assert!(check_heuristic_consistency_for(&graph, 2).is_err());
    assert!(matches!(
        check_heuristic_consistency_for(&graph, 3),
        Err(Error::OutOfRange { vertex: 3, .. })
    ));
}
