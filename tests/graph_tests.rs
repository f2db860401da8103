//! Graph store tests.
//!
//! Vertex and road bookkeeping: insert and replace semantics, directed
//! independence of road pairs, removal filters, and deterministic
//! listings.

mod fixtures;

use pretty_assertions::assert_eq;

use tsp_planner::error::GraphError;
use tsp_planner::graph::TownGraph;
use tsp_planner::manager::TownGraphManager;
use tsp_planner::town::Town;

use fixtures::east_coast;

// ============================================================================
// Helpers
// ============================================================================

fn town(name: &str) -> Town {
    Town::new(name)
}

/// A four-town graph: A<->B, A->C, C->A, B->D.
fn sample() -> TownGraph {
    let mut graph = TownGraph::new();
    for name in ["A", "B", "C", "D"] {
        graph.add_vertex(town(name));
    }
    graph.add_edge(&town("A"), &town("B"), 10, "AB").unwrap();
    graph.add_edge(&town("B"), &town("A"), 12, "BA").unwrap();
    graph.add_edge(&town("A"), &town("C"), 7, "AC").unwrap();
    graph.add_edge(&town("C"), &town("A"), 7, "CA").unwrap();
    graph.add_edge(&town("B"), &town("D"), 3, "BD").unwrap();
    graph
}

// ============================================================================
// Vertex bookkeeping
// ============================================================================

#[test]
fn test_adding_a_town_twice_changes_nothing() {
    let mut graph = sample();
    assert!(!graph.add_vertex(town("A")));
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edges().count(), 5);
}

#[test]
fn test_removing_a_town_scrubs_roads_in_both_directions() {
    let mut graph = sample();
    assert!(graph.remove_vertex(&town("A")));

    assert!(!graph.contains_vertex(&town("A")));
    assert!(graph.edges().all(|road| !road.contains(&town("A"))));
    // Only B->D survives.
    assert_eq!(graph.edges().count(), 1);
    assert!(graph.contains_edge(&town("B"), &town("D")));
}

#[test]
fn test_removing_an_absent_town_reports_false() {
    let mut graph = sample();
    assert!(!graph.remove_vertex(&town("Z")));
    assert_eq!(graph.vertex_count(), 4);
}

// ============================================================================
// Road bookkeeping
// ============================================================================

#[test]
fn test_road_directions_are_independent() {
    let mut graph = sample();
    assert!(graph.remove_edge(&town("A"), &town("B"), None, None).is_some());

    assert!(!graph.contains_edge(&town("A"), &town("B")));
    assert!(graph.contains_edge(&town("B"), &town("A")));
    assert_eq!(graph.get_edge(&town("B"), &town("A")).unwrap().weight(), 12);
}

#[test]
fn test_re_adding_a_road_replaces_weight_and_name() {
    let mut graph = sample();
    graph.add_edge(&town("A"), &town("B"), 99, "A-B bypass").unwrap();

    assert_eq!(graph.edges_of(&town("A")).len(), 2);
    let road = graph.get_edge(&town("A"), &town("B")).unwrap();
    assert_eq!(road.weight(), 99);
    assert_eq!(road.name(), "A-B bypass");
}

#[test]
fn test_adding_a_road_with_an_unknown_endpoint_fails_cleanly() {
    let mut graph = sample();
    let result = graph.add_edge(&town("A"), &town("Z"), 1, "AZ");
    assert_eq!(
        result,
        Err(GraphError::UnknownTown {
            name: "Z".to_string()
        })
    );
    assert_eq!(graph.edges().count(), 5);
}

#[test]
fn test_remove_edge_filters_must_all_match() {
    let mut graph = sample();
    assert!(graph.remove_edge(&town("A"), &town("B"), Some(10), Some("XX")).is_none());
    assert!(graph.remove_edge(&town("A"), &town("B"), Some(11), Some("AB")).is_none());
    assert!(graph.contains_edge(&town("A"), &town("B")));

    let removed = graph.remove_edge(&town("A"), &town("B"), Some(10), Some("AB"));
    assert_eq!(removed.unwrap().weight(), 10);
}

#[test]
fn test_remove_edge_wildcards_match_any_road() {
    let mut graph = sample();
    assert!(graph.remove_edge(&town("A"), &town("B"), None, None).is_some());
    assert!(graph.remove_edge(&town("B"), &town("A"), Some(12), None).is_some());
    assert!(graph.remove_edge(&town("B"), &town("D"), None, Some("BD")).is_some());
    assert_eq!(graph.edges().count(), 2);
}

#[test]
fn test_remove_edge_between_unconnected_towns_is_none() {
    let mut graph = sample();
    assert!(graph.remove_edge(&town("C"), &town("D"), None, None).is_none());
    assert!(graph.remove_edge(&town("Z"), &town("A"), None, None).is_none());
}

// ============================================================================
// Listings and the manager facade
// ============================================================================

#[test]
fn test_town_listing_is_sorted_by_name() {
    let mut manager = TownGraphManager::new();
    manager
        .populate_from_matrix(&east_coast::town_names(), &east_coast::distance_rows())
        .unwrap();

    assert_eq!(
        manager.all_towns(),
        [
            "Baltimore",
            "Cleveland",
            "New York City",
            "Philadelphia",
            "Pittsburgh",
            "Rockville",
            "Silver Spring",
        ]
    );
}

#[test]
fn test_east_coast_graph_is_fully_connected() {
    let graph = east_coast::graph();
    assert_eq!(graph.vertex_count(), 7);
    // Every ordered pair of distinct towns has a road.
    assert_eq!(graph.edges().count(), 42);
    for source in graph.vertices() {
        for destination in graph.vertices() {
            if source != destination {
                assert!(
                    graph.contains_edge(source, destination),
                    "missing road {source} -> {destination}"
                );
            }
        }
    }
}

#[test]
fn test_east_coast_asymmetry_is_preserved() {
    let graph = east_coast::graph();
    let out = graph
        .get_edge(&town("Baltimore"), &town("Philadelphia"))
        .unwrap();
    let back = graph
        .get_edge(&town("Philadelphia"), &town("Baltimore"))
        .unwrap();
    assert_eq!(out.weight(), 106);
    assert_eq!(back.weight(), 101);
}

#[test]
fn test_manager_string_facade_round_trip() {
    let mut manager = TownGraphManager::new();
    manager.add_town("Easton");
    manager.add_town("Denton");
    assert!(manager.add_road("Easton", "Denton", 15, "MD-328"));
    assert!(manager.add_road("Denton", "Easton", 15, "MD-328"));

    assert!(manager.contains_road_connection("Easton", "Denton"));
    assert_eq!(
        manager.get_road_name("Easton", "Denton"),
        Some("MD-328".to_string())
    );
    assert!(manager.delete_road_connection("Easton", "Denton", "MD-328"));
    assert!(!manager.contains_road_connection("Easton", "Denton"));
    assert!(manager.contains_road_connection("Denton", "Easton"));

    assert!(manager.delete_town("Denton"));
    assert_eq!(manager.all_towns(), ["Easton"]);
    assert_eq!(manager.all_roads(), Vec::<String>::new());
}
