//! Plain-text rendering of tours and graphs.
//!
//! All presentation lives here; the graph and tour search only produce
//! data. Rendering a tour walks its roads in travel order and closes the
//! cycle, so the caller hands over exactly what the search returned.

use crate::error::TourError;
use crate::graph::TownGraph;
use crate::town::Town;

/// Renders a tour as one road per line, closing leg included, followed by
/// a `total:` line summed from those roads.
///
/// Fails with [`TourError::MissingRoad`] when the tour crosses a leg with
/// no stored road, which includes a greedy tour whose closing road back to
/// the start does not exist.
pub fn format_tour(graph: &TownGraph, tour: &[Town]) -> Result<String, TourError> {
    let mut out = String::new();
    let mut total: u64 = 0;
    for road in graph.roads_in_cycle(tour)? {
        out.push_str(&format!("{road}\n"));
        total += u64::from(road.weight());
    }
    out.push_str(&format!("total: {total}\n"));
    Ok(out)
}

/// Renders the towns and roads of a graph, one per line, towns in name
/// order and roads sorted by their display form.
pub fn format_graph(graph: &TownGraph) -> String {
    let mut out = String::new();
    out.push_str("Towns:\n");
    for town in graph.vertices() {
        out.push_str(&format!("  {town}\n"));
    }
    out.push_str("Roads:\n");
    let mut roads: Vec<String> = graph.edges().map(|road| road.to_string()).collect();
    roads.sort();
    for road in roads {
        out.push_str(&format!("  {road}\n"));
    }
    out
}
