//! String-keyed facade over a town graph.
//!
//! Callers that think in town names rather than [`Town`] values go through
//! the manager. It owns exactly one graph, resolves names, and folds
//! structural errors from edits into plain boolean results; tour searches
//! keep their typed errors.

use std::path::Path;

use crate::builder;
use crate::error::{BuildError, TourError};
use crate::graph::TownGraph;
use crate::road::Road;
use crate::town::Town;

/// Owns a [`TownGraph`] and exposes name-based operations over it.
#[derive(Debug, Default)]
pub struct TownGraphManager {
    graph: TownGraph,
}

impl TownGraphManager {
    /// Creates a manager with an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The managed graph.
    pub fn graph(&self) -> &TownGraph {
        &self.graph
    }

    /// Adds a town by name. Returns whether an insertion happened.
    pub fn add_town(&mut self, name: &str) -> bool {
        self.graph.add_vertex(Town::new(name))
    }

    /// Looks up a town by name.
    pub fn get_town(&self, name: &str) -> Option<&Town> {
        self.graph.vertices().find(|town| town.name() == name)
    }

    /// Whether a town with this name is in the graph.
    pub fn contains_town(&self, name: &str) -> bool {
        self.graph.contains_vertex(&Town::new(name))
    }

    /// Removes a town and every road touching it. Returns whether the town
    /// was present.
    pub fn delete_town(&mut self, name: &str) -> bool {
        self.graph.remove_vertex(&Town::new(name))
    }

    /// Adds a road between two towns already in the graph, replacing any
    /// existing road in that direction.
    ///
    /// Returns `false` and leaves the graph unchanged when either town is
    /// missing.
    pub fn add_road(&mut self, source: &str, destination: &str, weight: u32, name: &str) -> bool {
        self.graph
            .add_edge(&Town::new(source), &Town::new(destination), weight, name)
            .is_ok()
    }

    /// Name of the road from `source` to `destination`, if one is stored.
    pub fn get_road_name(&self, source: &str, destination: &str) -> Option<String> {
        self.graph
            .get_edge(&Town::new(source), &Town::new(destination))
            .map(|road| road.name().to_string())
    }

    /// Whether a road runs from `source` to `destination`.
    pub fn contains_road_connection(&self, source: &str, destination: &str) -> bool {
        self.graph
            .contains_edge(&Town::new(source), &Town::new(destination))
    }

    /// Removes the road from `source` to `destination` carrying `road_name`,
    /// whatever its weight. Returns whether a road was removed.
    pub fn delete_road_connection(
        &mut self,
        source: &str,
        destination: &str,
        road_name: &str,
    ) -> bool {
        self.graph
            .remove_edge(
                &Town::new(source),
                &Town::new(destination),
                None,
                Some(road_name),
            )
            .is_some()
    }

    /// All town names, sorted ascending.
    pub fn all_towns(&self) -> Vec<String> {
        self.graph
            .vertices()
            .map(|town| town.name().to_string())
            .collect()
    }

    /// All road names, sorted ascending.
    pub fn all_roads(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .graph
            .edges()
            .map(|road| road.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Replaces the managed graph with one loaded from a road file.
    pub fn populate_from_road_file(&mut self, path: impl AsRef<Path>) -> Result<(), BuildError> {
        self.graph = builder::load_road_file(path)?;
        Ok(())
    }

    /// Replaces the managed graph with one loaded from a JSON matrix file.
    pub fn populate_from_matrix_file(&mut self, path: impl AsRef<Path>) -> Result<(), BuildError> {
        self.graph = builder::load_matrix_file(path)?;
        Ok(())
    }

    /// Replaces the managed graph with one built from an adjacency matrix.
    pub fn populate_from_matrix(
        &mut self,
        town_names: &[String],
        matrix: &[Vec<i64>],
    ) -> Result<(), BuildError> {
        self.graph = builder::from_matrix(town_names, matrix)?;
        Ok(())
    }

    /// Greedy tour from the named start town.
    pub fn nearest_neighbor(&self, start: &str) -> Result<Vec<Town>, TourError> {
        self.graph.nearest_neighbor(&Town::new(start))
    }

    /// Minimum-weight closed tour from the named start town.
    pub fn branch_and_bound(&self, start: &str) -> Result<Vec<Town>, TourError> {
        self.graph.branch_and_bound(&Town::new(start))
    }

    /// Total cycle weight of a tour; `None` when a leg is missing.
    pub fn measure_cycle(&self, tour: &[Town]) -> Option<u64> {
        self.graph.measure_cycle(tour)
    }

    /// The roads a tour traverses, closing leg included.
    pub fn roads_in_cycle(&self, tour: &[Town]) -> Result<Vec<Road>, TourError> {
        self.graph.roads_in_cycle(tour)
    }
}
