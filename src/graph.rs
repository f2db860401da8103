//! The town graph: a directed, weighted vertex/edge store.

use std::collections::BTreeMap;

use crate::error::GraphError;
use crate::road::Road;
use crate::town::Town;

/// A directed graph of towns connected by weighted roads.
///
/// Each town owns the list of its outgoing roads, and at most one road is
/// stored per ordered `(source, destination)` pair; adding another replaces
/// it. Towns iterate in lexicographic name order, which makes tie-breaking
/// in the tour algorithms deterministic.
#[derive(Debug, Clone, Default)]
pub struct TownGraph {
    adjacencies: BTreeMap<Town, Vec<Road>>,
}

impl TownGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a town if it is not already present. Returns whether an
    /// insertion happened.
    pub fn add_vertex(&mut self, town: Town) -> bool {
        if self.adjacencies.contains_key(&town) {
            return false;
        }
        self.adjacencies.insert(town, Vec::new());
        true
    }

    /// Removes a town together with every road touching it, incoming as
    /// well as outgoing.
    ///
    /// Returns `false` and leaves the graph unchanged if the town is not a
    /// vertex.
    pub fn remove_vertex(&mut self, town: &Town) -> bool {
        if self.adjacencies.remove(town).is_none() {
            return false;
        }
        for roads in self.adjacencies.values_mut() {
            roads.retain(|road| road.destination() != town);
        }
        true
    }

    /// Whether the town is a vertex of the graph.
    pub fn contains_vertex(&self, town: &Town) -> bool {
        self.adjacencies.contains_key(town)
    }

    /// Whether a road from `source` to `destination` is stored. `false`
    /// whenever either endpoint is absent.
    pub fn contains_edge(&self, source: &Town, destination: &Town) -> bool {
        self.get_edge(source, destination).is_some()
    }

    /// The stored road for the ordered `(source, destination)` pair.
    pub fn get_edge(&self, source: &Town, destination: &Town) -> Option<&Road> {
        self.adjacencies
            .get(source)?
            .iter()
            .find(|road| road.destination() == destination)
    }

    /// Adds a road from `source` to `destination`, replacing any road
    /// already stored for that ordered pair.
    ///
    /// Both endpoints must already be vertices.
    pub fn add_edge(
        &mut self,
        source: &Town,
        destination: &Town,
        weight: u32,
        name: &str,
    ) -> Result<Road, GraphError> {
        if !self.contains_vertex(destination) {
            return Err(GraphError::UnknownTown {
                name: destination.name().to_string(),
            });
        }
        let Some(roads) = self.adjacencies.get_mut(source) else {
            return Err(GraphError::UnknownTown {
                name: source.name().to_string(),
            });
        };
        roads.retain(|road| road.destination() != destination);
        let road = Road::new(source.clone(), destination.clone(), weight, name);
        roads.push(road.clone());
        Ok(road)
    }

    /// Removes roads from `source` to `destination` that match the filters.
    ///
    /// A `None` weight matches any weight and a `None` name matches any
    /// name. Returns the first road removed, or `None` if nothing matched.
    pub fn remove_edge(
        &mut self,
        source: &Town,
        destination: &Town,
        weight: Option<u32>,
        name: Option<&str>,
    ) -> Option<Road> {
        let roads = self.adjacencies.get_mut(source)?;
        let mut removed = Vec::new();
        roads.retain(|road| {
            let matched = road.destination() == destination
                && weight.map_or(true, |w| road.weight() == w)
                && name.map_or(true, |n| road.name() == n);
            if matched {
                removed.push(road.clone());
            }
            !matched
        });
        removed.into_iter().next()
    }

    /// The outgoing roads of a town. Empty for an absent town.
    pub fn edges_of(&self, town: &Town) -> &[Road] {
        self.adjacencies
            .get(town)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All towns, in lexicographic name order.
    pub fn vertices(&self) -> impl Iterator<Item = &Town> {
        self.adjacencies.keys()
    }

    /// All stored roads, grouped by source town in name order.
    pub fn edges(&self) -> impl Iterator<Item = &Road> {
        self.adjacencies.values().flatten()
    }

    /// Number of towns.
    pub fn vertex_count(&self) -> usize {
        self.adjacencies.len()
    }

    /// Whether the graph has no towns.
    pub fn is_empty(&self) -> bool {
        self.adjacencies.is_empty()
    }
}
