//! Tour construction over the town graph.
//!
//! Two complementary strategies: a greedy nearest-neighbor heuristic and
//! an exact branch-and-bound search. Both return a tour as the sequence
//! of towns visited exactly once, without repeating the start town at the
//! end; measuring or expanding the tour supplies the closing leg.

use tracing::{debug, trace};

use crate::error::TourError;
use crate::graph::TownGraph;
use crate::road::Road;
use crate::town::Town;

impl TownGraph {
    /// Builds a tour greedily, starting at `start` and always extending to
    /// the unvisited town with the cheapest road from the current end.
    ///
    /// Ties resolve to the lexicographically first town. The result visits
    /// every town exactly once but carries no optimality guarantee, and the
    /// closing road back to `start` is not required to exist.
    ///
    /// Fails with [`TourError::NoRouteFrom`] if the tour dead-ends before
    /// every town is visited; a partial greedy tour has no meaning.
    pub fn nearest_neighbor(&self, start: &Town) -> Result<Vec<Town>, TourError> {
        if !self.contains_vertex(start) {
            return Err(TourError::UnknownTown {
                name: start.name().to_string(),
            });
        }
        debug!(start = %start, towns = self.vertex_count(), "greedy nearest-neighbor tour");
        let mut tour = vec![start.clone()];
        let mut current = start.clone();
        while tour.len() < self.vertex_count() {
            let mut nearest: Option<(&Town, u32)> = None;
            for neighbor in self.vertices() {
                if tour.contains(neighbor) {
                    continue;
                }
                let Some(road) = self.get_edge(&current, neighbor) else {
                    continue;
                };
                if nearest.map_or(true, |(_, distance)| road.weight() < distance) {
                    nearest = Some((neighbor, road.weight()));
                }
            }
            let Some((next, distance)) = nearest else {
                return Err(TourError::NoRouteFrom {
                    town: current.name().to_string(),
                });
            };
            trace!(from = %current, to = %next, distance, "greedy step");
            current = next.clone();
            tour.push(current.clone());
        }
        Ok(tour)
    }

    /// Finds the minimum-weight closed tour through every town, starting
    /// and ending at `start`. The returned sequence omits the duplicate
    /// closing entry for `start`.
    ///
    /// Depth-first search over partial tours. A branch is abandoned as soon
    /// as its partial weight reaches the best complete cycle found so far;
    /// weights never decrease along a path, so nothing cheaper can lie
    /// below the cut. Worst case remains factorial in the number of towns.
    ///
    /// Fails with [`TourError::NoHamiltonianCycle`] when no closed tour
    /// exists at all.
    pub fn branch_and_bound(&self, start: &Town) -> Result<Vec<Town>, TourError> {
        if !self.contains_vertex(start) {
            return Err(TourError::UnknownTown {
                name: start.name().to_string(),
            });
        }
        if self.vertex_count() == 1 {
            // The lone town closes on itself without traveling.
            return Ok(vec![start.clone()]);
        }
        debug!(start = %start, towns = self.vertex_count(), "exact branch-and-bound search");
        let mut path = vec![start.clone()];
        match self.search(&mut path, 0, None) {
            Some((tour, weight)) => {
                debug!(weight, "optimal cycle found");
                Ok(tour)
            }
            None => Err(TourError::NoHamiltonianCycle),
        }
    }

    /// Extends `path` one town at a time, keeping the cheapest complete
    /// cycle found under `bound`.
    ///
    /// `path_weight` is the combined weight of the legs already in `path`;
    /// `bound` is the weight of the best complete cycle seen so far, or
    /// `None` before the first one. Towns with no road from the current
    /// end are skipped, since no cycle can pass through the missing leg.
    fn search(
        &self,
        path: &mut Vec<Town>,
        path_weight: u64,
        bound: Option<u64>,
    ) -> Option<(Vec<Town>, u64)> {
        if bound.is_some_and(|best| path_weight >= best) {
            trace!(path_weight, depth = path.len(), "branch pruned");
            return None;
        }
        if path.len() == self.vertex_count() {
            let closing = self.get_edge(&path[path.len() - 1], &path[0])?;
            return Some((path.clone(), path_weight + u64::from(closing.weight())));
        }
        let current = path[path.len() - 1].clone();
        let mut best: Option<(Vec<Town>, u64)> = None;
        let mut best_weight = bound;
        for candidate in self.vertices() {
            if path.contains(candidate) {
                continue;
            }
            let Some(road) = self.get_edge(&current, candidate) else {
                continue;
            };
            let leg = u64::from(road.weight());
            path.push(candidate.clone());
            let found = self.search(path, path_weight + leg, best_weight);
            path.pop();
            if let Some((tour, weight)) = found {
                if best_weight.map_or(true, |b| weight < b) {
                    best_weight = Some(weight);
                    best = Some((tour, weight));
                }
            }
        }
        best
    }

    /// Combined weight of the legs between consecutive towns of `path`.
    ///
    /// Individual roads are bounded by `u32::MAX` but their sum is not, so
    /// totals widen to `u64`. `Some(0)` when `path` has fewer than two
    /// towns; `None` when any leg has no stored road.
    fn measure_path(&self, path: &[Town]) -> Option<u64> {
        if path.len() < 2 {
            return Some(0);
        }
        let mut total = 0;
        for pair in path.windows(2) {
            total += u64::from(self.get_edge(&pair[0], &pair[1])?.weight());
        }
        Some(total)
    }

    /// Total weight of the cycle formed by `path` plus the closing road
    /// from its last town back to its first.
    ///
    /// `Some(0)` when `path` has fewer than two towns; `None` when any leg
    /// or the closing road is missing.
    pub fn measure_cycle(&self, path: &[Town]) -> Option<u64> {
        if path.len() < 2 {
            return Some(0);
        }
        let total = self.measure_path(path)?;
        let closing = self.get_edge(&path[path.len() - 1], &path[0])?;
        Some(total + u64::from(closing.weight()))
    }

    /// The roads traversed by the cycle formed by `path`, in travel order
    /// and including the closing road back to the first town.
    ///
    /// Empty when `path` has fewer than two towns. Fails with
    /// [`TourError::MissingRoad`] on the first leg with no stored road.
    pub fn roads_in_cycle(&self, path: &[Town]) -> Result<Vec<Road>, TourError> {
        if path.len() < 2 {
            return Ok(Vec::new());
        }
        let mut roads = Vec::with_capacity(path.len());
        for pair in path.windows(2) {
            roads.push(self.require_edge(&pair[0], &pair[1])?);
        }
        roads.push(self.require_edge(&path[path.len() - 1], &path[0])?);
        Ok(roads)
    }

    fn require_edge(&self, from: &Town, to: &Town) -> Result<Road, TourError> {
        self.get_edge(from, to)
            .cloned()
            .ok_or_else(|| TourError::MissingRoad {
                from: from.name().to_string(),
                to: to.name().to_string(),
            })
    }
}
