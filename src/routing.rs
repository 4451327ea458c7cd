use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::graph::dijkstra::HeapElement;
use crate::{Distance, Graph, Route, RouteError, Town, TownName, unpack_route};

#[derive(Debug, Clone, Copy)]
pub struct ShortestPathConfig {
    /// Towns further than this distance from the origin are considered unreachable.
    pub max_distance: Distance,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            max_distance: Distance::MAX,
        }
    }
}

/// Outcome of a single shortest path search.
///
/// Holds the shortest distance from the origin to every reached town and the previous town on
/// that shortest path. Towns missing from the maps were never reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    origin: TownName,
    distances: FxHashMap<TownName, Distance>,
    predecessors: FxHashMap<TownName, TownName>,
}

impl ShortestPaths {
    pub const fn origin(&self) -> &TownName {
        &self.origin
    }

    /// Gets the shortest distance from the origin, None if the town was not reached.
    pub fn distance(&self, town: &Town) -> Option<Distance> {
        self.distances.get(town.name()).copied()
    }

    /// Gets the previous town on the shortest path from the origin.
    /// None for the origin itself and for towns that were not reached.
    pub fn predecessor(&self, town: &Town) -> Option<&TownName> {
        self.predecessors.get(town.name())
    }

    pub fn is_reachable(&self, town: &Town) -> bool {
        self.distances.contains_key(town.name())
    }

    /// Iterates over the reached towns and their distance from the origin.
    pub fn distances(&self) -> impl Iterator<Item = (&TownName, Distance)> {
        self.distances.iter().map(|(town, &distance)| (town, distance))
    }

    /// Unpacks the shortest route from the origin to the destination.
    pub fn route_to(&self, graph: &Graph, destination: &TownName) -> Result<Route, RouteError> {
        if !self.distances.contains_key(destination) {
            debug!("{destination} not reached from {}", self.origin);
            return Err(RouteError::Unreachable(
                self.origin.clone(),
                destination.clone(),
            ));
        }

        unpack_route(graph, &self.predecessors, &self.origin, destination)
    }
}

/// Runs Dijkstra's algorithm from the origin until every town reachable within the max distance
/// is final.
pub fn shortest_paths(
    config: &ShortestPathConfig,
    graph: &Graph,
    origin: &TownName,
) -> ShortestPaths {
    search(config, graph, origin, None)
}

/// Gets the shortest route from the origin to the destination.
///
/// The search stops as soon as the destination is final, the partial search state never leaves
/// this function.
pub(crate) fn shortest_route(
    config: &ShortestPathConfig,
    graph: &Graph,
    origin: &TownName,
    destination: &TownName,
) -> Result<Route, RouteError> {
    search(config, graph, origin, Some(destination)).route_to(graph, destination)
}

/// Towns are expanded in order of their distance from the origin, so each town is final once it
/// is popped from the frontier. With a destination the search stops once the destination is
/// final, leaving the other towns with tentative distances.
fn search(
    config: &ShortestPathConfig,
    graph: &Graph,
    origin: &TownName,
    destination: Option<&TownName>,
) -> ShortestPaths {
    debug!("Computing shortest paths {origin} -> {destination:?} with {config:?}");

    // (current) shortest distance from origin to this town
    let mut shortest_distances = FxHashMap::from_iter([(origin.clone(), Distance::ZERO)]);

    // previous town (value) on the current best known path from origin to this town (key)
    let mut predecessors: FxHashMap<TownName, TownName> = FxHashMap::default();

    let mut visited: FxHashSet<TownName> = FxHashSet::default();

    // priority queue of discovered towns that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        distance: Distance::ZERO,
        town: origin.clone(),
    }]);

    while let Some(element) = frontier.pop() {
        // stale entry, the town has already been expanded through a shorter path
        if !visited.insert(element.town.clone()) {
            continue;
        }

        if Some(&element.town) == destination {
            break;
        }

        for (road, neighbor) in graph.neighbors(&element.town) {
            if visited.contains(neighbor) {
                continue;
            }

            let distance = element.distance + road.weight();
            if distance > config.max_distance {
                continue;
            }

            // check if we can follow the current path to reach the neighbor in a cheaper way,
            // a town missing from the map has not been reached yet
            let is_shorter = shortest_distances
                .get(neighbor)
                .is_none_or(|&shortest_distance| distance < shortest_distance);

            if is_shorter {
                // Relax: we have now found a better way that we are going to explore
                shortest_distances.insert(neighbor.clone(), distance);
                predecessors.insert(neighbor.clone(), element.town.clone());
                frontier.push(HeapElement {
                    distance,
                    town: neighbor.clone(),
                });
            }
        }
    }

    debug!(
        "Reached {} towns from {origin}",
        shortest_distances.len()
    );

    ShortestPaths {
        origin: origin.clone(),
        distances: shortest_distances,
        predecessors,
    }
}
