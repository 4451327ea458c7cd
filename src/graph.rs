use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::graph::road::RoadKey;
use crate::routing::{shortest_paths, shortest_route};
use crate::{
    Distance, GraphError, Road, Route, RouteError, ShortestPathConfig, ShortestPaths, Town,
    TownName,
};

pub mod dijkstra;
pub mod path;
pub mod road;
pub mod town;

/// Weights below this bound make [`Graph::remove_edge`] a no-op.
pub const MIN_REMOVAL_WEIGHT: i64 = -1;

/// Undirected road network.
///
/// The graph owns its towns and roads. Each town keeps the sequence of its neighbors, which is
/// kept in sync with the road set by every mutation.
///
/// Operations that take towns accept anything convertible into `Option<&Town>`, a `None`
/// stands for a town the caller could not provide (e.g. an unknown name).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: FxHashMap<TownName, Town>,
    edges: FxHashMap<RoadKey, Road>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the town if no town with the same name exists yet.
    /// Returns false and leaves the graph unchanged otherwise.
    pub fn add_vertex(&mut self, town: impl Into<Option<Town>>) -> Result<bool, GraphError> {
        let town = town.into().ok_or(GraphError::NullInput)?;

        if self.vertices.contains_key(town.name()) {
            return Ok(false);
        }

        debug!("Adding town {town}");
        let name = town.name().clone();
        // adjacency is owned by the graph, whatever the given town carries
        self.vertices.insert(name.clone(), Town::new(name));
        Ok(true)
    }

    pub fn contains_vertex<'a>(&self, town: impl Into<Option<&'a Town>>) -> bool {
        town.into()
            .is_some_and(|t| self.vertices.contains_key(t.name()))
    }

    /// Gets the town of the graph with the given name.
    pub fn vertex(&self, name: &str) -> Option<&Town> {
        self.vertices.get(name)
    }

    /// Creates a road between two towns of the graph and returns it.
    ///
    /// If a road already connects the two towns (in either direction) it is kept as it is and
    /// returned instead.
    pub fn add_edge<'a>(
        &mut self,
        source: impl Into<Option<&'a Town>>,
        destination: impl Into<Option<&'a Town>>,
        weight: Distance,
        name: impl Into<String>,
    ) -> Result<Road, GraphError> {
        let (source, destination) = match (source.into(), destination.into()) {
            (Some(source), Some(destination)) => (source.name(), destination.name()),
            _ => return Err(GraphError::NullInput),
        };

        for town in [source, destination] {
            if !self.vertices.contains_key(town) {
                return Err(GraphError::InvalidEndpoint(town.clone()));
            }
        }

        let road = Road::new(source.clone(), destination.clone(), weight, name.into());
        let key = road.key();

        if let Some(existing) = self.edges.get(&key) {
            warn!("Road {road} ignored, towns already linked by {existing}");
            return Ok(existing.clone());
        }

        debug!("Adding road {road}");
        self.link(source, destination);
        self.edges.insert(key, road.clone());
        Ok(road)
    }

    /// Gets the road connecting the two towns, in either direction.
    pub fn get_edge<'a>(
        &self,
        source: impl Into<Option<&'a Town>>,
        destination: impl Into<Option<&'a Town>>,
    ) -> Option<&Road> {
        let (source, destination) = source.into().zip(destination.into())?;
        self.edges
            .get(&RoadKey::new(source.name().clone(), destination.name().clone()))
    }

    /// Returns true only if both towns belong to the graph and a road connects them.
    pub fn contains_edge<'a>(
        &self,
        source: impl Into<Option<&'a Town>>,
        destination: impl Into<Option<&'a Town>>,
    ) -> bool {
        let (source, destination) = (source.into(), destination.into());
        self.contains_vertex(source)
            && self.contains_vertex(destination)
            && self.get_edge(source, destination).is_some()
    }

    /// Gets all the roads touching the town.
    pub fn edges_of<'a>(
        &self,
        town: impl Into<Option<&'a Town>>,
    ) -> Result<FxHashSet<&Road>, GraphError> {
        let town = town.into().ok_or(GraphError::NullInput)?;

        if !self.contains_vertex(town) {
            return Err(GraphError::InvalidVertex(town.name().clone()));
        }

        Ok(self.edges_touching(town.name()).collect())
    }

    /// Removes the road connecting the two towns and returns it.
    ///
    /// The road is located by its endpoints only. Nothing is removed if the name is missing or
    /// the weight is lower than [`MIN_REMOVAL_WEIGHT`].
    pub fn remove_edge<'a>(
        &mut self,
        source: impl Into<Option<&'a Town>>,
        destination: impl Into<Option<&'a Town>>,
        weight: i64,
        name: Option<&str>,
    ) -> Option<Road> {
        if name.is_none() || weight < MIN_REMOVAL_WEIGHT {
            return None;
        }

        let (source, destination) = source.into().zip(destination.into())?;
        let key = RoadKey::new(source.name().clone(), destination.name().clone());
        let road = self.edges.remove(&key)?;

        debug!("Removing road {road}");
        self.unlink(road.source(), road.destination());
        Some(road)
    }

    /// Removes the town together with every road touching it.
    /// Returns false if the town does not belong to the graph.
    pub fn remove_vertex<'a>(&mut self, town: impl Into<Option<&'a Town>>) -> bool {
        let Some(town) = town.into().filter(|&t| self.contains_vertex(t)) else {
            return false;
        };

        let name = town.name().clone();
        let roads: Vec<RoadKey> = self.edges_touching(&name).map(Road::key).collect();

        debug!("Removing town {name} and its {} roads", roads.len());
        for key in roads {
            if let Some(road) = self.edges.remove(&key) {
                self.unlink(road.source(), road.destination());
            }
        }

        self.vertices.remove(&name);
        true
    }

    /// Changes the weight of the road connecting the two towns and returns its previous weight.
    pub fn set_edge_weight<'a>(
        &mut self,
        source: impl Into<Option<&'a Town>>,
        destination: impl Into<Option<&'a Town>>,
        weight: Distance,
    ) -> Option<Distance> {
        let (source, destination) = source.into().zip(destination.into())?;
        let key = RoadKey::new(source.name().clone(), destination.name().clone());
        let road = self.edges.get_mut(&key)?;

        let previous = road.weight();
        road.set_weight(weight);
        Some(previous)
    }

    /// Iterates over the roads of the graph.
    /// The graph cannot be modified while the iterator is alive.
    pub fn edge_set(&self) -> impl Iterator<Item = &Road> {
        self.edges.values()
    }

    /// Iterates over the towns of the graph.
    /// The graph cannot be modified while the iterator is alive.
    pub fn vertex_set(&self) -> impl Iterator<Item = &Town> {
        self.vertices.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Runs Dijkstra's algorithm from the source over the whole graph.
    pub fn dijkstra_shortest_path<'a>(
        &self,
        source: impl Into<Option<&'a Town>>,
    ) -> Result<ShortestPaths, GraphError> {
        let source = self.checked_vertex(source.into())?;
        Ok(shortest_paths(&ShortestPathConfig::default(), self, source))
    }

    /// Gets the shortest route from the source to the destination.
    pub fn route<'a>(
        &self,
        config: &ShortestPathConfig,
        source: impl Into<Option<&'a Town>>,
        destination: impl Into<Option<&'a Town>>,
    ) -> Result<Route, RouteError> {
        let source = self.checked_vertex(source.into())?;
        let destination = self.checked_vertex(destination.into())?;

        shortest_route(config, self, source, destination)
    }

    /// Gets the shortest path from the source to the destination, one description per hop
    /// formatted as `"<from> via <road> to <to> <weight>"`.
    pub fn shortest_path<'a>(
        &self,
        source: impl Into<Option<&'a Town>>,
        destination: impl Into<Option<&'a Town>>,
    ) -> Result<Vec<String>, RouteError> {
        self.route(&ShortestPathConfig::default(), source, destination)
            .map(|route| route.descriptions())
    }

    /// Gets the town and the road of each neighbor of the town.
    pub(crate) fn neighbors<'g>(
        &'g self,
        town: &'g TownName,
    ) -> impl Iterator<Item = (&'g Road, &'g TownName)> + 'g {
        self.vertices
            .get(town)
            .into_iter()
            .flat_map(Town::adjacent_towns)
            .filter_map(move |neighbor| {
                let key = RoadKey::new(town.clone(), neighbor.clone());
                self.edges.get(&key).map(|road| (road, neighbor))
            })
    }

    pub(crate) fn road_between(&self, a: &TownName, b: &TownName) -> Option<&Road> {
        self.edges.get(&RoadKey::new(a.clone(), b.clone()))
    }

    fn checked_vertex<'a>(&self, town: Option<&'a Town>) -> Result<&'a TownName, GraphError> {
        let town = town.ok_or(GraphError::NullInput)?;
        if self.contains_vertex(town) {
            Ok(town.name())
        } else {
            Err(GraphError::InvalidVertex(town.name().clone()))
        }
    }

    /// Roads borrow from the graph only, the town is needed just while iterating.
    fn edges_touching<'g>(&'g self, town: &TownName) -> impl Iterator<Item = &'g Road> {
        self.edges.values().filter(move |road| road.touches(town))
    }

    fn link(&mut self, a: &TownName, b: &TownName) {
        if let Some(town) = self.vertices.get_mut(a) {
            town.add_adjacent(b.clone());
        }
        if let Some(town) = self.vertices.get_mut(b) {
            town.add_adjacent(a.clone());
        }
    }

    fn unlink(&mut self, a: &TownName, b: &TownName) {
        if let Some(town) = self.vertices.get_mut(a) {
            town.remove_adjacent(b);
        }
        if let Some(town) = self.vertices.get_mut(b) {
            town.remove_adjacent(a);
        }
    }
}
