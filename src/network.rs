//! Name keyed access to a road [`Graph`].
//!
//! Town names are resolved against the graph before each operation, an unknown name reaches the
//! graph as a missing town.

use tracing::debug;

use crate::{Distance, Graph, GraphError, Road, ShortestPathConfig, Town};

#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    graph: Graph,
    config: ShortestPathConfig,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ShortestPathConfig) -> Self {
        Self {
            graph: Graph::new(),
            config,
        }
    }

    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Adds a town, returns false if a town with the same name already exists.
    pub fn add_town(&mut self, name: &str) -> bool {
        self.graph.add_vertex(Town::new(name)).unwrap_or(false)
    }

    pub fn town(&self, name: &str) -> Option<&Town> {
        self.graph.vertex(name)
    }

    pub fn contains_town(&self, name: &str) -> bool {
        self.graph.contains_vertex(self.town(name))
    }

    /// Adds a road between two existing towns.
    pub fn add_road(
        &mut self,
        town1: &str,
        town2: &str,
        weight: Distance,
        road: &str,
    ) -> Result<Road, GraphError> {
        let source = self.town(town1).cloned();
        let destination = self.town(town2).cloned();
        self.graph
            .add_edge(source.as_ref(), destination.as_ref(), weight, road)
    }

    /// Gets the name of the road connecting the two towns.
    pub fn road(&self, town1: &str, town2: &str) -> Option<&str> {
        self.graph
            .get_edge(self.town(town1), self.town(town2))
            .map(Road::name)
    }

    pub fn contains_road_connection(&self, town1: &str, town2: &str) -> bool {
        self.graph.contains_edge(self.town(town1), self.town(town2))
    }

    /// Gets the names of all the roads, sorted.
    pub fn all_roads(&self) -> Vec<String> {
        let mut roads: Vec<String> = self
            .graph
            .edge_set()
            .map(|road| road.name().to_owned())
            .collect();
        roads.sort();
        roads
    }

    /// Removes the road connecting the two towns, returns true if a road was removed.
    pub fn delete_road_connection(&mut self, town1: &str, town2: &str, road: &str) -> bool {
        let source = self.town(town1).cloned();
        let destination = self.town(town2).cloned();
        self.graph
            .remove_edge(source.as_ref(), destination.as_ref(), 0, Some(road))
            .is_some()
    }

    /// Removes the town and all its roads, returns true if the town existed.
    pub fn delete_town(&mut self, name: &str) -> bool {
        let town = self.town(name).cloned();
        self.graph.remove_vertex(town.as_ref())
    }

    /// Gets the names of all the towns, sorted.
    pub fn all_towns(&self) -> Vec<String> {
        let mut towns: Vec<String> = self
            .graph
            .vertex_set()
            .map(|town| town.name().to_string())
            .collect();
        towns.sort();
        towns
    }

    /// Gets the description of each hop along the shortest path between the two towns.
    /// Returns None if there is no such path or either town is unknown.
    pub fn path(&self, town1: &str, town2: &str) -> Option<Vec<String>> {
        self.graph
            .route(&self.config, self.town(town1), self.town(town2))
            .map(|route| route.descriptions())
            .inspect_err(|e| debug!("No path {town1} -> {town2}: {e}"))
            .ok()
    }
}
