#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod network;
mod routing;

pub use error::{GraphError, RouteError};
pub use graph::path::{Hop, Route, unpack_route};
pub use graph::road::Road;
pub use graph::town::Town;
pub use graph::{Graph, MIN_REMOVAL_WEIGHT};
pub use model::{Distance, TownName};
pub use network::RoadNetwork;
pub use routing::{ShortestPathConfig, ShortestPaths, shortest_paths};
