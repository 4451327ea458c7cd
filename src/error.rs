use thiserror::Error;

use crate::TownName;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GraphError {
    #[error("Required town is missing")]
    NullInput,
    #[error("Town {0} is not a vertex of the graph")]
    InvalidVertex(TownName),
    #[error("Road endpoint {0} is not a vertex of the graph")]
    InvalidEndpoint(TownName),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RouteError {
    #[error(transparent)]
    GraphError(#[from] GraphError),
    #[error("Cannot find route from {0} to {1}")]
    Unreachable(TownName, TownName),
}
