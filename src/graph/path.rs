use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::{Distance, Graph, RouteError, TownName};

/// One road travelled along a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub from: TownName,
    pub road: String,
    pub to: TownName,
    pub weight: Distance,
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} to {} {}",
            self.from, self.road, self.to, self.weight
        )
    }
}

/// Route between two towns, hops are ordered from origin to destination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    pub length: Distance,
    pub hops: Vec<Hop>,
}

impl Route {
    /// Human readable description of each hop.
    pub fn descriptions(&self) -> Vec<String> {
        self.hops.iter().map(Hop::to_string).collect()
    }

    /// Towns visited by the route, origin and destination included.
    /// Empty if the route has no hops.
    pub fn towns(&self) -> impl Iterator<Item = &TownName> {
        let first = self.hops.first().map(|hop| &hop.from);
        first.into_iter().chain(self.hops.iter().map(|hop| &hop.to))
    }
}

/// Unpacks the route from destination back to origin following the predecessors.
///
/// Fails if the predecessor chain of the destination never reaches the origin, or if it loops.
pub fn unpack_route(
    graph: &Graph,
    predecessors: &FxHashMap<TownName, TownName>,
    origin: &TownName,
    destination: &TownName,
) -> Result<Route, RouteError> {
    let unreachable = || RouteError::Unreachable(origin.clone(), destination.clone());

    let mut hops = vec![];
    let mut seen = FxHashSet::default();
    let mut current = destination;

    while current != origin {
        if !seen.insert(current) {
            warn!("Found loop at {current} unpacking route {origin} -> {destination}");
            return Err(unreachable());
        }

        let previous = predecessors.get(current).ok_or_else(unreachable)?;
        let road = graph.road_between(previous, current).ok_or_else(|| {
            warn!("Cannot find road between {previous} and {current}");
            unreachable()
        })?;

        hops.push(Hop {
            from: previous.clone(),
            road: road.name().to_owned(),
            to: current.clone(),
            weight: road.weight(),
        });
        current = previous;
    }

    hops.reverse();
    let length = hops.iter().map(|hop| hop.weight).sum();
    debug!("Unpacked route {origin} -> {destination} of {length}");

    Ok(Route { length, hops })
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::graph::tests::TOWN_GRAPH;

    fn predecessors(links: &[(&str, &str)]) -> FxHashMap<TownName, TownName> {
        links
            .iter()
            .map(|&(town, previous)| (town.into(), previous.into()))
            .collect()
    }

    #[test]
    fn unpack_route_001() {
        let graph: &Graph = &TOWN_GRAPH;
        let predecessors = predecessors(&[("c", "a"), ("e", "c"), ("g", "e")]);

        let route = unpack_route(graph, &predecessors, &"a".into(), &"g".into()).unwrap();

        assert_eq!(route.length, Distance::from_miles(11));
        assert_eq!(
            route.descriptions(),
            [
                "a via AC to c 3 mi",
                "c via CE to e 1 mi",
                "e via EG to g 7 mi"
            ]
        );
        assert_eq!(
            route.towns().map(TownName::as_str).collect::<Vec<_>>(),
            ["a", "c", "e", "g"]
        );
    }

    #[test]
    fn unpack_route_002() {
        let graph: &Graph = &TOWN_GRAPH;

        let route = unpack_route(graph, &FxHashMap::default(), &"a".into(), &"a".into()).unwrap();

        assert_eq!(route, Route::default());
        assert_eq!(route.towns().count(), 0);
    }

    #[test]
    fn unpack_route_003() {
        let graph: &Graph = &TOWN_GRAPH;
        let predecessors = predecessors(&[("c", "a")]);

        assert_eq!(
            unpack_route(graph, &predecessors, &"a".into(), &"g".into()),
            Err(RouteError::Unreachable("a".into(), "g".into()))
        );
    }

    #[test]
    fn unpack_route_004() {
        let graph: &Graph = &TOWN_GRAPH;
        let predecessors = predecessors(&[("c", "e"), ("e", "c")]);

        assert_eq!(
            unpack_route(graph, &predecessors, &"a".into(), &"e".into()),
            Err(RouteError::Unreachable("a".into(), "e".into()))
        );
    }
}
