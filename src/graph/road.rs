use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Distance, Town, TownName};

/// Undirected, weighted road between two towns.
///
/// Two roads are equal when they connect the same pair of towns, in either direction, whatever
/// their weight and name.
#[derive(Debug, Clone)]
pub struct Road {
    source: TownName,
    destination: TownName,
    weight: Distance,
    name: String,
}

/// Unordered pair of road endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RoadKey(TownName, TownName);

impl RoadKey {
    pub(crate) fn new(a: TownName, b: TownName) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}

impl Road {
    pub(crate) fn new(
        source: TownName,
        destination: TownName,
        weight: Distance,
        name: String,
    ) -> Self {
        Self {
            source,
            destination,
            weight,
            name,
        }
    }

    pub const fn source(&self) -> &TownName {
        &self.source
    }

    pub const fn destination(&self) -> &TownName {
        &self.destination
    }

    pub const fn weight(&self) -> Distance {
        self.weight
    }

    pub const fn set_weight(&mut self, weight: Distance) {
        self.weight = weight;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the town is either endpoint of the road.
    pub fn contains(&self, town: &Town) -> bool {
        self.touches(town.name())
    }

    pub(crate) fn touches(&self, town: &TownName) -> bool {
        &self.source == town || &self.destination == town
    }

    /// Gets the endpoint on the other side of the road, None if the town is not an endpoint.
    pub fn opposite(&self, town: &TownName) -> Option<&TownName> {
        if &self.source == town {
            Some(&self.destination)
        } else if &self.destination == town {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Orders roads by ascending weight.
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }

    pub(crate) fn key(&self) -> RoadKey {
        RoadKey::new(self.source.clone(), self.destination.clone())
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        (self.source == other.source && self.destination == other.destination)
            || (self.source == other.destination && self.destination == other.source)
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} links {} and {} ({})",
            self.name, self.source, self.destination, self.weight
        )
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;
    use test_log::test;

    use super::*;

    fn road(source: &str, destination: &str, miles: u32, name: &str) -> Road {
        Road::new(
            source.into(),
            destination.into(),
            Distance::from_miles(miles),
            name.to_owned(),
        )
    }

    #[test]
    fn road_equality_001() {
        let ab = road("a", "b", 4, "AB");
        let ba = road("b", "a", 9, "BA");
        let ac = road("a", "c", 4, "AB");

        assert_eq!(ab, ba);
        assert_ne!(ab, ac);
        assert_eq!(ab.key(), ba.key());

        let roads = FxHashSet::from_iter([ab, ba, ac]);
        assert_eq!(roads.len(), 2);
    }

    #[test]
    fn road_contains_001() {
        let ab = road("a", "b", 4, "AB");

        assert!(ab.contains(&Town::new("a")));
        assert!(ab.contains(&Town::new("b")));
        assert!(!ab.contains(&Town::new("c")));

        assert_eq!(ab.opposite(&"a".into()), Some(&TownName::from("b")));
        assert_eq!(ab.opposite(&"b".into()), Some(&TownName::from("a")));
        assert_eq!(ab.opposite(&"c".into()), None);
    }

    #[test]
    fn road_weight_001() {
        let mut roads = vec![road("a", "b", 4, "AB"), road("c", "d", 1, "CD")];
        roads.sort_by(Road::cmp_weight);
        assert_eq!(roads[0].name(), "CD");

        roads[0].set_weight(Distance::from_miles(12));
        roads.sort_by(Road::cmp_weight);
        assert_eq!(roads[0].name(), "AB");
        assert_eq!(roads[1].to_string(), "CD links c and d (12 mi)");
    }
}
