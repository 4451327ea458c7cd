use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::TownName;

/// Vertex of the road network.
///
/// A town is identified by its name alone: equality, ordering and hashing ignore the adjacency
/// sequence, so two towns with the same name are interchangeable for every graph operation.
#[derive(Debug, Clone)]
pub struct Town {
    name: TownName,
    adjacent_towns: Vec<TownName>,
}

impl Town {
    pub fn new(name: impl Into<TownName>) -> Self {
        Self {
            name: name.into(),
            adjacent_towns: vec![],
        }
    }

    pub const fn name(&self) -> &TownName {
        &self.name
    }

    /// Towns directly connected to this one by a road, in the order the roads were added.
    pub fn adjacent_towns(&self) -> &[TownName] {
        &self.adjacent_towns
    }

    pub fn is_adjacent(&self, other: &TownName) -> bool {
        self.adjacent_towns.contains(other)
    }

    /// Appends a neighbor. No duplicate check is performed.
    pub fn add_adjacent(&mut self, other: impl Into<TownName>) {
        self.adjacent_towns.push(other.into());
    }

    /// Removes the first occurrence of the neighbor, returns false if it was not adjacent.
    pub fn remove_adjacent(&mut self, other: &TownName) -> bool {
        match self.adjacent_towns.iter().position(|t| t == other) {
            Some(index) => {
                self.adjacent_towns.remove(index);
                true
            }
            None => false,
        }
    }
}

impl From<&Town> for TownName {
    fn from(town: &Town) -> Self {
        town.name.clone()
    }
}

impl From<&str> for Town {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq for Town {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Town {}

impl Hash for Town {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Ord for Town {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Town {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;
    use test_log::test;

    use super::*;

    #[test]
    fn town_identity_001() {
        let mut a = Town::new("a");
        a.add_adjacent(TownName::from("b"));

        let other_a = Town::from("a");
        assert_eq!(a, other_a);
        assert_ne!(a, Town::new("b"));
        assert!(Town::new("a") < Town::new("b"));

        let towns = FxHashSet::from_iter([a, other_a]);
        assert_eq!(towns.len(), 1);
    }

    #[test]
    fn town_adjacent_001() {
        let mut a = Town::new("a");
        let b = Town::new("b");
        let c = Town::new("c");

        a.add_adjacent(&b);
        a.add_adjacent(&c);
        a.add_adjacent(&b);
        assert_eq!(a.adjacent_towns(), [b.name().clone(), c.name().clone(), b.name().clone()]);

        // only the first occurrence goes away
        assert!(a.remove_adjacent(b.name()));
        assert_eq!(a.adjacent_towns(), [c.name().clone(), b.name().clone()]);
        assert!(a.is_adjacent(b.name()));

        assert!(!a.remove_adjacent(&TownName::from("d")));
        assert_eq!(a.adjacent_towns().len(), 2);
    }
}
