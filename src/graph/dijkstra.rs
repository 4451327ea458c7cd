use std::cmp::Ordering;

use crate::{Distance, TownName};

/// Town waiting in the frontier of the shortest path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapElement {
    /// Current shortest distance from origin to this town.
    pub distance: Distance,
    pub town: TownName,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // breaking ties in a deterministic way
            .then_with(|| other.town.cmp(&self.town))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use test_log::test;

    use super::*;

    fn element(miles: u32, town: &str) -> HeapElement {
        HeapElement {
            distance: Distance::from_miles(miles),
            town: town.into(),
        }
    }

    #[test]
    fn heap_element_order_001() {
        let mut frontier = BinaryHeap::from([
            element(7, "c"),
            element(2, "z"),
            element(2, "b"),
            element(0, "a"),
        ]);

        let order: Vec<HeapElement> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(
            order,
            [element(0, "a"), element(2, "b"), element(2, "z"), element(7, "c")]
        );
    }
}
