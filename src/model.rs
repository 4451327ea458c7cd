use std::borrow::Borrow;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::sync::Arc;

/// Length of a road, or of a route, in whole miles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(u32);

impl Distance {
    pub const ZERO: Self = Self(0);
    /// Longest representable distance, sums of distances saturate here.
    pub const MAX: Self = Self(u32::MAX);

    pub const fn from_miles(miles: u32) -> Self {
        Self(miles)
    }

    pub const fn miles(&self) -> u32 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// Saturates at MAX, routes longer than that all report MAX as their length.
impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, d| acc + d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mi", self.0)
    }
}

/// Name of a town, the only key towns are identified by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TownName(Arc<str>);

impl TownName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TownName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TownName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TownName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TownName {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl fmt::Display for TownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
