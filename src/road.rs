//! Road edge type.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::town::Town;

/// A one-way road between two towns, with a weight in miles and a label.
///
/// Equality and hashing consider only the ordered `(source, destination)`
/// pair. The graph keeps at most one road per ordered pair, so weight and
/// name are payload, not identity.
#[derive(Debug, Clone)]
pub struct Road {
    source: Town,
    destination: Town,
    weight: u32,
    name: String,
}

impl Road {
    /// Creates a road from `source` to `destination`.
    pub fn new(source: Town, destination: Town, weight: u32, name: impl Into<String>) -> Self {
        Self {
            source,
            destination,
            weight,
            name: name.into(),
        }
    }

    /// Town the road leaves from.
    pub fn source(&self) -> &Town {
        &self.source
    }

    /// Town the road arrives at.
    pub fn destination(&self) -> &Town {
        &self.destination
    }

    /// Distance in miles.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// The road's label, e.g. a route number.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `town` is an endpoint of this road.
    pub fn contains(&self, town: &Town) -> bool {
        self.source == *town || self.destination == *town
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.destination == other.destination
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}: {} mi", self.source, self.destination, self.weight)
    }
}
