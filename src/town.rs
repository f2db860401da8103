//! Town vertex type.

use std::fmt;

/// A named town, the vertex type of the road graph.
///
/// Identity, equality, and ordering are all derived from the name
/// (case-sensitive), so any two `Town` values with the same name refer
/// to the same vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Town {
    name: String,
}

impl Town {
    /// Creates a town with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The town's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
