//! Error types for graph editing, graph population, and tour search.

use thiserror::Error;

/// Structural errors from the vertex/edge store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A road endpoint that is not a vertex of the graph.
    #[error("unknown town: {name}")]
    UnknownTown { name: String },
}

/// Errors from tour construction and tour expansion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The requested start town is not a vertex of the graph.
    #[error("unknown town: {name}")]
    UnknownTown { name: String },

    /// The greedy tour dead-ended: no road leads from `town` to any
    /// still-unvisited town.
    #[error("no road from {town} to any unvisited town")]
    NoRouteFrom { town: String },

    /// The exact search exhausted every branch without completing a cycle.
    #[error("no closed tour visits every town")]
    NoHamiltonianCycle,

    /// A tour leg with no stored road.
    #[error("no road from {from} to {to}")]
    MissingRoad { from: String, to: String },
}

/// Errors from populating a graph out of road files or adjacency matrices.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A road-file line that does not parse as `name,weight;source;destination`.
    #[error("line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Town list and matrix row count disagree.
    #[error("{towns} town names for {rows} matrix rows")]
    DimensionMismatch { towns: usize, rows: usize },

    /// A matrix row of the wrong length.
    #[error("matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A matrix entry too large to be a road weight.
    #[error("matrix entry [{row}][{col}] = {value} is out of range for a road weight")]
    WeightOutOfRange { row: usize, col: usize, value: i64 },
}
