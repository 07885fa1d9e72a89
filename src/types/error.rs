//! Error types reported by [`WeightedGraph`](super::graph::WeightedGraph).
//!
//! Every failure is returned synchronously to the caller. None of them
//! is retried: they describe caller misuse or the graph's topology,
//! never a transient condition.

use std::fmt::Debug;

/// The distinct ways a graph operation can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError<V: Debug> {
    /// An operation referenced a label that was never registered.
    #[error("unknown vertex: {0:?}")]
    UnknownVertex(V),

    /// A label was registered twice.
    #[error("vertex already registered: {0:?}")]
    DuplicateVertex(V),

    /// An edge weight was negative, NaN or infinite.
    #[error("invalid weight {weight} for edge {from:?} - {to:?}")]
    InvalidWeight { from: V, to: V, weight: f64 },

    /// No path connects the two vertices.
    #[error("no path from {from:?} to {to:?}")]
    Unreachable { from: V, to: V },
}

/// Result type for graph operations.
pub type Result<T, V> = std::result::Result<T, GraphError<V>>;
