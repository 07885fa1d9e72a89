//! Definition of the [`Path`] type returned by shortest-path queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered walk from a source vertex to a target vertex, both
/// inclusive, together with its total edge weight.
///
/// A path is never empty: the trivial path from a vertex to itself
/// holds that single vertex and costs `0.0`. Deserializing a path with
/// no vertices fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawPath<V>",
    bound(deserialize = "V: Deserialize<'de>")
)]
pub struct Path<V> {
    vertices: Vec<V>,
    cost: f64,
}

/// Wire form of [`Path`], checked before it becomes one.
#[derive(Deserialize)]
struct RawPath<V> {
    vertices: Vec<V>,
    cost: f64,
}

impl<V> TryFrom<RawPath<V>> for Path<V> {
    type Error = &'static str;

    fn try_from(raw: RawPath<V>) -> Result<Self, Self::Error> {
        if raw.vertices.is_empty() {
            return Err("path must hold at least one vertex");
        }
        Ok(Path {
            vertices: raw.vertices,
            cost: raw.cost,
        })
    }
}

impl<V> Path<V> {
    pub(crate) fn new(vertices: Vec<V>, cost: f64) -> Self {
        debug_assert!(!vertices.is_empty());
        Path { vertices, cost }
    }

    /// The vertices along the path, source first.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Sum of the edge weights along the path.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the path holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn source(&self) -> &V {
        &self.vertices[0]
    }

    pub fn target(&self) -> &V {
        &self.vertices[self.vertices.len() - 1]
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

/// Formats as `A -> B -> C`.
impl<V: fmt::Display> fmt::Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{vertex}")?;
        }
        Ok(())
    }
}
