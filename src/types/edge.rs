//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::Serialize;

/// An edge is an undirected connection between two vertices.
/// The cost represents the "weight" of the edge.
///
/// `from` is whichever end was registered first; the edge is traversed
/// identically in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<'a, V> {
    /// One end of the edge.
    pub from: &'a V,

    /// The other end of the edge.
    pub to: &'a V,

    /// The weight of the edge.
    pub cost: OrderedFloat<f64>,
}

impl<V> Edge<'_, V> {
    /// Returns the weight as a plain float.
    pub fn weight(&self) -> f64 {
        self.cost.into_inner()
    }

    /// True when both ends are the same vertex.
    pub fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.from == self.to
    }
}
