//! Definition of the [`Label`] trait that identifies vertices.
//!
//! A vertex carries no data of its own. It is known only by its label,
//! and two vertices are the same vertex when their labels compare
//! equal. Short strings such as `"A"` are the usual choice, but any
//! cloneable, hashable value works.
//!
//! Since Rust doesn't have a built-in way to name a bundle of bounds,
//! the [`Label`] trait stands in for `Clone + Eq + Hash + Debug` and is
//! implemented for every type that satisfies them.

use std::fmt::Debug;
use std::hash::Hash;

/// Anything that can identify a vertex in a
/// [`WeightedGraph`](super::graph::WeightedGraph).
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Label for T {}
