//! Weighted Graph Path-Finding Library.
//! Builds undirected weighted graphs and answers shortest-path queries.
//!
//! The core is [`WeightedGraph`], which registers labeled vertices and
//! symmetric non-negative edges, then runs Dijkstra's algorithm with a
//! deterministic tie-break (vertex registration order).
//!
//! ```
//! use pathweave::WeightedGraph;
//!
//! let graph = WeightedGraph::from_edges(
//!     ["A", "B", "C", "D", "E"],
//!     [
//!         ("A", "B", 1.0),
//!         ("A", "C", 4.0),
//!         ("B", "C", 2.0),
//!         ("B", "D", 5.0),
//!         ("C", "D", 1.0),
//!         ("C", "E", 3.0),
//!         ("D", "E", 1.0),
//!     ],
//! )
//! .unwrap();
//!
//! let path = graph.shortest_path(&"A", &"E").unwrap();
//! assert_eq!(path.vertices(), &["A", "B", "C", "D", "E"]);
//! assert_eq!(path.cost(), 5.0);
//! ```
//!
//! The unrelated [`evolution`] module holds a small genetic algorithm
//! that evolves strings toward a target.

#[macro_use]
extern crate log;

mod types {
    pub mod edge;
    pub mod error;
    pub mod graph;
    pub mod path;
    pub mod vertex;
}

mod algorithms {
    pub mod dijkstra;
}

mod utils {
    pub mod graph;
}

pub mod evolution;

pub use algorithms::dijkstra::SelectionStrategy;
pub use types::edge::Edge;
pub use types::error::{GraphError, Result};
pub use types::graph::WeightedGraph;
pub use types::path::Path;
pub use types::vertex::Label;
pub use utils::graph::build_graph;
