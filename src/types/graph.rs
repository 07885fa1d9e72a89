//! The core of the library.
//!
//! [`WeightedGraph`] owns a list of vertex labels in registration
//! order and a symmetric adjacency structure. Shortest paths are found
//! with Dijkstra's algorithm; see [`crate::SelectionStrategy`] for the
//! two interchangeable minimum-selection routines.
//!
//! The graph is built by a single owner and then queried. Queries take
//! `&self` and keep all working state local, so a finished graph can be
//! shared between threads and queried concurrently.

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::{
    algorithms::dijkstra::{self, Neighbors, SelectionStrategy},
    types::{
        edge::Edge,
        error::{GraphError, Result},
        path::Path,
        vertex::Label,
    },
    utils::graph::build_graph,
};

/// An undirected graph with non-negative edge weights.
///
/// Each vertex gets a dense id when it is registered. The id indexes
/// `vertices` and `adjacency` and fixes the tie-break order used by
/// shortest-path queries.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    vertices: Vec<V>,
    indices: HashMap<V, usize>,
    adjacency: Vec<Neighbors>,
}

impl<V: Label> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Label> WeightedGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        WeightedGraph {
            vertices: Vec::new(),
            indices: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        WeightedGraph {
            vertices: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
        }
    }

    /// Creates a graph from a list of vertices and a list of edges.
    ///
    /// All vertices are registered first, in the given order, then
    /// each edge is added. Construction stops at the first failure.
    ///
    /// # Arguments
    /// * `vertices` - Labels in registration (tie-break) order.
    /// * `edges` - Triples of `(a, b, weight)`.
    pub fn from_edges(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (V, V, f64)>,
    ) -> Result<Self, V> {
        build_graph(vertices, edges)
    }

    /// Registers a new vertex with no neighbors.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if the label is already present.
    /// The graph is left unchanged.
    pub fn add_vertex(&mut self, label: V) -> Result<(), V> {
        if self.indices.contains_key(&label) {
            warn!("Rejected duplicate vertex {:?}", label);
            return Err(GraphError::DuplicateVertex(label));
        }

        let id = self.vertices.len();
        debug!("Registering vertex {:?} as #{}", label, id);
        self.indices.insert(label.clone(), id);
        self.vertices.push(label);
        self.adjacency.push(Neighbors::new());
        Ok(())
    }

    /// Connects `a` and `b` with an undirected edge.
    ///
    /// Any previous weight between the same pair is overwritten in
    /// both directions. `a == b` stores a self-loop, which never
    /// shortens a path.
    ///
    /// # Errors
    /// * [`GraphError::UnknownVertex`] if either end is not registered.
    /// * [`GraphError::InvalidWeight`] if `weight` is negative or not
    ///   finite.
    ///
    /// Nothing is inserted when an error is returned.
    pub fn add_edge(&mut self, a: &V, b: &V, weight: f64) -> Result<(), V> {
        let from = self.index_of(a)?;
        let to = self.index_of(b)?;
        if !(weight.is_finite() && weight >= 0.0) {
            warn!("Rejected edge {:?} - {:?} with weight {}", a, b, weight);
            return Err(GraphError::InvalidWeight {
                from: a.clone(),
                to: b.clone(),
                weight,
            });
        }

        debug!("Adding edge {:?} - {:?} ({})", a, b, weight);
        self.adjacency[from].insert(to, OrderedFloat(weight));
        self.adjacency[to].insert(from, OrderedFloat(weight));
        Ok(())
    }

    /// Return the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Return the number of undirected edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn contains_vertex(&self, label: &V) -> bool {
        self.indices.contains_key(label)
    }

    /// Labels in registration order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Weight of the edge between `a` and `b`, if there is one.
    pub fn weight(&self, a: &V, b: &V) -> Option<f64> {
        let from = *self.indices.get(a)?;
        let to = *self.indices.get(b)?;
        self.adjacency[from].get(&to).map(|w| w.into_inner())
    }

    /// The neighbors of `label` with their edge weights, in
    /// registration order.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if the label is not registered.
    pub fn neighbors(&self, label: &V) -> Result<impl Iterator<Item = (&V, f64)> + '_, V> {
        let id = self.index_of(label)?;
        Ok(self.adjacency[id]
            .iter()
            .map(move |(&n, w)| (&self.vertices[n], w.into_inner())))
    }

    /// Get all the edges in the graph, one per undirected pair.
    ///
    /// Edges are ordered by the registration id of their first end,
    /// then of their second end.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_, V>> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(from, neighbors)| {
                neighbors
                    .range(from..)
                    .map(move |(&to, &cost)| Edge {
                        from: &self.vertices[from],
                        to: &self.vertices[to],
                        cost,
                    })
            })
    }

    /// Find the shortest path between two vertices using
    /// [`SelectionStrategy::LinearScan`].
    ///
    /// See [`WeightedGraph::shortest_path_with`].
    pub fn shortest_path(&self, from: &V, to: &V) -> Result<Path<V>, V> {
        self.shortest_path_with(from, to, SelectionStrategy::default())
    }

    /// Find the shortest path between two vertices.
    ///
    /// Among equally short paths the one discovered first wins:
    /// vertices at equal distance are finalized in registration order,
    /// and a neighbor's predecessor only changes on a strictly shorter
    /// distance. Repeated calls on the same graph return the same path.
    ///
    /// # Arguments
    /// * `from` - The vertex to start from.
    /// * `to` - The vertex to end at.
    /// * `strategy` - The minimum-selection routine. Does not affect
    ///   the result.
    ///
    /// # Returns
    /// A [`Path`] holding `from`, every intermediate vertex, and `to`,
    /// plus the total weight. `from == to` yields the single-vertex
    /// path with cost `0.0`. The cost is `+inf` when the sum of the
    /// weights overflows `f64`.
    ///
    /// # Errors
    /// * [`GraphError::UnknownVertex`] if either vertex is not registered.
    /// * [`GraphError::Unreachable`] if no path connects them.
    pub fn shortest_path_with(
        &self,
        from: &V,
        to: &V,
        strategy: SelectionStrategy,
    ) -> Result<Path<V>, V> {
        let source = self.index_of(from)?;
        let target = self.index_of(to)?;
        info!("Finding shortest path {:?} -> {:?} ({:?})", from, to, strategy);

        let tree = dijkstra::search(&self.adjacency, source, Some(target), strategy);
        let (ids, cost) = match (tree.path_to(target), tree.distance(target)) {
            (Some(ids), Some(cost)) => (ids, cost),
            _ => {
                warn!("No path from {:?} to {:?}", from, to);
                return Err(GraphError::Unreachable {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        };

        let path = Path::new(
            ids.into_iter().map(|id| self.vertices[id].clone()).collect(),
            cost,
        );
        debug!("cost: {}", cost);
        debug!("path: {:?}", path.vertices());
        Ok(path)
    }

    /// Distances from `from` to every vertex it can reach, itself
    /// included. Unreachable vertices are left out.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `from` is not registered.
    pub fn distances_from(&self, from: &V) -> Result<HashMap<V, f64>, V> {
        let source = self.index_of(from)?;
        debug!("Computing distances from {:?}", from);

        let tree = dijkstra::search(&self.adjacency, source, None, SelectionStrategy::BinaryHeap);
        Ok(tree
            .reached()
            .map(|(id, distance)| (self.vertices[id].clone(), distance))
            .collect())
    }

    /// Total weight of walking `walk` edge by edge.
    ///
    /// An empty or single-vertex walk costs `0.0`.
    ///
    /// # Errors
    /// * [`GraphError::UnknownVertex`] if a label is not registered.
    /// * [`GraphError::Unreachable`] if two consecutive labels are not
    ///   adjacent.
    pub fn path_cost(&self, walk: &[V]) -> Result<f64, V> {
        let mut total = 0.0;
        for label in walk {
            self.index_of(label)?;
        }
        for pair in walk.windows(2) {
            total += self
                .weight(&pair[0], &pair[1])
                .ok_or_else(|| GraphError::Unreachable {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                })?;
        }
        Ok(total)
    }

    /// Copies the graph into a petgraph [`UnGraph`].
    ///
    /// # Returns
    /// The petgraph graph and a map from each label to its
    /// [`NodeIndex`]. Node indices follow registration order.
    pub fn to_petgraph(&self) -> (UnGraph<V, f64>, HashMap<V, NodeIndex>) {
        let mut graph = UnGraph::with_capacity(self.vertex_count(), self.edge_count());
        let mut node_indices = HashMap::with_capacity(self.vertex_count());

        for label in &self.vertices {
            let index = graph.add_node(label.clone());
            node_indices.insert(label.clone(), index);
        }
        for edge in self.edges() {
            graph.add_edge(node_indices[edge.from], node_indices[edge.to], edge.weight());
        }
        (graph, node_indices)
    }

    /// Get the dense id for a label.
    fn index_of(&self, label: &V) -> Result<usize, V> {
        self.indices.get(label).copied().ok_or_else(|| {
            warn!("Unknown vertex {:?}", label);
            GraphError::UnknownVertex(label.clone())
        })
    }
}
