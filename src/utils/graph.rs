//! Helper functions for working with graphs.

use crate::types::{error::Result, graph::WeightedGraph, vertex::Label};

/// Build a graph from vertex labels and weighted edges.
///
/// Vertices are registered in the order given, which fixes the
/// tie-break order of later shortest-path queries. Edges are added
/// afterwards and may only mention registered vertices.
///
/// # Arguments
/// * `vertices` - Labels to register.
/// * `edges` - Edges in the format of (one_end, other_end, weight).
///
/// # Returns
/// The finished graph, or the first error hit while building it.
///
/// # Time Complexity
/// *O*(*V* + *E* log *V*).
pub fn build_graph<V: Label>(
    vertices: impl IntoIterator<Item = V>,
    edges: impl IntoIterator<Item = (V, V, f64)>,
) -> Result<WeightedGraph<V>, V> {
    let vertices = vertices.into_iter();
    let mut graph = WeightedGraph::with_capacity(vertices.size_hint().0);

    for vertex in vertices {
        graph.add_vertex(vertex)?;
    }
    for (a, b, weight) in edges {
        graph.add_edge(&a, &b, weight)?;
    }

    debug!(
        "Built graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod build_graph_tests {
    use super::build_graph;
    use crate::GraphError;

    #[test]
    fn test_builds_in_order() {
        let graph = build_graph(
            vec!["x".to_string(), "y".to_string(), "z".to_string()],
            vec![("z".to_string(), "x".to_string(), 2.5)],
        )
        .unwrap();

        assert_eq!(graph.vertices(), &["x", "y", "z"]);
        assert_eq!(graph.weight(&"x".to_string(), &"z".to_string()), Some(2.5));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_stops_at_first_error() {
        let duplicate = build_graph([1, 2, 1], []);
        assert_eq!(duplicate.unwrap_err(), GraphError::DuplicateVertex(1));

        let negative = build_graph([1, 2], [(1, 2, 1.0), (2, 1, -0.5), (1, 3, 1.0)]);
        assert_eq!(
            negative.unwrap_err(),
            GraphError::InvalidWeight {
                from: 2,
                to: 1,
                weight: -0.5
            }
        );
    }
}
