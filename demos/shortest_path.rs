//! Builds the five-vertex example graph and prints the cheapest route
//! from A to E.
//!
//! Run with `RUST_LOG=debug cargo run --example shortest_path` to see
//! the graph being built and searched.

use pathweave::{GraphError, WeightedGraph};

fn main() -> Result<(), GraphError<&'static str>> {
    env_logger::init();

    let mut graph = WeightedGraph::new();
    for vertex in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(vertex)?;
    }
    graph.add_edge(&"A", &"B", 1.0)?;
    graph.add_edge(&"A", &"C", 4.0)?;
    graph.add_edge(&"B", &"C", 2.0)?;
    graph.add_edge(&"B", &"D", 5.0)?;
    graph.add_edge(&"C", &"D", 1.0)?;
    graph.add_edge(&"C", &"E", 3.0)?;
    graph.add_edge(&"D", &"E", 1.0)?;

    let (start, target) = ("A", "E");
    let path = graph.shortest_path(&start, &target)?;
    println!(
        "Shortest path from {} to {}: {} (cost {})",
        start,
        target,
        path,
        path.cost()
    );
    Ok(())
}
