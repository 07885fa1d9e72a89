//! Dijkstra's single-source shortest-path search over a dense,
//! index-addressed adjacency list.
//!
//! Vertices are identified by the integer id handed out at
//! registration, so "lowest id" and "registered first" mean the same
//! thing. That is the tie-break used whenever two unvisited vertices
//! share the minimum distance.
//!
//! The distance and predecessor tables live in a [`SearchTree`] created
//! per call. Nothing is written back to the graph.

use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

/// Neighbor id to edge weight, one map per vertex.
pub(crate) type Neighbors = BTreeMap<usize, OrderedFloat<f64>>;

/// How the next vertex to finalize is chosen.
///
/// Both strategies visit vertices in exactly the same order and so
/// produce identical distances, predecessors and paths.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum SelectionStrategy {
    /// Scan every unvisited vertex each round. *O*(*V^2*).
    #[default]
    LinearScan,
    /// Pop from a min-heap keyed by `(distance, id)`.
    /// *O*((*V* + *E*) log *V*).
    BinaryHeap,
}

/// Distances and predecessors produced by one search.
#[derive(Debug, Clone)]
pub(crate) struct SearchTree {
    source: usize,
    /// [`None`] until a vertex is first reached. A reached vertex may
    /// sit at `+inf` when its path sum overflows.
    distances: Vec<Option<f64>>,
    predecessors: Vec<Option<usize>>,
    visited: Vec<bool>,
}

impl SearchTree {
    fn new(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(0.0);
        SearchTree {
            source,
            distances,
            predecessors: vec![None; vertex_count],
            visited: vec![false; vertex_count],
        }
    }

    /// Best known distance, or [`None`] when the vertex was never reached.
    pub fn distance(&self, vertex: usize) -> Option<f64> {
        self.distances[vertex]
    }

    /// Ids of every reached vertex with its distance, in id order.
    pub fn reached(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.distances.len()).filter_map(|v| self.distance(v).map(|d| (v, d)))
    }

    /// Walks predecessor links back from `target` to the source.
    ///
    /// Returns [`None`] when the chain does not end at the source,
    /// rather than a truncated path.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Finalizes `vertex` and relaxes each of its edges. Calls
    /// `on_improve` for every neighbor whose distance strictly dropped.
    fn settle(
        &mut self,
        adjacency: &[Neighbors],
        vertex: usize,
        mut on_improve: impl FnMut(usize, f64),
    ) {
        self.visited[vertex] = true;
        let base = match self.distances[vertex] {
            Some(distance) => distance,
            None => return,
        };

        for (&neighbor, weight) in &adjacency[vertex] {
            if self.visited[neighbor] {
                continue;
            }
            let candidate = base + weight.into_inner();
            let improves = match self.distances[neighbor] {
                Some(known) => candidate < known,
                None => true,
            };
            if improves {
                self.distances[neighbor] = Some(candidate);
                self.predecessors[neighbor] = Some(vertex);
                on_improve(neighbor, candidate);
            }
        }
    }
}

/// Runs Dijkstra from `source`.
///
/// # Arguments
/// * `adjacency` - Neighbor maps indexed by vertex id.
/// * `source` - Id of the start vertex.
/// * `goal` - Stop as soon as this vertex is finalized. Its distance
///   and predecessor chain are final at that point.
/// * `strategy` - How to pick the next vertex.
///
/// # Returns
/// The [`SearchTree`] for the run. Vertices with no distance were
/// unreachable (or not needed before `goal` was settled).
pub(crate) fn search(
    adjacency: &[Neighbors],
    source: usize,
    goal: Option<usize>,
    strategy: SelectionStrategy,
) -> SearchTree {
    let mut tree = SearchTree::new(adjacency.len(), source);
    match strategy {
        SelectionStrategy::LinearScan => linear_scan(adjacency, &mut tree, goal),
        SelectionStrategy::BinaryHeap => binary_heap(adjacency, &mut tree, goal),
    }
    tree
}

//---------------------------------------------------------------
// Private functions
//---------------------------------------------------------------

fn linear_scan(adjacency: &[Neighbors], tree: &mut SearchTree, goal: Option<usize>) {
    while let Some(current) = closest_unvisited(tree) {
        tree.settle(adjacency, current, |_, _| {});
        if goal == Some(current) {
            return;
        }
    }
}

/// The reached, unvisited vertex with the smallest distance, lowest id
/// first on ties. [`None`] once nothing reached is left.
fn closest_unvisited(tree: &SearchTree) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (vertex, distance) in tree.distances.iter().enumerate() {
        let distance = match distance {
            Some(d) if !tree.visited[vertex] => *d,
            _ => continue,
        };
        match best {
            Some((_, b)) if b <= distance => {}
            _ => best = Some((vertex, distance)),
        }
    }
    best.map(|(vertex, _)| vertex)
}

fn binary_heap(adjacency: &[Neighbors], tree: &mut SearchTree, goal: Option<usize>) {
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), tree.source)));

    while let Some(Reverse((OrderedFloat(distance), current))) = heap.pop() {
        // Stale entry: a shorter distance was pushed later, or already settled.
        let stale = match tree.distances[current] {
            Some(known) => distance > known,
            None => true,
        };
        if tree.visited[current] || stale {
            continue;
        }
        tree.settle(adjacency, current, |neighbor, candidate| {
            heap.push(Reverse((OrderedFloat(candidate), neighbor)));
        });
        if goal == Some(current) {
            return;
        }
    }
}

#[cfg(test)]
mod dijkstra_tests {
    use super::*;

    const STRATEGIES: [SelectionStrategy; 2] =
        [SelectionStrategy::LinearScan, SelectionStrategy::BinaryHeap];

    fn undirected(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Vec<Neighbors> {
        let mut adjacency = vec![Neighbors::new(); vertex_count];
        for &(a, b, w) in edges {
            adjacency[a].insert(b, OrderedFloat(w));
            adjacency[b].insert(a, OrderedFloat(w));
        }
        adjacency
    }

    /// A=0 .. E=4 with the weights from the worked example.
    fn canonical() -> Vec<Neighbors> {
        undirected(
            5,
            &[
                (0, 1, 1.0),
                (0, 2, 4.0),
                (1, 2, 2.0),
                (1, 3, 5.0),
                (2, 3, 1.0),
                (2, 4, 3.0),
                (3, 4, 1.0),
            ],
        )
    }

    #[test]
    fn test_canonical_distances() {
        for strategy in STRATEGIES {
            let tree = search(&canonical(), 0, None, strategy);
            let distances: Vec<_> = (0..5).map(|v| tree.distance(v)).collect();
            assert_eq!(
                distances,
                vec![Some(0.0), Some(1.0), Some(3.0), Some(4.0), Some(5.0)]
            );
            assert_eq!(tree.path_to(4), Some(vec![0, 1, 2, 3, 4]));
        }
    }

    #[test]
    fn test_goal_stops_early_with_final_path() {
        for strategy in STRATEGIES {
            let tree = search(&canonical(), 0, Some(1), strategy);
            assert_eq!(tree.path_to(1), Some(vec![0, 1]));
            // E was never touched before B settled.
            assert_eq!(tree.distance(4), None);
        }
    }

    /// A square where both routes to the far corner cost 2.
    #[test]
    fn test_ties_prefer_lower_ids() {
        let adjacency = undirected(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)]);
        for strategy in STRATEGIES {
            let tree = search(&adjacency, 0, None, strategy);
            assert_eq!(tree.path_to(3), Some(vec![0, 1, 3]));
        }
    }

    #[test]
    fn test_equal_cost_alternatives_keep_first_predecessor() {
        // 0-1 costs 2 directly and 2 via vertex 2; the direct edge is
        // relaxed first and is not replaced.
        let adjacency = undirected(3, &[(0, 1, 2.0), (0, 2, 1.0), (2, 1, 1.0)]);
        for strategy in STRATEGIES {
            let tree = search(&adjacency, 0, None, strategy);
            assert_eq!(tree.path_to(1), Some(vec![0, 1]));
        }
    }

    #[test]
    fn test_unreachable_vertex_has_no_path() {
        let adjacency = undirected(3, &[(0, 1, 1.0)]);
        for strategy in STRATEGIES {
            let tree = search(&adjacency, 0, None, strategy);
            assert_eq!(tree.distance(2), None);
            assert_eq!(tree.path_to(2), None);
            assert_eq!(tree.reached().collect::<Vec<_>>(), vec![(0, 0.0), (1, 1.0)]);
        }
    }

    #[test]
    fn test_zero_weights_and_self_loops() {
        let adjacency = undirected(3, &[(0, 0, 0.0), (0, 1, 0.0), (1, 2, 0.0)]);
        for strategy in STRATEGIES {
            let tree = search(&adjacency, 0, None, strategy);
            assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
            assert_eq!(tree.distance(2), Some(0.0));
        }
    }

    #[test]
    fn test_overflowing_path_sum_is_still_reached() {
        let adjacency = undirected(3, &[(0, 1, f64::MAX), (1, 2, f64::MAX)]);
        for strategy in STRATEGIES {
            let tree = search(&adjacency, 0, None, strategy);
            assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
            assert_eq!(tree.distance(2), Some(f64::INFINITY));
        }
    }

    #[test]
    fn test_source_to_itself() {
        for strategy in STRATEGIES {
            let tree = search(&canonical(), 3, None, strategy);
            assert_eq!(tree.path_to(3), Some(vec![3]));
            assert_eq!(tree.distance(3), Some(0.0));
        }
    }
}
