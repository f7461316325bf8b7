use std::cmp::Reverse;
use std::collections::BinaryHeap;

use graph::GraphError;
use graph::Violation;
use graph::WeightedEdge;
use graph::WeightedGraph;

use crate::SpanningForest;

/// Minimum spanning forest by lazy Prim.
///
/// Grows a tree from vertex 1, then from the smallest unvisited vertex, until
/// every component is covered.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn prim(graph: &WeightedGraph) -> Result<SpanningForest, GraphError> {
    if graph.is_directed() {
        return Err(Violation::DirectedGraph.into());
    }

    let n = graph.vertex_count();
    let mut visited = vec![false; n + 1];
    let mut forest = SpanningForest::default();
    let mut heap = BinaryHeap::new();

    for start in 1..=n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        for edge in graph.out_edges(start) {
            heap.push(Reverse((edge.weight, start, edge.to)));
        }

        while let Some(Reverse((weight, from, to))) = heap.pop() {
            if visited[to] {
                continue;
            }
            visited[to] = true;
            forest.push(WeightedEdge::new(from, to, weight))?;
            for edge in graph.out_edges(to) {
                if !visited[edge.to] {
                    heap.push(Reverse((edge.weight, to, edge.to)));
                }
            }
        }
    }

    tracing::debug!(
        total_weight = forest.total_weight,
        chosen = forest.edges.len(),
        "prim finished"
    );
    Ok(forest)
}
