use graph::GraphError;
use graph::WeightedEdge;
use graph::check_vertex;

use crate::SpanningForest;
use crate::dsu::DisjointSetUnion;

/// Minimum spanning forest of the edge list over `[1, vertex_count]`.
///
/// Edges of equal weight keep their input order.
#[tracing::instrument(skip(edges), fields(edge_count = edges.len()))]
pub fn kruskal(vertex_count: usize, edges: &[WeightedEdge]) -> Result<SpanningForest, GraphError> {
    for e in edges {
        check_vertex(e.from, vertex_count)?;
        check_vertex(e.to, vertex_count)?;
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|e| e.weight);

    let mut dsu = DisjointSetUnion::new(vertex_count);
    let mut forest = SpanningForest::default();
    for e in sorted {
        if dsu.union(e.from, e.to) {
            forest.push(e)?;
        }
    }

    tracing::debug!(
        total_weight = forest.total_weight,
        chosen = forest.edges.len(),
        "kruskal finished"
    );
    Ok(forest)
}
