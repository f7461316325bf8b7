mod dsu;
mod kruskal;
mod prim;

use graph::GraphError;
use graph::Violation;
use graph::WeightedEdge;

pub use dsu::DisjointSetUnion;
pub use kruskal::kruskal;
pub use prim::prim;

/// Edges chosen by a spanning-forest algorithm, in selection order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SpanningForest {
    pub total_weight: i64,
    pub edges: Vec<WeightedEdge>,
}

impl SpanningForest {
    fn push(&mut self, edge: WeightedEdge) -> Result<(), GraphError> {
        self.total_weight = self
            .total_weight
            .checked_add(edge.weight)
            .ok_or(Violation::WeightOverflow)?;
        self.edges.push(edge);
        Ok(())
    }

    /// Whether the forest is a single tree over `[1, vertex_count]`.
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        vertex_count <= 1 || self.edges.len() + 1 == vertex_count
    }
}
