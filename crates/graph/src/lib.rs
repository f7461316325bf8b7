mod error;
mod graph;
mod weighted;

pub use error::GraphError;
pub use error::Violation;
pub use error::check_vertex;
pub use graph::Graph;
pub use weighted::Edge;
pub use weighted::WeightedEdge;
pub use weighted::WeightedGraph;

/// Vertex id. Valid ids are `1..=V`; id 0 is reserved.
pub type Vertex = usize;

/// Read-only neighbor access shared by every adjacency representation.
///
/// `neighbor_ids` does not validate `u`; callers check it against
/// `vertex_count` first. A plain `[Vec<Vertex>]` is treated as 1-based with
/// slot 0 unused, so `V = len - 1`.
pub trait Adjacency {
    fn vertex_count(&self) -> usize;
    fn neighbor_ids(&self, u: Vertex) -> impl Iterator<Item = Vertex> + '_;
}

impl Adjacency for Graph {
    #[inline]
    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    #[inline]
    fn neighbor_ids(&self, u: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency()[u].iter().copied()
    }
}

impl Adjacency for WeightedGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        WeightedGraph::vertex_count(self)
    }

    #[inline]
    fn neighbor_ids(&self, u: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.out_edges(u).iter().map(|e| e.to)
    }
}

impl Adjacency for [Vec<Vertex>] {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len().saturating_sub(1)
    }

    #[inline]
    fn neighbor_ids(&self, u: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self[u].iter().copied()
    }
}

impl Adjacency for Vec<Vec<Vertex>> {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.as_slice().vertex_count()
    }

    #[inline]
    fn neighbor_ids(&self, u: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.as_slice().neighbor_ids(u)
    }
}
