mod binary_lifting;
mod euler;
mod segment_tree;

use graph::Adjacency;
use graph::GraphError;
use graph::Vertex;

pub use binary_lifting::BinaryLiftingLca;
pub use segment_tree::PADDING_DEPTH;
pub use segment_tree::SegmentTreeLca;

/// Static lowest-common-ancestor interface over a rooted tree.
///
/// - The input must be a tree spanning every vertex of `[1, V]`; anything
///   else is rejected with `PreconditionViolated(NotATree)`.
/// - Construction does all the work, so a built value always answers queries.
/// - Every vertex is its own ancestor: `lca(u, u) == u`.
pub trait StaticLca: Sized {
    fn new<A: Adjacency + ?Sized>(adjacency: &A, root: Vertex) -> Result<Self, GraphError>;
    fn lca(&self, u: Vertex, v: Vertex) -> Result<Vertex, GraphError>;
    fn depth(&self, v: Vertex) -> Result<usize, GraphError>;
    fn root(&self) -> Vertex;
}
