use thiserror::Error;

use crate::Vertex;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GraphError {
    #[error("vertex {vertex} is outside [1, {vertex_count}]")]
    OutOfRange { vertex: Vertex, vertex_count: usize },

    #[error("precondition violated: {0}")]
    PreconditionViolated(#[from] Violation),

    #[error("queried before solve")]
    NotBuilt,
}

/// Input that an algorithm is not defined for.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Violation {
    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight { from: Vertex, to: Vertex, weight: i64 },

    #[error("edge {from} -> {to} has weight {weight}, at or above the distance sentinel")]
    WeightTooLarge { from: Vertex, to: Vertex, weight: i64 },

    #[error("sum of edge weights overflows")]
    WeightOverflow,

    #[error("graph contains a negative cycle")]
    NegativeCycle,

    #[error("vertex {target} is unreachable from {origin}")]
    Unreachable { origin: Vertex, target: Vertex },

    #[error("input is not a tree rooted at {root}")]
    NotATree { root: Vertex },

    #[error("graph contains a cycle")]
    Cycle,

    #[error("graph is directed")]
    DirectedGraph,
}

/// `OutOfRange` unless `vertex` lies in `[1, vertex_count]`.
#[inline]
pub fn check_vertex(vertex: Vertex, vertex_count: usize) -> Result<(), GraphError> {
    if vertex == 0 || vertex > vertex_count {
        return Err(GraphError::OutOfRange {
            vertex,
            vertex_count,
        });
    }
    Ok(())
}
