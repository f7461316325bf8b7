use std::ops::RangeInclusive;

use crate::Vertex;
use crate::error::GraphError;
use crate::error::check_vertex;

/// Unweighted adjacency-list graph over vertices `[1, V]`.
///
/// Slot 0 of the adjacency storage exists but never receives edges.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    directed: bool,
    adj: Vec<Vec<Vertex>>,
}

impl Graph {
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self {
            vertex_count,
            directed,
            adj: vec![Vec::new(); vertex_count + 1],
        }
    }

    pub fn undirected(vertex_count: usize) -> Self {
        Self::new(vertex_count, false)
    }

    pub fn directed(vertex_count: usize) -> Self {
        Self::new(vertex_count, true)
    }

    /// Appends `u -> v`, and `v -> u` as well when the graph is undirected.
    ///
    /// Both endpoints are validated before anything is appended.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<(), GraphError> {
        check_vertex(u, self.vertex_count)?;
        check_vertex(v, self.vertex_count)?;
        self.adj[u].push(v);
        if !self.directed {
            self.adj[v].push(u);
        }
        Ok(())
    }

    pub fn neighbors(&self, u: Vertex) -> Result<&[Vertex], GraphError> {
        check_vertex(u, self.vertex_count)?;
        Ok(&self.adj[u])
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of adjacency entries; an undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertices(&self) -> RangeInclusive<Vertex> {
        1..=self.vertex_count
    }

    /// Adjacency slots indexed by vertex, slot 0 included.
    #[inline]
    pub fn adjacency(&self) -> &[Vec<Vertex>] {
        &self.adj
    }
}
