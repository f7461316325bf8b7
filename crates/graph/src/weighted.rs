use std::ops::RangeInclusive;

use crate::Vertex;
use crate::error::GraphError;
use crate::error::check_vertex;

/// Adjacency record: the head of an outgoing edge and its weight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub to: Vertex,
    pub weight: i64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeightedEdge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: i64,
}

impl WeightedEdge {
    pub fn new(from: Vertex, to: Vertex, weight: i64) -> Self {
        Self { from, to, weight }
    }
}

/// Adjacency-list graph storing `(neighbor, weight)` records.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeightedGraph {
    vertex_count: usize,
    directed: bool,
    adj: Vec<Vec<Edge>>,
}

impl WeightedGraph {
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

    /// Builds a graph from `(u, v, weight)` triples, inserted in order.
    pub fn from_edges(
        vertex_count: usize,
        directed: bool,
        edges: &[(Vertex, Vertex, i64)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count, directed);
        for &(u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, u: Vertex, v: Vertex, weight: i64) -> Result<(), GraphError> {
        check_vertex(u, self.vertex_count)?;
        check_vertex(v, self.vertex_count)?;
        self.adj[u].push(Edge { to: v, weight });
        if !self.directed {
            self.adj[v].push(Edge { to: u, weight });
        }
        Ok(())
    }

    pub fn neighbors(&self, u: Vertex) -> Result<&[Edge], GraphError> {
        check_vertex(u, self.vertex_count)?;
        Ok(&self.adj[u])
    }

    /// Unchecked view for callers that already validated `u`.
    ///
    /// Panics if `u > vertex_count`.
    #[inline]
    pub fn out_edges(&self, u: Vertex) -> &[Edge] {
        &self.adj[u]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

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

    /// Every adjacency entry in vertex order. Undirected edges show up once
    /// per endpoint.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.adj.iter().enumerate().flat_map(|(from, list)| {
            list.iter()
                .map(move |e| WeightedEdge::new(from, e.to, e.weight))
        })
    }
}
