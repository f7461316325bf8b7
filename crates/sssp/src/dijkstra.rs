use std::cmp::Reverse;
use std::collections::BinaryHeap;

use graph::GraphError;
use graph::Vertex;
use graph::Violation;
use graph::WeightedGraph;
use graph::check_vertex;

use crate::UNREACHABLE;

#[derive(Clone, Debug)]
struct Solution {
    source: Vertex,
    dist: Vec<i64>,
    parent: Vec<Option<Vertex>>,
}

/// Single-source shortest paths over a borrowed [`WeightedGraph`].
///
/// Queries fail with [`GraphError::NotBuilt`] until [`solve`](Self::solve)
/// has run. Solving again replaces the previous result.
#[derive(Clone, Debug)]
pub struct ShortestPathSolver<'g> {
    graph: &'g WeightedGraph,
    solution: Option<Solution>,
}

impl<'g> ShortestPathSolver<'g> {
    pub fn new(graph: &'g WeightedGraph) -> Self {
        Self {
            graph,
            solution: None,
        }
    }

    #[inline]
    pub fn graph(&self) -> &'g WeightedGraph {
        self.graph
    }

    /// Runs Dijkstra from `source`.
    ///
    /// Every edge weight must lie in `[0, UNREACHABLE)`, and every shortest
    /// distance must stay below [`UNREACHABLE`]; anything else is rejected
    /// and leaves the previous result in place.
    #[tracing::instrument(skip(self), fields(vertex_count = self.graph.vertex_count()))]
    pub fn solve(&mut self, source: Vertex) -> Result<(), GraphError> {
        let graph = self.graph;
        let n = graph.vertex_count();
        check_vertex(source, n)?;
        for e in graph.edges() {
            if e.weight < 0 {
                return Err(Violation::NegativeWeight {
                    from: e.from,
                    to: e.to,
                    weight: e.weight,
                }
                .into());
            }
            if e.weight >= UNREACHABLE {
                return Err(Violation::WeightTooLarge {
                    from: e.from,
                    to: e.to,
                    weight: e.weight,
                }
                .into());
            }
        }

        let mut dist = vec![UNREACHABLE; n + 1];
        let mut parent = vec![None; n + 1];

        let mut heap = BinaryHeap::new();
        dist[source] = 0;
        heap.push(Reverse((0_i64, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if d > dist[u] {
                continue;
            }

            for edge in graph.out_edges(u) {
                let v = edge.to;
                // Both operands are below the sentinel, so this cannot wrap.
                let cand = d + edge.weight;
                if cand >= UNREACHABLE {
                    return Err(Violation::WeightOverflow.into());
                }
                if cand < dist[v] {
                    dist[v] = cand;
                    parent[v] = Some(u);
                    heap.push(Reverse((cand, v)));
                }
            }
        }

        tracing::debug!(
            source,
            reached = dist.iter().filter(|&&d| d != UNREACHABLE).count(),
            "dijkstra finished"
        );
        self.solution = Some(Solution {
            source,
            dist,
            parent,
        });
        Ok(())
    }

    /// Source of the last successful [`solve`](Self::solve).
    pub fn source(&self) -> Option<Vertex> {
        self.solution.as_ref().map(|s| s.source)
    }

    fn solved(&self) -> Result<&Solution, GraphError> {
        self.solution.as_ref().ok_or(GraphError::NotBuilt)
    }

    /// Shortest distance to `v`, or [`UNREACHABLE`] when no path exists.
    pub fn distance_to(&self, v: Vertex) -> Result<i64, GraphError> {
        let solution = self.solved()?;
        check_vertex(v, self.graph.vertex_count())?;
        Ok(solution.dist[v])
    }

    pub fn is_reachable(&self, v: Vertex) -> Result<bool, GraphError> {
        Ok(self.distance_to(v)? != UNREACHABLE)
    }

    /// Vertex preceding `v` on its shortest path. `None` for the source and
    /// for unreachable vertices.
    pub fn predecessor_of(&self, v: Vertex) -> Result<Option<Vertex>, GraphError> {
        let solution = self.solved()?;
        check_vertex(v, self.graph.vertex_count())?;
        Ok(solution.parent[v])
    }

    /// Distances indexed by vertex; slot 0 is always [`UNREACHABLE`].
    pub fn distances(&self) -> Result<&[i64], GraphError> {
        Ok(&self.solved()?.dist)
    }

    /// Shortest path `source -> target` following predecessor links.
    ///
    /// `source` may be any vertex on the shortest-path tree, not only the
    /// vertex that was solved from.
    pub fn reconstruct_path(
        &self,
        source: Vertex,
        target: Vertex,
    ) -> Result<Vec<Vertex>, GraphError> {
        let solution = self.solved()?;
        let n = self.graph.vertex_count();
        check_vertex(source, n)?;
        check_vertex(target, n)?;

        let unreachable = || {
            GraphError::from(Violation::Unreachable {
                origin: source,
                target,
            })
        };
        if solution.dist[target] == UNREACHABLE {
            return Err(unreachable());
        }

        let mut path = Vec::new();
        let mut cur = target;
        while cur != source {
            path.push(cur);
            cur = solution.parent[cur].ok_or_else(unreachable)?;
        }
        path.push(source);
        path.reverse();
        Ok(path)
    }
}

/// Distances from `source`, indexed by vertex.
pub fn dijkstra(graph: &WeightedGraph, source: Vertex) -> Result<Vec<i64>, GraphError> {
    let mut solver = ShortestPathSolver::new(graph);
    solver.solve(source)?;
    let ShortestPathSolver { solution, .. } = solver;
    solution.map(|s| s.dist).ok_or(GraphError::NotBuilt)
}
