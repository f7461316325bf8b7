use graph::GraphError;
use graph::Vertex;
use graph::Violation;
use graph::WeightedGraph;
use graph::check_vertex;

use crate::UNREACHABLE;

/// All-pairs distances, `(V + 1) x (V + 1)` with row and column 0 unused.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistanceMatrix {
    vertex_count: usize,
    dist: Vec<i64>,
}

impl DistanceMatrix {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Distance `u -> v`, or [`UNREACHABLE`].
    pub fn distance(&self, u: Vertex, v: Vertex) -> Result<i64, GraphError> {
        check_vertex(u, self.vertex_count)?;
        check_vertex(v, self.vertex_count)?;
        Ok(self.dist[u * (self.vertex_count + 1) + v])
    }

    /// Row `u`, indexed by target vertex.
    pub fn row(&self, u: Vertex) -> Result<&[i64], GraphError> {
        check_vertex(u, self.vertex_count)?;
        let stride = self.vertex_count + 1;
        Ok(&self.dist[u * stride..(u + 1) * stride])
    }
}

/// Floyd–Warshall. Negative weights are allowed, negative cycles are not.
/// Weights and distances must stay below [`UNREACHABLE`].
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn floyd_warshall(graph: &WeightedGraph) -> Result<DistanceMatrix, GraphError> {
    let n = graph.vertex_count();
    let stride = n + 1;
    let mut dist = vec![UNREACHABLE; stride * stride];

    for u in 1..=n {
        dist[u * stride + u] = 0;
    }
    for e in graph.edges() {
        if e.weight >= UNREACHABLE {
            return Err(Violation::WeightTooLarge {
                from: e.from,
                to: e.to,
                weight: e.weight,
            }
            .into());
        }
        let cell = &mut dist[e.from * stride + e.to];
        *cell = (*cell).min(e.weight);
    }

    for k in 1..=n {
        for i in 1..=n {
            let dik = dist[i * stride + k];
            if dik == UNREACHABLE {
                continue;
            }
            for j in 1..=n {
                let dkj = dist[k * stride + j];
                if dkj == UNREACHABLE {
                    continue;
                }
                let cand = dik.saturating_add(dkj);
                if cand >= UNREACHABLE {
                    return Err(Violation::WeightOverflow.into());
                }
                let cell = &mut dist[i * stride + j];
                if cand < *cell {
                    *cell = cand;
                }
            }
        }
    }

    if (1..=n).any(|u| dist[u * stride + u] < 0) {
        return Err(Violation::NegativeCycle.into());
    }

    tracing::debug!("floyd-warshall finished");
    Ok(DistanceMatrix {
        vertex_count: n,
        dist,
    })
}
