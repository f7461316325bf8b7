use std::collections::VecDeque;

use graph::Graph;
use graph::GraphError;
use graph::Vertex;
use graph::Violation;

/// Kahn's algorithm. Zero in-degree vertices leave the queue in id order
/// first, then in the order they become free.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn topological_sort_kahn(graph: &Graph) -> Result<Vec<Vertex>, GraphError> {
    let n = graph.vertex_count();
    let adj = graph.adjacency();

    let mut in_degree = vec![0_usize; n + 1];
    for list in &adj[1..] {
        for &v in list {
            in_degree[v] += 1;
        }
    }

    let mut queue = (1..=n).filter(|&u| in_degree[u] == 0).collect::<VecDeque<_>>();
    let mut order = Vec::with_capacity(n);

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in &adj[u] {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    if order.len() != n {
        return Err(Violation::Cycle.into());
    }

    tracing::debug!(len = order.len(), "kahn topological order");
    Ok(order)
}
