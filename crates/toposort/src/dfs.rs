use graph::Graph;
use graph::GraphError;
use graph::Vertex;
use graph::Violation;

/// Reverse post-order of a depth-first search rooted at `1, 2, .., V` in
/// turn, rejected if any edge points backwards in the result.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn topological_sort_dfs(graph: &Graph) -> Result<Vec<Vertex>, GraphError> {
    let n = graph.vertex_count();
    let adj = graph.adjacency();
    let mut visited = vec![false; n + 1];
    let mut order = Vec::with_capacity(n);
    // (vertex, index of the next neighbor to try)
    let mut stack: Vec<(Vertex, usize)> = Vec::new();

    for start in 1..=n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        stack.push((start, 0));

        while let Some(top) = stack.last_mut() {
            let (u, next) = *top;
            match adj[u].get(next) {
                Some(&v) => {
                    top.1 += 1;
                    if !visited[v] {
                        visited[v] = true;
                        stack.push((v, 0));
                    }
                }
                None => {
                    order.push(u);
                    stack.pop();
                }
            }
        }
    }
    order.reverse();

    let mut pos = vec![0; n + 1];
    for (i, &u) in order.iter().enumerate() {
        pos[u] = i;
    }
    for u in 1..=n {
        if adj[u].iter().any(|&v| pos[v] <= pos[u]) {
            return Err(Violation::Cycle.into());
        }
    }

    tracing::debug!(len = order.len(), "dfs topological order");
    Ok(order)
}
