mod dfs;
mod kahn;

pub use dfs::topological_sort_dfs;
pub use kahn::topological_sort_kahn;

#[cfg(test)]
mod tests {
    use graph::Graph;
    use graph::GraphError;
    use graph::Vertex;
    use graph::Violation;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    use crate::topological_sort_dfs;
    use crate::topological_sort_kahn;

    type Sorter = fn(&Graph) -> Result<Vec<Vertex>, GraphError>;

    const SORTERS: [(&str, Sorter); 2] = [
        ("dfs", topological_sort_dfs),
        ("kahn", topological_sort_kahn),
    ];

    fn graph_from(n: usize, edges: &[(Vertex, Vertex)]) -> Graph {
        let mut g = Graph::directed(n);
        for &(u, v) in edges {
            g.add_edge(u, v).unwrap();
        }
        g
    }

    /// DAG whose edges follow a hidden random permutation.
    fn random_dag(n: usize, m: usize, seed: u64) -> Graph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut rank = (1..=n).collect::<Vec<_>>();
        rank.shuffle(&mut rng);
        let mut g = Graph::directed(n);
        for _ in 0..m {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            if a == b {
                continue;
            }
            let (a, b) = if a < b { (a, b) } else { (b, a) };
            g.add_edge(rank[a], rank[b]).unwrap();
        }
        g
    }

    fn assert_valid_order(g: &Graph, order: &[Vertex], label: &str) {
        let n = g.vertex_count();
        assert_eq!(order.len(), n, "{label}");
        let mut pos = vec![usize::MAX; n + 1];
        for (i, &u) in order.iter().enumerate() {
            assert_eq!(pos[u], usize::MAX, "{label}: {u} repeated");
            pos[u] = i;
        }
        for u in g.vertices() {
            for &v in g.neighbors(u).unwrap() {
                assert!(pos[u] < pos[v], "{label}: edge {u} -> {v} goes backwards");
            }
        }
    }

    #[test]
    fn known_orders() {
        let g = graph_from(6, &[(6, 3), (6, 1), (5, 1), (5, 2), (3, 4), (4, 2)]);
        assert_eq!(topological_sort_kahn(&g), Ok(vec![5, 6, 3, 1, 4, 2]));
        assert_eq!(topological_sort_dfs(&g), Ok(vec![6, 5, 3, 4, 2, 1]));
    }

    #[test]
    fn empty_and_edgeless() {
        for (name, sort) in SORTERS {
            assert_eq!(sort(&Graph::directed(0)), Ok(vec![]), "{name}");
            assert_eq!(sort(&Graph::directed(3)).map(|o| o.len()), Ok(3), "{name}");
        }
        assert_eq!(topological_sort_kahn(&Graph::directed(3)), Ok(vec![1, 2, 3]));
        assert_eq!(topological_sort_dfs(&Graph::directed(3)), Ok(vec![3, 2, 1]));
    }

    #[test]
    fn cycles_are_rejected() {
        let cyclic = [
            graph_from(3, &[(1, 2), (2, 3), (3, 1)]),
            graph_from(4, &[(1, 2), (3, 4), (4, 3)]),
            graph_from(2, &[(2, 2)]),
            {
                let mut g = Graph::undirected(2);
                g.add_edge(1, 2).unwrap();
                g
            },
        ];
        for g in &cyclic {
            for (name, sort) in SORTERS {
                assert_eq!(sort(g), Err(GraphError::from(Violation::Cycle)), "{name}");
            }
        }
    }

    #[test]
    fn random_dags_sort() {
        for seed in 0..20_u64 {
            let g = random_dag(40, 150, 0x7090_0000 + seed);
            for (name, sort) in SORTERS {
                let order = sort(&g).unwrap();
                assert_valid_order(&g, &order, &format!("{name} seed={seed}"));
            }
        }
    }

    #[test]
    fn deep_chain() {
        let n = 200_000;
        let mut g = Graph::directed(n);
        for v in 1..n {
            g.add_edge(v, v + 1).unwrap();
        }
        let expected = (1..=n).collect::<Vec<_>>();
        assert_eq!(topological_sort_dfs(&g), Ok(expected.clone()));
        assert_eq!(topological_sort_kahn(&g), Ok(expected));
    }
}
