use graph::Adjacency;
use graph::GraphError;
use graph::Vertex;
use graph::Violation;
use graph::check_vertex;

/// One depth-first pass over a tree, shared by both LCA structures.
///
/// `tour` lists a vertex on entry and again after each child returns.
/// `tin`/`tout` come from a single counter bumped on entry and on exit, so
/// the intervals of a vertex and its descendants nest.
#[derive(Clone, Debug)]
pub(crate) struct EulerTour {
    pub(crate) tour: Vec<Vertex>,
    pub(crate) first: Vec<usize>,
    pub(crate) depth: Vec<usize>,
    pub(crate) parent: Vec<Option<Vertex>>,
    pub(crate) tin: Vec<usize>,
    pub(crate) tout: Vec<usize>,
}

struct Frame<I> {
    vertex: Vertex,
    neighbors: I,
    parent_skipped: bool,
}

impl EulerTour {
    /// Walks the tree with an explicit stack; the visit order matches the
    /// recursive traversal over neighbors in adjacency order.
    ///
    /// The back edge to the parent is skipped once, so both undirected
    /// adjacency and child-only lists are accepted. Any other edge to a
    /// visited vertex, or a vertex left unreached, means the input is not a
    /// tree.
    pub(crate) fn new<A: Adjacency + ?Sized>(adj: &A, root: Vertex) -> Result<Self, GraphError> {
        let n = adj.vertex_count();
        check_vertex(root, n)?;
        let not_a_tree = || GraphError::from(Violation::NotATree { root });

        let mut visited = vec![false; n + 1];
        let mut tour = Vec::with_capacity(2 * n - 1);
        let mut first = vec![0; n + 1];
        let mut depth = vec![0; n + 1];
        let mut parent = vec![None; n + 1];
        let mut tin = vec![0; n + 1];
        let mut tout = vec![0; n + 1];
        let mut timer = 0_usize;

        visited[root] = true;
        tour.push(root);
        tin[root] = timer;
        timer += 1;
        let mut stack = vec![Frame {
            vertex: root,
            neighbors: adj.neighbor_ids(root),
            parent_skipped: false,
        }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            let Some(v) = frame.neighbors.next() else {
                tout[u] = timer;
                timer += 1;
                stack.pop();
                if let Some(up) = stack.last() {
                    tour.push(up.vertex);
                }
                continue;
            };
            check_vertex(v, n)?;

            if parent[u] == Some(v) && !frame.parent_skipped {
                frame.parent_skipped = true;
                continue;
            }
            if visited[v] {
                return Err(not_a_tree());
            }

            visited[v] = true;
            depth[v] = depth[u] + 1;
            parent[v] = Some(u);
            first[v] = tour.len();
            tour.push(v);
            tin[v] = timer;
            timer += 1;
            stack.push(Frame {
                vertex: v,
                neighbors: adj.neighbor_ids(v),
                parent_skipped: false,
            });
        }

        if visited[1..].iter().any(|&seen| !seen) {
            return Err(not_a_tree());
        }

        Ok(Self {
            tour,
            first,
            depth,
            parent,
            tin,
            tout,
        })
    }
}

#[cfg(test)]
mod tests {
    use graph::Graph;

    use super::*;

    fn sample_tree() -> Graph {
        let mut g = Graph::undirected(5);
        for (u, v) in [(1, 2), (1, 3), (2, 4), (2, 5)] {
            g.add_edge(u, v).unwrap();
        }
        g
    }

    #[test]
    fn tour_of_sample_tree() {
        let et = EulerTour::new(&sample_tree(), 1).unwrap();
        assert_eq!(et.tour, vec![1, 2, 4, 2, 5, 2, 1, 3, 1]);
        assert_eq!(&et.first[1..], &[0, 1, 7, 2, 4]);
        assert_eq!(&et.depth[1..], &[0, 1, 1, 2, 2]);
        assert_eq!(&et.parent[1..], &[None, Some(1), Some(1), Some(2), Some(2)]);
        assert_eq!(&et.tin[1..], &[0, 1, 7, 2, 4]);
        assert_eq!(&et.tout[1..], &[9, 6, 8, 3, 5]);
    }

    #[test]
    fn tour_from_other_root() {
        let et = EulerTour::new(&sample_tree(), 4).unwrap();
        assert_eq!(et.tour, vec![4, 2, 1, 3, 1, 2, 5, 2, 4]);
        assert_eq!(et.depth[3], 3);
    }

    #[test]
    fn child_lists_are_accepted() {
        let children: Vec<Vec<Vertex>> = vec![vec![], vec![2, 3], vec![4, 5], vec![], vec![], vec![]];
        let et = EulerTour::new(&children, 1).unwrap();
        assert_eq!(et.tour, vec![1, 2, 4, 2, 5, 2, 1, 3, 1]);
    }

    #[test]
    fn rejects_non_trees() {
        let mut cyclic = sample_tree();
        cyclic.add_edge(4, 5).unwrap();
        assert_eq!(
            EulerTour::new(&cyclic, 1).unwrap_err(),
            GraphError::from(Violation::NotATree { root: 1 })
        );

        let mut doubled = sample_tree();
        doubled.add_edge(1, 3).unwrap();
        assert!(EulerTour::new(&doubled, 1).is_err());

        let mut looped = sample_tree();
        looped.add_edge(3, 3).unwrap();
        assert!(EulerTour::new(&looped, 1).is_err());

        let mut forest = Graph::undirected(4);
        forest.add_edge(1, 2).unwrap();
        forest.add_edge(3, 4).unwrap();
        assert!(EulerTour::new(&forest, 1).is_err());

        let bad_ids: Vec<Vec<Vertex>> = vec![vec![], vec![7], vec![]];
        assert!(matches!(
            EulerTour::new(&bad_ids, 1),
            Err(GraphError::OutOfRange { vertex: 7, .. })
        ));
    }
}
