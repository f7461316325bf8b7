use graph::Adjacency;
use graph::GraphError;
use graph::Vertex;
use graph::check_vertex;

use crate::StaticLca;
use crate::euler::EulerTour;

/// Depth of the padding vertex 0; larger than any real depth.
pub const PADDING_DEPTH: usize = usize::MAX;

const PADDING: Vertex = 0;

/// LCA as a range-minimum query over Euler tour depths.
#[derive(Clone, Debug)]
pub struct SegmentTreeLca {
    root: Vertex,
    vertex_count: usize,
    depth: Vec<usize>,
    first: Vec<usize>,
    tour: Vec<Vertex>,
    size: usize,
    tree: Vec<Vertex>,
}

impl SegmentTreeLca {
    #[inline(always)]
    fn shallower(&self, a: Vertex, b: Vertex) -> Vertex {
        if self.depth[a] > self.depth[b] { b } else { a }
    }

    /// Shallowest vertex of `tour[l..=r]`; `node` covers `[lo, hi]`.
    fn query(&self, l: usize, r: usize, node: usize, lo: usize, hi: usize) -> Vertex {
        if r < lo || hi < l {
            return PADDING;
        }
        if l <= lo && hi <= r {
            return self.tree[node];
        }
        let mid = lo + ((hi - lo) >> 1);
        let left = self.query(l, r, node << 1, lo, mid);
        let right = self.query(l, r, (node << 1) | 1, mid + 1, hi);
        self.shallower(left, right)
    }

    pub fn euler_tour(&self) -> &[Vertex] {
        &self.tour
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl StaticLca for SegmentTreeLca {
    #[tracing::instrument(skip(adjacency), fields(vertex_count = adjacency.vertex_count()))]
    fn new<A: Adjacency + ?Sized>(adjacency: &A, root: Vertex) -> Result<Self, GraphError> {
        let EulerTour {
            tour,
            first,
            mut depth,
            ..
        } = EulerTour::new(adjacency, root)?;
        depth[PADDING] = PADDING_DEPTH;

        let m = tour.len();
        let size = m.next_power_of_two();
        let mut tree = vec![PADDING; size << 1];
        tree[size..size + m].copy_from_slice(&tour);

        let mut lca = Self {
            root,
            vertex_count: adjacency.vertex_count(),
            depth,
            first,
            tour,
            size,
            tree: Vec::new(),
        };
        for i in (1..size).rev() {
            tree[i] = lca.shallower(tree[i << 1], tree[(i << 1) | 1]);
        }
        lca.tree = tree;

        tracing::debug!(root, tour_len = m, leaves = size, "euler tour segment tree built");
        Ok(lca)
    }

    fn lca(&self, u: Vertex, v: Vertex) -> Result<Vertex, GraphError> {
        check_vertex(u, self.vertex_count)?;
        check_vertex(v, self.vertex_count)?;
        let (l, r) = {
            let (a, b) = (self.first[u], self.first[v]);
            if a <= b { (a, b) } else { (b, a) }
        };
        Ok(self.query(l, r, 1, 0, self.size - 1))
    }

    fn depth(&self, v: Vertex) -> Result<usize, GraphError> {
        check_vertex(v, self.vertex_count)?;
        Ok(self.depth[v])
    }

    #[inline]
    fn root(&self) -> Vertex {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use graph::Graph;

    use super::*;

    #[test]
    fn padding_never_wins() {
        // Tour length 5 pads the leaves up to 8.
        let mut g = Graph::undirected(3);
        g.add_edge(1, 2).unwrap();
        g.add_edge(1, 3).unwrap();
        let lca = SegmentTreeLca::new(&g, 1).unwrap();
        assert_eq!(lca.euler_tour(), &[1, 2, 1, 3, 1]);
        assert_eq!(lca.size, 8);
        assert_eq!(lca.tree[1], 1);
        assert!(lca.tree[13..].iter().all(|&v| v == PADDING));
        assert_eq!(lca.lca(3, 3), Ok(3));
        assert_eq!(lca.lca(2, 3), Ok(1));
    }
}
