use graph::Adjacency;
use graph::GraphError;
use graph::Vertex;
use graph::check_vertex;

use crate::StaticLca;
use crate::euler::EulerTour;

#[inline(always)]
fn ceil_log2(x: usize) -> usize {
    if x <= 1 {
        0
    } else {
        (usize::BITS - (x - 1).leading_zeros()) as usize
    }
}

/// LCA by binary lifting over DFS entry/exit times.
#[derive(Clone, Debug)]
pub struct BinaryLiftingLca {
    root: Vertex,
    vertex_count: usize,
    levels: usize,
    tin: Vec<usize>,
    tout: Vec<usize>,
    depth: Vec<usize>,
    // Row `k` holds the 2^k-th ancestor of every vertex; the root maps to itself.
    up: Vec<Vertex>,
}

impl BinaryLiftingLca {
    #[inline(always)]
    fn ancestor(&self, level: usize, v: Vertex) -> Vertex {
        self.up[level * (self.vertex_count + 1) + v]
    }

    #[inline(always)]
    fn contains(&self, u: Vertex, v: Vertex) -> bool {
        self.tin[u] <= self.tin[v] && self.tout[u] >= self.tout[v]
    }

    /// Whether `u` lies on the path from the root to `v`, `v` included.
    pub fn is_ancestor(&self, u: Vertex, v: Vertex) -> Result<bool, GraphError> {
        check_vertex(u, self.vertex_count)?;
        check_vertex(v, self.vertex_count)?;
        Ok(self.contains(u, v))
    }

    /// The ancestor `k` levels above `v`, `None` past the root.
    pub fn kth_ancestor(&self, v: Vertex, k: usize) -> Result<Option<Vertex>, GraphError> {
        check_vertex(v, self.vertex_count)?;
        if k > self.depth[v] {
            return Ok(None);
        }
        let mut cur = v;
        for level in 0..self.levels {
            if (k >> level) & 1 == 1 {
                cur = self.ancestor(level, cur);
            }
        }
        Ok(Some(cur))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl StaticLca for BinaryLiftingLca {
    #[tracing::instrument(skip(adjacency), fields(vertex_count = adjacency.vertex_count()))]
    fn new<A: Adjacency + ?Sized>(adjacency: &A, root: Vertex) -> Result<Self, GraphError> {
        let EulerTour {
            depth,
            parent,
            tin,
            tout,
            ..
        } = EulerTour::new(adjacency, root)?;

        let n = adjacency.vertex_count();
        let stride = n + 1;
        let levels = ceil_log2(n) + 1;
        let mut up = vec![0; levels * stride];
        for v in 1..=n {
            up[v] = parent[v].unwrap_or(root);
        }
        for k in 1..levels {
            let (prev, cur) = up[(k - 1) * stride..(k + 1) * stride].split_at_mut(stride);
            for v in 1..=n {
                cur[v] = prev[prev[v]];
            }
        }

        tracing::debug!(root, levels, "binary lifting table built");
        Ok(Self {
            root,
            vertex_count: n,
            levels,
            tin,
            tout,
            depth,
            up,
        })
    }

    fn lca(&self, u: Vertex, v: Vertex) -> Result<Vertex, GraphError> {
        check_vertex(u, self.vertex_count)?;
        check_vertex(v, self.vertex_count)?;
        if self.contains(u, v) {
            return Ok(u);
        }
        if self.contains(v, u) {
            return Ok(v);
        }

        let mut u = u;
        for level in (0..self.levels).rev() {
            let next = self.ancestor(level, u);
            if !self.contains(next, v) {
                u = next;
            }
        }
        Ok(self.ancestor(0, u))
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
