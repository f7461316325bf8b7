/// Disjoint-set union over `[0, n]` with union by size and path compression.
#[derive(Clone, Debug)]
pub struct DisjointSetUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSetUnion {
    /// `n + 1` singleton sets, so 1-based vertex ids index directly.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..=n).collect(),
            size: vec![1; n + 1],
            sets: n + 1,
        }
    }

    /// Number of elements in `[1, n]`; slot 0 is not counted.
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&mut self, v: usize) -> usize {
        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = v;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. Returns `false` if they were already
    /// the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn set_size(&mut self, v: usize) -> usize {
        let root = self.find(v);
        self.size[root]
    }

    /// Number of disjoint sets, counting every singleton.
    pub fn set_count(&self) -> usize {
        self.sets
    }
}
