use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use graph::Graph;
use graph::WeightedGraph;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x6A9_2026;

/// Criterion timing budget for one input-size band.
#[derive(Clone, Copy, Debug)]
pub struct RuntimeTier {
    /// Largest vertex count handled by this tier.
    pub max_vertices: usize,
    pub sample_size: usize,
    pub warm_up: Duration,
    pub measurement: Duration,
}

/// Ordered by `max_vertices`; anything larger uses the last entry.
pub const RUNTIME_TIERS: [RuntimeTier; 3] = [
    RuntimeTier {
        max_vertices: 4_096,
        sample_size: 20,
        warm_up: Duration::from_millis(150),
        measurement: Duration::from_millis(300),
    },
    RuntimeTier {
        max_vertices: 16_384,
        sample_size: 15,
        warm_up: Duration::from_millis(400),
        measurement: Duration::from_millis(800),
    },
    RuntimeTier {
        max_vertices: usize::MAX,
        sample_size: 10,
        warm_up: Duration::from_millis(700),
        measurement: Duration::from_millis(1_400),
    },
];

impl RuntimeTier {
    pub fn for_size(vertex_count: usize) -> Self {
        RUNTIME_TIERS
            .into_iter()
            .find(|tier| vertex_count <= tier.max_vertices)
            .unwrap_or(RUNTIME_TIERS[RUNTIME_TIERS.len() - 1])
    }

    pub fn apply<M: Measurement>(&self, group: &mut BenchmarkGroup<'_, M>) {
        group.sample_size(self.sample_size);
        group.warm_up_time(self.warm_up);
        group.measurement_time(self.measurement);
    }
}

/// Applies the tier matching a graph with `vertex_count` vertices.
pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    vertex_count: usize,
) {
    RuntimeTier::for_size(vertex_count).apply(group);
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `m` random edges over `[1, n]` with weights in `0..=max_weight`.
pub fn random_weighted_graph<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    m: usize,
    max_weight: i64,
    directed: bool,
) -> WeightedGraph {
    let mut graph = WeightedGraph::new(n, directed);
    if n == 0 {
        return graph;
    }
    for _ in 0..m {
        let u = rng.random_range(1..=n);
        let v = rng.random_range(1..=n);
        let w = rng.random_range(0..=max_weight);
        graph
            .add_edge(u, v, w)
            .expect("endpoints are drawn from [1, n]");
    }
    graph
}

/// Uniform random recursive tree on `[1, n]` with shuffled labels.
///
/// `max_jump` bounds how far back a vertex may attach; `1` yields a path,
/// which is the deepest tree possible.
pub fn random_tree<R: Rng + ?Sized>(rng: &mut R, n: usize, max_jump: usize) -> Graph {
    let mut labels = (1..=n).collect::<Vec<_>>();
    labels.shuffle(rng);
    let mut tree = Graph::undirected(n);
    for i in 1..n {
        let back = rng.random_range(1..=max_jump.clamp(1, i));
        tree.add_edge(labels[i - back], labels[i])
            .expect("labels are a permutation of [1, n]");
    }
    tree
}

/// Random `(u, v)` vertex pairs over `[1, n]`.
pub fn random_pairs<R: Rng + ?Sized>(rng: &mut R, n: usize, count: usize) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| (rng.random_range(1..=n), rng.random_range(1..=n)))
        .collect()
}
