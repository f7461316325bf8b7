mod dijkstra;
mod floyd_warshall;

pub use dijkstra::ShortestPathSolver;
pub use dijkstra::dijkstra;
pub use floyd_warshall::DistanceMatrix;
pub use floyd_warshall::floyd_warshall;

/// Distance of a vertex with no path from the source.
///
/// Twice the sentinel still fits in an `i64`, so adding it to any real path
/// length cannot overflow and stays above every reachable distance.
pub const UNREACHABLE: i64 = 0x3f3f_3f3f_3f3f_3f3f;
