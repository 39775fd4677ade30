//! Curated internal API for collaborators (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI and
//!   benches. Breaking changes are allowed and expected.
//! - `brute_force` and `divide_and_conquer` are the solver entry points;
//!   `divide_and_conquer_with` and `Algorithm` are configurable and
//!   by-name variants of them. Everything else is support.

// Solvers
pub use crate::closest::{
    brute_force, divide_and_conquer, divide_and_conquer_with, Algorithm, PairResult, SolveCfg,
    StripScan, BRUTE_FORCE_CUTOFF, STRIP_NEIGHBOR_CAP,
};
// Points
pub use crate::points::{distance, Point, PointId};
// Seeded point clouds
pub use crate::rand::{unique_points, CloudCfg, CloudError};

/// Pre: `points` has finite coordinates and unique ids.
/// Post: `true` iff both solvers report the same minimum distance within a
/// relative tolerance of `rel_tol`. Sentinels agree only with sentinels.
pub fn solvers_agree(points: &[Point], rel_tol: f64) -> bool {
    brute_force(points).distance_agrees(&divide_and_conquer(points), rel_tol)
}
