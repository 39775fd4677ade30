//! Closest pair of points in the plane.
//!
//! Two solvers over the same point representation:
//! - `brute_force`: every unordered pair, O(n²). Baseline and correctness oracle.
//! - `divide_and_conquer`: recursive halving on x with a y-sorted strip merge,
//!   O(n log n).
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Solvers are free functions; nothing keeps state between calls.

pub mod api;
pub mod closest;
pub mod points;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use closest::{brute_force, divide_and_conquer, PairResult};
pub use points::{distance, Point, PointId};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::closest::{
        brute_force, divide_and_conquer, divide_and_conquer_with, Algorithm, PairResult, SolveCfg,
        StripScan,
    };
    pub use crate::points::{distance, Point, PointId};
    pub use crate::rand::{unique_points, CloudCfg};
    pub use nalgebra::Vector2 as Vec2;
}
