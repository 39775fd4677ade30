//! Closest-pair engine: brute force and divide and conquer.
//!
//! Purpose
//! - `brute_force` is the O(n²) baseline and correctness oracle; it is also
//!   the base case of the recursion for partitions of at most
//!   `BRUTE_FORCE_CUTOFF` points.
//! - `divide_and_conquer` is the O(n log n) solver. Its distance always equals
//!   the baseline's; identifiers may differ when the minimum is shared.
//!
//! Both take any slice of points (unsorted is fine) and return a fresh
//! `PairResult`. Fewer than two points yield `PairResult::none()`.
//!
//! Layout
//! - `types.rs` (result and config), `brute.rs`, `dac.rs` (recursion and
//!   strip merge).

mod brute;
mod dac;
mod types;

pub use brute::brute_force;
pub use dac::{divide_and_conquer, divide_and_conquer_with};
pub use types::{
    Algorithm, PairResult, SolveCfg, StripScan, BRUTE_FORCE_CUTOFF, STRIP_NEIGHBOR_CAP,
};
