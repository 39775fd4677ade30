//! Quadratic baseline: compare every unordered pair once.

use crate::points::{distance, Point};

use super::types::PairResult;

/// Closest pair by exhaustive comparison.
///
/// Pairs are visited as `(i, j)` with `i < j` in input order; a pair replaces
/// the incumbent only when strictly closer, so the first minimal pair wins
/// ties. Fewer than two points yield `PairResult::none()`.
pub fn brute_force(points: &[Point]) -> PairResult {
    if points.len() < 2 {
        return PairResult::none();
    }
    let mut best = PairResult::none();
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            let d = distance(p, q);
            if d < best.distance {
                best = PairResult::of(p, q, d);
            }
        }
    }
    best
}
