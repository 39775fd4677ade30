//! Divide and conquer with a y-sorted strip merge.
//!
//! Model
//! - Two views of the same points travel down the recursion: `px` sorted by x
//!   and `py` sorted by y. Each level splits `px` at its midpoint and derives
//!   the y-sorted halves from `py` in one pass, so nothing is re-sorted below
//!   the top level.
//! - After both halves return, `δ` is the smaller of their distances. Any
//!   closer pair must straddle the split line `x*` and both points lie in the
//!   strip `|x - x*| < δ`. Within that strip, points closer than `δ` are less
//!   than `δ` apart in y, and only a constant number of strip points fit in a
//!   `δ`-tall band, so each point is compared with a bounded number of
//!   successors. T(n) = 2T(n/2) + O(n) = O(n log n).
//!
//! Sub-views are fresh `Vec<Point>` values at every level; no shared mutable
//! state, so the two recursive calls are independent.

use std::cmp::Ordering;

use crate::points::{by_x, by_y, distance, Point};

use super::brute::brute_force;
use super::types::{PairResult, SolveCfg, BRUTE_FORCE_CUTOFF};

/// Closest pair in O(n log n) with the default strip cap.
///
/// The distance always equals `brute_force`'s on the same input; when several
/// pairs share the minimum the reported ids may differ.
pub fn divide_and_conquer(points: &[Point]) -> PairResult {
    divide_and_conquer_with(points, SolveCfg::default())
}

/// Closest pair in O(n log n) with an explicit strip configuration.
pub fn divide_and_conquer_with(points: &[Point], cfg: SolveCfg) -> PairResult {
    if points.len() < 2 {
        return PairResult::none();
    }
    let mut px = points.to_vec();
    let mut py = points.to_vec();
    px.sort_by(by_x);
    py.sort_by(by_y);
    closest_rec(&px, &py, cfg)
}

/// Pre: `px` and `py` hold the same points, sorted by x and by y; `len >= 2`.
fn closest_rec(px: &[Point], py: &[Point], cfg: SolveCfg) -> PairResult {
    let n = px.len();
    if n <= BRUTE_FORCE_CUTOFF {
        return brute_force(px);
    }

    let mid = n / 2;
    let pivot = &px[mid - 1];
    let x_star = pivot.x();
    let (qx, rx) = px.split_at(mid);
    let (qy, ry) = split_at_pivot(py, pivot, mid);

    let left = closest_rec(qx, &qy, cfg);
    let right = closest_rec(rx, &ry, cfg);
    let best = if left.distance <= right.distance {
        left
    } else {
        right
    };

    let strip: Vec<Point> = py
        .iter()
        .filter(|p| (p.x() - x_star).abs() < best.distance)
        .copied()
        .collect();
    scan_strip(&strip, best, cfg)
}

/// Split the y-sorted view into the halves matching `px[..left_len]` and
/// `px[left_len..]`, preserving y-order.
///
/// `pivot` is `px[left_len - 1]`, the last point of the left half. A point
/// goes left when it is not past the pivot in x-order and the left half is
/// not full. Ties on the line `x = x*` resolve by (y, id) as in `px`, so both
/// views of a half always hold the same points.
fn split_at_pivot(py: &[Point], pivot: &Point, left_len: usize) -> (Vec<Point>, Vec<Point>) {
    let mut qy = Vec::with_capacity(left_len);
    let mut ry = Vec::with_capacity(py.len() - left_len);
    for p in py {
        if by_x(p, pivot) != Ordering::Greater && qy.len() < left_len {
            qy.push(*p);
        } else {
            ry.push(*p);
        }
    }
    (qy, ry)
}

/// Improve `best` with pairs inside the y-sorted `strip`.
///
/// From each `i`, scan `j > i` while `y[j] - y[i] < δ` and `j` is within the
/// configured cap. `δ` shrinks as closer pairs are found.
fn scan_strip(strip: &[Point], mut best: PairResult, cfg: SolveCfg) -> PairResult {
    let m = strip.len();
    for i in 0..m {
        let last = cfg.strip.last_index(i, m);
        for j in (i + 1)..=last {
            if strip[j].y() - strip[i].y() >= best.distance {
                break;
            }
            let d = distance(&strip[i], &strip[j]);
            if d < best.distance {
                best = PairResult::of(&strip[i], &strip[j], d);
            }
        }
    }
    best
}
