//! Result and configuration types shared by both solvers.

use std::fmt;
use std::str::FromStr;

use crate::points::{Point, PointId};

/// Partitions of at most this many points are solved by brute force.
pub const BRUTE_FORCE_CUTOFF: usize = 3;

/// Forward comparisons per strip point in the default strip scan.
///
/// The packing bound for a y-sorted strip is smaller (6–7); 15 is kept as a
/// fixed upper bound. It never changes the reported distance.
pub const STRIP_NEIGHBOR_CAP: usize = 15;

/// Closest pair found by a solver.
///
/// `pair == None` is the "no pair" sentinel returned for fewer than two
/// points; its `distance` is `f64::MAX`. Callers check `is_none()` first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairResult {
    pub pair: Option<(PointId, PointId)>,
    pub distance: f64,
}

impl PairResult {
    #[inline]
    pub fn none() -> Self {
        Self {
            pair: None,
            distance: f64::MAX,
        }
    }
    #[inline]
    pub fn new(a: PointId, b: PointId, distance: f64) -> Self {
        Self {
            pair: Some((a, b)),
            distance,
        }
    }
    #[inline]
    pub(crate) fn of(a: &Point, b: &Point, distance: f64) -> Self {
        Self::new(a.id, b.id, distance)
    }
    #[inline]
    pub fn is_none(&self) -> bool {
        self.pair.is_none()
    }
    #[inline]
    pub fn ids(&self) -> Option<(PointId, PointId)> {
        self.pair
    }
    /// Same distance within relative tolerance `rel_tol`; sentinels agree
    /// only with sentinels.
    pub fn distance_agrees(&self, other: &PairResult, rel_tol: f64) -> bool {
        match (self.is_none(), other.is_none()) {
            (true, true) => true,
            (false, false) => {
                let scale = self.distance.abs().max(1.0);
                (self.distance - other.distance).abs() <= rel_tol * scale
            }
            _ => false,
        }
    }
    /// Same pair regardless of the order the ids were reported in.
    pub fn same_pair(&self, other: &PairResult) -> bool {
        match (self.pair, other.pair) {
            (Some((a, b)), Some((c, d))) => (a == c && b == d) || (a == d && b == c),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Default for PairResult {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for PairResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pair {
            Some((a, b)) => write!(
                f,
                "Closest pair: Points {a} and {b} with distance {}",
                self.distance
            ),
            None => write!(f, "Closest pair: none (fewer than 2 points)"),
        }
    }
}

/// How far forward each strip point is compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripScan {
    /// Stop after this many positions ahead (and on the y-gap rule).
    Capped(usize),
    /// Stop on the y-gap rule only.
    Uncapped,
}

impl StripScan {
    /// Last index `j` the scan from `i` may reach (inclusive), given `m` strip points.
    #[inline]
    pub(crate) fn last_index(self, i: usize, m: usize) -> usize {
        let end = m.saturating_sub(1);
        match self {
            StripScan::Capped(cap) => end.min(i.saturating_add(cap)),
            StripScan::Uncapped => end,
        }
    }
}

/// Divide-and-conquer configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Default ON: the cap is part of the algorithm. `Uncapped` exists for
    /// agreement checks and ablation benchmarks.
    pub strip: StripScan,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            strip: StripScan::Capped(STRIP_NEIGHBOR_CAP),
        }
    }
}

/// Solver selection by name, for drivers that pick at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    BruteForce,
    DivideAndConquer,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::BruteForce, Algorithm::DivideAndConquer];

    pub fn solve(self, points: &[Point]) -> PairResult {
        match self {
            Algorithm::BruteForce => super::brute_force(points),
            Algorithm::DivideAndConquer => super::divide_and_conquer(points),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute",
            Algorithm::DivideAndConquer => "dac",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brute" | "brute-force" | "alg1" => Ok(Algorithm::BruteForce),
            "dac" | "divide-and-conquer" | "alg2" => Ok(Algorithm::DivideAndConquer),
            other => Err(format!("unknown algorithm '{other}' (expected brute|dac)")),
        }
    }
}
