//! Seeded point clouds with unique coordinates.
//!
//! Purpose
//! - Feed the solvers and the benchmarking driver with reproducible inputs:
//!   ids `0..n`, coordinates uniform in `[lo, hi)²`, no two points sharing a
//!   position.
//!
//! Model
//! - One `StdRng` per call, seeded from `seed`. Uniqueness is checked on the
//!   coordinates quantized to `1e-6`, keyed numerically; a colliding draw is
//!   rejected and redrawn.

use std::collections::HashSet;
use std::fmt;

use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};

use crate::points::{Point, PointId};

/// Resolution of the uniqueness check.
const QUANTUM: f64 = 1e-6;

/// Error type for point-cloud generation.
#[derive(Debug)]
pub enum CloudError {
    InvalidParams { reason: String },
}

impl CloudError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid point cloud params: {reason}"),
        }
    }
}

impl std::error::Error for CloudError {}

/// Coordinate range for both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudCfg {
    pub lo: f64,
    pub hi: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            lo: 0.0,
            hi: 1000.0,
        }
    }
}

impl CloudCfg {
    fn validate(&self, n: usize) -> Result<(), CloudError> {
        if !(self.lo.is_finite() && self.hi.is_finite()) {
            return Err(CloudError::invalid("range bounds must be finite"));
        }
        if self.lo >= self.hi {
            return Err(CloudError::invalid("lo < hi required"));
        }
        // Quantized keys must fit in i64, or distinct draws collapse onto one key.
        let max_key = self.lo.abs().max(self.hi.abs()) / QUANTUM;
        if max_key >= i64::MAX as f64 {
            return Err(CloudError::invalid(format!(
                "range [{}, {}) too large to quantize at resolution {QUANTUM}",
                self.lo, self.hi
            )));
        }
        let cells_per_axis = ((self.hi - self.lo) / QUANTUM).floor();
        // Half the grid keeps rejection sampling fast.
        let capacity = cells_per_axis * cells_per_axis * 0.5;
        if (n as f64) > capacity {
            return Err(CloudError::invalid(format!(
                "{n} unique points do not fit in [{}, {})² at resolution {QUANTUM}",
                self.lo, self.hi
            )));
        }
        Ok(())
    }
}

/// Draw `n` points with unique (quantized) coordinates; deterministic per `seed`.
pub fn unique_points(n: usize, cfg: CloudCfg, seed: u64) -> Result<Vec<Point>, CloudError> {
    cfg.validate(n)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen: HashSet<(i64, i64)> = HashSet::with_capacity(n);
    let mut points = Vec::with_capacity(n);
    while points.len() < n {
        let x = rng.gen_range(cfg.lo..cfg.hi);
        let y = rng.gen_range(cfg.lo..cfg.hi);
        if seen.insert((quantize(x), quantize(y))) {
            points.push(Point::new(PointId(points.len() as i64), x, y));
        }
    }
    Ok(points)
}

#[inline]
fn quantize(v: f64) -> i64 {
    (v / QUANTUM).round() as i64
}
