//! Timing driver: brute force vs divide and conquer over growing point clouds.
//!
//! For each size, every iteration draws a fresh unique cloud (seed + iteration),
//! times both solvers on it, and checks their distances agree. Brute force is
//! skipped above `max_brute`; its column is then null.

use anyhow::{bail, Context, Result};
use closest_pair::api::{unique_points, Algorithm, CloudCfg, PairResult, Point};
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use std::time::Instant;

/// Relative tolerance for the brute force / divide and conquer agreement check.
const AGREE_REL_TOL: f64 = 1e-9;

#[derive(Clone, Debug, Serialize)]
pub struct BenchCfg {
    pub sizes: Vec<usize>,
    pub iterations: usize,
    pub max_brute: usize,
    pub seed: u64,
    pub lo: f64,
    pub hi: f64,
}

/// Averages for one input size.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SizeRow {
    pub n: usize,
    pub alg1_time_ms: Option<f64>,
    pub alg2_time_ms: f64,
    pub mismatches: usize,
}

pub fn run(cfg: &BenchCfg) -> Result<Vec<SizeRow>> {
    let cloud = CloudCfg {
        lo: cfg.lo,
        hi: cfg.hi,
    };
    if cfg.iterations == 0 {
        bail!("iterations must be at least 1");
    }
    let iterations = cfg.iterations;
    let mut rows = Vec::with_capacity(cfg.sizes.len());
    for &n in &cfg.sizes {
        let skip_brute = n > cfg.max_brute;
        if skip_brute {
            tracing::info!(n, max_brute = cfg.max_brute, "skipping brute force");
        }
        let mut total_alg1 = 0.0;
        let mut total_alg2 = 0.0;
        let mut mismatches = 0;
        for iter in 0..iterations {
            let seed = cfg.seed.wrapping_add(iter as u64);
            let points = unique_points(n, cloud, seed)
                .with_context(|| format!("generating {n} points (seed {seed})"))?;

            let alg1 = if skip_brute {
                None
            } else {
                let (res, ms) = timed(Algorithm::BruteForce, &points);
                total_alg1 += ms;
                Some(res)
            };
            let (alg2, ms) = timed(Algorithm::DivideAndConquer, &points);
            total_alg2 += ms;

            if let Some(alg1) = alg1 {
                if !alg1.distance_agrees(&alg2, AGREE_REL_TOL) {
                    mismatches += 1;
                    tracing::warn!(
                        n,
                        iter,
                        alg1 = alg1.distance,
                        alg2 = alg2.distance,
                        "solvers disagree"
                    );
                }
            }
        }
        let row = SizeRow {
            n,
            alg1_time_ms: (!skip_brute).then(|| total_alg1 / iterations as f64),
            alg2_time_ms: total_alg2 / iterations as f64,
            mismatches,
        };
        tracing::info!(
            n,
            alg1_ms = ?row.alg1_time_ms,
            alg2_ms = row.alg2_time_ms,
            mismatches,
            "size_done"
        );
        rows.push(row);
    }
    Ok(rows)
}

fn timed(algo: Algorithm, points: &[Point]) -> (PairResult, f64) {
    let start = Instant::now();
    let res = algo.solve(points);
    let ms = start.elapsed().as_secs_f64() * 1e3;
    match res.ids() {
        Some((a, b)) => tracing::info!(
            algo = %algo,
            n = points.len(),
            a = a.0,
            b = b.0,
            distance = res.distance,
            ms,
            "solved"
        ),
        None => tracing::info!(algo = %algo, n = points.len(), ms, "no pair"),
    }
    (res, ms)
}

/// Results table: `n, alg1_time_ms, alg2_time_ms` (alg1 null when skipped).
pub fn to_frame(rows: &[SizeRow]) -> PolarsResult<DataFrame> {
    let n: Vec<u64> = rows.iter().map(|r| r.n as u64).collect();
    let alg1: Vec<Option<f64>> = rows.iter().map(|r| r.alg1_time_ms).collect();
    let alg2: Vec<f64> = rows.iter().map(|r| r.alg2_time_ms).collect();
    df!(
        "n" => n,
        "alg1_time_ms" => alg1,
        "alg2_time_ms" => alg2
    )
}

/// Write the results table as CSV, or Parquet when `out` ends in `.parquet`.
pub fn write_table(rows: &[SizeRow], out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut df = to_frame(rows)?;
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let is_parquet = out
        .extension()
        .map(|e| e.eq_ignore_ascii_case("parquet"))
        .unwrap_or(false);
    if is_parquet {
        ParquetWriter::new(file).finish(&mut df)?;
    } else {
        let mut file = file;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn small_cfg() -> BenchCfg {
        BenchCfg {
            sizes: vec![10, 50, 200],
            iterations: 2,
            max_brute: 50,
            seed: 42,
            lo: 0.0,
            hi: 1000.0,
        }
    }

    #[test]
    fn run_skips_brute_force_above_limit() {
        let rows = run(&small_cfg()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].alg1_time_ms.is_some());
        assert!(rows[1].alg1_time_ms.is_some());
        assert!(rows[2].alg1_time_ms.is_none());
        assert!(rows.iter().all(|r| r.mismatches == 0));
        assert!(rows.iter().all(|r| r.alg2_time_ms >= 0.0));
    }

    #[test]
    fn run_handles_degenerate_sizes() {
        let cfg = BenchCfg {
            sizes: vec![0, 1, 2],
            ..small_cfg()
        };
        let rows = run(&cfg).unwrap();
        assert!(rows.iter().all(|r| r.mismatches == 0));
    }

    #[test]
    fn csv_round_trip_keeps_null_for_skipped() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/results.csv");
        let rows = vec![
            SizeRow {
                n: 10,
                alg1_time_ms: Some(1.5),
                alg2_time_ms: 0.5,
                mismatches: 0,
            },
            SizeRow {
                n: 20,
                alg1_time_ms: None,
                alg2_time_ms: 0.75,
                mismatches: 0,
            },
        ];
        write_table(&rows, &out).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("n,alg1_time_ms,alg2_time_ms"));
        assert_eq!(lines.next(), Some("10,1.5,0.5"));
        assert_eq!(lines.next(), Some("20,,0.75"));
    }

    #[test]
    fn frame_has_expected_columns() {
        let rows = run(&BenchCfg {
            sizes: vec![30],
            iterations: 1,
            ..small_cfg()
        })
        .unwrap();
        let df = to_frame(&rows).unwrap();
        assert_eq!(df.shape(), (1, 3));
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["n", "alg1_time_ms", "alg2_time_ms"]);
    }

    #[test]
    fn zero_iterations_rejected() {
        let cfg = BenchCfg {
            iterations: 0,
            ..small_cfg()
        };
        let err = run(&cfg).unwrap_err();
        assert!(err.to_string().contains("iterations"));
    }

    #[test]
    fn out_of_range_cloud_is_an_error() {
        let cfg = BenchCfg {
            sizes: vec![2],
            lo: 1e13,
            hi: 2e13,
            ..small_cfg()
        };
        let err = run(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("too large to quantize"));
    }
}
