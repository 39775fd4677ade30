use anyhow::Result;
use clap::{Parser, Subcommand};
use closest_pair::api::{Algorithm, PairResult};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod bench;
mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest-pair benchmarking and one-off solves")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Time brute force vs divide and conquer and write averages per size
    Bench {
        /// Input sizes, comma separated
        #[arg(
            long,
            value_delimiter = ',',
            default_value = "10000,20000,30000,40000,50000,60000,70000,80000,90000,100000"
        )]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 10)]
        iterations: usize,
        /// Largest size brute force still runs on
        #[arg(long, default_value_t = 100_000)]
        max_brute: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 0.0)]
        lo: f64,
        #[arg(long, default_value_t = 1000.0)]
        hi: f64,
        /// Output table (.csv or .parquet)
        #[arg(long, default_value = "data/results.csv")]
        out: PathBuf,
    },
    /// Solve one `id,x,y` CSV and print the result as JSON
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// brute | dac | both
        #[arg(long, default_value = "both")]
        algo: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    // Logs on stderr; stdout carries JSON for `solve` and `report`.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Bench {
            sizes,
            iterations,
            max_brute,
            seed,
            lo,
            hi,
            out,
        } => run_bench(
            bench::BenchCfg {
                sizes,
                iterations,
                max_brute,
                seed,
                lo,
                hi,
            },
            out,
        ),
        Action::Solve { input, algo } => solve(input, &algo),
        Action::Report => report(),
    }
}

fn run_bench(cfg: bench::BenchCfg, out: PathBuf) -> Result<()> {
    tracing::info!(cfg = ?cfg, out = %out.display(), "bench");
    let rows = bench::run(&cfg)?;
    bench::write_table(&rows, &out)?;
    let mismatches: usize = rows.iter().map(|r| r.mismatches).sum();
    if mismatches > 0 {
        tracing::warn!(mismatches, "brute force and divide and conquer disagreed");
    }
    let payload = provenance::Payload::new("bench", serde_json::to_value(&cfg)?)
        .with_summary(json!({ "rows": rows, "mismatches": mismatches }));
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "results written");
    Ok(())
}

#[derive(Serialize)]
struct SolveOutput {
    algo: &'static str,
    a: Option<i64>,
    b: Option<i64>,
    distance: Option<f64>,
    elapsed_ms: f64,
}

impl SolveOutput {
    fn new(algo: Algorithm, res: &PairResult, elapsed_ms: f64) -> Self {
        let ids = res.ids();
        Self {
            algo: algo.name(),
            a: ids.map(|(a, _)| a.0),
            b: ids.map(|(_, b)| b.0),
            distance: (!res.is_none()).then_some(res.distance),
            elapsed_ms,
        }
    }
}

fn solve(input: PathBuf, algo: &str) -> Result<()> {
    let algos: Vec<Algorithm> = if algo.eq_ignore_ascii_case("both") {
        Algorithm::ALL.to_vec()
    } else {
        vec![algo.parse::<Algorithm>().map_err(anyhow::Error::msg)?]
    };
    let points = input::read_points_csv(&input)?;
    tracing::info!(input = %input.display(), n = points.len(), "solve");
    let outputs: Vec<SolveOutput> = algos
        .into_iter()
        .map(|a| {
            let start = Instant::now();
            let res = a.solve(&points);
            let ms = start.elapsed().as_secs_f64() * 1e3;
            tracing::info!(algo = %a, "{res}");
            SolveOutput::new(a, &res, ms)
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&outputs)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block("report", json!({}));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
