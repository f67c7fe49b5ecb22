use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use bin_packer_core::{Algorithm, PackConfig, PackMode, pack};
use clap::{ArgAction, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "bin-packer",
    about = "Compare one-dimensional bin-packing heuristics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Show progress bars (disable with --progress false or --quiet)
    #[arg(long, default_value_t = true, action=ArgAction::Set, global=true, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack one workload with one algorithm
    Run(RunArgs),
    /// Run the full algorithm suite across input sizes and trials
    Compare(CompareArgs),
    /// Simple timing bench (packs once, prints bins + time)
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct RunArgs {
    // Workload
    /// Items per generated workload
    #[arg(short = 'n', long, default_value_t = 10_000, help_heading = "Workload")]
    count: usize,
    /// RNG seed (omit for a fresh workload each run)
    #[arg(long, help_heading = "Workload")]
    seed: Option<u64>,
    /// Read item sizes from a file (one per line) instead of generating
    #[arg(long, help_heading = "Workload")]
    input: Option<PathBuf>,

    // Algorithm
    /// Algorithm: nf|nkf|ff|rff|bf|wf|awf|hk|rh (long names accepted)
    #[arg(short, long, default_value = "ff", help_heading = "Algorithm")]
    algorithm: String,
    /// Window size for next-k-fit
    #[arg(short = 'k', long, default_value_t = 2, help_heading = "Algorithm")]
    window: usize,
    /// Class count for harmonic variants
    #[arg(long, default_value_t = 20, help_heading = "Algorithm")]
    classes: usize,
    /// Pack a descending-sorted copy instead of the given order
    #[arg(long, default_value_t = false, help_heading = "Algorithm")]
    offline: bool,
    /// YAML config file (overrides algorithm-related options)
    #[arg(long, help_heading = "Algorithm")]
    config: Option<PathBuf>,

    // Export
    /// Write the report as JSON to this file
    #[arg(short, long, help_heading = "Export")]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
struct CompareArgs {
    /// Workload sizes to sweep
    #[arg(long, value_delimiter = ',', default_values_t = [12usize, 25, 100, 500, 3_000, 10_000, 40_000], help_heading = "Workload")]
    sizes: Vec<usize>,
    /// Workloads per size
    #[arg(short, long, default_value_t = 20, help_heading = "Workload")]
    trials: usize,
    /// RNG seed (omit for fresh workloads each run)
    #[arg(long, help_heading = "Workload")]
    seed: Option<u64>,

    /// Window sizes for the next-k-fit entries
    #[arg(long, value_delimiter = ',', default_values_t = [2usize, 10, 100], help_heading = "Algorithm")]
    windows: Vec<usize>,
    /// Class count for the harmonic entries
    #[arg(long, default_value_t = 20, help_heading = "Algorithm")]
    classes: usize,
    /// Pack descending-sorted copies instead of the generated order
    #[arg(long, default_value_t = false, help_heading = "Algorithm")]
    offline: bool,

    /// Run trials in parallel (requires the `parallel` feature)
    #[arg(long, default_value_t = false, help_heading = "Execution")]
    parallel: bool,

    /// Write the aggregated results as JSON to this file
    #[arg(short, long, help_heading = "Export")]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Items in the generated workload
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    count: usize,
    /// Algorithm: nf|nkf|ff|rff|bf|wf|awf|hk|rh
    #[arg(short, long, default_value = "ff")]
    algorithm: String,
    /// Window size for next-k-fit
    #[arg(short = 'k', long, default_value_t = 2)]
    window: usize,
    /// Class count for harmonic variants
    #[arg(long, default_value_t = 20)]
    classes: usize,
    /// RNG seed
    #[arg(long, help_heading = "Workload")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Run(args) => run_single(args),
        Commands::Compare(args) => run_compare(args, cli.progress && !cli.quiet),
        Commands::Bench(args) => run_bench(args),
    }
}

fn run_single(args: &RunArgs) -> anyhow::Result<()> {
    let mut cfg = PackConfig {
        algorithm: parse_algorithm(&args.algorithm)?,
        window: args.window,
        classes: args.classes,
        mode: mode_for(args.offline),
    };
    if let Some(path) = &args.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)?;
        cfg = y.into_pack_config(cfg);
    }

    let items = match &args.input {
        Some(path) => read_items(path)?,
        None => {
            let seed = resolve_seed(args.seed);
            info!(seed, count = args.count, "generating workload");
            generate_items(&mut StdRng::seed_from_u64(seed), args.count)
        }
    };

    let start = Instant::now();
    let report = pack(&items, &cfg)?;
    let elapsed = start.elapsed();
    println!("{} in {}", report.summary(), fmt_dur(elapsed));

    if let Some(path) = &args.out {
        fs::write(path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("write {}", path.display()))?;
        info!(?path, "report written");
    }
    Ok(())
}

/// One line of the suite: a display name plus the configuration that
/// produces it.
fn suite(windows: &[usize], classes: usize, mode: PackMode) -> Vec<(String, PackConfig)> {
    let base = PackConfig {
        mode,
        classes,
        ..Default::default()
    };
    let entry = |name: String, algorithm: Algorithm, window: usize| {
        (
            name,
            PackConfig {
                algorithm,
                window,
                ..base.clone()
            },
        )
    };

    let mut list = vec![entry("next_fit".into(), Algorithm::NextFit, 2)];
    for &k in windows {
        list.push(entry(format!("next_{k}_fit"), Algorithm::NextKFit, k));
    }
    list.push(entry("first_fit".into(), Algorithm::FirstFit, 2));
    list.push(entry("best_fit".into(), Algorithm::BestFit, 2));
    list.push(entry("worst_fit".into(), Algorithm::WorstFit, 2));
    list.push(entry("almost_worst_fit".into(), Algorithm::AlmostWorstFit, 2));
    list.push(entry("refined_first_fit".into(), Algorithm::RefinedFirstFit, 2));
    list.push(entry(format!("harmonic_{classes}"), Algorithm::HarmonicK, 2));
    list.push(entry(
        format!("refined_harmonic_{classes}"),
        Algorithm::RefinedHarmonic,
        2,
    ));
    list
}

#[derive(Debug, Serialize)]
struct CompareCell {
    size: usize,
    bins_best: usize,
    bins_avg: f64,
    bins_worst: usize,
    time_best_ms: f64,
    time_avg_ms: f64,
    time_worst_ms: f64,
}

#[derive(Debug, Serialize)]
struct AlgorithmSeries {
    name: String,
    cells: Vec<CompareCell>,
}

#[derive(Debug, Serialize)]
struct CompareReport {
    mode: PackMode,
    trials: usize,
    seed: u64,
    sizes: Vec<usize>,
    algorithms: Vec<AlgorithmSeries>,
}

fn run_compare(args: &CompareArgs, show_progress: bool) -> anyhow::Result<()> {
    anyhow::ensure!(args.trials > 0, "at least one trial is required");
    let mode = mode_for(args.offline);
    let suite = suite(&args.windows, args.classes, mode);
    for (name, cfg) in &suite {
        cfg.validate().with_context(|| format!("config for {name}"))?;
    }

    let seed = resolve_seed(args.seed);
    info!(
        seed,
        trials = args.trials,
        algorithms = suite.len(),
        "comparing algorithms"
    );

    let parallel = args.parallel && have_parallel();
    if args.parallel && !parallel {
        warn!("built without the `parallel` feature; running trials serially");
    }

    let bar = progress_bar(
        show_progress,
        (suite.len() * args.sizes.len() * args.trials) as u64,
    );

    // One deterministic stream for all workloads, so every algorithm
    // is measured on the same lists.
    let mut rng = StdRng::seed_from_u64(seed);
    let mut workloads: Vec<Vec<Vec<f64>>> = Vec::with_capacity(args.sizes.len());
    for &size in &args.sizes {
        workloads.push(
            (0..args.trials)
                .map(|_| generate_items(&mut rng, size))
                .collect(),
        );
    }

    let mut algorithms = Vec::with_capacity(suite.len());
    for (name, cfg) in &suite {
        let mut cells = Vec::with_capacity(args.sizes.len());
        for (&size, lists) in args.sizes.iter().zip(&workloads) {
            let measurements = run_cell(cfg, lists, parallel, bar.as_ref())?;
            cells.push(aggregate(size, &measurements));
        }
        info!(name, "finished");
        algorithms.push(AlgorithmSeries {
            name: name.clone(),
            cells,
        });
    }
    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    let report = CompareReport {
        mode,
        trials: args.trials,
        seed,
        sizes: args.sizes.clone(),
        algorithms,
    };
    match &args.out {
        Some(path) => {
            fs::write(path, serde_json::to_string_pretty(&report)?)
                .with_context(|| format!("write {}", path.display()))?;
            info!(?path, "results written");
        }
        None => print_table(&report),
    }
    Ok(())
}

/// Bins and elapsed milliseconds for every trial of one (algorithm,
/// size) cell.
fn run_cell(
    cfg: &PackConfig,
    lists: &[Vec<f64>],
    parallel: bool,
    bar: Option<&indicatif::ProgressBar>,
) -> anyhow::Result<Vec<(usize, f64)>> {
    let pack_one = |items: &Vec<f64>| -> anyhow::Result<(usize, f64)> {
        let start = Instant::now();
        let report = pack(items, cfg)?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        if let Some(bar) = bar {
            bar.inc(1);
        }
        Ok((report.bins_used, ms))
    };

    #[cfg(feature = "parallel")]
    if parallel {
        return lists.par_iter().map(pack_one).collect();
    }
    let _ = parallel;
    lists.iter().map(pack_one).collect()
}

fn aggregate(size: usize, measurements: &[(usize, f64)]) -> CompareCell {
    let bins: Vec<usize> = measurements.iter().map(|&(b, _)| b).collect();
    let times: Vec<f64> = measurements.iter().map(|&(_, t)| t).collect();
    let n = measurements.len() as f64;
    CompareCell {
        size,
        bins_best: bins.iter().copied().min().unwrap_or(0),
        bins_avg: bins.iter().sum::<usize>() as f64 / n,
        bins_worst: bins.iter().copied().max().unwrap_or(0),
        time_best_ms: times.iter().copied().fold(f64::INFINITY, f64::min),
        time_avg_ms: times.iter().sum::<f64>() / n,
        time_worst_ms: times.iter().copied().fold(0.0, f64::max),
    }
}

fn print_table(report: &CompareReport) {
    println!(
        "# {:?} packing, {} trials per size (seed {})",
        report.mode, report.trials, report.seed
    );
    print!("{:<24}", "algorithm");
    for size in &report.sizes {
        print!("{size:>12}");
    }
    println!();
    for series in &report.algorithms {
        print!("{:<24}", series.name);
        for cell in &series.cells {
            print!("{:>12.1}", cell.bins_avg);
        }
        println!();
    }
}

fn run_bench(args: &BenchArgs) -> anyhow::Result<()> {
    let cfg = PackConfig {
        algorithm: parse_algorithm(&args.algorithm)?,
        window: args.window,
        classes: args.classes,
        mode: PackMode::Online,
    };
    let seed = resolve_seed(args.seed);
    let items = generate_items(&mut StdRng::seed_from_u64(seed), args.count);
    let start = Instant::now();
    let report = pack(&items, &cfg)?;
    let dur = start.elapsed();
    println!(
        "bins={} occupancy={:.2}% time={}",
        report.bins_used,
        report.occupancy * 100.0,
        fmt_dur(dur)
    );
    Ok(())
}

fn parse_algorithm(s: &str) -> anyhow::Result<Algorithm> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("unknown algorithm: {s}"))
}

fn mode_for(offline: bool) -> PackMode {
    if offline {
        PackMode::Offline
    } else {
        PackMode::Online
    }
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Uniform sizes in (0, 1]; zero would be an invalid item.
fn generate_items(rng: &mut StdRng, count: usize) -> Vec<f64> {
    (0..count).map(|_| 1.0 - rng.gen_range(0.0..1.0)).collect()
}

fn read_items(path: &Path) -> anyhow::Result<Vec<f64>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read items from {}", path.display()))?;
    let mut items = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let size: f64 = line
            .parse()
            .with_context(|| format!("{}:{}: not a number", path.display(), lineno + 1))?;
        items.push(size);
    }
    info!(count = items.len(), "loaded items");
    Ok(items)
}

fn progress_bar(show: bool, total: u64) -> Option<indicatif::ProgressBar> {
    use indicatif::{ProgressBar, ProgressStyle};
    if !show {
        return None;
    }
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} packing {pos}/{len} [{elapsed_precise}] {wide_msg}",
        )
        .unwrap(),
    );
    Some(bar)
}

fn have_parallel() -> bool {
    cfg!(feature = "parallel")
}

fn fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    algorithm: Option<String>,
    window: Option<usize>,
    classes: Option<usize>,
    mode: Option<String>,
}

impl YamlConfig {
    fn into_pack_config(self, mut cfg: PackConfig) -> PackConfig {
        if let Some(v) = self.algorithm {
            cfg.algorithm = v.parse().unwrap_or(cfg.algorithm);
        }
        if let Some(v) = self.window {
            cfg.window = v;
        }
        if let Some(v) = self.classes {
            cfg.classes = v;
        }
        if let Some(v) = self.mode {
            cfg.mode = v.parse().unwrap_or(cfg.mode);
        }
        cfg
    }
}
