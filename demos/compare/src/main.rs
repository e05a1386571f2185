//! compare — baseline vs. intervention capacity on a waiting list.
//!
//! Runs the same arrival stream and starting backlog twice, once with the
//! current weekly capacity and once with the intervention capacity, and
//! prints how waits, queue length, and throughput change.
//!
//! ```text
//! compare --arrivals 15 --baseline-capacity 12 --intervention-capacity 14 \
//!         --backlog 150 --weeks 26 --csv-dir output
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use wl_core::{ArrivalPattern, PERIOD_LENGTH_TICKS, ScenarioConfig};
use wl_output::{CsvWriter, file_stem, write_result};
use wl_sim::{ScenarioComparison, ScenarioResult, compare};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// New patients joining the list per week (mean, with --poisson-seed).
    #[arg(short, long, default_value_t = 15)]
    arrivals: u32,

    /// Current operating slots per week.
    #[arg(short = 'b', long, default_value_t = 12)]
    baseline_capacity: u32,

    /// Slots per week after the intervention.
    #[arg(short = 'i', long, default_value_t = 14)]
    intervention_capacity: u32,

    /// Patients already waiting at the start.
    #[arg(short = 'q', long, default_value_t = 150)]
    backlog: u32,

    /// Simulated weeks.
    #[arg(short, long, default_value_t = 26)]
    weeks: u32,

    /// Draw weekly arrivals from a Poisson distribution with this seed.
    #[arg(long)]
    poisson_seed: Option<u64>,

    /// Write per-week and per-patient CSV files into this directory.
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Print the comparison as JSON instead of text.
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn print_result(result: &ScenarioResult) {
    let days_per_week = PERIOD_LENGTH_TICKS as f64;
    println!("{}:", result.label());
    println!(
        "  - mean wait:          {:.1} days ({:.1} weeks)",
        result.mean_wait_time,
        result.mean_wait_time / days_per_week
    );
    if let Some(max) = result.max_wait_time() {
        println!("  - longest wait:       {max} days");
    }
    println!("  - final queue length: {} patients", result.final_queue_length);
    println!("  - total operations:   {}", result.total_served);
    println!("  - outlook:            {}", result.outlook());
    println!();
}

fn print_comparison(cmp: &ScenarioComparison) {
    print_result(&cmp.baseline);
    print_result(&cmp.intervention);
    println!("Intervention effect:");
    println!("  - mean wait:    {:.1}% shorter", cmp.wait_reduction_pct());
    println!("  - final queue:  {:.1}% shorter", cmp.queue_reduction_pct());
    println!("  - operations:   {:.1}% more", cmp.throughput_increase_pct());
    println!();

    println!("{:<6} {:>10} {:>14}", "Week", "Baseline", "Intervention");
    println!("{}", "-".repeat(32));
    for (k, (b, i)) in cmp
        .baseline
        .per_period_queue_length
        .iter()
        .zip(&cmp.intervention.per_period_queue_length)
        .enumerate()
    {
        println!("{:<6} {:>10} {:>14}", k + 1, b, i);
    }
}

fn export_csv(dir: &Path, result: &ScenarioResult) -> Result<()> {
    let stem = file_stem(result.label());
    let mut writer = CsvWriter::new(dir, &stem)
        .with_context(|| format!("opening CSV files for '{}'", result.label()))?;
    write_result(&mut writer, result)?;
    info!("wrote {}/{stem}_periods.csv and {stem}_waits.csv", dir.display());
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let pattern = match cli.poisson_seed {
        Some(seed) => ArrivalPattern::Poisson { seed },
        None => ArrivalPattern::Fixed,
    };
    let baseline = ScenarioConfig::new(
        format!("Baseline ({} slots/week)", cli.baseline_capacity),
        cli.arrivals,
        cli.backlog,
        cli.baseline_capacity,
        cli.weeks,
    )
    .with_arrivals(pattern);
    let intervention = baseline.with_capacity(
        cli.intervention_capacity,
        format!("Intervention ({} slots/week)", cli.intervention_capacity),
    );

    let start = Instant::now();
    let cmp = compare(&baseline, &intervention).context("simulation failed")?;
    info!("both scenarios simulated in {:.3} s", start.elapsed().as_secs_f64());

    if let Some(dir) = &cli.csv_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        export_csv(dir, &cmp.baseline)?;
        export_csv(dir, &cmp.intervention)?;
    }

    if cli.json {
        let summary = serde_json::json!({
            "comparison":              &cmp,
            "wait_reduction_pct":      cmp.wait_reduction_pct(),
            "queue_reduction_pct":     cmp.queue_reduction_pct(),
            "throughput_increase_pct": cmp.throughput_increase_pct(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("=== Waiting list simulation ===");
        println!(
            "Arrivals: {}/week  |  Backlog: {}  |  Weeks: {}",
            cli.arrivals, cli.backlog, cli.weeks
        );
        println!();
        print_comparison(&cmp);
    }
    Ok(())
}
