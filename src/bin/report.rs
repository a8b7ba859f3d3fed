//! Print IPC, branch prediction accuracy and MPKI of a gem5 run
use anyhow::Context;
use clap::Parser;
use m5_stats::{Metrics, ReportConfig, StatsTable};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to gem5 stats file
    #[arg(default_value = "m5out/stats.txt")]
    stats_path: PathBuf,

    /// Path to config json overriding statistic names
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print metrics as json
    #[arg(short, long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ReportConfig::default(),
    };

    eprintln!("Loading stats from {}", args.stats_path.display());
    let table = StatsTable::open(&args.stats_path)
        .with_context(|| format!("Failed to read {}", args.stats_path.display()))?;
    let metrics = Metrics::compute(&table, &config.stats)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        println!("{metrics}");
    }

    Ok(())
}
