//! Compare benchmark metrics of multiple gem5 runs
use anyhow::Context;
use clap::Parser;
use cli_table::{Cell, Table, print_stdout};
use m5_stats::{Metrics, ReportConfig, StatsTable};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Paths to gem5 stats files
    #[arg(required = true)]
    stats_paths: Vec<PathBuf>,

    /// Path to config json overriding statistic names
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ReportConfig::default(),
    };

    let mut table = vec![];
    // compute averages for each column
    let mut columns: Vec<Metrics> = vec![];
    for stats_path in &args.stats_paths {
        println!("Loading stats from {}", stats_path.display());
        let stats = StatsTable::open(stats_path)
            .with_context(|| format!("Failed to read {}", stats_path.display()))?;
        let metrics = Metrics::compute(&stats, &config.stats)
            .with_context(|| format!("Failed to compute metrics of {}", stats_path.display()))?;

        let name = match stats_path.file_stem() {
            Some(stem) => stem.to_string_lossy().to_string(),
            None => stats_path.display().to_string(),
        };
        table.push(vec![
            name.cell(),
            format!("{:.4}", metrics.ipc).cell(),
            format!("{:.2} %", metrics.accuracy * 100.0).cell(),
            format!("{:.4}", metrics.mpki).cell(),
        ]);
        columns.push(metrics);
    }

    println!("Summary:");

    let count = columns.len() as f64;
    table.push(vec![
        "Average".cell(),
        format!("{:.4}", columns.iter().map(|col| col.ipc).sum::<f64>() / count).cell(),
        format!(
            "{:.2} %",
            columns.iter().map(|col| col.accuracy * 100.0).sum::<f64>() / count
        )
        .cell(),
        format!("{:.4}", columns.iter().map(|col| col.mpki).sum::<f64>() / count).cell(),
    ]);

    let table = table.table().title(vec![
        "Run".cell(),
        "IPC".cell(),
        "Acc. of cond. br.".cell(),
        "MPKI".cell(),
    ]);
    print_stdout(table)?;

    Ok(())
}
