//! Display parsed statistics of a gem5 run
use anyhow::Context;
use clap::Parser;
use cli_table::{Cell, Table, print_stdout};
use m5_stats::{Stat, StatsTable};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to gem5 stats file
    #[arg(default_value = "m5out/stats.txt")]
    stats_path: PathBuf,

    /// Only show statistics whose name starts with this prefix
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// Path to result json
    #[arg(short, long)]
    output_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let stats = StatsTable::open(&args.stats_path)
        .with_context(|| format!("Failed to read {}", args.stats_path.display()))?;
    let stats = stats.with_prefix(&args.prefix);
    println!(
        "Got {} statistics from {}",
        stats.len(),
        args.stats_path.display()
    );

    let mut table = vec![];
    for (name, stat) in stats.iter() {
        let kind = match stat {
            Stat::Scalar(_) => "scalar".to_string(),
            Stat::Vector(values) => format!("vector[{}]", values.len()),
        };
        table.push(vec![name.cell(), kind.cell(), stat.to_string().cell()]);
    }
    let table = table
        .table()
        .title(vec!["Name".cell(), "Kind".cell(), "Value".cell()]);
    print_stdout(table)?;

    if let Some(output_path) = &args.output_path {
        println!("Writing statistics to {}", output_path.display());
        let file = File::create(output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &stats)?;
        writer.flush()?;
    }

    Ok(())
}
