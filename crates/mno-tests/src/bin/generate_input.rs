//! Writes a synthetic MNO export for benchmarking the `mno` CLI.
//!
//! ```text
//! cargo run -p mno-tests --bin generate_input -- --lines 1000000 -o input.csv
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(about = "Generate a synthetic MNO input file")]
struct Args {
    /// Number of lines to generate.
    #[arg(long, default_value_t = 100_000)]
    lines: usize,

    /// Output path.
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let input = mno_tests::synthetic_input(args.lines);
    fs::write(&args.output, &input)
        .with_context(|| format!("cannot write {}", args.output.display()))?;
    println!(
        "wrote {} lines ({} bytes) to {}",
        args.lines,
        input.len(),
        args.output.display()
    );
    Ok(())
}
