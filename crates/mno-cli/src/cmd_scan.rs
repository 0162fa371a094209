/// Implementation of `mno scan`.
///
/// Decodes every record in the file and discards it, then reports how
/// much was read. Useful for measuring raw decode throughput of the two
/// read strategies.
///
/// # Example output
///
/// ```text
/// File:     exports/vehicles.csv  (52428800 bytes, streaming)
/// Lines:    1000000
/// Records:  998000
/// Skipped:  2000
/// Elapsed:  212.41ms  (235.4 MiB/s)
/// ```
use anyhow::{Context, Result};

use crate::ScanArgs;
use crate::input::{self, Input};

/// Run the `mno scan` command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any MNO line fails
/// to decode.
pub fn run(args: &ScanArgs) -> Result<()> {
    let config = input::scan_config(&args.input);
    let summary = Input::open(&args.input)?
        .scan(&config, |_record| Ok::<_, anyhow::Error>(()))
        .with_context(|| format!("failed to scan {}", args.input.file.display()))?;

    println!(
        "File:     {}  ({} bytes, {})",
        args.input.file.display(),
        summary.bytes,
        strategy_label(args.input.strategy)
    );
    println!("Lines:    {}", summary.lines);
    println!("Records:  {}", summary.records);
    println!("Skipped:  {}", summary.skipped);
    println!(
        "Elapsed:  {:.2?}  ({:.1} MiB/s)",
        summary.elapsed,
        summary.mib_per_sec()
    );

    Ok(())
}

fn strategy_label(strategy: input::Strategy) -> &'static str {
    match strategy {
        input::Strategy::Streaming => "streaming",
        input::Strategy::Mapped => "mapped",
    }
}
