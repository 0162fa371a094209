/// Implementation of `mno dump`.
///
/// Writes each decoded record as one `MNO,...` line to stdout or to the
/// file given with `-o`. Values are printed with exactly their decoded
/// scale, so `12.340` in the input comes out as `12.34`.
use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use mno_types::Record;

use crate::DumpArgs;
use crate::input::{self, Input};

/// Run the `mno dump` command.
///
/// # Errors
///
/// Returns an error if the input cannot be scanned or the output cannot
/// be written.
pub fn run(args: &DumpArgs) -> Result<()> {
    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(sink);

    let config = input::scan_config(&args.input);
    let summary = Input::open(&args.input)?
        .scan(&config, |record| write_record(&mut out, &record))
        .with_context(|| format!("failed to dump {}", args.input.file.display()))?;

    out.flush().context("failed to flush output")?;
    log::info!("dumped {} records", summary.records);
    Ok(())
}

fn write_record(out: &mut impl Write, record: &Record) -> Result<()> {
    writeln!(out, "{record}").context("failed to write record")
}
