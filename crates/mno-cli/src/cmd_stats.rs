/// Implementation of `mno stats`.
///
/// Decodes every record and prints a summary of the file contents.
///
/// # Example output
///
/// ```text
/// File:     exports/vehicles.csv  (2048 bytes)
/// Lines:    40 total, 38 records, 2 skipped
///
/// Field              Distinct        Min        Max
/// ─────────────────────────────────────────────────
/// element_id               12          1         12
/// vehicle_id                3        100        102
/// term                      4          1          4
/// mileage                  38       1200      98000
///
/// Value:    min -3.5  max 1204.25  sum 10023.75  (f64 approximation)
/// ```
use std::collections::HashSet;

use anyhow::{Context, Result};
use mno_types::{Record, ScaledDecimal};

use crate::StatsArgs;
use crate::input::{self, Input};

/// Running statistics for one integer column.
#[derive(Default)]
struct IntColumn {
    distinct: HashSet<i32>,
    min: Option<i32>,
    max: Option<i32>,
}

impl IntColumn {
    fn observe(&mut self, value: i32) {
        self.distinct.insert(value);
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }
}

/// Running statistics for the value column.
///
/// Min and max compare exactly through `f64` only when the values are
/// within its precision; the original decimals are kept for display.
#[derive(Default)]
struct ValueColumn {
    min: Option<(f64, ScaledDecimal)>,
    max: Option<(f64, ScaledDecimal)>,
    sum: f64,
}

impl ValueColumn {
    fn observe(&mut self, value: ScaledDecimal) {
        let approx = value.to_f64();
        self.sum += approx;
        if self.min.is_none_or(|(m, _)| approx < m) {
            self.min = Some((approx, value));
        }
        if self.max.is_none_or(|(m, _)| approx > m) {
            self.max = Some((approx, value));
        }
    }
}

#[derive(Default)]
struct Stats {
    element_id: IntColumn,
    vehicle_id: IntColumn,
    term: IntColumn,
    mileage: IntColumn,
    value: ValueColumn,
}

impl Stats {
    fn observe(&mut self, record: &Record) {
        self.element_id.observe(record.element_id);
        self.vehicle_id.observe(record.vehicle_id);
        self.term.observe(record.term);
        self.mileage.observe(record.mileage);
        self.value.observe(record.value);
    }
}

/// Run the `mno stats` command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any MNO line fails
/// to decode.
pub fn run(args: &StatsArgs) -> Result<()> {
    let config = input::scan_config(&args.input);
    let mut stats = Stats::default();

    let summary = Input::open(&args.input)?
        .scan(&config, |record| {
            stats.observe(&record);
            Ok::<_, anyhow::Error>(())
        })
        .with_context(|| format!("failed to scan {}", args.input.file.display()))?;

    println!(
        "File:     {}  ({} bytes)",
        args.input.file.display(),
        summary.bytes
    );
    println!(
        "Lines:    {} total, {} records, {} skipped",
        summary.lines, summary.records, summary.skipped
    );

    if summary.records == 0 {
        return Ok(());
    }

    println!();
    let sep = "─".repeat(49);
    println!("{:<15}{:>12}{:>11}{:>11}", "Field", "Distinct", "Min", "Max");
    println!("{sep}");
    for (name, column) in [
        ("element_id", &stats.element_id),
        ("vehicle_id", &stats.vehicle_id),
        ("term", &stats.term),
        ("mileage", &stats.mileage),
    ] {
        println!(
            "{name:<15}{:>12}{:>11}{:>11}",
            column.distinct.len(),
            column.min.unwrap_or_default(),
            column.max.unwrap_or_default()
        );
    }

    println!();
    if let (Some((_, min)), Some((_, max))) = (stats.value.min, stats.value.max) {
        println!(
            "Value:    min {min}  max {max}  sum {}  (f64 approximation)",
            stats.value.sum
        );
    }

    Ok(())
}
