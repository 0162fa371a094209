/// Opening an input file with the selected read strategy and driving a
/// [`RecordReader`] over it.
///
/// ```text
/// ┌───────────┬──────────────────────────────┬─────────────────────────┐
/// │ Strategy  │ Storage                      │ Scanner                 │
/// ├───────────┼──────────────────────────────┼─────────────────────────┤
/// │ streaming │ File + growable buffer       │ StreamingLineScanner    │
/// │ mapped    │ read-only memory map         │ MappedLineScanner       │
/// └───────────┴──────────────────────────────┴─────────────────────────┘
/// ```
///
/// Both strategies produce the same records for the same file.
use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use mno_scanner::{MappedFile, RecordReader, ScanConfig, ScanError};
use mno_types::Record;

use crate::InputArgs;

/// How an input file is brought into memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Buffered reads through a growable buffer.
    Streaming,
    /// Memory-map the whole file.
    Mapped,
}

/// An opened input, ready to scan.
pub enum Input {
    Streaming { file: File, len: u64 },
    Mapped(MappedFile),
}

/// Counters reported after a complete scan.
#[derive(Clone, Copy, Debug)]
pub struct ScanSummary {
    pub bytes: u64,
    pub lines: u64,
    pub records: u64,
    pub skipped: u64,
    pub elapsed: Duration,
}

impl ScanSummary {
    /// Input throughput in MiB/s.
    #[allow(clippy::cast_precision_loss)]
    pub fn mib_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.bytes as f64 / (1024.0 * 1024.0) / secs
    }
}

impl Input {
    /// Open the file named by `args` using the requested strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or mapped.
    pub fn open(args: &InputArgs) -> Result<Self> {
        let path = &args.file;
        match args.strategy {
            Strategy::Streaming => {
                let file =
                    File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
                let len = file
                    .metadata()
                    .with_context(|| format!("cannot stat {}", path.display()))?
                    .len();
                Ok(Self::Streaming { file, len })
            }
            Strategy::Mapped => Ok(Self::Mapped(MappedFile::open(path)?)),
        }
    }

    /// Decode every record, passing each one to `f`.
    ///
    /// # Errors
    ///
    /// Returns the first scan error (converted into `E`) or the first
    /// error from `f`.
    pub fn scan<E>(
        self,
        config: &ScanConfig,
        f: impl FnMut(Record) -> Result<(), E>,
    ) -> Result<ScanSummary, E>
    where
        E: From<ScanError>,
    {
        let started = Instant::now();
        match self {
            Self::Streaming { file, len } => {
                log::info!("scanning {len} bytes with streaming reader");
                let mut reader = RecordReader::streaming(file, config);
                reader.try_for_each_record(f)?;
                Ok(summary(&reader, len, started))
            }
            Self::Mapped(mapped) => {
                log::info!(
                    "scanning {} bytes from mapped {}",
                    mapped.len(),
                    mapped.path().display()
                );
                let mut reader = RecordReader::mapped(mapped.as_bytes(), config);
                reader.try_for_each_record(f)?;
                Ok(summary(&reader, mapped.len() as u64, started))
            }
        }
    }
}

/// Build the scan configuration described by `args`.
pub fn scan_config(args: &InputArgs) -> ScanConfig {
    ScanConfig {
        initial_capacity: args.buffer_size,
        ..ScanConfig::default()
    }
}

fn summary<S: mno_scanner::LineSource>(
    reader: &RecordReader<S>,
    bytes: u64,
    started: Instant,
) -> ScanSummary {
    ScanSummary {
        bytes,
        lines: reader.lines(),
        records: reader.records(),
        skipped: reader.skipped(),
        elapsed: started.elapsed(),
    }
}
