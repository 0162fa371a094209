use std::io;
use std::path::PathBuf;

use mno_wire::FormatError;

/// Errors that end a scan.
///
/// A scan never recovers from an error: once a [`RecordReader`] returns
/// one, it yields nothing further. Lines without the MNO tag are skipped
/// silently and never produce an error.
///
/// ```text
///   ScanError
///   ├── Format     ← tagged line with a malformed field (carries line no.)
///   ├── Mapping    ← input could not be mapped into memory
///   ├── Cancelled  ← cancel token observed between lines
///   └── Io         ← read failure from the streaming source
/// ```
///
/// [`RecordReader`]: crate::RecordReader
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A line carrying the MNO tag failed to decode.
    ///
    /// `line` is 1-based; the inner [`FormatError`] offset is relative to
    /// the start of that line.
    #[error("malformed record on line {line}")]
    Format {
        line: u64,
        #[source]
        source: FormatError,
    },

    /// The input file could not be opened or mapped.
    #[error("cannot map {}", .path.display())]
    Mapping {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The scan was cancelled after `line` lines had been read.
    #[error("scan cancelled after {line} lines")]
    Cancelled { line: u64 },

    /// The streaming source failed to read.
    #[error(transparent)]
    Io(#[from] io::Error),
}
