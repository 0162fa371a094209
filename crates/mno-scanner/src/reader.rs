use std::io::Read;

use mno_types::Record;

use crate::cancel::CancelToken;
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::scanner::LineScanner;
use crate::source::{LineSource, MappedSource, StreamingSource};

/// Pulls [`Record`]s out of a [`LineScanner`].
///
/// Each line is checked for the MNO tag. Untagged lines are counted as
/// skipped and passed over. A tagged line that fails to decode ends the
/// whole scan with [`ScanError::Format`]; no later line is looked at.
///
/// ```text
///   Reading ──(end of input)──────────→ Done
///      │
///      └──(error / cancellation)──────→ Done
/// ```
///
/// # Example
///
/// ```rust
/// use mno_scanner::{RecordReader, ScanConfig};
///
/// let input = b"header\nMNO,1,2,3,4,5.25\nMNO,6,7,8,9,-1\n";
/// let mut reader = RecordReader::mapped(input, &ScanConfig::default());
///
/// let mut count = 0;
/// while let Some(record) = reader.next_record().unwrap() {
///     assert!(record.element_id > 0);
///     count += 1;
/// }
/// assert_eq!(count, 2);
/// assert_eq!(reader.skipped(), 1);
/// ```
pub struct RecordReader<S> {
    scanner: LineScanner<S>,
    cancel: Option<CancelToken>,
    state: ReaderState,
    records: u64,
    skipped: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReaderState {
    Reading,
    Done,
}

impl<R: Read> RecordReader<StreamingSource<R>> {
    /// Read records from `reader` through a buffer sized by `config`.
    pub fn streaming(reader: R, config: &ScanConfig) -> Self {
        Self::new(
            LineScanner::streaming(reader, config.initial_capacity),
            config.cancel.clone(),
        )
    }
}

impl<'a> RecordReader<MappedSource<'a>> {
    /// Read records from a fully-resident region.
    pub fn mapped(region: &'a [u8], config: &ScanConfig) -> Self {
        Self::new(LineScanner::mapped(region), config.cancel.clone())
    }
}

impl<S: LineSource> RecordReader<S> {
    pub fn new(scanner: LineScanner<S>, cancel: Option<CancelToken>) -> Self {
        Self {
            scanner,
            cancel,
            state: ReaderState::Reading,
            records: 0,
            skipped: 0,
        }
    }

    /// Decode the next tagged line.
    ///
    /// Returns `Ok(None)` at end of input, and after any error has been
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`ScanError::Format`] for a tagged line with a malformed field.
    /// - [`ScanError::Cancelled`] if the cancel token is set.
    /// - [`ScanError::Io`] if the underlying reader fails.
    pub fn next_record(&mut self) -> Result<Option<Record>, ScanError> {
        if self.state == ReaderState::Done {
            return Ok(None);
        }

        let result = self.advance();
        match &result {
            Ok(Some(_)) => {}
            Ok(None) => {
                self.state = ReaderState::Done;
                log::debug!(
                    "scan finished: {} lines, {} records, {} skipped",
                    self.lines(),
                    self.records,
                    self.skipped
                );
            }
            Err(e) => {
                self.state = ReaderState::Done;
                log::debug!("scan stopped after {} lines: {e}", self.lines());
            }
        }
        result
    }

    fn advance(&mut self) -> Result<Option<Record>, ScanError> {
        loop {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                let line = self.scanner.lines_read();
                log::warn!("scan cancelled after {line} lines");
                return Err(ScanError::Cancelled { line });
            }

            let Some(line) = self.scanner.read_line()? else {
                return Ok(None);
            };

            match Record::decode(&line) {
                Ok(Some(record)) => {
                    self.records += 1;
                    return Ok(Some(record));
                }
                Ok(None) => self.skipped += 1,
                Err(source) => {
                    return Err(ScanError::Format {
                        line: line.number(),
                        source,
                    });
                }
            }
        }
    }

    /// Decode every remaining record, passing each to `f`.
    ///
    /// Returns the number of records handed to `f`.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error, as [`next_record`](Self::next_record).
    pub fn for_each_record(&mut self, mut f: impl FnMut(Record)) -> Result<u64, ScanError> {
        self.try_for_each_record(|record| {
            f(record);
            Ok::<_, ScanError>(())
        })
    }

    /// Like [`for_each_record`](Self::for_each_record), but `f` may fail.
    ///
    /// # Errors
    ///
    /// Returns the first scan error (converted into `E`) or the first
    /// error returned by `f`, whichever comes first.
    pub fn try_for_each_record<E>(
        &mut self,
        mut f: impl FnMut(Record) -> Result<(), E>,
    ) -> Result<u64, E>
    where
        E: From<ScanError>,
    {
        let mut count = 0;
        while let Some(record) = self.next_record()? {
            f(record)?;
            count += 1;
        }
        Ok(count)
    }

    /// Lines read so far, tagged or not.
    pub fn lines(&self) -> u64 {
        self.scanner.lines_read()
    }

    /// Records decoded so far.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Untagged lines passed over so far.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl<S: LineSource> Iterator for RecordReader<S> {
    type Item = Result<Record, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
