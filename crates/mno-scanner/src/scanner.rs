use std::io::Read;
use std::mem;
use std::ops::Deref;

use crate::error::ScanError;
use crate::source::{LineSource, MappedSource, StreamingSource};

/// One line of input, borrowed from the scanner's storage.
///
/// The view never includes the `\n` terminator or a `\r` directly before
/// it. It borrows the scanner mutably, so it must be dropped before the
/// next call to [`LineScanner::read_line`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineView<'a> {
    bytes: &'a [u8],
    number: u64,
}

impl<'a> LineView<'a> {
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// 1-based position of this line in the input.
    pub fn number(&self) -> u64 {
        self.number
    }
}

impl Deref for LineView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

/// Splits a [`LineSource`] into lines without copying them.
///
/// The algorithm is the same for every source:
///
/// ```text
///   1. consume the line handed out by the previous call
///   2. search available() for '\n', skipping bytes already searched
///   3. not found → fill() and search only the new bytes; repeat
///   4. source exhausted → leftover bytes form a final line, or None
/// ```
///
/// A streaming source may move its bytes during `fill()`, which is why
/// the search position is tracked as an offset into `available()`
/// rather than as a reference.
pub struct LineScanner<S> {
    source: S,
    /// Length (terminator included) of the line last handed out. It is
    /// consumed lazily so the returned view stays valid until the next
    /// call.
    pending: usize,
    lines: u64,
}

/// Line scanner that reads through an owned, growable buffer.
pub type StreamingLineScanner<R> = LineScanner<StreamingSource<R>>;

/// Line scanner over a fully-resident byte region.
pub type MappedLineScanner<'a> = LineScanner<MappedSource<'a>>;

impl<S: LineSource> LineScanner<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending: 0,
            lines: 0,
        }
    }

    /// Return the next line, or `None` once the source is exhausted.
    ///
    /// An input ending in `\n` does not produce a trailing empty line;
    /// an input ending without one yields its last bytes as a final
    /// line.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] if the source fails to fill.
    pub fn read_line(&mut self) -> Result<Option<LineView<'_>>, ScanError> {
        self.source.consume(mem::take(&mut self.pending));

        let mut searched = 0;
        let end = loop {
            let available = self.source.available();
            if let Some(i) = available[searched..].iter().position(|&b| b == b'\n') {
                let end = searched + i;
                self.pending = end + 1;
                break end;
            }
            searched = available.len();

            if !self.source.fill()? {
                if searched == 0 {
                    return Ok(None);
                }
                self.pending = searched;
                break searched;
            }
        };

        self.lines += 1;
        let mut bytes = &self.source.available()[..end];
        if let [rest @ .., b'\r'] = bytes {
            bytes = rest;
        }

        Ok(Some(LineView {
            bytes,
            number: self.lines,
        }))
    }

    /// Number of lines returned so far.
    pub fn lines_read(&self) -> u64 {
        self.lines
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<R: Read> LineScanner<StreamingSource<R>> {
    /// Scan `reader` through a buffer of `capacity` bytes.
    pub fn streaming(reader: R, capacity: usize) -> Self {
        Self::new(StreamingSource::new(reader, capacity))
    }
}

impl<'a> LineScanner<MappedSource<'a>> {
    /// Scan a region that is already fully in memory.
    pub fn mapped(region: &'a [u8]) -> Self {
        Self::new(MappedSource::new(region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::tests::ChunkedReader;

    fn collect<S: LineSource>(mut scanner: LineScanner<S>) -> Vec<Vec<u8>> {
        let mut lines = Vec::new();
        while let Some(line) = scanner.read_line().unwrap() {
            lines.push(line.to_vec());
        }
        lines
    }

    fn streaming(input: &[u8], chunk: usize, capacity: usize) -> Vec<Vec<u8>> {
        collect(LineScanner::streaming(ChunkedReader::new(input, chunk), capacity))
    }

    fn mapped(input: &[u8]) -> Vec<Vec<u8>> {
        collect(LineScanner::mapped(input))
    }

    fn lines(expected: &[&str]) -> Vec<Vec<u8>> {
        expected.iter().map(|l| l.as_bytes().to_vec()).collect()
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(mapped(b"").is_empty());
        assert!(streaming(b"", 4, 4).is_empty());
    }

    #[test]
    fn splits_on_newline() {
        let expected = lines(&["a", "bb", "ccc"]);
        assert_eq!(mapped(b"a\nbb\nccc\n"), expected);
        assert_eq!(streaming(b"a\nbb\nccc\n", 64, 64), expected);
    }

    #[test]
    fn final_unterminated_line_is_returned() {
        let expected = lines(&["first", "last"]);
        assert_eq!(mapped(b"first\nlast"), expected);
        assert_eq!(streaming(b"first\nlast", 3, 4), expected);
    }

    #[test]
    fn carriage_return_before_newline_is_stripped() {
        let expected = lines(&["one", "two", "three"]);
        assert_eq!(mapped(b"one\r\ntwo\r\nthree\r"), expected);
        assert_eq!(streaming(b"one\r\ntwo\r\nthree\r", 2, 2), expected);
    }

    #[test]
    fn only_one_carriage_return_is_stripped() {
        assert_eq!(mapped(b"x\r\r\n"), lines(&["x\r"]));
    }

    #[test]
    fn blank_lines_are_preserved() {
        let expected = lines(&["", "a", "", ""]);
        assert_eq!(mapped(b"\na\n\n\r\n"), expected);
        assert_eq!(streaming(b"\na\n\n\r\n", 1, 1), expected);
    }

    #[test]
    fn line_split_across_reads_is_reassembled() {
        // Second read boundary falls in the middle of "MNO,2,..."
        let input = b"MNO,1,1,1,1,1.0\nMNO,2,2,2,2,2.5\n";
        let expected = lines(&["MNO,1,1,1,1,1.0", "MNO,2,2,2,2,2.5"]);
        assert_eq!(streaming(input, 20, 64), expected);
    }

    #[test]
    fn line_longer_than_buffer_grows_it() {
        let long = "9".repeat(1000);
        let input = format!("short\n{long}\nend\n");
        let mut scanner = LineScanner::streaming(ChunkedReader::new(input.as_bytes(), 7), 4);

        assert_eq!(scanner.read_line().unwrap().unwrap().as_bytes(), b"short");
        assert_eq!(scanner.read_line().unwrap().unwrap().as_bytes(), long.as_bytes());
        assert!(scanner.source().capacity() >= 1000);
        assert_eq!(scanner.read_line().unwrap().unwrap().as_bytes(), b"end");
        assert!(scanner.read_line().unwrap().is_none());
    }

    #[test]
    fn line_numbers_count_from_one() {
        let mut scanner = LineScanner::mapped(b"a\nb\n");
        assert_eq!(scanner.read_line().unwrap().unwrap().number(), 1);
        assert_eq!(scanner.read_line().unwrap().unwrap().number(), 2);
        assert!(scanner.read_line().unwrap().is_none());
        assert_eq!(scanner.lines_read(), 2);
    }

    #[test]
    fn end_is_sticky() {
        let mut scanner = LineScanner::streaming(ChunkedReader::new(b"x", 1), 1);
        assert!(scanner.read_line().unwrap().is_some());
        assert!(scanner.read_line().unwrap().is_none());
        assert!(scanner.read_line().unwrap().is_none());
    }

    #[test]
    fn mapped_scanner_does_not_copy() {
        let input = b"abc\ndef\n";
        let mut scanner = LineScanner::mapped(input);
        let line = scanner.read_line().unwrap().unwrap();
        assert!(std::ptr::eq(line.as_bytes().as_ptr(), input.as_ptr()));
    }

    #[test]
    fn streaming_matches_mapped_for_every_buffer_size() {
        let input = b"MNO,1,2,3,4,5.5\r\nheader line\n\nMNO,-1,0,0,0,-0.25\nlast";
        let expected = mapped(input);
        for capacity in [1, 2, 3, 5, 8, 16, 4096] {
            for chunk in [1, 2, 7, 64] {
                assert_eq!(
                    streaming(input, chunk, capacity),
                    expected,
                    "capacity={capacity} chunk={chunk}"
                );
            }
        }
    }
}
