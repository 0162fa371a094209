use std::io::{self, Read};

/// The capability a [`LineScanner`](crate::LineScanner) needs from its
/// storage.
///
/// A source exposes a window of unread bytes and may be able to extend
/// it. The scanner only ever looks at [`available`](Self::available),
/// marks whole lines as read with [`consume`](Self::consume), and calls
/// [`fill`](Self::fill) when the window holds no complete line.
///
/// ```text
///   StreamingSource  growable buffer, fill() reads from io::Read
///   MappedSource     fixed resident region, fill() always Ok(false)
/// ```
pub trait LineSource {
    /// Unread bytes currently held by the source.
    fn available(&self) -> &[u8];

    /// Mark the first `n` bytes of [`available`](Self::available) as read.
    fn consume(&mut self, n: usize);

    /// Append more bytes to the end of the available window.
    ///
    /// Bytes already available keep their order and relative positions,
    /// though their address may change. Returns `Ok(false)` once the
    /// source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying reader.
    fn fill(&mut self) -> io::Result<bool>;
}

/// A [`LineSource`] backed by an owned buffer refilled from a reader.
///
/// Buffer layout:
///
/// ```text
///   ┌──────────── consumed ───────────┬──── unread ────┬──── free ────┐
///   0                               start             end         buf.len()
/// ```
///
/// Before each read the unread bytes are shifted to offset 0. When the
/// buffer is completely full of unread bytes its length doubles, so a
/// single line longer than the buffer is still returned whole.
pub struct StreamingSource<R> {
    reader: R,
    buf: Vec<u8>,
    start: usize,
    end: usize,
    exhausted: bool,
}

impl<R: Read> StreamingSource<R> {
    /// Create a source with a buffer of `capacity` bytes (at least 1).
    pub fn new(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buf: vec![0; capacity.max(1)],
            start: 0,
            end: 0,
            exhausted: false,
        }
    }

    /// Current buffer size in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// `true` once the reader has reported end of input.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn shift(&mut self) {
        if self.start == 0 {
            return;
        }
        self.buf.copy_within(self.start..self.end, 0);
        self.end -= self.start;
        self.start = 0;
    }

    fn grow(&mut self) {
        let new_len = self.buf.len() * 2;
        log::trace!("growing line buffer {} -> {new_len} bytes", self.buf.len());
        self.buf.resize(new_len, 0);
    }
}

impl<R: Read> LineSource for StreamingSource<R> {
    fn available(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.end - self.start);
        self.start = (self.start + n).min(self.end);
    }

    fn fill(&mut self) -> io::Result<bool> {
        if self.exhausted {
            return Ok(false);
        }

        self.shift();
        if self.end == self.buf.len() {
            self.grow();
        }

        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.exhausted = true;
                    return Ok(false);
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(true);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

/// A [`LineSource`] over a byte region that is already fully resident,
/// such as a memory-mapped file. It never copies or reallocates.
#[derive(Clone, Copy, Debug)]
pub struct MappedSource<'a> {
    region: &'a [u8],
    pos: usize,
}

impl<'a> MappedSource<'a> {
    pub fn new(region: &'a [u8]) -> Self {
        Self { region, pos: 0 }
    }

    /// Offset of the next unread byte within the region.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl LineSource for MappedSource<'_> {
    fn available(&self) -> &[u8] {
        &self.region[self.pos..]
    }

    fn consume(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.region.len());
    }

    fn fill(&mut self) -> io::Result<bool> {
        Ok(false)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Reader that hands out at most `chunk` bytes per call.
    pub(crate) struct ChunkedReader<'a> {
        data: &'a [u8],
        chunk: usize,
    }

    impl<'a> ChunkedReader<'a> {
        pub(crate) fn new(data: &'a [u8], chunk: usize) -> Self {
            Self { data, chunk }
        }
    }

    impl Read for ChunkedReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    /// Reader that fails with `Interrupted` before every successful read.
    struct InterruptingReader<'a> {
        inner: &'a [u8],
        interrupt_next: bool,
    }

    impl Read for InterruptingReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupt_next {
                self.interrupt_next = false;
                return Err(io::ErrorKind::Interrupted.into());
            }
            self.interrupt_next = true;
            self.inner.read(buf)
        }
    }

    pub(crate) struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn fill_appends_after_unread_bytes() {
        let mut source = StreamingSource::new(ChunkedReader::new(b"abcdef", 2), 8);
        assert!(source.available().is_empty());
        assert!(source.fill().unwrap());
        assert_eq!(source.available(), b"ab");
        assert!(source.fill().unwrap());
        assert_eq!(source.available(), b"abcd");
    }

    #[test]
    fn consumed_bytes_are_shifted_out_on_fill() {
        let mut source = StreamingSource::new(ChunkedReader::new(b"abcdef", 4), 4);
        assert!(source.fill().unwrap());
        source.consume(3);
        assert_eq!(source.available(), b"d");
        assert!(source.fill().unwrap());
        assert_eq!(source.available(), b"def");
        // Shift made room, no growth needed
        assert_eq!(source.capacity(), 4);
    }

    #[test]
    fn full_buffer_doubles() {
        let mut source = StreamingSource::new(ChunkedReader::new(b"abcdefgh", 8), 2);
        assert!(source.fill().unwrap());
        assert_eq!(source.available(), b"ab");
        assert!(source.fill().unwrap());
        assert_eq!(source.capacity(), 4);
        assert!(source.fill().unwrap());
        assert_eq!(source.capacity(), 8);
        assert_eq!(source.available(), b"abcdefgh");
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut source = StreamingSource::new(ChunkedReader::new(b"xyz", 8), 0);
        assert_eq!(source.capacity(), 1);
        while source.fill().unwrap() {}
        assert_eq!(source.available(), b"xyz");
    }

    #[test]
    fn exhaustion_is_sticky() {
        let mut source = StreamingSource::new(ChunkedReader::new(b"", 8), 8);
        assert!(!source.fill().unwrap());
        assert!(source.is_exhausted());
        assert!(!source.fill().unwrap());
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let reader = InterruptingReader {
            inner: b"hello",
            interrupt_next: true,
        };
        let mut source = StreamingSource::new(reader, 16);
        assert!(source.fill().unwrap());
        assert_eq!(source.available(), b"hello");
    }

    #[test]
    fn read_errors_propagate() {
        let mut source = StreamingSource::new(FailingReader, 16);
        let err = source.fill().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn mapped_source_never_fills() {
        let mut source = MappedSource::new(b"line\n");
        assert_eq!(source.available(), b"line\n");
        assert!(!source.fill().unwrap());
        source.consume(5);
        assert!(source.available().is_empty());
        assert_eq!(source.position(), 5);
    }
}
