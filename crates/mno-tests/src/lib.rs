//! Shared helpers for the MNO integration tests, benchmarks and the
//! `generate_input` tool.

use std::fmt::Write as _;
use std::io::{self, Read};

/// Build a deterministic input file of `lines` lines.
///
/// The content mixes the shapes seen in real exports:
///
/// ```text
///   every 50th line      untagged ("ABC,...")
///   every 3rd line       CRLF terminator, others LF
///   every 7th record     negative value
///   values               0 to 3 fractional digits, some with trailing zeros
/// ```
///
/// The last line is left unterminated when `lines` is odd.
pub fn synthetic_input(lines: usize) -> Vec<u8> {
    let mut out = String::with_capacity(lines * 40);

    for i in 0..lines {
        let n = i32::try_from(i).unwrap_or(i32::MAX);
        if i % 50 == 49 {
            let _ = write!(out, "ABC,{i},comment line,{},x", i * 3);
        } else {
            let sign = if i % 7 == 3 { "-" } else { "" };
            let whole = (i * 7919) % 100_000;
            let value = match i % 4 {
                0 => format!("{sign}{whole}"),
                1 => format!("{sign}{whole}.{}", i % 10),
                2 => format!("{sign}{whole}.{:02}0", i % 100),
                _ => format!("{sign}{whole}.{:03}", i % 1000),
            };
            let _ = write!(
                out,
                "MNO,{},{},{},{},{value}",
                n % 997,
                n % 31 + 100,
                n % 12 + 1,
                n.wrapping_mul(37) % 250_000
            );
        }

        let last = i + 1 == lines;
        if !(last && lines % 2 == 1) {
            out.push_str(if i % 3 == 0 { "\r\n" } else { "\n" });
        }
    }

    out.into_bytes()
}

/// Reader that hands out at most `chunk` bytes per `read` call, to force
/// lines to straddle read boundaries.
pub struct ChunkedReader<'a> {
    data: &'a [u8],
    chunk: usize,
}

impl<'a> ChunkedReader<'a> {
    pub fn new(data: &'a [u8], chunk: usize) -> Self {
        Self {
            data,
            chunk: chunk.max(1),
        }
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
