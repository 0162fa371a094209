#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mno_scanner::{RecordReader, ScanConfig};
use mno_tests::ChunkedReader;

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    chunk: u8,
    data: Vec<u8>,
}

// Fuzz target: streaming and mapped readers over the same bytes.
//
// Whatever the buffer capacity and read sizes, both strategies must
// yield the same records and stop with the same error.
fuzz_target!(|input: Input| {
    let config = ScanConfig {
        initial_capacity: usize::from(input.capacity),
        ..ScanConfig::default()
    };
    let reader = ChunkedReader::new(&input.data, usize::from(input.chunk));

    let mapped: Vec<_> = RecordReader::mapped(&input.data, &config)
        .map(|r| r.map_err(|e| e.to_string()))
        .collect();
    let streamed: Vec<_> = RecordReader::streaming(reader, &config)
        .map(|r| r.map_err(|e| e.to_string()))
        .collect();

    assert_eq!(mapped, streamed);
});
