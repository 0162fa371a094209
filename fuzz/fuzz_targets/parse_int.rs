#![no_main]

use libfuzzer_sys::fuzz_target;
use mno_wire::{parse_int, Cursor, FormatError};

// Fuzz target: parse_int on arbitrary bytes.
//
// Catches bugs in:
// - Overflow past nine digits
// - Cursor running past the slice
// - Error offsets pointing outside the input
fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);
    match parse_int(&mut cursor) {
        Ok(value) => {
            assert!(value.unsigned_abs() < 1_000_000_000);
            assert!(cursor.position() <= data.len());
        }
        Err(FormatError::TooManyDigits { offset, .. } | FormatError::MissingDigits { offset }) => {
            assert!(offset <= data.len());
        }
        Err(FormatError::UnexpectedByte { byte, offset }) => {
            assert_eq!(data[offset], byte);
        }
    }
});
