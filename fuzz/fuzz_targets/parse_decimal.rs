#![no_main]

use libfuzzer_sys::fuzz_target;
use mno_wire::{parse_decimal, Cursor};

// Fuzz target: parse_decimal on arbitrary bytes.
//
// Any value that decodes must print in a form that decodes back to an
// equal value, zero included.
fuzz_target!(|data: &[u8]| {
    let Ok(value) = parse_decimal(&mut Cursor::new(data)) else {
        return;
    };

    assert!(value.scale <= 19);
    let text = value.to_string();
    let again = parse_decimal(&mut Cursor::new(text.as_bytes())).unwrap();
    assert_eq!(again, value);
});
