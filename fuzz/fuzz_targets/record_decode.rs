#![no_main]

use libfuzzer_sys::fuzz_target;
use mno_types::{Record, MNO_TAG};

// Fuzz target: Record::decode on a single arbitrary line.
//
// Untagged lines must never fail, and a decoded record must survive a
// trip through its Display form.
fuzz_target!(|data: &[u8]| {
    let result = Record::decode(data);

    if !data.starts_with(&MNO_TAG) {
        assert_eq!(result, Ok(None));
        return;
    }

    if let Ok(Some(record)) = result {
        let line = record.to_string();
        let again = Record::decode(line.as_bytes()).unwrap().unwrap();
        assert_eq!(again, record);
    }
});
