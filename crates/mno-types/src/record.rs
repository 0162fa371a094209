use std::fmt;

use mno_wire::{Cursor, FormatError, ScaledDecimal, parse_decimal, parse_int};

/// The four leading bytes that mark a line as an MNO record.
pub const MNO_TAG: [u8; 4] = *b"MNO,";

/// One decoded MNO record.
///
/// ```text
/// MNO,<element_id>,<vehicle_id>,<term>,<mileage>,<value>
///      i32          i32          i32    i32       ScaledDecimal
/// ```
///
/// A `Record` is a plain value: it owns no references into the line it
/// was decoded from, so it outlives the scanner buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    pub element_id: i32,
    pub vehicle_id: i32,
    pub term: i32,
    pub mileage: i32,
    pub value: ScaledDecimal,
}

impl Record {
    /// Decode a record from one line (without its terminator).
    ///
    /// Lines that do not begin with [`MNO_TAG`] are not records and yield
    /// `Ok(None)`; this includes lines shorter than the tag. A line that
    /// carries the tag must decode completely: the four integer fields
    /// and the value are read in order, each consuming its own
    /// terminator. Anything after the value field is ignored.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormatError`] raised by a field decoder. Error
    /// offsets are relative to the start of `line`.
    pub fn decode(line: &[u8]) -> Result<Option<Self>, FormatError> {
        if !line.starts_with(&MNO_TAG) {
            return Ok(None);
        }

        let mut cursor = Cursor::new(line);
        cursor.skip(MNO_TAG.len());

        let element_id = parse_int(&mut cursor)?;
        let vehicle_id = parse_int(&mut cursor)?;
        let term = parse_int(&mut cursor)?;
        let mileage = parse_int(&mut cursor)?;
        let value = parse_decimal(&mut cursor)?;

        Ok(Some(Self {
            element_id,
            vehicle_id,
            term,
            mileage,
            value,
        }))
    }
}

/// Renders the record in its input form, so a dumped line decodes back to
/// an equal `Record`.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MNO,{},{},{},{},{}",
            self.element_id, self.vehicle_id, self.term, self.mileage, self.value
        )
    }
}
