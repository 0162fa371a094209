/// Errors raised while decoding a numeric field from raw ASCII bytes.
///
/// Every variant carries the byte offset within the line where the
/// problem was detected, so a caller holding the line can point at the
/// exact column.
///
/// ```text
///   FormatError
///   ├── MissingDigits   ← field (or its integer part) has no digits
///   ├── TooManyDigits   ← digit count exceeds the field's bound
///   └── UnexpectedByte  ← byte is neither a digit nor a valid terminator
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The field ended before a single digit was read.
    #[error("expected at least one digit at offset {offset}")]
    MissingDigits { offset: usize },

    /// The field holds more digits than its numeric type allows.
    #[error("more than {max} digits in field starting at offset {offset}")]
    TooManyDigits { max: usize, offset: usize },

    /// A byte that cannot appear in a numeric field.
    #[error("unexpected byte {byte:#04X} at offset {offset}")]
    UnexpectedByte { byte: u8, offset: usize },
}

impl FormatError {
    /// Byte offset within the line at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            Self::MissingDigits { offset }
            | Self::TooManyDigits { offset, .. }
            | Self::UnexpectedByte { offset, .. } => *offset,
        }
    }
}
