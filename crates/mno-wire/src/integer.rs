use crate::cursor::Cursor;
use crate::error::FormatError;

/// Maximum number of digits in an integer field.
///
/// Nine digits always fit an `i32` (999 999 999 < 2 147 483 647), so the
/// accumulator can never overflow.
pub const MAX_INT_DIGITS: usize = 9;

/// Returns `true` for the bytes that end a field.
pub(crate) fn is_terminator(byte: u8) -> bool {
    matches!(byte, b',' | b'\r' | b'\n')
}

/// Decode a signed integer field starting at the cursor.
///
/// Accepted form: an optional `-`, then 1 to [`MAX_INT_DIGITS`] ASCII
/// digits. The field ends at `,`, `\r`, `\n` or the end of the slice. A
/// terminator byte is consumed, leaving the cursor at the start of the
/// next field.
///
/// | Input        | Result                    |
/// |--------------|---------------------------|
/// | `42,`        | `Ok(42)`                  |
/// | `-7`         | `Ok(-7)`                  |
/// | `,`          | `Err(MissingDigits)`      |
/// | `1234567890` | `Err(TooManyDigits)`      |
/// | `3a,`        | `Err(UnexpectedByte)`     |
///
/// # Errors
///
/// - [`FormatError::MissingDigits`] if no digit precedes the terminator.
/// - [`FormatError::TooManyDigits`] on a tenth digit.
/// - [`FormatError::UnexpectedByte`] on any other byte.
pub fn parse_int(cursor: &mut Cursor<'_>) -> Result<i32, FormatError> {
    let negative = cursor.eat(b'-');
    let digits_start = cursor.position();
    let mut result: i32 = 0;
    let mut digits = 0;

    while let Some(byte) = cursor.peek() {
        if byte.is_ascii_digit() {
            if digits == MAX_INT_DIGITS {
                return Err(FormatError::TooManyDigits {
                    max: MAX_INT_DIGITS,
                    offset: digits_start,
                });
            }
            result = result * 10 + i32::from(byte - b'0');
            digits += 1;
            cursor.advance();
            continue;
        }

        if is_terminator(byte) {
            cursor.advance();
            break;
        }

        return Err(FormatError::UnexpectedByte {
            byte,
            offset: cursor.position(),
        });
    }

    if digits == 0 {
        return Err(FormatError::MissingDigits {
            offset: digits_start,
        });
    }

    Ok(if negative { -result } else { result })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &[u8]) -> Result<(i32, usize), FormatError> {
        let mut cursor = Cursor::new(input);
        let value = parse_int(&mut cursor)?;
        Ok((value, cursor.position()))
    }

    #[test]
    fn parses_single_digit() {
        assert_eq!(parse(b"7"), Ok((7, 1)));
    }

    #[test]
    fn consumes_comma_terminator() {
        // Cursor lands on the first byte of the next field
        assert_eq!(parse(b"123,456"), Ok((123, 4)));
    }

    #[test]
    fn consumes_line_terminators() {
        assert_eq!(parse(b"5\r\n"), Ok((5, 2)));
        assert_eq!(parse(b"5\n"), Ok((5, 2)));
    }

    #[test]
    fn parses_negative() {
        assert_eq!(parse(b"-981,"), Ok((-981, 5)));
    }

    #[test]
    fn leading_zeros_count_as_digits() {
        assert_eq!(parse(b"000000042"), Ok((42, 9)));
        assert!(matches!(
            parse(b"0000000042"),
            Err(FormatError::TooManyDigits { max: 9, .. })
        ));
    }

    #[test]
    fn nine_digits_is_the_limit() {
        assert_eq!(parse(b"999999999,"), Ok((999_999_999, 10)));
        assert_eq!(parse(b"-999999999"), Ok((-999_999_999, 10)));
    }

    #[test]
    fn ten_digits_rejected() {
        assert_eq!(
            parse(b"1234567890,"),
            Err(FormatError::TooManyDigits { max: 9, offset: 0 })
        );
    }

    #[test]
    fn empty_field_rejected() {
        assert_eq!(parse(b""), Err(FormatError::MissingDigits { offset: 0 }));
        assert_eq!(parse(b","), Err(FormatError::MissingDigits { offset: 0 }));
    }

    #[test]
    fn lone_minus_rejected() {
        assert_eq!(parse(b"-,"), Err(FormatError::MissingDigits { offset: 1 }));
    }

    #[test]
    fn letter_after_digit_rejected() {
        assert_eq!(
            parse(b"3a,4"),
            Err(FormatError::UnexpectedByte {
                byte: b'a',
                offset: 1
            })
        );
    }

    #[test]
    fn decimal_point_rejected() {
        assert!(matches!(
            parse(b"1.5"),
            Err(FormatError::UnexpectedByte { byte: b'.', .. })
        ));
    }

    #[test]
    fn plus_sign_rejected() {
        assert!(matches!(
            parse(b"+1"),
            Err(FormatError::UnexpectedByte { byte: b'+', offset: 0 })
        ));
    }

    #[test]
    fn does_not_read_past_bound() {
        let line = b"12,34";
        let mut cursor = Cursor::new(&line[..2]);
        assert_eq!(parse_int(&mut cursor), Ok(12));
        assert!(cursor.is_at_end());
    }
}
