use std::fmt;

use crate::cursor::Cursor;
use crate::error::FormatError;
use crate::integer::is_terminator;

/// Maximum number of digits before the decimal point.
pub const MAX_INTEGER_DIGITS: usize = 18;

/// Maximum number of significant digits: integer digits plus the
/// fractional digits up to and including the last non-zero one.
///
/// 19 digits always fit a `u64` mantissa (10^19 - 1 < 2^64).
pub const MAX_SIGNIFICANT_DIGITS: usize = 19;

/// Sign of a [`ScaledDecimal`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

/// A decimal value held as `sign · mantissa / 10^scale`.
///
/// The decoder never stores insignificant trailing fractional zeros, so
/// `12.340` decodes to `mantissa = 1234, scale = 2`. Two values decoded
/// from text therefore compare equal with `==` exactly when their text
/// differs only in trailing zeros.
///
/// Converting to a concrete decimal or float type is left to the
/// consumer; [`Display`](fmt::Display) renders the exact text form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScaledDecimal {
    pub sign: Sign,
    pub mantissa: u64,
    pub scale: u8,
}

impl ScaledDecimal {
    pub fn new(sign: Sign, mantissa: u64, scale: u8) -> Self {
        Self {
            sign,
            mantissa,
            scale,
        }
    }

    pub fn is_negative(self) -> bool {
        self.sign == Sign::Negative
    }

    /// Lossy conversion for aggregate statistics.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        let magnitude = self.mantissa as f64 / 10f64.powi(i32::from(self.scale));
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() && self.mantissa != 0 {
            f.write_str("-")?;
        }

        if self.scale == 0 {
            return write!(f, "{}", self.mantissa);
        }

        // scale never exceeds 19 for decoded values; wider scales only have
        // leading fractional zeros.
        let scale = usize::from(self.scale);
        match 10u64.checked_pow(u32::from(self.scale)) {
            Some(divisor) => write!(
                f,
                "{}.{:0scale$}",
                self.mantissa / divisor,
                self.mantissa % divisor
            ),
            None => write!(f, "0.{:0scale$}", self.mantissa),
        }
    }
}

/// Decode a signed scaled-decimal field starting at the cursor.
///
/// Accepted form: an optional `-`, 1 to [`MAX_INTEGER_DIGITS`] digits,
/// then optionally `.` followed by any number of digits. Only fractional
/// digits up to the last non-zero one are kept:
///
/// | Input     | sign     | mantissa | scale |
/// |-----------|----------|----------|-------|
/// | `12`      | Positive | 12       | 0     |
/// | `12.340`  | Positive | 1234     | 2     |
/// | `-0.5`    | Negative | 5        | 1     |
/// | `7.000`   | Positive | 7        | 0     |
/// | `1.05`    | Positive | 105      | 2     |
/// | `-0.000`  | Positive | 0        | 0     |
///
/// The field ends at `,`, `\r`, `\n` or the end of the slice; a
/// terminator byte is consumed.
///
/// # Errors
///
/// - [`FormatError::MissingDigits`] if the integer part is empty.
/// - [`FormatError::TooManyDigits`] if the integer part exceeds
///   [`MAX_INTEGER_DIGITS`] or the significant digits exceed
///   [`MAX_SIGNIFICANT_DIGITS`].
/// - [`FormatError::UnexpectedByte`] on any byte that is not a digit, the
///   single decimal point, or a terminator.
pub fn parse_decimal(cursor: &mut Cursor<'_>) -> Result<ScaledDecimal, FormatError> {
    let sign = if cursor.eat(b'-') {
        Sign::Negative
    } else {
        Sign::Positive
    };

    let digits_start = cursor.position();
    let mut mantissa: u64 = 0;
    let mut integer_digits = 0;
    let mut has_fraction = false;

    while let Some(byte) = cursor.peek() {
        if byte.is_ascii_digit() {
            if integer_digits == MAX_INTEGER_DIGITS {
                return Err(FormatError::TooManyDigits {
                    max: MAX_INTEGER_DIGITS,
                    offset: digits_start,
                });
            }
            mantissa = mantissa * 10 + u64::from(byte - b'0');
            integer_digits += 1;
            cursor.advance();
            continue;
        }

        if byte == b'.' {
            cursor.advance();
            has_fraction = true;
            break;
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

    if integer_digits == 0 {
        return Err(FormatError::MissingDigits {
            offset: digits_start,
        });
    }

    if !has_fraction {
        return Ok(signed(sign, mantissa, 0));
    }

    // Zeros are held back until a non-zero digit proves them significant.
    let mut kept = 0;
    let mut pending_zeros = 0;

    while let Some(byte) = cursor.peek() {
        if byte == b'0' {
            pending_zeros += 1;
            cursor.advance();
            continue;
        }

        if byte.is_ascii_digit() {
            kept += pending_zeros + 1;
            if integer_digits + kept > MAX_SIGNIFICANT_DIGITS {
                return Err(FormatError::TooManyDigits {
                    max: MAX_SIGNIFICANT_DIGITS,
                    offset: digits_start,
                });
            }
            for _ in 0..pending_zeros {
                mantissa *= 10;
            }
            mantissa = mantissa * 10 + u64::from(byte - b'0');
            pending_zeros = 0;
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

    #[allow(clippy::cast_possible_truncation)]
    let scale = kept as u8;
    Ok(signed(sign, mantissa, scale))
}

/// Zero is always positive, so `-0` and `0` decode to equal values.
fn signed(sign: Sign, mantissa: u64, scale: u8) -> ScaledDecimal {
    let sign = if mantissa == 0 { Sign::Positive } else { sign };
    ScaledDecimal::new(sign, mantissa, scale)
}
