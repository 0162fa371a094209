#![warn(clippy::pedantic)]

pub mod cursor;
pub mod decimal;
pub mod error;
pub mod integer;

pub use cursor::Cursor;
pub use decimal::{ScaledDecimal, Sign, parse_decimal};
pub use error::FormatError;
pub use integer::parse_int;
