#![warn(clippy::pedantic)]

pub mod record;

pub use mno_wire::{FormatError, ScaledDecimal, Sign};
pub use record::{MNO_TAG, Record};
