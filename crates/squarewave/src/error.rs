//! Error types shared by the solver, reader and generator.

use core::fmt;

use thiserror::Error;

/// Input quantity named in range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Desired output frequency in Hz.
    Frequency,
    /// Desired output period in microseconds.
    Period,
    /// Prescaler ordinal (clock-select bits).
    PrescalerOrdinal,
    /// Content of the output compare register.
    CompareValue,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency => write!(f, "frequency"),
            Self::Period => write!(f, "period"),
            Self::PrescalerOrdinal => write!(f, "prescaler ordinal"),
            Self::CompareValue => write!(f, "compare value"),
        }
    }
}

/// Errors reported by register computations.
///
/// None of them is fatal: the failing call leaves every stored configuration
/// untouched and can simply be re-issued with a valid value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    #[error("{quantity} {value} out of range, allowed: {min} .. {max}")]
    OutOfRange {
        quantity: Quantity,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("prescaler ordinal {0} has no divisor, allowed: 1 .. 5")]
    InvalidPrescaler(u8),
}

impl TimerError {
    /// Checks `value` against the inclusive range `min..=max`.
    pub(crate) fn check_range(quantity: Quantity, value: u32, min: u32, max: u32) -> TimerResult<u32> {
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(Self::OutOfRange {
                quantity,
                value,
                min,
                max,
            })
        }
    }
}

/// Result type for timer register operations.
pub type TimerResult<T> = Result<T, TimerError>;
