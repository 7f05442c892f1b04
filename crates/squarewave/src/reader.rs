//! Register configuration to effective frequency and period.
//!
//! The inverse of [`crate::solver`]: exact in double precision, no search.

use crate::error::TimerResult;
use crate::registers::{RegisterImage, TimerConfig};
use crate::{BASE_CLOCK_HZ, TICKS_PER_MICROSECOND};

/// Frequency of the wave in Hz.
pub fn frequency_of(config: &TimerConfig) -> f64 {
    f64::from(BASE_CLOCK_HZ) / f64::from(config.ticks()) / f64::from(config.prescaler().divisor())
}

/// Period of the wave in microseconds.
pub fn period_of(config: &TimerConfig) -> f64 {
    f64::from(config.ticks()) * f64::from(config.prescaler().divisor())
        / f64::from(TICKS_PER_MICROSECOND)
}

/// Frequency of the wave programmed by a raw register image.
///
/// Fails with [`crate::TimerError::InvalidPrescaler`] when the clock-select
/// bits hold no divisor (stopped timer, external clock).
pub fn frequency_of_registers(image: RegisterImage) -> TimerResult<f64> {
    let config = TimerConfig::try_from(image)?;
    Ok(frequency_of(&config))
}

/// Period of the wave programmed by a raw register image.
///
/// Fails like [`frequency_of_registers`].
pub fn period_of_registers(image: RegisterImage) -> TimerResult<f64> {
    let config = TimerConfig::try_from(image)?;
    Ok(period_of(&config))
}
