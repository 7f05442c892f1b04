//! Frequency and period to register configuration.
//!
//! Both entry points pick a prescaler from the fixed ladders in
//! [`crate::prescaler`] and then derive the compare value for it:
//!
//! ```text
//! compare = round(BASE_CLOCK / divisor / f) - 1      (frequency, rounded)
//! compare = T_us * 8 / divisor - 1                   (period, truncated)
//! ```
//!
//! The period path stays in integer arithmetic and truncates, so it can land
//! one tick below the frequency path for the same wave. Both behaviours are
//! observable and kept as they are.

use log::debug;

use crate::error::{Quantity, TimerError, TimerResult};
use crate::prescaler::Prescaler;
use crate::registers::TimerConfig;
use crate::{BASE_CLOCK_HZ, MAX_COMPARE, MAX_INPUT, MIN_INPUT, TICKS_PER_MICROSECOND};

/// Solves the register configuration for a wave of `freq_hz`.
///
/// Fails with [`TimerError::OutOfRange`] outside `1..=8_000_000` Hz.
pub fn solve_from_frequency(freq_hz: u32) -> TimerResult<TimerConfig> {
    let freq_hz = TimerError::check_range(Quantity::Frequency, freq_hz, MIN_INPUT, MAX_INPUT)?;
    let freq_hz = f64::from(freq_hz);

    let prescaler = Prescaler::for_frequency(freq_hz);
    let compare = frequency_compare(freq_hz, prescaler).unwrap_or(MAX_COMPARE);
    debug!("{freq_hz} Hz -> prescaler {prescaler}, compare {compare}");

    Ok(TimerConfig::new(prescaler, compare))
}

/// Solves the register configuration for a wave of `period_us` microseconds.
///
/// Fails with [`TimerError::OutOfRange`] outside `1..=8_000_000` us.
pub fn solve_from_period_micros(period_us: u32) -> TimerResult<TimerConfig> {
    let period_us = TimerError::check_range(Quantity::Period, period_us, MIN_INPUT, MAX_INPUT)?;

    let prescaler = Prescaler::for_period(period_us);
    let compare = period_compare(period_us, prescaler).unwrap_or(MAX_COMPARE);
    debug!("{period_us} us -> prescaler {prescaler}, compare {compare}");

    Ok(TimerConfig::new(prescaler, compare))
}

/// Rounded compare value for `freq_hz` under `prescaler`.
///
/// Returns `None` when the value does not fit the 16-bit compare register,
/// which is the criterion the frequency ladder was derived from.
pub fn frequency_compare(freq_hz: f64, prescaler: Prescaler) -> Option<u16> {
    let ticks = (f64::from(BASE_CLOCK_HZ) / f64::from(prescaler.divisor()) / freq_hz).round();
    let compare = ticks - 1.0;
    if (0.0..=f64::from(MAX_COMPARE)).contains(&compare) {
        Some(compare as u16)
    } else {
        None
    }
}

/// Truncated compare value for `period_us` under `prescaler`.
///
/// Returns `None` when the value does not fit the 16-bit compare register or
/// the period is shorter than one tick.
pub fn period_compare(period_us: u32, prescaler: Prescaler) -> Option<u16> {
    let ticks = period_us.checked_mul(TICKS_PER_MICROSECOND)? / prescaler.divisor();
    ticks.checked_sub(1).and_then(|compare| u16::try_from(compare).ok())
}
