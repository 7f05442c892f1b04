//! # squarewave
//!
//! Register solver for a 16-bit timer running in CTC (clear timer on compare)
//! mode. The timer toggles its output pin every time the counter reaches the
//! compare value, so a prescaler and a compare value fully determine the
//! square wave on the pin.
//!
//! ## Module Overview
//! - [`prescaler`] – Clock divisors and the prescaler selection ladders.
//! - [`registers`] – `TimerConfig` and its TCCR1B/OCR1A register image.
//! - [`solver`]    – Frequency/period → register configuration.
//! - [`reader`]    – Register configuration → effective frequency/period.
//! - [`generator`] – Owner of the current configuration and direct overrides.
//! - [`port`]      – Seam through which register images reach the hardware.
//! - [`settings`]  – Effective-value report with its console rendering.
//!
//! ```
//! use squarewave::{reader, solver, Prescaler};
//!
//! let config = solver::solve_from_frequency(500).unwrap();
//! assert_eq!(config.prescaler(), Prescaler::Div1);
//! assert_eq!(config.compare(), 0x3E7F);
//! assert_eq!(reader::period_of(&config), 2000.0);
//! ```

pub mod error;
pub mod generator;
pub mod port;
pub mod prescaler;
pub mod reader;
pub mod registers;
pub mod settings;
pub mod solver;

pub use error::{Quantity, TimerError, TimerResult};
pub use generator::{Generator, GeneratorConfig, GeneratorConfigBuilder, InputMode};
pub use port::{MemoryPort, TimerPort};
pub use prescaler::Prescaler;
pub use registers::{RegisterImage, TimerConfig};
pub use settings::Settings;

#[cfg(test)]
mod tests;

/// CPU clock of the target board in Hz.
pub const CPU_CLOCK_HZ: u32 = 16_000_000;

/// Frequency feeding the prescaler in Hz.
///
/// The toggle-on-compare output needs two compare matches per period, which
/// halves the CPU clock.
pub const BASE_CLOCK_HZ: u32 = CPU_CLOCK_HZ / 2;

/// Largest value the 16-bit compare register holds.
pub const MAX_COMPARE: u16 = u16::MAX;

/// Smallest frequency (Hz) or period (us) accepted by the solver.
pub const MIN_INPUT: u32 = 1;

/// Largest frequency (Hz) or period (us) accepted by the solver.
pub const MAX_INPUT: u32 = 8_000_000;

/// Base clock ticks per microsecond.
pub(crate) const TICKS_PER_MICROSECOND: u32 = BASE_CLOCK_HZ / 1_000_000;
