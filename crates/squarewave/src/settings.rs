//! Effective-value report for the current configuration.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prescaler::Prescaler;
use crate::reader;
use crate::registers::TimerConfig;

/// Effective frequency and period together with the register values that
/// produce them.
///
/// Renders as the one-line console report:
///
/// ```
/// use squarewave::{Prescaler, Settings, TimerConfig};
///
/// let settings = Settings::from(TimerConfig::new(Prescaler::Div1, 15999));
/// assert_eq!(
///     settings.to_string(),
///     "500.00 Hz / 2000.00 us, PRESC: 1, OCR1A: 0x3E7F / 15999"
/// );
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub frequency_hz: f64,
    pub period_us: f64,
    pub prescaler: Prescaler,
    pub compare: u16,
}

impl From<TimerConfig> for Settings {
    fn from(config: TimerConfig) -> Self {
        Self {
            frequency_hz: reader::frequency_of(&config),
            period_us: reader::period_of(&config),
            prescaler: config.prescaler(),
            compare: config.compare(),
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} Hz / {:.2} us, PRESC: {}, OCR1A: 0x{:04X} / {}",
            self.frequency_hz, self.period_us, self.prescaler, self.compare, self.compare
        )
    }
}
