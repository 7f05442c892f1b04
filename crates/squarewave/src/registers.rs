//! Timer configuration and its register-level encoding.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TimerError;
use crate::prescaler::Prescaler;

/// Waveform generation bit WGM12 in TCCR1B; selects CTC mode with OCR1A as top.
pub const WGM12: u8 = 1 << 3;

/// Clock-select bits CS12:CS10 in TCCR1B.
pub const CLOCK_SELECT_MASK: u8 = 0b0000_0111;

/// Prescaler and compare value, the pair that fully determines the wave.
///
/// The fields are independent: the direct override path may combine any
/// prescaler with any compare value, even pairs the solver never produces.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerConfig {
    prescaler: Prescaler,
    compare: u16,
}

impl TimerConfig {
    pub const fn new(prescaler: Prescaler, compare: u16) -> Self {
        Self { prescaler, compare }
    }

    pub const fn prescaler(&self) -> Prescaler {
        self.prescaler
    }

    /// Content of the output compare register OCR1A.
    pub const fn compare(&self) -> u16 {
        self.compare
    }

    /// Counter ticks per compare cycle, `compare + 1`.
    pub const fn ticks(&self) -> u32 {
        self.compare as u32 + 1
    }

    pub const fn with_prescaler(self, prescaler: Prescaler) -> Self {
        Self { prescaler, ..self }
    }

    pub const fn with_compare(self, compare: u16) -> Self {
        Self { compare, ..self }
    }

    /// Register image that programs this configuration in CTC mode.
    pub const fn registers(&self) -> RegisterImage {
        RegisterImage {
            tccr1b: WGM12 | self.prescaler.ordinal(),
            ocr1a: self.compare,
        }
    }
}

impl fmt::Display for TimerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PRESC: {}, OCR1A: {:#06X}", self.prescaler, self.compare)
    }
}

/// Raw contents of the timer control register B and the compare register.
///
/// TIMSK1 is not part of the image: compare-match interrupts are never
/// enabled, the output pin is toggled by the hardware itself.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterImage {
    pub tccr1b: u8,
    pub ocr1a: u16,
}

impl RegisterImage {
    pub const fn new(tccr1b: u8, ocr1a: u16) -> Self {
        Self { tccr1b, ocr1a }
    }

    /// Clock-select ordinal held in the low three bits of TCCR1B.
    pub const fn clock_select(&self) -> u8 {
        self.tccr1b & CLOCK_SELECT_MASK
    }

    pub const fn is_ctc(&self) -> bool {
        self.tccr1b & WGM12 != 0
    }

    /// Decoded prescaler; fails for a stopped timer or an external clock.
    pub fn prescaler(&self) -> Result<Prescaler, TimerError> {
        Prescaler::try_from(self.clock_select())
    }
}

impl TryFrom<RegisterImage> for TimerConfig {
    type Error = TimerError;

    fn try_from(image: RegisterImage) -> Result<Self, Self::Error> {
        Ok(Self::new(image.prescaler()?, image.ocr1a))
    }
}

impl From<TimerConfig> for RegisterImage {
    #[inline]
    fn from(config: TimerConfig) -> Self {
        config.registers()
    }
}
