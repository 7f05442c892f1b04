//! Clock prescalers and the ladders that pick one for a requested wave.
//!
//! The ladders are fixed lookup tables, not computed at runtime. Each
//! threshold marks where a compare value for the cheaper prescaler would no
//! longer fit into 16 bits, i.e. where `(0xFFFF + 1) * divisor` ticks stop
//! covering one half period.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TimerError;
use crate::BASE_CLOCK_HZ;

/// Clock divisor applied to the base clock before counting.
///
/// The discriminant is the ordinal written to the clock-select bits
/// CS12:CS10. Ordinal 0 stops the timer and has no divisor, ordinals 6 and 7
/// select an external clock source; none of them is a `Prescaler`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Prescaler {
    Div1 = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

/// Lowest frequency in Hz served by each prescaler, highest threshold first.
///
/// Frequencies below the last threshold fall through to [`Prescaler::Div1024`].
pub const FREQUENCY_LADDER: [(f64, Prescaler); 4] = [
    (123.0, Prescaler::Div1),
    (16.0, Prescaler::Div8),
    (2.0, Prescaler::Div64),
    (1.0, Prescaler::Div256),
];

/// Longest period in microseconds served by each prescaler, shortest first.
///
/// Periods above the last threshold fall through to [`Prescaler::Div1024`].
/// The zero entry keeps the undivided clock for a zero period; every real
/// period starts at the 1 us step of [`Prescaler::Div8`].
pub const PERIOD_LADDER: [(u32, Prescaler); 4] = [
    (0, Prescaler::Div1),
    (65_536, Prescaler::Div8),
    (524_288, Prescaler::Div64),
    (2_097_152, Prescaler::Div256),
];

impl Prescaler {
    /// Every prescaler in ascending divisor order.
    pub const ALL: [Self; 5] = [
        Self::Div1,
        Self::Div8,
        Self::Div64,
        Self::Div256,
        Self::Div1024,
    ];

    /// Divisor applied to the base clock.
    pub const fn divisor(self) -> u32 {
        match self {
            Self::Div1 => 1,
            Self::Div8 => 8,
            Self::Div64 => 64,
            Self::Div256 => 256,
            Self::Div1024 => 1024,
        }
    }

    /// Clock-select ordinal (1..=5).
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Duration of one timer tick in nanoseconds.
    pub const fn resolution_ns(self) -> u32 {
        1_000_000_000 / BASE_CLOCK_HZ * self.divisor()
    }

    /// Next larger prescaler, `None` for [`Prescaler::Div1024`].
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Div1 => Some(Self::Div8),
            Self::Div8 => Some(Self::Div64),
            Self::Div64 => Some(Self::Div256),
            Self::Div256 => Some(Self::Div1024),
            Self::Div1024 => None,
        }
    }

    /// Picks the prescaler for a wave of `freq_hz`.
    ///
    /// Takes a float so that fractional frequencies reach the
    /// [`Prescaler::Div1024`] fallback below 1 Hz.
    pub fn for_frequency(freq_hz: f64) -> Self {
        FREQUENCY_LADDER
            .iter()
            .find(|(min_hz, _)| freq_hz >= *min_hz)
            .map_or(Self::Div1024, |&(_, prescaler)| prescaler)
    }

    /// Picks the prescaler for a wave of `period_us` microseconds.
    pub fn for_period(period_us: u32) -> Self {
        PERIOD_LADDER
            .iter()
            .find(|(max_us, _)| period_us <= *max_us)
            .map_or(Self::Div1024, |&(_, prescaler)| prescaler)
    }
}

impl TryFrom<u8> for Prescaler {
    type Error = TimerError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            1 => Ok(Self::Div1),
            2 => Ok(Self::Div8),
            3 => Ok(Self::Div64),
            4 => Ok(Self::Div256),
            5 => Ok(Self::Div1024),
            other => Err(TimerError::InvalidPrescaler(other)),
        }
    }
}

impl From<Prescaler> for u8 {
    #[inline]
    fn from(value: Prescaler) -> Self {
        value.ordinal()
    }
}

impl fmt::Display for Prescaler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.divisor())
    }
}
