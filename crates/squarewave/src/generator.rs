//! Owner of the active timer configuration.
//!
//! A [`Generator`] holds the single current [`TimerConfig`] and the
//! [`TimerPort`] it is programmed into. Every operation either replaces the
//! configuration and loads it into the port, or fails and leaves both
//! untouched.

use core::fmt;

use log::{info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Quantity, TimerError, TimerResult};
use crate::port::TimerPort;
use crate::prescaler::Prescaler;
use crate::registers::TimerConfig;
use crate::settings::Settings;
use crate::solver;
use crate::MAX_COMPARE;

/// How an entered value is interpreted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// Values are frequencies in Hz.
    #[default]
    Frequency,
    /// Values are periods in microseconds.
    Period,
}

impl InputMode {
    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Frequency => Self::Period,
            Self::Period => Self::Frequency,
        }
    }

    /// Solves `value` as a frequency or a period, depending on the mode.
    pub fn solve(self, value: u32) -> TimerResult<TimerConfig> {
        match self {
            Self::Frequency => solver::solve_from_frequency(value),
            Self::Period => solver::solve_from_period_micros(value),
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency => write!(f, "FREQUENCY"),
            Self::Period => write!(f, "PERIOD"),
        }
    }
}

/// Start-up configuration of a [`Generator`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub name: &'static str,
    pub input_mode: InputMode,
    /// Frequency or period, per `input_mode`, programmed at start-up.
    pub initial_value: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: "Timer1",
            input_mode: InputMode::Frequency,
            initial_value: 1000,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new generator configuration builder.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }
}

/// Builder for ergonomic generator configuration construction.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Sets the name used in log output.
    pub fn name(mut self, name: &'static str) -> Self {
        self.config.name = name;
        self
    }

    /// Sets how entered values are interpreted.
    pub fn input_mode(mut self, mode: InputMode) -> Self {
        self.config.input_mode = mode;
        self
    }

    /// Sets the frequency or period programmed at start-up.
    pub fn initial_value(mut self, value: u32) -> Self {
        self.config.initial_value = value;
        self
    }

    /// Builds the generator configuration.
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

/// Square-wave generator driving one timer through a [`TimerPort`].
pub struct Generator<P: TimerPort> {
    name: &'static str,
    config: TimerConfig,
    mode: InputMode,
    port: P,
}

impl<P: TimerPort> Generator<P> {
    /// Solves the start-up value and programs it into `port`.
    ///
    /// Fails, without touching the port, when the start-up value is out of
    /// range for its input mode.
    pub fn new(settings: GeneratorConfig, port: P) -> TimerResult<Self> {
        let config = settings.input_mode.solve(settings.initial_value)?;
        let mut generator = Self {
            name: settings.name,
            config,
            mode: settings.input_mode,
            port,
        };
        generator.commit(config);
        Ok(generator)
    }

    /// Programs the wave closest to `freq_hz`.
    pub fn apply_frequency(&mut self, freq_hz: u32) -> TimerResult<TimerConfig> {
        let config = solver::solve_from_frequency(freq_hz).inspect_err(|err| self.reject(err))?;
        Ok(self.commit(config))
    }

    /// Programs the wave closest to `period_us` microseconds.
    pub fn apply_period(&mut self, period_us: u32) -> TimerResult<TimerConfig> {
        let config =
            solver::solve_from_period_micros(period_us).inspect_err(|err| self.reject(err))?;
        Ok(self.commit(config))
    }

    /// Programs `value` as a frequency or a period, depending on the input mode.
    pub fn apply_value(&mut self, value: u32) -> TimerResult<TimerConfig> {
        match self.mode {
            InputMode::Frequency => self.apply_frequency(value),
            InputMode::Period => self.apply_period(value),
        }
    }

    /// Replaces the prescaler, keeping the compare value.
    ///
    /// `ordinal` is the clock-select value 1..=5 (1, 8, 64, 256, 1024).
    pub fn set_prescaler_ordinal(&mut self, ordinal: u32) -> TimerResult<TimerConfig> {
        let min = u32::from(Prescaler::Div1.ordinal());
        let max = u32::from(Prescaler::Div1024.ordinal());
        let ordinal = TimerError::check_range(Quantity::PrescalerOrdinal, ordinal, min, max)
            .inspect_err(|err| self.reject(err))?;
        let prescaler = Prescaler::try_from(ordinal as u8)?;
        Ok(self.commit(self.config.with_prescaler(prescaler)))
    }

    /// Replaces the compare value, keeping the prescaler.
    pub fn set_compare_value(&mut self, value: u32) -> TimerResult<TimerConfig> {
        let value =
            TimerError::check_range(Quantity::CompareValue, value, 0, u32::from(MAX_COMPARE))
                .inspect_err(|err| self.reject(err))?;
        Ok(self.commit(self.config.with_compare(value as u16)))
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        info!("{}: input mode set to {mode}", self.name);
    }

    /// Switches between frequency and period input, returning the new mode.
    pub fn toggle_input_mode(&mut self) -> InputMode {
        self.set_input_mode(self.mode.toggled());
        self.mode
    }

    pub fn config(&self) -> TimerConfig {
        self.config
    }

    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    /// Effective frequency and period of the current configuration.
    pub fn settings(&self) -> Settings {
        Settings::from(self.config)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Releases the port.
    pub fn into_port(self) -> P {
        self.port
    }
}

impl<P: TimerPort> Generator<P> {
    fn commit(&mut self, config: TimerConfig) -> TimerConfig {
        self.config = config;
        self.port.load(config.registers());
        info!("{}: {}", self.name, Settings::from(config));
        config
    }

    fn reject(&self, err: &TimerError) {
        warn!("{}: {err}", self.name);
    }
}
