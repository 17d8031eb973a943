//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::limits::{period_in_range, simulation_in_range, ParamError, Parameter};
use crate::calibration::HDK2_ENABLE_MASK;

/// Number of LEDs driven by the strobe controller
pub const NUM_LEDS: usize = 40;

/// Bytes per pattern row (one bit per LED)
pub const LED_LINE_LENGTH: usize = NUM_LEDS / 8;

/// Number of pattern rows (4-bit index)
pub const PATTERN_COUNT: usize = 16;

/// One pattern row: bit `n` of byte `b` drives LED `8 * b + n`
pub type PatternRow = [u8; LED_LINE_LENGTH];

/// Device boot configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    /// Flash period
    pub flash_period: u16,
    /// Blank period
    pub blank_period: u16,
    /// Interval period
    pub interval_period: u16,
    /// Simulation period
    pub simulation_period: u8,
    /// Initial pattern table
    pub patterns: [PatternRow; PATTERN_COUNT],
    /// LEDs allowed to light; ANDed into every committed row
    pub enable_mask: PatternRow,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            flash_period: 100,
            blank_period: 100,
            interval_period: 1000,
            simulation_period: 100,
            patterns: [[0; LED_LINE_LENGTH]; PATTERN_COUNT],
            enable_mask: HDK2_ENABLE_MASK,
        }
    }
}

impl DeviceConfig {
    /// Check every period against its limits
    pub fn validate(&self) -> Result<(), ParamError> {
        if !period_in_range(self.flash_period) {
            return Err(ParamError::OutOfRange(Parameter::Flash));
        }
        if !period_in_range(self.blank_period) {
            return Err(ParamError::OutOfRange(Parameter::Blank));
        }
        if !period_in_range(self.interval_period) {
            return Err(ParamError::OutOfRange(Parameter::Interval));
        }
        if !simulation_in_range(self.simulation_period) {
            return Err(ParamError::OutOfRange(Parameter::Simulation));
        }
        Ok(())
    }
}
