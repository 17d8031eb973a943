//! Parameter limits
//!
//! Inclusive ranges accepted for each timing parameter. The protocol engine
//! rejects writes outside them with a `limit` error; [`DeviceConfig`] values
//! are checked against the same ranges when a store is built.
//!
//! [`DeviceConfig`]: super::DeviceConfig

/// Shortest flash/blank/interval period
pub const PERIOD_MIN: u16 = 10;

/// Longest flash/blank/interval period
pub const PERIOD_MAX: u16 = 10000;

/// Shortest simulation period (no upper bound besides the 8-bit width)
pub const SIMULATION_MIN: u8 = 50;

/// Timing parameters exposed over the command channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parameter {
    Flash,
    Blank,
    Interval,
    Simulation,
}

/// Errors raised when building a store from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamError {
    /// Value outside the parameter's inclusive range
    OutOfRange(Parameter),
}

/// Check a flash, blank or interval period
pub const fn period_in_range(period: u16) -> bool {
    period >= PERIOD_MIN && period <= PERIOD_MAX
}

/// Check a simulation period
pub const fn simulation_in_range(period: u8) -> bool {
    period >= SIMULATION_MIN
}
