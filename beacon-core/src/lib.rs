//! Board-agnostic device state for the LED beacon target
//!
//! This crate holds everything the protocol engine reads and writes but does
//! not own:
//!
//! - The parameter store trait the engine is handed
//! - An in-memory store used by the firmware and by host tests
//! - Period limits and boot defaults
//! - Calibration tables (beacon order, LED enable mask)

#![no_std]
#![deny(unsafe_code)]

pub mod calibration;
pub mod config;
pub mod params;
pub mod traits;

pub use config::{
    DeviceConfig, Parameter, ParamError, PatternRow, LED_LINE_LENGTH, NUM_LEDS, PATTERN_COUNT,
};
pub use params::DeviceParams;
pub use traits::ParameterStore;
