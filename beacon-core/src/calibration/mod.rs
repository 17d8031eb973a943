//! Calibration tables
//!
//! Static lookup tables produced offline for a given hardware revision and
//! compiled into the firmware. Nothing here is touched at protocol runtime.

pub mod beacons;

pub use beacons::{
    enable_mask, target0_beacon_bit, target1_beacon_bit, HDK2_DISABLED_TARGET0,
    HDK2_DISABLED_TARGET1, HDK2_ENABLE_MASK, TARGET0_BEACON_ORDER, TARGET1_BEACON_ORDER,
};
