//! Beacon ordering and LED enable mask
//!
//! The tracking software numbers beacons from 1 in its own order; the
//! firmware addresses LEDs by bit position. These tables translate between
//! the two.

use crate::config::{PatternRow, LED_LINE_LENGTH, NUM_LEDS};

/// Firmware LED bit for each target 0 beacon, in tracking order
pub const TARGET0_BEACON_ORDER: [u8; 34] = [
    34, 35, 28, 29, 30, 31, 24, 25, 26, 27, 20, 21, 22, 23, 16, 17, 18, 19, 12, 13, 14, 15, 8, 9,
    10, 11, 4, 5, 6, 7, 0, 1, 2, 3,
];

/// Firmware LED bit for each target 1 (rear) beacon, in tracking order
pub const TARGET1_BEACON_ORDER: [u8; 6] = [36, 37, 38, 39, 32, 33];

/// HDK 2 target 0 beacons kept dark (1-based)
///
/// The first six are not populated on this revision; the rest interfere
/// with their neighbours.
pub const HDK2_DISABLED_TARGET0: [u8; 10] = [12, 13, 14, 25, 27, 28, 33, 18, 32, 26];

/// HDK 2 rear beacons that never light (1-based)
pub const HDK2_DISABLED_TARGET1: [u8; 2] = [1, 4];

/// Enable mask for the HDK 2 rig
pub const HDK2_ENABLE_MASK: PatternRow =
    enable_mask(&HDK2_DISABLED_TARGET0, &HDK2_DISABLED_TARGET1);

/// Firmware bit for a 1-based target 0 beacon, if it exists
pub const fn target0_beacon_bit(beacon: u8) -> Option<u8> {
    lookup(&TARGET0_BEACON_ORDER, beacon)
}

/// Firmware bit for a 1-based target 1 beacon, if it exists
pub const fn target1_beacon_bit(beacon: u8) -> Option<u8> {
    lookup(&TARGET1_BEACON_ORDER, beacon)
}

const fn lookup(order: &[u8], beacon: u8) -> Option<u8> {
    if beacon == 0 || beacon as usize > order.len() {
        return None;
    }
    Some(order[beacon as usize - 1])
}

/// Build an enable mask with every LED lit except the listed beacons
///
/// Unknown beacon numbers are ignored.
pub const fn enable_mask(disabled_target0: &[u8], disabled_target1: &[u8]) -> PatternRow {
    let mut mask = [0xFF; LED_LINE_LENGTH];
    let mut i = 0;
    while i < disabled_target0.len() {
        mask = clear_bit(mask, target0_beacon_bit(disabled_target0[i]));
        i += 1;
    }
    let mut i = 0;
    while i < disabled_target1.len() {
        mask = clear_bit(mask, target1_beacon_bit(disabled_target1[i]));
        i += 1;
    }
    mask
}

const fn clear_bit(mut mask: PatternRow, bit: Option<u8>) -> PatternRow {
    if let Some(bit) = bit {
        let bit = bit as usize;
        if bit < NUM_LEDS {
            mask[bit / 8] &= !(1u8 << (bit % 8));
        }
    }
    mask
}
