//! Device parameter store trait

use crate::config::PatternRow;

/// Live device parameters, as seen by the protocol engine
///
/// Setters are infallible: callers validate ranges before writing. The
/// pattern `index` is always in `0..PATTERN_COUNT`; implementations may mask
/// it rather than panic.
pub trait ParameterStore {
    /// Current flash period
    fn flash_period(&self) -> u16;

    /// Set the flash period
    fn set_flash_period(&mut self, period: u16);

    /// Current blank period
    fn blank_period(&self) -> u16;

    /// Set the blank period
    fn set_blank_period(&mut self, period: u16);

    /// Current interval period
    fn interval_period(&self) -> u16;

    /// Set the interval period
    fn set_interval_period(&mut self, period: u16);

    /// Current simulation period
    fn simulation_period(&self) -> u8;

    /// Set the simulation period
    fn set_simulation_period(&mut self, period: u8);

    /// Brightness row stored for a pattern index
    fn pattern_row(&self, index: u8) -> PatternRow;

    /// Replace the brightness row for a pattern index
    fn set_pattern_row(&mut self, index: u8, row: &PatternRow);

    /// Make a freshly written row live
    ///
    /// Called once after [`set_pattern_row`](Self::set_pattern_row) so the
    /// strobe driver can rebuild whatever it derives from the row.
    fn commit_pattern_row(&mut self, _index: u8) {}
}

impl<T: ParameterStore + ?Sized> ParameterStore for &mut T {
    fn flash_period(&self) -> u16 {
        (**self).flash_period()
    }

    fn set_flash_period(&mut self, period: u16) {
        (**self).set_flash_period(period)
    }

    fn blank_period(&self) -> u16 {
        (**self).blank_period()
    }

    fn set_blank_period(&mut self, period: u16) {
        (**self).set_blank_period(period)
    }

    fn interval_period(&self) -> u16 {
        (**self).interval_period()
    }

    fn set_interval_period(&mut self, period: u16) {
        (**self).set_interval_period(period)
    }

    fn simulation_period(&self) -> u8 {
        (**self).simulation_period()
    }

    fn set_simulation_period(&mut self, period: u8) {
        (**self).set_simulation_period(period)
    }

    fn pattern_row(&self, index: u8) -> PatternRow {
        (**self).pattern_row(index)
    }

    fn set_pattern_row(&mut self, index: u8, row: &PatternRow) {
        (**self).set_pattern_row(index, row)
    }

    fn commit_pattern_row(&mut self, index: u8) {
        (**self).commit_pattern_row(index)
    }
}
