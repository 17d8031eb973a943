//! In-memory parameter store
//!
//! Holds the live timing parameters and pattern table. Committed rows are
//! ANDed with the enable mask into a line array that the strobe driver
//! reads; rows touched since the driver last looked are flagged dirty.

use crate::config::{DeviceConfig, ParamError, PatternRow, LED_LINE_LENGTH, PATTERN_COUNT};
use crate::traits::ParameterStore;

/// Mask applied to incoming pattern indices
const INDEX_MASK: u8 = (PATTERN_COUNT - 1) as u8;

/// Live device parameters
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceParams {
    flash_period: u16,
    blank_period: u16,
    interval_period: u16,
    simulation_period: u8,
    /// Rows as written by the host
    patterns: [PatternRow; PATTERN_COUNT],
    /// Rows as driven (pattern AND enable mask)
    line_array: [PatternRow; PATTERN_COUNT],
    enable_mask: PatternRow,
    /// Bit `n` set when row `n` changed since the last `take_dirty_rows`
    dirty_rows: u16,
}

impl Default for DeviceParams {
    fn default() -> Self {
        Self::build(&DeviceConfig::default())
    }
}

impl DeviceParams {
    /// Create a store with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from a boot configuration
    pub fn from_config(config: &DeviceConfig) -> Result<Self, ParamError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &DeviceConfig) -> Self {
        let mut params = Self {
            flash_period: config.flash_period,
            blank_period: config.blank_period,
            interval_period: config.interval_period,
            simulation_period: config.simulation_period,
            patterns: config.patterns,
            line_array: [[0; LED_LINE_LENGTH]; PATTERN_COUNT],
            enable_mask: config.enable_mask,
            dirty_rows: 0,
        };
        for index in 0..PATTERN_COUNT as u8 {
            params.commit_pattern_row(index);
        }
        params
    }

    /// Row as the strobe driver should emit it
    pub fn line_row(&self, index: u8) -> &PatternRow {
        &self.line_array[(index & INDEX_MASK) as usize]
    }

    /// Current LED enable mask
    pub fn enable_mask(&self) -> &PatternRow {
        &self.enable_mask
    }

    /// Collect and clear the set of rows changed since the last call
    pub fn take_dirty_rows(&mut self) -> u16 {
        core::mem::take(&mut self.dirty_rows)
    }
}

impl ParameterStore for DeviceParams {
    fn flash_period(&self) -> u16 {
        self.flash_period
    }

    fn set_flash_period(&mut self, period: u16) {
        self.flash_period = period;
    }

    fn blank_period(&self) -> u16 {
        self.blank_period
    }

    fn set_blank_period(&mut self, period: u16) {
        self.blank_period = period;
    }

    fn interval_period(&self) -> u16 {
        self.interval_period
    }

    fn set_interval_period(&mut self, period: u16) {
        self.interval_period = period;
    }

    fn simulation_period(&self) -> u8 {
        self.simulation_period
    }

    fn set_simulation_period(&mut self, period: u8) {
        self.simulation_period = period;
    }

    fn pattern_row(&self, index: u8) -> PatternRow {
        self.patterns[(index & INDEX_MASK) as usize]
    }

    fn set_pattern_row(&mut self, index: u8, row: &PatternRow) {
        self.patterns[(index & INDEX_MASK) as usize] = *row;
    }

    fn commit_pattern_row(&mut self, index: u8) {
        let index = index & INDEX_MASK;
        let row = &self.patterns[index as usize];
        let line = &mut self.line_array[index as usize];
        for ((out, &value), &mask) in line.iter_mut().zip(row).zip(&self.enable_mask) {
            *out = value & mask;
        }
        self.dirty_rows |= 1 << index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Parameter;

    #[test]
    fn test_new_store_uses_defaults() {
        let params = DeviceParams::new();
        let config = DeviceConfig::default();
        assert_eq!(params.flash_period(), config.flash_period);
        assert_eq!(params.simulation_period(), config.simulation_period);
        assert_eq!(params.enable_mask(), &config.enable_mask);
    }

    #[test]
    fn test_from_config_rejects_out_of_range() {
        let config = DeviceConfig {
            interval_period: 10001,
            ..DeviceConfig::default()
        };
        assert_eq!(
            DeviceParams::from_config(&config),
            Err(ParamError::OutOfRange(Parameter::Interval))
        );
    }

    #[test]
    fn test_all_rows_dirty_after_boot() {
        let mut params = DeviceParams::new();
        assert_eq!(params.take_dirty_rows(), 0xFFFF);
        assert_eq!(params.take_dirty_rows(), 0);
    }

    #[test]
    fn test_set_row_is_not_driven_until_commit() {
        let mut params = DeviceParams::from_config(&DeviceConfig {
            enable_mask: [0xFF; LED_LINE_LENGTH],
            ..DeviceConfig::default()
        })
        .unwrap();
        params.take_dirty_rows();

        let row = [0x01, 0x02, 0x03, 0x04, 0x05];
        params.set_pattern_row(3, &row);
        assert_eq!(params.pattern_row(3), row);
        assert_eq!(params.line_row(3), &[0; LED_LINE_LENGTH]);
        assert_eq!(params.take_dirty_rows(), 0);

        params.commit_pattern_row(3);
        assert_eq!(params.line_row(3), &row);
        assert_eq!(params.take_dirty_rows(), 1 << 3);
    }

    #[test]
    fn test_commit_applies_enable_mask() {
        let mut params = DeviceParams::new();
        params.set_pattern_row(0, &[0xFF; LED_LINE_LENGTH]);
        params.commit_pattern_row(0);
        // Stored row is untouched, driven row is masked
        assert_eq!(params.pattern_row(0), [0xFF; LED_LINE_LENGTH]);
        assert_eq!(params.line_row(0), params.enable_mask());
    }

    #[test]
    fn test_index_is_masked_to_table() {
        let mut params = DeviceParams::new();
        params.set_pattern_row(0x1F, &[0xAA; LED_LINE_LENGTH]);
        assert_eq!(params.pattern_row(0x0F), [0xAA; LED_LINE_LENGTH]);
    }
}
