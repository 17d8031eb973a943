//! Row change monitor
//!
//! Logs every driven row the host has committed since the previous pass,
//! once per interval period. The rows stay in the parameter store; this task
//! only reports them.

use defmt::*;
use embassy_time::{Duration, Timer};

use beacon_core::config::PERIOD_MIN;
use beacon_core::{ParameterStore, PATTERN_COUNT};

use crate::channels::with_engine;

/// Row monitor task - reports rows that changed since the last pass
#[embassy_executor::task]
pub async fn row_monitor_task() {
    info!("Row monitor task started");

    loop {
        let interval = with_engine(|engine| {
            let params = engine.store_mut();
            let dirty = params.take_dirty_rows();
            for index in (0..PATTERN_COUNT as u8).filter(|i| dirty & (1 << i) != 0) {
                debug!("Row {} -> {:02X}", index, params.line_row(index));
            }
            params.interval_period()
        })
        .unwrap_or(PERIOD_MIN);

        Timer::after(Duration::from_millis(u64::from(interval))).await;
    }
}
