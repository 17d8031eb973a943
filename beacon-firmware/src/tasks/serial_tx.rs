//! Host UART transmit task
//!
//! Sends echoes and replies queued in the protocol engine.

use defmt::*;
use embassy_stm32::mode::Async;
use embassy_stm32::usart::UartTx;

use beacon_protocol::drain_to;

use crate::channels::{with_engine, TX_PENDING};
use crate::serial::TxStaging;

/// Serial TX task - drains the engine's output channel to the host
#[embassy_executor::task]
pub async fn serial_tx_task(mut tx: UartTx<'static, Async>) {
    info!("Serial TX task started");

    let mut staging = TxStaging::new();

    loop {
        TX_PENDING.wait().await;

        // The RX task may queue more while a write is in flight
        loop {
            staging.clear();
            match with_engine(|engine| drain_to(&mut staging, engine)) {
                Some(Ok(0)) | None => break,
                Some(Ok(n)) => {
                    trace!("TX: {} bytes", n);
                    if let Err(e) = tx.write(staging.as_bytes()).await {
                        warn!("UART write error: {:?}", e);
                    }
                }
                Some(Err(e)) => {
                    warn!("Output staging overflow: {:?}", e);
                    break;
                }
            }
        }
    }
}
