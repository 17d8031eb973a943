//! Host UART receive task
//!
//! Feeds every received byte to the protocol engine and wakes the
//! transmitter when the engine has something to send.

use defmt::*;
use embassy_stm32::mode::Async;
use embassy_stm32::usart::UartRx;
use embassy_time::{Duration, Timer};

use beacon_protocol::feed_from;

use crate::channels::{with_engine, TX_PENDING};
use crate::serial::RxBurst;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Serial RX task - receives request bytes from the host
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: UartRx<'static, Async>) {
    info!("Serial RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read_until_idle(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                let mut burst = RxBurst::new(&buf[..n]);
                let pending = with_engine(|engine| {
                    loop {
                        match feed_from(&mut burst, engine) {
                            Ok(0) => break,
                            Ok(_) => {}
                            Err(never) => match never {},
                        }
                    }
                    engine.is_ready_to_send()
                });

                match pending {
                    Some(true) => TX_PENDING.signal(()),
                    Some(false) => {}
                    None => warn!("Engine not installed, dropped {} bytes", n),
                }
            }
            Ok(_) => {
                // Idle line, nothing received
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
                Timer::after(Duration::from_millis(10)).await;
            }
        }
    }
}
