//! Beacon Target Firmware
//!
//! Firmware for the LED beacon tracking target (STM32F042K6). A host on
//! USART2 reads and writes the strobe timing and LED patterns through the
//! line-based command protocol.

#![no_std]
#![no_main]

mod channels;
mod serial;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::peripherals::USART2;
use embassy_stm32::usart::{self, Uart};
use {defmt_rtt as _, panic_probe as _};

use beacon_core::{DeviceConfig, DeviceParams, ParameterStore};
use beacon_hal::UartConfig;
use beacon_protocol::ProtocolEngine;

bind_interrupts!(struct Irqs {
    USART2 => usart::InterruptHandler<USART2>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Beacon firmware starting...");

    let p = embassy_stm32::init(Default::default());

    // Boot parameters
    let params = unwrap!(DeviceParams::from_config(&DeviceConfig::default()));
    info!(
        "Periods: flash {} blank {} interval {} simulation {}",
        params.flash_period(),
        params.blank_period(),
        params.interval_period(),
        params.simulation_period()
    );
    channels::install_engine(ProtocolEngine::new(params));

    // Host link (PA2=TX, PA3=RX on F042K6)
    let link = UartConfig::default();
    let uart = unwrap!(Uart::new(
        p.USART2,
        p.PA3, // RX
        p.PA2, // TX
        Irqs,
        p.DMA1_CH4,
        p.DMA1_CH5,
        serial::usart_config(&link),
    ));
    info!("USART2 at {} baud", link.baudrate);

    let (tx, rx) = uart.split();

    // Spawn tasks
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();
    spawner.spawn(tasks::serial_tx_task(tx)).unwrap();
    spawner.spawn(tasks::row_monitor_task()).unwrap();

    info!("All tasks spawned");
}
