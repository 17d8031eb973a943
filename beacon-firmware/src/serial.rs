//! Adapters between the Embassy USART driver and the serial pump
//!
//! The USART is async while the pump is not. Received bursts are replayed
//! to the pump through [`RxBurst`], and pending output is staged in
//! [`TxStaging`] so the engine lock is released before the DMA write.

use core::convert::Infallible;

use embassy_stm32::usart;
use heapless::Vec;

use beacon_hal::{DataBits, Parity, StopBits, UartConfig, UartRx, UartTx};
use beacon_protocol::OUTPUT_CAPACITY;

/// Translate a link configuration to the STM32 driver's
pub fn usart_config(config: &UartConfig) -> usart::Config {
    let mut usart_config = usart::Config::default();
    usart_config.baudrate = config.baudrate;
    usart_config.data_bits = match config.data_bits {
        DataBits::Seven => usart::DataBits::DataBits7,
        DataBits::Eight => usart::DataBits::DataBits8,
        DataBits::Nine => usart::DataBits::DataBits9,
    };
    usart_config.parity = match config.parity {
        Parity::None => usart::Parity::ParityNone,
        Parity::Even => usart::Parity::ParityEven,
        Parity::Odd => usart::Parity::ParityOdd,
    };
    usart_config.stop_bits = match config.stop_bits {
        StopBits::One => usart::StopBits::STOP1,
        StopBits::Two => usart::StopBits::STOP2,
    };
    usart_config
}

/// Bytes already received by DMA, read back in order
pub struct RxBurst<'a> {
    bytes: &'a [u8],
}

impl<'a> RxBurst<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl UartRx for RxBurst<'_> {
    type Error = Infallible;

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        let n = buf.len().min(self.bytes.len());
        let (head, tail) = self.bytes.split_at(n);
        buf[..n].copy_from_slice(head);
        self.bytes = tail;
        Ok(n)
    }
}

/// Staging area overflowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct StagingFull;

/// Output drained from the engine, waiting for the USART
pub struct TxStaging {
    bytes: Vec<u8, OUTPUT_CAPACITY>,
}

impl TxStaging {
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl UartTx for TxStaging {
    type Error = StagingFull;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), StagingFull> {
        self.bytes.extend_from_slice(data).map_err(|_| StagingFull)
    }

    fn flush(&mut self) -> Result<(), StagingFull> {
        Ok(())
    }
}
