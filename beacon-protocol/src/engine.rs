//! Protocol engine
//!
//! One engine per serial link. It owns the request line and the output
//! channel and is handed the parameter store; there is no global state.
//!
//! The engine is either awaiting bytes of a line or, for the duration of a
//! single [`on_byte`](ProtocolEngine::on_byte) call, dispatching one. The
//! `&mut self` receiver keeps the two from overlapping.

use beacon_core::ParameterStore;

use crate::dispatch::dispatch;
use crate::handlers::send_error;
use crate::line::{LineAccumulator, MAX_LINE_LENGTH};
use crate::output::{OutputRing, OUTPUT_CAPACITY};

/// Line parser, dispatcher and output channel for one link
///
/// `N` bounds the request line, `C` is the output capacity.
#[derive(Debug, Clone)]
pub struct ProtocolEngine<S, const N: usize = MAX_LINE_LENGTH, const C: usize = OUTPUT_CAPACITY> {
    line: LineAccumulator<N>,
    output: OutputRing<C>,
    store: S,
}

impl<S, const N: usize, const C: usize> ProtocolEngine<S, N, C> {
    /// Create an engine driving `store`
    pub const fn new(store: S) -> Self {
        Self {
            line: LineAccumulator::new(),
            output: OutputRing::new(),
            store,
        }
    }

    /// True when output is waiting for the transmitter
    pub fn is_ready_to_send(&self) -> bool {
        self.output.is_ready_to_send()
    }

    /// Next byte for the transmitter, oldest first
    pub fn pop_byte(&mut self) -> Option<u8> {
        self.output.pop_byte()
    }

    /// Bytes waiting in the output channel
    pub fn pending_output(&self) -> usize {
        self.output.len()
    }

    /// Free space in the output channel
    pub fn space_available(&self) -> usize {
        self.output.space_available()
    }

    /// Bytes of the current, unterminated request
    pub fn pending_input(&self) -> usize {
        self.line.len()
    }

    /// Parameter store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parameter store, mutably
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give the store back
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: ParameterStore, const N: usize, const C: usize> ProtocolEngine<S, N, C> {
    /// Process one received byte
    ///
    /// The byte is echoed, buffered, and on CR the line is dispatched. Every
    /// malformed line yields one `E:` reply if the output has room.
    pub fn on_byte(&mut self, byte: u8) {
        // Echo is best effort; a full channel drops it
        self.output.push_byte(byte);

        let store = &mut self.store;
        let output = &mut self.output;
        self.line.feed(byte, |line| {
            #[cfg(feature = "defmt")]
            defmt::trace!("dispatch {=[u8]:a}", line);
            if let Err(error) = dispatch(line, store, output) {
                #[cfg(feature = "defmt")]
                defmt::debug!("request rejected: {:?}", error);
                send_error(error, output);
            }
        });
    }

    /// Process received bytes in order
    pub fn on_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.on_byte(byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_core::DeviceParams;

    #[test]
    fn test_echo_without_terminator() {
        let mut engine: ProtocolEngine<DeviceParams> = ProtocolEngine::new(DeviceParams::new());
        engine.on_bytes(b"FR");
        assert_eq!(engine.pending_output(), 2);
        assert_eq!(engine.pending_input(), 2);
        assert_eq!(engine.pop_byte(), Some(b'F'));
        assert_eq!(engine.pop_byte(), Some(b'R'));
        assert!(!engine.is_ready_to_send());
    }

    #[test]
    fn test_engine_borrows_store() {
        let mut params = DeviceParams::new();
        {
            let mut engine: ProtocolEngine<&mut DeviceParams> = ProtocolEngine::new(&mut params);
            engine.on_bytes(b"IW:01F4\r");
        }
        assert_eq!(params.interval_period(), 500);
    }

    #[test]
    fn test_full_output_drops_echo_and_reply() {
        let mut engine: ProtocolEngine<DeviceParams, 32, 4> =
            ProtocolEngine::new(DeviceParams::new());
        engine.on_bytes(b"FW:00C8\r");
        // Only the first four echoed bytes fit; the write still applied
        assert_eq!(engine.pending_output(), 4);
        assert_eq!(engine.store().flash_period(), 200);
        assert_eq!(engine.pending_input(), 0);
    }
}
