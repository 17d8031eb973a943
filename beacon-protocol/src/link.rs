//! Serial pump
//!
//! Moves bytes between a UART and an engine. Transport errors go back to
//! the caller; the engine only ever sees bytes that actually arrived.

use beacon_core::ParameterStore;
use beacon_hal::{UartRx, UartTx};

use crate::engine::ProtocolEngine;

/// Bytes moved per UART call
pub const CHUNK_SIZE: usize = 16;

/// Feed whatever the receiver has pending into the engine
///
/// Returns the number of bytes consumed.
pub fn feed_from<R, S, const N: usize, const C: usize>(
    rx: &mut R,
    engine: &mut ProtocolEngine<S, N, C>,
) -> Result<usize, R::Error>
where
    R: UartRx + ?Sized,
    S: ParameterStore,
{
    let mut buf = [0u8; CHUNK_SIZE];
    let n = rx.read_available(&mut buf)?.min(CHUNK_SIZE);
    engine.on_bytes(&buf[..n]);
    Ok(n)
}

/// Send everything queued in the engine's output channel
///
/// Bytes already taken from the engine when a write fails are lost, the same
/// as a reply dropped for lack of space.
pub fn drain_to<T, S, const N: usize, const C: usize>(
    tx: &mut T,
    engine: &mut ProtocolEngine<S, N, C>,
) -> Result<usize, T::Error>
where
    T: UartTx + ?Sized,
{
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut sent = 0;
    loop {
        let mut n = 0;
        while n < CHUNK_SIZE {
            match engine.pop_byte() {
                Some(byte) => {
                    chunk[n] = byte;
                    n += 1;
                }
                None => break,
            }
        }
        if n == 0 {
            break;
        }
        tx.write_blocking(&chunk[..n])?;
        sent += n;
    }
    if sent > 0 {
        tx.flush()?;
    }
    Ok(sent)
}
