//! Line accumulator
//!
//! Collects request bytes until the CR terminator. Bytes past the bound are
//! dropped but the terminator is still recognised, so an over-long line is
//! dispatched truncated rather than merged with the next one.

use heapless::Vec;

use crate::command::EOL;

/// Default request line bound in bytes
pub const MAX_LINE_LENGTH: usize = 32;

/// Bounded request line buffer
#[derive(Debug, Clone, Default)]
pub struct LineAccumulator<const N: usize = MAX_LINE_LENGTH> {
    buffer: Vec<u8, N>,
}

impl<const N: usize> LineAccumulator<N> {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Feed one received byte
    ///
    /// When `byte` terminates a line of at least two bytes, `on_line` is
    /// called with the stored line (terminator included if it fit). The
    /// buffer is empty again whenever this returns with a terminator seen.
    ///
    /// Returns true if `on_line` was called.
    pub fn feed<F>(&mut self, byte: u8, on_line: F) -> bool
    where
        F: FnOnce(&[u8]),
    {
        // Saturated: keep scanning for the terminator
        let _ = self.buffer.push(byte);

        if byte != EOL {
            return false;
        }

        let dispatched = if self.buffer.len() < 2 {
            false
        } else {
            on_line(&self.buffer);
            true
        };
        self.buffer.clear();
        dispatched
    }

    /// Bytes currently buffered
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when no partial line is held
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
