//! Output channel
//!
//! Fixed-capacity circular byte queue between reply producers and the
//! transmit path. The cursors never leave this type; everything else goes
//! through the four channel operations.

/// Default output capacity in bytes
pub const OUTPUT_CAPACITY: usize = 256;

/// Circular transmit queue
///
/// `C` must be a power of two so cursors wrap with a mask.
#[derive(Debug, Clone)]
pub struct OutputRing<const C: usize = OUTPUT_CAPACITY> {
    buffer: [u8; C],
    count: usize,
    write: usize,
    read: usize,
}

impl<const C: usize> Default for OutputRing<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const C: usize> OutputRing<C> {
    const MASK: usize = {
        assert!(C.is_power_of_two(), "output capacity must be a power of two");
        C - 1
    };

    /// Create an empty ring
    pub const fn new() -> Self {
        Self {
            buffer: [0; C],
            count: 0,
            write: 0,
            read: 0,
        }
    }

    /// True when at least one byte is waiting to be sent
    pub fn is_ready_to_send(&self) -> bool {
        self.count > 0
    }

    /// Take the oldest queued byte
    pub fn pop_byte(&mut self) -> Option<u8> {
        if self.count == 0 {
            return None;
        }
        let byte = self.buffer[self.read];
        self.read = (self.read + 1) & Self::MASK;
        self.count -= 1;
        Some(byte)
    }

    /// Queue one byte
    ///
    /// Returns false and leaves the ring untouched when it is full. Callers
    /// emitting a multi-byte message check [`space_available`] first; see
    /// [`emit`].
    ///
    /// [`space_available`]: Self::space_available
    pub fn push_byte(&mut self, byte: u8) -> bool {
        if self.count == C {
            return false;
        }
        self.buffer[self.write] = byte;
        self.write = (self.write + 1) & Self::MASK;
        self.count += 1;
        true
    }

    /// Free space in bytes
    pub fn space_available(&self) -> usize {
        C - self.count
    }

    /// Number of queued bytes
    pub fn len(&self) -> usize {
        self.count
    }

    /// True when nothing is queued
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Total capacity in bytes
    pub const fn capacity(&self) -> usize {
        C
    }
}

/// Queue a whole message or nothing
///
/// Returns false, with the ring unchanged, when the message does not fit.
pub fn emit<const C: usize>(out: &mut OutputRing<C>, message: &[u8]) -> bool {
    if out.space_available() < message.len() {
        return false;
    }
    for &byte in message {
        out.push_byte(byte);
    }
    true
}
