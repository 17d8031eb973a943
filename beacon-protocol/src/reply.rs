//! Reply line builder
//!
//! Replies are assembled on the stack and then queued with [`emit`], so a
//! reply either lands in the output channel whole or not at all.
//!
//! [`emit`]: crate::output::emit

use beacon_core::LED_LINE_LENGTH;
use heapless::Vec;

use crate::command::{Command, ProtocolError, DELIMITER, EOL, MODE_READ, NEWLINE};
use crate::hex;

/// Pattern reply length: `PR:i:` then `vv,` per LED byte, then CR LF
pub const PATTERN_REPLY_LEN: usize = 7 + 3 * LED_LINE_LENGTH;

/// Floor covering the fixed-size replies and the help text
const MIN_REPLY_LEN: usize = 32;

/// Longest line the engine ever produces, terminator included
pub const MAX_REPLY_LEN: usize = if PATTERN_REPLY_LEN > MIN_REPLY_LEN {
    PATTERN_REPLY_LEN
} else {
    MIN_REPLY_LEN
};

/// One outgoing line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    buffer: Vec<u8, MAX_REPLY_LEN>,
}

impl Reply {
    /// Start an empty line
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Start a read reply: `<CMD>R:`
    pub fn read(command: Command) -> Self {
        let mut reply = Self::new();
        reply.push(command.to_byte()).push(MODE_READ).push(DELIMITER);
        reply
    }

    /// Complete error line: `E:<token>` CR LF
    pub fn error(error: ProtocolError) -> Self {
        let mut reply = Self::new();
        reply
            .push(Command::Error.to_byte())
            .push(DELIMITER)
            .extend(error.token())
            .end_line();
        reply
    }

    /// Complete text line followed by CR LF
    pub fn text(text: &[u8]) -> Self {
        let mut reply = Self::new();
        reply.extend(text).end_line();
        reply
    }

    /// Append a raw byte
    pub fn push(&mut self, byte: u8) -> &mut Self {
        // Every reply shape fits MAX_REPLY_LEN
        let _ = self.buffer.push(byte);
        self
    }

    /// Append raw bytes
    pub fn extend(&mut self, bytes: &[u8]) -> &mut Self {
        let _ = self.buffer.extend_from_slice(bytes);
        self
    }

    /// Append one hex digit
    pub fn hex_nibble(&mut self, value: u8) -> &mut Self {
        self.push(hex::encode_nibble(value))
    }

    /// Append two hex digits
    pub fn hex_byte(&mut self, value: u8) -> &mut Self {
        self.extend(&hex::encode_byte(value))
    }

    /// Append four hex digits
    pub fn hex_word(&mut self, value: u16) -> &mut Self {
        self.extend(&hex::encode_word(value))
    }

    /// Terminate the line with CR LF
    pub fn end_line(&mut self) -> &mut Self {
        self.push(EOL).push(NEWLINE)
    }

    /// Encoded line
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Encoded length in bytes
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True before anything is appended
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_reply_shape() {
        let mut reply = Reply::read(Command::Flash);
        reply.hex_word(0x0064).end_line();
        assert_eq!(reply.as_bytes(), b"FR:0064\r\n");
        assert_eq!(reply.len(), 9);
    }

    #[test]
    fn test_error_reply_shape() {
        assert_eq!(Reply::error(ProtocolError::Limit).as_bytes(), b"E:limit\r\n");
        assert_eq!(Reply::error(ProtocolError::Delimiter).len(), 4 + 9);
    }

    #[test]
    fn test_full_pattern_reply_keeps_terminator() {
        let mut reply = Reply::read(Command::Pattern);
        reply.hex_nibble(0x0F).push(DELIMITER);
        for _ in 0..LED_LINE_LENGTH {
            reply.hex_byte(0xFF).push(b',');
        }
        reply.end_line();
        assert_eq!(reply.len(), PATTERN_REPLY_LEN);
        assert!(reply.len() <= MAX_REPLY_LEN);
        assert!(reply.as_bytes().ends_with(b",\r\n"));
    }

    #[test]
    fn test_text_reply() {
        assert_eq!(Reply::text(b"hello").as_bytes(), b"hello\r\n");
    }
}
