//! Command vocabulary of the beacon serial protocol
//!
//! A request line starts with a command letter and a mode letter:
//! ```text
//! <CMD><MODE>[':'<hex payload>]CR
//! ```
//! Replies echo the command letter with mode `R`, and errors use the
//! reserved command letter `E`.

// Command letters
pub const CMD_FLASH: u8 = b'F';
pub const CMD_BLANK: u8 = b'B';
pub const CMD_INTERVAL: u8 = b'I';
pub const CMD_SIMULATION: u8 = b'S';
pub const CMD_PATTERN: u8 = b'P';
pub const CMD_HELP: u8 = b'H';
pub const CMD_ERROR: u8 = b'E';

// Mode letters
pub const MODE_READ: u8 = b'R';
pub const MODE_WRITE: u8 = b'W';

// Framing characters
pub const DELIMITER: u8 = b':';
pub const EOL: u8 = b'\r';
pub const NEWLINE: u8 = b'\n';
pub const COMMA: u8 = b',';

/// Request command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Flash,
    Blank,
    Interval,
    Simulation,
    Pattern,
    Help,
    /// Reserved for replies; never valid in a request
    Error,
    /// Any other byte
    Unknown(u8),
}

impl Command {
    /// Parse a command from its wire letter
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            CMD_FLASH => Command::Flash,
            CMD_BLANK => Command::Blank,
            CMD_INTERVAL => Command::Interval,
            CMD_SIMULATION => Command::Simulation,
            CMD_PATTERN => Command::Pattern,
            CMD_HELP => Command::Help,
            CMD_ERROR => Command::Error,
            other => Command::Unknown(other),
        }
    }

    /// Convert to wire letter
    pub fn to_byte(self) -> u8 {
        match self {
            Command::Flash => CMD_FLASH,
            Command::Blank => CMD_BLANK,
            Command::Interval => CMD_INTERVAL,
            Command::Simulation => CMD_SIMULATION,
            Command::Pattern => CMD_PATTERN,
            Command::Help => CMD_HELP,
            Command::Error => CMD_ERROR,
            Command::Unknown(byte) => byte,
        }
    }
}

/// Request mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Read,
    Write,
    /// Any other byte
    Unknown(u8),
}

impl Mode {
    /// Parse a mode from its wire letter
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            MODE_READ => Mode::Read,
            MODE_WRITE => Mode::Write,
            other => Mode::Unknown(other),
        }
    }
}

/// Request rejections, one per `E:` token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// Second byte is neither `R` nor `W`
    Mode,
    /// First byte is not a request command
    Command,
    /// Expected `:` missing
    Delimiter,
    /// Non-hex character in a hex field
    Value,
    /// Decoded value outside the parameter's range
    Limit,
    /// Pattern index is not a hex digit
    Index,
    /// Pattern value not followed by `,`
    Comma,
}

impl ProtocolError {
    /// ASCII token sent after `E:`
    pub fn token(self) -> &'static [u8] {
        match self {
            ProtocolError::Mode => b"mode",
            ProtocolError::Command => b"command",
            ProtocolError::Delimiter => b"delimiter",
            ProtocolError::Value => b"value",
            ProtocolError::Limit => b"limit",
            ProtocolError::Index => b"index",
            ProtocolError::Comma => b"comma",
        }
    }
}

impl From<crate::hex::HexError> for ProtocolError {
    fn from(_: crate::hex::HexError) -> Self {
        ProtocolError::Value
    }
}
