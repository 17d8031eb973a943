//! Command handlers
//!
//! Write handlers validate the whole request before touching the store and
//! then answer with the matching read reply. Read handlers queue their reply
//! only if it fits; a short output channel means the reply is skipped and
//! the host is expected to ask again.
//!
//! Field offsets within a request line:
//! ```text
//! FW:0064      0 cmd, 1 mode, 2 ':', 3..7 hex
//! SW:64        0 cmd, 1 mode, 2 ':', 3..5 hex
//! PW:A:00,..   0 cmd, 1 mode, 2 ':', 3 index, 4 ':', 5.. "vv," per LED byte
//! ```

use beacon_core::config::{period_in_range, simulation_in_range};
use beacon_core::{Parameter, ParameterStore, PatternRow, LED_LINE_LENGTH};

use crate::command::{Command, ProtocolError, COMMA, DELIMITER};
use crate::hex;
use crate::output::{emit, OutputRing};
use crate::reply::{Reply, MAX_REPLY_LEN};

/// Offset of the first payload byte after `<CMD><MODE>:`
const PAYLOAD_START: usize = 3;

/// Offset of the pattern index digit
const PATTERN_INDEX_AT: usize = 3;

/// Offset of the `:` after the pattern index
const PATTERN_ROW_DELIMITER_AT: usize = 4;

/// Offset of the first pattern value
const PATTERN_ROW_START: usize = 5;

/// Bytes per pattern entry: two hex digits and a comma
const PATTERN_ENTRY_LEN: usize = 3;

/// Usage text sent for `H`
pub const HELP_LINES: [&[u8]; 5] = [
    b"HW: FR/FW-flash period",
    b"HW: BR/BW-blank period",
    b"HW: IR/IW-interval period",
    b"HW: SR/SW-simulation period",
    b"HW: PR/PW-pattern",
];

const _: () = {
    let mut i = 0;
    while i < HELP_LINES.len() {
        assert!(HELP_LINES[i].len() + 2 <= MAX_REPLY_LEN, "help line longer than a reply");
        i += 1;
    }
};

/// Command that reads and writes a timing parameter
pub fn parameter_command(parameter: Parameter) -> Command {
    match parameter {
        Parameter::Flash => Command::Flash,
        Parameter::Blank => Command::Blank,
        Parameter::Interval => Command::Interval,
        Parameter::Simulation => Command::Simulation,
    }
}

/// Reply with the current value of a timing parameter
pub fn read_parameter<S, const C: usize>(parameter: Parameter, store: &S, out: &mut OutputRing<C>)
where
    S: ParameterStore + ?Sized,
{
    let mut reply = Reply::read(parameter_command(parameter));
    match parameter {
        Parameter::Flash => reply.hex_word(store.flash_period()),
        Parameter::Blank => reply.hex_word(store.blank_period()),
        Parameter::Interval => reply.hex_word(store.interval_period()),
        Parameter::Simulation => reply.hex_byte(store.simulation_period()),
    };
    reply.end_line();
    send(out, &reply);
}

/// Validate and apply a timing parameter write, then confirm it
pub fn write_parameter<S, const C: usize>(
    parameter: Parameter,
    line: &[u8],
    store: &mut S,
    out: &mut OutputRing<C>,
) -> Result<(), ProtocolError>
where
    S: ParameterStore + ?Sized,
{
    expect_delimiter(line, 2)?;
    let payload = field(line, PAYLOAD_START);

    match parameter {
        Parameter::Flash => store.set_flash_period(decode_period(payload)?),
        Parameter::Blank => store.set_blank_period(decode_period(payload)?),
        Parameter::Interval => store.set_interval_period(decode_period(payload)?),
        Parameter::Simulation => store.set_simulation_period(decode_simulation(payload)?),
    }

    read_parameter(parameter, &*store, out);
    Ok(())
}

/// Reply with the pattern row named by `<CMD><MODE>:<index>`
pub fn read_pattern<S, const C: usize>(
    line: &[u8],
    store: &S,
    out: &mut OutputRing<C>,
) -> Result<(), ProtocolError>
where
    S: ParameterStore + ?Sized,
{
    expect_delimiter(line, 2)?;
    let index = decode_index(line)?;
    send_pattern(index, store, out);
    Ok(())
}

/// Validate and store a whole pattern row, then confirm it
///
/// The row is decoded completely before the store is touched; a bad entry
/// anywhere leaves the stored row as it was.
pub fn write_pattern<S, const C: usize>(
    line: &[u8],
    store: &mut S,
    out: &mut OutputRing<C>,
) -> Result<(), ProtocolError>
where
    S: ParameterStore + ?Sized,
{
    expect_delimiter(line, 2)?;
    expect_delimiter(line, PATTERN_ROW_DELIMITER_AT)?;
    let index = decode_index(line)?;

    let mut row: PatternRow = [0; LED_LINE_LENGTH];
    for (i, value) in row.iter_mut().enumerate() {
        let at = PATTERN_ROW_START + i * PATTERN_ENTRY_LEN;
        if line.get(at + 2) != Some(&COMMA) {
            return Err(ProtocolError::Comma);
        }
        *value = hex::decode_byte(field(line, at))?;
    }

    store.set_pattern_row(index, &row);
    store.commit_pattern_row(index);

    send_pattern(index, &*store, out);
    Ok(())
}

/// Queue the usage text, one line at a time
pub fn help<const C: usize>(out: &mut OutputRing<C>) {
    for text in HELP_LINES {
        send(out, &Reply::text(text));
    }
}

/// Queue an `E:` line
pub fn send_error<const C: usize>(error: ProtocolError, out: &mut OutputRing<C>) {
    send(out, &Reply::error(error));
}

fn send_pattern<S, const C: usize>(index: u8, store: &S, out: &mut OutputRing<C>)
where
    S: ParameterStore + ?Sized,
{
    let mut reply = Reply::read(Command::Pattern);
    reply.hex_nibble(index).push(DELIMITER);
    for value in store.pattern_row(index) {
        reply.hex_byte(value).push(COMMA);
    }
    reply.end_line();
    send(out, &reply);
}

fn send<const C: usize>(out: &mut OutputRing<C>, reply: &Reply) {
    if !emit(out, reply.as_bytes()) {
        #[cfg(feature = "defmt")]
        defmt::trace!("reply of {} bytes dropped, output full", reply.len());
    }
}

/// Bytes from `start` to the end of the line (empty if past the end)
fn field(line: &[u8], start: usize) -> &[u8] {
    line.get(start..).unwrap_or(&[])
}

fn expect_delimiter(line: &[u8], at: usize) -> Result<(), ProtocolError> {
    match line.get(at) {
        Some(&DELIMITER) => Ok(()),
        _ => Err(ProtocolError::Delimiter),
    }
}

fn decode_index(line: &[u8]) -> Result<u8, ProtocolError> {
    line.get(PATTERN_INDEX_AT)
        .and_then(|&digit| hex::decode_nibble(digit))
        .ok_or(ProtocolError::Index)
}

fn decode_period(payload: &[u8]) -> Result<u16, ProtocolError> {
    let period = hex::decode_word(payload)?;
    if !period_in_range(period) {
        return Err(ProtocolError::Limit);
    }
    Ok(period)
}

fn decode_simulation(payload: &[u8]) -> Result<u8, ProtocolError> {
    let period = hex::decode_byte(payload)?;
    if !simulation_in_range(period) {
        return Err(ProtocolError::Limit);
    }
    Ok(period)
}
