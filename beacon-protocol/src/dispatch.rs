//! Command dispatcher
//!
//! Decodes `{command, mode}` from the first two bytes of a line and routes
//! to the matching handler. The mode byte is checked first, so a line that
//! is wrong in both places reports `mode`.

use beacon_core::{Parameter, ParameterStore};

use crate::command::{Command, Mode, ProtocolError};
use crate::handlers;
use crate::output::OutputRing;

/// Run one request line against the store
///
/// `line` holds at least the command and mode bytes. Handlers queue their
/// own replies; a returned error has not been reported yet.
pub fn dispatch<S, const C: usize>(
    line: &[u8],
    store: &mut S,
    out: &mut OutputRing<C>,
) -> Result<(), ProtocolError>
where
    S: ParameterStore + ?Sized,
{
    let (command, mode) = match line {
        [command, mode, ..] => (Command::from_byte(*command), Mode::from_byte(*mode)),
        _ => return Err(ProtocolError::Command),
    };

    match (command, mode) {
        (_, Mode::Unknown(_)) => Err(ProtocolError::Mode),
        (Command::Help, _) => {
            handlers::help(out);
            Ok(())
        }
        (Command::Pattern, Mode::Read) => handlers::read_pattern(line, &*store, out),
        (Command::Pattern, Mode::Write) => handlers::write_pattern(line, store, out),
        (Command::Flash, Mode::Read) => read(Parameter::Flash, &*store, out),
        (Command::Flash, Mode::Write) => {
            handlers::write_parameter(Parameter::Flash, line, store, out)
        }
        (Command::Blank, Mode::Read) => read(Parameter::Blank, &*store, out),
        (Command::Blank, Mode::Write) => {
            handlers::write_parameter(Parameter::Blank, line, store, out)
        }
        (Command::Interval, Mode::Read) => read(Parameter::Interval, &*store, out),
        (Command::Interval, Mode::Write) => {
            handlers::write_parameter(Parameter::Interval, line, store, out)
        }
        (Command::Simulation, Mode::Read) => read(Parameter::Simulation, &*store, out),
        (Command::Simulation, Mode::Write) => {
            handlers::write_parameter(Parameter::Simulation, line, store, out)
        }
        (Command::Error | Command::Unknown(_), _) => Err(ProtocolError::Command),
    }
}

fn read<S, const C: usize>(
    parameter: Parameter,
    store: &S,
    out: &mut OutputRing<C>,
) -> Result<(), ProtocolError>
where
    S: ParameterStore + ?Sized,
{
    handlers::read_parameter(parameter, store, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_core::DeviceParams;

    fn run(line: &[u8]) -> Result<(), ProtocolError> {
        let mut params = DeviceParams::new();
        let mut out = OutputRing::<256>::new();
        dispatch(line, &mut params, &mut out)
    }

    #[test]
    fn test_mode_checked_before_command() {
        assert_eq!(run(b"XX\r"), Err(ProtocolError::Mode));
        assert_eq!(run(b"F\r"), Err(ProtocolError::Mode));
    }

    #[test]
    fn test_unknown_and_reserved_commands() {
        assert_eq!(run(b"XR\r"), Err(ProtocolError::Command));
        assert_eq!(run(b"ER\r"), Err(ProtocolError::Command));
        assert_eq!(run(b"fR\r"), Err(ProtocolError::Command));
    }

    #[test]
    fn test_help_ignores_mode_but_not_bad_mode() {
        assert_eq!(run(b"HR\r"), Ok(()));
        assert_eq!(run(b"HW\r"), Ok(()));
        assert_eq!(run(b"HX\r"), Err(ProtocolError::Mode));
    }

    #[test]
    fn test_routes_to_parameter() {
        let mut params = DeviceParams::new();
        let mut out = OutputRing::<256>::new();
        dispatch(b"BW:00C8\r", &mut params, &mut out).unwrap();
        dispatch(b"SW:FF\r", &mut params, &mut out).unwrap();
        assert_eq!(params.blank_period(), 200);
        assert_eq!(params.simulation_period(), 0xFF);
        assert_eq!(params.flash_period(), DeviceParams::new().flash_period());
    }

    #[test]
    fn test_read_ignores_payload() {
        assert_eq!(run(b"FR:zzzz\r"), Ok(()));
    }

    #[test]
    fn test_too_short_line() {
        assert_eq!(run(b"F"), Err(ProtocolError::Command));
    }
}
