//! Property tests for the output channel, hex fields and the engine

use std::collections::VecDeque;

use beacon_core::config::{PERIOD_MAX, PERIOD_MIN, SIMULATION_MIN};
use beacon_core::{DeviceParams, ParameterStore};
use beacon_protocol::hex::{decode_byte, decode_word, encode_word};
use beacon_protocol::{emit, HexError, OutputRing, ProtocolEngine, MAX_LINE_LENGTH};
use proptest::prelude::*;

fn hex_digit() -> impl Strategy<Value = u8> {
    prop::sample::select(b"0123456789abcdefABCDEF".to_vec())
}

fn non_hex() -> impl Strategy<Value = u8> {
    any::<u8>().prop_filter("hex digit", |b| !b.is_ascii_hexdigit())
}

proptest! {
    #[test]
    fn prop_ring_is_fifo(ops in prop::collection::vec(prop::option::of(any::<u8>()), 0..200)) {
        let mut ring: OutputRing<16> = OutputRing::new();
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                Some(byte) => {
                    let accepted = ring.push_byte(byte);
                    prop_assert_eq!(accepted, model.len() < 16);
                    if accepted {
                        model.push_back(byte);
                    }
                }
                None => {
                    prop_assert_eq!(ring.pop_byte(), model.pop_front());
                }
            }
            prop_assert_eq!(ring.len(), model.len());
            prop_assert_eq!(ring.space_available(), 16 - model.len());
        }
    }

    #[test]
    fn prop_emit_is_all_or_nothing(
        prefill in 0usize..=16,
        message in prop::collection::vec(any::<u8>(), 0..24),
    ) {
        let mut ring: OutputRing<16> = OutputRing::new();
        for _ in 0..prefill {
            ring.push_byte(b'.');
        }
        let fits = message.len() <= 16 - prefill;
        prop_assert_eq!(emit(&mut ring, &message), fits);
        prop_assert_eq!(ring.len(), if fits { prefill + message.len() } else { prefill });
        if fits {
            let tail: Vec<u8> = std::iter::from_fn(|| ring.pop_byte()).skip(prefill).collect();
            prop_assert_eq!(tail, message);
        }
    }

    #[test]
    fn prop_word_matches_radix_parse(digits in prop::collection::vec(hex_digit(), 4)) {
        let text = std::str::from_utf8(&digits).unwrap();
        let value = decode_word(&digits).unwrap();
        prop_assert_eq!(value, u16::from_str_radix(text, 16).unwrap());
        prop_assert!(encode_word(value).eq_ignore_ascii_case(&digits));
    }

    #[test]
    fn prop_any_non_hex_digit_is_rejected(
        good in hex_digit(),
        bad in non_hex(),
        bad_first in any::<bool>(),
    ) {
        let pair = if bad_first { [bad, good] } else { [good, bad] };
        prop_assert_eq!(decode_byte(&pair), Err(HexError::InvalidDigit));
    }

    #[test]
    fn prop_engine_survives_noise(input in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut engine: ProtocolEngine<DeviceParams> = ProtocolEngine::new(DeviceParams::new());
        for chunk in input.chunks(64) {
            engine.on_bytes(chunk);
            prop_assert!(engine.pending_input() <= MAX_LINE_LENGTH);
            while engine.pop_byte().is_some() {}
        }
        let store = engine.store();
        for period in [store.flash_period(), store.blank_period(), store.interval_period()] {
            prop_assert!((PERIOD_MIN..=PERIOD_MAX).contains(&period));
        }
        prop_assert!(store.simulation_period() >= SIMULATION_MIN);
    }
}
