//! Beacon serial command protocol
//!
//! This crate implements the device side of the line-based ASCII protocol a
//! host uses to configure the LED beacon target: flash, blank, interval and
//! simulation periods, and the per-index LED pattern table.
//!
//! # Protocol Overview
//!
//! Requests and replies are CR-terminated lines; replies add LF:
//! ```text
//! request   <CMD><MODE>[':'<hex payload>] CR
//! reply     <CMD> 'R' ':' <hex payload> CR LF
//! error     'E' ':' <token> CR LF
//! ```
//!
//! | CMD | Parameter  | Payload                      |
//! |-----|------------|------------------------------|
//! | F   | flash      | 4 hex digits                 |
//! | B   | blank      | 4 hex digits                 |
//! | I   | interval   | 4 hex digits                 |
//! | S   | simulation | 2 hex digits                 |
//! | P   | pattern    | `i:v0,v1,v2,v3,v4,`          |
//! | H   | help       | none, five text lines back   |
//!
//! Every received byte is echoed. Replies that do not fit in the output
//! channel are dropped whole.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod dispatch;
pub mod engine;
pub mod handlers;
pub mod hex;
pub mod line;
pub mod link;
pub mod output;
pub mod reply;

pub use command::{Command, Mode, ProtocolError};
pub use dispatch::dispatch;
pub use engine::ProtocolEngine;
pub use hex::HexError;
pub use line::{LineAccumulator, MAX_LINE_LENGTH};
pub use link::{drain_to, feed_from};
pub use output::{emit, OutputRing, OUTPUT_CAPACITY};
pub use reply::Reply;
