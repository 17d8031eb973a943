//! Configuration types
//!
//! Boot defaults and the numeric limits the protocol enforces on writes.

pub mod limits;
pub mod types;

pub use limits::*;
pub use types::*;
