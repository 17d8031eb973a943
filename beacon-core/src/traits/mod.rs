//! Abstraction traits
//!
//! These traits define the interface between the protocol engine and the
//! device-specific parameter storage.

pub mod store;

pub use store::ParameterStore;
