//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: logging macros that write to the browser console on WASM
//!   and to `tracing` everywhere else
//! - **serialization**: serde helpers for `U256` amounts and hex quantities

pub mod console_macros;
pub mod serialization;

pub use serialization::*;
