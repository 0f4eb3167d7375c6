//! GPIO register model, constants and configuration.
//!
//! This module contains the shared pieces of the hardware abstraction:
//! the three-register bank, the bit-index constants, the TOML
//! configuration types and the `GpioDriver` trait.

pub mod config;
pub mod consts;
pub mod driver;
pub mod registers;
