//! # Blink HAL Library
//!
//! GPIO polling core with pluggable driver architecture.
//!
//! This crate provides the blink_hal binary and driver modules for GPIO
//! access. Drivers implement the `GpioDriver` trait defined in
//! `blink_common::gpio::driver`.
//!
//! # Module Structure
//!
//! - [`core`] - GpioCore struct, polling loop management
//! - [`driver_registry`] - Driver factory registration
//! - [`drivers`] - GPIO driver implementations
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  blink_hal (single crate)                  │
//! │  ┌──────────────┐    ┌──────────────┐    ┌──────────────┐  │
//! │  │  CLI / main  │───►│  GpioCore    │◄──►│  Driver      │  │
//! │  │              │    │  (poll loop) │    │  Registry    │  │
//! │  └──────────────┘    └──────┬───────┘    └──────────────┘  │
//! │                             │                              │
//! │                             ▼                              │
//! │                    ┌────────────────┐                      │
//! │                    │  GpioDriver    │ (trait object)       │
//! │                    │  trait         │                      │
//! │                    └────────────────┘                      │
//! └────────────────────────────────────────────────────────────┘
//! ```

#![deny(warnings)]
#![deny(missing_docs)]

pub mod core;
pub mod driver_registry;
pub mod drivers;

// Re-export key types for convenience
pub use crate::core::{Delay, GpioCore, ThreadDelay};
pub use crate::driver_registry::DriverRegistry;
