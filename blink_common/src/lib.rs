//! Blink Common Library
//!
//! This crate provides the shared register model, configuration loading and
//! driver trait for the blink workspace crates.
//!
//! # Module Structure
//!
//! - [`gpio`] - GPIO register model, configuration and driver trait
//!
//! # Usage
//!
//! ```rust
//! use blink_common::gpio::consts::{BUTTON_BIT, LED_BIT};
//! use blink_common::gpio::registers::bit_mask;
//!
//! assert_eq!(bit_mask(LED_BIT), 0b0000_0010);
//! assert_eq!(bit_mask(BUTTON_BIT), 0b0010_0000);
//! ```

#![deny(warnings)]
#![deny(missing_docs)]

pub mod gpio;
