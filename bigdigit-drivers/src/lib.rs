//! Character LCD driver implementations
//!
//! This crate provides concrete implementations of the
//! [`CharacterLcd`](bigdigit_core::CharacterLcd) trait defined in
//! bigdigit-core:
//!
//! - HD44780 controller in 4-bit mode
//! - Parallel GPIO wiring (RS, EN, D4-D7)
//! - PCF8574 I2C backpack wiring

#![no_std]
#![deny(unsafe_code)]

pub mod hd44780;

pub use hd44780::{DataBus, Hd44780, I2cBus, ParallelBus};
