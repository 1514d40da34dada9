//! Board-agnostic big number rendering for character LCDs
//!
//! This crate contains everything that does not depend on a specific
//! LCD controller or bus:
//!
//! - Big number fonts (glyph bitmaps plus cell layouts)
//! - Input symbol decoding
//! - The [`BigNumberRenderer`] that composes digits on any [`CharacterLcd`]
//! - Helper routines shared by all character LCDs ([`LcdExt`])
//! - Configuration types and a parser for the `display.toml` subset
//! - A showcase script exercising every font
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (bigdigit-demo, etc.)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  BigNumberRenderer (this crate)         │
//! └─────────────────────────────────────────┘
//!                     │  CharacterLcd
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ HD44780 over  │       │ HD44780 over  │
//! │ parallel GPIO │       │ PCF8574 I2C   │
//! └───────────────┘       └───────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod font;
pub mod renderer;
pub mod showcase;
pub mod symbol;
pub mod traits;

// Re-export key types at crate root for convenience
pub use font::{ConfigError, Font, FontDescriptor, Glyph, MAX_GLYPHS};
pub use renderer::{BigNumberRenderer, Cursor, DisplayBounds, RenderError};
pub use symbol::Symbol;
pub use traits::{CharacterLcd, LcdExt};
