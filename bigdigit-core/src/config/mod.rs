//! Configuration types
//!
//! Board-agnostic display and font configuration, parsed from the
//! `display.toml` subset understood by [`parse_config`].

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
