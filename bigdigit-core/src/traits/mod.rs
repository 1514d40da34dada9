//! Hardware abstraction traits
//!
//! These traits define the interface between the renderer and the
//! character LCD drivers.

pub mod lcd;

pub use lcd::{CharacterLcd, LcdExt};
