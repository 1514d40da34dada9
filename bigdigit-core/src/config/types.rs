//! Configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::font::{ConfigError, Font, FontDescriptor};
use crate::renderer::BigNumberRenderer;
use crate::traits::CharacterLcd;

/// Default I2C address of PCF8574 LCD backpacks
pub const DEFAULT_I2C_ADDRESS: u8 = 0x27;

/// How the LCD controller is wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BusKind {
    /// PCF8574 I2C backpack
    #[default]
    I2c,
    /// Direct 4-bit parallel GPIO
    Parallel,
}

/// LCD hardware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Character columns
    pub columns: u8,
    /// Character rows
    pub rows: u8,
    /// Bus wiring
    pub bus: BusKind,
    /// 7-bit I2C address (I2C bus only)
    pub i2c_address: u8,
    /// Backlight on after init (I2C bus only)
    pub backlight: bool,
}

impl DisplayConfig {
    /// 16x2 display on an I2C backpack
    pub const LCD_1602: Self = Self {
        columns: 16,
        rows: 2,
        bus: BusKind::I2c,
        i2c_address: DEFAULT_I2C_ADDRESS,
        backlight: true,
    };

    /// 20x4 display on an I2C backpack
    pub const LCD_2004: Self = Self {
        columns: 20,
        rows: 4,
        bus: BusKind::I2c,
        i2c_address: DEFAULT_I2C_ADDRESS,
        backlight: true,
    };
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::LCD_2004
    }
}

/// Big number font selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontConfig {
    /// Font to render with
    pub descriptor: FontDescriptor,
    /// Gap between numbers; `None` keeps the font default
    pub gap: Option<bool>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            descriptor: FontDescriptor::FONT_3X4,
            gap: None,
        }
    }
}

impl FontConfig {
    /// Apply the gap override to a renderer
    pub fn apply<L: CharacterLcd>(&self, renderer: &mut BigNumberRenderer<L>) {
        if let Some(gap) = self.gap {
            renderer.set_gap_between_numbers(gap);
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// LCD hardware
    pub display: DisplayConfig,
    /// Font selection
    pub font: FontConfig,
}

impl Config {
    /// Check that the font exists and fits the display
    pub fn validate(&self) -> Result<&'static Font, ConfigError> {
        let font = Font::get(self.font.descriptor)?;
        if font.height() > self.display.rows {
            return Err(ConfigError::FontTooTall);
        }
        Ok(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.display.columns, 20);
        assert_eq!(config.display.rows, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_height() {
        let config = Config {
            display: DisplayConfig::LCD_1602,
            font: FontConfig::default(),
        };
        assert_eq!(config.validate().err(), Some(ConfigError::FontTooTall));

        let config = Config {
            display: DisplayConfig::LCD_1602,
            font: FontConfig {
                descriptor: FontDescriptor::FONT_3X2_V2,
                gap: Some(true),
            },
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_unknown_font() {
        let config = Config {
            display: DisplayConfig::LCD_2004,
            font: FontConfig {
                descriptor: FontDescriptor::new(1, 4, 1),
                gap: None,
            },
        };
        assert_eq!(config.validate().err(), Some(ConfigError::UnsupportedFont));
    }
}
