//! PCF8574 I2C backpack wiring
//!
//! # Pin Mapping
//!
//! The common backpacks wire the expander like this:
//!
//! | PCF8574 | LCD       |
//! |---------|-----------|
//! | P0      | RS        |
//! | P1      | RW        |
//! | P2      | EN        |
//! | P3      | Backlight |
//! | P4-P7   | D4-D7     |
//!
//! Every nibble takes two I2C writes: one with EN high, one with EN low.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::command::{Register, ENABLE_PULSE_US};
use super::DataBus;

/// Expander bit assignments
mod pin {
    pub const RS: u8 = 0x01;
    pub const EN: u8 = 0x04;
    pub const BACKLIGHT: u8 = 0x08;
}

/// HD44780 data bus through a PCF8574 expander
pub struct I2cBus<I> {
    i2c: I,
    address: u8,
    backlight: bool,
}

impl<I: I2c> I2cBus<I> {
    /// Create an I2C bus with the backlight on
    ///
    /// - `address`: 7-bit expander address (usually 0x27 or 0x3F)
    pub fn new(i2c: I, address: u8) -> Self {
        Self {
            i2c,
            address,
            backlight: true,
        }
    }

    /// Expander address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Current backlight state
    pub fn backlight(&self) -> bool {
        self.backlight
    }

    /// Give back the I2C peripheral
    pub fn release(self) -> I {
        self.i2c
    }

    fn backlight_bit(&self) -> u8 {
        if self.backlight {
            pin::BACKLIGHT
        } else {
            0
        }
    }
}

impl<I: I2c> DataBus for I2cBus<I> {
    type Error = I::Error;

    fn write_nibble<D: DelayNs>(
        &mut self,
        nibble: u8,
        register: Register,
        delay: &mut D,
    ) -> Result<(), Self::Error> {
        let mut byte = ((nibble & 0x0F) << 4) | self.backlight_bit();
        if register == Register::Data {
            byte |= pin::RS;
        }

        self.i2c.write(self.address, &[byte | pin::EN])?;
        delay.delay_us(ENABLE_PULSE_US);
        self.i2c.write(self.address, &[byte])?;
        delay.delay_us(ENABLE_PULSE_US);
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        self.backlight = on;
        let byte = self.backlight_bit();
        self.i2c.write(self.address, &[byte])
    }
}
