//! HD44780 character LCD controller
//!
//! Drives the controller in 4-bit mode over any [`DataBus`]. The busy flag
//! is never read; every instruction is followed by its worst case
//! execution time instead.
//!
//! # DDRAM Layout
//!
//! Rows 0 and 1 start at 0x00 and 0x40. Four row displays continue the
//! first two lines, so rows 2 and 3 start at `columns` and
//! `0x40 + columns`.

mod command;
mod i2c;
mod parallel;

pub use command::{cmd, Register};
pub use i2c::I2cBus;
pub use parallel::ParallelBus;

use bigdigit_core::font::{Glyph, MAX_GLYPHS};
use bigdigit_core::CharacterLcd;
use embedded_hal::delay::DelayNs;

use command::{
    COMMAND_DELAY_US, FOUR_BIT_NIBBLE, POWER_ON_DELAY_MS, RESET_DELAY_US, RESET_NIBBLE,
    RESET_SHORT_DELAY_US, SLOW_COMMAND_DELAY_US,
};

/// Transport of 4-bit transfers to the controller
pub trait DataBus {
    /// Bus error type
    type Error;

    /// Latch the low four bits of `nibble` into the controller
    fn write_nibble<D: DelayNs>(
        &mut self,
        nibble: u8,
        register: Register,
        delay: &mut D,
    ) -> Result<(), Self::Error>;

    /// Switch the backlight, if the wiring controls one
    fn set_backlight(&mut self, _on: bool) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// HD44780 driver
pub struct Hd44780<B, D> {
    bus: B,
    delay: D,
    columns: u8,
    rows: u8,
    /// Display control flags (display, cursor, blink)
    display_control: u8,
}

impl<B: DataBus, D: DelayNs> Hd44780<B, D> {
    /// Create a driver for a `columns` x `rows` display
    ///
    /// Nothing is sent until [`init`](CharacterLcd::init) is called.
    pub fn new(bus: B, delay: D, columns: u8, rows: u8) -> Self {
        Self {
            bus,
            delay,
            columns,
            rows: rows.max(1),
            display_control: cmd::DISPLAY_ON,
        }
    }

    /// Send an instruction and wait for it to execute
    pub fn command(&mut self, instruction: u8) -> Result<(), B::Error> {
        self.send(instruction, Register::Instruction)?;
        if instruction == cmd::CLEAR_DISPLAY || instruction == cmd::RETURN_HOME {
            self.delay.delay_us(SLOW_COMMAND_DELAY_US);
        } else {
            self.delay.delay_us(COMMAND_DELAY_US);
        }
        Ok(())
    }

    fn write_data(&mut self, byte: u8) -> Result<(), B::Error> {
        self.send(byte, Register::Data)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }

    fn send(&mut self, byte: u8, register: Register) -> Result<(), B::Error> {
        self.bus.write_nibble(byte >> 4, register, &mut self.delay)?;
        self.bus.write_nibble(byte & 0x0F, register, &mut self.delay)
    }

    /// Move the cursor to (0, 0) without clearing
    pub fn home(&mut self) -> Result<(), B::Error> {
        self.command(cmd::RETURN_HOME)
    }

    /// Turn the whole display on or off (DDRAM is kept)
    pub fn set_display_on(&mut self, on: bool) -> Result<(), B::Error> {
        self.update_display_control(cmd::DISPLAY_ON, on)
    }

    /// Show or hide the underline cursor
    pub fn set_cursor_visible(&mut self, visible: bool) -> Result<(), B::Error> {
        self.update_display_control(cmd::CURSOR_ON, visible)
    }

    /// Enable or disable the blinking block cursor
    pub fn set_blink(&mut self, blink: bool) -> Result<(), B::Error> {
        self.update_display_control(cmd::BLINK_ON, blink)
    }

    fn update_display_control(&mut self, flag: u8, on: bool) -> Result<(), B::Error> {
        if on {
            self.display_control |= flag;
        } else {
            self.display_control &= !flag;
        }
        self.command(cmd::DISPLAY_CONTROL | self.display_control)
    }

    /// Switch the backlight (I2C backpacks only)
    pub fn set_backlight(&mut self, on: bool) -> Result<(), B::Error> {
        self.bus.set_backlight(on)
    }

    /// Shift the whole display content one column left or right
    pub fn scroll(&mut self, right: bool) -> Result<(), B::Error> {
        let direction = if right { cmd::SHIFT_RIGHT } else { 0 };
        self.command(cmd::CURSOR_SHIFT | cmd::SHIFT_DISPLAY | direction)
    }

    /// DDRAM address of the first cell of a row
    fn row_offset(&self, row: u8) -> u8 {
        let offsets = [0x00, 0x40, self.columns, self.columns.wrapping_add(0x40)];
        offsets[usize::from(row.min(self.rows - 1).min(3))]
    }

    /// Access the bus, e.g. to reach the I2C peripheral
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give back the bus and delay
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }
}

impl<B: DataBus, D: DelayNs> CharacterLcd for Hd44780<B, D> {
    type Error = B::Error;

    /// Power-on initialization by instruction
    ///
    /// The controller may be in 8-bit mode or halfway through a 4-bit
    /// transfer, so it is forced into 8-bit mode three times before
    /// switching to 4-bit mode.
    fn init(&mut self) -> Result<(), B::Error> {
        self.delay.delay_ms(POWER_ON_DELAY_MS);

        self.bus
            .write_nibble(RESET_NIBBLE, Register::Instruction, &mut self.delay)?;
        self.delay.delay_us(RESET_DELAY_US);
        self.bus
            .write_nibble(RESET_NIBBLE, Register::Instruction, &mut self.delay)?;
        self.delay.delay_us(RESET_DELAY_US);
        self.bus
            .write_nibble(RESET_NIBBLE, Register::Instruction, &mut self.delay)?;
        self.delay.delay_us(RESET_SHORT_DELAY_US);
        self.bus
            .write_nibble(FOUR_BIT_NIBBLE, Register::Instruction, &mut self.delay)?;
        self.delay.delay_us(RESET_SHORT_DELAY_US);

        let lines = if self.rows > 1 { cmd::TWO_LINES } else { 0 };
        self.command(cmd::FUNCTION_SET | lines)?;
        self.command(cmd::DISPLAY_CONTROL | self.display_control)?;
        self.command(cmd::CLEAR_DISPLAY)?;
        self.command(cmd::ENTRY_MODE_SET | cmd::ENTRY_INCREMENT)?;

        #[cfg(feature = "defmt")]
        defmt::info!("HD44780 {}x{} initialized", self.columns, self.rows);

        Ok(())
    }

    fn clear(&mut self) -> Result<(), B::Error> {
        self.command(cmd::CLEAR_DISPLAY)
    }

    /// Rows past the last one are clamped to it
    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), B::Error> {
        let address = self.row_offset(row).wrapping_add(column);
        self.command(cmd::SET_DDRAM_ADDR | (address & 0x7F))
    }

    fn write_cell(&mut self, code: u8) -> Result<(), B::Error> {
        self.write_data(code)
    }

    /// Slots above 7 wrap around. The cursor is left at (0, 0).
    fn create_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), B::Error> {
        let slot = slot & (MAX_GLYPHS as u8 - 1);
        self.command(cmd::SET_CGRAM_ADDR | (slot << 3))?;
        for &row in glyph.iter() {
            self.write_data(row)?;
        }
        // Back to DDRAM, otherwise the next data write lands in CGRAM
        self.set_cursor(0, 0)
    }

    fn dimensions(&self) -> (u8, u8) {
        (self.columns, self.rows)
    }
}
