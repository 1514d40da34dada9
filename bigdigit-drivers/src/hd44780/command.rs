//! HD44780 instruction set

/// Instruction bytes and their flag bits
pub mod cmd {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const RETURN_HOME: u8 = 0x02;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const CURSOR_SHIFT: u8 = 0x10;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_CGRAM_ADDR: u8 = 0x40;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    // Entry mode flags
    pub const ENTRY_INCREMENT: u8 = 0x02;
    pub const ENTRY_SHIFT: u8 = 0x01;

    // Display control flags
    pub const DISPLAY_ON: u8 = 0x04;
    pub const CURSOR_ON: u8 = 0x02;
    pub const BLINK_ON: u8 = 0x01;

    // Cursor/display shift flags
    pub const SHIFT_DISPLAY: u8 = 0x08;
    pub const SHIFT_RIGHT: u8 = 0x04;

    // Function set flags
    pub const TWO_LINES: u8 = 0x08;
    pub const FONT_5X10: u8 = 0x04;
}

/// First nibble of the power-on reset sequence (8-bit function set)
pub const RESET_NIBBLE: u8 = 0x03;

/// Nibble switching the controller to 4-bit mode
pub const FOUR_BIT_NIBBLE: u8 = 0x02;

/// Wait after power-on before talking to the controller
pub const POWER_ON_DELAY_MS: u32 = 50;

/// Wait after the first reset nibble
pub const RESET_DELAY_US: u32 = 4_500;

/// Wait after the second reset nibble
pub const RESET_SHORT_DELAY_US: u32 = 150;

/// Execution time of clear and home
pub const SLOW_COMMAND_DELAY_US: u32 = 2_000;

/// Execution time of every other instruction and data write
pub const COMMAND_DELAY_US: u32 = 37;

/// Enable pulse width (datasheet minimum is 450 ns)
pub const ENABLE_PULSE_US: u32 = 1;

/// Whether a byte goes to the instruction or the data register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// RS low
    Instruction,
    /// RS high
    Data,
}
