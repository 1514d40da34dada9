//! Character LCD driver trait

use crate::font::{Glyph, MAX_GLYPHS};

/// Trait for character-matrix LCD controllers
///
/// This is the capability the renderer needs from a display: positioning,
/// writing character codes and loading custom glyphs. Implementations own
/// the bus (parallel GPIO, I2C backpack, ...).
pub trait CharacterLcd {
    /// Error type for bus operations
    type Error;

    /// Run the controller's power-on initialization sequence
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Clear the display and move the cursor home
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the write position
    ///
    /// - `column`: Column number (0-based)
    /// - `row`: Row number (0-based)
    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), Self::Error>;

    /// Write one character code at the current position and advance
    fn write_cell(&mut self, code: u8) -> Result<(), Self::Error>;

    /// Program a custom glyph into a CGRAM slot (0-7)
    fn create_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), Self::Error>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character cells
    fn dimensions(&self) -> (u8, u8);
}

/// Helper routines available on every character LCD
pub trait LcdExt: CharacterLcd {
    /// Write the bytes of a string verbatim
    fn print_str(&mut self, text: &str) -> Result<usize, Self::Error> {
        for &byte in text.as_bytes() {
            self.write_cell(byte)?;
        }
        Ok(text.len())
    }

    /// Write `count` spaces at the current position
    fn print_spaces(&mut self, count: u8) -> Result<(), Self::Error> {
        for _ in 0..count {
            self.write_cell(b' ')?;
        }
        Ok(())
    }

    /// Blank a whole row and leave the cursor at its start
    fn clear_line(&mut self, row: u8) -> Result<(), Self::Error> {
        let (columns, _) = self.dimensions();
        self.set_cursor(0, row)?;
        self.print_spaces(columns)?;
        self.set_cursor(0, row)
    }

    /// Print a value as `0x` hex with leading zeros
    ///
    /// Values below 0x100 get two digits, everything else four.
    /// Returns the number of characters printed.
    fn print_hex(&mut self, value: u16) -> Result<usize, Self::Error> {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";

        let digits: u32 = if value < 0x100 { 2 } else { 4 };
        self.write_cell(b'0')?;
        self.write_cell(b'x')?;
        for shift in (0..digits).rev() {
            let nibble = (value >> (shift * 4)) & 0x0F;
            self.write_cell(HEX[usize::from(nibble)])?;
        }
        Ok(2 + digits as usize)
    }

    /// Show all eight CGRAM glyphs on the first row
    fn show_custom_glyphs(&mut self) -> Result<(), Self::Error> {
        self.set_cursor(0, 0)?;
        for slot in 0..MAX_GLYPHS as u8 {
            self.write_cell(slot)?;
        }
        Ok(())
    }

    /// Show a selection of ROM characters, one range per row
    ///
    /// Row 0 holds the CGRAM slots followed by a few symbols; the other
    /// rows show 0x10-0x1F, 0x80-0x8F and 0x90-0x9F, which are blank on
    /// A00 ROM controllers. Rows the display does not have are skipped.
    fn show_special_characters(&mut self) -> Result<(), Self::Error> {
        const SYMBOLS: [u8; 5] = [0xA1, 0xA5, 0xB0, 0xDB, 0xDF];
        const RANGES: [(u8, u8); 3] = [(0x10, 0x20), (0x80, 0x90), (0x90, 0xA0)];

        self.show_custom_glyphs()?;
        for &code in &SYMBOLS {
            self.write_cell(code)?;
        }

        let (_, rows) = self.dimensions();
        for (row, &(start, end)) in (1..rows).zip(RANGES.iter()) {
            self.set_cursor(0, row)?;
            for code in start..end {
                self.write_cell(code)?;
            }
        }
        Ok(())
    }
}

// Blanket implementation for all CharacterLcd types
impl<T: CharacterLcd> LcdExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Records what was written where
    struct MockLcd {
        columns: u8,
        rows: u8,
        cursor: (u8, u8),
        cells: Vec<(u8, u8, u8), 256>,
    }

    impl MockLcd {
        fn new(columns: u8, rows: u8) -> Self {
            Self {
                columns,
                rows,
                cursor: (0, 0),
                cells: Vec::new(),
            }
        }

        fn codes(&self) -> Vec<u8, 256> {
            self.cells.iter().map(|&(_, _, code)| code).collect()
        }
    }

    impl CharacterLcd for MockLcd {
        type Error = ();

        fn init(&mut self) -> Result<(), ()> {
            Ok(())
        }

        fn clear(&mut self) -> Result<(), ()> {
            self.cells.clear();
            self.cursor = (0, 0);
            Ok(())
        }

        fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), ()> {
            self.cursor = (column, row);
            Ok(())
        }

        fn write_cell(&mut self, code: u8) -> Result<(), ()> {
            let (column, row) = self.cursor;
            self.cells.push((column, row, code)).map_err(|_| ())?;
            self.cursor.0 += 1;
            Ok(())
        }

        fn create_glyph(&mut self, _slot: u8, _glyph: &Glyph) -> Result<(), ()> {
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (self.columns, self.rows)
        }
    }

    #[test]
    fn test_print_hex() {
        let mut lcd = MockLcd::new(16, 2);

        assert_eq!(lcd.print_hex(0x5), Ok(4));
        assert_eq!(lcd.codes().as_slice(), b"0x05");

        lcd.clear().unwrap();
        assert_eq!(lcd.print_hex(0xAB), Ok(4));
        assert_eq!(lcd.codes().as_slice(), b"0xAB");

        lcd.clear().unwrap();
        assert_eq!(lcd.print_hex(0x100), Ok(6));
        assert_eq!(lcd.codes().as_slice(), b"0x0100");

        lcd.clear().unwrap();
        assert_eq!(lcd.print_hex(0xBEEF), Ok(6));
        assert_eq!(lcd.codes().as_slice(), b"0xBEEF");
    }

    #[test]
    fn test_clear_line() {
        let mut lcd = MockLcd::new(16, 2);
        lcd.set_cursor(5, 0).unwrap();

        lcd.clear_line(1).unwrap();

        assert_eq!(lcd.cells.len(), 16);
        assert!(lcd.cells.iter().all(|&(_, row, code)| row == 1 && code == b' '));
        assert_eq!(lcd.cursor, (0, 1));
    }

    #[test]
    fn test_print_str() {
        let mut lcd = MockLcd::new(16, 2);
        assert_eq!(lcd.print_str("Hi!"), Ok(3));
        assert_eq!(lcd.codes().as_slice(), b"Hi!");
    }

    #[test]
    fn test_show_custom_glyphs() {
        let mut lcd = MockLcd::new(16, 2);
        lcd.show_custom_glyphs().unwrap();
        assert_eq!(lcd.codes().as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_special_characters_skip_missing_rows() {
        let mut lcd = MockLcd::new(16, 2);
        lcd.show_special_characters().unwrap();

        // 8 slots + 5 symbols on row 0, one range of 16 on row 1
        assert_eq!(lcd.cells.len(), 8 + 5 + 16);
        assert!(lcd.cells.iter().all(|&(_, row, _)| row < 2));

        let mut lcd = MockLcd::new(20, 4);
        lcd.show_special_characters().unwrap();
        assert_eq!(lcd.cells.len(), 8 + 5 + 3 * 16);
    }
}
