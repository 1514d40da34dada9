//! Big number renderer
//!
//! Composes digits several cells wide and tall out of the custom glyphs of
//! a [`Font`]. The renderer tracks the upper-left cell of the next symbol
//! and writes every symbol row by row through a [`CharacterLcd`].
//!
//! # Gaps
//!
//! Most fonts fill their cells edge to edge, so consecutive numbers would
//! touch. With the gap enabled, a blank column is written to the right of
//! every digit, full-width space and hyphen (of every symbol on one column
//! fonts), and the next symbol starts one column further right. The blank is not written when the number ends at
//! the display edge.
//!
//! ```text
//!  col: 0 1 2 3 4 5 6 7
//!       ┌─────┐ ┌─────┐
//!       │  1  │ │  2  │     "12", 3x4 font, gap enabled
//!       └─────┘ └─────┘
//!              ^ gap  ^ cursor after the write
//! ```

use core::fmt;

use crate::font::{ConfigError, Font, FontDescriptor};
use crate::symbol::Symbol;
use crate::traits::CharacterLcd;

/// Character written into blank cells
const BLANK: u8 = b' ';

/// Renderer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError<E> {
    /// The byte is not a digit or supported symbol, nothing was drawn
    InvalidCharacter(u8),
    /// The LCD driver reported a bus error
    Lcd(E),
}

/// Position of the upper-left cell of the next symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Column (0-based)
    pub column: u8,
    /// Row (0-based)
    pub row: u8,
}

impl Cursor {
    /// Create a cursor position
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}

/// Horizontal limit used for gap clearing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBounds {
    /// One past the last column that may be written
    pub max_column: u8,
}

/// Renders big numbers on a character LCD
///
/// The renderer owns the LCD handle; use [`lcd_mut`](Self::lcd_mut) for
/// plain text output in between, or [`release`](Self::release) to get the
/// driver back.
pub struct BigNumberRenderer<L> {
    lcd: L,
    font: &'static Font,
    cursor: Cursor,
    bounds: DisplayBounds,
    gap: bool,
    /// A gap column was left after the last symbol; the next symbol
    /// starts one column further right
    gap_pending: bool,
}

impl<L: CharacterLcd> BigNumberRenderer<L> {
    /// Create a renderer for an already constructed LCD driver
    ///
    /// The font must exist and fit the display height.
    pub fn new(lcd: L, descriptor: FontDescriptor) -> Result<Self, ConfigError> {
        let font = Self::resolve(&lcd, descriptor)?;
        let (columns, _) = lcd.dimensions();

        Ok(Self {
            lcd,
            font,
            cursor: Cursor::default(),
            bounds: DisplayBounds {
                max_column: columns,
            },
            gap: font.gap_by_default(),
            gap_pending: false,
        })
    }

    /// Switch to another font
    ///
    /// Resets the cursor to (0, 0) and the gap setting to the font default.
    /// Call [`begin`](Self::begin) afterwards to load the new glyphs. On
    /// error the renderer keeps its current font.
    pub fn initialize(&mut self, descriptor: FontDescriptor) -> Result<(), ConfigError> {
        let font = Self::resolve(&self.lcd, descriptor)?;

        self.font = font;
        self.gap = font.gap_by_default();
        self.set_cursor(0, 0);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Big number font {}x{} variant {}",
            descriptor.columns,
            descriptor.rows,
            descriptor.variant
        );

        Ok(())
    }

    fn resolve(lcd: &L, descriptor: FontDescriptor) -> Result<&'static Font, ConfigError> {
        let font = Font::get(descriptor)?;
        let (_, rows) = lcd.dimensions();
        if font.height() > rows {
            return Err(ConfigError::FontTooTall);
        }
        Ok(font)
    }

    /// Program the font's glyphs into CGRAM slots 0..N
    ///
    /// The LCD controller must already be initialized. Safe to call again,
    /// e.g. after the controller was reset. Returns the number of glyphs
    /// programmed.
    pub fn begin(&mut self) -> Result<usize, L::Error> {
        for (slot, glyph) in self.font.glyphs().iter().enumerate() {
            self.lcd.create_glyph(slot as u8, glyph)?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Loaded {} custom glyphs", self.font.glyph_count());

        Ok(self.font.glyph_count())
    }

    /// Set the upper-left cell of the next symbol
    ///
    /// No bounds check; cells beyond the display are dropped or wrapped by
    /// the controller.
    pub fn set_cursor(&mut self, column: u8, row: u8) {
        self.cursor = Cursor::new(column, row);
        self.gap_pending = false;
    }

    /// Upper-left cell of the next symbol
    ///
    /// When a gap is pending the next symbol is drawn one column to the
    /// right of this position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Write one digit or symbol at the cursor
    ///
    /// Accepts `'0'..='9'`, the raw values `0..=9`, `' '`, `'|'`, `'-'`,
    /// `'_'`, `'.'` and `':'`. Returns the number of cells written,
    /// including the blank gap column.
    pub fn write(&mut self, byte: u8) -> Result<usize, RenderError<L::Error>> {
        match Symbol::from_byte(byte) {
            Some(symbol) => self.write_symbol(symbol),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Cannot render character {=u8:#x}", byte);

                Err(RenderError::InvalidCharacter(byte))
            }
        }
    }

    /// Move the cursor and write one digit or symbol
    pub fn write_at(
        &mut self,
        byte: u8,
        column: u8,
        row: u8,
    ) -> Result<usize, RenderError<L::Error>> {
        self.set_cursor(column, row);
        self.write(byte)
    }

    /// Write every byte of `text`, stopping at the first error
    ///
    /// Returns the total number of cells written. On error, cells already
    /// drawn for the preceding bytes stay on the display but are not
    /// reported.
    pub fn print(&mut self, text: &str) -> Result<usize, RenderError<L::Error>> {
        let mut cells = 0;
        for &byte in text.as_bytes() {
            cells += self.write(byte)?;
        }
        Ok(cells)
    }

    /// Write an already decoded symbol at the cursor
    pub fn write_symbol(&mut self, symbol: Symbol) -> Result<usize, RenderError<L::Error>> {
        let width = symbol.width(self.font.width());
        let height = self.font.height();
        let column = if self.gap_pending {
            self.cursor.column.saturating_add(1)
        } else {
            self.cursor.column
        };

        let mut cells = 0;
        for row in 0..height {
            self.lcd
                .set_cursor(column, self.cursor.row.saturating_add(row))
                .map_err(RenderError::Lcd)?;
            for offset in 0..width {
                self.lcd
                    .write_cell(self.cell_code(symbol, row, offset))
                    .map_err(RenderError::Lcd)?;
                cells += 1;
            }
        }

        self.cursor.column = column.saturating_add(width);
        self.gap_pending = false;

        if self.gap && symbol.takes_gap(self.font.width()) {
            if self.cursor.column < self.bounds.max_column {
                cells += self.clear_gap().map_err(RenderError::Lcd)?;
            }
            self.gap_pending = true;
        }

        Ok(cells)
    }

    /// Blank the column at the cursor on every number row
    fn clear_gap(&mut self) -> Result<usize, L::Error> {
        let height = self.font.height();
        for row in 0..height {
            self.lcd
                .set_cursor(self.cursor.column, self.cursor.row.saturating_add(row))?;
            self.lcd.write_cell(BLANK)?;
        }
        Ok(usize::from(height))
    }

    fn cell_code(&self, symbol: Symbol, row: u8, column: u8) -> u8 {
        let code = match symbol {
            Symbol::Digit(digit) => self.font.digit_cell(digit, row, column),
            Symbol::Space | Symbol::OneColumnSpace => None,
            other => other
                .special_index()
                .and_then(|index| self.font.special_cell(index, row)),
        };
        code.unwrap_or(BLANK)
    }

    /// Put a blank column after every number
    pub fn enable_gap_between_numbers(&mut self) {
        self.gap = true;
    }

    /// Let numbers touch
    pub fn disable_gap_between_numbers(&mut self) {
        self.gap = false;
    }

    /// Enable or disable the gap after numbers
    pub fn set_gap_between_numbers(&mut self, gap: bool) {
        self.gap = gap;
    }

    /// Whether a blank column follows each number
    pub fn gap_between_numbers(&self) -> bool {
        self.gap
    }

    /// Active font
    pub fn font(&self) -> &'static Font {
        self.font
    }

    /// Current horizontal limit
    pub fn bounds(&self) -> DisplayBounds {
        self.bounds
    }

    /// Override the column limit used for gap clearing
    ///
    /// Defaults to the LCD width. Useful when only part of the display is
    /// reserved for big numbers.
    pub fn set_maximum_column(&mut self, max_column: u8) {
        self.bounds.max_column = max_column;
    }

    /// Borrow the LCD driver
    pub fn lcd(&self) -> &L {
        &self.lcd
    }

    /// Borrow the LCD driver mutably, e.g. for plain text output
    pub fn lcd_mut(&mut self) -> &mut L {
        &mut self.lcd
    }

    /// Give back the LCD driver
    pub fn release(self) -> L {
        self.lcd
    }
}

impl<L: CharacterLcd> fmt::Write for BigNumberRenderer<L> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s).map(|_| ()).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Glyph, ROM_BLANK, ROM_FULL_BLOCK};
    use core::fmt::Write as _;
    use heapless::Vec;

    /// Mock LCD keeping a cell grid and a log of glyph uploads
    struct MockLcd {
        columns: u8,
        rows: u8,
        cursor: (u8, u8),
        grid: [[Option<u8>; 40]; 4],
        writes: usize,
        glyph_slots: Vec<u8, 16>,
        fail: bool,
    }

    impl MockLcd {
        fn new(columns: u8, rows: u8) -> Self {
            Self {
                columns,
                rows,
                cursor: (0, 0),
                grid: [[None; 40]; 4],
                writes: 0,
                glyph_slots: Vec::new(),
                fail: false,
            }
        }

        fn lcd_2004() -> Self {
            Self::new(20, 4)
        }

        fn lcd_1602() -> Self {
            Self::new(16, 2)
        }

        fn cell(&self, column: u8, row: u8) -> Option<u8> {
            self.grid[row as usize][column as usize]
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BusFault;

    impl CharacterLcd for MockLcd {
        type Error = BusFault;

        fn init(&mut self) -> Result<(), BusFault> {
            Ok(())
        }

        fn clear(&mut self) -> Result<(), BusFault> {
            self.grid = [[None; 40]; 4];
            self.cursor = (0, 0);
            Ok(())
        }

        fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), BusFault> {
            self.cursor = (column, row);
            Ok(())
        }

        fn write_cell(&mut self, code: u8) -> Result<(), BusFault> {
            if self.fail {
                return Err(BusFault);
            }
            let (column, row) = self.cursor;
            self.grid[row as usize][column as usize] = Some(code);
            self.cursor.0 += 1;
            self.writes += 1;
            Ok(())
        }

        fn create_glyph(&mut self, slot: u8, _glyph: &Glyph) -> Result<(), BusFault> {
            self.glyph_slots.push(slot).map_err(|_| BusFault)
        }

        fn dimensions(&self) -> (u8, u8) {
            (self.columns, self.rows)
        }
    }

    fn renderer(descriptor: FontDescriptor) -> BigNumberRenderer<MockLcd> {
        BigNumberRenderer::new(MockLcd::lcd_2004(), descriptor).unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let r = renderer(FontDescriptor::FONT_3X4);

        assert_eq!(r.cursor(), Cursor::new(0, 0));
        assert_eq!(r.font().width(), 3);
        assert_eq!(r.font().height(), 4);
        assert!(r.gap_between_numbers());
        assert_eq!(r.bounds().max_column, 20);
    }

    #[test]
    fn test_rejects_unsupported_font() {
        let result = BigNumberRenderer::new(MockLcd::lcd_2004(), FontDescriptor::new(4, 4, 1));
        assert!(matches!(result, Err(ConfigError::UnsupportedFont)));
    }

    #[test]
    fn test_rejects_tall_font_on_two_rows() {
        let result = BigNumberRenderer::new(MockLcd::lcd_1602(), FontDescriptor::FONT_3X4);
        assert!(matches!(result, Err(ConfigError::FontTooTall)));

        let mut r = BigNumberRenderer::new(MockLcd::lcd_1602(), FontDescriptor::FONT_2X2).unwrap();
        assert_eq!(
            r.initialize(FontDescriptor::FONT_2X3),
            Err(ConfigError::FontTooTall)
        );
        // Previous font kept
        assert_eq!(r.font().descriptor(), FontDescriptor::FONT_2X2);
    }

    #[test]
    fn test_begin_programs_every_glyph() {
        let mut r = renderer(FontDescriptor::FONT_3X2);
        assert_eq!(r.begin(), Ok(6));
        assert_eq!(r.lcd().glyph_slots.as_slice(), &[0, 1, 2, 3, 4, 5]);

        // Idempotent
        assert_eq!(r.begin(), Ok(6));
        assert_eq!(r.lcd().glyph_slots.len(), 12);
    }

    #[test]
    fn test_write_digit_cells() {
        let mut r = renderer(FontDescriptor::FONT_3X4);
        r.disable_gap_between_numbers();

        assert_eq!(r.write(b'1'), Ok(12));
        assert_eq!(r.cursor(), Cursor::new(3, 0));

        let lcd = r.lcd();
        assert_eq!(lcd.cell(0, 0), Some(0x07));
        assert_eq!(lcd.cell(1, 0), Some(ROM_FULL_BLOCK));
        assert_eq!(lcd.cell(2, 0), Some(ROM_BLANK));
        assert_eq!(lcd.cell(1, 3), Some(0x05));
        assert_eq!(lcd.cell(3, 0), None);
    }

    #[test]
    fn test_raw_digit_values() {
        let mut r = renderer(FontDescriptor::FONT_2X2);
        r.write(7).unwrap();

        let font = r.font();
        assert_eq!(r.lcd().cell(0, 0), font.digit_cell(7, 0, 0));
        assert_eq!(r.lcd().cell(1, 1), font.digit_cell(7, 1, 1));
    }

    #[test]
    fn test_twelve_with_gap() {
        let mut r = renderer(FontDescriptor::FONT_3X4);
        r.set_cursor(0, 0);

        r.print("12").unwrap();

        let lcd = r.lcd();
        for row in 0..4 {
            assert_eq!(lcd.cell(3, row), Some(b' '), "gap row {}", row);
        }
        // "2" starts at column 4
        for row in 0..4 {
            for column in 0..3 {
                assert_eq!(
                    lcd.cell(4 + column, row),
                    r.font().digit_cell(2, row, column)
                );
            }
        }
        assert_eq!(r.cursor().column, 7);
    }

    #[test]
    fn test_gap_disabled() {
        let mut r = renderer(FontDescriptor::FONT_3X4);
        r.disable_gap_between_numbers();

        assert_eq!(r.print("12"), Ok(24));
        assert_eq!(r.cursor().column, 6);
        assert_eq!(r.lcd().cell(3, 0), r.font().digit_cell(2, 0, 0));
    }

    #[test]
    fn test_gap_not_cleared_at_display_edge() {
        let mut r = renderer(FontDescriptor::FONT_3X4);
        r.set_cursor(17, 0);

        // Number ends at the last column: no gap cells
        assert_eq!(r.write(b'8'), Ok(12));
        assert_eq!(r.cursor().column, 20);

        r.set_cursor(16, 0);
        assert_eq!(r.write(b'8'), Ok(16));
        assert_eq!(r.lcd().cell(19, 2), Some(b' '));
    }

    #[test]
    fn test_maximum_column_override() {
        let mut r = renderer(FontDescriptor::FONT_3X4);
        r.set_maximum_column(3);

        assert_eq!(r.write(b'0'), Ok(12));
        assert_eq!(r.lcd().cell(3, 0), None);
    }

    #[test]
    fn test_one_column_space() {
        let mut r = renderer(FontDescriptor::FONT_3X4);

        assert_eq!(r.write(b'|'), Ok(4));
        assert_eq!(r.cursor().column, 1);
        assert_eq!(r.lcd().cell(0, 2), Some(b' '));
    }

    #[test]
    fn test_full_width_space() {
        let mut r = renderer(FontDescriptor::FONT_3X4);
        r.disable_gap_between_numbers();

        assert_eq!(r.write(b' '), Ok(12));
        assert_eq!(r.cursor().column, 3);
        assert!((0..3).all(|c| r.lcd().cell(c, 0) == Some(b' ')));
    }

    #[test]
    fn test_hyphens() {
        let mut r = renderer(FontDescriptor::FONT_3X4);

        // Minus takes a gap
        assert_eq!(r.write(b'-'), Ok(8));
        assert_eq!(r.lcd().cell(0, 1), Some(0x01));
        assert_eq!(r.lcd().cell(1, 1), Some(b' '));
        assert_eq!(r.cursor().column, 1);

        // One column hyphen does not
        r.set_cursor(10, 0);
        assert_eq!(r.write(b'_'), Ok(4));
        assert_eq!(r.lcd().cell(10, 1), Some(0x01));
        assert_eq!(r.lcd().cell(11, 1), None);
        assert_eq!(r.cursor().column, 11);
    }

    #[test]
    fn test_narrow_font_gaps_every_symbol() {
        let mut r = renderer(FontDescriptor::FONT_1X2);
        r.enable_gap_between_numbers();

        // '1' at 0, gap at 1, '.' at 2, gap at 3, '2' at 4, gap at 5
        assert_eq!(r.print("1.2"), Ok(12));

        let font = r.font();
        for row in 0..2 {
            assert_eq!(r.lcd().cell(0, row), font.digit_cell(1, row, 0));
            assert_eq!(r.lcd().cell(1, row), Some(b' '));
            assert_eq!(r.lcd().cell(2, row), Some(font.special_cell(1, row).unwrap_or(b' ')));
            assert_eq!(r.lcd().cell(3, row), Some(b' '));
            assert_eq!(r.lcd().cell(4, row), font.digit_cell(2, row, 0));
        }
        assert_eq!(r.cursor().column, 5);
    }

    #[test]
    fn test_decimal_number() {
        let mut r = renderer(FontDescriptor::FONT_3X4);

        r.print("-4.2").unwrap();

        // '-' at 0, gap at 1, '4' at 2-4, gap at 5, '.' at 6, '2' at 7-9
        assert_eq!(r.lcd().cell(2, 0), r.font().digit_cell(4, 0, 0));
        assert_eq!(r.lcd().cell(6, 3), Some(0x05));
        assert_eq!(r.lcd().cell(7, 0), r.font().digit_cell(2, 0, 0));
        assert_eq!(r.cursor().column, 10);
    }

    #[test]
    fn test_invalid_character_is_rejected() {
        let mut r = renderer(FontDescriptor::FONT_3X4);
        r.set_cursor(2, 0);

        assert_eq!(r.write(b'A'), Err(RenderError::InvalidCharacter(b'A')));
        assert_eq!(r.cursor(), Cursor::new(2, 0));
        assert_eq!(r.lcd().writes, 0);
    }

    #[test]
    fn test_print_stops_at_invalid_character() {
        let mut r = renderer(FontDescriptor::FONT_2X2);
        r.disable_gap_between_numbers();

        assert_eq!(r.print("1x2"), Err(RenderError::InvalidCharacter(b'x')));
        assert_eq!(r.cursor().column, 2);

        // The '1' stays drawn even though its cells are not counted
        assert_eq!(r.lcd().writes, 4);
        assert_eq!(r.lcd().cell(0, 0), r.font().digit_cell(1, 0, 0));
        assert_eq!(r.lcd().cell(2, 0), None);
    }

    #[test]
    fn test_bus_error_is_forwarded() {
        let mut r = renderer(FontDescriptor::FONT_2X2);
        r.lcd_mut().fail = true;

        assert_eq!(r.write(b'1'), Err(RenderError::Lcd(BusFault)));
        assert_eq!(r.cursor().column, 0);
    }

    #[test]
    fn test_set_cursor_drops_pending_gap() {
        let mut r = renderer(FontDescriptor::FONT_2X2);
        r.write(b'1').unwrap();
        r.set_cursor(10, 2);
        r.write(b'2').unwrap();

        assert_eq!(r.lcd().cell(10, 2), r.font().digit_cell(2, 0, 0));
    }

    #[test]
    fn test_write_at() {
        let mut r = renderer(FontDescriptor::FONT_2X3);

        r.write_at(b'5', 4, 1).unwrap();

        assert_eq!(r.lcd().cell(4, 1), r.font().digit_cell(5, 0, 0));
        assert_eq!(r.lcd().cell(5, 3), r.font().digit_cell(5, 2, 1));
    }

    #[test]
    fn test_initialize_resets_state() {
        let mut r = renderer(FontDescriptor::FONT_3X4);
        r.disable_gap_between_numbers();
        r.write(b'1').unwrap();

        r.initialize(FontDescriptor::FONT_2X2).unwrap();

        assert_eq!(r.cursor(), Cursor::new(0, 0));
        assert!(r.gap_between_numbers());
        assert_eq!(r.font().width(), 2);

        r.initialize(FontDescriptor::FONT_1X2).unwrap();
        assert!(!r.gap_between_numbers());
    }

    #[test]
    fn test_fmt_write() {
        let mut r = renderer(FontDescriptor::FONT_1X2);

        write!(r, "{:02}:{:02}", 7, 5).unwrap();
        assert_eq!(r.cursor().column, 5);

        assert!(write!(r, "{}", "oops").is_err());
    }

    #[test]
    fn test_release() {
        let mut r = renderer(FontDescriptor::FONT_2X2);
        r.write(b'0').unwrap();

        let lcd = r.release();
        assert_eq!(lcd.writes, 4 + 2);
    }
}
