//! Big number fonts
//!
//! A font is a fixed combination of:
//! - up to eight 5x8 glyphs that get programmed into the LCD's CGRAM
//! - a cell layout saying which glyph (or ROM character) goes into each
//!   cell of every digit and special symbol
//!
//! Fonts are selected with a [`FontDescriptor`] and resolved to one of the
//! static [`Font`] values with [`Font::get`].

mod tables;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of pixel rows in one character cell
pub const GLYPH_ROWS: usize = 8;

/// Number of CGRAM slots on an HD44780 compatible controller
pub const MAX_GLYPHS: usize = 8;

/// Number of special symbols stored in front of the digits in each layout row
/// (`-`, `.` and `:`)
pub const SPECIAL_SYMBOLS: usize = 3;

/// One custom character bitmap, top row first. Only the low five bits of
/// every row are visible.
pub type Glyph = [u8; GLYPH_ROWS];

/// ROM code of a blank cell in the A00 character set
pub const ROM_BLANK: u8 = 0xFE;

/// ROM code of a fully lit cell
pub const ROM_FULL_BLOCK: u8 = 0xFF;

const COLUMN_MASK: u8 = 0x0C;
const ROW_MASK: u8 = 0x03;
const VARIANT_MASK: u8 = 0x30;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No font exists for this column/row/variant combination
    UnsupportedFont,
    /// The font has more rows than the display
    FontTooTall,
}

/// Identifies a font by its number width, number height and stroke variant
///
/// Descriptors can be built for any combination; only the ten listed as
/// associated constants resolve to a [`Font`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontDescriptor {
    /// Columns per number (1-3)
    pub columns: u8,
    /// Rows per number (2-4)
    pub rows: u8,
    /// Stroke style variant (1-3)
    pub variant: u8,
}

impl FontDescriptor {
    /// 1 column, 2 rows, thin rectangles
    pub const FONT_1X2: Self = Self::new(1, 2, 1);
    /// 2 columns, 2 rows
    pub const FONT_2X2: Self = Self::new(2, 2, 1);
    /// 3 columns, 2 rows, full blocks
    pub const FONT_3X2: Self = Self::new(3, 2, 1);
    /// 3 columns, 2 rows, rounded strokes
    pub const FONT_3X2_V2: Self = Self::new(3, 2, 2);
    /// 3 columns, 2 rows, thick strokes
    pub const FONT_3X2_V3: Self = Self::new(3, 2, 3);
    /// 2 columns, 3 rows, space above
    pub const FONT_2X3: Self = Self::new(2, 3, 1);
    /// 2 columns, 3 rows, space below
    pub const FONT_2X3_V2: Self = Self::new(2, 3, 2);
    /// 3 columns, 3 rows
    pub const FONT_3X3: Self = Self::new(3, 3, 1);
    /// 3 columns, 4 rows
    pub const FONT_3X4: Self = Self::new(3, 4, 1);
    /// 3 columns, 4 rows, triangle corners
    pub const FONT_3X4_V2: Self = Self::new(3, 4, 2);

    /// All supported fonts
    pub const ALL: [Self; 10] = [
        Self::FONT_1X2,
        Self::FONT_2X2,
        Self::FONT_3X2,
        Self::FONT_3X2_V2,
        Self::FONT_3X2_V3,
        Self::FONT_2X3,
        Self::FONT_2X3_V2,
        Self::FONT_3X3,
        Self::FONT_3X4,
        Self::FONT_3X4_V2,
    ];

    /// Create a descriptor (not validated)
    pub const fn new(columns: u8, rows: u8, variant: u8) -> Self {
        Self {
            columns,
            rows,
            variant,
        }
    }

    /// Decode a one byte font identifier
    ///
    /// Layout: `0b00VV_CCRR` where each field stores its value minus one.
    pub fn from_id(id: u8) -> Result<Self, ConfigError> {
        if id & !(COLUMN_MASK | ROW_MASK | VARIANT_MASK) != 0 {
            return Err(ConfigError::UnsupportedFont);
        }
        let descriptor = Self::new(
            ((id & COLUMN_MASK) >> 2) + 1,
            (id & ROW_MASK) + 1,
            ((id & VARIANT_MASK) >> 4) + 1,
        );
        if descriptor.is_supported() {
            Ok(descriptor)
        } else {
            Err(ConfigError::UnsupportedFont)
        }
    }

    /// Encode as a one byte font identifier
    ///
    /// Only meaningful for descriptors whose fields are in 1..=4.
    pub const fn id(&self) -> u8 {
        ((self.variant.wrapping_sub(1) << 4) & VARIANT_MASK)
            | ((self.columns.wrapping_sub(1) << 2) & COLUMN_MASK)
            | (self.rows.wrapping_sub(1) & ROW_MASK)
    }

    /// Check whether a font exists for this descriptor
    pub fn is_supported(&self) -> bool {
        Self::ALL.contains(self)
    }
}

/// A big number font
///
/// All fonts are `'static`; obtain one with [`Font::get`].
#[derive(Debug)]
pub struct Font {
    descriptor: FontDescriptor,
    glyphs: &'static [Glyph],
    /// One slice per number row: 3 special symbols, then 10 digits of
    /// `columns` cells each
    layout: &'static [&'static [u8]],
    gap_by_default: bool,
}

impl Font {
    /// Look up the font for a descriptor
    pub fn get(descriptor: FontDescriptor) -> Result<&'static Font, ConfigError> {
        tables::FONTS
            .iter()
            .find(|font| font.descriptor == descriptor)
            .ok_or(ConfigError::UnsupportedFont)
    }

    /// The descriptor this font was registered under
    pub const fn descriptor(&self) -> FontDescriptor {
        self.descriptor
    }

    /// Columns occupied by one number
    pub const fn width(&self) -> u8 {
        self.descriptor.columns
    }

    /// Rows occupied by one number
    pub const fn height(&self) -> u8 {
        self.descriptor.rows
    }

    /// Custom glyphs, in CGRAM slot order
    pub const fn glyphs(&self) -> &'static [Glyph] {
        self.glyphs
    }

    /// Number of CGRAM slots this font uses
    pub const fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether numbers are followed by a blank column unless told otherwise
    ///
    /// Fonts whose strokes leave an empty pixel column on the right do
    /// not need the extra gap.
    pub const fn gap_by_default(&self) -> bool {
        self.gap_by_default
    }

    /// Character code for a cell of a digit
    ///
    /// Returns `None` for digits above 9 or cells outside the number.
    pub fn digit_cell(&self, digit: u8, row: u8, column: u8) -> Option<u8> {
        if digit > 9 || column >= self.width() {
            return None;
        }
        let offset = SPECIAL_SYMBOLS + usize::from(digit) * usize::from(self.width());
        self.cell(row, offset + usize::from(column))
    }

    /// Character code for a cell of a one column special symbol
    ///
    /// `index` is 0 for `-`, 1 for `.`, 2 for `:`.
    pub fn special_cell(&self, index: usize, row: u8) -> Option<u8> {
        if index >= SPECIAL_SYMBOLS {
            return None;
        }
        self.cell(row, index)
    }

    fn cell(&self, row: u8, offset: usize) -> Option<u8> {
        self.layout
            .get(usize::from(row))
            .and_then(|cells| cells.get(offset))
            .copied()
    }
}
