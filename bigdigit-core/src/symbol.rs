//! Input symbols understood by the renderer

/// Input byte that prints a space one column wide
pub const ONE_COLUMN_SPACE: u8 = b'|';

/// Input byte that prints a hyphen with no gap after it
pub const ONE_COLUMN_HYPHEN: u8 = b'_';

/// A decoded renderer input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// A decimal digit, 0-9
    Digit(u8),
    /// Blank as wide as a number (`' '`)
    Space,
    /// Blank one column wide (`'|'`)
    OneColumnSpace,
    /// Minus sign, followed by a gap (`'-'`)
    Hyphen,
    /// Minus sign without a gap (`'_'`)
    OneColumnHyphen,
    /// Decimal point (`'.'`)
    DecimalPoint,
    /// Colon (`':'`)
    Colon,
}

impl Symbol {
    /// Decode an input byte
    ///
    /// Accepts ASCII digits as well as the raw values 0-9.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0..=9 => Some(Self::Digit(byte)),
            b'0'..=b'9' => Some(Self::Digit(byte - b'0')),
            b' ' => Some(Self::Space),
            ONE_COLUMN_SPACE => Some(Self::OneColumnSpace),
            b'-' => Some(Self::Hyphen),
            ONE_COLUMN_HYPHEN => Some(Self::OneColumnHyphen),
            b'.' => Some(Self::DecimalPoint),
            b':' => Some(Self::Colon),
            _ => None,
        }
    }

    /// Whether the symbol spans the full number width
    pub const fn is_full_width(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Space)
    }

    /// Whether a gap column may follow the symbol
    ///
    /// On fonts one column wide every symbol is as wide as a digit, so
    /// every symbol takes a gap there.
    pub const fn takes_gap(&self, number_width: u8) -> bool {
        number_width == 1 || matches!(self, Self::Digit(_) | Self::Space | Self::Hyphen)
    }

    /// Columns occupied for a font of the given number width
    pub const fn width(&self, number_width: u8) -> u8 {
        if self.is_full_width() {
            number_width
        } else {
            1
        }
    }

    /// Index into the special symbol columns of a font layout
    pub(crate) const fn special_index(&self) -> Option<usize> {
        match self {
            Self::Hyphen | Self::OneColumnHyphen => Some(0),
            Self::DecimalPoint => Some(1),
            Self::Colon => Some(2),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Symbol {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        for d in 0..10u8 {
            assert_eq!(Symbol::from_byte(d), Some(Symbol::Digit(d)));
            assert_eq!(Symbol::from_byte(b'0' + d), Some(Symbol::Digit(d)));
        }
    }

    #[test]
    fn test_specials() {
        assert_eq!(Symbol::from_byte(b' '), Some(Symbol::Space));
        assert_eq!(Symbol::from_byte(b'|'), Some(Symbol::OneColumnSpace));
        assert_eq!(Symbol::from_byte(b'-'), Some(Symbol::Hyphen));
        assert_eq!(Symbol::from_byte(b'_'), Some(Symbol::OneColumnHyphen));
        assert_eq!(Symbol::from_byte(b'.'), Some(Symbol::DecimalPoint));
        assert_eq!(Symbol::from_byte(b':'), Some(Symbol::Colon));
    }

    #[test]
    fn test_rejects_other_bytes() {
        assert_eq!(Symbol::from_byte(b'a'), None);
        assert_eq!(Symbol::from_byte(b'A'), None);
        assert_eq!(Symbol::from_byte(10), None);
        assert_eq!(Symbol::from_byte(0xFF), None);
        assert_eq!(Symbol::try_from(b'x'), Err(b'x'));
    }

    #[test]
    fn test_widths() {
        assert_eq!(Symbol::Digit(8).width(3), 3);
        assert_eq!(Symbol::Space.width(2), 2);
        assert_eq!(Symbol::OneColumnSpace.width(3), 1);
        assert_eq!(Symbol::Hyphen.width(3), 1);
        assert_eq!(Symbol::Colon.width(3), 1);
    }

    #[test]
    fn test_gap_rules() {
        assert!(Symbol::Digit(0).takes_gap(3));
        assert!(Symbol::Space.takes_gap(2));
        assert!(Symbol::Hyphen.takes_gap(3));
        assert!(!Symbol::OneColumnHyphen.takes_gap(3));
        assert!(!Symbol::OneColumnSpace.takes_gap(2));
        assert!(!Symbol::DecimalPoint.takes_gap(3));
        assert!(!Symbol::Colon.takes_gap(3));
    }

    #[test]
    fn test_everything_takes_gap_on_narrow_fonts() {
        for byte in *b"0 |-_.:" {
            let symbol = Symbol::from_byte(byte).unwrap();
            assert!(symbol.takes_gap(1), "{:?}", symbol);
        }
    }
}
