//! Font showcase
//!
//! A fixed script that cycles through every font: all digits, the special
//! symbols and a signed decimal number. Two variants exist, one for
//! two-row displays (only the 2-row fonts, digits split across screens)
//! and one for four-row displays.

use crate::font::{ConfigError, FontDescriptor};
use crate::renderer::{BigNumberRenderer, RenderError};
use crate::traits::CharacterLcd;

/// One line of big text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Top row of the line
    pub row: u8,
    /// Renderer input
    pub text: &'static str,
}

/// One showcase screen, drawn on a cleared display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    /// Font used for every line
    pub font: FontDescriptor,
    /// Lines, top to bottom
    pub lines: &'static [Line],
}

/// Showcase errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShowcaseError<E> {
    /// The screen's font cannot be used on this display
    Config(ConfigError),
    /// Rendering failed
    Render(RenderError<E>),
}

impl<E> From<ConfigError> for ShowcaseError<E> {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl<E> From<RenderError<E>> for ShowcaseError<E> {
    fn from(e: RenderError<E>) -> Self {
        Self::Render(e)
    }
}

const fn line(row: u8, text: &'static str) -> Line {
    Line { row, text }
}

const fn screen(font: FontDescriptor, lines: &'static [Line]) -> Screen {
    Screen { font, lines }
}

/// Script for 16x2 and similar displays
pub static TWO_ROWS: [Screen; 18] = [
    screen(FontDescriptor::FONT_1X2, &[line(0, "0123456789 -.:")]),
    screen(FontDescriptor::FONT_1X2, &[line(0, "-42.38")]),
    screen(FontDescriptor::FONT_2X2, &[line(0, "01234")]),
    screen(FontDescriptor::FONT_2X2, &[line(0, "56789")]),
    screen(FontDescriptor::FONT_2X2, &[line(0, "-.: ")]),
    screen(FontDescriptor::FONT_2X2, &[line(0, "-42.38")]),
    screen(FontDescriptor::FONT_3X2, &[line(0, "0123")]),
    screen(FontDescriptor::FONT_3X2, &[line(0, "4567")]),
    screen(FontDescriptor::FONT_3X2, &[line(0, "89|-.: ")]),
    screen(FontDescriptor::FONT_3X2_V2, &[line(0, "01234")]),
    screen(FontDescriptor::FONT_3X2_V2, &[line(0, "56789")]),
    screen(FontDescriptor::FONT_3X2_V2, &[line(0, "-.: ")]),
    screen(FontDescriptor::FONT_3X2_V2, &[line(0, "-42.38:")]),
    screen(FontDescriptor::FONT_3X2_V3, &[line(0, "01234")]),
    screen(FontDescriptor::FONT_3X2_V3, &[line(0, "56789")]),
    screen(FontDescriptor::FONT_3X2_V3, &[line(0, "-.: ")]),
    screen(FontDescriptor::FONT_3X2_V3, &[line(0, "-42.38")]),
    screen(FontDescriptor::FONT_3X2_V3, &[line(0, "12:34")]),
];

/// Script for 20x4 and similar displays
pub static FOUR_ROWS: [Screen; 22] = [
    screen(
        FontDescriptor::FONT_1X2,
        &[line(0, "0123456789 -.:"), line(2, "-42.38")],
    ),
    screen(
        FontDescriptor::FONT_2X2,
        &[line(0, "01234"), line(2, "56789|-.:")],
    ),
    screen(FontDescriptor::FONT_2X2, &[line(0, "-42.38")]),
    screen(
        FontDescriptor::FONT_3X2,
        &[line(0, "01234"), line(2, "56789")],
    ),
    screen(FontDescriptor::FONT_3X2, &[line(0, "-42.38:")]),
    screen(
        FontDescriptor::FONT_3X2_V2,
        &[line(0, "01234"), line(2, "56789")],
    ),
    screen(FontDescriptor::FONT_3X2_V2, &[line(0, "-42.38:")]),
    screen(
        FontDescriptor::FONT_3X2_V3,
        &[line(0, "01234"), line(2, "56789|-.:")],
    ),
    screen(FontDescriptor::FONT_3X2_V3, &[line(0, "-42.38")]),
    screen(FontDescriptor::FONT_2X3, &[line(1, "01234")]),
    screen(FontDescriptor::FONT_2X3, &[line(1, "56789|-.:")]),
    screen(FontDescriptor::FONT_2X3, &[line(1, "-42.38")]),
    screen(FontDescriptor::FONT_2X3_V2, &[line(1, "01234")]),
    screen(FontDescriptor::FONT_2X3_V2, &[line(1, "56789|-.:")]),
    screen(FontDescriptor::FONT_2X3_V2, &[line(1, "-42.38")]),
    screen(FontDescriptor::FONT_3X3, &[line(1, "01234")]),
    screen(FontDescriptor::FONT_3X3, &[line(1, "56789")]),
    screen(FontDescriptor::FONT_3X3, &[line(1, "-42.38:")]),
    screen(FontDescriptor::FONT_3X4, &[line(0, "01234")]),
    screen(FontDescriptor::FONT_3X4, &[line(0, "56789")]),
    screen(FontDescriptor::FONT_3X4, &[line(0, "-42.38:")]),
    screen(FontDescriptor::FONT_3X4_V2, &[line(0, "-42.38:")]),
];

/// Pick the script for a display height
pub fn script(rows: u8) -> &'static [Screen] {
    if rows >= 4 {
        &FOUR_ROWS
    } else {
        &TWO_ROWS
    }
}

/// Draw one screen
///
/// Clears the display and switches fonts (reloading glyphs) only when the
/// screen uses a different font than the renderer. Returns the number of
/// cells written.
pub fn render_screen<L: CharacterLcd>(
    renderer: &mut BigNumberRenderer<L>,
    screen: &Screen,
) -> Result<usize, ShowcaseError<L::Error>> {
    renderer
        .lcd_mut()
        .clear()
        .map_err(|e| ShowcaseError::Render(RenderError::Lcd(e)))?;

    if renderer.font().descriptor() != screen.font {
        renderer.initialize(screen.font)?;
        renderer
            .begin()
            .map_err(|e| ShowcaseError::Render(RenderError::Lcd(e)))?;
    }

    let mut cells = 0;
    for line in screen.lines {
        renderer.set_cursor(0, line.row);
        cells += renderer.print(line.text)?;
    }
    Ok(cells)
}
