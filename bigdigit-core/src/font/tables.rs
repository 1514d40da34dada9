//! Static glyph bitmaps and cell layouts
//!
//! Layout rows list `-`, `.`, `:` followed by the digits 0-9, each digit
//! `columns` cells wide. Values below 8 are CGRAM slots, everything else is
//! an HD44780 A00 ROM code.

use super::{FontDescriptor, Font, Glyph};

/// Every font known to the renderer
pub(super) static FONTS: [Font; 10] = [
    Font {
        descriptor: FontDescriptor::FONT_1X2,
        glyphs: &GLYPHS_1X2,
        layout: &LAYOUT_1X2,
        gap_by_default: false,
    },
    Font {
        descriptor: FontDescriptor::FONT_2X2,
        glyphs: &GLYPHS_2X2,
        layout: &LAYOUT_2X2,
        gap_by_default: true,
    },
    Font {
        descriptor: FontDescriptor::FONT_3X2,
        glyphs: &GLYPHS_3X2_BLOCK,
        layout: &LAYOUT_3X2_BLOCK,
        gap_by_default: true,
    },
    Font {
        descriptor: FontDescriptor::FONT_3X2_V2,
        glyphs: &GLYPHS_3X2_ROUND,
        layout: &LAYOUT_3X2_ROUND,
        gap_by_default: false,
    },
    Font {
        descriptor: FontDescriptor::FONT_3X2_V3,
        glyphs: &GLYPHS_3X2_THICK,
        layout: &LAYOUT_3X2_THICK,
        gap_by_default: false,
    },
    Font {
        descriptor: FontDescriptor::FONT_2X3,
        glyphs: &GLYPHS_2X3_LOW,
        layout: &LAYOUT_2X3_LOW,
        gap_by_default: true,
    },
    Font {
        descriptor: FontDescriptor::FONT_2X3_V2,
        glyphs: &GLYPHS_2X3_HIGH,
        layout: &LAYOUT_2X3_HIGH,
        gap_by_default: true,
    },
    Font {
        descriptor: FontDescriptor::FONT_3X3,
        glyphs: &GLYPHS_3X3_3X4,
        layout: &LAYOUT_3X3,
        gap_by_default: true,
    },
    Font {
        descriptor: FontDescriptor::FONT_3X4,
        glyphs: &GLYPHS_3X3_3X4,
        layout: &LAYOUT_3X4,
        gap_by_default: true,
    },
    Font {
        descriptor: FontDescriptor::FONT_3X4_V2,
        glyphs: &GLYPHS_3X4_TRIANGLE,
        layout: &LAYOUT_3X4_TRIANGLE,
        gap_by_default: true,
    },
];

// 1x2: thin rectangles, one pixel column of spacing built in
static GLYPHS_1X2: [Glyph; 8] = [
    [0b11110, 0b10010, 0b10010, 0b10010, 0b10010, 0b10010, 0b10010, 0b11110], // closed rectangle
    [0b11110, 0b10010, 0b10010, 0b10010, 0b10010, 0b10010, 0b10010, 0b10010], // open at bottom
    [0b10010, 0b10010, 0b10010, 0b10010, 0b10010, 0b10010, 0b10010, 0b11110], // open at top
    [0b11110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b11110], // open at left
    [0b11110, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11110], // open at right
    [0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010], // right bar
    [0b11110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010], // top right
    [0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b11110], // bottom right
];

#[rustfmt::skip]
static LAYOUT_1X2: [&[u8]; 2] = [
    //  -     .     :     0     1     2     3     4     5     6     7     8     9
    &[0x5F, 0xFE, 0xA5, 0x01, 0x05, 0x06, 0x03, 0x02, 0x04, 0x04, 0x06, 0x00, 0x00],
    &[0xFE, 0x2E, 0xA5, 0x02, 0x05, 0x04, 0x07, 0x05, 0x07, 0x02, 0x05, 0x02, 0x07],
];

// 2x2: "Trek" style, the zero needs a ROM full block
static GLYPHS_2X2: [Glyph; 8] = [
    [0b11111, 0b11111, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    [0b11000, 0b11000, 0b11000, 0b11000, 0b11000, 0b11000, 0b11000, 0b11000],
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111, 0b11111],
    [0b11111, 0b11111, 0b00011, 0b00011, 0b00011, 0b00011, 0b11111, 0b11111],
    [0b11111, 0b11111, 0b11000, 0b11000, 0b11000, 0b11000, 0b11111, 0b11111],
    [0b11111, 0b11111, 0b11000, 0b11000, 0b11000, 0b11000, 0b11000, 0b11000],
    [0b00011, 0b00011, 0b00011, 0b00011, 0b00011, 0b00011, 0b11111, 0b11111],
    [0b11000, 0b11000, 0b11000, 0b11000, 0b11000, 0b11000, 0b11111, 0b11111],
];

#[rustfmt::skip]
static LAYOUT_2X2: [&[u8]; 2] = [
    //  -     .     :     0           1           2           3           4           5           6           7           8           9
    &[0xFE, 0xFE, 0xA5, 0x05, 0xFF, 0x00, 0x01, 0x00, 0x03, 0x00, 0x03, 0x01, 0x01, 0x04, 0x00, 0x05, 0x00, 0x00, 0x03, 0x04, 0x03, 0x04, 0x03],
    &[0x00, 0x2E, 0xA5, 0x07, 0x06, 0x02, 0x07, 0x04, 0x02, 0x02, 0x03, 0x00, 0x05, 0x02, 0x03, 0x04, 0x03, 0xFE, 0x01, 0x04, 0x03, 0x02, 0x06],
];

// 3x2 with ROM full blocks for the verticals
static GLYPHS_3X2_BLOCK: [Glyph; 6] = [
    [0b11111, 0b11111, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000], // upper bar
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111, 0b11111], // lower bar
    [0b11111, 0b11111, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111, 0b11111], // upper and lower bar
    [0b00000, 0b00000, 0b00000, 0b11111, 0b11111, 0b00000, 0b00000, 0b00000], // minus
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01110, 0b01110, 0b01110], // decimal point
    [0b00000, 0b00000, 0b01110, 0b01110, 0b01110, 0b00000, 0b00000, 0b00000], // colon dot
];

#[rustfmt::skip]
static LAYOUT_3X2_BLOCK: [&[u8]; 2] = [
    //  -     .     :     0                 1                 2                 3                 4                 5                 6                 7                 8                 9
    &[0x01, 0xFE, 0x05, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0xFE, 0x02, 0x02, 0xFF, 0x00, 0x02, 0xFF, 0xFF, 0x01, 0xFF, 0xFF, 0x02, 0x02, 0xFF, 0x02, 0x02, 0x00, 0x00, 0xFF, 0xFF, 0x02, 0xFF, 0xFF, 0x02, 0xFF],
    &[0xFE, 0x04, 0x05, 0xFF, 0x01, 0xFF, 0x01, 0xFF, 0x01, 0xFF, 0x01, 0x01, 0x01, 0x01, 0xFF, 0xFE, 0xFE, 0xFF, 0x01, 0x01, 0xFF, 0xFF, 0x01, 0xFF, 0xFE, 0xFE, 0xFF, 0xFF, 0x01, 0xFF, 0x01, 0x01, 0xFF],
];

// 3x2 with rounded corners, strokes leave the right pixel column free
static GLYPHS_3X2_ROUND: [Glyph; 8] = [
    [0b11100, 0b11110, 0b11110, 0b11110, 0b11110, 0b11110, 0b11110, 0b11100], // left bar
    [0b00111, 0b01111, 0b01111, 0b01111, 0b01111, 0b01111, 0b01111, 0b00111], // right bar
    [0b11111, 0b11111, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111, 0b11111], // upper and lower bar
    [0b11110, 0b11100, 0b00000, 0b00000, 0b00000, 0b00000, 0b11000, 0b11100], // left upper and lower rounded
    [0b01111, 0b00111, 0b00000, 0b00000, 0b00000, 0b00000, 0b00011, 0b00111], // right upper and lower rounded
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111, 0b11111], // lower bar
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00111, 0b01111], // lower bar rounded
    [0b11111, 0b11111, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000], // upper bar
];

#[rustfmt::skip]
static LAYOUT_3X2_ROUND: [&[u8]; 2] = [
    //  -     .     :     0                 1                 2                 3                 4                 5                 6                 7                 8                 9
    &[0xFE, 0xFE, 0xA5, 0x01, 0x07, 0x00, 0xFE, 0x00, 0xFE, 0x04, 0x02, 0x00, 0x04, 0x02, 0x00, 0x01, 0x05, 0x00, 0x01, 0x02, 0x03, 0x01, 0x02, 0x03, 0x01, 0x07, 0x00, 0x01, 0x02, 0x00, 0x01, 0x02, 0x00],
    &[0x07, 0x06, 0xA5, 0x01, 0x05, 0x00, 0xFE, 0x00, 0xFE, 0x01, 0x05, 0x05, 0x06, 0x05, 0x00, 0xFE, 0xFE, 0x00, 0x06, 0x05, 0x00, 0x01, 0x05, 0x00, 0xFE, 0xFE, 0x00, 0x01, 0x05, 0x00, 0x06, 0x05, 0x00],
];

// 3x2 with three pixel thick strokes
static GLYPHS_3X2_THICK: [Glyph; 8] = [
    [0b11111, 0b11111, 0b11111, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000], // upper bar
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111, 0b11111, 0b11111], // lower bar
    [0b11111, 0b11111, 0b11111, 0b00000, 0b00000, 0b00000, 0b11111, 0b11111], // upper and lower bar
    [0b11100, 0b11100, 0b11100, 0b11100, 0b11100, 0b11100, 0b11100, 0b11100], // left bar
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11100, 0b11100, 0b11100], // left lower bar
    [0b11100, 0b11100, 0b11100, 0b00000, 0b00000, 0b00000, 0b11100, 0b11100], // left upper and lower bar
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01110, 0b01110, 0b01110], // decimal point
    [0b00000, 0b00000, 0b01110, 0b01110, 0b01110, 0b00000, 0b00000, 0b00000], // colon dot
];

#[rustfmt::skip]
static LAYOUT_3X2_THICK: [&[u8]; 2] = [
    //  -     .     :     0                 1                 2                 3                 4                 5                 6                 7                 8                 9
    &[0x01, 0xFE, 0x07, 0xFF, 0x00, 0x03, 0x00, 0x03, 0xFE, 0x02, 0x02, 0x03, 0x02, 0x02, 0x03, 0xFF, 0x01, 0x03, 0xFF, 0x02, 0x05, 0xFF, 0x02, 0x05, 0x00, 0x00, 0x03, 0xFF, 0x02, 0x03, 0xFF, 0x02, 0x03],
    &[0xFE, 0x06, 0x07, 0xFF, 0x01, 0x03, 0xFE, 0x03, 0xFE, 0xFF, 0x01, 0x04, 0x01, 0x01, 0x03, 0xFE, 0xFE, 0x03, 0x01, 0x01, 0x03, 0xFF, 0x01, 0x03, 0xFE, 0xFE, 0x03, 0xFF, 0x01, 0x03, 0xFE, 0xFE, 0x03],
];

// 2x3 with an empty band above each number
static GLYPHS_2X3_LOW: [Glyph; 8] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x07, 0x07], // bottom right
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x1C, 0x1C, 0x1C], // bottom left
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F], // bottom block
    [0x07, 0x07, 0x07, 0x07, 0x07, 0x1F, 0x1F, 0x1F], // right bottom block
    [0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x1F, 0x1F, 0x1F], // left bottom block
    [0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C], // left bar
    [0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07], // right bar
    [0x00, 0x00, 0x0E, 0x0E, 0x0E, 0x00, 0x00, 0x00], // colon dot
];

#[rustfmt::skip]
static LAYOUT_2X3_LOW: [&[u8]; 3] = [
    //  -     .     :     0           1           2           3           4           5           6           7           8           9
    &[0xFE, 0xFE, 0xFE, 0x02, 0x02, 0x00, 0x01, 0x02, 0x02, 0x02, 0x02, 0x01, 0x00, 0x02, 0x02, 0x01, 0xFE, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02],
    &[0x02, 0xFE, 0x07, 0x05, 0x06, 0xFE, 0x05, 0x02, 0x03, 0x00, 0x03, 0x04, 0x03, 0x04, 0x02, 0x04, 0x02, 0xFE, 0x06, 0x04, 0x03, 0x04, 0x03],
    &[0xFE, 0x01, 0x07, 0x04, 0x03, 0x00, 0x04, 0x04, 0x02, 0x02, 0x03, 0xFE, 0x06, 0x02, 0x03, 0x04, 0x03, 0xFE, 0x06, 0x04, 0x03, 0xFE, 0x06],
];

// 2x3 with an empty band below each number
static GLYPHS_2X3_HIGH: [Glyph; 8] = [
    [0x07, 0x07, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00], // top right
    [0x1C, 0x1C, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00], // top left
    [0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00], // top block
    [0x1F, 0x1F, 0x1F, 0x07, 0x07, 0x07, 0x07, 0x07], // right top block
    [0x1F, 0x1F, 0x1F, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C], // left top block
    [0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C], // left bar
    [0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07], // right bar
    [0x00, 0x00, 0x0E, 0x0E, 0x0E, 0x00, 0x00, 0x00], // colon dot
];

#[rustfmt::skip]
static LAYOUT_2X3_HIGH: [&[u8]; 3] = [
    //  -     .     :     0           1           2           3           4           5           6           7           8           9
    &[0xFE, 0xFE, 0x07, 0x04, 0x03, 0x00, 0x05, 0x02, 0x03, 0x02, 0x03, 0x05, 0x06, 0x04, 0x02, 0x05, 0xFE, 0x02, 0x03, 0x04, 0x03, 0x04, 0x03],
    &[0x02, 0xFE, 0x07, 0x05, 0x06, 0xFE, 0x05, 0x04, 0x02, 0x00, 0x03, 0x02, 0x03, 0x02, 0x03, 0x04, 0x03, 0xFE, 0x06, 0x04, 0x03, 0x02, 0x03],
    &[0xFE, 0x01, 0xFE, 0x02, 0x02, 0x00, 0x02, 0x02, 0x02, 0x02, 0x02, 0xFE, 0x00, 0x02, 0x02, 0x02, 0x02, 0xFE, 0x00, 0x02, 0x02, 0xFE, 0x00],
];

// Shared by 3x3 and 3x4, uses ROM full blocks
static GLYPHS_3X3_3X4: [Glyph; 8] = [
    [0x01, 0x07, 0x0F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F], // bottom right triangle
    [0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F], // bottom block
    [0x10, 0x1C, 0x1E, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F], // bottom left triangle
    [0x1F, 0x0F, 0x07, 0x01, 0x00, 0x00, 0x00, 0x00], // top right triangle
    [0x1F, 0x1E, 0x1C, 0x10, 0x00, 0x00, 0x00, 0x00], // top left triangle
    [0x1F, 0x1F, 0x1F, 0x1F, 0x00, 0x00, 0x00, 0x00], // upper block
    [0x10, 0x1C, 0x1E, 0x1F, 0x00, 0x00, 0x00, 0x00], // full top left triangle
    [0x01, 0x07, 0x0F, 0x1F, 0x00, 0x00, 0x00, 0x00], // top right triangle, upper half
];

#[rustfmt::skip]
static LAYOUT_3X3: [&[u8]; 3] = [
    //  -     .     :     0                 1                 2                 3                 4                 5                 6                 7                 8                 9
    &[0xFE, 0xFE, 0x01, 0x00, 0x05, 0x02, 0x07, 0xFF, 0xFE, 0x07, 0x05, 0x02, 0x07, 0x05, 0x02, 0xFF, 0xFE, 0xFF, 0xFF, 0x05, 0x05, 0x00, 0x05, 0x06, 0x05, 0x05, 0xFF, 0x00, 0x05, 0x02, 0x00, 0x05, 0x02],
    &[0x05, 0xFE, 0x01, 0xFF, 0xFE, 0xFF, 0xFE, 0xFF, 0xFE, 0x00, 0x05, 0x05, 0xFE, 0x05, 0xFF, 0x05, 0x05, 0xFF, 0x05, 0x05, 0xFF, 0xFF, 0x05, 0x02, 0xFE, 0x00, 0x04, 0xFF, 0x05, 0xFF, 0x03, 0x05, 0xFF],
    &[0xFE, 0x05, 0xFE, 0x03, 0x05, 0x04, 0xFE, 0x05, 0xFE, 0x05, 0x05, 0x05, 0x03, 0x05, 0x04, 0xFE, 0xFE, 0x05, 0x03, 0x05, 0x04, 0x03, 0x05, 0x04, 0xFE, 0x05, 0xFE, 0x03, 0x05, 0x04, 0x03, 0x05, 0x04],
];

#[rustfmt::skip]
static LAYOUT_3X4: [&[u8]; 4] = [
    //  -     .     :     0                 1                 2                 3                 4                 5                 6                 7                 8                 9
    &[0xFE, 0xFE, 0xFE, 0x00, 0x05, 0x02, 0x07, 0xFF, 0xFE, 0x07, 0x05, 0x02, 0x07, 0x05, 0x02, 0xFF, 0xFE, 0xFF, 0xFF, 0x05, 0x05, 0x00, 0x05, 0x02, 0x05, 0x05, 0xFF, 0x00, 0x05, 0x02, 0x00, 0x05, 0x02],
    &[0x01, 0xFE, 0x05, 0xFF, 0xFE, 0xFF, 0xFE, 0xFF, 0xFE, 0x01, 0x01, 0xFF, 0xFE, 0x01, 0xFF, 0xFF, 0x01, 0xFF, 0xFF, 0x01, 0x01, 0xFF, 0x01, 0x01, 0xFE, 0x00, 0x04, 0xFF, 0x01, 0xFF, 0xFF, 0x01, 0xFF],
    &[0xFE, 0xFE, 0x01, 0xFF, 0xFE, 0xFF, 0xFE, 0xFF, 0xFE, 0xFF, 0xFE, 0xFE, 0xFE, 0xFE, 0xFF, 0xFE, 0xFE, 0xFF, 0xFE, 0xFE, 0xFF, 0xFF, 0xFE, 0xFF, 0xFE, 0xFF, 0xFE, 0xFF, 0xFE, 0xFF, 0xFE, 0xFE, 0xFF],
    &[0xFE, 0x05, 0xFE, 0x03, 0x05, 0x04, 0xFE, 0x05, 0xFE, 0x05, 0x05, 0x05, 0x03, 0x05, 0x04, 0xFE, 0xFE, 0x05, 0x03, 0x05, 0x04, 0x03, 0x05, 0x04, 0xFE, 0x05, 0xFE, 0x03, 0x05, 0x04, 0x03, 0x05, 0x04],
];

// 3x4 with triangle corners on every digit
static GLYPHS_3X4_TRIANGLE: [Glyph; 8] = [
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00001, 0b00111, 0b01111, 0b11111], // bottom right triangle
    [0b00000, 0b00000, 0b00000, 0b00000, 0b11111, 0b11111, 0b11111, 0b11111], // bottom block
    [0b00000, 0b00000, 0b00000, 0b00000, 0b10000, 0b11100, 0b11110, 0b11111], // bottom left triangle
    [0b11111, 0b01111, 0b00111, 0b00001, 0b00000, 0b00000, 0b00000, 0b00000], // top right triangle
    [0b11111, 0b11111, 0b11111, 0b11111, 0b00000, 0b00000, 0b00000, 0b00000], // upper block
    [0b11111, 0b11110, 0b11100, 0b10000, 0b00000, 0b00000, 0b00000, 0b00000], // top left triangle
    [0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b01111, 0b00111, 0b00001], // full top right triangle
    [0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11110, 0b11100, 0b10000], // full top left triangle
];

#[rustfmt::skip]
static LAYOUT_3X4_TRIANGLE: [&[u8]; 4] = [
    //  -     .     :     0                 1                 2                 3                 4                 5                 6                 7                 8                 9
    &[0xFE, 0xFE, 0xFE, 0x00, 0x01, 0x02, 0x00, 0x01, 0xFE, 0x00, 0x01, 0x02, 0x00, 0x01, 0x02, 0x00, 0xFE, 0x01, 0x01, 0x01, 0x01, 0x00, 0x01, 0x02, 0x01, 0x01, 0x01, 0x00, 0x01, 0x02, 0x00, 0x01, 0x02],
    &[0x01, 0xFE, 0x04, 0xFF, 0x00, 0xFF, 0x05, 0xFF, 0xFE, 0x04, 0x00, 0x07, 0x04, 0x00, 0x07, 0xFF, 0xFE, 0xFF, 0x06, 0x01, 0x02, 0xFF, 0x01, 0x02, 0xFE, 0x00, 0x07, 0x06, 0x01, 0x07, 0x06, 0x01, 0xFF],
    &[0xFE, 0xFE, 0x01, 0xFF, 0x05, 0xFF, 0xFE, 0xFF, 0xFE, 0xFF, 0x05, 0xFE, 0x01, 0x03, 0xFF, 0x04, 0x04, 0xFF, 0x01, 0xFE, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0x05, 0xFE, 0xFF, 0xFE, 0xFF, 0xFE, 0xFE, 0xFF],
    &[0xFE, 0x04, 0xFE, 0x03, 0x04, 0x05, 0xFE, 0x04, 0xFE, 0x04, 0x04, 0x04, 0x03, 0x04, 0x05, 0xFE, 0xFE, 0x04, 0x03, 0x04, 0x05, 0x03, 0x04, 0x05, 0x04, 0xFE, 0xFE, 0x03, 0x04, 0x05, 0x03, 0x04, 0x05],
];
