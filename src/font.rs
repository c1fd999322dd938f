//! Bitmap font.
//!
//! Embeds an 8x16 font covering printable ASCII (space through `~`, 95 glyphs).
//! Each glyph is 16 bytes, one byte per scanline, MSB = leftmost pixel.
//! The glyph data is in the public domain.

use crate::error::TextError;

pub const CHAR_WIDTH: usize = 8;
pub const CHAR_HEIGHT: usize = 16;

/// First character code covered by the table.
pub const FIRST_CHAR: u8 = b' ';
/// Last character code covered by the table.
pub const LAST_CHAR: u8 = b'~';
pub const GLYPH_COUNT: usize = (LAST_CHAR - FIRST_CHAR) as usize + 1;

/// One glyph: a scanline per byte, top to bottom.
pub type Glyph = [u8; CHAR_HEIGHT];

/// Look up the glyph for `c`.
///
/// Only printable ASCII has a glyph; anything else is rejected rather than
/// read from whatever follows the table.
#[inline]
pub fn glyph(c: u8) -> Result<&'static Glyph, TextError> {
    match c {
        FIRST_CHAR..=LAST_CHAR => Ok(&FONT_DATA[(c - FIRST_CHAR) as usize]),
        _ => Err(TextError::UnsupportedChar(c)),
    }
}

/// Whether `c` has a glyph in the table.
#[inline]
pub const fn is_printable(c: u8) -> bool {
    c >= FIRST_CHAR && c <= LAST_CHAR
}

/// Whether the pixel at `col` of `scanline` is set.
#[inline]
pub const fn pixel_set(scanline: u8, col: usize) -> bool {
    (scanline >> (CHAR_WIDTH - 1 - col)) & 1 != 0
}

pub static FONT_DATA: [Glyph; GLYPH_COUNT] = [
    // space
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '!'
    [
        0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
        0x10, 0x10, 0x00, 0x00, 0x10, 0x10, 0x00, 0x00,
    ],
    // '"'
    [
        0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '#'
    [
        0x24, 0x24, 0x24, 0x24, 0x7E, 0x7E, 0x24, 0x24,
        0x7E, 0x7E, 0x24, 0x24, 0x24, 0x24, 0x00, 0x00,
    ],
    // '$'
    [
        0x10, 0x10, 0x3C, 0x3C, 0x50, 0x50, 0x38, 0x38,
        0x14, 0x14, 0x78, 0x78, 0x10, 0x10, 0x00, 0x00,
    ],
    // '%'
    [
        0x00, 0x00, 0x62, 0x62, 0x64, 0x64, 0x08, 0x08,
        0x10, 0x10, 0x26, 0x26, 0x46, 0x46, 0x00, 0x00,
    ],
    // '&'
    [
        0x30, 0x30, 0x48, 0x48, 0x48, 0x48, 0x30, 0x30,
        0x4A, 0x4A, 0x44, 0x44, 0x3A, 0x3A, 0x00, 0x00,
    ],
    // '''
    [
        0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '('
    [
        0x10, 0x10, 0x20, 0x20, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x20, 0x20, 0x10, 0x10, 0x00, 0x00,
    ],
    // ')'
    [
        0x10, 0x10, 0x08, 0x08, 0x04, 0x04, 0x04, 0x04,
        0x04, 0x04, 0x08, 0x08, 0x10, 0x10, 0x00, 0x00,
    ],
    // '*'
    [
        0x10, 0x10, 0x54, 0x54, 0x38, 0x38, 0x10, 0x10,
        0x38, 0x38, 0x54, 0x54, 0x10, 0x10, 0x00, 0x00,
    ],
    // '+'
    [
        0x00, 0x00, 0x10, 0x10, 0x10, 0x10, 0x7C, 0x7C,
        0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00,
    ],
    // ','
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x08, 0x08, 0x08, 0x08, 0x10, 0x10, 0x00, 0x00,
    ],
    // '-'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x7E,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '.'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x00, 0x00,
    ],
    // '/'
    [
        0x00, 0x00, 0x02, 0x02, 0x04, 0x04, 0x08, 0x08,
        0x10, 0x10, 0x20, 0x20, 0x40, 0x40, 0x00, 0x00,
    ],
    // '0'
    [
        0x3C, 0x3C, 0x42, 0x42, 0x46, 0x46, 0x5A, 0x5A,
        0x62, 0x62, 0x42, 0x42, 0x3C, 0x3C, 0x00, 0x00,
    ],
    // '1'
    [
        0x08, 0x08, 0x18, 0x18, 0x08, 0x08, 0x08, 0x08,
        0x08, 0x08, 0x08, 0x08, 0x1C, 0x1C, 0x00, 0x00,
    ],
    // '2'
    [
        0x3C, 0x3C, 0x42, 0x42, 0x02, 0x02, 0x1C, 0x1C,
        0x20, 0x20, 0x40, 0x40, 0x7E, 0x7E, 0x00, 0x00,
    ],
    // '3'
    [
        0x7E, 0x7E, 0x02, 0x02, 0x04, 0x04, 0x1C, 0x1C,
        0x02, 0x02, 0x42, 0x42, 0x3C, 0x3C, 0x00, 0x00,
    ],
    // '4'
    [
        0x04, 0x04, 0x0C, 0x0C, 0x14, 0x14, 0x24, 0x24,
        0x7E, 0x7E, 0x04, 0x04, 0x04, 0x04, 0x00, 0x00,
    ],
    // '5'
    [
        0x7E, 0x7E, 0x40, 0x40, 0x7C, 0x7C, 0x02, 0x02,
        0x02, 0x02, 0x42, 0x42, 0x3C, 0x3C, 0x00, 0x00,
    ],
    // '6'
    [
        0x1E, 0x1E, 0x20, 0x20, 0x40, 0x40, 0x7C, 0x7C,
        0x42, 0x42, 0x42, 0x42, 0x3C, 0x3C, 0x00, 0x00,
    ],
    // '7'
    [
        0x7E, 0x7E, 0x02, 0x02, 0x04, 0x04, 0x08, 0x08,
        0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00,
    ],
    // '8'
    [
        0x3C, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x3C,
        0x42, 0x42, 0x42, 0x42, 0x3C, 0x3C, 0x00, 0x00,
    ],
    // '9'
    [
        0x3C, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3E, 0x3E,
        0x02, 0x02, 0x04, 0x04, 0x78, 0x78, 0x00, 0x00,
    ],
    // ':'
    [
        0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x00, 0x00,
        0x10, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // ';'
    [
        0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x00, 0x00,
        0x08, 0x08, 0x08, 0x08, 0x10, 0x00, 0x00, 0x00,
    ],
    // '<'
    [
        0x04, 0x04, 0x08, 0x08, 0x10, 0x10, 0x20, 0x20,
        0x10, 0x10, 0x08, 0x08, 0x04, 0x04, 0x00, 0x00,
    ],
    // '='
    [
        0x00, 0x00, 0x00, 0x00, 0x7E, 0x7E, 0x00, 0x00,
        0x7E, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '>'
    [
        0x20, 0x20, 0x10, 0x10, 0x08, 0x08, 0x04, 0x04,
        0x08, 0x08, 0x10, 0x10, 0x20, 0x20, 0x00, 0x00,
    ],
    // '?'
    [
        0x20, 0x20, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '@'
    [
        0x3C, 0x3C, 0x42, 0x42, 0x4A, 0x4A, 0x56, 0x56,
        0x4C, 0x4C, 0x40, 0x40, 0x3E, 0x3E, 0x00, 0x00,
    ],
    // 'A'
    [
        0x18, 0x18, 0x24, 0x24, 0x42, 0x42, 0x42, 0x42,
        0x7E, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'B'
    [
        0x7C, 0x7C, 0x42, 0x42, 0x42, 0x42, 0x7C, 0x7C,
        0x42, 0x42, 0x42, 0x42, 0x7C, 0x7C, 0x00, 0x00,
    ],
    // 'C'
    [
        0x3C, 0x3C, 0x42, 0x42, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x42, 0x42, 0x3C, 0x3C, 0x00, 0x00,
    ],
    // 'D'
    [
        0x7C, 0x7C, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42,
        0x42, 0x42, 0x42, 0x42, 0x7C, 0x7C, 0x00, 0x00,
    ],
    // 'E'
    [
        0x7E, 0x7E, 0x40, 0x40, 0x40, 0x40, 0x7C, 0x7C,
        0x40, 0x40, 0x40, 0x40, 0x7E, 0x7E, 0x00, 0x00,
    ],
    // 'F'
    [
        0x7E, 0x7E, 0x40, 0x40, 0x40, 0x40, 0x7C, 0x7C,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00,
    ],
    // 'G'
    [
        0x3E, 0x3E, 0x40, 0x40, 0x40, 0x40, 0x40, 0x4E,
        0x4E, 0x42, 0x42, 0x42, 0x3E, 0x3E, 0x00, 0x00,
    ],
    // 'H'
    [
        0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x7E,
        0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'I'
    [
        0x38, 0x38, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
        0x10, 0x10, 0x10, 0x10, 0x38, 0x38, 0x00, 0x00,
    ],
    // 'J'
    [
        0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02,
        0x02, 0x02, 0x42, 0x42, 0x3C, 0x3C, 0x00, 0x00,
    ],
    // 'K'
    [
        0x42, 0x42, 0x44, 0x44, 0x48, 0x48, 0x70, 0x70,
        0x48, 0x48, 0x44, 0x44, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'L'
    [
        0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0x7E, 0x7E, 0x00, 0x00,
    ],
    // 'M'
    [
        0x42, 0x42, 0x66, 0x66, 0x5A, 0x5A, 0x5A, 0x5A,
        0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'N'
    [
        0x42, 0x42, 0x62, 0x62, 0x52, 0x52, 0x5A, 0x5A,
        0x4A, 0x4A, 0x46, 0x46, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'O'
    [
        0x3C, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42,
        0x42, 0x42, 0x42, 0x42, 0x3C, 0x3C, 0x00, 0x00,
    ],
    // 'P'
    [
        0x7C, 0x7C, 0x42, 0x42, 0x42, 0x42, 0x7C, 0x7C,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00,
    ],
    // 'Q'
    [
        0x3C, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42,
        0x4A, 0x4A, 0x44, 0x44, 0x3A, 0x3A, 0x00, 0x00,
    ],
    // 'R'
    [
        0x7C, 0x7C, 0x42, 0x42, 0x42, 0x42, 0x7C, 0x7C,
        0x48, 0x48, 0x44, 0x44, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'S'
    [
        0x3C, 0x3C, 0x42, 0x42, 0x40, 0x40, 0x3C, 0x3C,
        0x02, 0x02, 0x42, 0x42, 0x3C, 0x3C, 0x00, 0x00,
    ],
    // 'T'
    [
        0x7C, 0x7C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
        0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00,
    ],
    // 'U'
    [
        0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42,
        0x42, 0x42, 0x42, 0x42, 0x3C, 0x3C, 0x00, 0x00,
    ],
    // 'V'
    [
        0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42,
        0x42, 0x42, 0x24, 0x24, 0x18, 0x18, 0x00, 0x00,
    ],
    // 'W'
    [
        0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x5A, 0x5A,
        0x5A, 0x5A, 0x66, 0x66, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'X'
    [
        0x42, 0x42, 0x42, 0x42, 0x24, 0x24, 0x18, 0x18,
        0x24, 0x24, 0x42, 0x42, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'Y'
    [
        0x44, 0x44, 0x44, 0x44, 0x28, 0x28, 0x10, 0x10,
        0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00,
    ],
    // 'Z'
    [
        0x7E, 0x7E, 0x02, 0x02, 0x04, 0x04, 0x18, 0x18,
        0x20, 0x20, 0x40, 0x40, 0x7E, 0x7E, 0x00, 0x00,
    ],
    // '['
    [
        0x7E, 0x7E, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60,
        0x60, 0x60, 0x60, 0x60, 0x7E, 0x7E, 0x00, 0x00,
    ],
    // '\'
    [
        0x00, 0x00, 0x40, 0x40, 0x20, 0x20, 0x10, 0x10,
        0x08, 0x08, 0x04, 0x04, 0x02, 0x02, 0x00, 0x00,
    ],
    // ']'
    [
        0x7E, 0x7E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06,
        0x06, 0x06, 0x06, 0x06, 0x7E, 0x7E, 0x00, 0x00,
    ],
    // '^'
    [
        0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x28, 0x28,
        0x44, 0x44, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '_'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x7E, 0x7E, 0x00, 0x00,
    ],
    // '`'
    [
        0x20, 0x20, 0x10, 0x10, 0x08, 0x08, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'a'
    [
        0x00, 0x00, 0x00, 0x00, 0x3C, 0x3C, 0x02, 0x02,
        0x3E, 0x3E, 0x42, 0x42, 0x3E, 0x3E, 0x00, 0x00,
    ],
    // 'b'
    [
        0x40, 0x40, 0x40, 0x40, 0x7C, 0x7C, 0x42, 0x42,
        0x42, 0x42, 0x42, 0x42, 0x7C, 0x7C, 0x00, 0x00,
    ],
    // 'c'
    [
        0x00, 0x00, 0x00, 0x00, 0x3E, 0x3E, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0x3E, 0x3E, 0x00, 0x00,
    ],
    // 'd'
    [
        0x02, 0x02, 0x02, 0x02, 0x3E, 0x3E, 0x42, 0x42,
        0x42, 0x42, 0x42, 0x42, 0x3E, 0x3E, 0x00, 0x00,
    ],
    // 'e'
    [
        0x00, 0x00, 0x00, 0x00, 0x3C, 0x3C, 0x42, 0x42,
        0x7E, 0x7E, 0x40, 0x40, 0x3E, 0x3E, 0x00, 0x00,
    ],
    // 'f'
    [
        0x1C, 0x1C, 0x22, 0x22, 0x20, 0x20, 0x7C, 0x7C,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00,
    ],
    // 'g'
    [
        0x00, 0x00, 0x00, 0x00, 0x3C, 0x3C, 0x42, 0x42,
        0x42, 0x42, 0x3E, 0x3E, 0x02, 0x02, 0x3C, 0x3C,
    ],
    // 'h'
    [
        0x40, 0x40, 0x40, 0x40, 0x7C, 0x7C, 0x42, 0x42,
        0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'i'
    [
        0x10, 0x10, 0x00, 0x00, 0x30, 0x30, 0x10, 0x10,
        0x10, 0x10, 0x10, 0x10, 0x38, 0x38, 0x00, 0x00,
    ],
    // 'j'
    [
        0x04, 0x04, 0x00, 0x00, 0x3C, 0x3C, 0x04, 0x04,
        0x04, 0x04, 0x04, 0x04, 0x44, 0x44, 0x38, 0x38,
    ],
    // 'k'
    [
        0x40, 0x40, 0x40, 0x40, 0x42, 0x42, 0x44, 0x44,
        0x78, 0x78, 0x44, 0x44, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'l'
    [
        0x30, 0x30, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
        0x10, 0x10, 0x10, 0x10, 0x38, 0x38, 0x00, 0x00,
    ],
    // 'm'
    [
        0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0x5A, 0x5A,
        0x5A, 0x5A, 0x5A, 0x5A, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'n'
    [
        0x00, 0x00, 0x00, 0x00, 0x7C, 0x7C, 0x42, 0x42,
        0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'o'
    [
        0x00, 0x00, 0x00, 0x00, 0x3C, 0x3C, 0x42, 0x42,
        0x42, 0x42, 0x42, 0x42, 0x3C, 0x3C, 0x00, 0x00,
    ],
    // 'p'
    [
        0x00, 0x00, 0x00, 0x00, 0x7C, 0x7C, 0x42, 0x42,
        0x42, 0x42, 0x7C, 0x7C, 0x40, 0x40, 0x40, 0x40,
    ],
    // 'q'
    [
        0x00, 0x00, 0x00, 0x00, 0x3E, 0x3E, 0x42, 0x42,
        0x42, 0x42, 0x3E, 0x3E, 0x02, 0x02, 0x02, 0x02,
    ],
    // 'r'
    [
        0x00, 0x00, 0x00, 0x00, 0x5E, 0x5E, 0x60, 0x60,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00,
    ],
    // 's'
    [
        0x00, 0x00, 0x00, 0x00, 0x3E, 0x3E, 0x40, 0x40,
        0x3C, 0x3C, 0x02, 0x02, 0x7C, 0x7C, 0x00, 0x00,
    ],
    // 't'
    [
        0x10, 0x10, 0x10, 0x10, 0x7C, 0x7C, 0x10, 0x10,
        0x10, 0x10, 0x12, 0x12, 0x0C, 0x0C, 0x00, 0x00,
    ],
    // 'u'
    [
        0x00, 0x00, 0x00, 0x00, 0x42, 0x42, 0x42, 0x42,
        0x42, 0x42, 0x46, 0x46, 0x3A, 0x3A, 0x00, 0x00,
    ],
    // 'v'
    [
        0x00, 0x00, 0x00, 0x00, 0x42, 0x42, 0x42, 0x42,
        0x42, 0x42, 0x24, 0x24, 0x18, 0x18, 0x00, 0x00,
    ],
    // 'w'
    [
        0x00, 0x00, 0x00, 0x00, 0x42, 0x42, 0x42, 0x42,
        0x5A, 0x5A, 0x5A, 0x5A, 0x66, 0x66, 0x00, 0x00,
    ],
    // 'x'
    [
        0x00, 0x00, 0x00, 0x00, 0x42, 0x42, 0x24, 0x24,
        0x18, 0x18, 0x24, 0x24, 0x42, 0x42, 0x00, 0x00,
    ],
    // 'y'
    [
        0x00, 0x00, 0x00, 0x00, 0x42, 0x42, 0x42, 0x42,
        0x42, 0x42, 0x3E, 0x3E, 0x02, 0x02, 0x3C, 0x3C,
    ],
    // 'z'
    [
        0x00, 0x00, 0x00, 0x00, 0x7E, 0x7E, 0x04, 0x04,
        0x18, 0x18, 0x20, 0x20, 0x7E, 0x7E, 0x00, 0x00,
    ],
    // '{'
    [
        0x0E, 0x0E, 0x18, 0x18, 0x18, 0x18, 0x70, 0x70,
        0x18, 0x18, 0x18, 0x18, 0x0E, 0x0E, 0x00, 0x00,
    ],
    // '|'
    [
        0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
        0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00,
    ],
    // '}'
    [
        0x70, 0x70, 0x18, 0x18, 0x18, 0x18, 0x0E, 0x0E,
        0x18, 0x18, 0x18, 0x18, 0x70, 0x70, 0x00, 0x00,
    ],
    // '~'
    [
        0x00, 0x00, 0x00, 0x00, 0x24, 0x24, 0x54, 0x54,
        0x48, 0x48, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
];
