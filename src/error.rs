//! Errors reported when text input or a surface description cannot be honored.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// Byte with no glyph in the font (outside `' '..='~'`, not a newline).
    UnsupportedChar(u8),
    /// A glyph would land on a cell row below the bottom of the surface.
    OutOfRows { row: usize },
    /// A glyph would land on a cell past the right edge of the surface.
    OutOfColumns { col: usize },
    /// Pixel size other than 2 or 4 bytes.
    UnsupportedDepth(usize),
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::UnsupportedChar(c) => write!(f, "no glyph for byte {:#04x}", c),
            TextError::OutOfRows { row } => write!(f, "text row {} is past the framebuffer", row),
            TextError::OutOfColumns { col } => {
                write!(f, "text column {} is past the framebuffer", col)
            }
            TextError::UnsupportedDepth(bpp) => {
                write!(f, "unsupported pixel size: {} bytes", bpp)
            }
        }
    }
}
