//! Text surface configuration.
//!
//! Collects the inputs a text context is initialized from. Built with const
//! setters so it can live in a `static`, the same way the bootloader config is
//! declared by a kernel.

use bootloader_api::info::FrameBufferInfo;

use crate::error::TextError;
use crate::framebuffer::Depth;

pub const WHITE: u32 = 0xFFFF_FFFF;
pub const BLACK: u32 = 0x0000_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextConfig {
    /// Color of set glyph bits. Only the low 16 bits are used at 16 bpp.
    pub foreground: u32,
    /// Color of clear glyph bits. Only the low 16 bits are used at 16 bpp.
    pub background: u32,
    /// Pixels per scanline. Should be a non-zero multiple of 8.
    pub width: usize,
    /// Pixels per column. `None` leaves rows unchecked.
    pub height: Option<usize>,
    pub depth: Depth,
}

impl TextConfig {
    /// White text on black, no height limit.
    pub const fn new(width: usize, depth: Depth) -> Self {
        Self {
            foreground: WHITE,
            background: BLACK,
            width,
            height: None,
            depth,
        }
    }

    pub const fn with_colors(mut self, foreground: u32, background: u32) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Reject text rows that would extend past `height` pixels.
    pub const fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    /// Derive a config from the framebuffer description handed over by the
    /// bootloader. The scanline width is taken from `stride`, which includes
    /// any padding past the visible width.
    pub fn from_boot_info(info: &FrameBufferInfo) -> Result<Self, TextError> {
        let depth = Depth::from_bytes_per_pixel(info.bytes_per_pixel)?;
        Ok(Self::new(info.stride, depth).with_height(info.height))
    }
}
