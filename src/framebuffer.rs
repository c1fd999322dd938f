//! Raw framebuffer access.
//!
//! Describes the memory the display controller scans out (base address,
//! bytes per scanline, pixel depth) and rasterizes glyphs into it with
//! volatile stores. Nothing here interprets color values: a pixel is written
//! verbatim as a 16- or 32-bit word.

use core::mem::size_of;

use crate::cache::CacheControl;
use crate::error::TextError;
use crate::font::{self, Glyph, CHAR_HEIGHT, CHAR_WIDTH};

/// Palette slot written for clear glyph bits.
pub const COLOR_BG: usize = 0;
/// Palette slot written for set glyph bits.
pub const COLOR_FG: usize = 1;

/// Pixel depth of a framebuffer. Fixed for the lifetime of a text context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Bpp16,
    Bpp32,
}

impl Depth {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Depth::Bpp16 => 2,
            Depth::Bpp32 => 4,
        }
    }

    pub fn from_bytes_per_pixel(bytes: usize) -> Result<Self, TextError> {
        match bytes {
            2 => Ok(Depth::Bpp16),
            4 => Ok(Depth::Bpp32),
            other => Err(TextError::UnsupportedDepth(other)),
        }
    }

    /// Bytes covered by one glyph scanline.
    pub const fn cell_bytes(self) -> usize {
        CHAR_WIDTH * self.bytes_per_pixel()
    }
}

/// A pixel as stored in framebuffer memory.
pub trait PixelWord: Copy {
    /// Narrow a palette color to this pixel size.
    fn from_color(color: u32) -> Self;
}

impl PixelWord for u16 {
    #[inline]
    fn from_color(color: u32) -> Self {
        color as u16
    }
}

impl PixelWord for u32 {
    #[inline]
    fn from_color(color: u32) -> Self {
        color
    }
}

/// Geometry of the framebuffer a text context draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Framebuffer {
    base: usize,
    stride: usize,
    height: Option<usize>,
    depth: Depth,
}

impl Framebuffer {
    /// `width` is in pixels; the stride is derived from the depth.
    pub const fn new(base: usize, width: usize, height: Option<usize>, depth: Depth) -> Self {
        Self {
            base,
            stride: width * depth.bytes_per_pixel(),
            height,
            depth,
        }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    /// Bytes per scanline.
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn height(&self) -> Option<usize> {
        self.height
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Glyph cells that fit on one text row.
    pub fn columns(&self) -> usize {
        self.stride / self.depth.cell_bytes()
    }

    /// Address of the top scanline of text row `row`.
    ///
    /// Only meaningful for rows accepted by [`Framebuffer::check_cell`].
    #[inline]
    pub fn row_address(&self, row: usize) -> usize {
        self.base + self.stride * (row * CHAR_HEIGHT)
    }

    /// Check that cell (`col`, `row`) lies inside the surface.
    ///
    /// Columns are always checked. Rows are checked against the height if
    /// one is known; otherwise only against the end of the address space.
    pub fn check_cell(&self, col: usize, row: usize) -> Result<(), TextError> {
        if col >= self.columns() {
            return Err(TextError::OutOfColumns { col });
        }

        let bottom = row.checked_add(1).and_then(|rows| rows.checked_mul(CHAR_HEIGHT));
        let fits = match (bottom, self.height) {
            (Some(bottom), Some(height)) => bottom <= height,
            (Some(bottom), None) => bottom
                .checked_mul(self.stride)
                .and_then(|end| self.base.checked_add(end))
                .is_some(),
            (None, _) => false,
        };
        if fits {
            Ok(())
        } else {
            Err(TextError::OutOfRows { row })
        }
    }

    /// Draw `glyph` in cell `col` of the text row starting at `row_address`.
    ///
    /// Returns the depth that was rendered.
    ///
    /// # Safety
    ///
    /// The 8x16 pixel block addressed must be mapped, writable framebuffer
    /// memory, suitably aligned for the pixel depth.
    pub unsafe fn draw_glyph<C: CacheControl>(
        &self,
        cache: &C,
        row_address: usize,
        col: usize,
        glyph: &Glyph,
        palette: &[u32; 2],
    ) -> Depth {
        let top_left = row_address + col * self.depth.cell_bytes();
        match self.depth {
            Depth::Bpp16 => draw::<u16, C>(cache, top_left, self.stride, glyph, palette),
            Depth::Bpp32 => draw::<u32, C>(cache, top_left, self.stride, glyph, palette),
        }
        self.depth
    }
}

/// Paint one glyph scanline by scanline, left to right.
///
/// # Safety
///
/// See [`Framebuffer::draw_glyph`].
unsafe fn draw<P: PixelWord, C: CacheControl>(
    cache: &C,
    top_left: usize,
    stride: usize,
    glyph: &Glyph,
    palette: &[u32; 2],
) {
    let colors = [
        P::from_color(palette[COLOR_BG]),
        P::from_color(palette[COLOR_FG]),
    ];
    let span = CHAR_WIDTH * size_of::<P>();

    let mut line = top_left;
    for &bits in glyph {
        cache.invalidate(line..line + span);

        let pixels = line as *mut P;
        for col in 0..CHAR_WIDTH {
            let color = colors[font::pixel_set(bits, col) as usize];
            pixels.add(col).write_volatile(color);
        }

        cache.flush(line..line + span);
        line += stride;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_inside_height() {
        let fb = Framebuffer::new(0x1000, 64, Some(40), Depth::Bpp16);
        assert_eq!(fb.columns(), 8);
        assert_eq!(fb.check_cell(7, 1), Ok(()));
        assert_eq!(fb.check_cell(8, 0), Err(TextError::OutOfColumns { col: 8 }));
        // Row 2 would end at scanline 48, past the 40 declared.
        assert_eq!(fb.check_cell(0, 2), Err(TextError::OutOfRows { row: 2 }));
        assert_eq!(
            fb.check_cell(0, usize::MAX),
            Err(TextError::OutOfRows { row: usize::MAX })
        );
    }

    #[test]
    fn unbounded_rows_stop_at_address_space_end() {
        let fb = Framebuffer::new(0x1000, 64, None, Depth::Bpp32);
        assert_eq!(fb.check_cell(0, 1_000), Ok(()));
        let last = (usize::MAX - 0x1000) / (fb.stride() * CHAR_HEIGHT);
        assert_eq!(fb.check_cell(0, last - 1), Ok(()));
        assert_eq!(
            fb.check_cell(0, last + 1),
            Err(TextError::OutOfRows { row: last + 1 })
        );
    }
}
