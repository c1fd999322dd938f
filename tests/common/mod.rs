//! In-memory framebuffer standing in for display memory.

#![allow(dead_code)]

use fbtext::font::{FONT_DATA, CHAR_HEIGHT, CHAR_WIDTH, FIRST_CHAR};

pub const FG: u32 = 0x00FF_FF00;
pub const BG: u32 = 0x0000_0022;
/// Fill value for pixels no glyph has touched.
pub const UNTOUCHED: u32 = 0xDEAD_0000;

pub struct Surface<P> {
    pixels: Vec<P>,
    pub width: usize,
    pub height: usize,
}

impl<P: Copy + PartialEq + Into<u32>> Surface<P> {
    pub fn new(width: usize, height: usize, fill: P) -> Self {
        Self {
            pixels: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Address handed to the text context. The vector is never resized, so
    /// it stays valid for the surface's lifetime.
    pub fn base(&mut self) -> usize {
        self.pixels.as_mut_ptr() as usize
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x].into()
    }

    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    /// The 8x16 block of text cell (`col`, `row`).
    pub fn cell(&self, col: usize, row: usize) -> [[u32; CHAR_WIDTH]; CHAR_HEIGHT] {
        let mut block = [[0; CHAR_WIDTH]; CHAR_HEIGHT];
        for (y, line) in block.iter_mut().enumerate() {
            for (x, px) in line.iter_mut().enumerate() {
                *px = self.pixel(col * CHAR_WIDTH + x, row * CHAR_HEIGHT + y);
            }
        }
        block
    }

    /// Scanline bytes of a cell, a bit set wherever the pixel equals `fg`.
    pub fn cell_bits(&self, col: usize, row: usize, fg: u32) -> [u8; CHAR_HEIGHT] {
        let mut bits = [0; CHAR_HEIGHT];
        for (y, line) in self.cell(col, row).iter().enumerate() {
            for (x, &px) in line.iter().enumerate() {
                if px == fg {
                    bits[y] |= 0x80 >> x;
                }
            }
        }
        bits
    }

    /// Read back `cols` cells of text row `row`; unknown patterns read as `?`.
    pub fn text(&self, row: usize, cols: usize, fg: u32) -> String {
        (0..cols)
            .map(|col| {
                let bits = self.cell_bits(col, row, fg);
                FONT_DATA
                    .iter()
                    .position(|glyph| *glyph == bits)
                    .map(|i| (FIRST_CHAR + i as u8) as char)
                    .unwrap_or('?')
            })
            .collect()
    }
}
