//! Text console rendered straight into the framebuffer.
//!
//! Maintains a cursor in glyph cells, a two-color palette and the framebuffer
//! geometry, and handles newlines and line wrapping. There is no scrolling:
//! text keeps moving down one row per line.

use core::fmt;

use bootloader_api::info::FrameBuffer;
use spin::Mutex;

use crate::cache::{CacheControl, PlatformCache};
use crate::config::TextConfig;
use crate::error::TextError;
use crate::font;
use crate::framebuffer::{Depth, Framebuffer, COLOR_BG, COLOR_FG};

/// Cursor position in glyph cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub col: usize,
    pub row: usize,
}

/// What a byte does to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Line break; nothing is drawn.
    Newline,
    /// A glyph goes in this cell.
    Draw { col: usize, row: usize },
}

impl Cursor {
    /// Advance past `byte` on a surface `columns` cells wide.
    ///
    /// A drawn byte moves one cell right and wraps to the next row once the
    /// last cell of a row has been used.
    pub fn advance(&mut self, byte: u8, columns: usize) -> Step {
        if byte == b'\n' {
            self.col = 0;
            self.row = self.row.saturating_add(1);
            return Step::Newline;
        }

        let step = Step::Draw {
            col: self.col,
            row: self.row,
        };
        self.col = self.col.saturating_add(1);
        if self.col.saturating_add(1) > columns {
            self.col = 0;
            self.row = self.row.saturating_add(1);
        }
        step
    }
}

pub struct TextContext<C: CacheControl = PlatformCache> {
    framebuffer: Framebuffer,
    palette: [u32; 2],
    cursor: Cursor,
    cache: C,
}

pub static CONSOLE: Mutex<Option<TextContext>> = Mutex::new(None);

impl TextContext<PlatformCache> {
    /// Set up text output on a framebuffer `width` pixels wide.
    ///
    /// Rows are not bounds checked; use [`TextContext::with_config`] with a
    /// height to have text past the bottom rejected.
    ///
    /// # Safety
    ///
    /// `base` must address writable framebuffer memory, aligned for `depth`,
    /// large enough for every text row this context is asked to draw.
    pub unsafe fn init(
        base: usize,
        foreground: u32,
        background: u32,
        width: usize,
        depth: Depth,
    ) -> Self {
        let config = TextConfig::new(width, depth).with_colors(foreground, background);
        Self::with_config(base, config)
    }

    /// # Safety
    ///
    /// `base` must address writable framebuffer memory, aligned for the
    /// configured depth, covering `config.height` scanlines if a height is
    /// set, or every row this context is asked to draw otherwise.
    pub unsafe fn with_config(base: usize, config: TextConfig) -> Self {
        Self::with_cache(base, config, PlatformCache::default())
    }
}

impl<C: CacheControl> TextContext<C> {
    /// # Safety
    ///
    /// Same contract as [`TextContext::with_config`], for the address
    /// `cache.map_base(base)`.
    pub unsafe fn with_cache(base: usize, config: TextConfig, cache: C) -> Self {
        debug_assert!(
            config.width >= font::CHAR_WIDTH,
            "framebuffer narrower than one glyph"
        );

        let base = cache.map_base(base);
        let framebuffer = Framebuffer::new(base, config.width, config.height, config.depth);
        crate::info!(
            "fbtext: base {:#x}, stride {} bytes, {:?}, {} columns",
            base,
            framebuffer.stride(),
            config.depth,
            framebuffer.columns()
        );

        let mut palette = [0; 2];
        palette[COLOR_BG] = config.background;
        palette[COLOR_FG] = config.foreground;

        Self {
            framebuffer,
            palette,
            cursor: Cursor::default(),
            cache,
        }
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn base(&self) -> usize {
        self.framebuffer.base()
    }

    pub fn row_stride(&self) -> usize {
        self.framebuffer.stride()
    }

    pub fn depth(&self) -> Depth {
        self.framebuffer.depth()
    }

    /// Glyph cells per text row.
    pub fn columns(&self) -> usize {
        self.framebuffer.columns()
    }

    /// `[background, foreground]`.
    pub fn palette(&self) -> [u32; 2] {
        self.palette
    }

    pub fn set_colors(&mut self, foreground: u32, background: u32) {
        self.palette[COLOR_FG] = foreground;
        self.palette[COLOR_BG] = background;
    }

    /// `(column, row)` in glyph cells.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor.col, self.cursor.row)
    }

    /// Move the cursor. Cells outside the surface are rejected when drawn to.
    pub fn set_cursor(&mut self, col: usize, row: usize) {
        self.cursor = Cursor { col, row };
    }

    /// Draw `c` at the cursor without moving it.
    pub fn render_glyph(&self, c: u8) -> Result<Depth, TextError> {
        let glyph = font::glyph(c)?;
        let Cursor { col, row } = self.cursor;
        self.framebuffer.check_cell(col, row)?;
        // SAFETY: the cell is inside the surface, whose memory the
        // constructor's caller vouched for.
        Ok(unsafe { self.draw(glyph, col, row) })
    }

    unsafe fn draw(&self, glyph: &font::Glyph, col: usize, row: usize) -> Depth {
        crate::trace!("fbtext: glyph at ({}, {})", col, row);
        let row_address = self.framebuffer.row_address(row);
        self.framebuffer
            .draw_glyph(&self.cache, row_address, col, glyph, &self.palette)
    }

    /// Run the cursor over `text` without drawing, rejecting bytes with no
    /// glyph and cells outside the surface.
    fn check(&self, text: &[u8]) -> Result<(), TextError> {
        let columns = self.columns();
        let mut cursor = self.cursor;
        for &c in text {
            if let Step::Draw { col, row } = cursor.advance(c, columns) {
                if !font::is_printable(c) {
                    return Err(TextError::UnsupportedChar(c));
                }
                self.framebuffer.check_cell(col, row)?;
            }
        }
        Ok(())
    }

    /// Write `text`, advancing and wrapping the cursor.
    ///
    /// Stops at the first NUL byte. Input that cannot be drawn is rejected as
    /// a whole: on error neither the cursor nor the framebuffer has changed.
    pub fn put_bytes(&mut self, text: &[u8]) -> Result<(), TextError> {
        let len = text.iter().position(|&c| c == 0).unwrap_or(text.len());
        let text = &text[..len];

        if let Err(err) = self.check(text) {
            crate::warn!("fbtext: rejected text: {}", err);
            return Err(err);
        }

        let columns = self.columns();
        for &c in text {
            if let Step::Draw { col, row } = self.cursor.advance(c, columns) {
                let glyph = font::glyph(c)?;
                // SAFETY: `check` accepted every cell drawn here.
                unsafe {
                    self.draw(glyph, col, row);
                }
            }
        }
        Ok(())
    }

    pub fn put_str(&mut self, text: &str) -> Result<(), TextError> {
        self.put_bytes(text.as_bytes())
    }

    /// Write `value` as 8 uppercase hex digits, no prefix.
    pub fn put_u32_hex(&mut self, value: u32) -> Result<(), TextError> {
        self.put_bytes(&hex_digits::<8>(value.into()))
    }

    /// Write `value` as 2 uppercase hex digits, no prefix.
    pub fn put_u8_hex(&mut self, value: u8) -> Result<(), TextError> {
        self.put_bytes(&hex_digits::<2>(value.into()))
    }

    /// Write `value` as 16 uppercase hex digits, no prefix.
    pub fn put_u64_hex(&mut self, value: u64) -> Result<(), TextError> {
        self.put_bytes(&hex_digits::<16>(value))
    }
}

/// The low `N` nibbles of `value`, most significant first.
fn hex_digits<const N: usize>(mut value: u64) -> [u8; N] {
    let mut digits = [0; N];
    for digit in digits.iter_mut().rev() {
        let nibble = (value & 0xF) as u8;
        *digit = if nibble < 0xA {
            b'0' + nibble
        } else {
            b'A' + nibble - 0xA
        };
        value >>= 4;
    }
    digits
}

impl<C: CacheControl> fmt::Write for TextContext<C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_str(s).map_err(|_| fmt::Error)
    }
}

/// Install the global console.
///
/// # Safety
///
/// See [`TextContext::with_config`].
pub unsafe fn init(base: usize, config: TextConfig) {
    #[cfg(all(feature = "kernel", target_arch = "x86_64"))]
    crate::serial::init();

    crate::info!("fbtext: console at {:#x}", base);
    *CONSOLE.lock() = Some(TextContext::with_config(base, config));
}

/// Install the global console on the framebuffer the bootloader set up.
///
/// # Safety
///
/// `framebuffer` must describe the live display memory; nothing else may draw
/// into it through another alias while the console is in use.
pub unsafe fn init_from_boot(framebuffer: &'static mut FrameBuffer) -> Result<(), TextError> {
    let config = TextConfig::from_boot_info(&framebuffer.info()).map_err(|err| {
        crate::error!("fbtext: cannot use boot framebuffer: {}", err);
        err
    })?;
    let base = framebuffer.buffer_mut().as_mut_ptr() as usize;
    init(base, config);
    Ok(())
}

#[macro_export]
macro_rules! fb_print {
    ($($arg:tt)*) => ($crate::console::_print(::core::format_args!($($arg)*)));
}

#[macro_export]
macro_rules! fb_println {
    () => ($crate::fb_print!("\n"));
    ($($arg:tt)*) => ($crate::fb_print!("{}\n", ::core::format_args!($($arg)*)));
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    use core::fmt::Write;

    let print = || {
        if let Some(console) = CONSOLE.lock().as_mut() {
            // Output past the bottom of the screen is dropped.
            let _ = console.write_fmt(args);
        }
    };

    #[cfg(all(feature = "kernel", target_arch = "x86_64"))]
    x86_64::instructions::interrupts::without_interrupts(print);
    #[cfg(not(all(feature = "kernel", target_arch = "x86_64")))]
    print();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_digit_mapping() {
        assert_eq!(&hex_digits::<8>(0), b"00000000");
        assert_eq!(&hex_digits::<8>(0xDEAD_BEEF), b"DEADBEEF");
        assert_eq!(&hex_digits::<8>(0x0123_4567), b"01234567");
        assert_eq!(&hex_digits::<2>(0xAB), b"AB");
        assert_eq!(&hex_digits::<16>(u64::MAX), b"FFFFFFFFFFFFFFFF");
    }

    #[test]
    fn cursor_wraps_after_last_cell() {
        let mut cursor = Cursor::default();
        assert_eq!(cursor.advance(b'a', 2), Step::Draw { col: 0, row: 0 });
        assert_eq!(cursor.advance(b'b', 2), Step::Draw { col: 1, row: 0 });
        assert_eq!(cursor, Cursor { col: 0, row: 1 });
    }

    #[test]
    fn cursor_saturates_at_the_last_row() {
        let mut cursor = Cursor {
            col: 0,
            row: usize::MAX,
        };
        assert_eq!(cursor.advance(b'\n', 80), Step::Newline);
        assert_eq!(cursor.row, usize::MAX);

        let mut cursor = Cursor {
            col: usize::MAX,
            row: 0,
        };
        assert_eq!(
            cursor.advance(b'x', 80),
            Step::Draw {
                col: usize::MAX,
                row: 0
            }
        );
        assert_eq!(cursor, Cursor { col: 0, row: 1 });
    }

    #[test]
    fn newline_resets_column() {
        let mut cursor = Cursor { col: 5, row: 3 };
        assert_eq!(cursor.advance(b'\n', 80), Step::Newline);
        assert_eq!(cursor, Cursor { col: 0, row: 4 });
    }
}
