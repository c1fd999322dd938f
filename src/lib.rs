//! Fixed-width bitmap text for raw framebuffers.
//!
//! Draws 8x16 printable-ASCII glyphs directly into display memory at 16 or
//! 32 bits per pixel, with a cell cursor that advances, wraps at the right
//! edge and breaks on `'\n'`. Targets with a CPU cache in front of the
//! framebuffer plug in a [`cache::CacheControl`] implementation.
//!
//! ```no_run
//! use fbtext::{Depth, TextContext};
//!
//! // SAFETY: 320x240 RGBA5551 framebuffer at a known physical address.
//! let mut text = unsafe { TextContext::init(0x0010_0000, 0xFFFF, 0x0001, 320, Depth::Bpp16) };
//! text.put_str("PC = ").unwrap();
//! text.put_u32_hex(0x8000_0400).unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "mips", feature(asm_experimental_arch))]

pub mod cache;
pub mod config;
pub mod console;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod logging;
#[cfg(all(feature = "kernel", target_arch = "x86_64"))]
pub mod serial;

pub use cache::{CacheControl, Coherent, PlatformCache};
pub use config::TextConfig;
pub use console::{TextContext, CONSOLE};
pub use error::TextError;
pub use framebuffer::Depth;
