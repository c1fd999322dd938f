//! Framebuffer visibility barriers.
//!
//! On some targets the CPU data cache sits between the core and the memory the
//! display controller scans out. Pixel writes then have to be pushed out of the
//! cache explicitly, and stale lines dropped before a scanline is rewritten.
//! The rasterizer brackets every glyph scanline with [`CacheControl::invalidate`]
//! and [`CacheControl::flush`]; cache-coherent targets plug in [`Coherent`].

use core::ops::Range;

/// Cache maintenance for framebuffer writes.
pub trait CacheControl {
    /// Translate a framebuffer base address into the address window pixel
    /// writes go through.
    fn map_base(&self, base: usize) -> usize {
        base
    }

    /// Drop any cached copy of `range` before it is overwritten.
    fn invalidate(&self, range: Range<usize>);

    /// Write `range` back to memory so the display controller sees it.
    fn flush(&self, range: Range<usize>);
}

/// Targets without a cache in front of the framebuffer, or with a coherent one.
#[derive(Debug, Default, Clone, Copy)]
pub struct Coherent;

impl CacheControl for Coherent {
    #[inline(always)]
    fn invalidate(&self, _range: Range<usize>) {}

    #[inline(always)]
    fn flush(&self, _range: Range<usize>) {}
}

/// Iterate over the start addresses of the `line`-byte cache lines covering `range`.
#[inline]
fn lines(range: Range<usize>, line: usize) -> impl Iterator<Item = usize> {
    let start = range.start & !(line - 1);
    (start..range.end).step_by(line)
}

/// x86_64 with a framebuffer mapped write-back: `clflush` each line.
#[cfg(target_arch = "x86_64")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Clflush;

#[cfg(target_arch = "x86_64")]
impl Clflush {
    const LINE: usize = 64;

    #[inline]
    fn clflush_range(range: Range<usize>) {
        for addr in lines(range, Self::LINE) {
            // SAFETY: clflush only needs a mapped address; the range belongs to
            // the framebuffer the caller handed to the text context.
            unsafe {
                core::arch::asm!("clflush [{}]", in(reg) addr, options(nostack, preserves_flags));
            }
        }
    }
}

#[cfg(target_arch = "x86_64")]
impl CacheControl for Clflush {
    fn invalidate(&self, range: Range<usize>) {
        Self::clflush_range(range);
    }

    fn flush(&self, range: Range<usize>) {
        Self::clflush_range(range);
        // SAFETY: mfence has no operands.
        unsafe {
            core::arch::asm!("mfence", options(nostack, preserves_flags));
        }
    }
}

/// NEC VR4300 (Nintendo 64) data cache, 16-byte lines.
///
/// The framebuffer is reached through the direct-mapped KSEG0 segment.
/// Lines are created dirty-exclusive before a scanline is drawn, which skips
/// the pointless fill from memory, and written back once it is complete.
#[cfg(target_arch = "mips")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Vr4300;

#[cfg(target_arch = "mips")]
impl Vr4300 {
    const LINE: usize = 16;
    const KSEG0: usize = 0x8000_0000;
}

#[cfg(target_arch = "mips")]
impl CacheControl for Vr4300 {
    fn map_base(&self, base: usize) -> usize {
        base | Self::KSEG0
    }

    fn invalidate(&self, range: Range<usize>) {
        for addr in lines(range, Self::LINE) {
            // SAFETY: Create Dirty Exclusive on a line the rasterizer is about
            // to overwrite completely.
            unsafe {
                core::arch::asm!("cache 0xD, 0({})", in(reg) addr, options(nostack, preserves_flags));
            }
        }
    }

    fn flush(&self, range: Range<usize>) {
        for addr in lines(range, Self::LINE) {
            // SAFETY: Hit Write Back of a framebuffer line.
            unsafe {
                core::arch::asm!("cache 0x19, 0({})", in(reg) addr, options(nostack, preserves_flags));
            }
        }
    }
}

/// Barrier used when a text context is not given one explicitly.
#[cfg(target_arch = "mips")]
pub type PlatformCache = Vr4300;

/// Barrier used when a text context is not given one explicitly.
#[cfg(not(target_arch = "mips"))]
pub type PlatformCache = Coherent;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_cover_unaligned_range() {
        let mut it = lines(0x1008..0x1028, 16);
        assert_eq!(it.next(), Some(0x1000));
        assert_eq!(it.next(), Some(0x1010));
        assert_eq!(it.next(), Some(0x1020));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn coherent_keeps_base() {
        assert_eq!(Coherent.map_base(0x1234_5678), 0x1234_5678);
    }
}
