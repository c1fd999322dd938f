use bootloader_api::info::{FrameBufferInfo, PixelFormat};
use fbtext::config::{BLACK, WHITE};
use fbtext::{Depth, TextConfig, TextError};

fn boot_info(bytes_per_pixel: usize) -> FrameBufferInfo {
    FrameBufferInfo {
        byte_len: 1280 * 720 * bytes_per_pixel,
        width: 1270,
        height: 720,
        pixel_format: PixelFormat::Bgr,
        bytes_per_pixel,
        stride: 1280,
    }
}

#[test]
fn defaults_to_white_on_black() {
    let config = TextConfig::new(320, Depth::Bpp16);
    assert_eq!(config.foreground, WHITE);
    assert_eq!(config.background, BLACK);
    assert_eq!(config.height, None);
}

#[test]
fn builder_is_const() {
    const CONFIG: TextConfig = TextConfig::new(640, Depth::Bpp32)
        .with_colors(0x00FF_FF00, 0x0000_0080)
        .with_height(480);

    assert_eq!(CONFIG.width, 640);
    assert_eq!(CONFIG.height, Some(480));
    assert_eq!(CONFIG.foreground, 0x00FF_FF00);
    assert_eq!(CONFIG.background, 0x0000_0080);
}

#[test]
fn boot_info_uses_stride_and_height() {
    let config = TextConfig::from_boot_info(&boot_info(4)).unwrap();
    assert_eq!(config.width, 1280);
    assert_eq!(config.height, Some(720));
    assert_eq!(config.depth, Depth::Bpp32);

    let config = TextConfig::from_boot_info(&boot_info(2)).unwrap();
    assert_eq!(config.depth, Depth::Bpp16);
}

#[test]
fn boot_info_rejects_other_depths() {
    assert_eq!(
        TextConfig::from_boot_info(&boot_info(3)),
        Err(TextError::UnsupportedDepth(3))
    );
    assert_eq!(
        TextConfig::from_boot_info(&boot_info(1)),
        Err(TextError::UnsupportedDepth(1))
    );
}

#[test]
fn depth_sizes() {
    assert_eq!(Depth::Bpp16.bytes_per_pixel(), 2);
    assert_eq!(Depth::Bpp32.bytes_per_pixel(), 4);
    assert_eq!(Depth::Bpp16.cell_bytes(), 16);
    assert_eq!(Depth::Bpp32.cell_bytes(), 32);
}

#[test]
fn errors_display() {
    assert_eq!(
        TextError::UnsupportedChar(0x7F).to_string(),
        "no glyph for byte 0x7f"
    );
    assert_eq!(
        TextError::OutOfRows { row: 30 }.to_string(),
        "text row 30 is past the framebuffer"
    );
    assert_eq!(
        TextError::OutOfColumns { col: 40 }.to_string(),
        "text column 40 is past the framebuffer"
    );
    assert_eq!(
        TextError::UnsupportedDepth(3).to_string(),
        "unsupported pixel size: 3 bytes"
    );
}
