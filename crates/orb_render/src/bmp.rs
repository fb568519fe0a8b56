//! Uncompressed 24-bit BMP encoding.
//!
//! Produces the classic header + payload layout: a 14-byte file header,
//! a 40-byte BITMAPINFOHEADER, then BGR pixel rows written bottom-up
//! with each row padded to a 4-byte boundary.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::Color;

/// Size of the file header plus BITMAPINFOHEADER.
const HEADER_SIZE: u32 = 14 + 40;

/// Errors that can occur while writing a bitmap.
#[derive(Error, Debug)]
pub enum BmpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How a float channel becomes a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelPolicy {
    /// Scale by 255 and truncate toward zero. Out-of-range channels
    /// saturate per Rust float-to-int cast semantics.
    Truncate,
    /// Clamp to [0, 1] before scaling.
    Clamp,
}

/// Quantize one color channel to a byte.
#[inline]
pub fn quantize(v: f32, policy: ChannelPolicy) -> u8 {
    match policy {
        ChannelPolicy::Truncate => (v * 255.0) as u8,
        ChannelPolicy::Clamp => (255.0 * v.clamp(0.0, 1.0)) as u8,
    }
}

/// Encode an image as a complete BMP byte stream.
///
/// `pixels` holds `width * height` colors in the renderer's linear
/// order; rows are emitted bottom-up in B,G,R byte order per the BMP
/// container. Deterministic: equal inputs yield equal bytes.
pub fn encode(width: u32, height: u32, pixels: &[Color], policy: ChannelPolicy) -> Vec<u8> {
    debug_assert_eq!(pixels.len(), (width * height) as usize);

    // Quantize into a packed RGB pass before laying out rows.
    let mut rgb = Vec::with_capacity(pixels.len() * 3);
    for pixel in pixels {
        rgb.push(quantize(pixel.x, policy));
        rgb.push(quantize(pixel.y, policy));
        rgb.push(quantize(pixel.z, policy));
    }

    let row_bytes = width as usize * 3;
    let padding = (4 - row_bytes % 4) % 4;
    let stride = row_bytes + padding;
    let file_size = HEADER_SIZE + stride as u32 * height;

    let mut out = Vec::with_capacity(file_size as usize);

    // File header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved
    out.extend_from_slice(&HEADER_SIZE.to_le_bytes()); // pixel data offset

    // BITMAPINFOHEADER
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive: bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB, uncompressed
    out.extend_from_slice(&0u32.to_le_bytes()); // image size (0 allowed for BI_RGB)
    out.extend_from_slice(&0i32.to_le_bytes()); // x pixels per meter
    out.extend_from_slice(&0i32.to_le_bytes()); // y pixels per meter
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    // Pixel rows, bottom-up, RGB swapped to BGR
    for y in (0..height as usize).rev() {
        let row = &rgb[y * row_bytes..(y + 1) * row_bytes];
        for px in row.chunks_exact(3) {
            out.push(px[2]);
            out.push(px[1]);
            out.push(px[0]);
        }
        out.extend(std::iter::repeat(0u8).take(padding));
    }

    out
}

/// Encode the image and write it to `path`.
pub fn write_bmp(
    path: &Path,
    width: u32,
    height: u32,
    pixels: &[Color],
    policy: ChannelPolicy,
) -> Result<(), BmpError> {
    let bytes = encode(width, height, pixels, policy);
    fs::write(path, bytes)?;
    Ok(())
}
