//! PNG reading and writing.
//!
//! Only 8-bit images are accepted. Grayscale inputs are expanded to RGB (and
//! gray+alpha to RGBA) so the remapper always sees 3 or 4 bytes per pixel.

use anyhow::{bail, Context, Result};
use huemap_core::PixelLayout;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Decoded 8-bit image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub data: Vec<u8>,
}

/// Reads an 8-bit PNG as RGB or RGBA.
pub fn read_png(path: &Path) -> Result<Image> {
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .with_context(|| format!("Failed to decode: {}", path.display()))?;

    let buf_size = reader
        .output_buffer_size()
        .context("cannot determine output buffer size")?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .with_context(|| format!("Failed to decode: {}", path.display()))?;
    buf.truncate(info.buffer_size());

    let (layout, data) = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => (PixelLayout::Rgb, buf),
        (png::ColorType::Rgba, png::BitDepth::Eight) => (PixelLayout::Rgba, buf),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            (PixelLayout::Rgb, buf.iter().flat_map(|&g| [g, g, g]).collect())
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => (
            PixelLayout::Rgba,
            buf.chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect(),
        ),
        (color_type, bit_depth) => {
            bail!(
                "Unsupported PNG format {:?} {:?} in {} (8-bit RGB, RGBA or grayscale only)",
                color_type,
                bit_depth,
                path.display()
            );
        }
    };

    debug!(
        path = %path.display(),
        width = info.width,
        height = info.height,
        color = ?info.color_type,
        %layout,
        "read png"
    );
    Ok(Image {
        width: info.width,
        height: info.height,
        layout,
        data,
    })
}

/// Writes 8-bit RGB or RGBA bytes as PNG.
pub fn write_png(path: &Path, width: u32, height: u32, layout: PixelLayout, data: &[u8]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(match layout {
        PixelLayout::Rgb => png::ColorType::Rgb,
        PixelLayout::Rgba => png::ColorType::Rgba,
    });
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("Failed to encode: {}", path.display()))?;
    writer
        .write_image_data(data)
        .with_context(|| format!("Failed to encode: {}", path.display()))?;
    writer
        .finish()
        .with_context(|| format!("Failed to finish: {}", path.display()))?;

    debug!(path = %path.display(), width, height, %layout, "wrote png");
    Ok(())
}
