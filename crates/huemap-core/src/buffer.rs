//! Pixel buffer types.
//!
//! - [`ImageView`] - Borrowed, validated source buffer (RGB or RGBA)
//! - [`RgbaImage`] - Owned RGBA destination buffer
//!
//! # Memory Layout
//!
//! Pixels are stored **row-major**, top-to-bottom, channels interleaved:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0 (RGB)
//!         [R G B A R G B A ...]    <- Row 0 (RGBA)
//! ```
//!
//! The pixel at `(x, y)` starts at byte `(x + width * y) * bytes_per_pixel`.
//!
//! The source is only ever read. Destination buffers are freshly allocated and
//! never alias the source.

use crate::{Error, PixelLayout, Result, Rgba};

/// Immutable view over an interleaved 8-bit pixel buffer.
///
/// Construction validates the layout and that the buffer length matches the
/// dimensions exactly, so every accessor can index without further checks.
///
/// # Example
///
/// ```rust
/// use huemap_core::ImageView;
///
/// let data = [255, 0, 0, 0, 255, 0];
/// let view = ImageView::new(&data, 2, 1, 3).unwrap();
/// assert_eq!(view.pixel(1, 0), [0, 255, 0, 255]);
/// ```
#[derive(Clone, Copy)]
pub struct ImageView<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
}

impl<'a> ImageView<'a> {
    /// Creates a view from raw bytes and a bytes-per-pixel count (3 or 4).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLayout`] if `bytes_per_pixel` is not 3 or 4
    /// - [`Error::InvalidDimensions`] if the buffer size overflows
    /// - [`Error::BufferSize`] if `data.len() != width * height * bytes_per_pixel`
    pub fn new(data: &'a [u8], width: u32, height: u32, bytes_per_pixel: u32) -> Result<Self> {
        let layout = PixelLayout::from_bytes_per_pixel(bytes_per_pixel)?;
        Self::with_layout(data, width, height, layout)
    }

    /// Creates a view with an already validated layout.
    pub fn with_layout(data: &'a [u8], width: u32, height: u32, layout: PixelLayout) -> Result<Self> {
        let expected = layout
            .buffer_len(width, height)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflows usize"))?;
        if data.len() != expected {
            return Err(Error::buffer_size(expected, data.len()));
        }
        Ok(Self {
            data,
            width,
            height,
            layout,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel layout of the source bytes.
    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Raw bytes.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bytes in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * self.layout.bytes_per_pixel()
    }

    /// Row `y` as raw bytes.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &'a [u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Pixel at `(x, y)` as RGBA bytes. RGB sources get alpha 255.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let bpp = self.layout.bytes_per_pixel();
        let pos = (x as usize + self.width as usize * y as usize) * bpp;
        read_pixel(&self.data[pos..pos + bpp], self.layout)
    }

    /// Iterates pixels of row `y` as RGBA bytes.
    pub fn row_pixels(&self, y: u32) -> impl Iterator<Item = [u8; 4]> + 'a {
        let layout = self.layout;
        self.row(y)
            .chunks_exact(layout.bytes_per_pixel())
            .map(move |px| read_pixel(px, layout))
    }
}

impl std::fmt::Debug for ImageView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageView")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("layout", &self.layout)
            .finish()
    }
}

/// Expands one RGB or RGBA pixel to RGBA bytes.
#[inline]
fn read_pixel(px: &[u8], layout: PixelLayout) -> [u8; 4] {
    let a = if layout.has_alpha() { px[3] } else { 255 };
    [px[0], px[1], px[2], a]
}

/// Owned RGBA image, 4 bytes per pixel, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct RgbaImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl RgbaImage {
    /// Allocates a zeroed (transparent black) image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if the buffer size overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = PixelLayout::Rgba
            .buffer_len(width, height)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflows usize"))?;
        Ok(Self {
            data: vec![0u8; len],
            width,
            height,
        })
    }

    /// Wraps existing RGBA bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        ImageView::with_layout(&data, width, height, PixelLayout::Rgba)?;
        Ok(Self { data, width, height })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image, returning its bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Bytes in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let pos = (x as usize + self.width as usize * y as usize) * 4;
        [
            self.data[pos],
            self.data[pos + 1],
            self.data[pos + 2],
            self.data[pos + 3],
        ]
    }

    /// Pixel at `(x, y)` as a normalized color.
    #[inline]
    pub fn color(&self, x: u32, y: u32) -> Rgba {
        Rgba::from_bytes(self.pixel(x, y))
    }

    /// Borrows the image as a source view.
    pub fn view(&self) -> ImageView<'_> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            layout: PixelLayout::Rgba,
        }
    }
}

impl std::fmt::Debug for RgbaImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbaImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}
