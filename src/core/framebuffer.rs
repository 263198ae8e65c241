use std::fmt;

use super::line::{fill_pattern, rasterize_line};
use super::window::WindowDimensions;
use crate::math::Color;

/// Failure to allocate the pixel storage for a framebuffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FramebufferError {
    /// `width * height * 4` overflowed or the allocator refused the request
    Allocation { width: u32, height: u32 },
}

impl fmt::Display for FramebufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramebufferError::Allocation { width, height } => {
                write!(f, "cannot allocate a {}x{} RGBA framebuffer", width, height)
            }
        }
    }
}

impl std::error::Error for FramebufferError {}

/// Fixed-size RGBA8 pixel buffer.
///
/// Storage is row-major with 4 bytes per pixel and is presented bottom-up.
/// Pixel `(x, y)` lives in storage row `height - 1 - y`, so on screen `y = 0`
/// is the top row and `y` grows downwards like window coordinates.
#[derive(Clone)]
pub struct Framebuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Allocate a framebuffer of exactly `width * height * 4` bytes.
    ///
    /// The buffer starts filled with `0xFF` bytes; callers are expected to
    /// `clear` it before relying on its contents.
    pub fn try_new(dimensions: WindowDimensions) -> Result<Self, FramebufferError> {
        let WindowDimensions { width, height } = dimensions;
        let error = FramebufferError::Allocation { width, height };

        let size = dimensions.buffer_size().ok_or_else(|| error.clone())?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(size).map_err(|_| error)?;
        pixels.resize(size, 0xFF);

        Ok(Self { pixels, width, height })
    }

    /// Byte offset of pixel `(x, y)`, or `None` when it lies outside the buffer
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }

        let row = (self.height - 1 - y as u32) as usize;
        Some((row * self.width as usize + x as usize) * 4)
    }

    /// Overwrite pixel `(x, y)` with `(R, G, B, 0)`. Out-of-range writes are dropped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.offset(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.pattern());
        }
    }

    /// Read back the 4 bytes of pixel `(x, y)`
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let idx = self.offset(x, y)?;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(out)
    }

    /// Fill every pixel with `color`
    pub fn clear(&mut self, color: Color) {
        fill_pattern(&mut self.pixels, color.pattern());
    }

    /// Draw the Bresenham segment between two pixel coordinates
    pub fn draw_line(&mut self, p1: (i32, i32), p2: (i32, i32), color: Color) {
        rasterize_line(p1, p2, |x, y| self.set_pixel(x, y, color));
    }

    /// Raw RGBA bytes, storage row 0 (bottom of the image) first
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> WindowDimensions {
        WindowDimensions::new(self.width, self.height)
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}
