use super::window::WindowDimensions;

/// Read-only view of a rendered frame handed to the platform for presentation.
///
/// Borrows the renderer's buffer, so the borrow checker keeps it from
/// outliving the next `clear` or any other mutation of that renderer.
/// Storage row 0 holds the pixels with the largest `y` and belongs at the
/// bottom of the presented image, like a bottom-up bitmap.
#[derive(Debug, Clone, Copy)]
pub struct DrawFrameInfo<'a> {
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
}

impl<'a> DrawFrameInfo<'a> {
    pub fn new(pixels: &'a [u8], width: u32, height: u32) -> Self {
        Self { pixels, width, height }
    }

    pub fn dimensions(&self) -> WindowDimensions {
        WindowDimensions::new(self.width, self.height)
    }

    /// Bytes per storage row
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }
}
