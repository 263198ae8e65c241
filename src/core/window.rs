/// Window/framebuffer dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels, `None` on overflow
    pub fn pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Size in bytes of an RGBA8 buffer with these dimensions, `None` on overflow
    pub fn buffer_size(&self) -> Option<usize> {
        self.pixel_count()?.checked_mul(4)
    }
}
