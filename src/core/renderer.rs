use glam::Vec2;

use super::frame::DrawFrameInfo;
use super::framebuffer::{Framebuffer, FramebufferError};
use super::window::WindowDimensions;
use crate::math::{Color, ViewTransform};

/// Software line renderer: owns a framebuffer plus the world-to-screen transform
#[derive(Debug)]
pub struct Renderer {
    framebuffer: Framebuffer,
    transform: ViewTransform,
}

impl Renderer {
    /// Allocate the framebuffer and set up the view transform.
    ///
    /// Fails without leaving a usable renderer behind if the buffer cannot be
    /// allocated. Pixel contents are unspecified until the first `clear`.
    pub fn init(dimensions: WindowDimensions, scale: Vec2, offset: Vec2) -> Result<Self, FramebufferError> {
        let framebuffer = Framebuffer::try_new(dimensions)?;
        log::info!(
            "Renderer initialized: {}x{}, scale {:?}, offset {:?}",
            dimensions.width,
            dimensions.height,
            scale,
            offset
        );

        Ok(Self {
            framebuffer,
            transform: ViewTransform::new(scale, offset),
        })
    }

    pub fn set_scale(&mut self, x: f32, y: f32) {
        self.transform.scale = Vec2::new(x, y);
    }

    pub fn set_offsets(&mut self, x: f32, y: f32) {
        self.transform.offset = Vec2::new(x, y);
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn dimensions(&self) -> WindowDimensions {
        self.framebuffer.dimensions()
    }

    /// Continuous screen position of a world point
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.transform.world_to_screen(world, self.dimensions())
    }

    /// World position of a continuous screen point; inverse of `world_to_screen`
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.transform.screen_to_world(screen, self.dimensions())
    }

    // Pixel mapping truncates toward zero; `as` saturates far-off values
    // instead of wrapping them.
    pub fn x_to_screen(&self, x: f32) -> i32 {
        self.world_to_screen(Vec2::new(x, 0.0)).x as i32
    }

    pub fn y_to_screen(&self, y: f32) -> i32 {
        self.world_to_screen(Vec2::new(0.0, y)).y as i32
    }

    pub fn screen_to_x(&self, x: i32) -> f32 {
        self.screen_to_world(Vec2::new(x as f32, 0.0)).x
    }

    pub fn screen_to_y(&self, y: i32) -> f32 {
        self.screen_to_world(Vec2::new(0.0, y as f32)).y
    }

    /// Fill the whole frame with `color`
    pub fn clear(&mut self, color: Color) {
        self.framebuffer.clear(color);
    }

    /// Draw a segment between two pixel coordinates
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.framebuffer.draw_line((x1, y1), (x2, y2), color);
    }

    /// Draw a segment between two world-space points
    pub fn line_world(&mut self, p1: Vec2, p2: Vec2, color: Color) {
        let (x1, y1) = (self.x_to_screen(p1.x), self.y_to_screen(p1.y));
        let (x2, y2) = (self.x_to_screen(p2.x), self.y_to_screen(p2.y));
        self.line(x1, y1, x2, y2, color);
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Borrowed snapshot of the current frame for presentation
    pub fn frame_info(&self) -> DrawFrameInfo<'_> {
        DrawFrameInfo::new(
            self.framebuffer.pixels(),
            self.framebuffer.width(),
            self.framebuffer.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(width: u32, height: u32, scale: f32) -> Renderer {
        Renderer::init(WindowDimensions::new(width, height), Vec2::splat(scale), Vec2::ZERO).unwrap()
    }

    #[test]
    fn renderer_world_origin_is_center_pixel() {
        let r = renderer(40, 30, 2.0);
        assert_eq!((r.x_to_screen(0.0), r.y_to_screen(0.0)), (20, 15));
        assert_eq!((r.x_to_screen(1.0), r.y_to_screen(1.0)), (22, 13));
    }

    #[test]
    fn renderer_set_offsets_moves_both_axes() {
        let mut r = renderer(40, 30, 1.0);
        r.set_offsets(3.0, -4.0);
        assert_eq!((r.x_to_screen(0.0), r.y_to_screen(0.0)), (23, 11));
    }

    #[test]
    fn renderer_line_world_draws_through_transform() {
        let mut r = renderer(20, 20, 1.0);
        r.clear(Color::WHITE);
        r.line_world(Vec2::new(-2.0, 0.0), Vec2::new(2.0, 0.0), Color::BLACK);

        for x in 8..=12 {
            assert_eq!(r.framebuffer().pixel(x, 10), Some([0, 0, 0, 0]));
        }
        assert_eq!(r.framebuffer().pixel(7, 10), Some([255, 255, 255, 0]));
    }

    #[test]
    fn renderer_frame_info_matches_buffer() {
        let r = renderer(8, 4, 1.0);
        let info = r.frame_info();
        assert_eq!(info.dimensions(), WindowDimensions::new(8, 4));
        assert_eq!(info.pixels.len(), 8 * 4 * 4);
        assert_eq!(info.stride(), 32);
    }
}
