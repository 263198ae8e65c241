use glam::Vec2;

use crate::core::WindowDimensions;

/// World-to-screen affine mapping: per-axis scale plus a pixel offset.
///
/// The world origin sits at the center of the screen and world +Y points up:
///
/// ```text
/// screen_x = width / 2  + world_x * scale.x + offset.x
/// screen_y = height / 2 - world_y * scale.y + offset.y
/// ```
///
/// `width / 2` and `height / 2` use integer division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: Vec2,
    pub offset: Vec2,
}

impl ViewTransform {
    pub fn new(scale: Vec2, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    fn center(dimensions: WindowDimensions) -> Vec2 {
        Vec2::new((dimensions.width / 2) as f32, (dimensions.height / 2) as f32)
    }

    /// Map a world point to continuous screen coordinates
    pub fn world_to_screen(&self, world: Vec2, dimensions: WindowDimensions) -> Vec2 {
        let center = Self::center(dimensions);
        Vec2::new(
            center.x + world.x * self.scale.x + self.offset.x,
            center.y - world.y * self.scale.y + self.offset.y,
        )
    }

    /// Exact algebraic inverse of [`world_to_screen`](Self::world_to_screen).
    /// Requires a non-zero scale on both axes.
    pub fn screen_to_world(&self, screen: Vec2, dimensions: WindowDimensions) -> Vec2 {
        let center = Self::center(dimensions);
        Vec2::new(
            (screen.x - center.x - self.offset.x) / self.scale.x,
            -(screen.y - center.y - self.offset.y) / self.scale.y,
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(Vec2::ONE, Vec2::ZERO)
    }
}
