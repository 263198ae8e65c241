use glam::Vec2;

/// Snapshot of a rigid box body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub position: Vec2,
    /// Rotation angle in radians, counter-clockwise
    pub rotation: f32,
    /// Full box extents (twice the half-extents)
    pub width: Vec2,
}

/// Snapshot of a joint between two bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointView {
    pub body1: BodyView,
    pub body2: BodyView,
    /// Anchor in `body1`'s local frame
    pub local_anchor1: Vec2,
    /// Anchor in `body2`'s local frame
    pub local_anchor2: Vec2,
}

/// Physics world driven by the viewer.
///
/// Iteration order must be stable between calls.
pub trait Simulation {
    /// Advance the world by `dt` seconds
    fn step(&mut self, dt: f32);

    fn bodies(&self) -> Box<dyn Iterator<Item = BodyView> + '_>;

    fn joints(&self) -> Box<dyn Iterator<Item = JointView> + '_>;
}
