//! Wireframe outlines for simulation entities.

use glam::{Mat2, Vec2};

use super::renderer::Renderer;
use crate::math::Color;
use crate::traits::{BodyView, JointView};

/// World-space corners of a body's box, counter-clockwise from bottom-left
pub fn body_corners(body: &BodyView) -> [Vec2; 4] {
    let rotation = Mat2::from_angle(body.rotation);
    let h = body.width * 0.5;

    [
        body.position + rotation * Vec2::new(-h.x, -h.y),
        body.position + rotation * Vec2::new(h.x, -h.y),
        body.position + rotation * Vec2::new(h.x, h.y),
        body.position + rotation * Vec2::new(-h.x, h.y),
    ]
}

/// The four segments drawn for a joint: center1 -> anchor1 -> center2 -> anchor2 -> center1
pub fn joint_segments(joint: &JointView) -> [(Vec2, Vec2); 4] {
    let x1 = joint.body1.position;
    let p1 = x1 + Mat2::from_angle(joint.body1.rotation) * joint.local_anchor1;

    let x2 = joint.body2.position;
    let p2 = x2 + Mat2::from_angle(joint.body2.rotation) * joint.local_anchor2;

    [(x1, p1), (p1, x2), (x2, p2), (p2, x1)]
}

pub fn draw_body(renderer: &mut Renderer, body: &BodyView, color: Color) {
    let corners = body_corners(body);
    for i in 0..corners.len() {
        renderer.line_world(corners[i], corners[(i + 1) % corners.len()], color);
    }
}

pub fn draw_joint(renderer: &mut Renderer, joint: &JointView, color: Color) {
    for (from, to) in joint_segments(joint) {
        renderer.line_world(from, to, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn corners_of_axis_aligned_box() {
        let body = BodyView {
            position: Vec2::new(1.0, 2.0),
            rotation: 0.0,
            width: Vec2::new(4.0, 2.0),
        };
        let c = body_corners(&body);
        assert!(approx(c[0], Vec2::new(-1.0, 1.0)));
        assert!(approx(c[2], Vec2::new(3.0, 3.0)));
    }

    #[test]
    fn corners_follow_rotation() {
        let body = BodyView {
            position: Vec2::ZERO,
            rotation: FRAC_PI_2,
            width: Vec2::new(4.0, 2.0),
        };
        // (2, -1) rotated a quarter turn counter-clockwise is (1, 2)
        assert!(approx(body_corners(&body)[1], Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn joint_segments_form_closed_loop() {
        let body1 = BodyView { position: Vec2::ZERO, rotation: 0.0, width: Vec2::ONE };
        let body2 = BodyView { position: Vec2::new(0.0, -3.0), rotation: 0.0, width: Vec2::ONE };
        let joint = JointView {
            body1,
            body2,
            local_anchor1: Vec2::new(0.5, 0.0),
            local_anchor2: Vec2::new(0.0, 3.0),
        };

        let segments = joint_segments(&joint);
        for i in 0..4 {
            assert!(approx(segments[i].1, segments[(i + 1) % 4].0));
        }
        assert!(approx(segments[0].1, Vec2::new(0.5, 0.0)));
        assert!(approx(segments[2].1, Vec2::ZERO));
    }
}
