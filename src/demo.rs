//! Demo world: a row of pendulums hanging from a fixed beam.
//!
//! Stands in for a full rigid-body engine so the viewer has something to show.
//! Each bob integrates the simple pendulum equation with semi-implicit Euler;
//! the beam never moves.

use glam::Vec2;

use crate::traits::{BodyView, JointView, Simulation};

const GRAVITY: f32 = 9.81;
const BEAM_Y: f32 = 12.0;
const BEAM_THICKNESS: f32 = 0.5;
const BOB_SIZE: f32 = 1.5;
const SPACING: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    pub pivot: Vec2,
    pub length: f32,
    /// Angle from straight down, radians, counter-clockwise
    pub angle: f32,
    pub angular_velocity: f32,
}

impl Pendulum {
    pub fn step(&mut self, dt: f32) {
        self.angular_velocity -= GRAVITY / self.length * self.angle.sin() * dt;
        self.angle += self.angular_velocity * dt;
    }

    pub fn bob_position(&self) -> Vec2 {
        self.pivot + self.length * Vec2::new(self.angle.sin(), -self.angle.cos())
    }

    fn bob(&self) -> BodyView {
        BodyView {
            position: self.bob_position(),
            rotation: self.angle,
            width: Vec2::splat(BOB_SIZE),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DemoWorld {
    beam: BodyView,
    pendulums: Vec<Pendulum>,
}

impl DemoWorld {
    /// `count` pendulums of increasing length, the first one released from
    /// a raised angle
    pub fn new(count: usize) -> Self {
        let span = SPACING * count.saturating_sub(1) as f32;
        let beam = BodyView {
            position: Vec2::new(0.0, BEAM_Y),
            rotation: 0.0,
            width: Vec2::new(span + SPACING * 2.0, BEAM_THICKNESS),
        };

        let pendulums = (0..count)
            .map(|i| Pendulum {
                pivot: Vec2::new(-span / 2.0 + SPACING * i as f32, BEAM_Y),
                length: 8.0 + i as f32 * 1.5,
                angle: if i == 0 { 1.0 } else { 0.25 * (i % 2) as f32 },
                angular_velocity: 0.0,
            })
            .collect();

        Self { beam, pendulums }
    }

    pub fn pendulums(&self) -> &[Pendulum] {
        &self.pendulums
    }
}

impl Simulation for DemoWorld {
    fn step(&mut self, dt: f32) {
        for pendulum in &mut self.pendulums {
            pendulum.step(dt);
        }
    }

    fn bodies(&self) -> Box<dyn Iterator<Item = BodyView> + '_> {
        Box::new(std::iter::once(self.beam).chain(self.pendulums.iter().map(Pendulum::bob)))
    }

    fn joints(&self) -> Box<dyn Iterator<Item = JointView> + '_> {
        Box::new(self.pendulums.iter().map(move |p| JointView {
            body1: self.beam,
            body2: p.bob(),
            local_anchor1: p.pivot - self.beam.position,
            // The pivot sits straight "up" the rod in the bob's rotated frame
            local_anchor2: Vec2::new(0.0, p.length),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wireframe::joint_segments;

    #[test]
    fn demo_world_counts() {
        let world = DemoWorld::new(4);
        assert_eq!(world.bodies().count(), 5);
        assert_eq!(world.joints().count(), 4);
    }

    #[test]
    fn pendulum_swings_back_toward_rest() {
        let mut p = Pendulum {
            pivot: Vec2::ZERO,
            length: 5.0,
            angle: 0.5,
            angular_velocity: 0.0,
        };
        p.step(1.0 / 60.0);
        assert!(p.angular_velocity < 0.0);
        assert!(p.angle < 0.5);
    }

    #[test]
    fn joint_anchor_meets_pivot() {
        let mut world = DemoWorld::new(3);
        for _ in 0..30 {
            world.step(1.0 / 60.0);
        }

        for (joint, pendulum) in world.joints().zip(world.pendulums()) {
            let segments = joint_segments(&joint);
            // beam anchor and bob anchor both land on the pivot
            assert!((segments[0].1 - pendulum.pivot).length() < 1e-3);
            assert!((segments[2].1 - pendulum.pivot).length() < 1e-3);
        }
    }

    #[test]
    fn empty_world_has_only_beam() {
        let world = DemoWorld::new(0);
        assert_eq!(world.bodies().count(), 1);
        assert_eq!(world.joints().count(), 0);
    }
}
