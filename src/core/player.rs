use glam::Vec2;

use crate::config::ControlsConfig;
use crate::core::geometry::{direction_vector, perp, wrap_angle};

/// One frame worth of sampled input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    /// Horizontal mouse travel in pixels since the last frame.
    pub mouse_dx: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2, // grid units
    rot: f32,      // always in [0, 2π)
}

impl Player {
    pub fn new(pos: Vec2, rot: f32) -> Self {
        Self { pos, rot: wrap_angle(rot) }
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rot
    }

    #[inline]
    pub fn forward(&self) -> Vec2 {
        direction_vector(self.rot)
    }

    /// Unit vector pointing to the player's right.
    #[inline]
    pub fn strafe(&self) -> Vec2 {
        perp(self.forward())
    }

    pub fn rotate(&mut self, delta: f32) {
        self.rot = wrap_angle(self.rot + delta);
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Apply one frame of input. Walls do not block movement.
    pub fn update(&mut self, input: &InputSnapshot, dt: f32, controls: &ControlsConfig) {
        self.rotate(input.mouse_dx * controls.mouse_sensitivity);

        let step = controls.move_speed * dt;
        let forward = self.forward();
        let strafe = self.strafe();
        if input.forward {
            self.translate(forward * step);
        }
        if input.backward {
            self.translate(-forward * step);
        }
        if input.strafe_left {
            self.translate(-strafe * step);
        }
        if input.strafe_right {
            self.translate(strafe * step);
        }
    }
}
