//! Per-column ray directions from the player's pose.
use glam::Vec2;

use crate::config::FOV;
use crate::core::geometry::{angle_of, perp};
use crate::core::player::Player;

/// View-plane segment in front of the player, at the near clip distance.
///
/// The segment's half-width is `near_clip * tan(FOV / 2)`; at 90° that equals
/// its distance from the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlane {
    pub origin: Vec2,
    /// Endpoint seen by column 0 (left edge of the screen).
    pub left: Vec2,
    pub right: Vec2,
}

impl ViewPlane {
    pub fn new(player: &Player, near_clip: f32) -> Self {
        let f = player.forward() * near_clip;
        let side = perp(f) * (FOV * 0.5).tan();
        let centre = player.pos + f;
        Self {
            origin: player.pos,
            left: centre - side,
            right: centre + side,
        }
    }

    /// Heading of the ray through column `x` of `width`.
    pub fn column_angle(&self, x: u32, width: u32) -> f32 {
        let t = x as f32 / width as f32;
        angle_of(self.left.lerp(self.right, t) - self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::angle_distance;
    use std::f32::consts::{FRAC_PI_4, TAU};

    #[test]
    fn endpoints_straddle_forward() {
        let p = Player::new(Vec2::new(2.0, 2.0), 0.0);
        let plane = ViewPlane::new(&p, 0.1);
        assert!((plane.left - Vec2::new(1.9, 1.9)).length() < 1e-6);
        assert!((plane.right - Vec2::new(2.1, 1.9)).length() < 1e-6);
    }

    #[test]
    fn columns_span_field_of_view() {
        let p = Player::new(Vec2::new(4.0, 4.0), 1.0);
        let plane = ViewPlane::new(&p, 0.1);
        let first = plane.column_angle(0, 240);
        let mid = plane.column_angle(120, 240);
        assert!(angle_distance(first, 1.0 - FRAC_PI_4) < 1e-4);
        assert!(angle_distance(mid, 1.0) < 1e-4);
        // x == width lands exactly on the right edge
        let last = plane.column_angle(240, 240);
        assert!(angle_distance(last, 1.0 + FRAC_PI_4) < 1e-4);
        assert!((angle_distance(first, last) - FOV).abs() < 1e-4);
    }

    #[test]
    fn angles_sweep_left_to_right_across_wrap() {
        let p = Player::new(Vec2::new(1.0, 1.0), 0.0);
        let plane = ViewPlane::new(&p, 0.5);
        let a0 = plane.column_angle(0, 8);
        let a4 = plane.column_angle(4, 8);
        assert!(angle_distance(a0, TAU - FRAC_PI_4) < 1e-4);
        assert!(angle_distance(a4, 0.0) < 1e-4);
        assert!((0.0..TAU).contains(&a0));
    }
}
