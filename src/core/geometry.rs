//! Angle and vector helpers.
//!
//! Heading convention: angle 0 looks "up" the grid (towards decreasing row),
//! increasing angle turns towards increasing column.
use glam::Vec2;
use std::f32::consts::TAU;

/// Wrap any angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    let w = a.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if w >= TAU { 0.0 } else { w }
}

/// Unit forward vector for a heading.
#[inline]
pub fn direction_vector(angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(s, -c)
}

/// Heading of a vector; inverse of [`direction_vector`] up to length.
#[inline]
pub fn angle_of(v: Vec2) -> f32 {
    wrap_angle(v.x.atan2(-v.y))
}

/// Rotate a quarter turn towards increasing heading ("to the right").
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Smallest absolute difference between two headings.
#[inline]
pub fn angle_distance(a: f32, b: f32) -> f32 {
    let d = wrap_angle(a - b);
    d.min(TAU - d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn wrap_angle_is_range_closed_and_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let a: f32 = rng.gen_range(-100.0..100.0);
            let w = wrap_angle(a);
            assert!((0.0..TAU).contains(&w), "{a} wrapped to {w}");
            assert_eq!(wrap_angle(w), w);
        }
    }

    #[test]
    fn wrap_angle_edges() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert_eq!(wrap_angle(TAU), 0.0);
        assert_eq!(wrap_angle(-1e-9), 0.0);
        assert!((wrap_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn direction_vector_follows_screen_convention() {
        let up = direction_vector(0.0);
        assert!((up - Vec2::new(0.0, -1.0)).length() < 1e-6);
        let right = direction_vector(FRAC_PI_2);
        assert!((right - Vec2::new(1.0, 0.0)).length() < 1e-6);
        let down = direction_vector(PI);
        assert!((down - Vec2::new(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn angle_of_round_trips() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2000 {
            let a: f32 = rng.gen_range(0.0..TAU);
            let back = angle_of(direction_vector(a));
            assert!(angle_distance(a, back) < 1e-4, "{a} -> {back}");
        }
    }

    #[test]
    fn angle_of_ignores_length() {
        let a = angle_of(Vec2::new(3.0, 0.0));
        assert!((a - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn perp_turns_forward_to_the_right() {
        let p = perp(direction_vector(0.0));
        assert!((p - direction_vector(FRAC_PI_2)).length() < 1e-6);
    }
}
