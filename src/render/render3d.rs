//! Column renderer: one ray per screen column, flat-shaded wall strips.
use raylib::prelude::Color;

use crate::config::Config;
use crate::core::player::Player;
use crate::core::scene::SceneGrid;
use crate::render::casters::{RayHit, cast_ray};
use crate::render::framebuffer::Framebuffer;
use crate::render::palette::{brightness, color_for};
use crate::render::projector::ViewPlane;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shading {
    pub near_clip: f32,
    pub far_clip: f32,
    pub fog_curve: f32,
    pub side_shade: f32,
}

impl Shading {
    pub fn from_config(config: &Config) -> Self {
        Self {
            near_clip: config.camera.near_clip,
            far_clip: config.camera.far_clip,
            fog_curve: config.render.fog_curve,
            side_shade: config.render.side_shade,
        }
    }

    /// Darken a wall colour by distance fog, then by wall orientation.
    pub fn wall_color(&self, base: Color, distance: f32, hit_vertical: bool) -> Color {
        let fog = (distance.clamp(0.0, self.far_clip) / self.far_clip).powf(self.fog_curve);
        let col = brightness(base, -fog);
        let shade = if hit_vertical { self.side_shade } else { 0.0 };
        brightness(col, -shade)
    }
}

/// Rows `[y_start, y_end)` covered by a wall at `distance`.
///
/// A wall one tile away exactly fills the screen; anything nearer is clipped
/// to the full column.
pub fn strip_span(distance: f32, height: u32) -> (u32, u32) {
    if distance <= 0.0 {
        return (0, height);
    }
    let line_height = (height as f32 / distance) as u32;
    if line_height >= height {
        (0, height)
    } else {
        let half = height / 2;
        (half - line_height / 2, half + line_height / 2)
    }
}

/// Distance along the view axis; removes the fisheye bend of raw distance.
#[inline]
pub fn perpendicular_distance(player: &Player, hit: &RayHit) -> f32 {
    player.forward().dot(hit.point - player.pos)
}

/// Owns the frame buffer and fills it one column at a time.
pub struct FrameCompositor {
    fb: Framebuffer,
    shading: Shading,
}

impl FrameCompositor {
    pub fn new(width: u32, height: u32, background: Color, shading: Shading) -> Self {
        let mut fb = Framebuffer::new(width, height);
        fb.set_background_color(background);
        fb.clear();
        Self { fb, shading }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.render.width(),
            config.render.height(),
            config.render.background_color(),
            Shading::from_config(config),
        )
    }

    #[inline]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    pub fn render(&mut self, scene: &SceneGrid, player: &Player) -> &Framebuffer {
        self.fb.clear();
        let plane = ViewPlane::new(player, self.shading.near_clip);
        for x in 0..self.fb.width {
            let dir = plane.column_angle(x, self.fb.width);
            let hit = cast_ray(scene, player.pos, dir, self.shading.far_clip);
            if hit.is_hit() {
                self.draw_column(x, player, &hit);
            }
        }
        &self.fb
    }

    fn draw_column(&mut self, x: u32, player: &Player, hit: &RayHit) {
        let dist = perpendicular_distance(player, hit);
        let (y0, y1) = strip_span(dist, self.fb.height);
        let col = self.shading.wall_color(color_for(hit.tile_id), dist, hit.hit_vertical);
        self.fb.set_current_color(col);
        self.fb.fill_column(x, y0, y1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn shading() -> Shading {
        Shading { near_clip: 0.1, far_clip: 10.0, fog_curve: 20.0, side_shade: 0.15 }
    }

    #[test]
    fn strip_fills_column_at_one_tile_or_closer() {
        for d in [1.0, 0.75, 0.5, 0.01, 0.0, -1.0] {
            assert_eq!(strip_span(d, 135), (0, 135), "distance {d}");
        }
    }

    #[test]
    fn strip_is_centred() {
        assert_eq!(strip_span(2.5, 135), (40, 94));
        assert_eq!(strip_span(10.0, 135), (61, 73));
    }

    #[test]
    fn strip_grows_as_wall_approaches() {
        let mut last = 0;
        for i in (1..=200).rev() {
            let d = i as f32 * 0.05;
            let (y0, y1) = strip_span(d, 135);
            let h = y1 - y0;
            assert!(h >= last, "height shrank at distance {d}");
            last = h;
        }
        assert_eq!(last, 135);
    }

    #[test]
    fn fog_only_bites_near_far_clip() {
        let s = shading();
        let red = Color::new(255, 0, 0, 255);
        assert_eq!(s.wall_color(red, 2.0, false), red);
        assert_eq!(s.wall_color(red, 10.0, false), Color::new(0, 0, 0, 255));
        assert_eq!(s.wall_color(red, 50.0, false), Color::new(0, 0, 0, 255));
        let mid = s.wall_color(red, 9.7, false);
        assert!(mid.r > 0 && mid.r < 255);
    }

    #[test]
    fn column_hits_are_darker() {
        let s = shading();
        let red = Color::new(255, 0, 0, 255);
        assert_eq!(s.wall_color(red, 2.0, true), Color::new(216, 0, 0, 255));
    }

    #[test]
    fn perpendicular_distance_ignores_lateral_offset() {
        let p = Player::new(Vec2::new(3.5, 3.5), 0.0);
        let straight = RayHit { point: Vec2::new(3.5, 1.0), hit_vertical: false, tile_id: 1 };
        let skewed = RayHit { point: Vec2::new(5.0, 1.0), hit_vertical: false, tile_id: 1 };
        assert!((perpendicular_distance(&p, &straight) - 2.5).abs() < 1e-6);
        assert!((perpendicular_distance(&p, &skewed) - 2.5).abs() < 1e-6);
    }
}
