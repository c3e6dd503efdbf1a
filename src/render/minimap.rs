//! Top-down overlay: tiles, grid lines, the player and the view plane.
//! Drawn straight to the window on top of the scaled frame.
use glam::Vec2;
use raylib::prelude::*;

use crate::core::player::Player;
use crate::core::scene::{EMPTY, SceneGrid};
use crate::render::casters::cast_ray;
use crate::render::palette::color_for;
use crate::render::projector::ViewPlane;

const OFFSET: f32 = 40.0;
const CELL: f32 = 40.0;
const GRID_COLOR: Color = Color::new(0x50, 0x50, 0x50, 0xff);
const BACKDROP: Color = Color::new(0x22, 0x22, 0x22, 0x44);
const HEADING_LEN: f32 = 20.0;

#[inline]
fn to_screen(p: Vec2) -> Vector2 {
    Vector2::new(p.x * CELL + OFFSET, p.y * CELL + OFFSET)
}

pub struct MinimapView<'a> {
    pub scene: &'a SceneGrid,
    pub player: &'a Player,
    pub near_clip: f32,
    pub far_clip: f32,
    /// Number of debug rays to fan across the view; 0 disables them.
    pub rays: u32,
}

impl MinimapView<'_> {
    pub fn draw<D: RaylibDraw>(&self, d: &mut D) {
        self.draw_tiles(d);
        self.draw_grid(d);
        self.draw_player(d);
    }

    fn draw_tiles<D: RaylibDraw>(&self, d: &mut D) {
        let (cols, rows) = (self.scene.cols(), self.scene.rows());
        let (o, c) = (OFFSET as i32, CELL as i32);
        d.draw_rectangle(o, o, cols as i32 * c, rows as i32 * c, BACKDROP);
        for row in 0..rows {
            for col in 0..cols {
                let id = self.scene.tile_at(col, row);
                if id != EMPTY {
                    d.draw_rectangle(col as i32 * c + o, row as i32 * c + o, c, c, color_for(id));
                }
            }
        }
    }

    fn draw_grid<D: RaylibDraw>(&self, d: &mut D) {
        let (cols, rows) = (self.scene.cols() as i32, self.scene.rows() as i32);
        let (o, c) = (OFFSET as i32, CELL as i32);
        for row in 0..=rows {
            let y = row * c + o;
            d.draw_line(o, y, cols * c + o, y, GRID_COLOR);
        }
        for col in 0..=cols {
            let x = col * c + o;
            d.draw_line(x, o, x, rows * c + o, GRID_COLOR);
        }
    }

    fn draw_player<D: RaylibDraw>(&self, d: &mut D) {
        let p = to_screen(self.player.pos);
        d.draw_circle_v(p, 10.0, Color::PINK);
        let tip = self.player.pos * CELL + self.player.forward() * HEADING_LEN;
        d.draw_line_ex(p, Vector2::new(tip.x + OFFSET, tip.y + OFFSET), 5.0, Color::PINK);

        let plane = ViewPlane::new(self.player, self.near_clip);
        if self.rays > 0 {
            self.draw_rays(d, &plane, p);
        }
        let (l, r) = (to_screen(plane.left), to_screen(plane.right));
        d.draw_line_ex(p, l, 1.0, Color::WHITE);
        d.draw_line_ex(p, r, 1.0, Color::WHITE);
        d.draw_line_ex(l, r, 1.0, Color::WHITE);
    }

    /// Fan of cast rays, hue sweeping across the view; column-boundary hits
    /// use the complementary hue.
    fn draw_rays<D: RaylibDraw>(&self, d: &mut D, plane: &ViewPlane, p: Vector2) {
        for i in 0..self.rays {
            let t = i as f32 / self.rays as f32;
            let dir = plane.column_angle(i, self.rays);
            let hit = cast_ray(self.scene, self.player.pos, dir, self.far_clip);
            if !hit.is_hit() {
                continue;
            }
            let hue = 360.0 * t;
            let mut col = Color::color_from_hsv(if hit.hit_vertical { (180.0 + hue) % 360.0 } else { hue }, 1.0, 1.0);
            col.a = 100;
            d.draw_line_ex(p, to_screen(hit.point), 1.0, col);
        }
    }
}
