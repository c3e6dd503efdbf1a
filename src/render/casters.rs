//! Grid ray casting.
//!
//! A grid has two families of lines: column boundaries at integer `x` and row
//! boundaries at integer `y`. A ray is marched independently against each
//! family, one whole cell per step, and the nearer wall wins.
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::core::geometry::wrap_angle;
use crate::core::scene::{EMPTY, SceneGrid, TileId};

/// Headings closer than this to an axis are treated as exactly on it.
const AXIS_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec2,
    /// Hit came from the column-boundary march.
    pub hit_vertical: bool,
    /// [`EMPTY`] when nothing was found within the step budget; `point` is
    /// then meaningless.
    pub tile_id: TileId,
}

impl RayHit {
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.tile_id != EMPTY
    }
}

/// Heading split into the four axis directions and everything else.
///
/// `tan` blows up or vanishes on the axes, so those get exact unit steps
/// instead of a slope.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Heading {
    Up,
    Right,
    Down,
    Left,
    Oblique(f32),
}

impl Heading {
    fn classify(dir: f32) -> Self {
        let near = |axis: f32| (dir - axis).abs() < AXIS_EPSILON;
        if near(0.0) || near(TAU) {
            Heading::Up
        } else if near(FRAC_PI_2) {
            Heading::Right
        } else if near(PI) {
            Heading::Down
        } else if near(3.0 * FRAC_PI_2) {
            Heading::Left
        } else {
            Heading::Oblique(dir)
        }
    }

    /// First column-boundary crossing and the per-column step, or `None` when
    /// the ray runs parallel to the column lines.
    fn column_march(self, from: Vec2) -> Option<(Vec2, Vec2)> {
        let rightward = match self {
            Heading::Up | Heading::Down => return None,
            Heading::Right => true,
            Heading::Left => false,
            Heading::Oblique(dir) => dir < PI,
        };
        let (boundary, sx) = if rightward {
            (from.x.floor() + 1.0, 1.0)
        } else {
            (from.x.floor(), -1.0)
        };
        let dx = boundary - from.x;
        let (dy, sy) = match self {
            Heading::Oblique(dir) => {
                let t = dir.tan();
                (-dx / t, -sx / t)
            }
            _ => (0.0, 0.0),
        };
        Some((Vec2::new(boundary, from.y + dy), Vec2::new(sx, sy)))
    }

    /// First row-boundary crossing and the per-row step, or `None` when the
    /// ray runs parallel to the row lines.
    fn row_march(self, from: Vec2) -> Option<(Vec2, Vec2)> {
        let downward = match self {
            Heading::Left | Heading::Right => return None,
            Heading::Down => true,
            Heading::Up => false,
            Heading::Oblique(dir) => dir > FRAC_PI_2 && dir < 3.0 * FRAC_PI_2,
        };
        let (boundary, sy) = if downward {
            (from.y.floor() + 1.0, 1.0)
        } else {
            (from.y.floor(), -1.0)
        };
        let dy = boundary - from.y;
        let (dx, sx) = match self {
            Heading::Oblique(dir) => {
                let t = dir.tan();
                (-dy * t, -sy * t)
            }
            _ => (0.0, 0.0),
        };
        Some((Vec2::new(from.x + dx, boundary), Vec2::new(sx, sy)))
    }
}

struct MarchEnd {
    point: Vec2,
    tile_id: TileId,
}

impl MarchEnd {
    const NEVER: MarchEnd = MarchEnd { point: Vec2::INFINITY, tile_id: EMPTY };
}

fn march(scene: &SceneGrid, start: Vec2, step: Vec2, max_steps: u32) -> MarchEnd {
    let mut point = start;
    for _ in 0..max_steps {
        let tile_id = scene.point_touching_wall(point);
        if tile_id != EMPTY {
            return MarchEnd { point, tile_id };
        }
        point += step;
    }
    MarchEnd { point, tile_id: EMPTY }
}

/// Number of cells each march may visit for a given far clip distance.
#[inline]
pub fn step_budget(far_clip: f32) -> u32 {
    far_clip.max(0.0) as u32 + 1
}

/// Cast a ray from `from` along heading `dir` (radians, any range).
pub fn cast_ray(scene: &SceneGrid, from: Vec2, dir: f32, far_clip: f32) -> RayHit {
    let heading = Heading::classify(wrap_angle(dir));
    let budget = step_budget(far_clip);

    let by_column = heading
        .column_march(from)
        .map_or(MarchEnd::NEVER, |(start, step)| march(scene, start, step, budget));
    let by_row = heading
        .row_march(from)
        .map_or(MarchEnd::NEVER, |(start, step)| march(scene, start, step, budget));

    if from.distance_squared(by_column.point) < from.distance_squared(by_row.point) {
        RayHit { point: by_column.point, hit_vertical: true, tile_id: by_column.tile_id }
    } else {
        RayHit { point: by_row.point, hit_vertical: false, tile_id: by_row.tile_id }
    }
}
