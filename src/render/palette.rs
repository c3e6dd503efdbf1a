//! Tile colours and brightness shading.
use raylib::prelude::Color;

use crate::core::scene::{EMPTY, TileId};

/// Flat colour of a wall tile. Unknown ids render magenta so bad scene data
/// stands out.
///
/// # Panics
/// On [`EMPTY`]; empty cells have no colour and must be filtered first.
pub fn color_for(tile_id: TileId) -> Color {
    assert!(tile_id != EMPTY, "empty tile has no colour");
    match tile_id {
        1 => Color::new(255, 0, 0, 255),
        2 => Color::new(0, 255, 0, 255),
        3 => Color::new(0, 255, 255, 255),
        _ => Color::new(255, 0, 255, 255),
    }
}

/// Lighten (`factor > 0`) or darken (`factor < 0`) a colour, keeping alpha.
/// `factor` is clamped to `[-1, 1]`.
pub fn brightness(color: Color, factor: f32) -> Color {
    let f = factor.clamp(-1.0, 1.0);
    let apply = |c: u8| -> u8 {
        let c = c as f32;
        let v = if f < 0.0 { c * (1.0 + f) } else { (255.0 - c) * f + c };
        v as u8
    };
    Color::new(apply(color.r), apply(color.g), apply(color.b), color.a)
}
