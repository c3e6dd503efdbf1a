//! Core game types (grid, geometry, player, input).
//!
//! Re-exports:
//! - `geometry`: angle wrapping and heading/vector conversion
//! - `scene`: tile grid and wall probing
//! - `player`: player pose and movement
//! - `process_events`: raylib input sampling

pub mod geometry;
pub mod player;
pub mod process_events;
pub mod scene;

pub use player::{InputSnapshot, Player};
pub use scene::{EMPTY, SceneError, SceneGrid, TileId};
