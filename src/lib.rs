//! Tile-grid ray caster.
//!
//! - `core`: scene grid, geometry helpers, player pose and input
//! - `render`: ray casting, projection, frame compositing and overlays
//! - `config`: typed settings with the stock defaults
//! - `engine`: the per-frame `update` / `render` entry points

pub mod config;
pub mod core;
pub mod engine;
pub mod render;

pub use config::Config;
pub use engine::Engine;
