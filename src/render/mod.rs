//! Rendering: ray casting, projection and the column renderer.
//!
//! Re-exports:
//! - `casters`: grid ray casting
//! - `projector`: per-column ray directions
//! - `render3d`: column compositor and shading
//! - `framebuffer`: CPU pixel buffer and window blit
//! - `palette`: tile colours and brightness
//! - `minimap`: top-down debug overlay

pub mod casters;
pub mod framebuffer;
pub mod minimap;
pub mod palette;
pub mod projector;
pub mod render3d;

pub use casters::{RayHit, cast_ray};
pub use framebuffer::{Framebuffer, PixelScale};
pub use render3d::FrameCompositor;
