//! Runtime settings. Every field has a default, so a config file only needs
//! the values it changes.
use std::f32::consts::FRAC_PI_2;
use std::fs;
use std::path::Path;

use glam::Vec2;
use raylib::prelude::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::core::scene::{SceneError, SceneGrid};

/// Horizontal field of view. Fixed: the view plane is as wide as it is far.
pub const FOV: f32 = FRAC_PI_2;

pub const DEFAULT_LAYOUT: &str = "
0000000000003
0000300010003
0000300010003
0000002210003
0000000000003
0000000000003
0000000000003
0000000000003
";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error(transparent)]
    Scene(#[from] SceneError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub scene: SceneConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub aspect_w: u32,
    pub aspect_h: u32,
    /// Multiplier applied to the aspect ratio to get the render resolution.
    pub factor: u32,
    /// Exponent applied to normalised distance before darkening.
    pub fog_curve: f32,
    /// Flat darkening of walls hit on a column boundary.
    pub side_shade: f32,
    pub background: [u8; 3],
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub near_clip: f32,
    pub far_clip: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Tiles per second.
    pub move_speed: f32,
    /// Radians per pixel of mouse travel.
    pub mouse_sensitivity: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub layout: String,
    pub start: [f32; 2],
    pub start_rotation: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub initial_factor: u32,
    pub title: String,
    pub show_minimap: bool,
    pub show_rays: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            aspect_w: 16,
            aspect_h: 9,
            factor: 15,
            fog_curve: 20.0,
            side_shade: 0.15,
            background: [0, 0, 0],
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { near_clip: 0.1, far_clip: 10.0 }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self { move_speed: 2.0, mouse_sensitivity: 0.004 }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT.to_string(),
            start: [2.0, 2.5],
            start_rotation: 0.0,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            initial_factor: 70,
            title: "Raycaster".to_string(),
            show_minimap: true,
            show_rays: false,
        }
    }
}

impl RenderConfig {
    #[inline]
    pub fn width(&self) -> u32 {
        self.aspect_w * self.factor
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.aspect_h * self.factor
    }

    pub fn background_color(&self) -> Color {
        let [r, g, b] = self.background;
        Color::new(r, g, b, 255)
    }
}

impl SceneConfig {
    pub fn start_position(&self) -> Vec2 {
        Vec2::from(self.start)
    }

    /// Parse the layout and check the start pose against it.
    pub fn build(&self) -> Result<SceneGrid, SceneError> {
        let grid = SceneGrid::parse(&self.layout)?;
        grid.check_start(self.start_position())?;
        Ok(grid)
    }
}

impl WindowConfig {
    pub fn initial_size(&self, render: &RenderConfig) -> (i32, i32) {
        (
            (render.aspect_w * self.initial_factor) as i32,
            (render.aspect_h * self.initial_factor) as i32,
        )
    }
}

impl Config {
    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: &str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason: reason.to_string() })
        };
        let r = &self.render;
        if r.aspect_w == 0 || r.aspect_h == 0 {
            return invalid("render.aspect", "aspect ratio must be non-zero");
        }
        if r.factor == 0 {
            return invalid("render.factor", "must be at least 1");
        }
        if !(r.fog_curve >= 0.0) {
            return invalid("render.fog_curve", "must be non-negative");
        }
        if !(0.0..=1.0).contains(&r.side_shade) {
            return invalid("render.side_shade", "must be within [0, 1]");
        }
        let c = &self.camera;
        if !(c.near_clip > 0.0) {
            return invalid("camera.near_clip", "must be positive");
        }
        if !(c.far_clip > c.near_clip) {
            return invalid("camera.far_clip", "must be greater than near_clip");
        }
        if self.window.initial_factor == 0 {
            return invalid("window.initial_factor", "must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_constants() {
        let c = Config::default();
        assert_eq!((c.render.width(), c.render.height()), (240, 135));
        assert_eq!(c.window.initial_size(&c.render), (1120, 630));
        assert!(c.validate().is_ok());

        let grid = c.scene.build().unwrap();
        assert_eq!((grid.cols(), grid.rows()), (13, 8));
        assert_eq!(grid.tile_at(12, 0), 3);
        assert_eq!(grid.tile_at(8, 1), 1);
        assert_eq!(grid.tile_at(6, 3), 2);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let c = Config::from_toml(
            r#"
            [render]
            factor = 10
            fog_curve = 4.0

            [camera]
            far_clip = 20.0
            "#,
        )
        .unwrap();
        assert_eq!(c.render.width(), 160);
        assert_eq!(c.render.fog_curve, 4.0);
        assert_eq!(c.render.aspect_w, 16);
        assert_eq!(c.camera.far_clip, 20.0);
        assert_eq!(c.camera.near_clip, 0.1);
        assert_eq!(c.controls.move_speed, 2.0);
    }

    #[test]
    fn scene_section_parses_layout() {
        let c = Config::from_toml(
            r#"
            [scene]
            layout = """
            111
            1.1
            111
            """
            start = [1.5, 1.5]
            start_rotation = 3.0
            "#,
        )
        .unwrap();
        let grid = c.scene.build().unwrap();
        assert_eq!((grid.cols(), grid.rows()), (3, 3));
    }

    #[test]
    fn bundled_example_config_loads() {
        let c = Config::from_toml(include_str!("../raycaster.toml")).unwrap();
        assert_eq!(c.camera.far_clip, 12.0);
        let grid = c.scene.build().unwrap();
        assert_eq!((grid.cols(), grid.rows()), (10, 7));
        assert_eq!(grid.tile_at(3, 2), 3);
    }

    #[test]
    fn rejects_bad_clip_planes() {
        let err = Config::from_toml("[camera]\nnear_clip = 2.0\nfar_clip = 1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "camera.far_clip", .. }));
    }

    #[test]
    fn rejects_zero_factor() {
        let err = Config::from_toml("[render]\nfactor = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "render.factor", .. }));
    }

    #[test]
    fn reports_syntax_errors() {
        assert!(matches!(Config::from_toml("[render"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn start_inside_wall_is_rejected() {
        let mut scene = SceneConfig::default();
        scene.start = [12.5, 0.5];
        assert!(matches!(scene.build(), Err(SceneError::StartInWall { .. })));
    }
}
