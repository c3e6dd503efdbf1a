//! Frame-at-a-time driver: `update` once per frame, then `render`.
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::core::player::{InputSnapshot, Player};
use crate::core::scene::SceneGrid;
use crate::render::framebuffer::Framebuffer;
use crate::render::render3d::FrameCompositor;

pub struct Engine {
    config: Config,
    scene: SceneGrid,
    player: Player,
    compositor: FrameCompositor,
}

impl Engine {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let scene = config.scene.build()?;
        let player = Player::new(config.scene.start_position(), config.scene.start_rotation);
        let compositor = FrameCompositor::from_config(&config);
        info!(
            cols = scene.cols(),
            rows = scene.rows(),
            width = config.render.width(),
            height = config.render.height(),
            "engine ready"
        );
        Ok(Self { config, scene, player, compositor })
    }

    pub fn update(&mut self, input: &InputSnapshot, dt: f32) {
        self.player.update(input, dt, &self.config.controls);
    }

    pub fn render(&mut self) -> &Framebuffer {
        self.compositor.render(&self.scene, &self.player)
    }

    #[inline] pub fn config(&self) -> &Config { &self.config }
    #[inline] pub fn scene(&self) -> &SceneGrid { &self.scene }
    #[inline] pub fn player(&self) -> &Player { &self.player }
    #[inline] pub fn framebuffer(&self) -> &Framebuffer { self.compositor.framebuffer() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn default_engine_renders_full_frame() {
        let mut config = Config::default();
        // face the pillar of tile 3 to the right of the start
        config.scene.start_rotation = std::f32::consts::FRAC_PI_2;
        let mut engine = Engine::new(config).unwrap();
        let fb = engine.render();
        assert_eq!(fb.color_buffer.len(), 240 * 135);
        assert!(fb.color_buffer.iter().any(|&c| c != fb.background_color));
    }

    #[test]
    fn update_moves_player() {
        let mut engine = Engine::new(Config::default()).unwrap();
        let input = InputSnapshot { forward: true, ..Default::default() };
        engine.update(&input, 0.25);
        assert!((engine.player().pos - Vec2::new(2.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn invalid_config_is_refused() {
        let mut config = Config::default();
        config.camera.far_clip = 0.0;
        assert!(matches!(Engine::new(config), Err(ConfigError::Invalid { .. })));
    }
}
