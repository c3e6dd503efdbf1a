use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tile_raycaster::config::Config;
use tile_raycaster::core::process_events::{CursorCapture, process_events};
use tile_raycaster::engine::Engine;
use tile_raycaster::render::PixelScale;
use tile_raycaster::render::minimap::MinimapView;

/// Rays in the minimap debug fan.
const DEBUG_RAYS: u32 = 60;

#[derive(Parser)]
#[command(name = "tile_raycaster", about = "First-person view of a tile grid")]
struct Cli {
    /// TOML file overriding the default settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Start with the minimap hidden
    #[arg(long)]
    no_minimap: bool,

    /// Start with the minimap ray fan shown
    #[arg(long)]
    rays: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => {
            info!("no config file given, using defaults");
            Config::default()
        }
    };
    if cli.no_minimap {
        config.window.show_minimap = false;
    }
    if cli.rays {
        config.window.show_rays = true;
    }

    let mut engine = Engine::new(config).context("building scene")?;
    let (win_w, win_h) = engine.config().window.initial_size(&engine.config().render);
    let mut show_minimap = engine.config().window.show_minimap;
    let mut show_rays = engine.config().window.show_rays;

    let (mut window, raylib_thread) = raylib::init()
        .size(win_w, win_h)
        .resizable()
        .title(&engine.config().window.title)
        .build();

    let mut cursor = CursorCapture::default();
    let mut scale = PixelScale::fit(window.get_screen_width(), window.get_screen_height(), engine.framebuffer());

    while !window.window_should_close() {
        if window.is_key_pressed(KeyboardKey::KEY_TAB) {
            show_minimap = !show_minimap;
        }
        if window.is_key_pressed(KeyboardKey::KEY_R) {
            show_rays = !show_rays;
        }

        let dt = window.get_frame_time();
        let input = process_events(&mut window, &mut cursor);
        engine.update(&input, dt);
        engine.render();

        if window.is_window_resized() {
            scale = PixelScale::fit(window.get_screen_width(), window.get_screen_height(), engine.framebuffer());
            debug!(w = scale.w, h = scale.h, "window resized");
        }

        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::MAGENTA);
        engine.framebuffer().draw_scaled(&mut d, scale);

        if show_minimap {
            let camera = &engine.config().camera;
            MinimapView {
                scene: engine.scene(),
                player: engine.player(),
                near_clip: camera.near_clip,
                far_clip: camera.far_clip,
                rays: if show_rays { DEBUG_RAYS } else { 0 },
            }
            .draw(&mut d);
        }

        d.draw_fps(2, 2);
    }

    info!("window closed");
    Ok(())
}
