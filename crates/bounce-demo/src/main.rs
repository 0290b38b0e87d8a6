mod app;
mod config;
mod controls;
mod textures;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::dpi::LogicalSize;

use bounce_engine::coords::Vec2;
use bounce_engine::device::GpuInit;
use bounce_engine::logging::{init_logging, LoggingConfig};
use bounce_engine::motion::MotionState;
use bounce_engine::scene::{Scene, Sprite, SpriteParams};
use bounce_engine::window::{Runtime, RuntimeConfig};

use crate::app::BounceApp;
use crate::config::{config_path, DemoConfig, CONFIG_ENV};
use crate::controls::ControlPanel;

fn main() -> Result<()> {
    let path = config_path(std::env::args_os().nth(1), std::env::var_os(CONFIG_ENV));
    let config = DemoConfig::load(path.as_deref())?;

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..LoggingConfig::default()
    });
    match &path {
        Some(p) => log::info!("config loaded from {}", p.display()),
        None => log::info!("no config given; using defaults"),
    }

    let images = textures::load_all(&config.textures).context("failed to load textures")?;
    let scene = build_scene(&config);
    let sprite = &config.sprite;
    let panel = ControlPanel::new(
        sprite.translate(),
        sprite.scale,
        sprite.rotation_degrees,
        sprite.speed,
        sprite.texture,
        images.len(),
    );

    let app = BounceApp::new(scene, panel, images, config.clear_color);

    Runtime::run(
        RuntimeConfig {
            title: config.title.clone(),
            initial_size: LogicalSize::new(config.window.width, config.window.height),
            resizable: config.window.resizable,
        },
        GpuInit::default(),
        app,
    )
}

fn build_scene(config: &DemoConfig) -> Scene {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let s = &config.sprite;
    let motion = MotionState::with_random_direction(&mut rng, Vec2::ZERO, s.speed, s.size());
    log::debug!("initial direction {:?}", motion.direction);

    let mut scene = Scene::new(config.step_rule.into());
    scene.push(
        Sprite::new(motion)
            .with_params(SpriteParams {
                translate: s.translate(),
                scale: s.scale,
                rotation_radians: s.rotation_degrees.to_radians(),
            })
            .with_texture(s.texture),
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_scene_is_reproducible() {
        let config = DemoConfig {
            seed: Some(3),
            ..DemoConfig::default()
        };
        let a = build_scene(&config);
        let b = build_scene(&config);
        assert_eq!(a.sprites(), b.sprites());
    }

    #[test]
    fn scene_reflects_config() {
        let config = DemoConfig::from_json_str(
            r#"{ "seed": 1, "step_rule": "time_scaled",
                 "sprite": { "rotation_degrees": 180, "scale": 2, "texture": 1 } }"#,
        )
        .unwrap();
        let scene = build_scene(&config);
        let sprite = &scene.sprites()[0];

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.rule(), bounce_engine::motion::StepRule::TimeScaled);
        assert_eq!(sprite.texture, 1);
        assert_eq!(sprite.params.scale, 2.0);
        assert!((sprite.params.rotation_radians - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(sprite.motion.position, Vec2::ZERO);
        assert!((sprite.motion.direction.length() - 1.0).abs() < 1e-5);
    }
}
