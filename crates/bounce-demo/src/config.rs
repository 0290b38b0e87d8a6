//! Demo configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! reproduces the stock demo.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use bounce_engine::coords::Vec2;
use bounce_engine::motion::StepRule;

/// Environment variable consulted when no path is given on the command line.
pub const CONFIG_ENV: &str = "BOUNCE_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub title: String,
    pub window: WindowConfig,
    pub sprite: SpriteConfig,
    pub step_rule: StepRuleName,
    /// Image files decoded into sprite textures. Empty means built-in patterns.
    pub textures: Vec<PathBuf>,
    /// Fixed RNG seed for the initial heading; random when unset.
    pub seed: Option<u64>,
    pub clear_color: [f64; 4],
    /// `env_logger` filter; overrides `RUST_LOG` when set.
    pub log_filter: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "bounce".to_string(),
            window: WindowConfig::default(),
            sprite: SpriteConfig::default(),
            step_rule: StepRuleName::default(),
            textures: Vec::new(),
            seed: None,
            clear_color: [108.0 / 255.0, 225.0 / 255.0, 153.0 / 255.0, 1.0],
            log_filter: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            resizable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub scale: f32,
    pub rotation_degrees: f32,
    pub translate: [f32; 2],
    /// Index of the texture shown first.
    pub texture: usize,
}

impl SpriteConfig {
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn translate(&self) -> Vec2 {
        Vec2::new(self.translate[0], self.translate[1])
    }
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            width: 150.0,
            height: 150.0,
            speed: 0.08,
            scale: 1.0,
            rotation_degrees: 0.0,
            translate: [0.0, 0.0],
            texture: 0,
        }
    }
}

/// Serialized form of [`StepRule`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepRuleName {
    #[default]
    TimeScaledWithNudge,
    TimeScaled,
}

impl From<StepRuleName> for StepRule {
    fn from(name: StepRuleName) -> Self {
        match name {
            StepRuleName::TimeScaledWithNudge => StepRule::TimeScaledWithNudge,
            StepRuleName::TimeScaled => StepRule::TimeScaled,
        }
    }
}

impl DemoConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Reads and parses `path`. Relative texture paths resolve against the
    /// config file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config = Self::from_json_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;

        if let Some(dir) = path.parent() {
            for tex in &mut config.textures {
                if tex.is_relative() {
                    *tex = dir.join(&*tex);
                }
            }
        }
        Ok(config)
    }

    /// Loads from `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}

/// Config path from the first CLI argument, then [`CONFIG_ENV`].
pub fn config_path(arg: Option<OsString>, env: Option<OsString>) -> Option<PathBuf> {
    arg.or(env).filter(|p| !p.is_empty()).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── defaults ─────────────────────────────────────────────────────────────

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = DemoConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, DemoConfig::default());
        assert_eq!(cfg.sprite.size(), Vec2::new(150.0, 150.0));
        assert_eq!(cfg.sprite.speed, 0.08);
        assert_eq!(StepRule::from(cfg.step_rule), StepRule::TimeScaledWithNudge);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let cfg = DemoConfig::from_json_str(r#"{ "sprite": { "speed": 0.5 } }"#).unwrap();
        assert_eq!(cfg.sprite.speed, 0.5);
        assert_eq!(cfg.sprite.width, 150.0);
        assert_eq!(cfg.window, WindowConfig::default());
    }

    // ── parsing ──────────────────────────────────────────────────────────────

    #[test]
    fn step_rule_is_snake_case() {
        let cfg = DemoConfig::from_json_str(r#"{ "step_rule": "time_scaled" }"#).unwrap();
        assert_eq!(StepRule::from(cfg.step_rule), StepRule::TimeScaled);

        assert!(DemoConfig::from_json_str(r#"{ "step_rule": "TimeScaled" }"#).is_err());
    }

    #[test]
    fn full_document_parses() {
        let cfg = DemoConfig::from_json_str(
            r#"{
                "title": "demo",
                "window": { "width": 300, "height": 150, "resizable": false },
                "sprite": { "translate": [10, 20], "rotation_degrees": 90, "texture": 2 },
                "textures": ["a.png", "b.jpg"],
                "seed": 42,
                "log_filter": "debug"
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.title, "demo");
        assert_eq!(cfg.window.width, 300.0);
        assert!(!cfg.window.resizable);
        assert_eq!(cfg.sprite.translate(), Vec2::new(10.0, 20.0));
        assert_eq!(cfg.sprite.texture, 2);
        assert_eq!(cfg.textures.len(), 2);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(DemoConfig::from_json_str("{ sprite: }").is_err());
    }

    // ── path resolution ──────────────────────────────────────────────────────

    #[test]
    fn cli_argument_wins_over_env() {
        let p = config_path(Some("cli.json".into()), Some("env.json".into()));
        assert_eq!(p, Some(PathBuf::from("cli.json")));

        let p = config_path(None, Some("env.json".into()));
        assert_eq!(p, Some(PathBuf::from("env.json")));

        assert_eq!(config_path(None, Some("".into())), None);
        assert_eq!(config_path(None, None), None);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DemoConfig::load(Some(Path::new("/nonexistent/bounce.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/bounce.json"));
    }

    #[test]
    fn no_path_loads_defaults() {
        assert_eq!(DemoConfig::load(None).unwrap(), DemoConfig::default());
    }
}
