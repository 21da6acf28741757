// config.rs - JSON scene reel loading

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::canvas::Canvas;
use crate::core::{Animator, Millis, PlayOptions, DEFAULT_TICK_PERIOD};
use crate::errors::{AnimatorError, Result};
use crate::scenes::{build_scene, Pattern};

/// Largest canvas a reel may ask for, 4096x4096
pub const MAX_CANVAS_PIXELS: u64 = 4096 * 4096;

/// One scene entry of a reel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub name: String,
    pub duration_ms: Millis,
    pub pattern: Pattern,
}

/// Animator settings plus the scenes to play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    pub tick_period_ms: Millis,
    #[serde(flatten)]
    pub playback: PlayOptions,
    pub strict: bool,
    pub width: u32,
    pub height: u32,
    pub scenes: Vec<SceneConfig>,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: DEFAULT_TICK_PERIOD,
            playback: PlayOptions::default(),
            strict: false,
            width: 64,
            height: 24,
            scenes: vec![
                SceneConfig {
                    name: "intro".into(),
                    duration_ms: 500,
                    pattern: Pattern::Pulse,
                },
                SceneConfig {
                    name: "sweep".into(),
                    duration_ms: 400,
                    pattern: Pattern::Sweep,
                },
                SceneConfig {
                    name: "outro".into(),
                    duration_ms: 300,
                    pattern: Pattern::Bars,
                },
            ],
        }
    }
}

impl AnimatorConfig {
    /// Read and validate a JSON reel
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content).map_err(|err| match err {
            AnimatorError::Configuration(msg) => {
                AnimatorError::Configuration(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        log::debug!("loaded {} scenes from {}", config.scenes.len(), path.display());
        Ok(config)
    }

    /// Parse and validate a JSON reel
    ///
    /// Well-formed JSON carrying unusable values (negative or fractional
    /// durations, zero period) is a configuration error; malformed JSON is
    /// a parse error.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).map_err(|err| match err.classify() {
            Category::Data => AnimatorError::Configuration(err.to_string()),
            _ => AnimatorError::Parse(err),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_period_ms == 0 {
            return Err(AnimatorError::Configuration(
                "tick_period_ms must be at least 1".into(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(AnimatorError::Configuration(format!(
                "canvas size {}x{} is empty",
                self.width, self.height
            )));
        }
        if u64::from(self.width) * u64::from(self.height) > MAX_CANVAS_PIXELS {
            return Err(AnimatorError::Configuration(format!(
                "canvas size {}x{} exceeds {} pixels",
                self.width, self.height, MAX_CANVAS_PIXELS
            )));
        }
        if let Some(scene) = self.scenes.iter().find(|s| s.name.trim().is_empty()) {
            return Err(AnimatorError::Configuration(format!(
                "scene with pattern {:?} has no name",
                scene.pattern
            )));
        }
        Ok(())
    }

    pub fn play_options(&self) -> PlayOptions {
        self.playback
    }

    /// Build a canvas animator holding every configured scene
    pub fn build(&self) -> Result<Animator<Canvas>> {
        self.validate()?;

        let mut animator = Animator::new(Canvas::new(self.width, self.height))
            .with_tick_period(self.tick_period_ms)?
            .with_strict(self.strict);

        for scene in &self.scenes {
            animator.add_scene(build_scene(scene.pattern, &scene.name, scene.duration_ms));
        }
        Ok(animator)
    }
}
