//! Session configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "grid_size": 16, "cooldown": { "color_frames": 45 } }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::gesture::InterpreterConfig;
use crate::voxel::{Color, Palette, VoxelWorld};
use crate::voxel::color::default_colors;
use crate::voxel::world::{DEFAULT_BLOCK_SIZE, DEFAULT_GRID_SIZE};

/// Camera settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub width: u32,
    pub height: u32,
    /// Device frame rate; the synthetic source paces itself to this
    pub fps: f32,
}

impl CaptureConfig {
    /// Pause between synthetic frames; `None` when unpaced
    pub fn frame_interval(&self) -> Result<Option<Duration>> {
        rate_to_interval("capture.fps", self.fps)
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fps: 30.0,
        }
    }
}

/// Full session configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cells per axis
    pub grid_size: u32,
    /// Block edge length in world units
    pub block_size: f32,
    /// Selectable block colors, first is active at start
    pub palette: Vec<Color>,
    /// Gesture cooldowns in frames
    pub cooldown: InterpreterConfig,
    pub capture: CaptureConfig,
    /// Upper bound on session loop rate; 0 disables pacing
    pub max_fps: f32,
    /// Renderer status line interval in frames
    pub log_every: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            block_size: DEFAULT_BLOCK_SIZE,
            palette: default_colors(),
            cooldown: InterpreterConfig::default(),
            capture: CaptureConfig::default(),
            max_fps: 60.0,
            log_every: 60,
        }
    }
}

impl SessionConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the session cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::InvalidConfig("grid_size must be at least 1".into()));
        }
        if !(self.block_size > 0.0) || !self.block_size.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "block_size must be positive, got {}",
                self.block_size
            )));
        }
        if self.capture.width == 0 || self.capture.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "capture size must be non-zero, got {}x{}",
                self.capture.width, self.capture.height
            )));
        }
        self.frame_interval()?;
        self.capture.frame_interval()?;
        Palette::new(self.palette.clone()).map(|_| ())
    }

    /// Minimum time per session tick; `None` when unpaced
    pub fn frame_interval(&self) -> Result<Option<Duration>> {
        rate_to_interval("max_fps", self.max_fps)
    }

    /// Build the voxel world described by this config
    pub fn build_world(&self) -> Result<VoxelWorld> {
        self.validate()?;
        VoxelWorld::new(self.grid_size, self.block_size, Palette::new(self.palette.clone())?)
    }
}

/// Convert a frame rate to a period. Zero means unpaced.
fn rate_to_interval(name: &str, fps: f32) -> Result<Option<Duration>> {
    if !(fps >= 0.0) {
        return Err(Error::InvalidConfig(format!("{} must not be negative, got {}", name, fps)));
    }
    if fps == 0.0 {
        return Ok(None);
    }
    Duration::try_from_secs_f32(1.0 / fps)
        .map(Some)
        .map_err(|_| Error::InvalidConfig(format!("{} is too small to pace by, got {}", name, fps)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());

        let world = config.build_world().unwrap();
        assert_eq!(world.grid_size(), 20);
        assert_eq!(world.palette().len(), 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "grid_size": 16, "cooldown": { "color_frames": 45 } }"#).unwrap();

        assert_eq!(config.grid_size, 16);
        assert_eq!(config.block_size, 0.5);
        assert_eq!(config.cooldown.place_frames, 15);
        assert_eq!(config.cooldown.color_frames, 45);
        assert_eq!(config.capture.width, 1280);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = SessionConfig::default();
        config.palette.clear();
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(config.build_world().is_err());

        let config = SessionConfig { grid_size: 0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = SessionConfig { block_size: -1.0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = SessionConfig {
            capture: CaptureConfig { width: 0, ..Default::default() },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_frame_rates_convert_to_intervals() {
        let config = SessionConfig::default();
        let frame = config.frame_interval().unwrap().unwrap();
        assert!((frame.as_secs_f32() - 1.0 / 60.0).abs() < 1e-6);
        assert!(config.capture.frame_interval().unwrap().is_some());

        let unpaced = SessionConfig { max_fps: 0.0, ..Default::default() };
        assert_eq!(unpaced.frame_interval().unwrap(), None);
    }

    #[test]
    fn test_tiny_frame_rates_rejected() {
        let config = SessionConfig { max_fps: 1e-30, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(matches!(config.frame_interval(), Err(Error::InvalidConfig(_))));
        assert!(config.build_world().is_err());

        let config = SessionConfig {
            capture: CaptureConfig { fps: 1e-30, ..Default::default() },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(matches!(config.capture.frame_interval(), Err(Error::InvalidConfig(_))));

        let config = SessionConfig { max_fps: f32::NAN, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("session.json");

        let config = SessionConfig {
            grid_size: 12,
            palette: vec![Color::GREEN, Color::ORANGE],
            ..Default::default()
        };
        config.save(&path).expect("save failed");

        let loaded = SessionConfig::load(&path).expect("load failed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "palette": [] }"#).unwrap();

        assert!(matches!(SessionConfig::load(&path), Err(Error::InvalidConfig(_))));
        assert!(matches!(
            SessionConfig::load(temp_dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));
    }
}
