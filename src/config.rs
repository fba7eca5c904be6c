use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DemoError;

/// Everything the demo reads at startup. Every section falls back to its
/// defaults, so an empty file (or no file) reproduces the stock drill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub timing: TimingConfig,
    pub bounds: BoundsConfig,
    pub run: RunConfig,
    pub autorun: AutoRunConfig,
    pub spawn: SpawnConfig,
    pub assets: AssetConfig,
    pub compat: CompatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Boy".into(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Sleep after every loop iteration, in seconds.
    pub tick_delay: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { tick_delay: 0.03 }
    }
}

/// Horizontal edges AutoRun bounces off. Not derived from the window size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    pub min_x: f32,
    pub max_x: f32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            min_x: 50.0,
            max_x: 750.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Pixels moved per tick while running.
    pub step: f32,
    /// Base speed; also what AutoRun restores on exit.
    pub speed: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            step: 5.0,
            speed: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoRunConfig {
    pub speed: f32,
    pub scale: f32,
    /// Seconds before falling back to Idle.
    pub duration: f64,
    /// Fixed time factor applied to speed each tick.
    pub tick_factor: f32,
}

impl Default for AutoRunConfig {
    fn default() -> Self {
        Self {
            speed: 300.0,
            scale: 1.5,
            duration: 5.0,
            tick_factor: 0.02,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub x: f32,
    pub y: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self { x: 400.0, y: 90.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub sheet: PathBuf,
    pub background: PathBuf,
    /// Where the background is drawn, centre point.
    pub background_x: f32,
    pub background_y: f32,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            sheet: "animation_sheet.png".into(),
            background: "grass.png".into(),
            background_x: 400.0,
            background_y: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatConfig {
    /// Run AutoRun's event hook a second time when the boy is still in
    /// AutoRun after the machine handled the event.
    pub autorun_double_dispatch: bool,
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            autorun_double_dispatch: true,
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = std::fs::read_to_string(path).map_err(|source| DemoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| DemoError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(DemoError::ConfigInvalid("window size must be non-zero".into()));
        }
        if self.timing.tick_delay.is_nan() || self.timing.tick_delay < 0.0 {
            return Err(DemoError::ConfigInvalid(format!(
                "timing.tick_delay must be >= 0, got {}",
                self.timing.tick_delay
            )));
        }
        if self.bounds.min_x >= self.bounds.max_x {
            return Err(DemoError::ConfigInvalid(format!(
                "bounds.min_x ({}) must be below bounds.max_x ({})",
                self.bounds.min_x, self.bounds.max_x
            )));
        }
        if self.autorun.scale.is_nan() || self.autorun.scale <= 0.0 {
            return Err(DemoError::ConfigInvalid("autorun.scale must be positive".into()));
        }
        if self.autorun.duration.is_nan() || self.autorun.duration < 0.0 {
            return Err(DemoError::ConfigInvalid("autorun.duration must be >= 0".into()));
        }
        Ok(())
    }
}
