//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use freelook_input::LookMode;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_NAME: &str = "freelook";
const CONFIG_FILE: &str = "config.ron";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Mouse-look and movement tuning.
    pub look: LookConfig,
    /// Demo scene layout.
    pub scene: SceneConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title prefix. The look-mode overlay is appended to it.
    pub title: String,
}

/// Mouse-look controller configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LookConfig {
    /// Look algorithm active at startup.
    pub mode: LookMode,
    /// Exponential smoothing factor in `[0, 1)`. Zero disables smoothing.
    pub smoothing: f32,
    /// Multiplier on the angular delta.
    pub look_speed: f32,
    /// Movement speed in units per second at the 60 Hz reference rate.
    pub move_speed: f32,
    /// Raw device counts that make up one axis unit.
    pub raw_dpi: f32,
}

/// Demo scene configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Starting camera position.
    pub camera_position: [f32; 3],
    /// Spinner yaw rate in degrees per reference frame.
    pub spin_rate: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Freelook".to_string(),
        }
    }
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            mode: LookMode::Relative,
            smoothing: 0.0,
            look_speed: 1.0,
            move_speed: 4.0,
            raw_dpi: 1000.0,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_position: [0.0, 0.0, -3.0],
            spin_rate: 0.45,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for Freelook, e.g. `~/.config/freelook` on Linux.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

// --- Validation ---

impl Config {
    /// Check every tunable against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let look = &self.look;
        if !(0.0..1.0).contains(&look.smoothing) {
            return Err(ConfigError::Invalid(format!(
                "look.smoothing must be in [0, 1), got {}",
                look.smoothing
            )));
        }
        require_positive("look.look_speed", look.look_speed)?;
        require_positive("look.move_speed", look.move_speed)?;
        require_positive("look.raw_dpi", look.raw_dpi)?;
        let scene = &self.scene;
        if !scene.spin_rate.is_finite() || !scene.camera_position.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "scene values must be finite, got spin_rate {} at {:?}",
                scene.spin_rate, scene.camera_position
            )));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be nonzero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}

fn require_positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
