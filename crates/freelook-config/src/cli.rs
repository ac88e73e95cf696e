//! Command-line argument parsing for Freelook.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use freelook_input::LookMode;

use crate::Config;

/// Look algorithm selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Raw device deltas.
    Raw,
    /// OS cursor position relative to the window center.
    Relative,
}

impl From<ModeArg> for LookMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Raw => LookMode::Raw,
            ModeArg::Relative => LookMode::Relative,
        }
    }
}

/// Freelook command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "freelook", about = "Mouse-look camera controller demo")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Look algorithm to start in.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Mouse smoothing factor in [0, 1).
    #[arg(long)]
    pub smoothing: Option<f32>,

    /// Mouse look speed multiplier.
    #[arg(long)]
    pub look_speed: Option<f32>,

    /// Movement speed in units per second.
    #[arg(long)]
    pub move_speed: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(mode) = args.mode {
            self.look.mode = mode.into();
        }
        if let Some(s) = args.smoothing {
            self.look.smoothing = s;
        }
        if let Some(speed) = args.look_speed {
            self.look.look_speed = speed;
        }
        if let Some(speed) = args.move_speed {
            self.look.move_speed = speed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            mode: Some(ModeArg::Raw),
            smoothing: Some(0.5),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.look.mode, LookMode::Raw);
        assert_eq!(config.look.smoothing, 0.5);
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 720);
        assert_eq!(config.look.move_speed, 4.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "freelook",
            "--mode",
            "raw",
            "--look-speed",
            "2",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.mode, Some(ModeArg::Raw));
        assert_eq!(args.look_speed, Some(2.0));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.config.is_none());
    }
}
