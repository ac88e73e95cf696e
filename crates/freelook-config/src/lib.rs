//! Configuration system for Freelook.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and are validated before the controller is built from them.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, ModeArg};
pub use config::{Config, DebugConfig, LookConfig, SceneConfig, WindowConfig, default_config_dir};
pub use error::ConfigError;
