//! The binary entry point for Freelook.

use std::path::PathBuf;

use clap::Parser;
use freelook_app::AppError;
use freelook_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();
    let (config_dir, config) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            // No usable config yet, so log with the default filter.
            freelook_log::init_logging(None, false, None);
            error!("freelook: {e}");
            std::process::exit(1);
        }
    };

    let log_dir = config_dir.join("logs");
    freelook_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));
    info!("Config directory: {}", config_dir.display());

    if let Err(e) = freelook_app::run(config) {
        error!("freelook: {e}");
        std::process::exit(1);
    }
}

fn load_config(args: &CliArgs) -> Result<(PathBuf, Config), AppError> {
    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => default_config_dir().ok_or(AppError::NoConfigDir)?,
    };

    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(args);
    config.validate()?;
    Ok((config_dir, config))
}
