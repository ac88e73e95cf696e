//! Structured logging for Freelook.
//!
//! Console output with uptime timestamps and module paths, plus a JSON log
//! file in debug builds. The filter comes from `RUST_LOG` when set, otherwise
//! from the configured log level.

use freelook_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config provide one.
pub const DEFAULT_FILTER: &str = "info,winit=warn";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "freelook.log";

/// Build the filter directive string from an optional config.
///
/// A non-empty `debug.log_level` wins; windowing noise stays at `warn`
/// unless the level names `winit` itself.
pub fn filter_directives(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => {
            let level = &config.debug.log_level;
            if level.contains("winit") {
                level.clone()
            } else {
                format!("{level},winit=warn")
            }
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `log_dir` - Directory for the JSON log file (debug builds only)
/// * `debug_build` - Whether to also write the JSON log file
/// * `config` - Optional configuration supplying the log level
///
/// # Examples
///
/// ```no_run
/// use freelook_log::init_logging;
/// use freelook_config::Config;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        let filter = EnvFilter::try_new(filter_directives(None)).unwrap();
        let filter_str = filter.to_string();
        assert!(filter_str.contains("winit=warn"));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_directives_without_config() {
        assert_eq!(filter_directives(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_directives_from_config_level() {
        let mut config = Config::default();
        config.debug.log_level = "debug".to_string();
        assert_eq!(filter_directives(Some(&config)), "debug,winit=warn");
    }

    #[test]
    fn test_explicit_winit_level_kept() {
        let mut config = Config::default();
        config.debug.log_level = "info,winit=trace".to_string();
        assert_eq!(filter_directives(Some(&config)), "info,winit=trace");
    }

    #[test]
    fn test_empty_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level.clear();
        assert_eq!(filter_directives(Some(&config)), DEFAULT_FILTER);
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,freelook_camera=trace",
            "warn,freelook_input=debug",
        ];
        for filter_str in &valid_filters {
            let result = EnvFilter::try_from(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }

    #[test]
    fn test_log_file_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_file_path = temp_dir.path().join(LOG_FILE_NAME);
        assert_eq!(log_file_path.file_name().unwrap(), "freelook.log");
    }
}
