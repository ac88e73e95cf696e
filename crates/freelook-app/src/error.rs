//! Application error types.

use freelook_config::ConfigError;

/// Failures that stop the application before or during the event loop.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,

    /// Loading, saving, or validating configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The winit event loop could not be created or exited with an error.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent() {
        let err = AppError::from(ConfigError::Invalid("look.smoothing".to_string()));
        assert_eq!(err.to_string(), "invalid config: look.smoothing");
    }

    #[test]
    fn test_no_config_dir_message() {
        assert!(AppError::NoConfigDir.to_string().contains("configuration directory"));
    }
}
