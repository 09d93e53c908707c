use seekbox::ConfigError;
use thiserror::Error;

/// Errors that stop the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid select configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
