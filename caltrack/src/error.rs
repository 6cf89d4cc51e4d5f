use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaltrackError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Log directory unavailable: {0}")]
    LogDirectory(String),

    #[error("Logging already initialized: {0}")]
    LoggingInit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for CaltrackError {
    fn from(err: config::ConfigError) -> Self {
        CaltrackError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CaltrackError>;
