mod conversions;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("System error: {0}")]
    System(#[from] SystemError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

#[derive(Error, Debug)]
pub enum SystemError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Loading error: {0}")]
    Loading(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing API key: set {0} in the environment or a .env file")]
    MissingApiKey(&'static str),
}
