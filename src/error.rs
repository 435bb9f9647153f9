//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load config: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to set up logging: {0}")]
    Logging(String),

    #[error("failed to render default config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A source could not be opened or decoded.
    #[error("could not load source: {0}")]
    Load(String),

    /// The audio thread is gone and can no longer take commands.
    #[error("playback element is no longer running")]
    ElementGone,
}

pub type Result<T> = std::result::Result<T, Error>;
