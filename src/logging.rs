//! Logger setup. The terminal UI owns stdout/stderr, so log lines only go
//! to a file; without one the logger is installed but silent.

use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::config::LoggingSettings;
use crate::error::{Error, Result};

pub fn init(settings: &LoggingSettings) -> Result<()> {
    let mut builder = match &settings.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let mut b = Builder::from_env(Env::default().default_filter_or(settings.level.as_str()));
            b.target(Target::Pipe(Box::new(file)));
            b
        }
        None => {
            let mut b = Builder::new();
            b.filter_level(LevelFilter::Off);
            b
        }
    };

    builder
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
