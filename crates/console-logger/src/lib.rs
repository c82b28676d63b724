//! Console Logger
//!
//! A `tracing` subscriber for the browser: every event goes to the devtools
//! console and into a bounded ring buffer that the UI can read back.

mod buffer;
mod layer;

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

pub use buffer::{LogBuffer, DEFAULT_CAPACITY};
pub use layer::ConsoleLayer;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("a global logger is already installed")]
    AlreadyInitialized(#[from] TryInitError),
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Prefix shown in every line
    pub app_name: String,
    /// `trace`, `debug`, `info`, `warn`, `error` or `off`
    pub level: String,
    /// Ring buffer size in lines
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            app_name: "app".to_string(),
            level: "info".to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl LoggerConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, LoggerError> {
        LevelFilter::from_str(&self.level).map_err(|_| LoggerError::InvalidLevel(self.level.clone()))
    }
}

/// Install the console layer as the global default subscriber.
///
/// Returns the buffer the layer writes into.
pub fn init_logger(config: &LoggerConfig) -> Result<LogBuffer, LoggerError> {
    let level = config.level_filter()?;
    let buffer = LogBuffer::with_capacity(config.capacity);
    tracing_subscriber::registry()
        .with(level)
        .with(ConsoleLayer::new(config.app_name.clone(), buffer.clone()))
        .try_init()?;
    tracing::info!(level = %level, capacity = buffer.capacity(), "console logger ready");
    Ok(buffer)
}
