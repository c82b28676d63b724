//! Runtime Configuration
//!
//! Read once at startup from an optional `window.__FAR_AWAY_CONFIG__`
//! object. Every field has a default, so a partial object is fine.

use std::ops::RangeInclusive;

use serde::Deserialize;
use thiserror::Error;

use console_logger::{LoggerConfig, LoggerError};

/// Global the host page may define before the bundle loads
pub const CONFIG_GLOBAL: &str = "__FAR_AWAY_CONFIG__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not decode window.__FAR_AWAY_CONFIG__: {0}")]
    Decode(String),

    #[error("max_quantity must be at least 1")]
    ZeroMaxQuantity,

    #[error("default_quantity {default} is outside 1..={max}")]
    DefaultOutOfRange { default: u32, max: u32 },

    #[error(transparent)]
    Logger(#[from] LoggerError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Upper bound of the quantity selector
    pub max_quantity: u32,
    /// Quantity preselected after each submission
    pub default_quantity: u32,
    /// Prompt shown before clearing the list
    pub confirm_message: String,
    /// BCP 47 tag for description sorting; browser default when unset
    pub locale: Option<String>,
    pub log_level: String,
    /// Lines kept by the console logger
    pub log_buffer: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_quantity: 20,
            default_quantity: 1,
            confirm_message: "Are you sure you want to delete all items?".to_string(),
            locale: None,
            log_level: "info".to_string(),
            log_buffer: console_logger::DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.max_quantity == 0 {
            return Err(ConfigError::ZeroMaxQuantity);
        }
        if !(1..=self.max_quantity).contains(&self.default_quantity) {
            return Err(ConfigError::DefaultOutOfRange {
                default: self.default_quantity,
                max: self.max_quantity,
            });
        }
        self.logger().level_filter()?;
        Ok(self)
    }

    /// Values offered by the quantity `<select>`
    pub fn quantity_options(&self) -> RangeInclusive<u32> {
        1..=self.max_quantity
    }

    pub fn logger(&self) -> LoggerConfig {
        LoggerConfig {
            app_name: "FarAway".to_string(),
            level: self.log_level.clone(),
            capacity: self.log_buffer,
        }
    }
}

/// Load the page-provided config, or defaults when none is set
#[cfg(target_arch = "wasm32")]
pub fn load() -> Result<AppConfig, ConfigError> {
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return Ok(AppConfig::default());
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|err| ConfigError::Decode(format!("{err:?}")))?;
    if value.is_undefined() || value.is_null() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig =
        serde_wasm_bindgen::from_value(value).map_err(|err| ConfigError::Decode(err.to_string()))?;
    config.validate()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Result<AppConfig, ConfigError> {
    Ok(AppConfig::default())
}
