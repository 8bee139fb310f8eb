use serde::Deserialize;
use std::str::FromStr;

/// Name of the optional global holding runtime settings, e.g.
/// `window.__UNLEASH_UI_CONFIG = { log_level: "debug" }`.
pub const CONFIG_GLOBAL: &str = "__UNLEASH_UI_CONFIG";

const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid runtime config: {0}")]
    Invalid(String),
    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Invalid(err.to_string()))
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        match self.log_level.as_deref().map(str::trim) {
            None | Some("") => Ok(DEFAULT_LOG_LEVEL),
            Some(level) => log::Level::from_str(level)
                .map_err(|_| ConfigError::UnknownLogLevel(level.to_string())),
        }
    }
}

fn read_global() -> Result<Option<String>, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into())
        .map_err(|_| ConfigError::Invalid(format!("cannot read window.{CONFIG_GLOBAL}")))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let json = js_sys::JSON::stringify(&value)
        .map_err(|_| ConfigError::Invalid(format!("window.{CONFIG_GLOBAL} is not JSON")))?;
    Ok(Some(String::from(json)))
}

/// Loads settings from the page globals. Missing globals yield the defaults.
pub fn load() -> Result<RuntimeConfig, ConfigError> {
    match read_global()? {
        Some(raw) => RuntimeConfig::from_json(&raw),
        None => Ok(RuntimeConfig::default()),
    }
}
