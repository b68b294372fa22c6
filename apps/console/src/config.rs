use std::fs;

use client_core::{
    config::{DEFAULT_API_BASE, DEFAULT_BACKEND_NAME},
    ClientConfig, ConfigError,
};
use serde::Deserialize;

const SETTINGS_FILE: &str = "console.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: String,
    pub backend_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            backend_name: DEFAULT_BACKEND_NAME.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base: Option<String>,
    backend_name: Option<String>,
}

impl Settings {
    /// Command-line flags win over everything loaded before them.
    pub fn with_overrides(mut self, api_base: Option<String>, backend_name: Option<String>) -> Self {
        if let Some(v) = api_base {
            self.api_base = v;
        }
        if let Some(v) = backend_name {
            self.backend_name = v;
        }
        self
    }

    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        ClientConfig::new(self.api_base.as_str(), self.backend_name.as_str())
    }
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    settings_from_sources(file.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then `console.toml`, then environment; later sources win.
pub(crate) fn settings_from_sources(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.api_base {
                    settings.api_base = v;
                }
                if let Some(v) = file_cfg.backend_name {
                    settings.backend_name = v;
                }
            }
            Err(error) => tracing::warn!(%error, "ignoring unreadable {SETTINGS_FILE}"),
        }
    }

    for key in ["API_URL", "APP__API_URL"] {
        if let Some(v) = env(key).filter(|v| !v.trim().is_empty()) {
            settings.api_base = v;
        }
    }
    for key in ["BACKEND_NAME", "APP__BACKEND_NAME"] {
        if let Some(v) = env(key).filter(|v| !v.trim().is_empty()) {
            settings.backend_name = v;
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
