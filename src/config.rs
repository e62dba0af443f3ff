use crate::types::ThemeMode;
use anyhow::{Context, Result};

/// Bundled config for builds without a `.env` file (web, mobile)
pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

const API_BASE_KEY: &str = "WATTWISE_API_BASE";
const THEME_KEY: &str = "WATTWISE_THEME";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub initial_theme: ThemeMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            initial_theme: ThemeMode::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the bundled `config.env`, then (native only) `.env`
    /// and the process environment.
    pub fn load() -> Self {
        let mut config = Self::default();
        config.apply_lines(BUNDLED_CONFIG);

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(path) = dotenvy::dotenv() {
                tracing::debug!(path = %path.display(), "loaded .env");
            }
            for key in [API_BASE_KEY, THEME_KEY] {
                if let Ok(value) = std::env::var(key) {
                    config.apply_logged(key, &value);
                }
            }
        }

        config
    }

    /// Apply `KEY=VALUE` lines, skipping comments and blanks.
    pub fn apply_lines(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                self.apply_logged(key.trim(), value.trim());
            }
        }
    }

    pub fn from_lines(contents: &str) -> Self {
        let mut config = Self::default();
        config.apply_lines(contents);
        config
    }

    fn apply_logged(&mut self, key: &str, value: &str) {
        if let Err(err) = self.apply(key, value) {
            tracing::warn!("ignoring config value: {err:#}");
        }
    }

    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim_matches('"');
        match key {
            API_BASE_KEY => {
                if value.is_empty() {
                    anyhow::bail!("{API_BASE_KEY} is empty");
                }
                self.api_base_url = value.to_string();
            }
            THEME_KEY => {
                self.initial_theme = value
                    .parse::<ThemeMode>()
                    .map_err(anyhow::Error::msg)
                    .with_context(|| format!("invalid {THEME_KEY}"))?;
            }
            _ => {}
        }
        Ok(())
    }
}
