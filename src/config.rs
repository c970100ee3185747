//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/homemon/homemon.toml` (or an explicit file)
//! 3. Environment variables: `HOMEMON_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult, Locale, ThemeMode};

/// Unified configuration for homemon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Native config file of the monitoring integration (the host's storage)
    pub native_config: PathBuf,
    /// UI locale (default: detected from LC_ALL/LANG)
    pub locale: Option<Locale>,
    /// Terminal color theme
    pub theme: ThemeMode,
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub native_config: Option<PathBuf>,
    pub locale: Option<Locale>,
    pub theme: Option<ThemeMode>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            native_config: default_native_config(),
            locale: None,
            theme: ThemeMode::default(),
        }
    }
}

/// Default location of the native config (XDG data dir).
fn default_native_config() -> PathBuf {
    ProjectDirs::from("", "", "homemon")
        .map(|dirs| dirs.data_dir().join("native.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.homemon/native.toml"))
}

/// Get the XDG config directory for homemon.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "homemon").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("homemon.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Locale to render with: configured, else detected.
    pub fn effective_locale(&self) -> Locale {
        self.locale.unwrap_or_else(Locale::detect)
    }

    /// Expand `~`, `$VAR` and `${VAR}` in path-like fields.
    ///
    /// Unresolvable variables leave the path unchanged.
    fn expand_paths(&mut self) {
        let raw = self.native_config.to_string_lossy().to_string();
        if let Ok(expanded) = shellexpand::full(&raw) {
            self.native_config = PathBuf::from(expanded.as_ref());
        }
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            native_config: overlay
                .native_config
                .clone()
                .unwrap_or_else(|| self.native_config.clone()),
            locale: overlay.locale.or(self.locale),
            theme: overlay.theme.unwrap_or(self.theme),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; replaces the global XDG file and must exist
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        match config_file {
            Some(path) => {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        let raw = load_raw_settings(&global_path)?;
                        current = current.merge_with(&raw);
                    }
                }
            }
        }

        // 3. Apply environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply HOMEMON_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(
            Environment::with_prefix("HOMEMON")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("native_config") {
            settings.native_config = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("locale") {
            settings.locale = Some(Locale::from_code(&val).ok_or_else(|| {
                ApplicationError::Config {
                    message: format!("unsupported locale in HOMEMON_LOCALE: {val}"),
                }
            })?);
        }
        if let Ok(val) = config.get_string("theme") {
            settings.theme = val.parse().map_err(|message| ApplicationError::Config { message })?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# homemon configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/homemon/homemon.toml  (or --config <file>)
#   Env:    HOMEMON_* environment variables (explicit overrides)

# Native config file of the monitoring integration
# native_config = "~/.local/share/homemon/native.toml"

# UI language: "en" or "de" (default: from LC_ALL/LANG)
# locale = "en"

# Terminal color theme: "dark" or "light"
# theme = "dark"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
