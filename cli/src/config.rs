// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use chrono::{DateTime, Utc};
use flagval_core::{EnumListValue, EnumValue, Layout, TimestampValue};

/// The name of the application, used for the config directory.
pub const APP_NAME: &str = "flagval";

const FLAGVAL_CONFIG_ENV: &str = "FLAGVAL_CONFIG";

/// Locate and load the configuration.
///
/// An explicit `path` wins over `$FLAGVAL_CONFIG`, which wins over the per-user config file.
/// Only the per-user file may be absent, in which case the built-in defaults are used.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(FLAGVAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let path = match get_config_dir() {
            Ok(dir) => dir.join(format!("{APP_NAME}/config.toml")),
            Err(e) => {
                tracing::warn!("failed to get config directory: {e}");
                return Ok(Config::default());
            }
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        path
    };

    tracing::debug!(path = %path.display(), "loading config");
    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e).into())
}

/// Configuration for the flagval application.
///
/// The top-level keys hold raw option values, in the same form the command line accepts and
/// the `flagval` output prints. The `options` table configures the options themselves.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Raw value for `--since`.
    #[serde(default)]
    pub since: Option<String>,

    /// Raw value for `--color`.
    #[serde(default)]
    pub color: Option<String>,

    /// Raw value for `--levels`.
    #[serde(default)]
    pub levels: Option<String>,

    /// Definition of each option.
    #[serde(default)]
    pub options: OptionsConfig,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Definition of every option.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsConfig {
    pub since: SinceConfig,
    pub color: ColorConfig,
    pub levels: LevelsConfig,
}

/// Definition of the `--since` option.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SinceConfig {
    /// Layout used to parse and print the timestamp, in `strftime` syntax.
    pub layout: Option<String>,

    /// Timestamp printed when no value is given, in the configured layout.
    pub default: Option<String>,
}

impl SinceConfig {
    /// Build the timestamp value described by this definition.
    pub fn build(&self) -> Result<TimestampValue, Box<dyn Error>> {
        let layout = match &self.layout {
            Some(layout) => layout.parse::<Layout>()?,
            None => Layout::default(),
        };

        let default = match &self.default {
            Some(raw) => layout.parse(raw).map_err(|e| {
                format!("Invalid default timestamp '{raw}' for layout '{layout}': {e}")
            })?,
            None => DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
        };

        Ok(TimestampValue::new(default).with_default_layout(layout))
    }
}

/// Definition of the `--color` option.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Allowed colors, compared case-insensitively.
    pub allowed: Vec<String>,

    /// Color printed when no value is given.
    pub default: String,

    /// If true, unknown colors are ignored instead of rejected.
    pub allow_none: bool,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            allowed: vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()],
            default: "Red".to_string(),
            allow_none: false,
        }
    }
}

impl ColorConfig {
    /// Build the enum value described by this definition.
    pub fn build(&self) -> EnumValue {
        EnumValue::new(self.allowed.iter().cloned(), self.default.clone())
            .allow_none(self.allow_none)
    }
}

/// Definition of the `--levels` option.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevelsConfig {
    /// Allowed levels, compared case-insensitively.
    pub allowed: Vec<String>,

    /// Levels printed when no value is given.
    pub default: Vec<String>,

    /// If true, an empty list is accepted.
    pub allow_empty: bool,
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            allowed: ["debug", "info", "warn", "error"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            default: vec!["info".to_string()],
            allow_empty: false,
        }
    }
}

impl LevelsConfig {
    /// Build the enum list value described by this definition.
    pub fn build(&self) -> EnumListValue {
        EnumListValue::new(self.allowed.iter().cloned(), self.default.iter().cloned())
            .allow_empty(self.allow_empty)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
