// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use flagval_core::{EnumListValue, EnumValue, FlagValue, TimestampValue, set_all};

use crate::config::{ColorConfig, Config, LevelsConfig};

/// The option values known to the application.
#[derive(Debug, Clone)]
pub struct Options {
    pub since: TimestampValue,
    pub color: EnumValue,
    pub levels: EnumListValue,
}

impl Options {
    pub const SINCE: &str = "since";
    pub const COLOR: &str = "color";
    pub const LEVELS: &str = "levels";

    /// Build the options from their definitions, then apply the raw values of the config file.
    pub fn from_config(config: &Config) -> Result<Self, Box<dyn Error>> {
        let mut options = Self {
            since: config.options.since.build()?,
            color: config.options.color.build(),
            levels: config.options.levels.build(),
        };

        options.apply(Self::SINCE, config.since.as_deref())?;
        options.apply(Self::COLOR, config.color.as_deref())?;
        options.apply(Self::LEVELS, config.levels.as_deref())?;
        Ok(options)
    }

    /// Feed the raw inputs of option `name` to its value, in order.
    pub fn apply<'a, I>(&mut self, name: &str, inputs: I) -> Result<(), Box<dyn Error>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let value: &mut dyn FlagValue = match name {
            Self::SINCE => &mut self.since,
            Self::COLOR => &mut self.color,
            Self::LEVELS => &mut self.levels,
            _ => return Err(format!("Unknown option: {name}").into()),
        };

        set_all(value, inputs).map_err(|e| format!("Invalid value for '{name}': {e}").into())
    }

    /// The canonical value of every option.
    pub fn render(&self) -> Rendered {
        Rendered {
            since: self.since.to_string(),
            color: self.color.to_string(),
            levels: self.levels.to_string(),
        }
    }
}

impl Default for Options {
    /// The options as the built-in definitions describe them.
    fn default() -> Self {
        Self {
            since: TimestampValue::default(),
            color: ColorConfig::default().build(),
            levels: LevelsConfig::default().build(),
        }
    }
}

/// The canonical values, in the shape of the top-level keys of the config file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Rendered {
    pub since: String,
    pub color: String,
    pub levels: String,
}
