// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration with `clap`, turning any [`FlagValue`] into a value parser.

use std::ffi::OsStr;

use clap::builder::{PossibleValue, TypedValueParser};
use clap::error::ErrorKind;
use clap::{Arg, Command};

use crate::FlagValue;

/// A `clap` value parser backed by a configured [`FlagValue`].
///
/// Each occurrence of the argument starts from a clone of the configured value, so the parsed
/// result is exactly what a host calling [`FlagValue::set`] once would observe.
///
/// ```
/// use clap::{Command, arg};
/// use flagval_core::{EnumValue, FlagValueParser};
///
/// let color = EnumValue::new(["Red", "Green", "Blue"], "Red");
/// let cmd = Command::new("paint")
///     .arg(arg!(--color <COLOR> "Color to use").value_parser(FlagValueParser::new(color)));
///
/// let matches = cmd.try_get_matches_from(["paint", "--color", "BLUE"]).unwrap();
/// let color = matches.get_one::<EnumValue>("color").unwrap();
/// assert_eq!(color.to_string(), "blue");
/// ```
#[derive(Debug, Clone)]
pub struct FlagValueParser<V> {
    template: V,
}

impl<V> FlagValueParser<V> {
    /// Parse every occurrence starting from `template`.
    pub const fn new(template: V) -> Self {
        Self { template }
    }

    /// The configured value every parse starts from.
    pub fn template(&self) -> &V {
        &self.template
    }
}

impl<V> TypedValueParser for FlagValueParser<V>
where
    V: FlagValue + Clone + Send + Sync + 'static,
{
    type Value = V;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let raw = value
            .to_str()
            .ok_or_else(|| clap::Error::new(ErrorKind::InvalidUtf8).with_cmd(cmd))?;

        let mut parsed = self.template.clone();
        parsed.set(raw).map_err(|e| {
            let message = match arg {
                Some(arg) => format!("invalid value '{raw}' for '{arg}': {e}"),
                None => format!("invalid value '{raw}': {e}"),
            };
            clap::Error::raw(ErrorKind::InvalidValue, message).with_cmd(cmd)
        })?;
        Ok(parsed)
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        let values = self.template.possible_values()?;
        Some(Box::new(
            values.iter().map(|v| PossibleValue::new(v.to_lowercase())),
        ))
    }
}
