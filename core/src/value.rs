// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::ValidationError;

/// A typed option value that a command-line or configuration framework can drive.
///
/// The host calls [`FlagValue::set`] once per supplied occurrence of the option and renders the
/// canonical representation through [`fmt::Display`] whenever it needs one, e.g. for help text,
/// default display or writing a config file back.
pub trait FlagValue: fmt::Display {
    /// Validate and store a raw input.
    ///
    /// On error nothing is stored and the rendered value stays as it was before the call.
    fn set(&mut self, raw: &str) -> Result<(), ValidationError>;

    /// The closed set of accepted tokens, if the value is a single choice.
    fn possible_values(&self) -> Option<&[String]> {
        None
    }
}

/// Feed each raw input to `value` in order, stopping at the first rejection.
///
/// This mirrors a host that invokes [`FlagValue::set`] once per occurrence of a repeated option.
pub fn set_all<'a, V, I>(value: &mut V, inputs: I) -> Result<(), ValidationError>
where
    V: FlagValue + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    for raw in inputs {
        value.set(raw)?;
    }
    Ok(())
}
