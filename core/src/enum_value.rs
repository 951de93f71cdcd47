// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::{FlagValue, ValidationError};

/// What the last call to [`FlagValue::set`] left behind on an [`EnumValue`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No input has been accepted yet.
    #[default]
    Unset,

    /// An allowed token was selected, stored lower-cased.
    Selected(String),

    /// An input was accepted without matching any allowed token, and nothing was selected before.
    ///
    /// Only reachable when unmatched input is allowed. The value still renders its default, so a
    /// caller that needs to distinguish "explicitly set but nothing matched" from "never set"
    /// has to look at the selection.
    Rejected,
}

/// A single token out of a fixed, case-insensitive allow-list.
///
/// Before any input is accepted the value renders its default verbatim, in its original casing.
/// Once a token is selected it renders lower-cased, whatever casing the input or the allow-list
/// used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    allowed: Vec<String>,
    default: String,
    allow_none: bool,
    selection: Selection,
}

impl EnumValue {
    /// Create a value choosing from `allowed`, rendering `default` until set.
    pub fn new<I, S>(allowed: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            default: default.into(),
            allow_none: false,
            selection: Selection::Unset,
        }
    }

    /// Accept unmatched input silently instead of rejecting it.
    ///
    /// An unmatched input then leaves any previous selection in place. Without one, the value
    /// is marked as set but keeps rendering its default, see [`Selection::Rejected`].
    #[must_use]
    pub fn allow_none(mut self, allow: bool) -> Self {
        self.allow_none = allow;
        self
    }

    /// The allowed tokens, in their original casing.
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    /// The token rendered before any input is accepted.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Whether unmatched input is accepted.
    #[must_use]
    pub fn allows_none(&self) -> bool {
        self.allow_none
    }

    /// What the last accepted input left behind.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected token, lower-cased, if an allowed token was accepted.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        match &self.selection {
            Selection::Selected(token) => Some(token),
            Selection::Unset | Selection::Rejected => None,
        }
    }

    /// Whether [`FlagValue::set`] ever succeeded, including silently accepted unmatched input.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.selection != Selection::Unset
    }
}

impl FlagValue for EnumValue {
    fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        let value = raw.trim().to_lowercase();
        if self.allowed.iter().any(|a| a.to_lowercase() == value) {
            tracing::debug!(%value, "selected option");
            self.selection = Selection::Selected(value);
            return Ok(());
        }

        if self.allow_none {
            tracing::debug!(%value, "no option matched, keeping current selection");
            if self.selection == Selection::Unset {
                self.selection = Selection::Rejected;
            }
            Ok(())
        } else {
            tracing::debug!(%value, "rejected unknown option");
            Err(ValidationError::UnknownOption {
                value,
                allowed: self.allowed.clone(),
            })
        }
    }

    fn possible_values(&self) -> Option<&[String]> {
        if self.allow_none {
            None
        } else {
            Some(&self.allowed)
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selection {
            Selection::Selected(token) => f.write_str(token),
            Selection::Unset | Selection::Rejected => f.write_str(&self.default),
        }
    }
}
