// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use thiserror::Error;

/// Error returned when a raw option value is rejected.
///
/// Every variant carries the offending input together with the context needed to explain the
/// rejection, so callers may render their own message instead of relying on [`fmt::Display`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input does not match the timestamp layout.
    #[error("{value} cannot be parsed as a timestamp (expected format: {layout})")]
    Timestamp {
        /// The rejected input.
        value: String,

        /// The layout the input was parsed with.
        layout: String,
    },

    /// The input is not one of the allowed values of a single-choice option.
    #[error("Unknown option: \"{value}\". Allowed is one of {}", Joined(.allowed))]
    UnknownOption {
        /// The rejected input, trimmed and lower-cased.
        value: String,

        /// The allowed values, in their original casing.
        allowed: Vec<String>,
    },

    /// One token of a list input is not one of the allowed values.
    #[error("Unknown option: \"{value}\". Allowed values are {}", Joined(.allowed))]
    UnknownListOption {
        /// The first rejected token, trimmed and lower-cased.
        value: String,

        /// The allowed values, in their original casing.
        allowed: Vec<String>,
    },

    /// A list input contains no tokens although at least one is required.
    #[error("Must specify at least one of: {}", Joined(.allowed))]
    EmptySelection {
        /// The allowed values, in their original casing.
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// The rejected input, if the error refers to a single one.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Timestamp { value, .. }
            | Self::UnknownOption { value, .. }
            | Self::UnknownListOption { value, .. } => Some(value),
            Self::EmptySelection { .. } => None,
        }
    }

    /// The allowed values, for enumeration errors.
    #[must_use]
    pub fn allowed(&self) -> Option<&[String]> {
        match self {
            Self::Timestamp { .. } => None,
            Self::UnknownOption { allowed, .. }
            | Self::UnknownListOption { allowed, .. }
            | Self::EmptySelection { allowed } => Some(allowed),
        }
    }
}

/// Error returned when a timestamp layout contains an invalid format specifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp layout: {layout}")]
pub struct LayoutError {
    /// The rejected layout string.
    pub layout: String,
}

/// Error returned when input cannot be read with a timestamp layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampParseError {
    /// The input does not fit the layout, or names an instant that does not exist.
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),

    /// The input was read, but the layout prints the same instant differently.
    #[error("input is not in the layout's form, expected \"{canonical}\"")]
    NotCanonical {
        /// The instant as the layout prints it.
        canonical: String,
    },
}

struct Joined<'a>(&'a [String]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
