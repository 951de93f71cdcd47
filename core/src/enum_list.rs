// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::{FlagValue, ValidationError};

/// A comma-separated list of tokens out of a fixed, case-insensitive allow-list.
///
/// Accepted tokens are stored trimmed and lower-cased, in input order, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumListValue {
    allowed: Vec<String>,
    default: Vec<String>,
    allow_empty: bool,
    selected: Option<Vec<String>>,
}

impl EnumListValue {
    /// Create a list choosing from `allowed`, rendering `default` until set.
    pub fn new<A, D>(allowed: A, default: D) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            default: default.into_iter().map(Into::into).collect(),
            allow_empty: false,
            selected: None,
        }
    }

    /// Accept input without any token as an empty selection instead of rejecting it.
    #[must_use]
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Split `raw` on commas, dropping blank segments.
    ///
    /// Unlike [`FlagValue::set`] the remaining segments are returned as they are, neither trimmed
    /// nor case-folded, and not checked against the allow-list.
    #[must_use]
    pub fn parse(&self, raw: &str) -> Vec<String> {
        raw.split(',')
            .filter(|segment| !segment.trim().is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// The allowed tokens, in their original casing.
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    /// Whether input without any token is accepted.
    #[must_use]
    pub fn allows_empty(&self) -> bool {
        self.allow_empty
    }

    /// Whether [`FlagValue::set`] ever succeeded.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.selected.is_some()
    }

    /// The accepted tokens, or the normalized default if nothing was accepted yet.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.current().iter().map(|v| normalize(v)).collect()
    }

    fn current(&self) -> &[String] {
        self.selected.as_deref().unwrap_or(&self.default)
    }
}

impl FlagValue for EnumListValue {
    fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        let mut tokens = Vec::new();
        for token in raw.to_lowercase().split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            if !self.allowed.iter().any(|a| normalize(a) == token) {
                tracing::debug!(token, "rejected unknown list option");
                return Err(ValidationError::UnknownListOption {
                    value: token.to_string(),
                    allowed: self.allowed.clone(),
                });
            }
            tokens.push(token.to_string());
        }

        if tokens.is_empty() && !self.allow_empty {
            tracing::debug!("rejected empty list");
            return Err(ValidationError::EmptySelection {
                allowed: self.allowed.clone(),
            });
        }

        tracing::debug!(?tokens, "selected list options");
        self.selected = Some(tokens);
        Ok(())
    }
}

impl fmt::Display for EnumListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values().join(","))
    }
}

fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}
