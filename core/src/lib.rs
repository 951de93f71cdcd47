// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed, validating option values for command-line flags and configuration files.
//!
//! Each value accepts raw text through [`FlagValue::set`], validates and normalizes it, and
//! renders its canonical form through [`std::fmt::Display`]:
//!
//! - [`TimestampValue`]: a point in time in a configurable [`Layout`];
//! - [`EnumValue`]: one token out of a case-insensitive allow-list;
//! - [`EnumListValue`]: a comma-separated list of tokens out of an allow-list.
//!
//! With the `clap` feature, [`FlagValueParser`] plugs any of them into a `clap` argument.

#[cfg(feature = "clap")]
mod clap_support;
mod enum_list;
mod enum_value;
mod error;
mod timestamp;
mod value;

#[cfg(feature = "clap")]
pub use crate::clap_support::FlagValueParser;
pub use crate::{
    enum_list::EnumListValue,
    enum_value::{EnumValue, Selection},
    error::{LayoutError, TimestampParseError, ValidationError},
    timestamp::{DEFAULT_TIMESTAMP_LAYOUT, Layout, TimestampValue},
    value::{FlagValue, set_all},
};
