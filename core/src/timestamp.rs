// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::format::{Item, ParseResult, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::{FlagValue, LayoutError, TimestampParseError, ValidationError};

/// The layout used when neither the value nor its configuration names one.
///
/// A 4-digit year, 2-digit month and day, and a 24-hour `hh:mm:ss` time.
pub const DEFAULT_TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// A validated `strftime`-style layout used to parse and format timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout(String);

impl Layout {
    /// Create a layout, rejecting unknown or incomplete format specifiers.
    pub fn new(layout: impl Into<String>) -> Result<Self, LayoutError> {
        let layout = layout.into();
        if StrftimeItems::new(&layout).any(|item| matches!(item, Item::Error)) {
            return Err(LayoutError { layout });
        }
        Ok(Self(layout))
    }

    /// The layout string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse `raw` according to this layout.
    ///
    /// Fields the layout does not mention take their zero value: year 0, January, the first of
    /// the month, midnight and UTC. The input must be written exactly as the layout prints the
    /// resulting instant, so padding, signs and surrounding whitespace are not negotiable.
    pub fn parse(&self, raw: &str) -> Result<DateTime<FixedOffset>, TimestampParseError> {
        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, raw, StrftimeItems::new(&self.0))?;
        fill_missing_fields(&mut parsed)?;
        let dt = parsed.to_datetime()?;

        let canonical = self.format(&dt).to_string();
        if canonical != raw {
            return Err(TimestampParseError::NotCanonical { canonical });
        }
        Ok(dt)
    }

    /// Format `dt` according to this layout.
    pub fn format<'a>(&'a self, dt: &'a DateTime<FixedOffset>) -> impl fmt::Display + 'a {
        dt.format(&self.0)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self(DEFAULT_TIMESTAMP_LAYOUT.to_string())
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn fill_missing_fields(parsed: &mut Parsed) -> ParseResult<()> {
    if parsed.timestamp().is_some() {
        return Ok(());
    }

    // Week and ordinal dates resolve the month and day themselves.
    let week_or_ordinal = parsed.isoyear().is_some()
        || parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some()
        || parsed.ordinal().is_some();
    if !week_or_ordinal {
        if parsed.year().is_none()
            && parsed.year_div_100().is_none()
            && parsed.year_mod_100().is_none()
        {
            parsed.set_year(0)?;
        }
        if parsed.month().is_none() {
            parsed.set_month(1)?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1)?;
        }
    }

    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        (None, Some(_)) => parsed.set_ampm(false)?,
        _ => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    if parsed.second().is_none() {
        parsed.set_second(0)?;
    }
    if parsed.offset().is_none() {
        parsed.set_offset(0)?;
    }
    Ok(())
}

/// A point in time parsed from, and rendered with, a textual layout.
///
/// The layout is resolved on every call: changing it with [`TimestampValue::set_format`] affects
/// both subsequent parsing and the rendering of an already stored instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampValue {
    format: Option<Layout>,
    default_layout: Layout,
    default: DateTime<FixedOffset>,
    parsed: Option<DateTime<FixedOffset>>,
}

impl TimestampValue {
    /// Create a value that renders `default` until an input is accepted.
    pub fn new<Tz: TimeZone>(default: DateTime<Tz>) -> Self {
        Self {
            format: None,
            default_layout: Layout::default(),
            default: default.fixed_offset(),
            parsed: None,
        }
    }

    /// Use `layout` for this value, overriding the default layout.
    #[must_use]
    pub fn with_format(mut self, layout: Layout) -> Self {
        self.format = Some(layout);
        self
    }

    /// Replace the layout used when no explicit format is set.
    #[must_use]
    pub fn with_default_layout(mut self, layout: Layout) -> Self {
        self.default_layout = layout;
        self
    }

    /// Change, or clear, the explicit layout.
    pub fn set_format(&mut self, layout: Option<Layout>) {
        self.format = layout;
    }

    /// The layout currently in effect.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        self.format.as_ref().unwrap_or(&self.default_layout)
    }

    /// The instant accepted by the last successful [`FlagValue::set`], if any.
    #[must_use]
    pub fn parsed(&self) -> Option<DateTime<FixedOffset>> {
        self.parsed
    }

    /// The configured default instant.
    #[must_use]
    pub fn default_value(&self) -> DateTime<FixedOffset> {
        self.default
    }

    /// The parsed instant, or the default if nothing was accepted yet.
    #[must_use]
    pub fn value(&self) -> DateTime<FixedOffset> {
        self.parsed.unwrap_or(self.default)
    }
}

impl Default for TimestampValue {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl FlagValue for TimestampValue {
    fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        let layout = self.layout();
        match layout.parse(raw) {
            Ok(dt) => {
                tracing::debug!(value = raw, %layout, "accepted timestamp");
                self.parsed = Some(dt);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(value = raw, %layout, %err, "rejected timestamp");
                Err(ValidationError::Timestamp {
                    value: raw.to_string(),
                    layout: layout.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for TimestampValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value();
        write!(f, "{}", self.layout().format(&value))
    }
}
