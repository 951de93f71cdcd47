// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::{DateTime, TimeZone, Utc};
use flagval_core::{EnumListValue, EnumValue};

/// A UTC instant from its calendar fields.
#[must_use]
pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s)
        .single()
        .expect("fixture instant must be valid")
}

/// A single choice out of `Red`, `Green` and `Blue`, defaulting to `Red`.
#[must_use]
pub fn color_enum(allow_none: bool) -> EnumValue {
    EnumValue::new(["Red", "Green", "Blue"], "Red").allow_none(allow_none)
}

/// A list out of `a`, `b` and `c` with an empty default.
#[must_use]
pub fn abc_list(allow_empty: bool) -> EnumListValue {
    EnumListValue::new(["a", "b", "c"], Vec::<String>::new()).allow_empty(allow_empty)
}
