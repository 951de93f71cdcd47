// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use flagval_core::{FlagValue, Layout, TimestampValue, ValidationError};

use crate::common::utc;

#[test]
fn canonical_input_round_trips() {
    for raw in [
        "2024-01-02 03:04:05",
        "1999-12-31 23:59:59",
        "2000-02-29 12:00:00",
    ] {
        let mut value = TimestampValue::default();
        value.set(raw).unwrap();
        assert_eq!(value.to_string(), raw);
    }
}

#[test]
fn failed_set_keeps_default() {
    let mut value = TimestampValue::new(utc(2010, 10, 10, 10, 10, 10));
    let err = value.set("not-a-date").unwrap_err();
    assert!(matches!(err, ValidationError::Timestamp { .. }));
    assert_eq!(value.to_string(), "2010-10-10 10:10:10");
}

#[test]
fn failed_set_keeps_previous_value() {
    let mut value = TimestampValue::default();
    value.set("2024-01-02 03:04:05").unwrap();
    assert!(value.set("2024-02-30 00:00:00").is_err());
    assert!(value.set("2024-01-02").is_err());
    assert_eq!(value.to_string(), "2024-01-02 03:04:05");
}

#[test]
fn input_must_match_layout_exactly() {
    let mut value = TimestampValue::new(utc(2010, 10, 10, 10, 10, 10));
    for raw in [
        "2024-1-2 3:4:5",
        " 2024-01-02 03:04:05",
        "+2024-01-02 03:04:05",
    ] {
        let err = value.set(raw).unwrap_err();
        assert!(matches!(err, ValidationError::Timestamp { .. }), "input: {raw:?}");
    }
    assert_eq!(value.to_string(), "2010-10-10 10:10:10");
}

#[test]
fn partial_layouts_round_trip() {
    for (layout, raw) in [
        ("%Y", "2024"),
        ("%Y-%m", "2024-05"),
        ("%m/%d", "05/06"),
        ("%H", "13"),
        ("%Y-%m-%d %H", "2024-01-02 03"),
    ] {
        let mut value = TimestampValue::default().with_format(Layout::new(layout).unwrap());
        value.set(raw).unwrap();
        assert_eq!(value.to_string(), raw, "layout: {layout}");
    }
}

#[test]
fn error_names_expected_layout() {
    let layout = Layout::new("%d.%m.%Y").unwrap();
    let mut value = TimestampValue::default().with_format(layout);
    let err = value.set("2024-01-02").unwrap_err();
    assert_eq!(
        err.to_string(),
        "2024-01-02 cannot be parsed as a timestamp (expected format: %d.%m.%Y)"
    );
}
