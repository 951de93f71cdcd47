// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use flagval_core::{FlagValue, Selection, ValidationError};

use crate::common::color_enum;

#[test]
fn accepts_allowed_token() {
    let mut value = color_enum(false);
    value.set("blue").unwrap();
    assert_eq!(value.to_string(), "blue");
}

#[test]
fn rejects_unknown_token_and_keeps_default() {
    let mut value = color_enum(false);
    let err = value.set("purple").unwrap_err();
    assert_eq!(err.value(), Some("purple"));
    assert_eq!(
        err.allowed(),
        Some(&["Red".to_string(), "Green".to_string(), "Blue".to_string()][..])
    );
    assert_eq!(value.to_string(), "Red");
}

#[test]
fn allow_none_accepts_unknown_token_silently() {
    let mut value = color_enum(true);
    value.set("purple").unwrap();
    assert_eq!(value.to_string(), "Red");
    assert_eq!(value.selection(), &Selection::Rejected);
    assert!(value.is_set());
}

#[test]
fn unknown_token_error_is_structured() {
    let mut value = color_enum(false);
    match value.set(" PURPLE") {
        Err(ValidationError::UnknownOption { value, allowed }) => {
            assert_eq!(value, "purple");
            assert_eq!(allowed.join(", "), "Red, Green, Blue");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn three_states_are_distinguishable() {
    let unset = color_enum(true);
    let mut selected = color_enum(true);
    selected.set("red").unwrap();
    let mut rejected = color_enum(true);
    rejected.set("purple").unwrap();

    assert_eq!(unset.selection(), &Selection::Unset);
    assert_eq!(selected.selection(), &Selection::Selected("red".to_string()));
    assert_eq!(rejected.selection(), &Selection::Rejected);

    assert_eq!(unset.to_string(), "Red");
    assert_eq!(selected.to_string(), "red");
    assert_eq!(rejected.to_string(), "Red");
}
