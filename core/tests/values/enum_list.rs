// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use flagval_core::{EnumListValue, FlagValue, ValidationError};

use crate::common::abc_list;

#[test]
fn normalizes_tokens_in_input_order() {
    let mut value = abc_list(false);
    value.set(" A, b ,, c").unwrap();
    assert_eq!(value.values(), vec!["a", "b", "c"]);
    assert_eq!(value.to_string(), "a,b,c");
}

#[test]
fn bad_token_stores_nothing() {
    let mut value = abc_list(false);
    let err = value.set("a,x").unwrap_err();
    assert!(matches!(
        err,
        ValidationError::UnknownListOption { value: ref token, .. } if token.as_str() == "x"
    ));
    assert!(!value.is_set());
    assert_eq!(value.to_string(), "");
}

#[test]
fn blank_input_depends_on_allow_empty() {
    let mut strict = abc_list(false);
    assert!(matches!(
        strict.set("   "),
        Err(ValidationError::EmptySelection { .. })
    ));
    assert!(!strict.is_set());

    let mut lenient = abc_list(true);
    lenient.set("   ").unwrap();
    assert_eq!(lenient.to_string(), "");
    assert!(lenient.is_set());
}

#[test]
fn empty_selection_overrides_default() {
    let mut value = EnumListValue::new(["a", "b"], ["a", "b"]).allow_empty(true);
    assert_eq!(value.to_string(), "a,b");
    value.set("").unwrap();
    assert_eq!(value.to_string(), "");
}

#[test]
fn parse_is_lighter_than_set() {
    let value = abc_list(false);
    assert_eq!(value.parse(" A,zzz, ,b"), vec![" A", "zzz", "b"]);
}

#[test]
fn rendering_is_pure() {
    let value = EnumListValue::new(["A", "B"], [" B ", "A"]);
    let first = value.to_string();
    let second = value.to_string();
    assert_eq!(first, "b,a");
    assert_eq!(first, second);
    assert_eq!(value, EnumListValue::new(["A", "B"], [" B ", "A"]));
}
